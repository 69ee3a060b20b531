//! Built-in reference lists for the aircraft table.
//!
//! Order is the suggestion priority: the first matching entry wins.

pub const SVC: &[&str] = &[
    "ATC405", "ATC401", "07", "05", "02", "08", "01", "ATC111", "ATC201", "ATC113", "ATC109",
    "ATC117", "ATC157", "ATC133", "ATC219", "ATC209", "ATC215", "ATC213", "ATC137", "ATC119",
    "ATC107", "ATC203", "ATC125", "ATC103", "KQA488", "THY603", "ETh827", "KQA482", "QTR1499",
    "ETH805", "AZB504", "LAM460", "AZW438", "OTRI476", "UAE725", "LNK032", "KQA484", "OMA705",
    "RWD442", "FDB1687", "UGD320", "ETH803", "KQA486", "MWI042", "KLM571", "ATC110/1", "ATC200",
    "ATC112/3", "ATC108/9", "ATC116/7", "ATC157", "ATC132/3", "ATC218/9", "ATC208", "ATC214/5",
    "ATC213", "ATC136/7", "ATC118/9", "ATC156", "ATC106/7", "ATC202", "ATC404", "ATC400",
    "АТС124/5", "ATC102/3", "PRF717/8", "PRF400/1", "PRF713/2", "PRF420/1", "PRF416/7",
    "PRF642", "PRF612/3", "PRF422/3", "PRF721/0",
];

pub const REG: &[&str] = &[
    "5HKKC", "5HCGZ", "5HMXY", "5HAAA", "5HAAC", "5HAAE", "5HAAF", "5HAAG", "5HFLS", "5HFOX",
    "5HFZA", "5HGAS", "5HGEN", "5HGUS", "5HHEL", "5HIHN", "5HIKA", "5HIKI", "5HJAM", "5HAAU",
    "5HJOE", "5HAAJ", "5HAAK", "5HAAL", "5HAAN", "5HAAH", "5HAAP", "5HAAQ", "5HABC", "5HAIR",
    "5HAJK", "5HALO", "5HAMH", "5HAMI", "5HARD", "5HATP", "5HBAT", "5HBEE", "5HBIG", "5HBTZ",
    "5HBYO", "5HCCT", "5HCFA", "5HCPT", "5HCTJ", "5HDJS", "5HDTS", "5HEWA", "5HEXP", "5HFAR",
    "5HMYM", "5HZRP", "5HZOE", "5HKEG", "5HKJS", "5HZOG", "5HLEO", "5HLUV", "5HZAI", "5HYES",
    "5HMAD", "5HMEA", "5HMEB", "5HMEC", "5HMED", "5HMEE", "5HMEF", "5HMEK", "5HMFH", "5HWKF",
    "5HMIK", "5HMPK", "5HTZC", "5HTWF", "5HTPK", "5HMSO", "5HTPC", "5HTGF", "5HTEC", "5HTCJ",
    "5HTCH", "5HKIH", "5HTCF", "5HTCP", "5HTCR", "5HTCI", "5HTCE", "5HTCK", "5HTCD", "5HTCB",
    "5HTCO", "5HTCM", "5HTAQ", "5HTAM", "5HSTJ", "5HSPC", "5HMWA", "5HSPA", "5HSGR", "5HMXG",
    "5HPWG", "5HPWE", "5HPWD", "5HPWC", "5HPWB", "5HMWF", "5HPOP", "5HPOA", "5HOIL", "5HMZU",
    "5HMZT", "5HMZD", "5HMZC", "5HMYK", "5HMYJ", "5HMYI", "5HMYH", "5HMYG", "5HTCL", "5HLCL",
    "5HELI", "5HLPD", "5HMEI", "5HLAB", "5HMYO", "5HMYP", "5HMYR", "5HMYQ", "5HMYN", "5HAAV",
    "5HMYS", "5HMHN", "5HUNT", "5HNIT", "5HNIA", "5HSPD", "5HOYO", "5HTFM", "5HSPE", "5HMEM",
    "5HMEH", "5HMEL", "5HTFB", "5HTFA", "5HAAX", "5HTCQ", "5HVAN", "5HMZE", "5HFLA", "5HFLB",
    "5HMYT", "5HTFG", "5HBLN", "5HHAD", "5HNAR", "5HKMA", "5HLUA", "5HMEP", "5HMEO", "5HSRA",
    "5HMYY", "5HPTJ", "5HMYU", "5HGEO", "5HMZR", "5HAZH", "5HULR", "5HIGH", "5HMEN", "5HMEJ",
    "5HLVV", "5HUSU", "5HCDL", "5HBIL", "TC", "ET", "A7", "C9", "Z", "A6", "ZS", "A4O", "9XR",
    "A6", "5Y", "PH", "5X",
];

pub const TYPE: &[&str] = &[
    "B39M", "B788", "BCS3", "DH8D", "E145", "B737", "E120", "A330", "CRJ9", "E145", "B773",
    "E190", "DH8D", "B38M", "AT45", "B77W", "PC12", "DH8A", "DH8B", "C172", "C206", "B789",
    "AT75", "C208", "F406", "F50", "AS32",
];

pub const FROM: &[&str] = &[
    "OMDB", "VABB", "HTMW", "HKJK", "HTIR", "HTDO", "HTDA", "HTGW", "HTZA", "HTSO", "HTKA",
    "FAOR", "HTKJ", "FZQA", "LTFM", "HAAB", "PQPB", "FVRG", "OTHH", "HRYR", "HUEN", "FWCL",
    "FLSK", "HTMT", "OOMS", "HTAR", "EHAM", "HTAI", "HTAL", "HTAR", "HTAS", "HTBA", "HTBB",
    "HTBE", "HTBF", "HTBG", "HTBH", "HTBJ", "HTBM", "HTBN", "HTBO", "HTBS", "HTBT", "HTBU",
    "HTBV", "HTBX", "HTBY", "HTCF", "HTCH", "HTCM", "HTCV", "HTDA", "HTDB", "HTDG", "HTDK",
    "HTDN", "HTDO", "HTDU", "HTDY", "HTEB", "HTEE", "HTEJ", "HTEN", "HTEQ", "HTER", "HTES",
    "HTEY", "HTFE", "HTFI", "HTFR", "HTGA", "HTGE", "HTGL", "HTGM", "HTGO", "HTGP", "HTGR",
    "HTGS", "HTGT", "HTGU", "HTGV", "HTGW", "HTGZ", "HTHB", "HTHG", "HTHI", "HTHM", "HTHR",
    "HTHS", "HTHY", "HTIA", "HTIF", "HTIH", "HTIK", "HTIL", "HTIR", "HTIW", "HTIY", "HTJN",
    "HTJO", "HTJR", "HTKA", "HTKB", "HTKC", "HTKD", "HTKE", "HTKF", "HTKG", "HTKH", "HTKI",
    "HTKJ", "HTKL", "HTKM", "HTKN", "HTKO", "HTKP", "HTKR", "HTKS", "HTKT", "HTKU", "HTKX",
    "HTLA", "HTLB", "HTLD", "HTLE", "HTLI", "HTLJ", "HTLK", "HTLL", "HTLM", "HTLN", "HTLO",
    "HTLP", "HTLR", "HTLS", "HTLT", "HTLU", "HTLV", "HTLW", "HTLY", "HTMA", "HTMD", "HTME",
    "HTMF", "HTMG", "HTMH", "HTMI", "HTMJ", "HTMK", "HTML", "HTMM", "HTMN", "HTMO", "HTMP",
    "HTMR", "HTMS", "HTMT", "HTMU", "HTMV", "HTMW", "HTMX", "HTMY", "HTNA", "HTNB", "HTND",
    "HTNF", "HTNG", "HTNH", "HTNJ", "HTNK", "HTNM", "HTNN", "HTNO", "HTNR", "HTNW", "HTNY",
    "HTNZ", "HTOM", "HTON", "HTOP", "HTOR", "HTOZ", "HTPD", "HTPE", "HTPP", "HTPT", "HTPW",
    "HTRA", "HTRB", "HTRE", "HTRG", "HTRL", "HTRN", "HTRS", "HTRU", "HTRX", "HTRZ", "HTSA",
    "HTSB", "HTSD", "HTSE", "HTSG", "HTSH", "HTSI", "HTSJ", "HTSK", "HTSL", "HTSM", "HTSN",
    "HTSO", "HTSS", "HTST", "HTSU", "HTSW", "HTSY", "HTTA", "HTTB", "HTTC", "HTTE", "HTTF",
    "HTTG", "HTTJ", "HTTL", "HTTN", "HTTO", "HTTR", "HTTS", "HTTU", "HTTV", "HTTX", "HTTY",
    "HTTZ", "HTUC", "HTUF", "HTUG", "HTUK", "HTUN", "HTUO", "HTUP", "HTUR", "HTUS", "HTUT",
    "HTUU", "HTUV", "HTUW", "HTUZ", "HTVR", "HTWA", "HTWB", "HTWH", "HTWI", "HTWK", "HTWS",
    "HTYA", "HTYE", "HTYO", "HTYW", "HTYY", "HTZA", "HTZI", "HTZW",
];

pub const ADDRESSEE: &[&str] = &[
    "DEP/HTAI", "DEP/HTAL", "DEP/HTAR", "DEP/HTAS", "DEP/HTBA", "DEP/HTBB", "DEP/HTBE",
    "DEP/HTBF", "DEP/HTBG", "DEP/HTBH", "DEP/HTBJ", "DEP/HTBM", "DEP/HTBN", "DEP/HTBO",
    "DEP/HTBS", "DEP/HTBT", "DEP/HTBU", "DEP/HTBV", "DEP/HTBX", "DEP/HTBY", "DEP/HTCF",
    "DEP/HTCH", "DEP/HTCM", "DEP/HTCV", "DEP/HTDA", "DEP/HTDB", "DEP/HTDG", "DEP/HTDK",
    "DEP/HTDN", "DEP/HTDO", "DEP/HTDU", "DEP/HTDY", "DEP/HTEB", "DEP/HTEE", "DEP/HTEJ",
    "DEP/HTEN", "DEP/HTEQ", "DEP/HTER", "DEP/HTES", "DEP/HTEY", "DEP/HTFE", "DEP/HTFI",
    "DEP/HTFR", "DEP/HTGA", "DEP/HTGE", "DEP/HTGL", "DEP/HTGM", "DEP/HTGO", "DEP/HTGP",
    "DEP/HTGR", "DEP/HTGS", "DEP/HTGT", "DEP/HTGU", "DEP/HTGV", "DEP/HTGW", "DEP/HTGZ",
    "DEP/HTHB", "DEP/HTHG", "DEP/HTHI", "DEP/HTHM", "DEP/HTHR", "DEP/HTHS", "DEP/HTHY",
    "DEP/HTIA", "DEP/HTIF", "DEP/HTIH", "DEP/HTIK", "DEP/HTIL", "DEP/HTIR", "DEP/HTIW",
    "DEP/HTIY", "DEP/HTJN", "DEP/HTJO", "DEP/HTJR", "DEP/HTKA", "DEP/HTKB", "DEP/HTKC",
    "DEP/HTKD", "DEP/HTKE", "DEP/HTKF", "DEP/HTKG", "DEP/HTKH", "DEP/HTKI", "DEP/HTKJ",
    "DEP/HTKL", "DEP/HTKM", "DEP/HTKN", "DEP/HTKO", "DEP/HTKP", "DEP/HTKR", "DEP/HTKS",
    "DEP/HTKT", "DEP/HTKU", "DEP/HTKX", "DEP/HTLA", "DEP/HTLB", "DEP/HTLD", "DEP/HTLE",
    "DEP/HTLI", "DEP/HTLJ", "DEP/HTLK", "DEP/HTLL", "DEP/HTLM", "DEP/HTLN", "DEP/HTLO",
    "DEP/HTLP", "DEP/HTLR", "DEP/HTLS", "DEP/HTLT", "DEP/HTLU", "DEP/HTLV", "DEP/HTLW",
    "DEP/HTLY", "DEP/HTMA", "DEP/HTMD", "DEP/HTME", "DEP/HTMF", "DEP/HTMG", "DEP/HTMH",
    "DEP/HTMI", "DEP/HTMJ", "DEP/HTMK", "DEP/HTML", "DEP/HTMM", "DEP/HTMN", "DEP/HTMO",
    "DEP/HTMP", "DEP/HTMR", "DEP/HTMS", "DEP/HTMT", "DEP/HTMU", "DEP/HTMV", "DEP/HTMW",
    "DEP/HTMX", "DEP/HTMY", "DEP/HTNA", "DEP/HTNB", "DEP/HTND", "DEP/HTNF", "DEP/HTNG",
    "DEP/HTNH", "DEP/HTNJ", "DEP/HTNK", "DEP/HTNM", "DEP/HTNN", "DEP/HTNO", "DEP/HTNR",
    "DEP/HTNW", "DEP/HTNY", "DEP/HTNZ", "DEP/HTOM", "DEP/HTON", "DEP/HTOP", "DEP/HTOR",
    "DEP/HTOZ", "DEP/HTPD", "DEP/HTPE", "DEP/HTPP", "DEP/HTPT", "DEP/HTPW", "DEP/HTRA",
    "DEP/HTRB", "DEP/HTRE", "DEP/HTRG", "DEP/HTRL", "DEP/HTRN", "DEP/HTRS", "DEP/HTRU",
    "DEP/HTRX", "DEP/HTRZ", "DEP/HTSA", "DEP/HTSB", "DEP/HTSD", "DEP/HTSE", "DEP/HTSG",
    "DEP/HTSH", "DEP/HTSI", "DEP/HTSJ", "DEP/HTSK", "DEP/HTSL", "DEP/HTSM", "DEP/HTSN",
    "DEP/HTSO", "DEP/HTSS", "DEP/HTST", "DEP/HTSU", "DEP/HTSW", "DEP/HTSY", "DEP/HTTA",
    "DEP/HTTB", "DEP/HTTC", "DEP/HTTE", "DEP/HTTF", "DEP/HTTG", "DEP/HTTJ", "DEP/HTTL",
    "DEP/HTTN", "DEP/HTTO", "DEP/HTTR", "DEP/HTTS", "DEP/HTTU", "DEP/HTTV", "DEP/HTTX",
    "DEP/HTTY", "DEP/HTTZ", "DEP/HTUC", "DEP/HTUF", "DEP/HTUG", "DEP/HTUK", "DEP/HTUN",
    "DEP/HTUO", "DEP/HTUP", "DEP/HTUR", "DEP/HTUS", "DEP/HTUT", "DEP/HTUU", "DEP/HTUV",
    "DEP/HTUW", "DEP/HTUZ", "DEP/HTVR", "DEP/HTWA", "DEP/HTWB", "DEP/HTWH", "DEP/HTWI",
    "DEP/HTWK", "DEP/HTWS", "DEP/HTYA", "DEP/HTYE", "DEP/HTYO", "DEP/HTYW", "DEP/HTYY",
    "DEP/HTZA", "DEP/HTZI", "DEP/HTZW",
];

pub const DEST: &[&str] = &[
    "OMDB", "VABB", "HTMW", "HKJK", "HTIR", "HTDO", "HTDA", "HTGW", "HTZA", "HTSO", "HTKA",
    "FAOR", "HTKJ", "FZQA", "LTFM", "HAAB", "PQPB", "FVRG", "OTHH", "HRYR", "HUEN", "FWCL",
    "FLSK", "HTMT", "OOMS", "HTAR", "EHAM", "HTAI", "HTAL", "HTAR", "HTAS", "HTBA", "HTBB",
    "HTBE", "HTBF", "HTBG", "HTBH", "HTBJ", "HTBM", "HTBN", "HTBO", "HTBS", "HTBT", "HTBU",
    "HTBV", "HTBX", "HTBY", "HTCF", "HTCH", "HTCM", "HTCV", "HTDA", "HTDB", "HTDG", "HTDK",
    "HTDN", "HTDO", "HTDU", "HTDY", "HTEB", "HTEE", "HTEJ", "HTEN", "HTEQ", "HTER", "HTES",
    "HTEY", "HTFE", "HTFI", "HTFR", "HTGA", "HTGE", "HTGL", "HTGM", "HTGO", "HTGP", "HTGR",
    "HTGS", "HTGT", "HTGU", "HTGV", "HTGW", "HTGZ", "HTHB", "HTHG", "HTHI", "HTHM", "HTHR",
    "HTHS", "HTHY", "HTIA", "HTIF", "HTIH", "HTIK", "HTIL", "HTIR", "HTIW", "HTIY", "HTJN",
    "HTJO", "HTJR", "HTKA", "HTKB", "HTKC", "HTKD", "HTKE", "HTKF", "HTKG", "HTKH", "HTKI",
    "HTKJ", "HTKL", "HTKM", "HTKN", "HTKO", "HTKP", "HTKR", "HTKS", "HTKT", "HTKU", "HTKX",
    "HTLA", "HTLB", "HTLD", "HTLE", "HTLI", "HTLJ", "HTLK", "HTLL", "HTLM", "HTLN", "HTLO",
    "HTLP", "HTLR", "HTLS", "HTLT", "HTLU", "HTLV", "HTLW", "HTLY", "HTMA", "HTMD", "HTME",
    "HTMF", "HTMG", "HTMH", "HTMI", "HTMJ", "HTMK", "HTML", "HTMM", "HTMN", "HTMO", "HTMP",
    "HTMR", "HTMS", "HTMT", "HTMU", "HTMV", "HTMW", "HTMX", "HTMY", "HTNA", "HTNB", "HTND",
    "HTNF", "HTNG", "HTNH", "HTNJ", "HTNK", "HTNM", "HTNN", "HTNO", "HTNR", "HTNW", "HTNY",
    "HTNZ", "HTOM", "HTON", "HTOP", "HTOR", "HTOZ", "HTPD", "HTPE", "HTPP", "HTPT", "HTPW",
    "HTRA", "HTRB", "HTRE", "HTRG", "HTRL", "HTRN", "HTRS", "HTRU", "HTRX", "HTRZ", "HTSA",
    "HTSB", "HTSD", "HTSE", "HTSG", "HTSH", "HTSI", "HTSJ", "HTSK", "HTSL", "HTSM", "HTSN",
    "HTSO", "HTSS", "HTST", "HTSU", "HTSW", "HTSY", "HTTA", "HTTB", "HTTC", "HTTE", "HTTF",
    "HTTG", "HTTJ", "HTTL", "HTTN", "HTTO", "HTTR", "HTTS", "HTTU", "HTTV", "HTTX", "HTTY",
    "HTTZ", "HTUC", "HTUF", "HTUG", "HTUK", "HTUN", "HTUO", "HTUP", "HTUR", "HTUS", "HTUT",
    "HTUU", "HTUV", "HTUW", "HTUZ", "HTVR", "HTWA", "HTWB", "HTWH", "HTWI", "HTWK", "HTWS",
    "HTYA", "HTYE", "HTYO", "HTYW", "HTYY", "HTZA", "HTZI", "HTZW",
];

/// Header label to list, as the headers read in the table markup
pub const BY_HEADER: &[(&str, &[&str])] = &[
    ("SVC", SVC),
    ("REG", REG),
    ("TYPE", TYPE),
    ("FROM", FROM),
    ("DEST", DEST),
    ("ADDRESSEE\u{2019}S", ADDRESSEE),
];
