use chrono::NaiveDate;
use flightgrid_core::{
    snapshot_filename, CellMarkers, CellPosition, ColumnLayout, ColumnSpec, DaySelectors,
    EditBuffer, EditorConfig, Key, Modifiers, Side, SnapshotGuard, TableEditor, TableError,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use wasm_bindgen::prelude::*;

/// Structured error object for JavaScript
#[derive(Debug, Serialize, PartialEq)]
pub struct JsTableError {
    code: String,
    message: String,
}

impl From<TableError> for JsTableError {
    fn from(err: TableError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

fn to_js_error(err: TableError) -> JsValue {
    web_sys::console::warn_1(&format!("flightgrid: {}", err).into());
    let js_error = JsTableError::from(err);
    serde_wasm_bindgen::to_value(&js_error).unwrap_or(JsValue::NULL)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Column definition as the host reads it from the header row
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnData {
    pub header: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub numeric: bool,
}

impl From<ColumnData> for ColumnSpec {
    fn from(data: ColumnData) -> Self {
        let markers = data
            .classes
            .into_iter()
            .fold(CellMarkers::new(), |m, class| m.with_class(class))
            .with_numeric(data.numeric);
        ColumnSpec::new(data.header, markers)
    }
}

/// Parse a JSON array of columns; `None` means the standard aircraft table
pub fn parse_layout(json: Option<&str>) -> Result<ColumnLayout, TableError> {
    match json {
        None => Ok(ColumnLayout::aircraft_table()),
        Some(json) => {
            let columns: Vec<ColumnData> = serde_json::from_str(json)?;
            if columns.is_empty() {
                return Err(TableError::InvalidConfig("layout has no columns".to_string()));
            }
            Ok(ColumnLayout::new(columns.into_iter().map(ColumnSpec::from).collect()))
        }
    }
}

pub fn parse_side(side: &str) -> Result<Side, TableError> {
    match side {
        "inbound" => Ok(Side::Inbound),
        "outbound" => Ok(Side::Outbound),
        other => Err(TableError::InvalidConfig(format!("unknown side {:?}", other))),
    }
}

/// Row range returned by an append
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendedRows {
    pub start: usize,
    pub end: usize,
}

fn today_utc() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_utc_full_year() as i32,
        now.get_utc_month() + 1,
        now.get_utc_date(),
    )
}

fn today_local() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
}

/// Every aircraft table on the page plus the shared date/day selectors
#[wasm_bindgen]
pub struct FlightBoard {
    config: Arc<EditorConfig>,
    tables: Vec<TableEditor>,
    days: DaySelectors,
}

impl FlightBoard {
    fn table(&self, table: usize) -> Result<&TableEditor, JsValue> {
        self.tables
            .get(table)
            .ok_or_else(|| JsValue::from_str(&format!("no table {}", table)))
    }

    fn table_mut(&mut self, table: usize) -> Result<&mut TableEditor, JsValue> {
        self.tables
            .get_mut(table)
            .ok_or_else(|| JsValue::from_str(&format!("no table {}", table)))
    }
}

#[wasm_bindgen]
impl FlightBoard {
    /// Create a board from an optional JSON configuration
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<FlightBoard, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) => EditorConfig::from_json(json).map_err(to_js_error)?,
            None => EditorConfig::default(),
        };
        let today = today_utc().unwrap_or_default();
        Ok(Self {
            config: Arc::new(config),
            tables: Vec::new(),
            days: DaySelectors::today(today),
        })
    }

    /// Register a table; returns its index
    #[wasm_bindgen(js_name = addTable)]
    pub fn add_table(&mut self, layout_json: Option<String>) -> Result<usize, JsValue> {
        let layout = parse_layout(layout_json.as_deref()).map_err(to_js_error)?;
        self.tables.push(TableEditor::new(layout, self.config.clone()));
        Ok(self.tables.len() - 1)
    }

    #[wasm_bindgen(js_name = tableCount)]
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    #[wasm_bindgen(js_name = rowCount)]
    pub fn row_count(&self, table: usize) -> Result<usize, JsValue> {
        Ok(self.table(table)?.grid().row_count())
    }

    /// Append the configured batch of rows to a table
    #[wasm_bindgen(js_name = appendRows)]
    pub fn append_rows(&mut self, table: usize) -> Result<JsValue, JsValue> {
        let range = self.table_mut(table)?.append_rows();
        to_js(&AppendedRows {
            start: range.start,
            end: range.end,
        })
    }

    #[wasm_bindgen(js_name = getCell)]
    pub fn get_cell(&self, table: usize, row: usize, col: usize) -> Result<JsValue, JsValue> {
        let cell = self
            .table(table)?
            .cell(CellPosition::new(row, col))
            .map_err(to_js_error)?;
        to_js(cell)
    }

    #[wasm_bindgen(js_name = focusCell)]
    pub fn focus_cell(&mut self, table: usize, row: usize, col: usize) -> Result<JsValue, JsValue> {
        let left = self
            .table_mut(table)?
            .focus(CellPosition::new(row, col))
            .map_err(to_js_error)?;
        to_js(&left)
    }

    /// Text changed; `cursor` is the caret offset in characters
    pub fn input(
        &mut self,
        table: usize,
        row: usize,
        col: usize,
        text: &str,
        cursor: usize,
    ) -> Result<JsValue, JsValue> {
        let outcome = self
            .table_mut(table)?
            .input(CellPosition::new(row, col), EditBuffer::new(text, cursor))
            .map_err(to_js_error)?;
        to_js(&outcome)
    }

    pub fn blur(&mut self, table: usize, row: usize, col: usize) -> Result<JsValue, JsValue> {
        let outcome = self
            .table_mut(table)?
            .blur(CellPosition::new(row, col))
            .map_err(to_js_error)?;
        to_js(&outcome)
    }

    /// Keydown with a DOM `KeyboardEvent.key` name
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(
        &mut self,
        table: usize,
        row: usize,
        col: usize,
        key: &str,
        shift: bool,
    ) -> Result<JsValue, JsValue> {
        let outcome = self
            .table_mut(table)?
            .key_down(
                CellPosition::new(row, col),
                Key::from_dom(key),
                Modifiers::new().with_shift(shift),
            )
            .map_err(to_js_error)?;
        to_js(&outcome)
    }

    #[wasm_bindgen(js_name = appendControlVisible)]
    pub fn append_control_visible(&self, table: usize) -> Result<bool, JsValue> {
        Ok(self.table(table)?.append_control().is_visible())
    }

    /// Current date/day selector values
    pub fn days(&self) -> Result<JsValue, JsValue> {
        to_js(&self.days)
    }

    /// A date input changed (`YYYY-MM-DD`); returns both selectors
    #[wasm_bindgen(js_name = setDate)]
    pub fn set_date(&mut self, side: &str, value: &str) -> Result<JsValue, JsValue> {
        let side = parse_side(side).map_err(to_js_error)?;
        self.days.set_date_str(side, value).map_err(to_js_error)?;
        to_js(&self.days)
    }

    /// A day dropdown changed; returns both selectors
    #[wasm_bindgen(js_name = setDay)]
    pub fn set_day(&mut self, side: &str, value: &str) -> Result<JsValue, JsValue> {
        let side = parse_side(side).map_err(to_js_error)?;
        self.days.set_day(side, value);
        to_js(&self.days)
    }

    /// Run `serialize(filename)` with every append control hidden.
    ///
    /// Controls are restored afterwards even if `serialize` throws.
    #[wasm_bindgen(js_name = exportSnapshot)]
    pub fn export_snapshot(&mut self, serialize: &js_sys::Function) -> Result<String, JsValue> {
        let date = today_local().unwrap_or_default();
        let guard = SnapshotGuard::begin(&mut self.tables, date);
        let filename = guard.filename().to_string();
        serialize.call1(&JsValue::NULL, &JsValue::from_str(&filename))?;
        drop(guard);
        Ok(filename)
    }

    #[wasm_bindgen(js_name = offlineManifest)]
    pub fn offline_manifest(&self) -> Result<JsValue, JsValue> {
        to_js(&self.config.offline)
    }
}

/// Snapshot filename for a `YYYY-MM-DD` date
#[wasm_bindgen(js_name = snapshotFilename)]
pub fn snapshot_filename_for(date: &str) -> Result<String, JsValue> {
    let date = flightgrid_core::calendar::parse_date(date).map_err(to_js_error)?;
    Ok(snapshot_filename(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightgrid_core::ColumnRole;

    #[test]
    fn test_parse_layout_default() {
        let layout = parse_layout(None).unwrap();
        assert_eq!(layout, ColumnLayout::aircraft_table());
    }

    #[test]
    fn test_parse_layout_from_header_json() {
        let json = r#"[
            {"header": "AIM", "classes": ["aim-cell"], "numeric": true},
            {"header": " SVC "},
            {"header": "ETA", "numeric": true},
            {"header": "POB", "classes": ["pob-cell"]}
        ]"#;
        let layout = parse_layout(Some(json)).unwrap();
        assert_eq!(layout.len(), 4);
        assert_eq!(layout.role(0), Some(ColumnRole::Sequence));
        assert_eq!(layout.header(1), Some("SVC"));
        assert_eq!(layout.role(2), Some(ColumnRole::Numeric4));
        assert_eq!(layout.role(3), Some(ColumnRole::Count));
    }

    #[test]
    fn test_parse_layout_errors() {
        assert_eq!(parse_layout(Some("[]")).unwrap_err().code(), "INVALID_CONFIG");
        assert_eq!(parse_layout(Some("{")).unwrap_err().code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_parse_side() {
        assert_eq!(parse_side("inbound").unwrap(), Side::Inbound);
        assert_eq!(parse_side("outbound").unwrap(), Side::Outbound);
        assert!(parse_side("sideways").is_err());
    }

    #[test]
    fn test_js_error_shape() {
        let err = JsTableError::from(TableError::CellOutOfBounds { row: 1, col: 2 });
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "CELL_OUT_OF_BOUNDS");
        assert_eq!(json["message"], "cell (1, 2) is outside the grid");
    }

    #[test]
    fn test_appended_rows_json() {
        let json = serde_json::to_string(&AppendedRows { start: 5, end: 10 }).unwrap();
        assert_eq!(json, r#"{"start":5,"end":10}"#);
    }
}
