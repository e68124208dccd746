//! WASM bindings for timegrid-core.
//!
//! Exposes the overlap layout engine to JavaScript via `wasm-bindgen`. All
//! complex types cross the boundary as JSON strings: callers pass an array
//! of `{id, title, start, end, color}` event objects and get back an array
//! of `{event_id, column, total_columns}` layout entries.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p timegrid-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/timegrid_wasm.wasm
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use timegrid_core::{CalendarEvent, EventLayout};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Input format for events passed from JavaScript; timestamps arrive as
/// strings and are parsed by the core boundary.
#[derive(Deserialize)]
struct EventInput {
    id: String,
    title: String,
    start: String,
    end: String,
    #[serde(default)]
    color: String,
}

#[derive(Serialize)]
struct LayoutDto {
    event_id: String,
    column: usize,
    total_columns: usize,
}

impl From<&EventLayout> for LayoutDto {
    fn from(l: &EventLayout) -> Self {
        Self {
            event_id: l.event_id.clone(),
            column: l.column,
            total_columns: l.total_columns,
        }
    }
}

/// Convert a JSON array of event objects into `Vec<CalendarEvent>`.
fn parse_events_json(json: &str) -> Result<Vec<CalendarEvent>, JsValue> {
    let inputs: Vec<EventInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid events JSON: {}", e)))?;

    inputs
        .into_iter()
        .map(|input| {
            CalendarEvent::parse(input.id, input.title, &input.start, &input.end, input.color)
                .map_err(|e| JsValue::from_str(&e.to_string()))
        })
        .collect()
}

fn layouts_to_json(layouts: &[EventLayout]) -> Result<String, JsValue> {
    let dtos: Vec<LayoutDto> = layouts.iter().map(LayoutDto::from).collect();
    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute column layout for a JSON event list.
///
/// Returns a JSON string containing an array of
/// `{event_id, column, total_columns}` objects, one per input event.
#[wasm_bindgen(js_name = "layoutEvents")]
pub fn layout_events(events_json: &str) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;

    let layouts =
        timegrid_core::layout_events(&events).map_err(|e| JsValue::from_str(&e.to_string()))?;

    layouts_to_json(&layouts)
}

/// Compute column layout for the events visible on one display day.
///
/// `date` is a calendar date string (`YYYY-MM-DD`); events outside that
/// day's half-open window are dropped before layout.
#[wasm_bindgen(js_name = "layoutDay")]
pub fn layout_day(events_json: &str, date: &str) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let date: NaiveDate = date
        .parse()
        .map_err(|_| JsValue::from_str(&format!("Invalid date '{}': expected YYYY-MM-DD", date)))?;

    let layouts =
        timegrid_core::layout_day(&events, date).map_err(|e| JsValue::from_str(&e.to_string()))?;

    layouts_to_json(&layouts)
}
