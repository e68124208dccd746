//! # timegrid-core
//!
//! Deterministic overlap layout engine for time-grid calendar views.
//!
//! Given the events visible on one display day, the engine assigns every
//! event a `(column, total_columns)` pair so that overlapping events render
//! side-by-side without visual collision, using the minimum number of
//! columns per overlap cluster. The computation is pure and stateless: it
//! is re-run from scratch whenever the visible event set changes.
//!
//! ## Modules
//!
//! - [`event`] — event type and the timestamp parsing boundary
//! - [`overlap`] — overlap predicate and cluster partitioning
//! - [`columns`] — greedy column assignment within one cluster
//! - [`layout`] — `layout_events`, the public entry point
//! - [`grid`] — day windows, view date ranges, and navigation
//! - [`error`] — error types

pub mod columns;
pub mod error;
pub mod event;
pub mod grid;
pub mod layout;
pub mod overlap;

pub use error::LayoutError;
pub use event::CalendarEvent;
pub use grid::{layout_day, view_dates, DayWindow, ViewKind};
pub use layout::{layout_events, EventLayout};
pub use overlap::{events_overlap, partition_clusters};
