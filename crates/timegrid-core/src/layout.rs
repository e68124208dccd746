//! Layout entry point: cluster the visible events, pack each cluster into
//! columns, and merge the results.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::columns::pack_columns;
use crate::error::{LayoutError, Result};
use crate::event::CalendarEvent;
use crate::overlap::partition_clusters;

/// Layout position for one event: which column it occupies and how many
/// columns its cluster uses in total.
///
/// Positions are abstract — mapping columns to pixels is the renderer's
/// job. `column < total_columns` always holds, and every member of one
/// cluster carries the same `total_columns`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLayout {
    pub event_id: String,
    pub column: usize,
    pub total_columns: usize,
}

/// Compute column layout for a set of events visible on one display day.
///
/// Partitions the events into overlap clusters, packs each cluster
/// independently, and returns one entry per input event. Entries come out
/// in processing order (start asc, longer first on ties, then id); callers
/// should look positions up by `event_id`.
///
/// The computation is pure and deterministic: the same events produce the
/// same layout whatever order they arrive in.
///
/// # Errors
/// Returns `LayoutError::DuplicateEventId` if two input events share an
/// id. Well-formed input never fails.
pub fn layout_events(events: &[CalendarEvent]) -> Result<Vec<EventLayout>> {
    let mut seen = HashSet::new();
    for event in events {
        if !seen.insert(event.id.as_str()) {
            return Err(LayoutError::DuplicateEventId(event.id.clone()));
        }
    }

    let mut layouts = Vec::with_capacity(events.len());
    for cluster in partition_clusters(events) {
        layouts.extend(pack_columns(&cluster));
    }

    Ok(layouts)
}
