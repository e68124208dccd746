//! Greedy column assignment within one overlap cluster.
//!
//! Classic first-fit interval coloring: members are processed in start
//! order and each takes the lowest-numbered column whose occupants it does
//! not overlap. Processing by left endpoint makes the greedy choice
//! optimal for interval graphs, so the final column count equals the
//! largest number of events alive at any single instant.

use std::cmp::Ordering;

use crate::event::CalendarEvent;
use crate::layout::EventLayout;
use crate::overlap::events_overlap;

/// Total processing order: start asc, then duration desc (longer events
/// first), then id asc.
///
/// The longer-first secondary key keeps long events in the leftmost
/// columns when several start together; the id key makes the order total
/// so identical inputs always produce identical layouts, whatever their
/// iteration order.
pub(crate) fn event_order(a: &CalendarEvent, b: &CalendarEvent) -> Ordering {
    a.start
        .cmp(&b.start)
        .then_with(|| b.duration().cmp(&a.duration()))
        .then_with(|| a.id.cmp(&b.id))
}

/// Assign columns to every member of one cluster.
///
/// The column arena is rebuilt from scratch per cluster — nothing carries
/// over between clusters. Returns one entry per member, in processing
/// order, all stamped with the cluster's final column count.
pub fn pack_columns(cluster: &[CalendarEvent]) -> Vec<EventLayout> {
    // Singleton fast path: one member, one column.
    if let [only] = cluster {
        return vec![EventLayout {
            event_id: only.id.clone(),
            column: 0,
            total_columns: 1,
        }];
    }

    let mut members: Vec<&CalendarEvent> = cluster.iter().collect();
    members.sort_by(|a, b| event_order(a, b));

    // Columns hold indices into `members`; assignments[i] is the column
    // of members[i].
    let mut columns: Vec<Vec<usize>> = Vec::new();
    let mut assignments: Vec<usize> = Vec::with_capacity(members.len());

    for (i, event) in members.iter().enumerate() {
        let slot = columns
            .iter()
            .position(|col| col.iter().all(|&j| !events_overlap(event, members[j])));

        let column = match slot {
            Some(column) => column,
            None => {
                columns.push(Vec::new());
                columns.len() - 1
            }
        };

        columns[column].push(i);
        assignments.push(column);
    }

    // The final column count applies to every member, including those
    // assigned before later columns existed.
    let total_columns = columns.len();
    members
        .iter()
        .zip(assignments)
        .map(|(event, column)| EventLayout {
            event_id: event.id.clone(),
            column,
            total_columns,
        })
        .collect()
}
