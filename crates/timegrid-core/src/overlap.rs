//! Overlap predicate and cluster partitioning.
//!
//! Two events belong to the same cluster when a chain of pairwise overlaps
//! connects them. Clusters are the connected components of the overlap
//! graph; each one is laid out independently by the column packer.

use std::collections::VecDeque;

use crate::columns::event_order;
use crate::event::CalendarEvent;

/// Whether two events overlap in time, under half-open interval semantics.
///
/// Two intervals overlap iff `a.start < b.end && b.start < a.end`. The
/// strict comparisons mean adjacent events (one ends exactly when the
/// other starts) do NOT overlap, and a zero-duration event overlaps
/// nothing, not even an identical zero-duration event.
///
/// Multi-day events compare by their raw `start`/`end`; any clipping to
/// the display day is a presentation concern and never feeds this check.
pub fn events_overlap(a: &CalendarEvent, b: &CalendarEvent) -> bool {
    a.start < b.end && b.start < a.end
}

/// Partition events into maximal clusters of transitively overlapping
/// events.
///
/// Builds the overlap graph with pairwise checks (O(n²), fine for per-day
/// counts in the tens) and takes its connected components with a BFS.
/// Events are sorted by start time first, so cluster order and member
/// order are deterministic regardless of input order. Every input event
/// lands in exactly one cluster; an event overlapping nothing forms a
/// singleton.
pub fn partition_clusters(events: &[CalendarEvent]) -> Vec<Vec<CalendarEvent>> {
    let mut sorted: Vec<&CalendarEvent> = events.iter().collect();
    sorted.sort_by(|a, b| event_order(a, b));

    let n = sorted.len();
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
    for i in 0..n {
        for j in (i + 1)..n {
            if events_overlap(sorted[i], sorted[j]) {
                adjacency[i].push(j);
                adjacency[j].push(i);
            }
        }
    }

    let mut visited = vec![false; n];
    let mut clusters = Vec::new();

    for seed in 0..n {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;

        // BFS from the seed; member indices come out in sorted order
        // because neighbors are pushed in index order.
        let mut members = Vec::new();
        let mut queue = VecDeque::from([seed]);
        while let Some(i) = queue.pop_front() {
            members.push(i);
            for &j in &adjacency[i] {
                if !visited[j] {
                    visited[j] = true;
                    queue.push_back(j);
                }
            }
        }

        members.sort_unstable();
        clusters.push(members.into_iter().map(|i| sorted[i].clone()).collect());
    }

    clusters
}
