//! Property-based tests for the layout engine using proptest.
//!
//! These verify the layout contract for *any* per-day event set, not just
//! the hand-picked scenarios in `layout_tests.rs`.

use std::collections::HashMap;

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use timegrid_core::{layout_events, partition_clusters, CalendarEvent, EventLayout};

// ---------------------------------------------------------------------------
// Strategies — generate per-day event sets at minute resolution
// ---------------------------------------------------------------------------

/// Up to 12 events on 2026-03-01: start minute in [0, 1440), duration in
/// [0, 480] minutes. Zero durations are deliberately included. Ids come
/// from the position, so they are always unique.
fn arb_events() -> impl Strategy<Value = Vec<CalendarEvent>> {
    prop::collection::vec((0i64..1440, 0i64..=480), 0..=12).prop_map(|params| {
        let midnight = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        params
            .into_iter()
            .enumerate()
            .map(|(index, (start_min, dur_min))| {
                let start = midnight + Duration::minutes(start_min);
                CalendarEvent {
                    id: format!("ev-{index}"),
                    title: format!("Event {index}"),
                    start,
                    end: start + Duration::minutes(dur_min),
                    color: "#60a5fa".to_string(),
                }
            })
            .collect()
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn overlaps(a: &CalendarEvent, b: &CalendarEvent) -> bool {
    a.start < b.end && b.start < a.end
}

/// Largest number of cluster members alive at any single instant. For
/// interval sets the maximum is always reached at some member's start.
fn clique_number(cluster: &[CalendarEvent]) -> usize {
    cluster
        .iter()
        .map(|probe| {
            cluster
                .iter()
                .filter(|other| other.start <= probe.start && probe.start < other.end)
                .count()
        })
        .max()
        .unwrap_or(0)
        .max(1)
}

fn by_id(layouts: &[EventLayout]) -> HashMap<&str, &EventLayout> {
    layouts.iter().map(|l| (l.event_id.as_str(), l)).collect()
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: Bijection — exactly one layout entry per input event
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn one_entry_per_event(events in arb_events()) {
        let layouts = layout_events(&events).unwrap();

        prop_assert_eq!(layouts.len(), events.len());
        let ids = by_id(&layouts);
        prop_assert_eq!(ids.len(), events.len(), "entry ids must be unique");
        for event in &events {
            prop_assert!(
                ids.contains_key(event.id.as_str()),
                "missing entry for {}",
                event.id
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: No collision — same column within a cluster never overlaps
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn same_column_never_overlaps(events in arb_events()) {
        let layouts = layout_events(&events).unwrap();
        let ids = by_id(&layouts);

        for cluster in partition_clusters(&events) {
            for (i, a) in cluster.iter().enumerate() {
                for b in &cluster[i + 1..] {
                    let la = ids[a.id.as_str()];
                    let lb = ids[b.id.as_str()];
                    if la.column == lb.column {
                        prop_assert!(
                            !overlaps(a, b),
                            "{} and {} share column {} but overlap",
                            a.id,
                            b.id,
                            la.column
                        );
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Minimality — total_columns equals the cluster clique number
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn total_columns_is_minimal(events in arb_events()) {
        let layouts = layout_events(&events).unwrap();
        let ids = by_id(&layouts);

        for cluster in partition_clusters(&events) {
            let expected = clique_number(&cluster);
            for member in &cluster {
                let layout = ids[member.id.as_str()];
                prop_assert_eq!(
                    layout.total_columns,
                    expected,
                    "cluster of {} should use exactly {} columns",
                    cluster.len(),
                    expected
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: column < total_columns, and total_columns >= 1
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn columns_stay_in_bounds(events in arb_events()) {
        let layouts = layout_events(&events).unwrap();

        for layout in &layouts {
            prop_assert!(layout.total_columns >= 1);
            prop_assert!(
                layout.column < layout.total_columns,
                "{}: column {} >= total {}",
                layout.event_id,
                layout.column,
                layout.total_columns
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: Determinism — input order never changes the layout
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn layout_ignores_input_order(events in arb_events(), seed in any::<u64>()) {
        let mut shuffled = events.clone();
        // Cheap deterministic shuffle driven by the seed.
        let n = shuffled.len();
        if n > 1 {
            let mut state = seed | 1;
            for i in (1..n).rev() {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let j = (state >> 33) as usize % (i + 1);
                shuffled.swap(i, j);
            }
        }

        let original = layout_events(&events).unwrap();
        let reordered = layout_events(&shuffled).unwrap();

        prop_assert_eq!(original, reordered);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Zero-duration events are always isolated singletons
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn zero_duration_is_isolated(events in arb_events()) {
        let layouts = layout_events(&events).unwrap();
        let ids = by_id(&layouts);

        for event in events.iter().filter(|e| e.start == e.end) {
            let layout = ids[event.id.as_str()];
            prop_assert_eq!(layout.column, 0);
            prop_assert_eq!(
                layout.total_columns,
                1,
                "zero-duration {} must be a singleton",
                &event.id
            );
        }
    }
}
