//! Property-based invariant tests for the PsyMap layout engines.
//!
//! These verify invariants that must hold for **any** profile and
//! viewport:
//!
//! 1. Force simulation is deterministic.
//! 2. Node positions respect the label margin after every tick.
//! 3. A pinned node holds exactly its pinned position.
//! 4. Ticking empty/zero-sized layouts never panics.
//! 5. 16-category estimates lie in [0, 100] before amplification.
//! 6. Amplified values lie in [floor, 100].
//! 7. Tooltip placement keeps the box inside the viewport.
//! 8. Breakpoint classification is monotonic in width.
//! 9. Radar vertices never leave the outer ring.

use proptest::prelude::*;
use psymap_core::normalize::TraitEdge;
use psymap_core::profile::{ConnectionKind, TraitInfo, TraitMap};
use psymap_core::{Point, Rect};
use psymap_layout::breakpoints::Breakpoints;
use psymap_layout::force::{ForceConfig, ForceSimulation, Margin};
use psymap_layout::radar::{AMPLIFY_FLOOR, RadarDatum, radar_geometry, type_distribution};
use psymap_layout::tooltip::place_tooltip;

// ── Helpers ─────────────────────────────────────────────────────────────

fn edges(node_count: usize) -> impl Strategy<Value = Vec<TraitEdge>> {
    if node_count < 2 {
        return Just(Vec::new()).boxed();
    }
    proptest::collection::vec(
        (0..node_count, 0..node_count, 0.0f64..120.0),
        0..node_count * 2,
    )
    .prop_map(|list| {
        list.into_iter()
            .filter(|(a, b, _)| a != b)
            .map(|(from, to, strength)| TraitEdge {
                from,
                to,
                strength,
                kind: ConnectionKind::Correlation,
                correlation: None,
                description: String::new(),
            })
            .collect()
    })
    .boxed()
}

fn viewport() -> impl Strategy<Value = Rect> {
    (200.0f64..1000.0, 150.0f64..700.0).prop_map(|(w, h)| Rect::sized(w, h))
}

fn letter_scores() -> impl Strategy<Value = TraitMap> {
    proptest::collection::vec(0.0f64..=100.0, 8).prop_map(|scores| {
        ["E", "I", "S", "N", "T", "F", "J", "P"]
            .iter()
            .zip(scores)
            .map(|(name, score)| (name.to_string(), TraitInfo::with_score(score)))
            .collect()
    })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Determinism: same input always produces the same trajectory
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn simulation_is_deterministic(
        n in 0usize..12,
        vp in viewport(),
        ticks in 1usize..120,
    ) {
        let edges = Vec::new();
        let mut a = ForceSimulation::new(n, &edges, vp, ForceConfig::default());
        let mut b = ForceSimulation::new(n, &edges, vp, ForceConfig::default());
        for _ in 0..ticks {
            a.tick();
            b.tick();
        }
        prop_assert_eq!(a.positions(), b.positions());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Label margin containment after every tick
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn positions_stay_inside_the_margin(
        (n, edges) in (2usize..10).prop_flat_map(|n| (Just(n), edges(n))),
        vp in viewport(),
        ticks in 1usize..80,
    ) {
        let mut sim = ForceSimulation::new(n, &edges, vp, ForceConfig::default());
        let m = Margin::default();
        for _ in 0..ticks {
            sim.tick();
            for p in sim.positions() {
                prop_assert!(p.x >= vp.x + m.left - 1e-9 && p.x <= vp.x + vp.width - m.right + 1e-9);
                prop_assert!(p.y >= vp.y + m.top - 1e-9 && p.y <= vp.y + vp.height - m.bottom + 1e-9);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Pinned nodes hold their position
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn pinned_node_is_immovable(
        n in 2usize..8,
        vp in viewport(),
        fx in 30.0f64..115.0,
        fy in 30.0f64..115.0,
    ) {
        let mut sim = ForceSimulation::new(n, &[], vp, ForceConfig::default());
        sim.begin_drag(0);
        let target = Point::new(vp.x + fx, vp.y + fy);
        sim.drag_to(0, target);
        for _ in 0..30 {
            sim.tick();
        }
        prop_assert_eq!(sim.position(0), Some(target));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Degenerate layouts never panic
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn degenerate_layouts_are_noops() {
    let mut empty = ForceSimulation::new(0, &[], Rect::sized(100.0, 100.0), ForceConfig::default());
    empty.tick();
    let mut flat = ForceSimulation::new(5, &[], Rect::sized(0.0, 0.0), ForceConfig::default());
    flat.tick();
    assert_eq!(flat.positions().len(), 5);
}

// ═════════════════════════════════════════════════════════════════════════
// 5-6. 16-category estimates and amplification bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn type_estimates_bound(traits in letter_scores()) {
        for est in type_distribution(&traits) {
            prop_assert!((0.0..=100.0).contains(&est.estimate), "{:?}", est);
            prop_assert!((AMPLIFY_FLOOR..=100.0).contains(&est.amplified), "{:?}", est);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Tooltip containment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn tooltip_box_stays_inside_the_viewport(
        (vw, vh) in (300.0f64..1600.0, 300.0f64..1000.0),
        (cx_frac, cy_frac) in (0.0f64..=1.0, 0.0f64..=1.0),
        (bw, bh) in (10.0f64..280.0, 10.0f64..280.0),
        padding in 0.0f64..24.0,
    ) {
        let viewport = Rect::sized(vw, vh);
        let cursor = Point::new(vw * cx_frac, vh * cy_frac);
        let origin = place_tooltip(cursor, bw, bh, viewport, padding);
        prop_assert!(origin.x >= 0.0, "origin {origin:?}");
        prop_assert!(origin.y >= 0.0, "origin {origin:?}");
        prop_assert!(origin.x + bw <= vw + 1e-9, "origin {origin:?} box {bw}");
        prop_assert!(origin.y + bh <= vh + 1e-9, "origin {origin:?} box {bh}");
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Breakpoint monotonicity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn breakpoints_are_monotonic(
        small_max in 1u16..200,
        extra in 1u16..200,
        widths in proptest::collection::vec(0u16..1000, 2..40),
    ) {
        let bp = Breakpoints { small_max, tablet_max: small_max + extra };
        let mut sorted = widths;
        sorted.sort_unstable();
        let classes: Vec<_> = sorted.iter().map(|w| bp.classify(*w)).collect();
        for pair in classes.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. Radar vertices never leave the outer ring
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn radar_vertices_are_bounded(
        values in proptest::collection::vec(0.0f64..=100.0, 1..20),
        (w, h) in (60.0f64..800.0, 60.0f64..800.0),
    ) {
        let data: Vec<RadarDatum> = values
            .iter()
            .enumerate()
            .map(|(i, v)| RadarDatum::new(format!("axis-{i}"), *v))
            .collect();
        let Some(geo) = radar_geometry(&data, Rect::sized(w, h), 5, 8.0, 1.0) else {
            return Ok(());
        };
        for vertex in &geo.vertices {
            prop_assert!(vertex.distance(geo.center) <= geo.radius + 1e-9);
        }
    }
}
