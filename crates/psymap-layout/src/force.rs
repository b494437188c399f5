//! Force-directed layout simulation for the personality map.
//!
//! Implements the classic velocity-Verlet force model: link springs,
//! many-body repulsion, centering, collision avoidance, and independent
//! horizontal/vertical pulls, integrated under a decaying temperature
//! (`alpha`). The simulation is incremental: the host calls [`tick`]
//! once per frame until [`is_settled`] reports rest.
//!
//! # Invariants
//!
//! 1. Determinism: identical nodes/edges/viewport/config produce an
//!    identical position sequence (phyllotaxis seeding, seeded jiggle).
//! 2. Positions stay inside the viewport minus the label margin after
//!    every tick.
//! 3. A pinned node holds exactly its pinned position until released.
//! 4. Ticking an empty or zero-sized layout is a no-op, never a panic.
//!
//! [`tick`]: ForceSimulation::tick
//! [`is_settled`]: ForceSimulation::is_settled

use psymap_core::normalize::TraitEdge;
use psymap_core::{Point, Rect};
use tracing::trace;

// ── Configuration ───────────────────────────────────────────────────

/// Viewport margin reserved for node labels (world units).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Margin {
    fn default() -> Self {
        // Wide right margin: trait names render to the right of nodes.
        Self {
            left: 25.0,
            right: 80.0,
            top: 25.0,
            bottom: 25.0,
        }
    }
}

/// Tuning parameters for the force model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceConfig {
    /// Spring rest length along edges.
    pub link_distance: f64,
    /// Many-body repulsion strength (negative repels).
    pub charge_strength: f64,
    /// Collision radius around every node.
    pub collide_radius: f64,
    /// Horizontal/vertical pull-to-center strength.
    pub axis_strength: f64,
    /// Fraction of the gap to `alpha_target` closed per tick.
    pub alpha_decay: f64,
    /// Fraction of velocity shed per tick.
    pub velocity_decay: f64,
    /// Temperature below which the simulation counts as settled.
    pub alpha_min: f64,
    /// Temperature target while a drag is active.
    pub drag_alpha_target: f64,
    pub margin: Margin,
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            link_distance: 80.0,
            charge_strength: -250.0,
            collide_radius: 35.0,
            axis_strength: 0.2,
            alpha_decay: 0.03,
            velocity_decay: 0.5,
            alpha_min: 0.001,
            drag_alpha_target: 0.3,
            margin: Margin::default(),
        }
    }
}

/// Outcome of [`ForceSimulation::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleStats {
    pub ticks_used: usize,
    pub budget_exceeded: bool,
}

// ── Internal state ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
struct SimNode {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    pinned: Option<Point>,
}

#[derive(Debug, Clone, Copy)]
struct LinkSpring {
    from: usize,
    to: usize,
    /// Spring stiffness: degree-normalized, scaled by relation strength.
    stiffness: f64,
    /// Share of the correction applied to the `to` endpoint.
    bias: f64,
}

/// Deterministic LCG used only to separate coincident nodes.
#[derive(Debug, Clone, Copy)]
struct Lcg(u32);

impl Lcg {
    fn next(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        f64::from(self.0) / f64::from(u32::MAX)
    }

    /// Tiny symmetric offset for coincident points.
    fn jiggle(&mut self) -> f64 {
        (self.next() - 0.5) * 1e-6
    }
}

// ── Simulation ──────────────────────────────────────────────────────

/// Incremental force-directed layout over trait nodes.
///
/// Owns the transient node coordinates exclusively; the source profile is
/// never written back. One simulation instance per rendered map.
#[derive(Debug, Clone)]
pub struct ForceSimulation {
    config: ForceConfig,
    viewport: Rect,
    nodes: Vec<SimNode>,
    links: Vec<LinkSpring>,
    alpha: f64,
    alpha_target: f64,
    rng: Lcg,
}

impl ForceSimulation {
    /// Build a simulation for `node_count` nodes connected by `edges`.
    ///
    /// Nodes are seeded on a deterministic phyllotaxis spiral around the
    /// viewport center. Edge endpoints out of range are ignored (the
    /// normalizer already drops dangling references; this is a second
    /// guard, not an error path).
    #[must_use]
    pub fn new(node_count: usize, edges: &[TraitEdge], viewport: Rect, config: ForceConfig) -> Self {
        let center = viewport.center();
        let initial_radius = 10.0;
        let initial_angle = std::f64::consts::PI * (3.0 - 5.0_f64.sqrt());

        let nodes: Vec<SimNode> = (0..node_count)
            .map(|i| {
                let radius = initial_radius * (0.5 + i as f64).sqrt();
                let angle = i as f64 * initial_angle;
                SimNode {
                    x: center.x + radius * angle.cos(),
                    y: center.y + radius * angle.sin(),
                    vx: 0.0,
                    vy: 0.0,
                    pinned: None,
                }
            })
            .collect();

        let mut degree = vec![0usize; node_count];
        for edge in edges {
            if edge.from < node_count && edge.to < node_count {
                degree[edge.from] += 1;
                degree[edge.to] += 1;
            }
        }

        let links = edges
            .iter()
            .filter(|e| e.from < node_count && e.to < node_count)
            .map(|e| {
                let (df, dt) = (degree[e.from].max(1) as f64, degree[e.to].max(1) as f64);
                LinkSpring {
                    from: e.from,
                    to: e.to,
                    stiffness: (e.strength.clamp(0.0, 100.0) / 100.0) / df.min(dt),
                    bias: df / (df + dt),
                }
            })
            .collect();

        Self {
            config,
            viewport,
            nodes,
            links,
            alpha: 1.0,
            alpha_target: 0.0,
            rng: Lcg(0x9E37_79B9),
        }
    }

    /// Current temperature.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// True once the temperature has decayed below the settle threshold.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.alpha < self.config.alpha_min && self.alpha_target < self.config.alpha_min
    }

    /// Current node positions, in node order.
    #[must_use]
    pub fn positions(&self) -> Vec<Point> {
        self.nodes.iter().map(|n| Point::new(n.x, n.y)).collect()
    }

    /// Position of one node.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<Point> {
        self.nodes.get(index).map(|n| Point::new(n.x, n.y))
    }

    /// Advance one step. No-op on an empty node set or zero-sized
    /// viewport (layout defers until the container has a size).
    pub fn tick(&mut self) {
        if self.nodes.is_empty() || self.viewport.is_empty() {
            return;
        }

        self.alpha += (self.alpha_target - self.alpha) * self.config.alpha_decay;

        self.apply_links();
        self.apply_charge();
        self.apply_center();
        self.apply_collide();
        self.apply_axis_pull();
        self.integrate();
        self.clamp_to_viewport();
    }

    /// Run to rest, bounded by `max_ticks`.
    pub fn settle(&mut self, max_ticks: usize) -> SettleStats {
        let mut ticks_used = 0;
        while !self.is_settled() && ticks_used < max_ticks {
            self.tick();
            ticks_used += 1;
        }
        let budget_exceeded = !self.is_settled();
        trace!(ticks_used, budget_exceeded, "simulation settle");
        SettleStats {
            ticks_used,
            budget_exceeded,
        }
    }

    // ── Drag lifecycle ──────────────────────────────────────────────

    /// Pin a node at its current position and reheat so neighbors keep
    /// adjusting while it is held.
    pub fn begin_drag(&mut self, index: usize) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.pinned = Some(Point::new(node.x, node.y));
            self.alpha_target = self.config.drag_alpha_target;
        }
    }

    /// Move a held node to a new position.
    pub fn drag_to(&mut self, index: usize, position: Point) {
        if let Some(node) = self.nodes.get_mut(index) {
            if node.pinned.is_some() {
                node.pinned = Some(position);
            }
        }
    }

    /// Release a held node and let the layout resettle.
    pub fn end_drag(&mut self, index: usize) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.pinned = None;
        }
        self.alpha_target = 0.0;
    }

    /// Whether a node is currently pinned.
    #[must_use]
    pub fn is_pinned(&self, index: usize) -> bool {
        self.nodes.get(index).is_some_and(|n| n.pinned.is_some())
    }

    // ── Forces ──────────────────────────────────────────────────────

    fn apply_links(&mut self) {
        let alpha = self.alpha;
        let distance = self.config.link_distance;
        for link in &self.links {
            let (s, t) = (self.nodes[link.from], self.nodes[link.to]);
            let mut dx = t.x + t.vx - s.x - s.vx;
            let mut dy = t.y + t.vy - s.y - s.vy;
            if dx == 0.0 && dy == 0.0 {
                dx = self.rng.jiggle();
                dy = self.rng.jiggle();
            }
            let len = (dx * dx + dy * dy).sqrt();
            let k = (len - distance) / len * alpha * link.stiffness;
            let (fx, fy) = (dx * k, dy * k);
            self.nodes[link.to].vx -= fx * link.bias;
            self.nodes[link.to].vy -= fy * link.bias;
            self.nodes[link.from].vx += fx * (1.0 - link.bias);
            self.nodes[link.from].vy += fy * (1.0 - link.bias);
        }
    }

    fn apply_charge(&mut self) {
        let alpha = self.alpha;
        let strength = self.config.charge_strength;
        let n = self.nodes.len();
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let mut dx = self.nodes[j].x - self.nodes[i].x;
                let mut dy = self.nodes[j].y - self.nodes[i].y;
                let mut l2 = dx * dx + dy * dy;
                if l2 == 0.0 {
                    dx = self.rng.jiggle();
                    dy = self.rng.jiggle();
                    l2 = dx * dx + dy * dy;
                }
                // Below unit distance, soften rather than blow up.
                if l2 < 1.0 {
                    l2 = l2.sqrt();
                }
                let w = strength * alpha / l2;
                self.nodes[i].vx += dx * w;
                self.nodes[i].vy += dy * w;
            }
        }
    }

    fn apply_center(&mut self) {
        let n = self.nodes.len() as f64;
        let center = self.viewport.center();
        let (sx, sy) = self
            .nodes
            .iter()
            .fold((0.0, 0.0), |(sx, sy), node| (sx + node.x, sy + node.y));
        let (shift_x, shift_y) = (sx / n - center.x, sy / n - center.y);
        for node in &mut self.nodes {
            node.x -= shift_x;
            node.y -= shift_y;
        }
    }

    fn apply_collide(&mut self) {
        let radius = self.config.collide_radius;
        let min_dist2 = (radius * 2.0) * (radius * 2.0);
        let n = self.nodes.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (self.nodes[i], self.nodes[j]);
                let mut dx = a.x + a.vx - b.x - b.vx;
                let mut dy = a.y + a.vy - b.y - b.vy;
                let mut l2 = dx * dx + dy * dy;
                if l2 >= min_dist2 {
                    continue;
                }
                if l2 == 0.0 {
                    dx = self.rng.jiggle();
                    dy = self.rng.jiggle();
                    l2 = dx * dx + dy * dy;
                }
                let len = l2.sqrt();
                let push = (radius * 2.0 - len) / len;
                let (fx, fy) = (dx * push * 0.5, dy * push * 0.5);
                self.nodes[i].vx += fx;
                self.nodes[i].vy += fy;
                self.nodes[j].vx -= fx;
                self.nodes[j].vy -= fy;
            }
        }
    }

    fn apply_axis_pull(&mut self) {
        let alpha = self.alpha;
        let strength = self.config.axis_strength;
        let center = self.viewport.center();
        for node in &mut self.nodes {
            node.vx += (center.x - node.x) * strength * alpha;
            node.vy += (center.y - node.y) * strength * alpha;
        }
    }

    fn integrate(&mut self) {
        let keep = 1.0 - self.config.velocity_decay;
        for node in &mut self.nodes {
            if let Some(pin) = node.pinned {
                node.x = pin.x;
                node.y = pin.y;
                node.vx = 0.0;
                node.vy = 0.0;
            } else {
                node.vx *= keep;
                node.vy *= keep;
                node.x += node.vx;
                node.y += node.vy;
            }
        }
    }

    fn clamp_to_viewport(&mut self) {
        let m = self.config.margin;
        let (lo_x, hi_x) = clamp_range(
            self.viewport.x + m.left,
            self.viewport.x + self.viewport.width - m.right,
        );
        let (lo_y, hi_y) = clamp_range(
            self.viewport.y + m.top,
            self.viewport.y + self.viewport.height - m.bottom,
        );
        for node in &mut self.nodes {
            node.x = node.x.clamp(lo_x, hi_x);
            node.y = node.y.clamp(lo_y, hi_y);
        }
    }
}

/// Collapse an inverted clamp range (viewport smaller than the margins)
/// to its midpoint.
fn clamp_range(lo: f64, hi: f64) -> (f64, f64) {
    if lo <= hi {
        (lo, hi)
    } else {
        let mid = (lo + hi) / 2.0;
        (mid, mid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use psymap_core::normalize::TraitEdge;
    use psymap_core::profile::ConnectionKind;

    fn edge(from: usize, to: usize, strength: f64) -> TraitEdge {
        TraitEdge {
            from,
            to,
            strength,
            kind: ConnectionKind::Correlation,
            correlation: None,
            description: String::new(),
        }
    }

    fn viewport() -> Rect {
        Rect::sized(600.0, 400.0)
    }

    #[test]
    fn empty_simulation_ticks_without_panic() {
        let mut sim = ForceSimulation::new(0, &[], viewport(), ForceConfig::default());
        sim.tick();
        assert!(sim.positions().is_empty());
    }

    #[test]
    fn zero_viewport_defers() {
        let mut sim =
            ForceSimulation::new(3, &[], Rect::sized(0.0, 0.0), ForceConfig::default());
        let before = sim.positions();
        sim.tick();
        assert_eq!(sim.positions(), before);
        assert_eq!(sim.alpha(), 1.0);
    }

    #[test]
    fn simulation_is_deterministic() {
        let edges = vec![edge(0, 1, 50.0), edge(1, 2, 80.0)];
        let mut a = ForceSimulation::new(3, &edges, viewport(), ForceConfig::default());
        let mut b = ForceSimulation::new(3, &edges, viewport(), ForceConfig::default());
        a.settle(500);
        b.settle(500);
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn settles_within_budget() {
        let edges = vec![edge(0, 1, 50.0)];
        let mut sim = ForceSimulation::new(2, &edges, viewport(), ForceConfig::default());
        let stats = sim.settle(1000);
        assert!(!stats.budget_exceeded, "used {} ticks", stats.ticks_used);
        assert!(sim.is_settled());
    }

    #[test]
    fn positions_respect_label_margin() {
        let mut sim = ForceSimulation::new(8, &[], viewport(), ForceConfig::default());
        sim.settle(1000);
        let m = Margin::default();
        for p in sim.positions() {
            assert!(p.x >= m.left && p.x <= 600.0 - m.right, "x = {}", p.x);
            assert!(p.y >= m.top && p.y <= 400.0 - m.bottom, "y = {}", p.y);
        }
    }

    #[test]
    fn pinned_node_holds_position() {
        let mut sim = ForceSimulation::new(4, &[edge(0, 1, 60.0)], viewport(), ForceConfig::default());
        sim.tick();
        sim.begin_drag(0);
        let held = Point::new(100.0, 100.0);
        sim.drag_to(0, held);
        for _ in 0..10 {
            sim.tick();
        }
        assert_eq!(sim.position(0), Some(held));
        assert!(sim.is_pinned(0));

        sim.end_drag(0);
        assert!(!sim.is_pinned(0));
        sim.settle(2000);
        assert!(sim.is_settled());
    }

    #[test]
    fn drag_reheats_a_settled_layout() {
        let mut sim = ForceSimulation::new(3, &[], viewport(), ForceConfig::default());
        sim.settle(1000);
        assert!(sim.is_settled());
        sim.begin_drag(1);
        assert!(!sim.is_settled());
        sim.end_drag(1);
    }

    #[test]
    fn out_of_range_edges_are_ignored() {
        let mut sim =
            ForceSimulation::new(2, &[edge(0, 7, 50.0)], viewport(), ForceConfig::default());
        sim.settle(100);
    }

    #[test]
    fn link_springs_shape_the_layout() {
        let mut linked =
            ForceSimulation::new(3, &[edge(0, 1, 100.0)], viewport(), ForceConfig::default());
        let mut free = ForceSimulation::new(3, &[], viewport(), ForceConfig::default());
        linked.settle(2000);
        free.settle(2000);
        assert_ne!(linked.positions(), free.positions());

        // Nodes never stack: collision keeps every pair separated.
        let p = linked.positions();
        for i in 0..p.len() {
            for j in (i + 1)..p.len() {
                assert!(p[i].distance(p[j]) > 10.0, "nodes {i} and {j} collapsed");
            }
        }
    }
}
