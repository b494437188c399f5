#![forbid(unsafe_code)]

//! PsyMap demo: decode fixture payloads and render every view to ANSI
//! stdout.
//!
//! Sections: the force-directed personality map (with a simulated hover
//! tooltip), the letter-preference radars and interpretation, the
//! attachment cross and rule-resolved style, and the history trend
//! chart.

mod assets;

use psymap_core::{Profile, Rect, ResultPayload, aggregate_history, normalize};
use psymap_interpret::interpret;
use psymap_layout::breakpoints::{BreakpointTracker, Breakpoints};
use psymap_layout::cross::{CrossSpec, resolve_cross};
use psymap_layout::force::{ForceConfig, ForceSimulation};
use psymap_layout::radar::{preference_data, trait_data, type_distribution_data};
use psymap_render::cross::render_cross;
use psymap_render::history::{render_history, render_history_legend};
use psymap_render::panels::{interpretation_lines, trait_cards};
use psymap_render::radar::render_radar;
use psymap_render::{
    Buffer, MapController, PointerEvent, palette, render_map, render_map_legend,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Demo terminal width in cells.
const WIDTH: u16 = 100;

fn section(title: &str) {
    println!("\n\u{2500}\u{2500} {title} \u{2500}\u{2500}\n");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tracker = BreakpointTracker::new(Breakpoints::default());
    if let Some(class) = tracker.observe(WIDTH) {
        info!(?class, width = WIDTH, "container size observed");
    }
    let style = tracker
        .current()
        .map(|class| class.radar_style())
        .unwrap_or_else(|| psymap_layout::breakpoints::Breakpoint::Desktop.radar_style());

    render_dynamic_profile();
    render_letter_result(style);
    render_attachment_result(style);
    render_history_section();
}

fn render_dynamic_profile() {
    section("Dynamic personality map");
    let profile = match Profile::from_json(assets::dynamic_profile()) {
        Ok(profile) => profile,
        Err(err) => {
            eprintln!("failed to load profile: {err}");
            return;
        }
    };
    let normalized = normalize(&profile);
    let viewport = Rect::sized(600.0, 400.0);
    let mut sim = ForceSimulation::new(
        normalized.nodes.len(),
        &normalized.edges,
        viewport,
        ForceConfig::default(),
    );
    let stats = sim.settle(600);
    info!(ticks = stats.ticks_used, "map layout settled");

    let mut buf = Buffer::new(WIDTH, 26);
    let area = buf.area();
    render_map(
        &mut buf,
        area,
        &normalized,
        &sim.positions(),
        viewport,
        None,
    );
    print!("{}", buf.to_ansi());

    let mut legend = Buffer::new(WIDTH, 2);
    let legend_area = legend.area();
    render_map_legend(&mut legend, legend_area);
    print!("{}", legend.to_ansi());

    // Simulated hover over the first node, tooltip clamped in-view.
    let mut controller = MapController::new();
    if let Some(target) = sim.position(0) {
        controller.handle(PointerEvent::Moved(target), &mut sim, &normalized, viewport);
    }
    if let Some(tooltip) = controller.tooltip() {
        println!(
            "\nhover @ ({:.0}, {:.0}):",
            tooltip.origin.x, tooltip.origin.y
        );
        for line in &tooltip.lines {
            println!("  {line}");
        }
    }

    let inconsistencies = psymap_render::panels::inconsistency_lines(&profile);
    if !inconsistencies.is_empty() {
        println!("\nDetected inconsistencies:");
        for line in &inconsistencies {
            println!("  {line}");
        }
    }
}

fn render_letter_result(style: psymap_layout::breakpoints::RadarStyle) {
    section("Letter preferences (8 axes)");
    let result = match ResultPayload::from_json(assets::letter_result()) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("failed to load result: {err}");
            return;
        }
    };
    let traits = &result.personality_map.traits;

    let mut buf = Buffer::new(WIDTH / 2, 20);
    let area = buf.area();
    render_radar(
        &mut buf,
        area,
        &preference_data(traits),
        style,
        palette::RADAR_STROKE,
    );
    print!("{}", buf.to_ansi());

    section("Category distribution (16 axes, amplified)");
    let mut buf = Buffer::new(WIDTH / 2, 20);
    let area = buf.area();
    render_radar(
        &mut buf,
        area,
        &type_distribution_data(traits),
        style,
        palette::RADAR_STROKE,
    );
    print!("{}", buf.to_ansi());

    if let Some(interp) = interpret(&result.personality_map, &result.test.result_definitions) {
        section("Interpretation");
        for line in interpretation_lines(&interp) {
            println!("{line}");
        }
    }
}

fn render_attachment_result(style: psymap_layout::breakpoints::RadarStyle) {
    section("Attachment style space");
    let result = match ResultPayload::from_json(assets::attachment_result()) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("failed to load result: {err}");
            return;
        }
    };
    let traits = &result.personality_map.traits;

    let spec = CrossSpec::attachment();
    let point = resolve_cross(&spec, traits);
    let mut buf = Buffer::new(WIDTH / 2, 16);
    let area = buf.area();
    render_cross(&mut buf, area, &spec, point);
    print!("{}", buf.to_ansi());
    println!("anxiety {:.0}, avoidance {:.0}", point.y, point.x);

    section("Dimension radar");
    let mut buf = Buffer::new(WIDTH / 2, 18);
    let area = buf.area();
    render_radar(
        &mut buf,
        area,
        &trait_data(traits),
        style,
        palette::RADAR_STROKE,
    );
    print!("{}", buf.to_ansi());

    if let Some(interp) = interpret(&result.personality_map, &result.test.result_definitions) {
        section("Dominant style");
        for line in interpretation_lines(&interp) {
            println!("{line}");
        }
    }

    section("Dimension cards");
    for card in trait_cards(&normalize(&result.personality_map)) {
        println!("{}: {} ({})", card.name, card.score_display, card.level);
    }
}

fn render_history_section() {
    section("History");
    let results: Vec<ResultPayload> = match serde_json::from_str(assets::history()) {
        Ok(results) => results,
        Err(err) => {
            eprintln!("failed to load history: {err}");
            return;
        }
    };
    let series = aggregate_history(&results);
    let mut buf = Buffer::new(WIDTH, 14);
    let area = buf.area();
    render_history(&mut buf, area, &series);
    print!("{}", buf.to_ansi());

    let mut legend = Buffer::new(WIDTH, 2);
    let legend_area = legend.area();
    render_history_legend(&mut legend, legend_area, &series);
    print!("{}", legend.to_ansi());
}
