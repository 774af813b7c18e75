//! End-to-end demo of the roadmap generator.
//!
//! Run with: `cargo run --example demo`
//! Set `RUST_LOG=study_roadmap_gen=debug` to see the engine's tracing output.
//!
//! 1. **Content insights**: the sample notes are analyzed and their topics,
//!    complexity, top keywords and risk areas are printed.
//!
//! 2. **All three strategies**: one roadmap per strategy from the same notes
//!    and seed, so the output is reproducible.
//!
//! 3. **Progress**: a few microtasks are ticked off and the summary printed.

use study_roadmap_gen::{
    analyze, generate, to_client_payload, tracker, ExamGoal, RoadmapConfig, RoadmapNode,
    Strategy,
};
use tracing_subscriber::EnvFilter;

const NOTES: &str = "\
Cell Structure
The cell membrane controls what enters and leaves the cell.
Mitosis and Meiosis
Remember the phases: prophase, metaphase, anaphase, telophase.
Genetic Inheritance
Mendel's laws explain inheritance; exceptions include incomplete dominance.
Enzyme Kinetics
The Michaelis-Menten formula relates reaction rate to substrate concentration.
";

fn print_roadmap(nodes: &[RoadmapNode]) {
    for node in nodes {
        let marker = if node.is_expanded { "▾" } else { "▸" };
        println!(
            "  {marker} {:<8} {:<38} {:<9} {:>3} min  +{} XP",
            node.id, node.title, node.difficulty, node.est_minutes, node.xp_value
        );
        if node.is_expanded {
            for task in &node.microtasks {
                println!("        [ ] {} ({} min)", task.text, task.est_min);
            }
        }
        println!("        resources: {}", node.resources.join(", "));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // ── Content insights ───────────────────────────────────────────────────
    let insights = analyze(NOTES);
    println!();
    println!("══ Content insights ══");
    println!("  Topics:     {}", insights.topics.join(" | "));
    println!("  Complexity: {}/10", insights.complexity_score);
    let top: Vec<String> = insights
        .keyword_density
        .iter()
        .take(5)
        .map(|(k, n)| format!("{k}×{n}"))
        .collect();
    println!("  Keywords:   {}", top.join(", "));
    println!("  Risk areas: {}", insights.risk_areas.join(", "));

    // ── One roadmap per strategy ───────────────────────────────────────────
    for strategy in [Strategy::FastTrack, Strategy::Balanced, Strategy::Mastery] {
        let config = RoadmapConfig::new(strategy)
            .with_goal(ExamGoal::NEET)
            .with_content(NOTES)
            .with_seed("biology-week-1");
        let nodes = generate(&config);
        println!();
        println!("══ {} — {} nodes ══", strategy, nodes.len());
        print_roadmap(&nodes);
    }

    // ── Progress ───────────────────────────────────────────────────────────
    let config = RoadmapConfig::new(Strategy::Balanced).with_content(NOTES).with_seed(42);
    let mut nodes = generate(&config);
    let first_tasks: Vec<String> = nodes[0].microtasks.iter().map(|m| m.id.clone()).collect();
    for id in &first_tasks {
        if let Err(err) = tracker::toggle_microtask(&mut nodes, "node-1", id) {
            eprintln!("could not tick {id}: {err}");
        }
    }
    let summary = tracker::summarize(&nodes);
    println!();
    println!("══ Progress ══");
    println!(
        "  {}% overall, {}/{} XP earned, {} min planned",
        summary.overall_progress, summary.earned_xp, summary.total_xp, summary.total_minutes
    );

    let payload = to_client_payload(&nodes, &analyze(NOTES));
    match serde_json::to_string_pretty(&payload["summary"]) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("could not render summary: {err}"),
    }
}
