//! # study_roadmap_gen
//!
//! An offline, deterministic study-roadmap generator.
//!
//! Feed it the plain text of a learner's notes and a strategy; it profiles the
//! notes (topics, keyword density, complexity, risk areas) and lays out a
//! linear chain of study nodes, each with microtasks, time estimates,
//! resources and an XP reward.
//!
//! ## How it works
//!
//! 1. Build a [`RoadmapConfig`] with a strategy, and optionally content, an
//!    exam goal and a seed.
//! 2. Call [`generate`]. The engine runs [`analyze`] on the content, seeds a
//!    [`SeededSource`] and walks the strategy's node budget, drawing task
//!    types, microtasks and resources from the seeded source.
//! 3. The returned `Vec<RoadmapNode>` is yours; use the `tracker` helpers to
//!    tick off microtasks or reorder nodes.
//!
//! ## Key features
//!
//! - **Deterministic**: `seed: Some(..)` reproduces the exact roadmap. Number
//!   and string seeds give the same sequences as the web client.
//! - **Total**: empty notes still produce a roadmap from the default topics.
//! - **Injectable entropy**: unseeded runs read an [`EntropySource`]
//!   (wall clock by default), so that path is testable too.
//!
//! ## Quick start
//!
//! ```rust
//! use study_roadmap_gen::{analyze, generate, RoadmapConfig, Strategy};
//!
//! let notes = "Kinematics\nVectors and Scalars\nProjectile Motion\n";
//! let config = RoadmapConfig::new(Strategy::Balanced)
//!     .with_content(notes)
//!     .with_seed(42);
//!
//! let roadmap = generate(&config);
//! assert_eq!(roadmap.len(), 5);
//! assert_eq!(roadmap[0].title, "Kinematics");
//!
//! for node in &roadmap {
//!     println!("{} [{} / {}] {} min", node.title, node.node_type, node.difficulty, node.est_minutes);
//! }
//!
//! let insights = analyze(notes);
//! println!("complexity {}", insights.complexity_score);
//! ```

pub mod client_adapter;
pub mod error;
pub mod study_engine;

// Convenience re-exports so callers can use `study_roadmap_gen::generate`
// directly without reaching into `study_engine::`.
pub use client_adapter::to_client_payload;
pub use error::RoadmapError;
pub use study_engine::{
    analyze, generate, generate_with_analysis, generate_with_entropy, tracker, ContentAnalysis,
    Difficulty, EntropySource, ExamGoal, FixedEntropy, Microtask, NodeType, RoadmapConfig,
    RoadmapNode, Seed, SeededSource, Strategy, SystemClock,
};
