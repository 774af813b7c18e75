//! Core study engine — content analysis, seeded randomness and roadmap building.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: enums, config, roadmap nodes, content analysis |
//! | `rng`       | mulberry32 `SeededSource` and the `EntropySource` fallback |
//! | `analyzer`  | Keyword ranking, header detection, complexity and risk areas |
//! | `helpers`   | Per-node builders: titles, difficulty staircase, microtasks, resources |
//! | `generator` | Entry points `generate()` / `generate_with_entropy()` |
//! | `tracker`   | Progress bookkeeping on a roadmap the caller owns |

pub mod analyzer;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod rng;
pub mod tracker;

pub use analyzer::analyze;
pub use generator::{generate, generate_with_analysis, generate_with_entropy};
pub use models::{
    ContentAnalysis, Difficulty, ExamGoal, Microtask, NodeType, RoadmapConfig, RoadmapNode,
    Seed, Strategy, StrategyPolicy,
};
pub use rng::{EntropySource, FixedEntropy, SeededSource, SystemClock};
