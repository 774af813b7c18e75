//! Error type shared by the boundary parsers, the random source and the tracker.
//!
//! Generation and analysis never fail; everything here is either a rejected
//! input at the API boundary or a caller addressing something that is not there.

/// Every failure the crate can report.
#[derive(Debug, thiserror::Error)]
pub enum RoadmapError {
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("unknown exam goal: {0}")]
    UnknownExamGoal(String),

    #[error("unknown node type: {0}")]
    UnknownNodeType(String),

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// `pick` was asked to choose from an empty slice.
    #[error("cannot pick from an empty sequence")]
    EmptySequence,

    #[error("daily minutes must be positive (got {0})")]
    InvalidDailyMinutes(u32),

    #[error("invalid roadmap config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("microtask {microtask} not found in node {node}")]
    MicrotaskNotFound { node: String, microtask: String },

    #[error("index {index} out of range for roadmap of {len} nodes")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, RoadmapError>;
