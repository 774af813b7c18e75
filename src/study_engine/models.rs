use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RoadmapError};

// ---------------------------------------------------------------------------
// Closed enumerations
// ---------------------------------------------------------------------------

/// Exam the learner is preparing for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExamGoal {
    #[default]
    General,
    NEET,
    JEE,
    SAT,
    University,
    IELTS,
}

impl fmt::Display for ExamGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExamGoal::General    => "General",
            ExamGoal::NEET       => "NEET",
            ExamGoal::JEE        => "JEE",
            ExamGoal::SAT        => "SAT",
            ExamGoal::University => "University",
            ExamGoal::IELTS      => "IELTS",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ExamGoal {
    type Err = RoadmapError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "General"    => Ok(ExamGoal::General),
            "NEET"       => Ok(ExamGoal::NEET),
            "JEE"        => Ok(ExamGoal::JEE),
            "SAT"        => Ok(ExamGoal::SAT),
            "University" => Ok(ExamGoal::University),
            "IELTS"      => Ok(ExamGoal::IELTS),
            _ => Err(RoadmapError::UnknownExamGoal(s.to_string())),
        }
    }
}

/// Density / task-mix policy for a roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    #[serde(rename = "Fast Track")]
    FastTrack,
    Balanced,
    Mastery,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::FastTrack => write!(f, "Fast Track"),
            Strategy::Balanced  => write!(f, "Balanced"),
            Strategy::Mastery   => write!(f, "Mastery"),
        }
    }
}

impl FromStr for Strategy {
    type Err = RoadmapError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Fast Track" => Ok(Strategy::FastTrack),
            "Balanced"   => Ok(Strategy::Balanced),
            "Mastery"    => Ok(Strategy::Mastery),
            _ => Err(RoadmapError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Node count rule and task-type mix for one strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyPolicy {
    /// Added to the number of base topics.
    pub bonus: usize,
    /// Upper bound on the node count.
    pub cap: usize,
    pub learn: f64,
    pub revise: f64,
    pub test: f64,
}

impl StrategyPolicy {
    /// `min(topic_count + bonus, cap)`.
    pub fn node_count(&self, topic_count: usize) -> usize {
        (topic_count + self.bonus).min(self.cap)
    }

    /// Map a uniform draw in `[0, 1)` onto a task type.
    pub fn classify(&self, r: f64) -> NodeType {
        if r > self.learn + self.revise {
            NodeType::Test
        } else if r > self.learn {
            NodeType::Revise
        } else {
            NodeType::Learn
        }
    }
}

impl Strategy {
    pub fn policy(self) -> StrategyPolicy {
        match self {
            Strategy::FastTrack => StrategyPolicy { bonus: 0, cap: 5,  learn: 0.3, revise: 0.2, test: 0.5 },
            Strategy::Balanced  => StrategyPolicy { bonus: 2, cap: 8,  learn: 0.5, revise: 0.3, test: 0.2 },
            Strategy::Mastery   => StrategyPolicy { bonus: 4, cap: 12, learn: 0.6, revise: 0.3, test: 0.1 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    Learn,
    Revise,
    Test,
}

impl NodeType {
    /// Prefix placed in front of the topic to form the node title.
    pub fn title_prefix(self) -> &'static str {
        match self {
            NodeType::Learn  => "",
            NodeType::Revise => "Review: ",
            NodeType::Test   => "Assessment: ",
        }
    }

    /// Verbs used to phrase this type's microtasks.
    pub fn verbs(self) -> &'static [&'static str] {
        match self {
            NodeType::Learn  => &["Read", "Summarize", "Watch Video", "Take Notes"],
            NodeType::Revise => &["Review Flashcards", "Mind Map", "Self-Explain", "Quick Quiz"],
            NodeType::Test   => &["Practice Problems", "Mock Questions", "Error Analysis", "Timed Drill"],
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeType::Learn  => write!(f, "Learn"),
            NodeType::Revise => write!(f, "Revise"),
            NodeType::Test   => write!(f, "Test"),
        }
    }
}

impl FromStr for NodeType {
    type Err = RoadmapError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Learn"  => Ok(NodeType::Learn),
            "Revise" => Ok(NodeType::Revise),
            "Test"   => Ok(NodeType::Test),
            _ => Err(RoadmapError::UnknownNodeType(s.to_string())),
        }
    }
}

/// Ordered so that `Beginner < Moderate < Advanced`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Moderate,
    Advanced,
}

impl Difficulty {
    /// Gamification reward for finishing a node at this level.
    pub fn xp_value(self) -> u32 {
        match self {
            Difficulty::Advanced => 50,
            Difficulty::Moderate => 30,
            Difficulty::Beginner => 15,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Moderate => write!(f, "Moderate"),
            Difficulty::Advanced => write!(f, "Advanced"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = RoadmapError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Beginner" => Ok(Difficulty::Beginner),
            "Moderate" => Ok(Difficulty::Moderate),
            "Advanced" => Ok(Difficulty::Advanced),
            _ => Err(RoadmapError::UnknownDifficulty(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Seed
// ---------------------------------------------------------------------------

/// Caller-supplied seed: a number, or a string hashed down to one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Number(i64),
    Text(String),
}

impl From<i64> for Seed {
    fn from(n: i64) -> Self {
        Seed::Number(n)
    }
}

impl From<u32> for Seed {
    fn from(n: u32) -> Self {
        Seed::Number(i64::from(n))
    }
}

impl From<i32> for Seed {
    fn from(n: i32) -> Self {
        Seed::Number(i64::from(n))
    }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Seed::Text(s.to_string())
    }
}

impl From<String> for Seed {
    fn from(s: String) -> Self {
        Seed::Text(s)
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Input to [`generate`](crate::generate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapConfig {
    #[serde(default)]
    pub exam_goal: ExamGoal,
    pub strategy: Strategy,
    /// Stored for the caller; generation does not read it.
    #[serde(default = "default_daily_minutes")]
    pub daily_minutes: u32,
    /// Pre-extracted plain text of all uploaded notes.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub seed: Option<Seed>,
}

fn default_daily_minutes() -> u32 {
    60
}

impl RoadmapConfig {
    /// Minimal constructor — only the strategy is required.
    ///
    /// Defaults: `General` goal, 60 minutes a day, no content, entropy seed.
    pub fn new(strategy: Strategy) -> Self {
        RoadmapConfig {
            exam_goal: ExamGoal::General,
            strategy,
            daily_minutes: default_daily_minutes(),
            content: None,
            seed: None,
        }
    }

    pub fn with_goal(mut self, goal: ExamGoal) -> Self {
        self.exam_goal = goal;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_seed(mut self, seed: impl Into<Seed>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn with_daily_minutes(mut self, minutes: u32) -> Self {
        self.daily_minutes = minutes;
        self
    }

    /// Parse a config sent by the upload layer and check its invariants.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: RoadmapConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.daily_minutes == 0 {
            return Err(RoadmapError::InvalidDailyMinutes(self.daily_minutes));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Microtask {
    pub id: String,
    pub text: String,
    pub est_min: u32,
    pub is_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapNode {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub est_minutes: u32,
    pub difficulty: Difficulty,
    pub microtasks: Vec<Microtask>,
    pub prerequisites: Vec<String>,
    pub resources: Vec<String>,
    pub progress_pct: u8,
    pub xp_value: u32,
    pub is_expanded: bool,
    /// Topic this node was derived from, before any title prefix.
    pub topic_cluster: String,
}

/// Structural profile of the submitted notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    /// Most prominent first. Empty only when there was nothing to analyze.
    pub topics: Vec<String>,
    /// 1..=10.
    pub complexity_score: u8,
    /// Keyword → occurrence count, in rank order.
    pub keyword_density: IndexMap<String, u32>,
    pub risk_areas: Vec<String>,
}

impl Default for ContentAnalysis {
    fn default() -> Self {
        ContentAnalysis {
            topics: Vec::new(),
            complexity_score: 5,
            keyword_density: IndexMap::new(),
            risk_areas: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_round_trips_through_display() {
        for s in [Strategy::FastTrack, Strategy::Balanced, Strategy::Mastery] {
            assert_eq!(s.to_string().parse::<Strategy>().unwrap(), s);
        }
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let err = "Cram".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, RoadmapError::UnknownStrategy(ref s) if s == "Cram"));
    }

    #[test]
    fn unknown_goal_is_rejected() {
        assert!("GRE".parse::<ExamGoal>().is_err());
        assert_eq!("IELTS".parse::<ExamGoal>().unwrap(), ExamGoal::IELTS);
    }

    #[test]
    fn node_count_follows_policy_table() {
        assert_eq!(Strategy::FastTrack.policy().node_count(4), 4);
        assert_eq!(Strategy::FastTrack.policy().node_count(9), 5);
        assert_eq!(Strategy::Balanced.policy().node_count(4), 6);
        assert_eq!(Strategy::Balanced.policy().node_count(7), 8);
        assert_eq!(Strategy::Mastery.policy().node_count(10), 12);
        assert_eq!(Strategy::Mastery.policy().node_count(3), 7);
    }

    #[test]
    fn classify_uses_cumulative_thresholds() {
        let p = Strategy::Balanced.policy();
        assert_eq!(p.classify(0.10), NodeType::Learn);
        assert_eq!(p.classify(0.50), NodeType::Learn);
        assert_eq!(p.classify(0.60), NodeType::Revise);
        assert_eq!(p.classify(0.95), NodeType::Test);
    }

    #[test]
    fn xp_values_are_fixed() {
        assert_eq!(Difficulty::Beginner.xp_value(), 15);
        assert_eq!(Difficulty::Moderate.xp_value(), 30);
        assert_eq!(Difficulty::Advanced.xp_value(), 50);
    }

    #[test]
    fn config_parses_from_camel_case_json() {
        let cfg = RoadmapConfig::from_json(
            r#"{"examGoal":"JEE","strategy":"Fast Track","dailyMinutes":90,"seed":"exam-week"}"#,
        )
        .unwrap();
        assert_eq!(cfg.exam_goal, ExamGoal::JEE);
        assert_eq!(cfg.strategy, Strategy::FastTrack);
        assert_eq!(cfg.daily_minutes, 90);
        assert_eq!(cfg.seed, Some(Seed::Text("exam-week".into())));
        assert_eq!(cfg.content, None);
    }

    #[test]
    fn config_accepts_numeric_seed() {
        let cfg = RoadmapConfig::from_json(r#"{"strategy":"Mastery","seed":1700000000000}"#).unwrap();
        assert_eq!(cfg.seed, Some(Seed::Number(1_700_000_000_000)));
        assert_eq!(cfg.daily_minutes, 60);
    }

    #[test]
    fn config_rejects_unknown_strategy_and_zero_minutes() {
        assert!(matches!(
            RoadmapConfig::from_json(r#"{"strategy":"Cram"}"#),
            Err(RoadmapError::InvalidConfig(_))
        ));
        assert!(matches!(
            RoadmapConfig::from_json(r#"{"strategy":"Balanced","dailyMinutes":0}"#),
            Err(RoadmapError::InvalidDailyMinutes(0))
        ));
    }

    #[test]
    fn node_serializes_type_field() {
        let node = RoadmapNode {
            id: "node-1".into(),
            title: "Optics".into(),
            node_type: NodeType::Learn,
            est_minutes: 30,
            difficulty: Difficulty::Beginner,
            microtasks: vec![],
            prerequisites: vec![],
            resources: vec!["AI Summary".into()],
            progress_pct: 0,
            xp_value: 15,
            is_expanded: true,
            topic_cluster: "Optics".into(),
        };
        let v = serde_json::to_value(&node).unwrap();
        assert_eq!(v["type"], "Learn");
        assert_eq!(v["estMinutes"], 30);
        assert_eq!(v["topicCluster"], "Optics");
    }
}
