//! Caller-side progress bookkeeping on a generated roadmap.
//!
//! The generator hands out a value snapshot; these helpers mutate that
//! snapshot the way the study dashboard does (ticking microtasks, expanding
//! nodes, drag-to-reorder). Ids and prerequisites are never rewritten.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Result, RoadmapError};
use crate::study_engine::models::{Difficulty, NodeType, RoadmapNode};

fn find_node<'a>(nodes: &'a mut [RoadmapNode], node_id: &str) -> Result<&'a mut RoadmapNode> {
    nodes
        .iter_mut()
        .find(|n| n.id == node_id)
        .ok_or_else(|| RoadmapError::NodeNotFound(node_id.to_string()))
}

/// Share of completed microtasks, 0..=100.
pub fn microtask_progress(node: &RoadmapNode) -> u8 {
    let total = node.microtasks.len();
    if total == 0 {
        return 0;
    }
    let done = node.microtasks.iter().filter(|m| m.is_complete).count();
    (100.0 * done as f64 / total as f64).round() as u8
}

/// Flip one microtask and refresh its node's progress. Returns the new state.
pub fn toggle_microtask(nodes: &mut [RoadmapNode], node_id: &str, microtask_id: &str) -> Result<bool> {
    let node = find_node(nodes, node_id)?;
    let task = node
        .microtasks
        .iter_mut()
        .find(|m| m.id == microtask_id)
        .ok_or_else(|| RoadmapError::MicrotaskNotFound {
            node: node_id.to_string(),
            microtask: microtask_id.to_string(),
        })?;
    task.is_complete = !task.is_complete;
    let now = task.is_complete;
    node.progress_pct = microtask_progress(node);
    Ok(now)
}

pub fn set_progress(node: &mut RoadmapNode, pct: u8) {
    node.progress_pct = pct.min(100);
}

pub fn toggle_expanded(nodes: &mut [RoadmapNode], node_id: &str) -> Result<bool> {
    let node = find_node(nodes, node_id)?;
    node.is_expanded = !node.is_expanded;
    Ok(node.is_expanded)
}

/// Move the node at `from` so it ends up at `to`.
pub fn move_node(nodes: &mut Vec<RoadmapNode>, from: usize, to: usize) -> Result<()> {
    let len = nodes.len();
    for index in [from, to] {
        if index >= len {
            return Err(RoadmapError::IndexOutOfRange { index, len });
        }
    }
    let node = nodes.remove(from);
    nodes.insert(to, node);
    Ok(())
}

/// XP of every node that has reached 100%.
pub fn earned_xp(nodes: &[RoadmapNode]) -> u32 {
    nodes.iter().filter(|n| n.progress_pct >= 100).map(|n| n.xp_value).sum()
}

pub fn total_minutes(nodes: &[RoadmapNode]) -> u32 {
    nodes.iter().map(|n| n.est_minutes).sum()
}

/// Mean node progress, rounded. 0 for an empty roadmap.
pub fn overall_progress(nodes: &[RoadmapNode]) -> u8 {
    if nodes.is_empty() {
        return 0;
    }
    let sum: u32 = nodes.iter().map(|n| u32::from(n.progress_pct)).sum();
    (f64::from(sum) / nodes.len() as f64).round() as u8
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapSummary {
    pub node_count: usize,
    pub total_minutes: u32,
    pub total_xp: u32,
    pub earned_xp: u32,
    pub overall_progress: u8,
    pub by_type: BTreeMap<String, usize>,
    pub by_difficulty: BTreeMap<String, usize>,
}

pub fn summarize(nodes: &[RoadmapNode]) -> RoadmapSummary {
    let mut by_type = BTreeMap::new();
    for t in [NodeType::Learn, NodeType::Revise, NodeType::Test] {
        by_type.insert(t.to_string(), nodes.iter().filter(|n| n.node_type == t).count());
    }
    let mut by_difficulty = BTreeMap::new();
    for d in [Difficulty::Beginner, Difficulty::Moderate, Difficulty::Advanced] {
        by_difficulty.insert(d.to_string(), nodes.iter().filter(|n| n.difficulty == d).count());
    }
    RoadmapSummary {
        node_count: nodes.len(),
        total_minutes: total_minutes(nodes),
        total_xp: nodes.iter().map(|n| n.xp_value).sum(),
        earned_xp: earned_xp(nodes),
        overall_progress: overall_progress(nodes),
        by_type,
        by_difficulty,
    }
}
