//! Builders the generator uses to assemble each node.
//!
//! ## RNG ordering
//!
//! Per node the generator draws, in this order: the task-type roll, the
//! microtask count, one duration per microtask, the resource count, then one
//! index per resource. Reordering these calls changes every seeded roadmap.

use crate::study_engine::{
    models::{Difficulty, Microtask, NodeType},
    rng::SeededSource,
};

/// Resource labels a node can point the learner to.
pub const RESOURCE_POOL: [&str; 7] = [
    "AI Summary",
    "Visual Analogy",
    "Flashcard Deck",
    "Practice Quiz",
    "Video Lecture",
    "Concept Map",
    "Deep Dive Paper",
];

/// `node-<n>`, 1-based.
pub fn node_id(index: usize) -> String {
    format!("node-{}", index + 1)
}

pub fn title(node_type: NodeType, topic: &str) -> String {
    format!("{}{}", node_type.title_prefix(), topic)
}

/// Position-driven difficulty staircase.
///
/// The thresholds stay as floats; `index` is compared against them unrounded.
pub fn difficulty_at(index: usize, node_count: usize, complexity_score: u8) -> Difficulty {
    let i = index as f64;
    let n = node_count as f64;
    let bump = if complexity_score > 7 { 1.0 } else { 0.0 };

    let mut level = Difficulty::Beginner;
    if i > n * 0.3 + bump {
        level = Difficulty::Moderate;
    }
    if i > n * 0.7 {
        level = Difficulty::Advanced;
    }
    level
}

/// Repeat `topics` round-robin until there are at least `len` entries.
pub fn cycle_topics(topics: &[String], len: usize) -> Vec<String> {
    topics.iter().cycle().take(len.max(topics.len())).cloned().collect()
}

/// Three to five microtasks phrased for `node_type`, each 10–25 minutes.
pub fn microtasks(rng: &mut SeededSource, node_index: usize, node_type: NodeType) -> Vec<Microtask> {
    let count = rng.next_int(3, 5) as usize;
    let verbs = node_type.verbs();
    (0..count)
        .map(|m| {
            let detail = match node_type {
                NodeType::Learn => format!("Section {}", m + 1),
                NodeType::Revise | NodeType::Test => "Key Concepts".to_string(),
            };
            Microtask {
                id: format!("mt-{}-{}", node_index, m),
                text: format!("{}: {}", verbs[m % verbs.len()], detail),
                est_min: rng.next_int(10, 25) as u32,
                is_complete: false,
            }
        })
        .collect()
}

/// One to three distinct labels from [`RESOURCE_POOL`], sampled by index
/// removal from a per-node copy of the pool.
pub fn resources(rng: &mut SeededSource) -> Vec<String> {
    let count = rng.next_int(1, 3) as usize;
    let mut remaining: Vec<&str> = RESOURCE_POOL.to_vec();
    (0..count)
        .map(|_| {
            let idx = rng.next_int(0, remaining.len() as i64 - 1) as usize;
            remaining.remove(idx).to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study_engine::models::Seed;

    #[test]
    fn titles_carry_type_prefix() {
        assert_eq!(title(NodeType::Learn, "Optics"), "Optics");
        assert_eq!(title(NodeType::Revise, "Optics"), "Review: Optics");
        assert_eq!(title(NodeType::Test, "Optics"), "Assessment: Optics");
    }

    #[test]
    fn staircase_for_six_nodes() {
        let levels: Vec<Difficulty> = (0..6).map(|i| difficulty_at(i, 6, 5)).collect();
        assert_eq!(
            levels,
            vec![
                Difficulty::Beginner,
                Difficulty::Beginner,
                Difficulty::Moderate,
                Difficulty::Moderate,
                Difficulty::Moderate,
                Difficulty::Advanced,
            ]
        );
    }

    #[test]
    fn dense_notes_delay_the_moderate_step() {
        // 6 * 0.3 + 1 = 2.8, so index 2 stays Beginner
        assert_eq!(difficulty_at(2, 6, 8), Difficulty::Beginner);
        assert_eq!(difficulty_at(3, 6, 8), Difficulty::Moderate);
        assert_eq!(difficulty_at(2, 6, 7), Difficulty::Moderate);
    }

    #[test]
    fn fractional_thresholds_are_not_rounded() {
        // 5 * 0.3 = 1.5 and 5 * 0.7 = 3.5
        assert_eq!(difficulty_at(1, 5, 1), Difficulty::Beginner);
        assert_eq!(difficulty_at(2, 5, 1), Difficulty::Moderate);
        assert_eq!(difficulty_at(3, 5, 1), Difficulty::Moderate);
        assert_eq!(difficulty_at(4, 5, 1), Difficulty::Advanced);
    }

    #[test]
    fn topics_cycle_in_order() {
        let topics: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        assert_eq!(cycle_topics(&topics, 7), vec!["A", "B", "C", "A", "B", "C", "A"]);
        assert_eq!(cycle_topics(&topics, 2).len(), 3);
    }

    #[test]
    fn microtasks_follow_verb_table() {
        let mut rng = SeededSource::new(&Seed::Number(8));
        let tasks = microtasks(&mut rng, 2, NodeType::Test);
        assert!((3..=5).contains(&tasks.len()));
        assert_eq!(tasks[0].id, "mt-2-0");
        assert_eq!(tasks[0].text, "Practice Problems: Key Concepts");
        assert_eq!(tasks[1].text, "Mock Questions: Key Concepts");
        for t in &tasks {
            assert!((10..=25).contains(&t.est_min));
            assert!(!t.is_complete);
        }

        let learn = microtasks(&mut rng, 0, NodeType::Learn);
        assert_eq!(learn[2].text, "Watch Video: Section 3");
    }

    #[test]
    fn resources_are_distinct_pool_labels() {
        let mut rng = SeededSource::new(&Seed::Number(77));
        for _ in 0..200 {
            let res = resources(&mut rng);
            assert!((1..=3).contains(&res.len()));
            let mut dedup = res.clone();
            dedup.sort();
            dedup.dedup();
            assert_eq!(dedup.len(), res.len());
            assert!(res.iter().all(|r| RESOURCE_POOL.contains(&r.as_str())));
        }
    }
}
