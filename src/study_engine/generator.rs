use tracing::{debug, trace};

use crate::study_engine::{
    analyzer::{analyze, DEFAULT_TOPICS},
    helpers,
    models::{ContentAnalysis, NodeType, RoadmapConfig, RoadmapNode},
    rng::{EntropySource, SeededSource, SystemClock},
};

/// Build a roadmap. Without a seed in `config` the wall clock seeds the run.
pub fn generate(config: &RoadmapConfig) -> Vec<RoadmapNode> {
    generate_with_entropy(config, &SystemClock)
}

/// Same as [`generate`], with the unseeded fallback supplied by `entropy`.
pub fn generate_with_entropy(config: &RoadmapConfig, entropy: &impl EntropySource) -> Vec<RoadmapNode> {
    let analysis = analyze(config.content.as_deref().unwrap_or(""));
    generate_with_analysis(config, &analysis, entropy)
}

/// Core loop, for callers that already hold the analysis of `config.content`.
pub fn generate_with_analysis(
    config: &RoadmapConfig,
    analysis: &ContentAnalysis,
    entropy: &impl EntropySource,
) -> Vec<RoadmapNode> {
    let seeded = config.seed.is_some();
    let seed = config.seed.clone().unwrap_or_else(|| entropy.entropy_seed());
    let mut rng = SeededSource::new(&seed);

    let base_topics: Vec<String> = if analysis.topics.is_empty() {
        DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect()
    } else {
        analysis.topics.clone()
    };

    let policy = config.strategy.policy();
    let node_count = policy.node_count(base_topics.len());
    let topics = helpers::cycle_topics(&base_topics, node_count);

    debug!(
        strategy = %config.strategy,
        goal = %config.exam_goal,
        node_count,
        seeded,
        complexity = analysis.complexity_score,
        "generating roadmap"
    );

    let mut nodes: Vec<RoadmapNode> = Vec::with_capacity(node_count);
    for (i, topic) in topics.iter().take(node_count).enumerate() {
        let roll = rng.next();
        // every roadmap opens with an introductory node
        let node_type = if i == 0 { NodeType::Learn } else { policy.classify(roll) };

        let difficulty = helpers::difficulty_at(i, node_count, analysis.complexity_score);
        let microtasks = helpers::microtasks(&mut rng, i, node_type);
        let est_minutes: u32 = microtasks.iter().map(|m| m.est_min).sum();
        let resources = helpers::resources(&mut rng);
        let prerequisites = match nodes.last() {
            Some(prev) => vec![prev.id.clone()],
            None => Vec::new(),
        };

        let node = RoadmapNode {
            id: helpers::node_id(i),
            title: helpers::title(node_type, topic),
            node_type,
            est_minutes,
            difficulty,
            microtasks,
            prerequisites,
            resources,
            progress_pct: 0,
            xp_value: difficulty.xp_value(),
            is_expanded: i == 0,
            topic_cluster: topic.clone(),
        };
        trace!(id = %node.id, kind = %node.node_type, difficulty = %node.difficulty, "built node");
        nodes.push(node);
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study_engine::models::{ExamGoal, Seed, Strategy};
    use crate::study_engine::rng::FixedEntropy;

    #[test]
    fn precomputed_analysis_matches_inline_analysis() {
        let config = RoadmapConfig::new(Strategy::Mastery)
            .with_content("Cell Biology\nMitosis Phases\nGenetic Inheritance\nDNA replicates.")
            .with_seed(3);
        let analysis = analyze(config.content.as_deref().unwrap_or(""));
        assert_eq!(
            generate_with_analysis(&config, &analysis, &SystemClock),
            generate(&config)
        );
    }

    #[test]
    fn explicit_seed_wins_over_entropy() {
        let config = RoadmapConfig::new(Strategy::Balanced).with_seed(10);
        assert_eq!(
            generate_with_entropy(&config, &FixedEntropy(1)),
            generate_with_entropy(&config, &FixedEntropy(2)),
        );
    }

    #[test]
    fn unseeded_run_uses_entropy_value() {
        let unseeded = RoadmapConfig::new(Strategy::Balanced);
        let seeded = RoadmapConfig::new(Strategy::Balanced).with_seed(Seed::Number(1234));
        assert_eq!(
            generate_with_entropy(&unseeded, &FixedEntropy(1234)),
            generate(&seeded)
        );
    }

    #[test]
    fn goal_and_minutes_do_not_change_output() {
        let a = RoadmapConfig::new(Strategy::FastTrack).with_seed("same");
        let b = a.clone().with_goal(ExamGoal::NEET).with_daily_minutes(240);
        assert_eq!(generate(&a), generate(&b));
    }
}
