use serde_json::{json, Value};

use crate::study_engine::{
    models::{ContentAnalysis, RoadmapNode},
    tracker::summarize,
};

/// Coarse label the insights panel shows next to the complexity score.
fn complexity_label(score: u8) -> &'static str {
    match score {
        0..=3 => "Light",
        4..=6 => "Moderate",
        _ => "Dense",
    }
}

/// Keyword density as an ordered list, so rank survives JSON object ordering.
fn keyword_list(analysis: &ContentAnalysis) -> Value {
    Value::Array(
        analysis
            .keyword_density
            .iter()
            .map(|(word, count)| json!({ "keyword": word, "count": count }))
            .collect(),
    )
}

/// Build the document the study dashboard renders: the roadmap, the content
/// insights and a progress summary.
pub fn to_client_payload(nodes: &[RoadmapNode], analysis: &ContentAnalysis) -> Value {
    json!({
        "roadmap": nodes,
        "insights": {
            "topics": analysis.topics,
            "complexityScore": analysis.complexity_score,
            "complexityLabel": complexity_label(analysis.complexity_score),
            "keywordDensity": keyword_list(analysis),
            "riskAreas": analysis.risk_areas,
        },
        "summary": summarize(nodes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study_engine::{analyze, generate, RoadmapConfig, Strategy};

    #[test]
    fn payload_carries_roadmap_insights_and_summary() {
        let text = "Photosynthesis converts light. Photosynthesis needs chlorophyll. Remember formula.";
        let config = RoadmapConfig::new(Strategy::FastTrack).with_content(text).with_seed(5);
        let nodes = generate(&config);
        let analysis = analyze(text);
        let payload = to_client_payload(&nodes, &analysis);

        assert_eq!(payload["roadmap"].as_array().map(Vec::len), Some(nodes.len()));
        assert_eq!(payload["roadmap"][0]["id"], "node-1");
        assert_eq!(payload["roadmap"][0]["isExpanded"], true);
        assert_eq!(payload["insights"]["keywordDensity"][0]["keyword"], "photosynthesis");
        assert_eq!(payload["insights"]["keywordDensity"][0]["count"], 2);
        assert_eq!(payload["summary"]["nodeCount"], nodes.len());
        let risks = payload["insights"]["riskAreas"].as_array().cloned().unwrap_or_default();
        assert!(risks.contains(&json!("formula")));
        assert!(risks.contains(&json!("remember")));
    }

    #[test]
    fn complexity_labels() {
        assert_eq!(complexity_label(1), "Light");
        assert_eq!(complexity_label(5), "Moderate");
        assert_eq!(complexity_label(9), "Dense");
    }
}
