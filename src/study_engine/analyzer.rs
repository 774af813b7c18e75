//! Heuristic profile of study notes: keywords, section headers, a complexity
//! score and the keywords most likely to trip a learner up.
//!
//! Everything here is a pure function of the input text.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::study_engine::models::ContentAnalysis;

/// Used when the notes give no usable structure at all.
pub const DEFAULT_TOPICS: [&str; 4] = ["Core Concepts", "Fundamentals", "Advanced Theory", "Application"];

const STOP_WORDS: [&str; 16] = [
    "the", "and", "is", "in", "to", "of", "a", "for", "it", "with", "on", "that", "this", "are",
    "was", "as",
];

/// Substrings that mark a keyword as conceptually hard.
const RISK_LEXICON: [&str; 6] = ["formula", "theorem", "exception", "irregular", "complex", "remember"];

const KEYWORD_POOL: usize = 15;
const KEYWORD_TOPICS: usize = 5;
const MAX_HEADERS: usize = 8;
const MIN_HEADERS: usize = 3;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("static pattern"));

/// Lowercase word tokens in document order.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower).map(|m| m.as_str().to_string()).collect()
}

fn is_keyword(token: &str) -> bool {
    token.len() > 3 && !STOP_WORDS.contains(&token)
}

/// Keyword counts sorted by descending frequency. Ties keep first-seen order.
pub fn ranked_keywords(tokens: &[String]) -> Vec<(String, u32)> {
    let mut counts: IndexMap<&str, u32> = IndexMap::new();
    for token in tokens.iter().filter(|t| is_keyword(t)) {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, u32)> = counts.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Does a trimmed line look like a section header?
///
/// Between 6 and 49 characters, starting with an ASCII capital or digit and
/// not ending in a period.
pub fn is_header(line: &str) -> bool {
    let line = line.trim();
    let len = line.chars().count();
    let starts_ok = line
        .chars()
        .next()
        .map_or(false, |c| c.is_ascii_uppercase() || c.is_ascii_digit());
    len > 5 && len < 50 && starts_ok && !line.ends_with('.')
}

/// Up to the first eight header lines, in document order.
pub fn detect_headers(text: &str) -> Vec<String> {
    text.lines()
        .filter(|l| is_header(l))
        .take(MAX_HEADERS)
        .map(|l| l.trim().to_string())
        .collect()
}

/// Mean token length × 1.5, rounded and clamped to 1..=10. 5 with no tokens.
pub fn complexity_score(tokens: &[String]) -> u8 {
    if tokens.is_empty() {
        return 5;
    }
    let total: usize = tokens.iter().map(|t| t.chars().count()).sum();
    let mean = total as f64 / tokens.len() as f64;
    (mean * 1.5).round().clamp(1.0, 10.0) as u8
}

pub fn is_risk_keyword(keyword: &str) -> bool {
    RISK_LEXICON.iter().any(|hard| keyword.contains(hard))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Profile `text`. Blank input yields [`ContentAnalysis::default`].
pub fn analyze(text: &str) -> ContentAnalysis {
    if text.trim().is_empty() {
        return ContentAnalysis::default();
    }

    let tokens = tokenize(text);
    let pool: Vec<(String, u32)> = ranked_keywords(&tokens).into_iter().take(KEYWORD_POOL).collect();

    let headers = detect_headers(text);
    let used_headers = headers.len() >= MIN_HEADERS;
    let mut topics = if used_headers {
        headers
    } else {
        pool.iter().take(KEYWORD_TOPICS).map(|(k, _)| capitalize(k)).collect()
    };
    if topics.is_empty() {
        topics = DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect();
    }

    let risk_areas = pool
        .iter()
        .filter(|(k, _)| is_risk_keyword(k))
        .map(|(k, _)| k.clone())
        .collect();

    let analysis = ContentAnalysis {
        topics,
        complexity_score: complexity_score(&tokens),
        keyword_density: pool.into_iter().collect(),
        risk_areas,
    };

    debug!(
        tokens = tokens.len(),
        topics = analysis.topics.len(),
        used_headers,
        complexity = analysis.complexity_score,
        "analyzed content"
    );
    analysis
}
