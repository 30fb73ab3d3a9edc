//! Relevance scoring between a normalized query and corpus items.
//!
//! Four additive signals: exact meaningful-token overlap, bounded fuzzy
//! overlap, question-coverage ratio, and whole-string similarity. The
//! weights, cutoffs and floors below are calibration points tuned on real
//! patient queries; tests treat them as given, not as derived truths.

use std::collections::HashSet;

use strsim::{normalized_damerau_levenshtein, normalized_levenshtein};

use crate::corpus::{ContentItem, CorpusIndex, FaqEntry};
use crate::engine::lang::LanguageProfile;

/// Per-token weight for exact matches against FAQ questions. FAQ questions
/// are short, curated targets: one exact topic word is a strong signal.
pub const FAQ_WORD_WEIGHT: f64 = 30.0;
/// Per-token weight for exact matches inside content blobs, deliberately
/// lower: long free-text blobs match words by accident.
pub const CONTENT_WORD_WEIGHT: f64 = 10.0;
/// Bonus per query token that approximately matches a question token.
pub const FUZZY_BONUS: f64 = 15.0;
/// Similarity a token pair must reach to count as a fuzzy match. High enough
/// that unrelated short words do not collide.
pub const FUZZY_CUTOFF: f64 = 0.85;
/// Weight of the fraction of the question's meaningful tokens covered by the
/// query.
pub const COVERAGE_WEIGHT: f64 = 10.0;
/// Weight and floor for whole-string similarity against the FAQ question.
/// Lets a near-paraphrase win even with little token overlap.
pub const FAQ_SIMILARITY_WEIGHT: f64 = 30.0;
pub const FAQ_SIMILARITY_FLOOR: f64 = 0.5;
/// Weight and floor for whole-string similarity against a content title.
pub const TITLE_SIMILARITY_WEIGHT: f64 = 25.0;
pub const TITLE_SIMILARITY_FLOOR: f64 = 0.6;
/// Below this total, a match is considered weak. Weak matches are still
/// preferred over the generic fallback; the floor only drives logging.
pub const SCORE_FLOOR: f64 = 5.0;

/// Winning corpus item for one query.
pub struct BestMatch<'a> {
    pub score: f64,
    pub source: MatchSource<'a>,
}

pub enum MatchSource<'a> {
    Faq(&'a FaqEntry),
    Content(&'a ContentItem),
}

/// Scores every FAQ entry of the detected language, then every content item,
/// and keeps the single running best across both passes. Replacement only on
/// strict `>`: with distinct scores the winner is independent of corpus
/// order. No early termination — corpora are small and shortcuts would
/// change tie outcomes.
pub fn rank<'a>(
    index: &'a CorpusIndex,
    profile: &LanguageProfile,
    query_norm: &str,
    raw_tokens: &[String],
) -> Option<BestMatch<'a>> {
    let canonical = profile.canonicalize(raw_tokens);
    let expanded = profile.expand(raw_tokens);

    let mut best: Option<BestMatch<'a>> = None;
    let mut best_score = 0.0;

    for entry in index.faqs(profile.lang) {
        let score = score_faq(profile, query_norm, &canonical, entry);
        if score > best_score {
            best_score = score;
            best = Some(BestMatch {
                score,
                source: MatchSource::Faq(entry),
            });
        }
    }

    for item in index.content() {
        let score = score_content(profile, query_norm, &expanded, item);
        if score > best_score {
            best_score = score;
            best = Some(BestMatch {
                score,
                source: MatchSource::Content(item),
            });
        }
    }

    best
}

/// FAQ scoring: all four signals. `query_tokens` must already be in
/// replacement (canonical) form, unique, first-encountered order.
pub fn score_faq(
    profile: &LanguageProfile,
    query_norm: &str,
    query_tokens: &[String],
    entry: &FaqEntry,
) -> f64 {
    let exact_matches = query_tokens
        .iter()
        .filter(|t| profile.is_meaningful(t) && entry.contains(t))
        .count();
    let mut score = exact_matches as f64 * FAQ_WORD_WEIGHT;

    // Fuzzy pass over the remaining meaningful tokens. Damerau variant so a
    // transposed pair of letters counts as one edit, the most common typo.
    for token in query_tokens {
        if !profile.is_meaningful(token) || entry.contains(token) {
            continue;
        }
        let close = entry
            .tokens()
            .iter()
            .any(|candidate| normalized_damerau_levenshtein(token, candidate) >= FUZZY_CUTOFF);
        if close {
            score += FUZZY_BONUS;
        }
    }

    // Reward questions the query covers broadly, not just by a sliver.
    if entry.meaningful() > 0 {
        score += exact_matches as f64 / entry.meaningful() as f64 * COVERAGE_WEIGHT;
    }

    let ratio = normalized_levenshtein(query_norm, entry.norm_question());
    if ratio > FAQ_SIMILARITY_FLOOR {
        score += ratio * FAQ_SIMILARITY_WEIGHT;
    }

    score
}

/// Content scoring: exact overlap and title similarity only. Fuzzy matching
/// against large blobs would be quadratic noise, so it is omitted here.
/// `query_tokens` must be in union (expanded) form.
pub fn score_content(
    profile: &LanguageProfile,
    query_norm: &str,
    query_tokens: &HashSet<String>,
    item: &ContentItem,
) -> f64 {
    let exact_matches = query_tokens
        .iter()
        .filter(|t| profile.is_meaningful(t) && item.contains(t))
        .count();
    let mut score = exact_matches as f64 * CONTENT_WORD_WEIGHT;

    let ratio = normalized_levenshtein(query_norm, item.norm_title());
    if ratio > TITLE_SIMILARITY_FLOOR {
        score += ratio * TITLE_SIMILARITY_WEIGHT;
    }

    score
}
