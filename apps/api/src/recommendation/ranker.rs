//! Ranker — completion gate, minimum-match filter, display floor and stable sort.
//!
//! Candidates scoring below `min_match_score` are dropped. Survivors are sorted
//! by display score descending; `sort_by` is stable, so equal display scores
//! keep catalog order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::candidate::Candidate;
use crate::models::profile::UserProfile;
use crate::recommendation::completeness::CompletionPercentage;
use crate::recommendation::fit_scoring::{score_candidate, FactorWeights};
use crate::recommendation::reasons::explain_match;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Below this completion percentage nothing is scored.
    pub completion_gate: u8,
    pub min_match_score: u32,
    pub display_floor: u32,
    pub weights: FactorWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            completion_gate: 50,
            min_match_score: 30,
            display_floor: 50,
            weights: FactorWeights::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult {
    pub candidate: Candidate,
    pub score: u32,         // raw, used for filtering
    pub display_score: u32, // max(score, display_floor)
    pub reasons: Vec<String>,
}

pub fn rank_candidates(
    candidates: &[Candidate],
    profile: &UserProfile,
    completion: CompletionPercentage,
    config: &EngineConfig,
) -> Vec<RankedResult> {
    if completion.value() < config.completion_gate {
        debug!(
            completion = completion.value(),
            gate = config.completion_gate,
            "Profile below completion gate; skipping recommendations"
        );
        return Vec::new();
    }

    let mut ranked: Vec<RankedResult> = candidates
        .iter()
        .filter_map(|candidate| {
            let score = score_candidate(profile, candidate, &config.weights);
            if score < config.min_match_score {
                return None;
            }
            Some(RankedResult {
                candidate: candidate.clone(),
                score,
                display_score: score.max(config.display_floor),
                reasons: explain_match(candidate, profile),
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.display_score.cmp(&a.display_score));

    debug!(
        candidates = candidates.len(),
        kept = ranked.len(),
        min_score = config.min_match_score,
        "Ranked candidates"
    );

    ranked
}
