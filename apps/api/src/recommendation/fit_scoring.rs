//! Fit Scoring — weighted four-factor match score between a profile and a candidate.
//!
//! Factors are independent and additive: course (40), location (30), budget (20),
//! academic (10). Each factor awards full, partial, or zero credit from the
//! predicates in `matching`, so the total is always within 0 – 100.

use serde::{Deserialize, Serialize};

use crate::models::candidate::Candidate;
use crate::models::profile::UserProfile;
use crate::recommendation::matching::{
    match_academic, match_budget, match_course, match_location, AcademicStanding, BudgetFit,
    CourseMatch, LocationMatch,
};

pub const MAX_SCORE: u32 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

/// Per-factor maximum points and the share of it awarded for a partial match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorWeights {
    pub course: u32,
    pub location: u32,
    pub budget: u32,
    pub academic: u32,
    pub related_course_ratio: f64,
    pub regional_location_ratio: f64,
    pub budget_buffer_ratio: f64,
    pub academic_meets_ratio: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            course: 40,
            location: 30,
            budget: 20,
            academic: 10,
            related_course_ratio: 0.5,
            regional_location_ratio: 0.7,
            budget_buffer_ratio: 0.5,
            academic_meets_ratio: 0.5,
        }
    }
}

impl FactorWeights {
    pub fn max_total(&self) -> u32 {
        self.course + self.location + self.budget + self.academic
    }
}

fn partial(points: u32, ratio: f64) -> u32 {
    (points as f64 * ratio.clamp(0.0, 1.0)).round() as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// Points contributed by each factor for one (profile, candidate) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorBreakdown {
    pub course: u32,
    pub location: u32,
    pub budget: u32,
    pub academic: u32,
    pub total: u32, // 0 – 100
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

pub fn compute_breakdown(
    profile: &UserProfile,
    candidate: &Candidate,
    weights: &FactorWeights,
) -> FactorBreakdown {
    let course = match match_course(profile, candidate) {
        CourseMatch::Exact(_) => weights.course,
        CourseMatch::Related => partial(weights.course, weights.related_course_ratio),
        CourseMatch::NoMatch => 0,
    };

    let location = match match_location(profile, candidate) {
        LocationMatch::Direct => weights.location,
        LocationMatch::Regional => partial(weights.location, weights.regional_location_ratio),
        LocationMatch::NoMatch => 0,
    };

    let budget = match match_budget(profile, candidate) {
        BudgetFit::Within => weights.budget,
        BudgetFit::NearBuffer => partial(weights.budget, weights.budget_buffer_ratio),
        BudgetFit::Over | BudgetFit::Skipped => 0,
    };

    let academic = match match_academic(profile) {
        AcademicStanding::Exceeds => weights.academic,
        AcademicStanding::Meets => partial(weights.academic, weights.academic_meets_ratio),
        AcademicStanding::Below | AcademicStanding::Skipped => 0,
    };

    let total = (course + location + budget + academic).min(MAX_SCORE);

    FactorBreakdown {
        course,
        location,
        budget,
        academic,
        total,
    }
}

/// Match score in 0 – 100. Deterministic for fixed inputs.
pub fn score_candidate(profile: &UserProfile, candidate: &Candidate, weights: &FactorWeights) -> u32 {
    compute_breakdown(profile, candidate, weights).total
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
