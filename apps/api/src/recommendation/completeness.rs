use serde::{Deserialize, Serialize};

use crate::models::profile::UserProfile;
use crate::recommendation::parsing::is_present;

const BASE_PERCENTAGE: usize = 25;
const FILLABLE_PERCENTAGE: usize = 75;

/// Profile completeness in `[25, 100]`. An empty profile still reports 25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionPercentage(u8);

impl CompletionPercentage {
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionReport {
    pub percentage: CompletionPercentage,
    pub filled_fields: usize,
    pub total_fields: usize,
    pub missing_fields: Vec<String>,
    pub meets_gate: bool,
}

fn tracked_fields(profile: &UserProfile) -> [(&'static str, &str); 6] {
    let academic = &profile.academic_background;
    let prefs = &profile.preferences;
    [
        ("academicBackground.strand", academic.strand.as_str()),
        ("academicBackground.gpa", academic.gpa.as_str()),
        ("academicBackground.school", academic.school.as_str()),
        ("preferences.budget", prefs.budget.as_str()),
        ("preferences.course", prefs.course.as_str()),
        ("preferences.location", prefs.location.as_str()),
    ]
}

/// 25 + filled/6 × 75, rounded half-up (3 of 6 filled → 63).
pub fn calculate_completion(profile: &UserProfile) -> CompletionPercentage {
    let fields = tracked_fields(profile);
    let filled = fields.iter().filter(|(_, v)| is_present(v)).count();
    percentage_for(filled, fields.len())
}

fn percentage_for(filled: usize, total: usize) -> CompletionPercentage {
    if total == 0 {
        return CompletionPercentage::new(BASE_PERCENTAGE as u8);
    }
    // Integer half-up: (2·n + d) / 2d == round(n / d) for non-negative n.
    let numerator = filled.min(total) * FILLABLE_PERCENTAGE;
    let share = (2 * numerator + total) / (2 * total);
    CompletionPercentage::new((BASE_PERCENTAGE + share) as u8)
}

/// Completion plus the field paths still empty, so the client can prompt for them.
pub fn compute_completion_report(profile: &UserProfile, completion_gate: u8) -> CompletionReport {
    let fields = tracked_fields(profile);
    let missing_fields: Vec<String> = fields
        .iter()
        .filter(|(_, v)| !is_present(v))
        .map(|(path, _)| path.to_string())
        .collect();
    let total_fields = fields.len();
    let filled_fields = total_fields - missing_fields.len();
    let percentage = percentage_for(filled_fields, total_fields);

    CompletionReport {
        percentage,
        filled_fields,
        total_fields,
        missing_fields,
        meets_gate: percentage.value() >= completion_gate,
    }
}
