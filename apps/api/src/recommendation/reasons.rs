use crate::models::candidate::Candidate;
use crate::models::profile::UserProfile;
use crate::recommendation::matching::{
    match_academic, match_budget, match_course, match_location, AcademicStanding, BudgetFit,
    CourseMatch, LocationMatch,
};

/// How many reasons the list UI shows per card.
pub const DISPLAY_REASON_LIMIT: usize = 2;

/// Builds justifications in fixed factor order: course, location, budget, GPA.
///
/// Only exact-match outcomes produce text. Related-course and regional-location
/// matches still earn points but are not surfaced as reasons.
pub fn explain_match(candidate: &Candidate, profile: &UserProfile) -> Vec<String> {
    let mut reasons = Vec::new();

    if let CourseMatch::Exact(program) = match_course(profile, candidate) {
        reasons.push(format!("Offers {program} program"));
    }

    if match_location(profile, candidate) == LocationMatch::Direct {
        reasons.push(format!(
            "Located in {}",
            profile.preferences.location.trim()
        ));
    }

    match match_budget(profile, candidate) {
        BudgetFit::Within => reasons.push("Fits your budget".to_string()),
        BudgetFit::NearBuffer => reasons.push("Close to your budget range".to_string()),
        BudgetFit::Over | BudgetFit::Skipped => {}
    }

    match match_academic(profile) {
        AcademicStanding::Exceeds => reasons.push("Your GPA exceeds requirements".to_string()),
        AcademicStanding::Meets => reasons.push("Your GPA meets requirements".to_string()),
        AcademicStanding::Below | AcademicStanding::Skipped => {}
    }

    reasons
}

/// The prefix of `reasons` a card has room for.
pub fn highlights(reasons: &[String]) -> Vec<String> {
    reasons.iter().take(DISPLAY_REASON_LIMIT).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_profile(course: &str, location: &str, budget: &str, gpa: &str) -> UserProfile {
        let mut p = UserProfile::default();
        p.preferences.course = course.to_string();
        p.preferences.location = location.to_string();
        p.preferences.budget = budget.to_string();
        p.academic_background.gpa = gpa.to_string();
        p
    }

    fn make_candidate(location: &str, fee: &str, programs: &[&str]) -> Candidate {
        Candidate {
            id: "usc".to_string(),
            name: "University of San Carlos".to_string(),
            location: location.to_string(),
            fee: fee.to_string(),
            programs: programs.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_all_four_reasons_in_order() {
        let profile = make_profile("Computer Science", "Cebu", "90000", "3.8");
        let candidate = make_candidate("Urgello, Cebu", "₱80,000/year", &["Computer Science"]);
        assert_eq!(
            explain_match(&candidate, &profile),
            vec![
                "Offers Computer Science program",
                "Located in Cebu",
                "Fits your budget",
                "Your GPA exceeds requirements",
            ]
        );
    }

    #[test]
    fn test_omits_unmatched_factors_and_keeps_order() {
        let profile = make_profile("Nursing", "Cebu", "80000", "3.2");
        let candidate = make_candidate("Sampaloc, Manila", "₱95,000/year", &["Nursing"]);
        assert_eq!(
            explain_match(&candidate, &profile),
            vec![
                "Offers Nursing program",
                "Close to your budget range",
                "Your GPA meets requirements",
            ]
        );
    }

    #[test]
    fn test_partial_matches_produce_no_text() {
        let profile = make_profile("Computer Science", "Mandaue, Cebu", "", "");
        let candidate = make_candidate("Cebu City", "", &["Information Technology"]);
        assert!(explain_match(&candidate, &profile).is_empty());
    }

    #[test]
    fn test_names_the_matching_program() {
        let profile = make_profile("engineering", "", "", "");
        let candidate = make_candidate("", "", &["Nursing", "Civil Engineering"]);
        assert_eq!(
            explain_match(&candidate, &profile),
            vec!["Offers Civil Engineering program"]
        );
    }

    #[test]
    fn test_empty_profile_has_no_reasons() {
        let candidate = make_candidate("Cebu", "₱80,000/year", &["Nursing"]);
        assert!(explain_match(&candidate, &UserProfile::default()).is_empty());
    }

    #[test]
    fn test_highlights_caps_at_two() {
        let reasons = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(highlights(&reasons), vec!["a", "b"]);
        assert!(highlights(&[]).is_empty());
    }
}
