//! Factor predicates. Both the scorer and the reason explainer read these
//! outcomes, so a point awarded and a reason shown always agree.

use crate::models::candidate::Candidate;
use crate::models::profile::UserProfile;
use crate::recommendation::parsing::{is_present, parse_amount, parse_gpa};

/// (query keyword, program keywords) pairs that earn half course credit.
const RELATED_COURSE_KEYWORDS: &[(&str, &[&str])] = &[
    ("computer", &["information", "engineering"]),
    ("business", &["administration"]),
    ("engineering", &["technology"]),
    ("information", &["computer"]),
];

const REGIONAL_ANCHORS: &[&str] = &["cebu", "manila", "davao"];

const GPA_EXCEEDS: f64 = 3.5;
const GPA_MEETS: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseMatch {
    /// First program (in catalog order) that substring-matches the preferred course.
    Exact(String),
    Related,
    NoMatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationMatch {
    Direct,
    /// Both sides name the same regional anchor (e.g. "cebu").
    Regional,
    NoMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetFit {
    Within,
    /// Above budget but no more than 20% over.
    NearBuffer,
    Over,
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcademicStanding {
    Exceeds,
    Meets,
    Below,
    Skipped,
}

fn contains_either_way(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

pub fn match_course(profile: &UserProfile, candidate: &Candidate) -> CourseMatch {
    let course = &profile.preferences.course;
    if !is_present(course) {
        return CourseMatch::NoMatch;
    }
    let query = course.trim().to_lowercase();

    let programs: Vec<(&String, String)> = candidate
        .programs
        .iter()
        .filter(|p| is_present(p))
        .map(|p| (p, p.trim().to_lowercase()))
        .collect();

    if let Some((program, _)) = programs
        .iter()
        .find(|(_, lower)| contains_either_way(&query, lower))
    {
        return CourseMatch::Exact(program.trim().to_string());
    }

    let related = programs.iter().any(|(_, lower)| {
        RELATED_COURSE_KEYWORDS.iter().any(|(query_kw, program_kws)| {
            query.contains(query_kw) && program_kws.iter().any(|kw| lower.contains(kw))
        })
    });

    if related {
        CourseMatch::Related
    } else {
        CourseMatch::NoMatch
    }
}

pub fn match_location(profile: &UserProfile, candidate: &Candidate) -> LocationMatch {
    let wanted = &profile.preferences.location;
    if !is_present(wanted) || !is_present(&candidate.location) {
        return LocationMatch::NoMatch;
    }
    let wanted = wanted.trim().to_lowercase();
    let actual = candidate.location.trim().to_lowercase();

    if contains_either_way(&wanted, &actual) {
        return LocationMatch::Direct;
    }

    let shared_anchor = REGIONAL_ANCHORS
        .iter()
        .any(|anchor| wanted.contains(anchor) && actual.contains(anchor));
    if shared_anchor {
        LocationMatch::Regional
    } else {
        LocationMatch::NoMatch
    }
}

pub fn match_budget(profile: &UserProfile, candidate: &Candidate) -> BudgetFit {
    if !is_present(&profile.preferences.budget) {
        return BudgetFit::Skipped;
    }
    let (Some(budget), Some(fee)) = (
        parse_amount(&profile.preferences.budget).value(),
        parse_amount(&candidate.fee).value(),
    ) else {
        return BudgetFit::Skipped;
    };

    let (budget, fee) = (budget as u128, fee as u128);
    if fee <= budget {
        BudgetFit::Within
    } else if fee * 5 <= budget * 6 {
        BudgetFit::NearBuffer
    } else {
        BudgetFit::Over
    }
}

pub fn match_academic(profile: &UserProfile) -> AcademicStanding {
    let gpa = &profile.academic_background.gpa;
    if !is_present(gpa) {
        return AcademicStanding::Skipped;
    }
    match parse_gpa(gpa).value() {
        Some(g) if g >= GPA_EXCEEDS => AcademicStanding::Exceeds,
        Some(g) if g >= GPA_MEETS => AcademicStanding::Meets,
        Some(_) => AcademicStanding::Below,
        None => AcademicStanding::Skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with(course: &str, location: &str, budget: &str, gpa: &str) -> UserProfile {
        let mut p = UserProfile::default();
        p.preferences.course = course.to_string();
        p.preferences.location = location.to_string();
        p.preferences.budget = budget.to_string();
        p.academic_background.gpa = gpa.to_string();
        p
    }

    fn candidate_with(location: &str, fee: &str, programs: &[&str]) -> Candidate {
        Candidate {
            id: "c1".to_string(),
            name: "Test University".to_string(),
            location: location.to_string(),
            fee: fee.to_string(),
            programs: programs.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_course_exact_is_case_insensitive_both_directions() {
        let c = candidate_with("", "", &["BS Computer Science", "Nursing"]);
        assert_eq!(
            match_course(&profile_with("computer science", "", "", ""), &c),
            CourseMatch::Exact("BS Computer Science".to_string())
        );
        let c = candidate_with("", "", &["Nursing"]);
        assert_eq!(
            match_course(&profile_with("BS Nursing", "", "", ""), &c),
            CourseMatch::Exact("Nursing".to_string())
        );
    }

    #[test]
    fn test_course_exact_picks_first_matching_program() {
        let c = candidate_with("", "", &["Civil Engineering", "Mechanical Engineering"]);
        assert_eq!(
            match_course(&profile_with("Engineering", "", "", ""), &c),
            CourseMatch::Exact("Civil Engineering".to_string())
        );
    }

    #[test]
    fn test_course_related_pairs() {
        let cases = [
            ("Computer Science", "Information Technology"),
            ("Computer Science", "Computer Engineering"),
            ("Business Management", "Public Administration"),
            ("Electrical Engineering", "Industrial Technology"),
            ("Information Systems", "Computer Science"),
        ];
        for (query, program) in cases {
            let c = candidate_with("", "", &[program]);
            let outcome = match_course(&profile_with(query, "", "", ""), &c);
            assert!(
                matches!(outcome, CourseMatch::Related | CourseMatch::Exact(_)),
                "{query} vs {program} gave {outcome:?}"
            );
        }
        let c = candidate_with("", "", &["Information Technology"]);
        assert_eq!(
            match_course(&profile_with("Computer Science", "", "", ""), &c),
            CourseMatch::Related
        );
    }

    #[test]
    fn test_course_no_match_and_empty_programs_ignored() {
        let c = candidate_with("", "", &["", "  ", "Nursing"]);
        assert_eq!(
            match_course(&profile_with("Architecture", "", "", ""), &c),
            CourseMatch::NoMatch
        );
        assert_eq!(
            match_course(&profile_with("", "", "", ""), &c),
            CourseMatch::NoMatch
        );
    }

    #[test]
    fn test_location_direct_and_regional() {
        let c = candidate_with("Urgello, Cebu City", "", &[]);
        assert_eq!(
            match_location(&profile_with("", "cebu", "", ""), &c),
            LocationMatch::Direct
        );
        let c = candidate_with("Cebu City", "", &[]);
        assert_eq!(
            match_location(&profile_with("", "Mandaue, Cebu", "", ""), &c),
            LocationMatch::Regional
        );
        let c = candidate_with("Davao City", "", &[]);
        assert_eq!(
            match_location(&profile_with("", "Manila", "", ""), &c),
            LocationMatch::NoMatch
        );
    }

    #[test]
    fn test_location_empty_side_never_matches() {
        let c = candidate_with("", "", &[]);
        assert_eq!(
            match_location(&profile_with("", "Cebu", "", ""), &c),
            LocationMatch::NoMatch
        );
        let c = candidate_with("   ", "", &[]);
        assert_eq!(
            match_location(&profile_with("", "Cebu", "", ""), &c),
            LocationMatch::NoMatch
        );
        let c = candidate_with("Cebu City", "", &[]);
        assert_eq!(
            match_location(&profile_with("", "  ", "", ""), &c),
            LocationMatch::NoMatch
        );
    }

    #[test]
    fn test_budget_tiers() {
        let p = profile_with("", "", "80000", "");
        assert_eq!(
            match_budget(&p, &candidate_with("", "₱70,000/year", &[])),
            BudgetFit::Within
        );
        assert_eq!(
            match_budget(&p, &candidate_with("", "₱80,000/year", &[])),
            BudgetFit::Within
        );
        assert_eq!(
            match_budget(&p, &candidate_with("", "₱95,000/year", &[])),
            BudgetFit::NearBuffer
        );
        assert_eq!(
            match_budget(&p, &candidate_with("", "₱96,000/year", &[])),
            BudgetFit::NearBuffer
        );
        assert_eq!(
            match_budget(&p, &candidate_with("", "₱96,001/year", &[])),
            BudgetFit::Over
        );
    }

    #[test]
    fn test_budget_unparseable_is_skipped() {
        let p = profile_with("", "", "flexible", "");
        assert_eq!(
            match_budget(&p, &candidate_with("", "₱70,000/year", &[])),
            BudgetFit::Skipped
        );
        let p = profile_with("", "", "80000", "");
        assert_eq!(
            match_budget(&p, &candidate_with("", "Contact registrar", &[])),
            BudgetFit::Skipped
        );
    }

    #[test]
    fn test_academic_tiers() {
        assert_eq!(match_academic(&profile_with("", "", "", "3.8")), AcademicStanding::Exceeds);
        assert_eq!(match_academic(&profile_with("", "", "", "3.5")), AcademicStanding::Exceeds);
        assert_eq!(match_academic(&profile_with("", "", "", "3.0")), AcademicStanding::Meets);
        assert_eq!(match_academic(&profile_with("", "", "", "2.9")), AcademicStanding::Below);
        assert_eq!(match_academic(&profile_with("", "", "", "B+")), AcademicStanding::Skipped);
        // Strict parse: decorated GPAs are skipped rather than prefix-parsed.
        assert_eq!(match_academic(&profile_with("", "", "", "3.8/4.0")), AcademicStanding::Skipped);
        assert_eq!(match_academic(&profile_with("", "", "", "3.8 GPA")), AcademicStanding::Skipped);
        assert_eq!(match_academic(&profile_with("", "", "", "")), AcademicStanding::Skipped);
    }
}
