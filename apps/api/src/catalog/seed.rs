use crate::models::candidate::Candidate;

/// (id, name, location, fee, programs, acceptance rate, ranking)
type SeedRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
    &'static str,
    &'static str,
);

const SEED: &[SeedRow] = &[
    (
        "usc",
        "University of San Carlos",
        "Talamban, Cebu City",
        "₱80,000/year",
        &["Computer Science", "Civil Engineering", "Architecture", "Accountancy"],
        "75%",
        "#3",
    ),
    (
        "up-cebu",
        "University of the Philippines Cebu",
        "Lahug, Cebu City",
        "₱30,000/year",
        &["Computer Science", "Management", "Fine Arts", "Mass Communication"],
        "15%",
        "#1",
    ),
    (
        "cit-u",
        "Cebu Institute of Technology - University",
        "N. Bacalso Ave, Cebu City",
        "₱70,000/year",
        &["Information Technology", "Computer Engineering", "Electrical Engineering"],
        "80%",
        "#5",
    ),
    (
        "ateneo",
        "Ateneo de Manila University",
        "Quezon City, Metro Manila",
        "₱220,000/year",
        &["Management Engineering", "Computer Science", "Economics", "Psychology"],
        "20%",
        "#2",
    ),
    (
        "ust",
        "University of Santo Tomas",
        "Sampaloc, Manila",
        "₱150,000/year",
        &["Nursing", "Medical Technology", "Business Administration", "Architecture"],
        "40%",
        "#4",
    ),
    (
        "addu",
        "Ateneo de Davao University",
        "Roxas Ave, Davao City",
        "₱95,000/year",
        &["Accountancy", "Information Systems", "Nursing", "Civil Engineering"],
        "60%",
        "#8",
    ),
];

pub fn seed_candidates() -> Vec<Candidate> {
    SEED.iter()
        .map(
            |(id, name, location, fee, programs, acceptance_rate, ranking)| Candidate {
                id: id.to_string(),
                name: name.to_string(),
                location: location.to_string(),
                fee: fee.to_string(),
                programs: programs.iter().map(|p| p.to_string()).collect(),
                acceptance_rate: acceptance_rate.to_string(),
                ranking: ranking.to_string(),
            },
        )
        .collect()
}
