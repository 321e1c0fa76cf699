use serde::{Deserialize, Serialize};

/// Academic history as entered on the profile screen. Numeric-looking values
/// stay free text and are parsed at scoring time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AcademicBackground {
    pub strand: String,
    pub gpa: String,
    pub school: String,
}

/// What the student is looking for. `budget` may carry currency symbols and commas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub budget: String,
    pub course: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub academic_background: AcademicBackground,
    pub preferences: Preferences,
}
