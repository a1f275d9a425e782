//! Cover letter form data as submitted by the editor.

use serde::Deserialize;

use crate::errors::AppError;

/// Everything the prompt needs to write one letter. Field names are camelCase
/// on the wire; unknown fields (such as a client-side `apiKey`) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoverLetterRequest {
    // Company & role
    pub company_name: String,
    pub company_address: String,
    pub job_title: String,
    pub job_description: String,
    pub company_values: Option<String>,
    // Hiring manager
    pub hiring_manager_name: Option<String>,
    pub hiring_manager_title: Option<String>,
    // Candidate contact
    pub candidate_name: String,
    pub candidate_email: Option<String>,
    pub candidate_phone: Option<String>,
    pub candidate_address: Option<String>,
    // Candidate background
    pub years_of_experience: Option<String>,
    pub top_achievements: String,
    pub relevant_skills: String,
    // Motivation
    pub why_this_company: Option<String>,
    pub why_this_role: Option<String>,
    pub additional_context: Option<String>,
}

impl CoverLetterRequest {
    /// Wire names of required fields that are missing or blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("companyName", &self.company_name),
            ("jobTitle", &self.job_title),
            ("jobDescription", &self.job_description),
            ("candidateName", &self.candidate_name),
            ("topAchievements", &self.top_achievements),
            ("relevantSkills", &self.relevant_skills),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}

/// An optional form value, or `None` when it was left empty.
pub fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
