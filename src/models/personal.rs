use serde::{Deserialize, Serialize};

/// Owner details shown in the hero, about and contact sections.
///
/// All fields are free-form text. Nothing here is validated; the editor only
/// offers input type hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Link to a résumé document. Uploads only ever produce a placeholder URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

/// Body for setting the résumé link directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeLinkInput {
    pub url: String,
}

/// Body for the résumé "upload". Only the file name is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeUploadInput {
    pub file_name: String,
}
