use serde::{Deserialize, Serialize};

/// One position in the work history timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    /// Display label such as "2008 - Present". Not parsed.
    pub duration: String,
    pub description: String,
    pub technologies: Vec<String>,
}

/// Input for adding an experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExperience {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl NewExperience {
    pub(crate) fn with_id(self, id: String) -> Experience {
        Experience {
            id,
            company: self.company,
            position: self.position,
            duration: self.duration,
            description: self.description,
            technologies: self.technologies,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
}

impl ExperiencePatch {
    pub(crate) fn apply(self, experience: &mut Experience) {
        if let Some(company) = self.company {
            experience.company = company;
        }
        if let Some(position) = self.position {
            experience.position = position;
        }
        if let Some(duration) = self.duration {
            experience.duration = duration;
        }
        if let Some(description) = self.description {
            experience.description = description;
        }
        if let Some(technologies) = self.technologies {
            experience.technologies = technologies;
        }
    }
}
