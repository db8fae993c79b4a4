use serde::{Deserialize, Serialize};

/// A named skill with a proficiency level.
///
/// The editor limits `level` to 1..=100. The store accepts any value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: i64,
    /// Free-text grouping label.
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSkill {
    pub name: String,
    pub level: i64,
    pub category: String,
}

impl NewSkill {
    pub(crate) fn with_id(self, id: String) -> Skill {
        Skill {
            id,
            name: self.name,
            level: self.level,
            category: self.category,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl SkillPatch {
    pub(crate) fn apply(self, skill: &mut Skill) {
        if let Some(name) = self.name {
            skill.name = name;
        }
        if let Some(level) = self.level {
            skill.level = level;
        }
        if let Some(category) = self.category {
            skill.category = category;
        }
    }
}

/// Skills sharing one category, as rendered by the skills section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}
