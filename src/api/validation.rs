//! Request checks for the admin editors.
//!
//! The stores accept anything; these checks reject what the editing forms
//! would never submit: blank required fields, an empty technology list, and
//! skill levels outside 1..=100.

use crate::models::*;

const LEVEL_RANGE: std::ops::RangeInclusive<i64> = 1..=100;

pub fn new_project(input: &NewProject) -> Result<(), String> {
    required("title", &input.title)?;
    required("description", &input.description)?;
    required("imageUrl", &input.image_url)?;
    technologies(&input.technologies)
}

pub fn project_patch(patch: &ProjectPatch) -> Result<(), String> {
    optional("title", patch.title.as_deref())?;
    optional("description", patch.description.as_deref())?;
    optional("imageUrl", patch.image_url.as_deref())?;
    patch.technologies.as_deref().map_or(Ok(()), technologies)
}

pub fn new_experience(input: &NewExperience) -> Result<(), String> {
    required("company", &input.company)?;
    required("position", &input.position)?;
    required("duration", &input.duration)?;
    required("description", &input.description)?;
    technologies(&input.technologies)
}

pub fn experience_patch(patch: &ExperiencePatch) -> Result<(), String> {
    optional("company", patch.company.as_deref())?;
    optional("position", patch.position.as_deref())?;
    optional("duration", patch.duration.as_deref())?;
    optional("description", patch.description.as_deref())?;
    patch.technologies.as_deref().map_or(Ok(()), technologies)
}

pub fn new_skill(input: &NewSkill) -> Result<(), String> {
    required("name", &input.name)?;
    required("category", &input.category)?;
    level(input.level)
}

pub fn skill_patch(patch: &SkillPatch) -> Result<(), String> {
    optional("name", patch.name.as_deref())?;
    optional("category", patch.category.as_deref())?;
    patch.level.map_or(Ok(()), level)
}

fn required(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", field))
    } else {
        Ok(())
    }
}

fn optional(field: &str, value: Option<&str>) -> Result<(), String> {
    value.map_or(Ok(()), |v| required(field, v))
}

fn technologies(values: &[String]) -> Result<(), String> {
    if values.is_empty() || values.iter().any(|v| v.trim().is_empty()) {
        Err("technologies must list at least one non-blank name".to_string())
    } else {
        Ok(())
    }
}

fn level(value: i64) -> Result<(), String> {
    if LEVEL_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(format!("level must be between 1 and 100, got {}", value))
    }
}
