use serde::{Deserialize, Serialize};

use super::{Experience, PersonalInfo, Project, Skill, SkillGroup, SocialLinks};

/// Everything the portfolio shows, persisted as a single document.
///
/// Collections keep insertion order. Ids are unique within a collection but
/// the same id may appear in two different collections (the built-in data
/// numbers each collection from "1").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub personal_info: PersonalInfo,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
}

impl PortfolioData {
    /// Projects flagged as featured, in collection order.
    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    /// Projects not flagged as featured, in collection order.
    pub fn other_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| !p.featured).collect()
    }

    /// Distinct categories in order of first appearance.
    pub fn skill_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for skill in &self.skills {
            if !categories.contains(&skill.category.as_str()) {
                categories.push(&skill.category);
            }
        }
        categories
    }

    /// Skills grouped by category. Groups follow first appearance of their
    /// category; skills keep collection order within a group.
    pub fn skills_by_category(&self) -> Vec<SkillGroup> {
        self.skill_categories()
            .into_iter()
            .map(|category| SkillGroup {
                category: category.to_string(),
                skills: self
                    .skills
                    .iter()
                    .filter(|s| s.category == category)
                    .cloned()
                    .collect(),
            })
            .collect()
    }
}

impl Default for PortfolioData {
    /// The sample portfolio served until the owner saves their own content.
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo {
                name: "Tony Stark".to_string(),
                title: "Genius, Billionaire, Playboy, Philanthropist".to_string(),
                bio: "Innovative engineer and entrepreneur with expertise in advanced technology \
                      development, artificial intelligence, and sustainable energy solutions. \
                      Passionate about creating technology that makes the world a better place."
                    .to_string(),
                email: "tony@starkindustries.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                location: "Malibu, CA".to_string(),
                resume_url: None,
                social_links: SocialLinks {
                    github: Some("https://github.com/tonystark".to_string()),
                    linkedin: Some("https://linkedin.com/in/tonystark".to_string()),
                    twitter: Some("https://twitter.com/tonystark".to_string()),
                },
            },
            projects: vec![
                project(
                    "1",
                    "Arc Reactor Technology",
                    "Revolutionary clean energy source using palladium core technology. \
                     Sustainable, efficient, and virtually unlimited power generation.",
                    &["Palladium", "Nuclear Physics", "Energy Engineering"],
                    "https://images.pexels.com/photos/2085998/pexels-photo-2085998.jpeg?auto=compress&cs=tinysrgb&w=600",
                    true,
                ),
                project(
                    "2",
                    "JARVIS AI Assistant",
                    "Advanced AI system for home automation, security, and personal assistance. \
                     Natural language processing with machine learning capabilities.",
                    &["AI/ML", "Natural Language Processing", "Neural Networks"],
                    "https://images.pexels.com/photos/3861969/pexels-photo-3861969.jpeg?auto=compress&cs=tinysrgb&w=600",
                    true,
                ),
                project(
                    "3",
                    "Holographic Interface",
                    "Next-generation user interface using holographic projection technology. \
                     Intuitive gesture controls and 3D visualization.",
                    &["Holography", "Gesture Recognition", "AR/VR"],
                    "https://images.pexels.com/photos/5380664/pexels-photo-5380664.jpeg?auto=compress&cs=tinysrgb&w=600",
                    false,
                ),
            ],
            experience: vec![
                Experience {
                    id: "1".to_string(),
                    company: "Stark Industries".to_string(),
                    position: "CEO & Chief Technology Officer".to_string(),
                    duration: "2008 - Present".to_string(),
                    description: "Leading innovation in clean energy, artificial intelligence, \
                                  and advanced manufacturing. Transformed company from weapons \
                                  manufacturer to sustainable technology leader."
                        .to_string(),
                    technologies: strings(&["Leadership", "Innovation", "Clean Energy", "AI"]),
                },
                Experience {
                    id: "2".to_string(),
                    company: "MIT".to_string(),
                    position: "Guest Lecturer".to_string(),
                    duration: "2010 - 2015".to_string(),
                    description: "Taught advanced engineering courses and mentored graduate \
                                  students in sustainable technology development."
                        .to_string(),
                    technologies: strings(&["Education", "Engineering", "Research"]),
                },
            ],
            skills: vec![
                skill("1", "Mechanical Engineering", 98, "Engineering"),
                skill("2", "Artificial Intelligence", 95, "Technology"),
                skill("3", "Physics", 92, "Science"),
                skill("4", "Leadership", 88, "Management"),
                skill("5", "Innovation", 99, "Creative"),
            ],
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn project(
    id: &str,
    title: &str,
    description: &str,
    technologies: &[&str],
    image_url: &str,
    featured: bool,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        technologies: strings(technologies),
        image_url: image_url.to_string(),
        demo_url: None,
        github_url: None,
        featured,
    }
}

fn skill(id: &str, name: &str, level: i64, category: &str) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        level,
        category: category.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_data_splits_featured_projects() {
        let data = PortfolioData::default();

        let featured: Vec<_> = data.featured_projects().into_iter().map(|p| p.id.as_str()).collect();
        let other: Vec<_> = data.other_projects().into_iter().map(|p| p.id.as_str()).collect();

        assert_eq!(featured, vec!["1", "2"]);
        assert_eq!(other, vec!["3"]);
    }

    #[test]
    fn skills_group_by_first_appearance_of_category() {
        let mut data = PortfolioData::default();
        data.skills = vec![
            skill("a", "Rust", 90, "Languages"),
            skill("b", "Postgres", 70, "Storage"),
            skill("c", "Go", 60, "Languages"),
        ];

        let groups = data.skills_by_category();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Languages");
        assert_eq!(
            groups[0].skills.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            vec!["Rust", "Go"]
        );
        assert_eq!(groups[1].category, "Storage");
        assert_eq!(data.skill_categories(), vec!["Languages", "Storage"]);
    }

    #[test]
    fn serializes_with_camel_case_keys_and_omits_missing_links() {
        let data = PortfolioData::default();
        let json = serde_json::to_value(&data).unwrap();

        assert!(json.get("personalInfo").is_some());
        assert!(json["personalInfo"].get("resumeUrl").is_none());
        assert_eq!(json["projects"][0]["imageUrl"], data.projects[0].image_url);
        assert!(json["projects"][0].get("demoUrl").is_none());
    }
}
