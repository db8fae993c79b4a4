use crate::db::SharedStorage;
use crate::models::*;

use super::{IdGenerator, StoreError};

/// Storage key holding the serialized [`PortfolioData`].
pub const CONTENT_KEY: &str = "portfolio_data";

/// Placeholder host for résumé "uploads". No file is stored anywhere.
const RESUME_UPLOAD_BASE: &str = "https://example.com/resumes";

// TODO: confirm with the site owner whether updates to unknown ids should be
// rejected instead of ignored.
/// Holds the portfolio document and mirrors it to storage.
///
/// # Persistence
/// Every mutating call rewrites the full document under [`CONTENT_KEY`],
/// including calls that end up changing nothing. There is no conflict
/// detection against other writers of the same key.
///
/// # Missing ids
/// `update_*` and `delete_*` with an unknown id leave the collection as it
/// was and report success.
pub struct ContentStore {
    storage: SharedStorage,
    ids: Box<dyn IdGenerator>,
    data: PortfolioData,
}

impl ContentStore {
    /// Load the stored document, or fall back to the built-in sample.
    ///
    /// The sample is not written back until the first mutation. A stored
    /// document that fails to parse is an error; it is never replaced by the
    /// sample.
    pub fn load(storage: SharedStorage, ids: Box<dyn IdGenerator>) -> Result<Self, StoreError> {
        let data = match storage.get_item(CONTENT_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|error| StoreError::Corrupt {
                key: CONTENT_KEY,
                error,
            })?,
            None => {
                tracing::debug!("No stored portfolio, using built-in content");
                PortfolioData::default()
            }
        };

        Ok(Self { storage, ids, data })
    }

    pub fn get(&self) -> &PortfolioData {
        &self.data
    }

    // ============================================================
    // Personal info
    // ============================================================

    /// Replace personal info wholesale. Fields are not merged.
    pub fn update_personal_info(&mut self, info: PersonalInfo) -> Result<(), StoreError> {
        self.data.personal_info = info;
        self.persist()
    }

    /// Set or clear the résumé link, keeping every other personal field.
    pub fn set_resume_url(&mut self, url: Option<String>) -> Result<(), StoreError> {
        let info = PersonalInfo {
            resume_url: url,
            ..self.data.personal_info.clone()
        };
        self.update_personal_info(info)
    }

    /// Link a résumé by file name and return the URL that was stored.
    pub fn upload_resume(&mut self, file_name: &str) -> Result<String, StoreError> {
        let url = resume_upload_url(file_name);
        self.set_resume_url(Some(url.clone()))?;
        Ok(url)
    }

    // ============================================================
    // Projects
    // ============================================================

    /// Append a project and return its new id.
    pub fn add_project(&mut self, input: NewProject) -> Result<String, StoreError> {
        let id = fresh_id(self.ids.as_mut(), &self.data.projects, |p| &p.id);
        self.data.projects.push(input.with_id(id.clone()));
        self.persist()?;
        Ok(id)
    }

    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) -> Result<(), StoreError> {
        match self.data.projects.iter_mut().find(|p| p.id == id) {
            Some(project) => patch.apply(project),
            None => tracing::debug!("update_project: no project with id {}", id),
        }
        self.persist()
    }

    pub fn delete_project(&mut self, id: &str) -> Result<(), StoreError> {
        self.data.projects.retain(|p| p.id != id);
        self.persist()
    }

    // ============================================================
    // Experience
    // ============================================================

    pub fn add_experience(&mut self, input: NewExperience) -> Result<String, StoreError> {
        let id = fresh_id(self.ids.as_mut(), &self.data.experience, |e| &e.id);
        self.data.experience.push(input.with_id(id.clone()));
        self.persist()?;
        Ok(id)
    }

    pub fn update_experience(
        &mut self,
        id: &str,
        patch: ExperiencePatch,
    ) -> Result<(), StoreError> {
        match self.data.experience.iter_mut().find(|e| e.id == id) {
            Some(experience) => patch.apply(experience),
            None => tracing::debug!("update_experience: no experience with id {}", id),
        }
        self.persist()
    }

    pub fn delete_experience(&mut self, id: &str) -> Result<(), StoreError> {
        self.data.experience.retain(|e| e.id != id);
        self.persist()
    }

    // ============================================================
    // Skills
    // ============================================================

    pub fn add_skill(&mut self, input: NewSkill) -> Result<String, StoreError> {
        let id = fresh_id(self.ids.as_mut(), &self.data.skills, |s| &s.id);
        self.data.skills.push(input.with_id(id.clone()));
        self.persist()?;
        Ok(id)
    }

    pub fn update_skill(&mut self, id: &str, patch: SkillPatch) -> Result<(), StoreError> {
        match self.data.skills.iter_mut().find(|s| s.id == id) {
            Some(skill) => patch.apply(skill),
            None => tracing::debug!("update_skill: no skill with id {}", id),
        }
        self.persist()
    }

    pub fn delete_skill(&mut self, id: &str) -> Result<(), StoreError> {
        self.data.skills.retain(|s| s.id != id);
        self.persist()
    }

    fn persist(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.data).map_err(|error| StoreError::Serialize {
            key: CONTENT_KEY,
            error,
        })?;
        self.storage.set_item(CONTENT_KEY, &raw)?;
        Ok(())
    }
}

/// URL assigned to a résumé "uploaded" under `file_name`.
pub fn resume_upload_url(file_name: &str) -> String {
    format!("{}/{}", RESUME_UPLOAD_BASE, file_name)
}

fn fresh_id<T>(ids: &mut dyn IdGenerator, existing: &[T], id_of: impl Fn(&T) -> &String) -> String {
    loop {
        let id = ids.next_id();
        if !existing.iter().any(|e| *id_of(e) == id) {
            return id;
        }
    }
}
