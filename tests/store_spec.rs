use std::sync::Arc;

use folio::db::{Database, MemoryStorage, SharedStorage, Storage};
use folio::models::*;
use folio::store::*;
use speculate2::speculate;

fn new_project(title: &str) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: "Built for testing".to_string(),
        technologies: vec!["Rust".to_string(), "SQLite".to_string()],
        image_url: "https://example.com/x.png".to_string(),
        demo_url: None,
        github_url: Some("https://github.com/example/x".to_string()),
        featured: false,
    }
}

fn new_skill(name: &str, category: &str) -> NewSkill {
    NewSkill {
        name: name.to_string(),
        level: 80,
        category: category.to_string(),
    }
}

/// Storage whose removals always fail.
struct StickyStorage(MemoryStorage);

impl Storage for StickyStorage {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.0.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.0.set_item(key, value)
    }

    fn remove_item(&self, _key: &str) -> anyhow::Result<()> {
        anyhow::bail!("storage is read-only")
    }
}

fn content_store(storage: &SharedStorage) -> ContentStore {
    ContentStore::load(storage.clone(), Box::new(SequentialIds::new()))
        .expect("Failed to load content store")
}

fn session_store(storage: &SharedStorage) -> SessionStore {
    SessionStore::load(storage.clone(), Credentials::default())
        .expect("Failed to load session store")
}

speculate! {
    before {
        let storage: SharedStorage = Arc::new(MemoryStorage::new());
    }

    describe "content store" {
        describe "load" {
            it "starts from the built-in portfolio without writing it" {
                let store = content_store(&storage);

                assert_eq!(store.get(), &PortfolioData::default());
                assert!(storage.get_item(CONTENT_KEY).unwrap().is_none());
            }

            it "replaces the built-in portfolio with the stored one" {
                let mut stored = PortfolioData::default();
                stored.projects.clear();
                stored.personal_info.name = "Pepper Potts".to_string();
                storage
                    .set_item(CONTENT_KEY, &serde_json::to_string(&stored).unwrap())
                    .unwrap();

                let store = content_store(&storage);

                assert_eq!(store.get(), &stored);
            }

            it "fails on a corrupt stored document instead of using defaults" {
                storage.set_item(CONTENT_KEY, "{not json").unwrap();

                let result = ContentStore::load(storage.clone(), Box::new(SequentialIds::new()));

                assert!(matches!(result, Err(StoreError::Corrupt { key: CONTENT_KEY, .. })));
            }

            it "reloads a persisted document unchanged" {
                let mut store = content_store(&storage);
                store.add_project(new_project("Mark II")).unwrap();
                store.add_skill(new_skill("Welding", "Workshop")).unwrap();
                store.set_resume_url(Some("https://example.com/cv.pdf".to_string())).unwrap();

                let reloaded = content_store(&storage);

                assert_eq!(reloaded.get(), store.get());
            }
        }

        describe "personal info" {
            it "replaces the whole record" {
                let mut store = content_store(&storage);
                let info = PersonalInfo {
                    name: "Pepper Potts".to_string(),
                    title: "CEO".to_string(),
                    bio: String::new(),
                    email: "pepper@example.com".to_string(),
                    phone: String::new(),
                    location: "New York".to_string(),
                    resume_url: None,
                    social_links: SocialLinks::default(),
                };

                store.update_personal_info(info.clone()).unwrap();

                assert_eq!(store.get().personal_info, info);
                assert!(storage.get_item(CONTENT_KEY).unwrap().is_some());
            }

            it "sets and clears the resume link without touching other fields" {
                let mut store = content_store(&storage);
                let before = store.get().personal_info.clone();

                let url = store.upload_resume("tony.pdf").unwrap();
                assert_eq!(url, "https://example.com/resumes/tony.pdf");
                assert_eq!(store.get().personal_info.resume_url.as_deref(), Some(url.as_str()));

                store.set_resume_url(None).unwrap();
                assert_eq!(store.get().personal_info, before);
            }
        }

        describe "projects" {
            it "appends new projects with fresh ids" {
                let mut store = content_store(&storage);

                let id = store.add_project(new_project("Mark II")).unwrap();

                let projects = &store.get().projects;
                assert_eq!(projects.len(), 4);
                assert_eq!(projects[3].id, id);
                assert_eq!(projects[3].title, "Mark II");
            }

            it "skips generated ids already used in the collection" {
                let mut store = content_store(&storage);

                // The built-in projects use ids 1 to 3
                let id = store.add_project(new_project("Mark II")).unwrap();

                assert_eq!(id, "4");
            }

            it "restores the original collection after add then delete" {
                let mut store = content_store(&storage);
                let original = store.get().projects.clone();

                let id = store.add_project(new_project("X")).unwrap();
                store.delete_project(&id).unwrap();

                assert_eq!(store.get().projects, original);
            }

            it "merges only the fields given in an update" {
                let mut store = content_store(&storage);
                let before = store.get().projects[1].clone();

                store.update_project("2", ProjectPatch {
                    featured: Some(false),
                    demo_url: Some("https://jarvis.example.com".to_string()),
                    ..Default::default()
                }).unwrap();

                let after = &store.get().projects[1];
                assert_eq!(after.id, "2");
                assert!(!after.featured);
                assert_eq!(after.demo_url.as_deref(), Some("https://jarvis.example.com"));
                assert_eq!(after.title, before.title);
                assert_eq!(after.technologies, before.technologies);
            }

            it "ignores updates to unknown ids" {
                let mut store = content_store(&storage);
                let before = serde_json::to_string(&store.get().projects).unwrap();

                store.update_project("missing", ProjectPatch {
                    title: Some("Ghost".to_string()),
                    ..Default::default()
                }).unwrap();

                assert_eq!(serde_json::to_string(&store.get().projects).unwrap(), before);
            }

            it "treats deleting an absent id as a no-op" {
                let mut store = content_store(&storage);
                store.delete_project("1").unwrap();
                let once = store.get().projects.clone();

                store.delete_project("1").unwrap();

                assert_eq!(store.get().projects, once);
                assert_eq!(once.len(), 2);
            }

            it "keeps ids unique and order stable across mixed edits" {
                let mut store = content_store(&storage);

                let a = store.add_project(new_project("A")).unwrap();
                let b = store.add_project(new_project("B")).unwrap();
                store.delete_project("2").unwrap();
                store.update_project(&a, ProjectPatch {
                    title: Some("A2".to_string()),
                    ..Default::default()
                }).unwrap();
                let c = store.add_project(new_project("C")).unwrap();

                let ids: Vec<_> = store.get().projects.iter().map(|p| p.id.clone()).collect();
                assert_eq!(ids, vec!["1".to_string(), "3".to_string(), a, b, c.clone()]);

                let mut unique = ids.clone();
                unique.sort();
                unique.dedup();
                assert_eq!(unique.len(), ids.len());
                assert_eq!(c, "6");
            }
        }

        describe "experience" {
            it "adds, updates and deletes entries" {
                let mut store = content_store(&storage);

                let id = store.add_experience(NewExperience {
                    company: "SHIELD".to_string(),
                    position: "Consultant".to_string(),
                    duration: "2012".to_string(),
                    description: "Advisory work".to_string(),
                    technologies: vec!["Strategy".to_string()],
                }).unwrap();
                assert_eq!(store.get().experience.last().unwrap().company, "SHIELD");

                store.update_experience(&id, ExperiencePatch {
                    duration: Some("2012 - 2013".to_string()),
                    ..Default::default()
                }).unwrap();
                let updated = store.get().experience.last().unwrap();
                assert_eq!(updated.duration, "2012 - 2013");
                assert_eq!(updated.position, "Consultant");

                store.delete_experience(&id).unwrap();
                assert_eq!(store.get().experience, PortfolioData::default().experience);
            }

            it "ignores updates to unknown ids" {
                let mut store = content_store(&storage);

                store.update_experience("nope", ExperiencePatch {
                    company: Some("Hammer Industries".to_string()),
                    ..Default::default()
                }).unwrap();

                assert_eq!(store.get().experience, PortfolioData::default().experience);
            }

            it "treats deleting an absent id as a no-op" {
                let mut store = content_store(&storage);

                store.delete_experience("nope").unwrap();
                store.delete_experience("2").unwrap();
                store.delete_experience("2").unwrap();

                let ids: Vec<_> = store.get().experience.iter().map(|e| e.id.as_str()).collect();
                assert_eq!(ids, vec!["1"]);
            }
        }

        describe "skills" {
            it "adds, updates and deletes skills" {
                let mut store = content_store(&storage);

                let id = store.add_skill(new_skill("Welding", "Workshop")).unwrap();
                assert_eq!(id, "6");

                store.update_skill(&id, SkillPatch {
                    level: Some(100),
                    ..Default::default()
                }).unwrap();
                let skill = store.get().skills.last().unwrap();
                assert_eq!(skill.level, 100);
                assert_eq!(skill.category, "Workshop");

                store.delete_skill(&id).unwrap();
                store.delete_skill(&id).unwrap();
                assert_eq!(store.get().skills, PortfolioData::default().skills);
            }

            it "ignores updates to unknown ids" {
                let mut store = content_store(&storage);
                let before = serde_json::to_string(&store.get().skills).unwrap();

                store.update_skill("missing", SkillPatch {
                    name: Some("Ghost".to_string()),
                    level: Some(1),
                    ..Default::default()
                }).unwrap();

                assert_eq!(serde_json::to_string(&store.get().skills).unwrap(), before);
            }

            it "does not clamp levels outside the editor range" {
                let mut store = content_store(&storage);

                store.update_skill("1", SkillPatch {
                    level: Some(250),
                    ..Default::default()
                }).unwrap();

                assert_eq!(store.get().skills[0].level, 250);
            }
        }
    }

    describe "session store" {
        it "starts signed out" {
            let session = session_store(&storage);

            assert!(!session.is_authenticated());
            assert!(!session.is_admin());
            assert!(session.identity().is_none());
        }

        it "signs in with the configured credentials" {
            let mut session = session_store(&storage);

            assert!(session.login("admin", "stark2024").unwrap());

            assert!(session.is_authenticated());
            assert!(session.is_admin());
            assert_eq!(
                storage.get_item(SESSION_KEY).unwrap().as_deref(),
                Some(r#"{"id":"1","username":"admin","isAdmin":true}"#)
            );
        }

        it "rejects any other credential pair without changing state" {
            let mut session = session_store(&storage);

            assert!(!session.login("admin", "wrong").unwrap());
            assert!(!session.login("jarvis", "stark2024").unwrap());

            assert!(!session.is_authenticated());
            assert!(storage.get_item(SESSION_KEY).unwrap().is_none());
        }

        it "removes the stored identity on logout" {
            let mut session = session_store(&storage);
            session.login("admin", "stark2024").unwrap();

            session.logout().unwrap();

            assert!(!session.is_authenticated());
            assert!(storage.get_item(SESSION_KEY).unwrap().is_none());
        }

        it "stays signed in when the stored identity cannot be removed" {
            let storage: SharedStorage = Arc::new(StickyStorage(MemoryStorage::new()));
            let mut session = session_store(&storage);
            session.login("admin", "stark2024").unwrap();

            assert!(session.logout().is_err());

            assert!(session.is_admin());
            assert!(storage.get_item(SESSION_KEY).unwrap().is_some());
        }

        it "adopts a stored identity on load" {
            session_store(&storage).login("admin", "stark2024").unwrap();

            let session = session_store(&storage);

            assert!(session.is_admin());
            assert_eq!(session.identity().unwrap().username, "admin");
        }

        it "fails on a corrupt stored identity" {
            storage.set_item(SESSION_KEY, "[]").unwrap();

            let result = SessionStore::load(storage.clone(), Credentials::default());

            assert!(matches!(result, Err(StoreError::Corrupt { key: SESSION_KEY, .. })));
        }

        it "accepts custom credentials" {
            let mut session = SessionStore::load(
                storage.clone(),
                Credentials::new("owner", "hunter2"),
            ).unwrap();

            assert!(!session.login("admin", "stark2024").unwrap());
            assert!(session.login("owner", "hunter2").unwrap());
            assert_eq!(session.status().user.unwrap().username, "owner");
        }
    }

    describe "file storage" {
        it "keeps content and session across reopen" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("folio.db");

            let saved = {
                let db = Database::open(path.clone()).expect("Failed to open database");
                db.migrate().expect("Failed to migrate");
                let storage: SharedStorage = Arc::new(db);

                let mut content = content_store(&storage);
                content.add_skill(new_skill("Flight", "Suits")).unwrap();
                session_store(&storage).login("admin", "stark2024").unwrap();
                content.get().clone()
            };

            let db = Database::open(path).expect("Failed to reopen database");
            db.migrate().expect("Failed to migrate");
            let storage: SharedStorage = Arc::new(db);

            assert_eq!(content_store(&storage).get(), &saved);
            assert!(session_store(&storage).is_admin());
        }
    }
}
