//! Domain models for folio.
//!
//! # Content
//!
//! - [`PortfolioData`]: The aggregate document. One [`PersonalInfo`] plus three
//!   ordered collections. It is always persisted whole.
//! - [`Project`], [`Experience`], [`Skill`]: Collection entities, each carrying
//!   an opaque string id unique within its collection.
//!
//! # Session
//!
//! - [`Identity`]: The signed-in admin, held by the session store.
//!
//! Every model serializes with camelCase keys; that JSON shape is the stored
//! format, so renaming a field is a storage migration.

mod experience;
mod identity;
mod personal;
mod portfolio;
mod project;
mod skill;

pub use experience::*;
pub use identity::*;
pub use personal::*;
pub use portfolio::*;
pub use project::*;
pub use skill::*;
