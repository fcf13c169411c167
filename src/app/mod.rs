//! Application core: the JSON Resume data model and its support modules.
//!
//! # Structure
//!
//! - `resume.rs` - The `Resume` document and its per-section record types
//! - `section.rs` - Bounds-checked ordered record list shared by all sections
//! - `error.rs` - Error taxonomy for document and file operations
//! - `settings.rs` - Window-geometry settings persisted in the config dir

pub mod error;
pub mod resume;
pub mod section;
pub mod settings;

// Re-exports for convenient external access
pub use error::{ResumeError, Result};
pub use resume::{
    AwardEntry, Basics, EducationEntry, InterestEntry, LanguageEntry, Location, Profile,
    PublicationEntry, ReferenceEntry, Resume, SkillEntry, VolunteerEntry, WorkEntry,
};
pub use section::Section;
pub use settings::AppSettings;
