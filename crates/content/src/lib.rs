//! Compiled-in portfolio content: projects, skills and the owner profile.
//!
//! Everything here is hand-authored static data consumed by the rendering
//! layer. There is no storage and nothing mutates these records at runtime.

mod catalog;
mod profile;
mod project;
mod skill;

pub use catalog::{filter_projects, profile, project_by_id, projects, skill_groups, skills};
pub use profile::{EducationEntry, ExperienceEntry, Profile, SocialLink};
pub use project::{Project, ProjectCategory};
pub use skill::{Skill, SkillCategory};
