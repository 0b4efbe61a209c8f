use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Skill categories in tab display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, VariantArray,
)]
#[strum(serialize_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Languages,
    Backend,
    DevOps,
}

impl SkillCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Languages => "Languages",
            SkillCategory::Backend => "Backend",
            SkillCategory::DevOps => "DevOps",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0-100.
    pub proficiency: u8,
    pub category: SkillCategory,
}
