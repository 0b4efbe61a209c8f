use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, VariantArray,
)]
#[strum(serialize_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Data,
}

impl ProjectCategory {
    /// Human label for the gallery filter tabs.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "Web",
            ProjectCategory::Mobile => "Mobile",
            ProjectCategory::Data => "Data",
        }
    }
}

/// One portfolio project record as shown in the gallery and the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ProjectCategory,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub demo_url: Option<&'static str>,
    pub repo_url: Option<&'static str>,
    pub details: &'static str,
}
