/// Static owner profile: hero copy, about/experience blocks, contact and
/// social metadata. The page shell consumes this without validating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub availability: &'static str,
    pub experience: &'static [ExperienceEntry],
    pub education: &'static [EducationEntry],
    pub social: &'static [SocialLink],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub summary: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}
