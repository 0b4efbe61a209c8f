use strum::VariantArray;

use crate::{
    EducationEntry, ExperienceEntry, Profile, Project, ProjectCategory, Skill, SkillCategory,
    SocialLink,
};

static PROFILE: Profile = Profile {
    name: "Shivam Gupta",
    title: "Full Stack Developer",
    tagline: "I build accessible, responsive, and performant web applications \
              with modern technologies.",
    email: "shivamgupta0097@gmail.com",
    location: "Haryana",
    availability: "I'm currently available for freelance work and full-time \
                   positions. If you have a project that needs some creative \
                   work, feel free to contact me.",
    experience: &[ExperienceEntry {
        role: "Backend developer intern",
        organization: "Ezymaid",
        period: "Feb 2025 - Present",
        summary: &[
            "Worked with the architecture team to design the architecture and \
             implement important features in the application.",
            "The tech stack there included Node.js, MongoDB and Express.",
        ],
    }],
    education: &[
        EducationEntry {
            degree: "Bachelor's in Software Engineering",
            school: "Chandigarh University",
            period: "2021 - 2025",
            summary: "Gaining a solid foundation in software development, \
                      algorithms, and data structures.",
        },
        EducationEntry {
            degree: "Class 12th in Science",
            school: "DAV Public School",
            period: "2020 - 2021",
            summary: "",
        },
    ],
    social: &[
        SocialLink {
            label: "GitHub",
            url: "https://github.com/sg0097",
        },
        SocialLink {
            label: "LinkedIn",
            url: "https://www.linkedin.com/in/shivam-guptag/",
        },
        SocialLink {
            label: "Twitter",
            url: "https://twitter.com",
        },
        SocialLink {
            label: "Dribbble",
            url: "https://dribbble.com",
        },
    ],
};

static PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "E-Commerce Platform",
        description: "A full-featured online shopping platform with cart, checkout, \
                      and payment integration.",
        category: ProjectCategory::Web,
        image: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=800&q=80",
        technologies: &["React", "Node.js", "MongoDB", "Stripe"],
        demo_url: Some("https://example.com/demo"),
        repo_url: Some("https://github.com/example/project"),
        details: "This e-commerce platform features user authentication, product \
                  catalog with filtering and search, shopping cart functionality, \
                  secure checkout process with Stripe integration, order history, \
                  and admin dashboard for product management.",
    },
    Project {
        id: "2",
        title: "Task Management App",
        description: "A productivity app for managing tasks, projects, and team \
                      collaboration.",
        category: ProjectCategory::Mobile,
        image: "https://images.unsplash.com/photo-1540350394557-8d14678e7f91?w=800&q=80",
        technologies: &["React Native", "Firebase", "Redux"],
        demo_url: Some("https://example.com/demo2"),
        repo_url: Some("https://github.com/example/project2"),
        details: "This task management application allows users to create and \
                  organize tasks, set priorities and deadlines, collaborate with \
                  team members, track progress with visual charts, and receive \
                  notifications for upcoming deadlines.",
    },
    Project {
        id: "3",
        title: "Financial Dashboard",
        description: "Interactive dashboard for visualizing and analyzing financial \
                      data.",
        category: ProjectCategory::Data,
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80",
        technologies: &["D3.js", "React", "Express", "PostgreSQL"],
        demo_url: Some("https://example.com/demo3"),
        repo_url: Some("https://github.com/example/project3"),
        details: "This financial dashboard provides real-time data visualization \
                  with interactive charts and graphs, customizable widgets for \
                  different financial metrics, historical data analysis, and export \
                  functionality for reports.",
    },
    Project {
        id: "4",
        title: "Social Media Platform",
        description: "A community-focused social platform with real-time features.",
        category: ProjectCategory::Web,
        image: "https://images.unsplash.com/photo-1611162617213-7d7a39e9b1d7?w=800&q=80",
        technologies: &["React", "Socket.io", "Express", "MongoDB"],
        demo_url: Some("https://example.com/demo4"),
        repo_url: Some("https://github.com/example/project4"),
        details: "This social media platform includes user profiles, news feed with \
                  infinite scrolling, real-time messaging and notifications, content \
                  sharing capabilities, and community groups and forums.",
    },
    Project {
        id: "5",
        title: "Fitness Tracking App",
        description: "Mobile application for tracking workouts and health metrics.",
        category: ProjectCategory::Mobile,
        image: "https://images.unsplash.com/photo-1476480862126-209bfaa8edc8?w=800&q=80",
        technologies: &["Flutter", "Firebase", "HealthKit API"],
        demo_url: Some("https://example.com/demo5"),
        repo_url: Some("https://github.com/example/project5"),
        details: "This fitness tracking app allows users to log workouts and track \
                  progress, monitor health metrics like heart rate and steps, create \
                  custom workout plans, set goals and receive achievements, and view \
                  progress statistics and trends.",
    },
    Project {
        id: "6",
        title: "Weather Visualization",
        description: "Interactive weather data visualization with forecasting.",
        category: ProjectCategory::Data,
        image: "https://images.unsplash.com/photo-1504608524841-42fe6f032b4b?w=800&q=80",
        technologies: &["JavaScript", "D3.js", "Weather API", "Canvas"],
        demo_url: Some("https://example.com/demo6"),
        repo_url: Some("https://github.com/example/project6"),
        details: "This weather visualization tool features interactive maps with \
                  real-time weather data, 7-day forecasting with detailed metrics, \
                  historical weather data comparison, location-based weather alerts, \
                  and responsive design for all devices.",
    },
];

static SKILLS: &[Skill] = &[
    Skill {
        name: "React",
        proficiency: 90,
        category: SkillCategory::Frontend,
    },
    Skill {
        name: "TypeScript",
        proficiency: 85,
        category: SkillCategory::Languages,
    },
    Skill {
        name: "Node.js",
        proficiency: 80,
        category: SkillCategory::Backend,
    },
    Skill {
        name: "CSS/SCSS",
        proficiency: 85,
        category: SkillCategory::Frontend,
    },
    Skill {
        name: "GraphQL",
        proficiency: 75,
        category: SkillCategory::Backend,
    },
    Skill {
        name: "Python",
        proficiency: 70,
        category: SkillCategory::Languages,
    },
    Skill {
        name: "Docker",
        proficiency: 65,
        category: SkillCategory::DevOps,
    },
    Skill {
        name: "AWS",
        proficiency: 60,
        category: SkillCategory::DevOps,
    },
    Skill {
        name: "MongoDB",
        proficiency: 75,
        category: SkillCategory::Backend,
    },
    Skill {
        name: "Redux",
        proficiency: 80,
        category: SkillCategory::Frontend,
    },
];

pub fn profile() -> &'static Profile {
    &PROFILE
}

pub fn projects() -> &'static [Project] {
    PROJECTS
}

pub fn skills() -> &'static [Skill] {
    SKILLS
}

/// Projects in gallery order, optionally narrowed to one category.
pub fn filter_projects(category: Option<ProjectCategory>) -> Vec<&'static Project> {
    projects()
        .iter()
        .filter(|project| category.is_none_or(|category| project.category == category))
        .collect()
}

pub fn project_by_id(id: &str) -> Option<&'static Project> {
    projects().iter().find(|project| project.id == id)
}

/// Skills grouped by category, in tab display order. Categories without any
/// skill are omitted.
pub fn skill_groups() -> Vec<(SkillCategory, Vec<&'static Skill>)> {
    SkillCategory::VARIANTS
        .iter()
        .filter_map(|category| {
            let group: Vec<&'static Skill> = skills()
                .iter()
                .filter(|skill| skill.category == *category)
                .collect();
            if group.is_empty() {
                None
            } else {
                Some((*category, group))
            }
        })
        .collect()
}
