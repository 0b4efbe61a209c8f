use std::str::FromStr;

use axum::{
    extract::{Query, State},
    response::Response,
};
use folio_content::{Profile, Project, ProjectCategory, Skill, SkillCategory};
use serde::Deserialize;
use strum::VariantArray;

use super::contact::ContactView;
use crate::{
    routes::AppState,
    template::{Template, Theme},
};

#[derive(Deserialize)]
pub struct PageQuery {
    pub category: Option<String>,
    pub tab: Option<String>,
}

/// One gallery filter or skills tab link.
pub struct FilterTab {
    pub label: String,
    pub href: String,
    pub active: bool,
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub theme: Theme,
    pub site_title: String,
    pub profile: &'static Profile,
    pub category_tabs: Vec<FilterTab>,
    pub projects: Vec<&'static Project>,
    pub skill_tabs: Vec<FilterTab>,
    pub skills: Vec<&'static Skill>,
    pub contact: ContactView,
}

pub async fn page(
    template: Template,
    State(app_state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let category = query
        .category
        .as_deref()
        .and_then(|value| ProjectCategory::from_str(value).ok());
    let tab = query
        .tab
        .as_deref()
        .and_then(|value| SkillCategory::from_str(value).ok());

    // The draft survives a failed attempt, so a reload keeps the typed
    // values in the form.
    let contact = ContactView::from_draft(&app_state.contact.draft());

    page_response(template, &app_state, category, tab, contact)
}

/// Render the single page. Shared by the contact action so a form post
/// re-renders the same view with its result.
pub(crate) fn page_response(
    template: Template,
    app_state: &AppState,
    category: Option<ProjectCategory>,
    tab: Option<SkillCategory>,
    contact: ContactView,
) -> Response {
    let groups = folio_content::skill_groups();
    let active_tab = tab
        .or_else(|| groups.first().map(|(category, _)| *category))
        .unwrap_or(SkillCategory::Frontend);

    let mut category_tabs = vec![FilterTab {
        label: "All".to_owned(),
        href: "/#projects".to_owned(),
        active: category.is_none(),
    }];
    for variant in ProjectCategory::VARIANTS {
        category_tabs.push(FilterTab {
            label: variant.label().to_owned(),
            href: format!("/?category={variant}#projects"),
            active: category == Some(*variant),
        });
    }

    let skill_tabs = groups
        .iter()
        .map(|(variant, _)| FilterTab {
            label: variant.label().to_owned(),
            href: format!("/?tab={variant}#skills"),
            active: *variant == active_tab,
        })
        .collect();

    let skills = groups
        .into_iter()
        .find(|(variant, _)| *variant == active_tab)
        .map(|(_, group)| group)
        .unwrap_or_default();

    let theme = template.theme;
    template.render(IndexTemplate {
        theme,
        site_title: app_state.config.site.title.clone(),
        profile: folio_content::profile(),
        category_tabs,
        projects: folio_content::filter_projects(category),
        skill_tabs,
        skills,
        contact,
    })
}
