use axum::{
    extract::{Path, State},
    response::Response,
};
use folio_content::Project;

use crate::{
    error::AppError,
    routes::AppState,
    template::{Template, Theme},
};

#[derive(askama::Template)]
#[template(path = "project.html")]
pub struct ProjectTemplate {
    pub theme: Theme,
    pub site_title: String,
    pub project: &'static Project,
}

/// GET /projects/{id} - project detail view
pub async fn page(
    template: Template,
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let project = folio_content::project_by_id(&id).ok_or(AppError::NotFound)?;

    let theme = template.theme;
    Ok(template.render(ProjectTemplate {
        theme,
        site_title: app_state.config.site.title.clone(),
        project,
    }))
}
