use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::template::{Template, THEME_COOKIE};

/// POST /theme - flip the light/dark cookie and return to the page.
pub async fn action(template: Template, jar: CookieJar) -> impl IntoResponse {
    let next = template.theme.toggled();
    let jar = jar.add(Cookie::build((THEME_COOKIE, next.to_string())).path("/"));

    (jar, Redirect::to("/"))
}
