use std::convert::Infallible;
use std::str::FromStr;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use strum::{Display, EnumString};

pub const THEME_COOKIE: &str = "theme";

/// Binary light/dark flag carried in a cookie. Not a theming engine; the
/// stylesheet keys off `data-theme` on the root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }
}

/// Per-request template context, extracted from the request headers.
pub struct Template {
    pub theme: Theme,
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let theme = jar
            .get(THEME_COOKIE)
            .and_then(|cookie| Theme::from_str(cookie.value()).ok())
            .unwrap_or_default();

        Ok(Template { theme })
    }
}

impl Template {
    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("failed to render template: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_between_the_two_themes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn theme_round_trips_through_its_cookie_value() {
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::from_str("dark").unwrap(), Theme::Dark);
        assert!(Theme::from_str("neon").is_err());
    }
}
