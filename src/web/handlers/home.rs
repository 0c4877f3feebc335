//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::state::AppState;

/// Template for the landing page.
///
/// Renders `templates/index.html`: a single form that posts to `/shorten`
/// and shows the returned link.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub base_url: String,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate {
        base_url: state.link_service.base_url().to_string(),
    }
}
