//! Login gate: `/`, `/login` and `/logout`

use crate::{AppState, Viewer, pages::html};

use gate_auth::LoginState;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use log::warn;

pub const LOGIN_UNAVAILABLE: &str =
    "Sign-in is handled by the hosting platform and is not available here.";
pub const LOGOUT_UNAVAILABLE: &str =
    "Sign-out is handled by the hosting platform and is not available here.";

/// GET /
pub async fn login_page(State(state): State<AppState>, viewer: Viewer) -> Html<String> {
    render(&state, &viewer, None)
}

/// GET /login - hand off to the platform's sign-in flow
pub async fn begin_login(State(state): State<AppState>, viewer: Viewer) -> Response {
    match state.auth.login_url {
        Some(ref url) => Redirect::to(url).into_response(),
        None => {
            warn!("Login requested but auth.login_url is not configured");
            render(&state, &viewer, Some(LOGIN_UNAVAILABLE)).into_response()
        }
    }
}

/// GET /logout - hand off to the platform's sign-out flow
pub async fn begin_logout(State(state): State<AppState>, viewer: Viewer) -> Response {
    match state.auth.logout_url {
        Some(ref url) => Redirect::to(url).into_response(),
        None => {
            warn!("Logout requested but auth.logout_url is not configured");
            render(&state, &viewer, Some(LOGOUT_UNAVAILABLE)).into_response()
        }
    }
}

fn render(state: &AppState, viewer: &Viewer, warning: Option<&str>) -> Html<String> {
    let page = &state.page;
    let mut body = html::heading(&page.title);

    if let Some(text) = warning {
        body.push_str(&html::warning(text));
    }

    match &viewer.state {
        LoginState::Unauthenticated => {
            body.push_str(&html::image(&page.hero_image_url, &page.title));
            body.push_str(&html::link("/login", "Log in"));
        }
        LoginState::Authenticated {
            display_name,
            evidence,
        } => {
            body.push_str(&format!(
                "<p>Welcome, {}!</p>\n",
                html::escape(display_name)
            ));
            body.push_str(&html::link("/app", &format!("Open the {}", page.app_title)));
            body.push_str(&html::link("/logout", "Log out"));

            let fields = viewer
                .identity
                .as_ref()
                .and_then(|identity| serde_json::to_string_pretty(identity).ok())
                .unwrap_or_default();
            body.push_str(&format!(
                "<details>\n<summary>Account details</summary>\n\
                 <p>Signed in via {}{}</p>\n<pre>{}</pre>\n</details>\n",
                html::escape(&evidence.to_string()),
                if evidence.is_authoritative() {
                    ""
                } else {
                    " (inferred)"
                },
                html::escape(&fields),
            ));
        }
    }

    html::document(&page.title, &body)
}
