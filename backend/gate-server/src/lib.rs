pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod identity_source;
pub mod logger;
pub mod pages;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    classify::classify_image,
    error::{ApiError, ApiErrorBody, ApiErrorResponse, Result as ApiResult},
    extractors::viewer::Viewer,
    session::{SessionResponse, get_session},
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use identity_source::IdentitySource;

pub use crate::routes::build_router;
