//! HTTP surface for Cumulus.
//!
//! Routes under `/api/v0` behind the session middleware; health and the
//! OpenAPI document stay open. Handlers stay thin: extract, call
//! `FileService`, map errors through `HttpAppError`.

pub mod api_doc;
pub mod auth;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
