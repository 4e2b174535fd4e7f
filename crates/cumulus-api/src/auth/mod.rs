pub mod middleware;
pub mod models;

pub use middleware::session_middleware;
pub use models::CurrentUser;
