mod session_model;
mod session_service;

pub use session_model::UserIdentity;
pub use session_service::SessionService;
