pub mod auth;
pub mod context;
pub mod error;
pub mod password;
pub mod search;

pub use auth::AuthService;
pub use context::AuthContext;
pub use error::AuthError;
pub use search::{SearchController, SearchPhase, SearchState, DEFAULT_DEBOUNCE};
