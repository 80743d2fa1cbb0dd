pub mod accounts;
pub mod config;
pub mod error;
pub mod paths;
pub mod session;

pub use accounts::AccountStore;
pub use config::{Config, OmdbConfig, SearchOptions};
pub use error::StoreError;
pub use paths::{profile_base_path, PathManager};
pub use session::SessionStore;
