pub mod api;
pub mod client;
pub mod error;
pub mod traits;

pub use client::OmdbClient;
pub use error::OmdbError;
pub use traits::MovieDatabase;
