pub mod account;
pub mod movie;

pub use account::{Account, LoginData, SignupData};
pub use movie::{MovieDetail, MovieSummary, RatingEntry};
