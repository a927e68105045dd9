pub mod user;
pub mod welcome;
