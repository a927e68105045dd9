pub mod debug;
pub mod user;
pub mod welcome;
