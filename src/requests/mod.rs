pub mod v1;
pub mod validated;

pub use validated::{Validated, ValidatedRequest};
