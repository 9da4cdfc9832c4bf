pub mod cruise;
pub mod greeter;

pub use crate::domain::model::{NameAgeMap, SuiteMap};
pub use crate::utils::error::Result;
