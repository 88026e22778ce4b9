pub mod filters;
pub mod routine;
pub mod safety;
pub mod search;
pub mod triage;

pub use routine::build_routine;
pub use triage::recommend;
