pub mod explanation;
pub mod quiz;
pub mod summary;
