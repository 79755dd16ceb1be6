pub mod plan;
pub mod select;
pub mod validate;
