pub mod config;
pub mod consts;
pub mod error;
pub mod library;
pub mod plan;
pub mod scorer;
pub mod selector;
pub mod util;
pub mod workout;
// cmd and reports are binary modules (declared in main.rs).
