pub mod config;
pub mod demo;
pub mod input;
pub mod parser;
pub mod report;

pub use config::GraphSpec;
pub use report::{Report, TextOptions};
