pub mod config;
pub mod logging;

pub mod aggregate;
pub mod fetch;
pub mod input;
pub mod pipeline;
pub mod pool;
pub mod report;
pub mod tokenize;
