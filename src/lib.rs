// Library crate exposing modules for integration tests and benchmarks

pub mod cli;
pub mod model;
pub mod search;
pub mod session;
pub mod util;
