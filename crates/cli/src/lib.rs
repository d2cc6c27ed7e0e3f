//! `stockroom-cli`
//!
//! Configuration and the scripted demo behind the `stockroom` binary.

pub mod config;
pub mod demo;

pub use config::Config;
pub use demo::run_demo;
