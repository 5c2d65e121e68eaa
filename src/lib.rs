#![warn(rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod handler;
pub mod healthcheck;
pub mod port;
pub mod scheduler;
pub mod store;
pub mod test_support;

pub use healthcheck::{healthcheck, healthcheck_with_port};
