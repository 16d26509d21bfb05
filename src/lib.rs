pub mod cli;
mod config;
pub mod domain;
pub mod selectors;
pub mod store;
