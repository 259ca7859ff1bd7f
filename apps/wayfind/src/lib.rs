//! # wayfind
//!
//! Command-line harness around `wayfind-core`: configuration, graph
//! loading, logging of search progress and the command implementations.

pub mod cli;
pub mod config;
pub mod observer;
