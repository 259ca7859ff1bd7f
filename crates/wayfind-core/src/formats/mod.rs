//! # Formats
//!
//! Text formats a road network can be loaded from.
//!
//! Parsing is a pure transformation over strings; reading files is a thin
//! wrapper on top.

pub mod json;

pub use json::{load_graph, parse_edge_list, parse_node_book, read_graph};
