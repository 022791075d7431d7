//! World implementations for the harness runner.

pub mod explicit_graph;
pub mod number_line;
pub mod patience;
