//! Implementation blocks for statistics.

pub mod edge_node;
