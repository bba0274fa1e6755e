pub mod edge_node;
