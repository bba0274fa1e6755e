pub mod control_connection;
pub mod control_frame;
pub mod edge_node;
