pub mod control_connection;
pub mod session_info;
