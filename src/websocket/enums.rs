pub mod control_error;
pub mod control_frame;
pub mod control_message;
