//! Statistics enumerations.

pub mod stats_event;
