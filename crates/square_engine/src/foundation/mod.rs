//! Foundation utilities shared by the engine subsystems

pub mod time;
