#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod config;
pub mod control;
pub mod error;
pub mod protocol;
pub mod sensor;
pub mod stepper;
pub mod time;

pub use board::*;
pub use config::*;
pub use control::*;
pub use error::*;
pub use protocol::*;
pub use sensor::*;
pub use stepper::*;
pub use time::*;
