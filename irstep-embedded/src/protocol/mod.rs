mod buffer;
mod command;
mod status;

pub use buffer::CommandBuffer;
pub use command::Command;
pub use status::{STATUS_LINE_LEN, StatusLine, StatusSnapshot};

/// Motors addressed by the serial protocol.
pub const MOTOR_COUNT: usize = 3;
