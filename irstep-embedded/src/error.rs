use core::fmt;

use embedded_hal_nb::serial::ErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Gpio,
    Serial(ErrorKind),
    BufferOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Gpio => write!(f, "GPIO access failed"),
            Error::Serial(kind) => write!(f, "Serial error: {kind}"),
            Error::BufferOverflow => write!(f, "Command buffer overflow"),
        }
    }
}

impl embedded_hal_nb::serial::Error for Error {
    fn kind(&self) -> ErrorKind {
        match self {
            Error::Serial(kind) => *kind,
            _ => ErrorKind::Other,
        }
    }
}

impl Error {
    pub(crate) fn serial<E: embedded_hal_nb::serial::Error>(err: E) -> Self {
        Error::Serial(err.kind())
    }
}

pub type Result<T> = core::result::Result<T, Error>;
