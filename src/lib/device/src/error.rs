use core::fmt::{self, Debug, Display, Formatter};

/// Errors reported by clock, reset and bus drivers
pub trait Error: Debug {
    fn kind(&self) -> ErrorKind;
}

/// Generic error kinds shared by every driver class
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The operation is not supported by this controller
    Unimplemented,
    /// An argument (e.g. a line ID) is out of range for the device
    InvalidArgument,
    /// The device has no register window to operate on
    NoMemory,
    /// No driver matched the device
    NotFound,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unimplemented => "operation not supported",
            Self::InvalidArgument => "invalid argument",
            Self::NoMemory => "no register window for device",
            Self::NotFound => "no matching driver",
        }
    }
}

impl Error for core::convert::Infallible {
    fn kind(&self) -> ErrorKind {
        match *self {}
    }
}

impl Error for ErrorKind {
    fn kind(&self) -> ErrorKind {
        *self
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Associates a driver with the error type its operations return
pub trait ErrorType {
    type Error: Error;
}

impl<T: ErrorType> ErrorType for &mut T {
    type Error = T::Error;
}

impl<T: ErrorType> ErrorType for &T {
    type Error = T::Error;
}
