//! Error types for the MessagePack encoder
//!
//! Two disjoint classes exist. [`Error`] is a recoverable sink failure that
//! the encoder retains as its sticky error. [`Violation`] names a caller
//! contract breach; it is only ever reported through a panic.

use core::fmt;

/// Errors that can occur while writing encoded values to a sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Fixed-capacity sink has no room for the write
    ShortBuffer,
    /// Underlying `std::io::Write` sink failed
    #[cfg(feature = "std")]
    Io(std::io::ErrorKind),
    /// Failure raised by a caller-supplied sink or item encoder
    Custom(&'static str),
}

impl Error {
    /// Returns a human-readable description of the error
    pub const fn description(&self) -> &'static str {
        match self {
            Error::ShortBuffer => "buffer too small for operation",
            #[cfg(feature = "std")]
            Error::Io(_) => "write to underlying writer failed",
            Error::Custom(msg) => *msg,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Error::Io(kind) => write!(f, "{}: {}", self.description(), kind),
            _ => f.write_str(self.description()),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.kind())
    }
}

/// Caller contract violations
///
/// These indicate a programming error rather than an environmental one.
/// The encoder panics with the description instead of returning them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Value outside the range accepted by the operation
    ValueOutOfRange,
    /// Value type has no MessagePack mapping
    UnsupportedType,
    /// Length does not fit the 32-bit length field of the format
    LengthOverflow,
}

impl Violation {
    /// Returns a human-readable description of the violation
    pub const fn description(&self) -> &'static str {
        match self {
            Violation::ValueOutOfRange => "value out of range",
            Violation::UnsupportedType => "unsupported type",
            Violation::LengthOverflow => "length exceeds 32-bit limit",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Result type alias for encoder operations
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::ShortBuffer.to_string(),
            "buffer too small for operation"
        );
        assert_eq!(Error::Custom("encoder error").to_string(), "encoder error");
        assert_eq!(Violation::UnsupportedType.to_string(), "unsupported type");
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_io_error_conversion() {
        let err: Error = std::io::Error::from(std::io::ErrorKind::BrokenPipe).into();
        assert_eq!(err, Error::Io(std::io::ErrorKind::BrokenPipe));
        assert!(err.to_string().starts_with("write to underlying writer failed"));
    }
}
