//! Error reporting.
//!
//! Every fallible operation reports exactly one [`ErrorKind`]. The split
//! between `Error` and `ErrorKind` follows the usual library pattern of a
//! small opaque error struct over a public classification.

use std::error;
use std::fmt;

use smallvec::CollectionAllocErr;

/// The classes of failure an operation can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The digit buffer could not grow to the required length.
    OutOfMemory,
    /// An argument lies outside the mathematical domain of the operation,
    /// such as a zero divisor, a negative shift count or exponent, or a
    /// logarithm base below two.
    Domain,
    /// The result does not fit the requested destination: a conversion
    /// target too narrow, a shift count beyond `usize`, or a print buffer
    /// too small.
    Range,
    /// Malformed textual input or an unsupported radix.
    Invalid,
    /// A conversion to `f64` exceeded its dynamic range.
    Overflow,
}

/// The error type returned by fallible `BigInt` operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Creates an error of the given kind.
    pub fn new(kind: ErrorKind) -> Error {
        Error { kind }
    }

    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub(crate) fn out_of_memory() -> Error {
        Error::new(ErrorKind::OutOfMemory)
    }

    #[inline]
    pub(crate) fn domain() -> Error {
        Error::new(ErrorKind::Domain)
    }

    #[inline]
    pub(crate) fn range() -> Error {
        Error::new(ErrorKind::Range)
    }

    #[inline]
    pub(crate) fn invalid() -> Error {
        Error::new(ErrorKind::Invalid)
    }

    #[inline]
    pub(crate) fn overflow() -> Error {
        Error::new(ErrorKind::Overflow)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ErrorKind::OutOfMemory => "digit buffer allocation failed",
            ErrorKind::Domain => "argument outside the operation's domain",
            ErrorKind::Range => "result does not fit the destination",
            ErrorKind::Invalid => "malformed input or unsupported radix",
            ErrorKind::Overflow => "value exceeds the dynamic range of f64",
        };
        f.write_str(msg)
    }
}

impl error::Error for Error {}

impl From<CollectionAllocErr> for Error {
    fn from(_: CollectionAllocErr) -> Error {
        Error::out_of_memory()
    }
}
