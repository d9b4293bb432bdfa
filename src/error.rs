//! When a big-integer operation goes wrong.

use core::fmt::{self, Debug, Display};
use core::result;
use std::error;

/// This type represents all possible errors that can occur when parsing,
/// formatting, or operating on big integers.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible.
    /// A larger `Error` type was substantially slower due to all the functions
    /// that pass around `Result<T, Error>`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `mpint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// One-based byte offset at which a parse error was detected.
    ///
    /// The first character of the input text is at position 1. Errors that
    /// are not tied to a position in some input report position 0.
    pub fn position(&self) -> usize {
        self.err.position
    }

    /// Specifies the cause of this error.
    ///
    /// Useful when precise error handling is required or translation of
    /// error messages is required.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Parse` - input text that is not a valid integer literal
    /// - `Category::Math` - an operation whose inputs admit no result
    /// - `Category::Buffer` - an export that does not fit its target buffer
    /// - `Category::Resource` - failure to allocate backing storage
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::InvalidCharacter => Category::Parse,
            ErrorCode::BadInputData | ErrorCode::DivisionByZero | ErrorCode::NotAcceptable => {
                Category::Math
            }
            ErrorCode::BufferTooSmall | ErrorCode::NegativeValue => Category::Buffer,
            ErrorCode::AllocationFailure => Category::Resource,
        }
    }

    /// Returns true if this error was caused by text that is not a valid
    /// decimal or hexadecimal integer literal.
    pub fn is_parse(&self) -> bool {
        self.classify() == Category::Parse
    }

    /// Returns true if this error was caused by an operation whose inputs
    /// admit no result, such as division by zero or a modular inverse that
    /// does not exist.
    pub fn is_math(&self) -> bool {
        self.classify() == Category::Math
    }

    /// Returns true if this error was caused by an export target that cannot
    /// represent the value, either by width or by sign.
    pub fn is_buffer(&self) -> bool {
        self.classify() == Category::Buffer
    }

    /// Returns true if this error was caused by a failure to allocate the
    /// backing limb or byte storage.
    pub fn is_resource(&self) -> bool {
        self.classify() == Category::Resource
    }
}

/// Categorizes the cause of a `mpint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by input text that is not a valid integer
    /// literal in the selected radix.
    Parse,

    /// The error was caused by an operation whose inputs admit no result.
    ///
    /// For example, dividing by zero, raising to a negative exponent under a
    /// modulus, or inverting a value that shares a factor with the modulus.
    Math,

    /// The error was caused by an export target that cannot represent the
    /// value, either because the buffer is too narrow or because the format
    /// is unsigned-only.
    Buffer,

    /// The error was caused by a failure to allocate backing storage.
    Resource,
}

struct ErrorImpl {
    code: ErrorCode,
    position: usize,
}

/// This type describes all possible errors that can occur when parsing,
/// formatting, or operating on big integers.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// The underlying allocator could not satisfy a buffer request.
    AllocationFailure,

    /// An operand is outside the domain of the operation, e.g. a modulus
    /// that is zero or negative.
    BadInputData,

    /// The target buffer is too small to hold the magnitude.
    BufferTooSmall,

    /// The divisor is zero.
    DivisionByZero,

    /// A character outside the selected radix's digit set.
    InvalidCharacter,

    /// A negative value was passed to an unsigned-only format.
    NegativeValue,

    /// The operation's inputs admit no result, e.g. a modular inverse that
    /// does not exist or a negative exponent.
    NotAcceptable,
}

impl Error {
    #[cold]
    pub(crate) fn new(code: ErrorCode) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, position: 0 }),
        }
    }

    #[cold]
    pub(crate) fn parse(code: ErrorCode, position: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, position }),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::AllocationFailure => f.write_str("memory allocation failed"),
            ErrorCode::BadInputData => f.write_str("bad input data"),
            ErrorCode::BufferTooSmall => f.write_str("buffer too small"),
            ErrorCode::DivisionByZero => f.write_str("division by zero"),
            ErrorCode::InvalidCharacter => f.write_str("invalid character"),
            ErrorCode::NegativeValue => f.write_str("negative value"),
            ErrorCode::NotAcceptable => f.write_str("not acceptable"),
        }
    }
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.position == 0 {
            Display::fmt(&self.code, f)
        } else {
            write!(f, "{} at position {}", self.code, self.position)
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, position: {})",
            self.err.code.to_string(),
            self.err.position
        )
    }
}
