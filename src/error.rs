//! Error types.

use core::fmt;

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Invalid percent-encoded octet that is either non-hexadecimal or incomplete.
    ///
    /// The error index points to the percent character "%" of the octet.
    InvalidOctet,
    /// Unexpected character that is not allowed by the URI syntax,
    /// including any character left unconsumed after a matched prefix.
    ///
    /// The error index points to the character.
    UnexpectedChar,
    /// Invalid IP literal address.
    ///
    /// The error index points to the preceding left square bracket "[".
    InvalidIpLiteral,
}

/// An error occurred when parsing URI references.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
}

impl ParseError {
    /// Returns the byte index where the error occurred in the input.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseErrorKind::InvalidOctet => "invalid percent-encoded octet at index ",
            ParseErrorKind::UnexpectedChar => "unexpected character at index ",
            ParseErrorKind::InvalidIpLiteral => "invalid IP literal at index ",
        };
        write!(f, "{}{}", msg, self.index)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// An error occurred when building a URI reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// Authority is present, but the path is not empty and does not start with `'/'`.
    NonemptyRootlessPath,
    /// Authority is not present, but the path starts with `"//"`.
    PathStartsWithDoubleSlash,
    /// Neither scheme nor authority is present, but the first path segment contains `':'`.
    FirstPathSegmentContainsColon,
    /// A component does not match its grammar rule.
    ///
    /// The contained string names the offending component.
    InvalidComponent(&'static str),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonemptyRootlessPath => f.write_str(
                "when authority is present, path should either be empty or start with '/'",
            ),
            Self::PathStartsWithDoubleSlash => {
                f.write_str("when authority is not present, path should not start with \"//\"")
            }
            Self::FirstPathSegmentContainsColon => f.write_str(
                "when neither scheme nor authority is present, \
                 first path segment should not contain ':'",
            ),
            Self::InvalidComponent(name) => write!(f, "invalid {name} component"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BuildError {}

/// An error occurred when reading a URI reference from a stream.
#[cfg(feature = "std")]
#[derive(Debug)]
pub enum ReadError {
    /// The underlying reader failed.
    Io(std::io::Error),
    /// The byte sequence read is not valid UTF-8.
    Decode(core::str::Utf8Error),
    /// The character sequence read does not match the URI grammar.
    Parse(ParseError),
}

#[cfg(feature = "std")]
impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read input: {e}"),
            Self::Decode(e) => write!(f, "input is not valid UTF-8: {e}"),
            Self::Parse(e) => write!(f, "invalid URI: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Decode(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for ReadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(feature = "std")]
impl From<ParseError> for ReadError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}
