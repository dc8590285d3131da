//! A bidirectional grammar for the [generic URI syntax] of [RFC 3986].
//!
//! The grammar runs in both directions over the same rule structure:
//! [`Uri::parse`] consumes text with ordered-choice backtracking and
//! produces a structured [`Uri`] value, and [`Display`] renders a value
//! back to text. For any parsed value, rendering and reparsing yields
//! the same value.
//!
//! Components are kept verbatim as matched, percent-encoded octets
//! included. This crate checks that an octet is well formed (`%` plus
//! two hexadecimal digits) but never decodes it; decoding, scheme
//! normalization, and reference resolution are out of scope.
//!
//! [generic URI syntax]: https://datatracker.ietf.org/doc/html/rfc3986#section-3
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986
//! [`Display`]: core::fmt::Display
//!
//! # Examples
//!
//! ```
//! use uri_grammar::Uri;
//!
//! let uri = Uri::parse("foo://user@example.com:8042/over/there?name=ferret#nose")?;
//!
//! assert_eq!(uri.scheme().unwrap().as_str(), "foo");
//! assert_eq!(uri.user(), Some("user"));
//! assert_eq!(uri.host(), Some("example.com"));
//! assert_eq!(uri.port(), Some(8042));
//! assert_eq!(uri.path(), "/over/there");
//! assert_eq!(uri.query(), Some("name=ferret"));
//! assert_eq!(uri.fragment(), Some("nose"));
//!
//! assert_eq!(
//!     uri.to_string(),
//!     "foo://user@example.com:8042/over/there?name=ferret#nose"
//! );
//! # Ok::<_, uri_grammar::error::ParseError>(())
//! ```
//!
//! # Crate features
//!
//! - `std` (default): Enables [`std::error::Error`] impls and the
//!   [`Uri::from_reader`]/[`Uri::write_to`] stream adapters.
//! - `serde`: Serializes a [`Uri`] as its rendered text and
//!   deserializes by parsing.

#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod builder;
pub mod component;
pub mod error;
mod fmt;
#[cfg(feature = "std")]
mod io;
pub mod lexis;
mod parser;
mod render;

pub use builder::Builder;

use alloc::string::String;
use component::{HostKind, Scheme};
use core::str::FromStr;
use error::ParseError;

/// A URI reference, either a URI or a relative reference.
///
/// Created by [`Uri::parse`], [`Uri::builder`], or (with the `std`
/// feature) [`Uri::from_reader`]. The value is immutable: every
/// accessor borrows, and the only way back to text is rendering.
#[derive(Clone, PartialEq, Eq)]
pub struct Uri {
    pub(crate) scheme: Option<String>,
    pub(crate) authority: Option<Authority>,
    pub(crate) path: String,
    pub(crate) query: Option<String>,
    pub(crate) fragment: Option<String>,
}

/// An [authority] component.
///
/// [authority]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2
#[derive(Clone, PartialEq, Eq)]
pub struct Authority {
    pub(crate) userinfo: Option<Userinfo>,
    pub(crate) host: String,
    pub(crate) host_kind: HostKind,
    pub(crate) port: Option<u16>,
}

/// A [userinfo] subcomponent, split at the first colon into a user
/// part and an optional password part.
///
/// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.1
#[derive(Clone, PartialEq, Eq)]
pub struct Userinfo {
    pub(crate) user: String,
    pub(crate) password: Option<String>,
}

impl Uri {
    /// Parses a URI reference from a string.
    ///
    /// The input must match the `URI-reference` rule in full; trailing
    /// input after a matched prefix is an error, never silently dropped.
    ///
    /// # Errors
    ///
    /// Returns `Err` with the byte index and cause of the first failure
    /// from which no alternative in the grammar could recover.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_grammar::Uri;
    ///
    /// let uri = Uri::parse("http://example.com/")?;
    /// assert!(uri.is_absolute());
    ///
    /// let rel = Uri::parse("path/to/x?q")?;
    /// assert!(rel.is_relative());
    ///
    /// assert!(Uri::parse("http://example.com/ extra").is_err());
    /// # Ok::<_, uri_grammar::error::ParseError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Uri, ParseError> {
        parser::parse(input)
    }

    /// Creates a builder for a URI reference.
    #[inline]
    pub fn builder() -> Builder<builder::state::Start> {
        Builder::new()
    }

    /// Returns the optional [scheme] component.
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    #[must_use]
    pub fn scheme(&self) -> Option<&Scheme> {
        self.scheme.as_deref().map(Scheme::new_validated)
    }

    /// Returns the optional [authority] component.
    ///
    /// [authority]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2
    #[inline]
    #[must_use]
    pub fn authority(&self) -> Option<&Authority> {
        self.authority.as_ref()
    }

    /// Returns the user part of the userinfo subcomponent, if present.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.authority().and_then(Authority::user)
    }

    /// Returns the password part of the userinfo subcomponent, if present.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.authority().and_then(Authority::password)
    }

    /// Returns the host subcomponent, if an authority is present.
    ///
    /// The square brackets enclosing an IPv6 or IPvFuture address are included.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.authority().map(Authority::host)
    }

    /// Returns which host production matched, if an authority is present.
    #[must_use]
    pub fn host_kind(&self) -> Option<HostKind> {
        self.authority().map(Authority::host_kind)
    }

    /// Returns the port subcomponent, if present.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.authority().and_then(Authority::port)
    }

    /// Returns the [path] component.
    ///
    /// The path is always present, although it may be empty.
    ///
    /// [path]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.3
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the optional [query] component.
    ///
    /// [query]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.4
    #[inline]
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the optional [fragment] component.
    ///
    /// [fragment]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.5
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Checks whether this is an absolute URI, i.e., a scheme is present.
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }

    /// Checks whether this is a relative reference, i.e., no scheme is present.
    #[inline]
    #[must_use]
    pub fn is_relative(&self) -> bool {
        self.scheme.is_none()
    }
}

impl Authority {
    /// Returns the optional userinfo subcomponent.
    #[inline]
    #[must_use]
    pub fn userinfo(&self) -> Option<&Userinfo> {
        self.userinfo.as_ref()
    }

    /// Returns the user part of the userinfo subcomponent, if present.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.userinfo().map(Userinfo::user)
    }

    /// Returns the password part of the userinfo subcomponent, if present.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.userinfo().and_then(Userinfo::password)
    }

    /// Returns the host subcomponent as a string slice.
    ///
    /// The host subcomponent is always present, although it may be empty.
    ///
    /// The square brackets enclosing an IPv6 or IPvFuture address are included.
    ///
    /// Note that ASCII characters within a host are *case-insensitive*.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns which host production matched.
    #[inline]
    #[must_use]
    pub fn host_kind(&self) -> HostKind {
        self.host_kind
    }

    /// Returns the port subcomponent, if present.
    ///
    /// The port accumulates digits into a `u16` with wrapping
    /// arithmetic, so an empty port reads as `Some(0)` and an
    /// overlong digit run reads as its value modulo 65536.
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }
}

impl Userinfo {
    /// Returns the user part, the text before the first colon.
    #[inline]
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the password part, the text after the first colon, if present.
    #[inline]
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

impl FromStr for Uri {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Uri, ParseError> {
        Uri::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uri {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uri {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Uri, D::Error> {
        let s = <String as serde::Deserialize<'_>>::deserialize(deserializer)?;
        Uri::parse(&s).map_err(serde::de::Error::custom)
    }
}
