//! A builder type for URI references.

#![allow(missing_debug_implementations)]

pub mod state;

use crate::{
    component::Scheme,
    error::BuildError,
    lexis, parser, Authority, Uri, Userinfo,
};
use alloc::string::String;
use core::marker::PhantomData;
use state::*;

/// A builder for URI references.
///
/// This struct is created by [`Uri::builder`].
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// use uri_grammar::{component::Scheme, Uri};
///
/// let uri = Uri::builder()
///     .scheme(Scheme::new_or_panic("foo"))
///     .authority(|b| b.user("user").host("example.com").port(8042))
///     .path("/over/there")
///     .query("name=ferret")
///     .fragment("nose")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     uri.to_string(),
///     "foo://user@example.com:8042/over/there?name=ferret#nose"
/// );
/// ```
///
/// # Constraints
///
/// Typestates are used to avoid misconfigurations,
/// which puts the following constraints:
///
/// - Components must be set from left to right, no repetition allowed.
/// - Setting [`path`] is mandatory before calling [`build`].
/// - Methods [`user`], [`password`], [`host`], and [`port`] are only
///   available within a call to [`authority`].
/// - Setting [`host`] is mandatory within a call to [`authority`].
/// - Setting [`password`] requires a preceding [`user`].
///
/// You may otherwise skip setting optional components
/// with [`advance`] or set them optionally with [`optional`].
///
/// Textual components are validated against their grammar rules
/// when [`build`] is called, not when they are set.
///
/// [`advance`]: Self::advance
/// [`optional`]: Self::optional
/// [`user`]: Self::user
/// [`password`]: Self::password
/// [`host`]: Self::host
/// [`port`]: Self::port
/// [`path`]: Self::path
/// [`build`]: Self::build
#[must_use]
pub struct Builder<S> {
    inner: BuilderInner,
    state: PhantomData<S>,
}

#[derive(Default)]
struct BuilderInner {
    scheme: Option<String>,
    has_authority: bool,
    user: Option<String>,
    password: Option<String>,
    host: String,
    port: Option<u16>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl BuilderInner {
    fn build(self) -> Result<Uri, BuildError> {
        fn check(value: Option<&str>, table: &lexis::Table, name: &'static str)
            -> Result<(), BuildError>
        {
            match value {
                Some(v) if !table.validate(v.as_bytes()) => {
                    Err(BuildError::InvalidComponent(name))
                }
                _ => Ok(()),
            }
        }

        fn first_segment_contains_colon(path: &str) -> bool {
            path.split_once('/').map_or(path, |x| x.0).contains(':')
        }

        check(self.user.as_deref(), lexis::USER, "user")?;
        check(self.password.as_deref(), lexis::PASSWORD, "password")?;
        check(Some(self.path.as_str()), lexis::PATH, "path")?;
        check(self.query.as_deref(), lexis::QUERY, "query")?;
        check(self.fragment.as_deref(), lexis::FRAGMENT, "fragment")?;

        let authority = if self.has_authority {
            let host_kind = parser::classify_host(&self.host)
                .ok_or(BuildError::InvalidComponent("host"))?;
            Some(Authority {
                userinfo: self.user.map(|user| Userinfo {
                    user,
                    password: self.password,
                }),
                host: self.host,
                host_kind,
                port: self.port,
            })
        } else {
            None
        };

        if authority.is_some() {
            if !self.path.is_empty() && !self.path.starts_with('/') {
                return Err(BuildError::NonemptyRootlessPath);
            }
        } else {
            if self.path.starts_with("//") {
                return Err(BuildError::PathStartsWithDoubleSlash);
            }
            if self.scheme.is_none() && first_segment_contains_colon(&self.path) {
                return Err(BuildError::FirstPathSegmentContainsColon);
            }
        }

        Ok(Uri {
            scheme: self.scheme,
            authority,
            path: self.path,
            query: self.query,
            fragment: self.fragment,
        })
    }
}

impl Builder<Start> {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            inner: BuilderInner::default(),
            state: PhantomData,
        }
    }
}

impl<S> Builder<S> {
    fn cast<T>(self) -> Builder<T>
    where
        S: To<T>,
    {
        Builder {
            inner: self.inner,
            state: PhantomData,
        }
    }

    /// Advances the builder state, skipping optional components in between.
    ///
    /// Variable rebinding may be necessary as this changes the type of the builder.
    ///
    /// ```
    /// use uri_grammar::{component::Scheme, Uri};
    ///
    /// fn build(relative: bool) -> Uri {
    ///     let b = Uri::builder();
    ///     let b = if relative {
    ///         b.advance()
    ///     } else {
    ///         b.scheme(Scheme::new_or_panic("http"))
    ///             .authority(|b| b.host("example.com"))
    ///     };
    ///     b.path("/foo").build().unwrap()
    /// }
    ///
    /// assert_eq!(build(false).to_string(), "http://example.com/foo");
    /// assert_eq!(build(true).to_string(), "/foo");
    /// ```
    pub fn advance<T>(self) -> Builder<T>
    where
        S: To<T>,
        T: AdvanceDst,
    {
        self.cast()
    }

    /// Optionally calls a builder method with a value.
    ///
    /// ```
    /// use uri_grammar::{Builder, Uri};
    ///
    /// let uri = Uri::builder()
    ///     .path("foo")
    ///     .optional(Builder::query, Some("bar"))
    ///     .optional(Builder::fragment, None)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(uri.to_string(), "foo?bar");
    /// ```
    pub fn optional<F, V, T>(self, f: F, opt: Option<V>) -> Builder<T>
    where
        F: FnOnce(Builder<S>, V) -> Builder<T>,
        S: To<T>,
        T: AdvanceDst,
    {
        match opt {
            Some(value) => f(self, value),
            None => self.advance(),
        }
    }
}

impl<S: To<SchemeEnd>> Builder<S> {
    /// Sets the [scheme] component.
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.1
    pub fn scheme(mut self, scheme: &Scheme) -> Builder<SchemeEnd> {
        self.inner.scheme = Some(scheme.as_str().into());
        self.cast()
    }
}

impl<S: To<AuthorityStart>> Builder<S> {
    /// Builds the [authority] component with the given function.
    ///
    /// [authority]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2
    pub fn authority<F, T>(mut self, f: F) -> Builder<AuthorityEnd>
    where
        F: FnOnce(Builder<AuthorityStart>) -> Builder<T>,
        T: To<AuthorityEnd>,
    {
        self.inner.has_authority = true;
        f(self.cast()).cast()
    }
}

impl<S: To<UserEnd>> Builder<S> {
    /// Sets the user subcomponent of [userinfo].
    ///
    /// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.1
    pub fn user(mut self, user: &str) -> Builder<UserEnd> {
        self.inner.user = Some(user.into());
        self.cast()
    }
}

impl<S: To<PasswordEnd>> Builder<S> {
    /// Sets the password subcomponent of [userinfo].
    ///
    /// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.1
    pub fn password(mut self, password: &str) -> Builder<PasswordEnd> {
        self.inner.password = Some(password.into());
        self.cast()
    }
}

impl<S: To<HostEnd>> Builder<S> {
    /// Sets the [host] subcomponent of authority.
    ///
    /// The text is classified against the host grammar when [`build`] is
    /// called: a bracketed form must be a valid IP literal, and an
    /// unbracketed form that matches `IPv4address` in full is recorded as
    /// [`HostKind::Ipv4`], otherwise as [`HostKind::RegName`].
    ///
    /// [host]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.2
    /// [`build`]: Self::build
    /// [`HostKind::Ipv4`]: crate::component::HostKind::Ipv4
    /// [`HostKind::RegName`]: crate::component::HostKind::RegName
    pub fn host(mut self, host: &str) -> Builder<HostEnd> {
        self.inner.host = host.into();
        self.cast()
    }
}

impl<S: To<PortEnd>> Builder<S> {
    /// Sets the [port] subcomponent of authority.
    ///
    /// [port]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.3
    pub fn port(mut self, port: u16) -> Builder<PortEnd> {
        self.inner.port = Some(port);
        self.cast()
    }
}

impl<S: To<PathEnd>> Builder<S> {
    /// Sets the [path] component.
    ///
    /// [path]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.3
    pub fn path(mut self, path: &str) -> Builder<PathEnd> {
        self.inner.path = path.into();
        self.cast()
    }
}

impl<S: To<QueryEnd>> Builder<S> {
    /// Sets the [query] component.
    ///
    /// [query]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.4
    pub fn query(mut self, query: &str) -> Builder<QueryEnd> {
        self.inner.query = Some(query.into());
        self.cast()
    }
}

impl<S: To<FragmentEnd>> Builder<S> {
    /// Sets the [fragment] component.
    ///
    /// [fragment]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.5
    pub fn fragment(mut self, fragment: &str) -> Builder<FragmentEnd> {
        self.inner.fragment = Some(fragment.into());
        self.cast()
    }
}

impl<S: To<End>> Builder<S> {
    /// Builds the URI reference.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any of the following conditions is not met.
    ///
    /// - Every textual component matches its grammar rule, percent-encoded
    ///   octets included.
    /// - When authority is present, the path is either empty or starts with `'/'`.
    /// - When authority is not present, the path does not start with `"//"`.
    /// - In a [relative-path reference][rel-ref], the first path segment
    ///   does not contain `':'`.
    ///
    /// [rel-ref]: https://datatracker.ietf.org/doc/html/rfc3986/#section-4.2
    pub fn build(self) -> Result<Uri, BuildError> {
        self.inner.build()
    }
}
