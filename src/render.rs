//! The generate direction of the grammar.
//!
//! Mirrors the parse productions: each rule emits exactly the text its
//! counterpart consumes, so rendering a parsed value and reparsing the
//! output yields the same value back.

use crate::Uri;
use core::fmt;

/// Emits `uri` as text, `URI-reference = URI / relative-ref`.
///
/// Absent optional components emit nothing, including their delimiters.
/// Never fails for values that uphold the structural invariants; the
/// only possible error is one from the underlying writer.
pub(crate) fn render(uri: &Uri, out: &mut impl fmt::Write) -> fmt::Result {
    if let Some(scheme) = &uri.scheme {
        out.write_str(scheme)?;
        out.write_char(':')?;
    }

    if let Some(auth) = &uri.authority {
        out.write_str("//")?;
        if let Some(userinfo) = &auth.userinfo {
            out.write_str(&userinfo.user)?;
            if let Some(password) = &userinfo.password {
                out.write_char(':')?;
                out.write_str(password)?;
            }
            out.write_char('@')?;
        }
        out.write_str(&auth.host)?;
        if let Some(port) = auth.port {
            // Decimal with no leading zeros; an input port of ":" or
            // ":000" reads back as ":0".
            write!(out, ":{port}")?;
        }
    }

    out.write_str(&uri.path)?;

    if let Some(query) = &uri.query {
        out.write_char('?')?;
        out.write_str(query)?;
    }
    if let Some(fragment) = &uri.fragment {
        out.write_char('#')?;
        out.write_str(fragment)?;
    }
    Ok(())
}
