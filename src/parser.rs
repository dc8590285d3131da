//! The parse direction of the grammar.
//!
//! Productions are hand-written recursive rules over a [`Cursor`] that
//! backtracks by saving and restoring its position. Alternatives are
//! tried in the order the grammar declares them, and a failed branch
//! never leaves partial consumption behind: either the nearest choice
//! point retries at its saved mark, or the failure propagates as a
//! [`ParseError`].

use crate::{
    component::HostKind,
    error::{ParseError, ParseErrorKind},
    lexis::{self, Table},
    Authority, Uri, Userinfo,
};
use alloc::string::String;

type Result<T> = core::result::Result<T, ParseError>;

/// Returns immediately with an error.
macro_rules! err {
    ($index:expr, $kind:ident) => {
        return Err(ParseError {
            index: $index,
            kind: ParseErrorKind::$kind,
        })
    };
}

/// Parses a complete URI reference, `URI-reference = URI / relative-ref`.
///
/// Trailing input left over after the grammar completes is a failure.
pub(crate) fn parse(input: &str) -> Result<Uri> {
    let mut cur = Cursor::new(input);

    let scheme = cur.read_scheme()?;

    let authority = if cur.read_str("//") {
        Some(cur.read_authority()?)
    } else {
        None
    };

    let kind = if authority.is_some() {
        PathKind::AbEmpty
    } else if scheme.is_some() {
        PathKind::Hier
    } else {
        PathKind::NoScheme
    };
    let path = cur.read_path(kind)?;

    let query = if cur.read_str("?") {
        let start = cur.pos;
        cur.scan(lexis::QUERY)?;
        Some(cur.owned_from(start))
    } else {
        None
    };

    let fragment = if cur.read_str("#") {
        let start = cur.pos;
        cur.scan(lexis::FRAGMENT)?;
        Some(cur.owned_from(start))
    } else {
        None
    };

    if cur.has_remaining() {
        err!(cur.pos, UnexpectedChar);
    }

    Ok(Uri {
        scheme,
        authority,
        path,
        query,
        fragment,
    })
}

/// Classifies `host` against the host grammar, requiring total consumption.
///
/// Returns `None` when the text does not match any host production.
pub(crate) fn classify_host(host: &str) -> Option<HostKind> {
    let mut cur = Cursor::new(host);
    match cur.read_host() {
        Ok(kind) if !cur.has_remaining() => Some(kind),
        _ => None,
    }
}

/// Which path variant the enclosing `hier-part` context selects.
enum PathKind {
    /// `path-abempty`, after an authority: empty or beginning with "/".
    AbEmpty,
    /// `path-absolute / path-rootless / path-empty`, after a scheme
    /// without an authority.
    Hier,
    /// `path-absolute / path-noscheme / path-empty`, in a relative
    /// reference without an authority.
    NoScheme,
}

/// Input cursor.
///
/// # Invariants
///
/// `pos <= len`, and `pos` lies on an ASCII boundary of the input
/// (every byte the grammar consumes is ASCII).
struct Cursor<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Cursor {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn len(&self) -> usize {
        self.bytes.len()
    }

    fn has_remaining(&self) -> bool {
        self.pos < self.len()
    }

    fn peek(&self, i: usize) -> Option<u8> {
        self.bytes.get(self.pos + i).copied()
    }

    fn skip(&mut self, n: usize) {
        self.pos += n;
        debug_assert!(self.pos <= self.len());
    }

    /// Copies out the input consumed since `start`.
    fn owned_from(&self, start: usize) -> String {
        self.input[start..self.pos].into()
    }

    /// Consumes `s` if the remaining input starts with it.
    fn read_str(&mut self, s: &str) -> bool {
        if self.bytes[self.pos..].starts_with(s.as_bytes()) {
            self.skip(s.len());
            true
        } else {
            false
        }
    }

    /// Consumes one byte in the inclusive range `lo..=hi`.
    fn read_range(&mut self, lo: u8, hi: u8) -> bool {
        match self.peek(0) {
            Some(x) if lo <= x && x <= hi => {
                self.skip(1);
                true
            }
            _ => false,
        }
    }

    /// Consumes the longest run of bytes allowed by `table`, validating
    /// percent-encoded triplets when the table allows them.
    ///
    /// Returns `true` iff any input was consumed.
    fn scan(&mut self, table: &Table) -> Result<bool> {
        let start = self.pos;
        let mut i = self.pos;
        let allows_pct_encoded = table.allows_pct_encoded();

        while i < self.len() {
            let x = self.bytes[i];
            if allows_pct_encoded && x == b'%' {
                // pct-encoded = "%" HEXDIG HEXDIG
                let [hi, lo, ..] = self.bytes[i + 1..] else {
                    err!(i, InvalidOctet);
                };
                if !(lexis::HEXDIG.allows(hi) && lexis::HEXDIG.allows(lo)) {
                    err!(i, InvalidOctet);
                }
                i += 3;
            } else if table.allows(x) {
                i += 1;
            } else {
                break;
            }
        }

        self.pos = i;
        Ok(self.pos > start)
    }

    /// `scheme ":"`, the committed prefix of the URI alternative of
    /// `URI-reference`. Backtracks to the start when the colon is
    /// missing, in which case the relative-ref alternative applies.
    fn read_scheme(&mut self) -> Result<Option<String>> {
        // scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
        if !matches!(self.peek(0), Some(x) if x.is_ascii_alphabetic()) {
            return Ok(None);
        }
        self.scan(lexis::SCHEME)?;
        if self.peek(0) == Some(b':') {
            let scheme = self.owned_from(0);
            self.skip(1);
            Ok(Some(scheme))
        } else {
            self.pos = 0;
            Ok(None)
        }
    }

    /// `authority = [ userinfo "@" ] host [ ":" port ]`
    fn read_authority(&mut self) -> Result<Authority> {
        let userinfo = self.read_userinfo()?;

        let host_start = self.pos;
        let host_kind = self.read_host()?;
        let host = self.owned_from(host_start);

        let port = if self.read_str(":") {
            Some(self.read_port())
        } else {
            None
        };

        Ok(Authority {
            userinfo,
            host,
            host_kind,
            port,
        })
    }

    /// `[ user [ ":" password ] "@" ]`, backtracking fully when the
    /// terminating "@" is absent.
    fn read_userinfo(&mut self) -> Result<Option<Userinfo>> {
        let mark = self.pos;

        self.scan(lexis::USER)?;
        let user_end = self.pos;

        let password = if self.read_str(":") {
            let start = self.pos;
            self.scan(lexis::PASSWORD)?;
            Some((start, self.pos))
        } else {
            None
        };

        if !self.read_str("@") {
            self.pos = mark;
            return Ok(None);
        }

        Ok(Some(Userinfo {
            user: self.input[mark..user_end].into(),
            password: password.map(|(start, end)| self.input[start..end].into()),
        }))
    }

    /// `host = IP-literal / IPv4address / reg-name`, in that order.
    ///
    /// A dotted-decimal prefix is reclassified as a registered name when
    /// reg-name characters continue past it; that is where backtracking
    /// into the host choice point would otherwise end up, since reg-name
    /// subsumes every character an IPv4 address can contain.
    fn read_host(&mut self) -> Result<HostKind> {
        if let Some(kind) = self.read_ip_literal()? {
            return Ok(kind);
        }
        let v4 = self.read_v4();
        let more = self.scan(lexis::REG_NAME)?;
        Ok(if v4 && !more {
            HostKind::Ipv4
        } else {
            HostKind::RegName
        })
    }

    /// `IP-literal = "[" ( IPv6address / IPvFuture ) "]"`
    fn read_ip_literal(&mut self) -> Result<Option<HostKind>> {
        if !self.read_str("[") {
            return Ok(None);
        }
        let bracket = self.pos - 1;

        let kind = if self.read_v6() {
            HostKind::Ipv6
        } else if self.read_ipv_future() {
            HostKind::IpvFuture
        } else {
            err!(bracket, InvalidIpLiteral);
        };

        if !self.read_str("]") {
            err!(bracket, InvalidIpLiteral);
        }
        Ok(Some(kind))
    }

    /// `IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`
    fn read_ipv_future(&mut self) -> bool {
        let mark = self.pos;
        if (self.read_range(b'v', b'v') || self.read_range(b'V', b'V'))
            && self.scan_class(lexis::HEXDIG)
            && self.read_str(".")
            && self.scan_class(lexis::IPV_FUTURE)
        {
            return true;
        }
        self.pos = mark;
        false
    }

    /// Consumes the longest run of a table without percent-encoding.
    /// Returns `true` iff any input was consumed.
    fn scan_class(&mut self, table: &Table) -> bool {
        debug_assert!(!table.allows_pct_encoded());
        let start = self.pos;
        while matches!(self.peek(0), Some(x) if table.allows(x)) {
            self.skip(1);
        }
        self.pos > start
    }

    /// `IPv6address`, the ordered alternatives of RFC 3986 Section 3.2.2:
    ///
    /// ```text
    ///                                   6( h16 ":" ) ls32
    ///   /                        "::" 5( h16 ":" ) ls32
    ///   / [               h16 ]  "::" 4( h16 ":" ) ls32
    ///   / [ *1( h16 ":" ) h16 ]  "::" 3( h16 ":" ) ls32
    ///   / [ *2( h16 ":" ) h16 ]  "::" 2( h16 ":" ) ls32
    ///   / [ *3( h16 ":" ) h16 ]  "::"    h16 ":"   ls32
    ///   / [ *4( h16 ":" ) h16 ]  "::"              ls32
    ///   / [ *5( h16 ":" ) h16 ]  "::"              h16
    ///   / [ *6( h16 ":" ) h16 ]  "::"
    /// ```
    ///
    /// Alternatives are tried in declared order with full backtracking,
    /// including over the group count of the optional part before the
    /// elision.
    fn read_v6(&mut self) -> bool {
        for alt in 0..9 {
            let mark = self.pos;
            if self.read_v6_alt(alt) {
                return true;
            }
            self.pos = mark;
        }
        false
    }

    fn read_v6_alt(&mut self, alt: usize) -> bool {
        match alt {
            0 => self.read_h16_groups(6) && self.read_ls32(),
            1 => self.read_str("::") && self.read_h16_groups(5) && self.read_ls32(),
            _ => {
                let max_lead = alt - 2;
                // Longest leading group count first, down to absence.
                for lead in (0..=max_lead).rev().map(Some).chain([None]) {
                    let mark = self.pos;
                    let lead_ok = match lead {
                        Some(n) => self.read_h16_groups(n) && self.read_h16(),
                        None => true,
                    };
                    if lead_ok && self.read_str("::") && self.read_v6_tail(alt) {
                        return true;
                    }
                    self.pos = mark;
                }
                false
            }
        }
    }

    fn read_v6_tail(&mut self, alt: usize) -> bool {
        match alt {
            2..=5 => self.read_h16_groups(6 - alt) && self.read_ls32(),
            6 => self.read_ls32(),
            7 => self.read_h16(),
            _ => true,
        }
    }

    /// `n( h16 ":" )`
    fn read_h16_groups(&mut self, n: usize) -> bool {
        for _ in 0..n {
            if !(self.read_h16() && self.read_str(":")) {
                return false;
            }
        }
        true
    }

    /// `h16 = 1*4HEXDIG`
    fn read_h16(&mut self) -> bool {
        let mut i = 0;
        while i < 4 && matches!(self.peek(i), Some(x) if lexis::HEXDIG.allows(x)) {
            i += 1;
        }
        if i == 0 {
            return false;
        }
        self.skip(i);
        true
    }

    /// `ls32 = ( h16 ":" h16 ) / IPv4address`
    fn read_ls32(&mut self) -> bool {
        let mark = self.pos;
        if self.read_h16() && self.read_str(":") && self.read_h16() {
            return true;
        }
        self.pos = mark;
        self.read_v4()
    }

    /// `IPv4address = dec-octet 3( "." dec-octet )`
    fn read_v4(&mut self) -> bool {
        let mark = self.pos;
        if self.read_v4_octets(3) {
            true
        } else {
            self.pos = mark;
            false
        }
    }

    /// Matches one dec-octet followed by `rest` more `"." dec-octet`
    /// pairs, retrying the octet's alternatives at this choice point
    /// whenever the tail fails to match.
    fn read_v4_octets(&mut self, rest: usize) -> bool {
        for alt in 0..5 {
            let mark = self.pos;
            if self.read_dec_octet(alt)
                && (rest == 0 || (self.read_str(".") && self.read_v4_octets(rest - 1)))
            {
                return true;
            }
            self.pos = mark;
        }
        false
    }

    /// One ordered alternative of `dec-octet`, narrowest first:
    ///
    /// ```text
    /// dec-octet = DIGIT                ; 0-9
    ///           / %x31-39 DIGIT        ; 10-99
    ///           / "1" 2DIGIT           ; 100-199
    ///           / "2" %x30-34 DIGIT    ; 200-249
    ///           / "25" %x30-35         ; 250-255
    /// ```
    fn read_dec_octet(&mut self, alt: usize) -> bool {
        match alt {
            0 => self.read_range(b'0', b'9'),
            1 => self.read_range(b'1', b'9') && self.read_range(b'0', b'9'),
            2 => {
                self.read_range(b'1', b'1')
                    && self.read_range(b'0', b'9')
                    && self.read_range(b'0', b'9')
            }
            3 => {
                self.read_range(b'2', b'2')
                    && self.read_range(b'0', b'4')
                    && self.read_range(b'0', b'9')
            }
            _ => {
                self.read_range(b'2', b'2')
                    && self.read_range(b'5', b'5')
                    && self.read_range(b'0', b'5')
            }
        }
    }

    /// `port = *DIGIT`, folded as `value*10 + digit` on `u16`.
    ///
    /// The fold wraps on overflow: an arbitrarily long digit run is
    /// legal input and produces the wrapped value, not an error. With
    /// no digits at all the fold yields the initial value of zero.
    fn read_port(&mut self) -> u16 {
        let mut value: u16 = 0;
        while let Some(x) = self.peek(0).filter(u8::is_ascii_digit) {
            value = value.wrapping_mul(10).wrapping_add((x - b'0') as u16);
            self.skip(1);
        }
        value
    }

    /// The path variant selected by the `hier-part` context.
    fn read_path(&mut self, kind: PathKind) -> Result<String> {
        let start = self.pos;
        match kind {
            PathKind::AbEmpty => {
                // path-abempty = *( "/" segment )
                if self.scan(lexis::PATH)? && self.bytes[start] != b'/' {
                    err!(start, UnexpectedChar);
                }
            }
            PathKind::Hier => {
                // path-absolute / path-rootless / path-empty; every
                // outcome of the superset scan is one of the three,
                // since a leading "//" has already been ruled out.
                self.scan(lexis::PATH)?;
            }
            PathKind::NoScheme => {
                // path-absolute / path-noscheme / path-empty. The first
                // segment of a relative reference must not contain a
                // colon, lest it be mistaken for a scheme.
                self.scan(lexis::SEGMENT_NZ_NC)?;
                if self.peek(0) == Some(b':') {
                    err!(self.pos, UnexpectedChar);
                }
                self.scan(lexis::PATH)?;
            }
        }
        Ok(self.owned_from(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v4(s: &str) -> (bool, usize) {
        let mut cur = Cursor::new(s);
        let ok = cur.read_v4();
        (ok, cur.pos)
    }

    fn v6(s: &str) -> (bool, usize) {
        let mut cur = Cursor::new(s);
        let ok = cur.read_v6();
        (ok, cur.pos)
    }

    #[test]
    fn dec_octet_backtracks_on_tail_failure() {
        // The first alternative of the last octet matches "2"; the full
        // address only matches after retrying the wider alternatives.
        assert_eq!(v4("10.0.0.250"), (true, 10));
        assert_eq!(v4("1.22.133.244"), (true, 12));
        assert_eq!(v4("255.255.255.255"), (true, 15));
    }

    #[test]
    fn dec_octet_stops_at_the_longest_valid_prefix() {
        // "256" is no dec-octet; the single digit "2" is, but then the
        // required "." is missing, so the whole address fails.
        assert_eq!(v4("256.1.1.1"), (false, 0));
        assert_eq!(v4("1.2.3"), (false, 0));
        // A trailing non-octet leaves the matched prefix in place; the
        // host rule decides what to make of the leftovers.
        assert_eq!(v4("1.2.3.456"), (true, 8));
        assert_eq!(v4("127.0.0.001"), (true, 9));
    }

    #[test]
    fn ipv6_elision_positions() {
        for (s, expect) in [
            ("1:2:3:4:5:6:7:8", true),
            ("::", true),
            ("::1", true),
            ("1::", true),
            ("1:2:3:4:5:6:7::", true),
            ("1::8", true),
            ("1:2:3:4:5:6::8", true),
            ("fe80::1", true),
            ("2001:db8::7", true),
            ("::ffff:1.2.3.4", true),
            ("1:2:3:4:5:6:1.2.3.4", true),
            ("::1.2.3.4", true),
            ("1:2::3:4:5.6.7.8", true),
            (":", false),
            (":::", false),
            ("1:2:3", false),
            ("1:2:3:4:5:6:7:8:9", false),
        ] {
            let (ok, pos) = v6(s);
            let total = ok && pos == s.len();
            assert_eq!(total, expect, "IPv6 {s:?}");
        }
    }

    #[test]
    fn ipv6_rejects_double_elision() {
        // "44:55::66::77" begins like an address; the rule must not
        // consume through a second "::".
        let (ok, pos) = v6("44:55::66::77");
        assert!(!(ok && pos == 13));
    }

    #[test]
    fn host_classification() {
        assert_eq!(classify_host("192.168.1.1"), Some(HostKind::Ipv4));
        assert_eq!(classify_host("999.999.999.999"), Some(HostKind::RegName));
        assert_eq!(classify_host("127.0.0.001"), Some(HostKind::RegName));
        assert_eq!(classify_host("127.1"), Some(HostKind::RegName));
        assert_eq!(classify_host("example.com"), Some(HostKind::RegName));
        assert_eq!(classify_host(""), Some(HostKind::RegName));
        assert_eq!(classify_host("[::1]"), Some(HostKind::Ipv6));
        assert_eq!(classify_host("[v7.addr:1]"), Some(HostKind::IpvFuture));
        assert_eq!(classify_host("[::1"), None);
        assert_eq!(classify_host("exa mple"), None);
        assert_eq!(classify_host("%zz"), None);
    }

    #[test]
    fn port_fold_wraps() {
        let mut cur = Cursor::new("99999999999");
        assert_eq!(cur.read_port(), 59391);
        let mut cur = Cursor::new("080");
        assert_eq!(cur.read_port(), 80);
        let mut cur = Cursor::new("");
        assert_eq!(cur.read_port(), 0);
    }
}
