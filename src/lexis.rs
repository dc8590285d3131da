//! The lexical core: byte-class tables and low-level rules shared by
//! ABNF-based grammars.
//!
//! The class constants in this module are documented with the ABNF
//! notation of [RFC 2234] (core rules) and [RFC 3986] (URI rules).
//!
//! Every rule in this module is pure: it either matches a prefix of its
//! input exactly or fails without consuming anything.
//!
//! [RFC 2234]: https://datatracker.ietf.org/doc/html/rfc2234/
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/

/// A table determining the bytes allowed in a component of a URI reference.
#[derive(Clone, Copy, Debug)]
pub struct Table {
    arr: [bool; 256],
    allows_pct_encoded: bool,
}

impl Table {
    /// Generates a table that only allows the given unencoded bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes equals `b'%'`.
    pub const fn gen(mut bytes: &[u8]) -> Table {
        let mut arr = [false; 256];
        while let [cur, rem @ ..] = bytes {
            assert!(*cur != b'%', "cannot allow unencoded %");
            arr[*cur as usize] = true;
            bytes = rem;
        }
        Table {
            arr,
            allows_pct_encoded: false,
        }
    }

    /// Generates a table that allows the given inclusive range of bytes.
    pub const fn gen_range(lo: u8, hi: u8) -> Table {
        let mut arr = [false; 256];
        let mut i = lo as usize;
        while i <= hi as usize {
            arr[i] = true;
            i += 1;
        }
        Table {
            arr,
            allows_pct_encoded: false,
        }
    }

    /// Marks this table as allowing percent-encoded octets.
    pub const fn enc(mut self) -> Table {
        self.allows_pct_encoded = true;
        self
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the bytes allowed either
    /// by `self` or by `other`.
    pub const fn or(mut self, other: &Table) -> Table {
        let mut i = 0;
        while i < 256 {
            self.arr[i] |= other.arr[i];
            i += 1;
        }
        self.allows_pct_encoded |= other.allows_pct_encoded;
        self
    }

    /// Subtracts from this table.
    ///
    /// Returns a new table that allows all the bytes allowed by `self`
    /// but not allowed by `other`.
    pub const fn sub(mut self, other: &Table) -> Table {
        let mut i = 0;
        while i < 256 {
            if other.arr[i] {
                self.arr[i] = false;
            }
            i += 1;
        }
        if other.allows_pct_encoded {
            self.allows_pct_encoded = false;
        }
        self
    }

    /// Returns `true` if the table is a subset of another, i.e., `other`
    /// allows at least all the bytes allowed by `self`.
    pub const fn is_subset(&self, other: &Table) -> bool {
        let mut i = 0;
        while i < 256 {
            if self.arr[i] && !other.arr[i] {
                return false;
            }
            i += 1;
        }
        !self.allows_pct_encoded || other.allows_pct_encoded
    }

    /// Returns `true` if the given unencoded byte is allowed by the table.
    #[inline]
    pub const fn allows(&self, x: u8) -> bool {
        self.arr[x as usize]
    }

    /// Returns `true` if percent-encoded octets are allowed by the table.
    #[inline]
    pub const fn allows_pct_encoded(&self) -> bool {
        self.allows_pct_encoded
    }

    /// Validates the given byte sequence with the table.
    ///
    /// Percent-encoded octets count as allowed iff the table allows them
    /// and both trailing digits are hexadecimal.
    pub(crate) const fn validate(&self, s: &[u8]) -> bool {
        let mut i = 0;
        while i < s.len() {
            let x = s[i];
            if self.allows_pct_encoded && x == b'%' {
                if i + 2 >= s.len() {
                    return false;
                }
                if !(HEXDIG.allows(s[i + 1]) && HEXDIG.allows(s[i + 2])) {
                    return false;
                }
                i += 3;
            } else {
                if !self.allows(x) {
                    return false;
                }
                i += 1;
            }
        }
        true
    }
}

const fn gen(bytes: &[u8]) -> Table {
    Table::gen(bytes)
}

// RFC 2234 core rules.

/// `ALPHA = %x41-5A / %x61-7A` ; A-Z / a-z
pub const ALPHA: &Table = &Table::gen_range(0x41, 0x5A).or(&Table::gen_range(0x61, 0x7A));

/// `BIT = "0" / "1"`
pub const BIT: &Table = &gen(b"01");

/// `CHAR = %x01-7F` ; any 7-bit US-ASCII character, excluding NUL
pub const CHAR: &Table = &Table::gen_range(0x01, 0x7F);

/// `CR = %x0D` ; carriage return
pub const CR: &Table = &gen(b"\r");

/// `CTL = %x00-1F / %x7F` ; controls
pub const CTL: &Table = &Table::gen_range(0x00, 0x1F).or(&Table::gen_range(0x7F, 0x7F));

/// `DIGIT = %x30-39` ; 0-9
pub const DIGIT: &Table = &Table::gen_range(0x30, 0x39);

/// `DQUOTE = %x22` ; " (double quote)
pub const DQUOTE: &Table = &gen(b"\"");

/// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`
///
/// Lowercase hexadecimal digits are also allowed, as RFC 3986 requires
/// of `pct-encoded` and `h16`.
pub const HEXDIG: &Table = &DIGIT.or(&gen(b"ABCDEFabcdef"));

/// `HTAB = %x09` ; horizontal tab
pub const HTAB: &Table = &gen(b"\t");

/// `LF = %x0A` ; linefeed
pub const LF: &Table = &gen(b"\n");

/// `OCTET = %x00-FF` ; 8 bits of data
pub const OCTET: &Table = &Table::gen_range(0x00, 0xFF);

/// `SP = %x20` ; space
pub const SP: &Table = &gen(b" ");

/// `VCHAR = %x21-7E` ; visible (printing) characters
pub const VCHAR: &Table = &Table::gen_range(0x21, 0x7E);

/// `WSP = SP / HTAB` ; white space
pub const WSP: &Table = &SP.or(HTAB);

/// `CRLF = CR LF` ; Internet standard newline
///
/// Returns the matched length, or `None` if the input does not start
/// with a CR immediately followed by an LF.
#[inline]
pub const fn crlf(s: &[u8]) -> Option<usize> {
    match s {
        [b'\r', b'\n', ..] => Some(2),
        _ => None,
    }
}

/// `LWSP = *(WSP / CRLF WSP)` ; linear white space (past newline)
///
/// Returns the matched length, which may be zero. A trailing CRLF not
/// followed by white space is not consumed.
pub const fn lwsp(s: &[u8]) -> usize {
    let mut i = 0;
    loop {
        if i < s.len() && WSP.allows(s[i]) {
            i += 1;
        } else if i + 2 < s.len() && s[i] == b'\r' && s[i + 1] == b'\n' && WSP.allows(s[i + 2]) {
            i += 3;
        } else {
            return i;
        }
    }
}

// RFC 3986 rules, built on the core.

/// `gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"`
pub const GEN_DELIMS: &Table = &gen(b":/?#[]@");

/// `sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
///             / "*" / "+" / "," / ";" / "="`
pub const SUB_DELIMS: &Table = &gen(b"!$&'()*+,;=");

/// `reserved = gen-delims / sub-delims`
pub const RESERVED: &Table = &GEN_DELIMS.or(SUB_DELIMS);

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub const UNRESERVED: &Table = &ALPHA.or(DIGIT).or(&gen(b"-._~"));

/// `pchar = unreserved / pct-encoded / sub-delims / ":" / "@"`
pub const PCHAR: &Table = &UNRESERVED.or(SUB_DELIMS).or(&gen(b":@")).enc();

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub const SCHEME: &Table = &ALPHA.or(DIGIT).or(&gen(b"+-."));

/// `user = *( unreserved / pct-encoded / sub-delims )`
///
/// The user part of `userinfo = user [ ":" password ]`; everything
/// before the first colon.
pub const USER: &Table = &UNRESERVED.or(SUB_DELIMS).enc();

/// `password = *( unreserved / pct-encoded / sub-delims / ":" )`
pub const PASSWORD: &Table = &USER.or(&gen(b":"));

/// `reg-name = *( unreserved / pct-encoded / sub-delims )`
pub const REG_NAME: &Table = &UNRESERVED.or(SUB_DELIMS).enc();

/// `IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`
pub const IPV_FUTURE: &Table = &UNRESERVED.or(SUB_DELIMS).or(&gen(b":"));

/// `segment-nz-nc = 1*( unreserved / pct-encoded / sub-delims / "@" )`
pub const SEGMENT_NZ_NC: &Table = &UNRESERVED.or(SUB_DELIMS).or(&gen(b"@")).enc();

/// `path = *( pchar / "/" )`
///
/// The superset scanned for every path variant; which variant applies
/// is decided by the enclosing `hier-part` context.
pub const PATH: &Table = &PCHAR.or(&gen(b"/"));

/// `query = *( pchar / "/" / "?" )`
pub const QUERY: &Table = &PCHAR.or(&gen(b"/?"));

/// `fragment = *( pchar / "/" / "?" )`
pub const FRAGMENT: &Table = QUERY;
