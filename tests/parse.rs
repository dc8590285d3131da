use uri_grammar::{
    component::{HostKind, Scheme},
    error::ParseErrorKind,
    Uri,
};

#[test]
fn parse_absolute() {
    let u = Uri::parse("file:///etc/hosts").unwrap();
    assert_eq!(u.to_string(), "file:///etc/hosts");
    assert_eq!(u.scheme().unwrap().as_str(), "file");
    let a = u.authority().unwrap();
    assert_eq!(a.userinfo(), None);
    assert_eq!(a.host(), "");
    assert_eq!(a.host_kind(), HostKind::RegName);
    assert_eq!(a.port(), None);
    assert_eq!(u.path(), "/etc/hosts");
    assert_eq!(u.query(), None);
    assert_eq!(u.fragment(), None);

    let u = Uri::parse("ftp://ftp.is.co.za/rfc/rfc1808.txt").unwrap();
    assert_eq!(u.scheme().unwrap().as_str(), "ftp");
    assert_eq!(u.host(), Some("ftp.is.co.za"));
    assert_eq!(u.host_kind(), Some(HostKind::RegName));
    assert_eq!(u.path(), "/rfc/rfc1808.txt");

    let u = Uri::parse("http://www.ietf.org/rfc/rfc2396.txt").unwrap();
    assert_eq!(u.scheme().unwrap().as_str(), "http");
    assert_eq!(u.host(), Some("www.ietf.org"));
    assert_eq!(u.path(), "/rfc/rfc2396.txt");

    let u = Uri::parse("ldap://[2001:db8::7]/c=GB?objectClass?one").unwrap();
    assert_eq!(u.scheme().unwrap().as_str(), "ldap");
    assert_eq!(u.host(), Some("[2001:db8::7]"));
    assert_eq!(u.host_kind(), Some(HostKind::Ipv6));
    assert_eq!(u.path(), "/c=GB");
    assert_eq!(u.query(), Some("objectClass?one"));

    let u = Uri::parse("mailto:John.Doe@example.com").unwrap();
    assert_eq!(u.scheme().unwrap().as_str(), "mailto");
    assert_eq!(u.authority(), None);
    assert_eq!(u.path(), "John.Doe@example.com");

    let u = Uri::parse("news:comp.infosystems.www.servers.unix").unwrap();
    assert_eq!(u.authority(), None);
    assert_eq!(u.path(), "comp.infosystems.www.servers.unix");

    let u = Uri::parse("tel:+1-816-555-1212").unwrap();
    assert_eq!(u.scheme().unwrap().as_str(), "tel");
    assert_eq!(u.path(), "+1-816-555-1212");

    let u = Uri::parse("telnet://192.0.2.16:80/").unwrap();
    assert_eq!(u.host(), Some("192.0.2.16"));
    assert_eq!(u.host_kind(), Some(HostKind::Ipv4));
    assert_eq!(u.port(), Some(80));
    assert_eq!(u.path(), "/");

    let u = Uri::parse("urn:oasis:names:specification:docbook:dtd:xml:4.1.2").unwrap();
    assert_eq!(u.scheme().unwrap().as_str(), "urn");
    assert_eq!(u.authority(), None);
    assert_eq!(u.path(), "oasis:names:specification:docbook:dtd:xml:4.1.2");

    let u = Uri::parse("foo://info.example.com?fred").unwrap();
    assert_eq!(u.host(), Some("info.example.com"));
    assert_eq!(u.path(), "");
    assert_eq!(u.query(), Some("fred"));

    let u = Uri::parse("foo://user@example.com:8042/over/there?name=ferret#nose").unwrap();
    assert_eq!(u.scheme(), Some(Scheme::new_or_panic("foo")));
    assert_eq!(u.user(), Some("user"));
    assert_eq!(u.password(), None);
    assert_eq!(u.host(), Some("example.com"));
    assert_eq!(u.port(), Some(8042));
    assert_eq!(u.path(), "/over/there");
    assert_eq!(u.query(), Some("name=ferret"));
    assert_eq!(u.fragment(), Some("nose"));
}

#[test]
fn parse_relative() {
    let u = Uri::parse("").unwrap();
    assert!(u.is_relative());
    assert_eq!(u.scheme(), None);
    assert_eq!(u.authority(), None);
    assert_eq!(u.path(), "");

    let u = Uri::parse("foo.txt").unwrap();
    assert_eq!(u.path(), "foo.txt");

    let u = Uri::parse(".").unwrap();
    assert_eq!(u.path(), ".");

    let u = Uri::parse("./this:that").unwrap();
    assert_eq!(u.path(), "./this:that");

    let u = Uri::parse("//example.com").unwrap();
    assert!(u.is_relative());
    assert_eq!(u.host(), Some("example.com"));
    assert_eq!(u.path(), "");

    let u = Uri::parse("/abs/path").unwrap();
    assert_eq!(u.authority(), None);
    assert_eq!(u.path(), "/abs/path");

    let u = Uri::parse("path/to/x?q#f").unwrap();
    assert_eq!(u.scheme(), None);
    assert_eq!(u.authority(), None);
    assert_eq!(u.path(), "path/to/x");
    assert_eq!(u.query(), Some("q"));
    assert_eq!(u.fragment(), Some("f"));

    // A colon is fine anywhere past the first segment.
    let u = Uri::parse("a/b:c").unwrap();
    assert_eq!(u.path(), "a/b:c");

    let u = Uri::parse("?q").unwrap();
    assert_eq!(u.path(), "");
    assert_eq!(u.query(), Some("q"));

    let u = Uri::parse("#f").unwrap();
    assert_eq!(u.path(), "");
    assert_eq!(u.fragment(), Some("f"));
}

#[test]
fn parse_userinfo() {
    let u = Uri::parse("//user:pass@host").unwrap();
    assert_eq!(u.user(), Some("user"));
    assert_eq!(u.password(), Some("pass"));
    assert_eq!(u.host(), Some("host"));

    let u = Uri::parse("//user@host").unwrap();
    assert_eq!(u.user(), Some("user"));
    assert_eq!(u.password(), None);

    let u = Uri::parse("//:pass@host").unwrap();
    assert_eq!(u.user(), Some(""));
    assert_eq!(u.password(), Some("pass"));

    let u = Uri::parse("//@host").unwrap();
    assert_eq!(u.user(), Some(""));
    assert_eq!(u.password(), None);

    // No "@" terminator: the whole attempt unwinds, "user" becomes the
    // host, and the colon can then only introduce a port.
    let e = Uri::parse("//user:pass.example.com/").unwrap_err();
    assert_eq!(e.index(), 7);
    assert_eq!(e.kind(), ParseErrorKind::UnexpectedChar);

    let u = Uri::parse("//user.example.com/").unwrap();
    assert_eq!(u.user(), None);
    assert_eq!(u.host(), Some("user.example.com"));

    // "@" is an ordinary pchar within a path.
    let u = Uri::parse("//host/a@b").unwrap();
    assert_eq!(u.user(), None);
    assert_eq!(u.path(), "/a@b");
}

#[test]
fn parse_hosts() {
    let u = Uri::parse("//192.168.1.1/").unwrap();
    assert_eq!(u.host(), Some("192.168.1.1"));
    assert_eq!(u.host_kind(), Some(HostKind::Ipv4));

    // Out-of-range octets make a perfectly good registered name.
    let u = Uri::parse("//999.999.999.999/").unwrap();
    assert_eq!(u.host(), Some("999.999.999.999"));
    assert_eq!(u.host_kind(), Some(HostKind::RegName));

    // So do leading zeros and too few octets.
    let u = Uri::parse("//127.0.0.001/").unwrap();
    assert_eq!(u.host_kind(), Some(HostKind::RegName));
    let u = Uri::parse("//127.1/").unwrap();
    assert_eq!(u.host_kind(), Some(HostKind::RegName));

    let u = Uri::parse("//[::1]/").unwrap();
    assert_eq!(u.host(), Some("[::1]"));
    assert_eq!(u.host_kind(), Some(HostKind::Ipv6));

    let u = Uri::parse("//[::ffff:1.2.3.4]/").unwrap();
    assert_eq!(u.host_kind(), Some(HostKind::Ipv6));

    let u = Uri::parse("//[2001:db8::7]/").unwrap();
    assert_eq!(u.host_kind(), Some(HostKind::Ipv6));

    let u = Uri::parse("//[1:2:3:4:5:6:7:8]/").unwrap();
    assert_eq!(u.host_kind(), Some(HostKind::Ipv6));

    let u = Uri::parse("//[v1F.addr:x]/").unwrap();
    assert_eq!(u.host(), Some("[v1F.addr:x]"));
    assert_eq!(u.host_kind(), Some(HostKind::IpvFuture));

    let u = Uri::parse("//%E4%BE%8B.example/").unwrap();
    assert_eq!(u.host(), Some("%E4%BE%8B.example"));
    assert_eq!(u.host_kind(), Some(HostKind::RegName));
}

#[test]
fn parse_ports() {
    let u = Uri::parse("//host:8080/").unwrap();
    assert_eq!(u.port(), Some(8080));

    // Leading zeros fold away.
    let u = Uri::parse("//host:080/").unwrap();
    assert_eq!(u.port(), Some(80));

    // The digit fold wraps modulo 65536 rather than failing.
    let u = Uri::parse("//host:99999999999/").unwrap();
    assert_eq!(u.port(), Some(59391));

    // An empty port is present, with the fold's initial value.
    let u = Uri::parse("//host:/").unwrap();
    assert_eq!(u.port(), Some(0));

    let u = Uri::parse("//host/").unwrap();
    assert_eq!(u.port(), None);
}

#[test]
fn parse_preserves_percent_encoding() {
    let u = Uri::parse("/a%2Fb").unwrap();
    assert_eq!(u.path(), "/a%2Fb");
    assert_eq!(u.to_string(), "/a%2Fb");

    let u = Uri::parse("http://example.com/%7Esmith/?a%3Db#%20").unwrap();
    assert_eq!(u.path(), "/%7Esmith/");
    assert_eq!(u.query(), Some("a%3Db"));
    assert_eq!(u.fragment(), Some("%20"));
}

#[test]
fn parse_requires_total_consumption() {
    let e = Uri::parse("http://a.com extra").unwrap_err();
    assert_eq!(e.index(), 12);
    assert_eq!(e.kind(), ParseErrorKind::UnexpectedChar);

    let e = Uri::parse("http://example.com/ extra").unwrap_err();
    assert_eq!(e.index(), 19);
    assert_eq!(e.kind(), ParseErrorKind::UnexpectedChar);

    // A second colon ends the port; the leftover is no path-abempty.
    let e = Uri::parse("http://example.com:80:80/").unwrap_err();
    assert_eq!(e.index(), 21);
    assert_eq!(e.kind(), ParseErrorKind::UnexpectedChar);
}

#[test]
fn parse_error() {
    // A relative reference must not look like a scheme.
    let e = Uri::parse(":hello").unwrap_err();
    assert_eq!(e.index(), 0);
    assert_eq!(e.kind(), ParseErrorKind::UnexpectedChar);

    let e = Uri::parse("1:2").unwrap_err();
    assert_eq!(e.index(), 1);
    assert_eq!(e.kind(), ParseErrorKind::UnexpectedChar);

    // Unclosed bracket.
    let e = Uri::parse("http://[::1").unwrap_err();
    assert_eq!(e.index(), 7);
    assert_eq!(e.kind(), ParseErrorKind::InvalidIpLiteral);

    // Not quite an IPv6 address, nor an IPvFuture one.
    let e = Uri::parse("http://[::x]/").unwrap_err();
    assert_eq!(e.index(), 7);
    assert_eq!(e.kind(), ParseErrorKind::InvalidIpLiteral);

    let e = Uri::parse("//[v.1]").unwrap_err();
    assert_eq!(e.index(), 2);
    assert_eq!(e.kind(), ParseErrorKind::InvalidIpLiteral);

    let e = Uri::parse("//[1:2:3:4:5:6:7:8:9]").unwrap_err();
    assert_eq!(e.index(), 2);
    assert_eq!(e.kind(), ParseErrorKind::InvalidIpLiteral);

    // Too many characters after a valid address.
    let e = Uri::parse("//[::1%eth0]").unwrap_err();
    assert_eq!(e.index(), 2);
    assert_eq!(e.kind(), ParseErrorKind::InvalidIpLiteral);

    // Malformed percent-encoded octets.
    let e = Uri::parse("http://%zz/").unwrap_err();
    assert_eq!(e.index(), 7);
    assert_eq!(e.kind(), ParseErrorKind::InvalidOctet);

    let e = Uri::parse("/a%2").unwrap_err();
    assert_eq!(e.index(), 2);
    assert_eq!(e.kind(), ParseErrorKind::InvalidOctet);

    let e = Uri::parse("foo://a b").unwrap_err();
    assert_eq!(e.index(), 7);
    assert_eq!(e.kind(), ParseErrorKind::UnexpectedChar);

    assert_eq!(
        Uri::parse("/a%2").unwrap_err().to_string(),
        "invalid percent-encoded octet at index 2"
    );
}

#[test]
fn scheme_is_case_insensitive() {
    let u = Uri::parse("HTTP://EXAMPLE.COM/").unwrap();
    assert_eq!(u.scheme(), Some(Scheme::new_or_panic("http")));
    assert_eq!(u.scheme().unwrap().as_str(), "HTTP");
    // Everything else is kept verbatim.
    assert_eq!(u.host(), Some("EXAMPLE.COM"));
}
