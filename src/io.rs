//! Adapters between URI references and byte streams.

use crate::{error::ReadError, Uri};
use std::io;

impl Uri {
    /// Reads `reader` to end and parses the contents as a URI reference.
    ///
    /// The whole stream is the input: the bytes must be valid UTF-8 and
    /// must match the grammar in full, trailing bytes included.
    ///
    /// # Errors
    ///
    /// Returns `Err` if reading fails, if the bytes are not valid UTF-8,
    /// or if the text does not match the URI grammar.
    pub fn from_reader(mut reader: impl io::Read) -> Result<Uri, ReadError> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        let text = core::str::from_utf8(&buf).map_err(ReadError::Decode)?;
        Ok(Uri::parse(text)?)
    }

    /// Writes the rendered text of this URI reference to `writer`.
    ///
    /// Emits exactly the bytes of [`to_string`], without a trailing newline.
    ///
    /// [`to_string`]: alloc::string::ToString::to_string
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying write fails.
    pub fn write_to(&self, mut writer: impl io::Write) -> io::Result<()> {
        writer.write_all(self.to_string().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    #[test]
    fn from_reader_parses_the_whole_stream() {
        let uri = Uri::from_reader("http://example.com/".as_bytes()).unwrap();
        assert_eq!(uri.host(), Some("example.com"));

        match Uri::from_reader("http://example.com/ extra".as_bytes()) {
            Err(ReadError::Parse(e)) => {
                assert_eq!(e.kind(), ParseErrorKind::UnexpectedChar);
                assert_eq!(e.index(), 19);
            }
            other => panic!("expected a parse error, got {other:?}"),
        }

        match Uri::from_reader(&b"http://\xff/"[..]) {
            Err(ReadError::Decode(_)) => {}
            other => panic!("expected a decode error, got {other:?}"),
        }
    }

    #[test]
    fn write_to_matches_display() {
        let uri = Uri::parse("foo://user@example.com:8042/over/there?name=ferret#nose").unwrap();
        let mut buf = Vec::new();
        uri.write_to(&mut buf).unwrap();
        assert_eq!(buf, uri.to_string().as_bytes());
    }
}
