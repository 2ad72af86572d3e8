//! Line framing for envelopes over byte streams.
//!
//! One wire message per line. The reader decodes and validates each line
//! before handing it out; a bad message fails that read only, and the
//! caller decides whether to drop it or stop.

use std::io::{BufRead, Write};

use crate::codec;
use crate::envelope::Envelope;
use crate::error::Result;

/// Write one envelope and a trailing newline, then flush.
pub fn write_envelope<W: Write>(writer: &mut W, envelope: &Envelope) -> Result<()> {
    writer.write_all(&codec::encode(envelope))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    log::debug!(
        "sent {} envelope {} -> {}",
        envelope.kind(),
        envelope.source(),
        envelope.destination()
    );
    Ok(())
}

/// Read one envelope, `Ok(None)` at end of stream.
pub fn read_envelope<R: BufRead>(reader: &mut R) -> Result<Option<Envelope>> {
    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    while matches!(line.last(), Some(b'\n' | b'\r')) {
        line.pop();
    }
    let envelope = codec::decode(&line)?;
    log::debug!(
        "received {} envelope {} -> {}",
        envelope.kind(),
        envelope.source(),
        envelope.destination()
    );
    Ok(Some(envelope))
}

/// Iterate the envelopes on a stream until end of input.
pub fn envelopes<R: BufRead>(reader: R) -> Envelopes<R> {
    Envelopes { reader }
}

/// Iterator over the envelopes on a byte stream.
pub struct Envelopes<R> {
    reader: R,
}

impl<R: BufRead> Iterator for Envelopes<R> {
    type Item = Result<Envelope>;

    fn next(&mut self) -> Option<Self::Item> {
        read_envelope(&mut self.reader).transpose()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::envelope::MessageKind;
    use crate::error::{DecodeError, WireError};

    #[test]
    fn writes_then_reads_back() {
        let first = Envelope::with_leader(MessageKind::Put, "N1", "N2", "N1").unwrap();
        let second = Envelope::new(MessageKind::Get, "N2", "N1").unwrap();
        let mut buf = Vec::new();
        write_envelope(&mut buf, &first).unwrap();
        write_envelope(&mut buf, &second).unwrap();

        let mut reader = Cursor::new(buf);
        assert_eq!(read_envelope(&mut reader).unwrap(), Some(first));
        assert_eq!(read_envelope(&mut reader).unwrap(), Some(second));
        assert_eq!(read_envelope(&mut reader).unwrap(), None);
    }

    #[test]
    fn bad_message_fails_that_read_only() {
        let input = concat!(
            r#"{"type":"get","src":"A","dest":"B"}"#,
            "\n",
            "not-json\n",
            r#"{"type":"put","src":"B","dest":"A","leader":"B"}"#,
            "\n",
        );
        let mut all = envelopes(Cursor::new(input));
        assert!(all.next().unwrap().is_ok());
        let err = all.next().unwrap().unwrap_err();
        assert!(matches!(
            err,
            WireError::Decode(DecodeError::MalformedSyntax(_))
        ));
        assert!(all.next().unwrap().is_ok());
        assert!(all.next().is_none());
    }

    #[test]
    fn reads_a_line_without_trailing_newline() {
        let mut reader = Cursor::new(r#"{"type":"get","src":"A","dest":"B"}"#);
        assert!(read_envelope(&mut reader).unwrap().is_some());
        assert_eq!(read_envelope(&mut reader).unwrap(), None);
    }

    #[test]
    fn strips_carriage_returns() {
        let mut reader = Cursor::new("{\"type\":\"get\",\"src\":\"A\",\"dest\":\"B\"}\r\n");
        assert!(read_envelope(&mut reader).unwrap().is_some());
    }
}
