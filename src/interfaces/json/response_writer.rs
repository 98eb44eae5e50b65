use crate::application::registry::Response;
use crate::domain::codec;
use crate::error::Result;
use std::io::Write;

/// Writes operation responses as canonical JSON lines.
///
/// Records go out in the same canonical byte form they are persisted in, so
/// a caller can hash or diff what it reads against ledger state. Operations
/// with nothing to return produce no output.
pub struct ResponseWriter<W: Write> {
    writer: W,
}

impl<W: Write> ResponseWriter<W> {
    /// Creates a new `ResponseWriter` over any `Write` sink (e.g. stdout).
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_response(&mut self, response: &Response) -> Result<()> {
        match response {
            Response::None => Ok(()),
            Response::Flag(flag) => {
                writeln!(self.writer, "{flag}")?;
                Ok(())
            }
            Response::Record(payment) => {
                self.writer.write_all(&codec::encode(payment)?)?;
                writeln!(self.writer)?;
                Ok(())
            }
            Response::Records(payments) => {
                self.writer.write_all(&codec::encode_all(payments)?)?;
                writeln!(self.writer)?;
                Ok(())
            }
        }
    }
}
