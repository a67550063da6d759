use remote_core::{DisplayError, RemoteDisplay};
use std::io::Write;

/// Prints each frame as `[sign] text`, one line per text update.
pub struct ConsoleDisplay<W: Write> {
    out: W,
    sign: String,
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            sign: String::new(),
        }
    }
}

impl<W: Write> RemoteDisplay for ConsoleDisplay<W> {
    fn show_sign(&mut self, sign: &str) -> Result<(), DisplayError> {
        self.sign.clear();
        self.sign.push_str(sign);
        Ok(())
    }

    fn show_text(&mut self, text: &str) -> Result<(), DisplayError> {
        writeln!(self.out, "[{}] {}", self.sign, text)
            .map_err(|e| DisplayError::Rejected(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_sign_and_text() {
        let mut display = ConsoleDisplay::new(Vec::new());
        display.show_sign("+").unwrap();
        display.show_text("F:4.").unwrap();
        display.show_sign("-").unwrap();
        display.show_text("N:A").unwrap();
        assert_eq!(String::from_utf8(display.out).unwrap(), "[+] F:4.\n[-] N:A\n");
    }
}
