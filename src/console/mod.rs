//! Line-based console I/O with a session transcript.

pub mod theme;

use std::io::{self, BufRead, Write};

pub use theme::{Theme, Tone};

/// Marker put in front of every input line recorded in the session log.
pub const INPUT_MARKER: &str = "> ";

/// Everything shown to and typed by the user during one run.
#[derive(Debug, Default, Clone)]
pub struct SessionLog {
    lines: Vec<String>,
}

impl SessionLog {
    pub fn record_output(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    pub fn record_input(&mut self, line: &str) {
        self.lines.push(format!("{}{}", INPUT_MARKER, line));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// The I/O port every session action talks through.
pub trait Console {
    fn write_styled(&mut self, line: &str, tone: Tone) -> io::Result<()>;

    /// Read one line without its terminator. `None` at end of input.
    /// Bytes that are not UTF-8 are replaced rather than rejected.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    fn session_log(&self) -> &SessionLog;

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.write_styled(line, Tone::Plain)
    }
}

/// A console over any reader/writer pair that records its traffic.
pub struct LoggedConsole<R, W> {
    input: R,
    output: W,
    theme: Option<Theme>,
    log: SessionLog,
}

impl<R: BufRead, W: Write> LoggedConsole<R, W> {
    /// `theme` of `None` writes plain text.
    pub fn new(input: R, output: W, theme: Option<Theme>) -> Self {
        Self {
            input,
            output,
            theme,
            log: SessionLog::default(),
        }
    }
}

impl<R: BufRead, W: Write> Console for LoggedConsole<R, W> {
    fn write_styled(&mut self, line: &str, tone: Tone) -> io::Result<()> {
        self.log.record_output(line);
        match &self.theme {
            Some(theme) => writeln!(self.output, "{}", theme.style(line, tone))?,
            None => writeln!(self.output, "{}", line)?,
        }
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let text = String::from_utf8_lossy(&buf);
        let line = text.trim_end_matches(['\n', '\r']).to_string();
        self.log.record_input(&line);
        Ok(Some(line))
    }

    fn session_log(&self) -> &SessionLog {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn test_records_output_and_input_in_order() {
        let mut out: Vec<u8> = Vec::new();
        let mut console = LoggedConsole::new(Cursor::new("Paris\r\nBerlin\n"), &mut out, None);
        console.write_line("The card:").unwrap();
        assert_eq!(console.read_line().unwrap().as_deref(), Some("Paris"));
        console.write_line("Which card?").unwrap();
        assert_eq!(console.read_line().unwrap().as_deref(), Some("Berlin"));
        assert_eq!(console.read_line().unwrap(), None);

        assert_eq!(
            console.session_log().lines(),
            &["The card:", "> Paris", "Which card?", "> Berlin"]
        );
        drop(console);
        assert_eq!(String::from_utf8(out).unwrap(), "The card:\nWhich card?\n");
    }

    #[test]
    fn test_empty_line_is_not_end_of_input() {
        let mut console = LoggedConsole::new(Cursor::new("\n"), Vec::<u8>::new(), None);
        assert_eq!(console.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(console.session_log().lines(), &["> "]);
    }

    #[test]
    fn test_invalid_utf8_line_is_replaced() {
        let input: &[u8] = b"\xff\xfe\nexit\n";
        let mut console = LoggedConsole::new(input, Vec::<u8>::new(), None);
        assert_eq!(console.read_line().unwrap().as_deref(), Some("\u{fffd}\u{fffd}"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("exit"));
    }

    #[test]
    fn test_themed_output_logs_plain_text() {
        let mut out: Vec<u8> = Vec::new();
        let mut console = LoggedConsole::new(Cursor::new(""), &mut out, Some(Theme::default()));
        console.write_styled("Correct!", Tone::Success).unwrap();
        assert_eq!(console.session_log().lines(), &["Correct!"]);
        drop(console);
        assert!(String::from_utf8(out).unwrap().contains("Correct!"));
    }
}
