use std::io::{BufRead, Write};

/// Source of interactive answers.
pub trait Prompter {
    /// Ask `question`, showing `current` as the default.
    ///
    /// Returns `None` when the user cancels (end of input).
    fn ask(&mut self, question: &str, current: &str) -> std::io::Result<Option<String>>;
}

/// Line-based prompts over any reader/writer pair.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask(&mut self, question: &str, current: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{question} [{current}]: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_answers_in_order() {
        let mut out = Vec::new();
        let mut prompter = TerminalPrompter::new(Cursor::new("src, lib\r\n\n"), &mut out);

        assert_eq!(
            prompter.ask("Include", "src").unwrap().as_deref(),
            Some("src, lib")
        );
        assert_eq!(prompter.ask("Exclude", "").unwrap().as_deref(), Some(""));
        assert_eq!(prompter.ask("Again", "").unwrap(), None);

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.starts_with("Include [src]: Exclude []: "));
    }
}
