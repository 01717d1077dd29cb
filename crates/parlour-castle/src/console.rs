//! Line-oriented text I/O for the game.

use std::io::{self, BufRead, Write};

/// Where narration goes and where answers come from.
pub trait Console {
    /// Print one line of narration.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Show a prompt and read one line of input, without its line ending.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// A [`Console`] over any buffered reader and writer.
#[derive(Debug)]
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    /// Wrap a reader and a writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
