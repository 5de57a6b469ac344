use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Failures of the interactive console protocol
#[derive(Debug, Error)]
pub enum InputError {
    #[error("standard input closed while waiting for {0}")]
    Closed(&'static str),
    #[error("console I/O failed")]
    Io(#[from] io::Error),
}

/// Line-oriented question/answer over any reader and writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` without a newline and read one trimmed line back
    pub fn ask(&mut self, question: &str, what: &'static str) -> Result<String, InputError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed(what));
        }
        Ok(line.trim().to_string())
    }

    pub fn say(&mut self, line: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    #[cfg(test)]
    fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// `y`/`Y` → true, `n`/`N` → false, judged on the first character only
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.chars().next()? {
        'y' | 'Y' => Some(true),
        'n' | 'N' => Some(false),
        _ => None,
    }
}

/// First character as an upper-case drive letter, if it is one
pub fn parse_drive_letter(answer: &str) -> Option<char> {
    let letter = answer.chars().next()?.to_ascii_uppercase();
    letter.is_ascii_uppercase().then_some(letter)
}
