use crate::error::TaskError;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Line-based question/answer prompt over any reader and writer
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of text
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write to terminal")
    }

    /// Print a question and read one answer line (without its line ending)
    ///
    /// End of input aborts the current flow.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question).context("Failed to write to terminal")?;
        self.output.flush().context("Failed to flush terminal")?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .context("Failed to read from terminal")?;
        if read == 0 {
            return Err(TaskError::Aborted.into());
        }

        Ok(answer.trim_end_matches(&['\n', '\r'][..]).to_string())
    }

    /// Ask until the answer is not empty
    pub fn ask_non_empty(&mut self, question: &str) -> Result<String> {
        loop {
            let answer = self.ask(question)?;
            if !answer.trim().is_empty() {
                return Ok(answer);
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_reads_lines() {
        let mut prompt = Prompt::new(Cursor::new("first\r\nsecond\n"), Vec::new());

        assert_eq!(prompt.ask("Name: ").unwrap(), "first");
        assert_eq!(prompt.ask("Again: ").unwrap(), "second");
        assert_eq!(String::from_utf8(prompt.into_output()).unwrap(), "Name: Again: ");
    }

    #[test]
    fn test_ask_at_end_of_input_aborts() {
        let mut prompt = Prompt::new(Cursor::new(""), Vec::new());
        let err = prompt.ask("Name: ").unwrap_err();
        assert_eq!(err.downcast_ref::<TaskError>(), Some(&TaskError::Aborted));
    }

    #[test]
    fn test_ask_non_empty_repeats() {
        let mut prompt = Prompt::new(Cursor::new("\n  \n3\n"), Vec::new());
        assert_eq!(prompt.ask_non_empty("Select: ").unwrap(), "3");
        assert_eq!(
            String::from_utf8(prompt.into_output()).unwrap(),
            "Select: Select: Select: "
        );
    }

    #[test]
    fn test_say_writes_line() {
        let mut prompt = Prompt::new(Cursor::new(""), Vec::new());
        prompt.say("Available tasks").unwrap();
        assert_eq!(String::from_utf8(prompt.into_output()).unwrap(), "Available tasks\n");
    }
}
