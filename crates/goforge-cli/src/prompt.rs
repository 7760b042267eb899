// Line-oriented interactive prompts

use std::io::{self, BufRead, Write};

use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;

/// Asks questions on a reader/writer pair (stdin/stdout in the binary)
pub struct Prompter<R, W> {
    input: R,
    output: W,
    style: OutputStyle,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter over the process's terminal
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            style: OutputStyle::default(),
        }
    }

    /// Disable colored prompts
    pub fn plain(mut self) -> Self {
        self.style = OutputStyle { use_colors: false };
        self
    }

    /// Read one trimmed line; end of input is an error
    fn read_answer(&mut self, question: &str) -> CliResult<String> {
        write!(self.output, "{}", self.style.prompt(question))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::invalid(format!("no answer given for '{}'", question)));
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `validate` accepts the answer
    pub fn ask<F>(&mut self, question: &str, validate: F) -> CliResult<String>
    where
        F: Fn(&str) -> CliResult<()>,
    {
        loop {
            let answer = self.read_answer(question)?;
            match validate(&answer) {
                Ok(()) => return Ok(answer),
                Err(CliError::InvalidArgument { message }) => {
                    writeln!(self.output, "{}", self.style.warning(&message))?;
                }
                Err(other) => return Err(other),
            }
        }
    }

    /// Pick one of `choices` by number or name; an empty answer keeps `default`
    pub fn choose<T>(
        &mut self,
        question: &str,
        choices: &[(T, &str, &str)],
        default: T,
    ) -> CliResult<T>
    where
        T: Copy + PartialEq,
    {
        writeln!(self.output, "{}", self.style.header(question))?;
        for (index, (value, _, label)) in choices.iter().enumerate() {
            let marker = if *value == default { " (default)" } else { "" };
            writeln!(self.output, "  {}. {}{}", index + 1, label, marker)?;
        }

        loop {
            let answer = self.read_answer(">")?;
            if answer.is_empty() {
                return Ok(default);
            }
            let by_number = answer
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| choices.get(i));
            let by_name = choices
                .iter()
                .find(|(_, name, _)| name.eq_ignore_ascii_case(&answer));
            match by_number.or(by_name) {
                Some((value, _, _)) => return Ok(*value),
                None => writeln!(
                    self.output,
                    "{}",
                    self.style.warning(&format!("Enter a number between 1 and {}", choices.len()))
                )?,
            }
        }
    }

    /// Yes/no question; an empty answer keeps `default`
    pub fn confirm(&mut self, question: &str, default: bool) -> CliResult<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            let answer = self.read_answer(&format!("{} {}", question, hint))?;
            match answer.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "{}", self.style.warning("Please enter 'y' or 'n'"))?,
            }
        }
    }
}
