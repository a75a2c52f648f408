//! Terminal prompt helpers.
//!
//! All helpers are written against generic reader/writer handles so the
//! session loop can be exercised with in-memory buffers.

use std::io::{BufRead, ErrorKind, Write};
use std::path::PathBuf;

use colored::Colorize;

use crate::error::Result;

/// Classification of a yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    /// Anything that is neither "yes" nor "no".
    Other,
}

/// How [`ask_yes_no`] handles an [`Answer::Other`] reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidAnswer {
    /// Keep re-prompting until the reply is "yes" or "no".
    Retry,
    /// Hand [`Answer::Other`] back to the caller, which treats it as a
    /// decline.
    TreatAsNo,
}

/// Prints `prompt` without a trailing newline and reads one trimmed line.
///
/// A closed input stream is an error rather than an empty answer, so a
/// prompt loop can never spin on EOF.
pub fn read_line<In, Out>(input: &mut In, output: &mut Out, prompt: &str) -> Result<String>
where
    In: BufRead,
    Out: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(std::io::Error::new(ErrorKind::UnexpectedEof, "input stream closed").into());
    }
    Ok(line.trim().to_string())
}

/// Case-insensitive classification of a yes/no reply.
pub fn classify(answer: &str) -> Answer {
    match answer.to_lowercase().as_str() {
        "yes" => Answer::Yes,
        "no" => Answer::No,
        _ => Answer::Other,
    }
}

/// Asks a yes/no question, applying `on_invalid` to unrecognized replies.
pub fn ask_yes_no<In, Out>(
    input: &mut In,
    output: &mut Out,
    prompt: &str,
    on_invalid: InvalidAnswer,
) -> Result<Answer>
where
    In: BufRead,
    Out: Write,
{
    loop {
        let reply = read_line(input, output, prompt)?;
        match classify(&reply) {
            Answer::Other if on_invalid == InvalidAnswer::Retry => {
                writeln!(output, "Please answer yes or no.")?;
            }
            verdict => return Ok(verdict),
        }
    }
}

/// Prompts until the reply names an existing regular file.
///
/// Empty replies and missing paths each get a message and another prompt;
/// there is no retry limit.
pub fn prompt_image_path<In, Out>(input: &mut In, output: &mut Out) -> Result<PathBuf>
where
    In: BufRead,
    Out: Write,
{
    loop {
        let entered = read_line(input, output, "Enter the path to the image: ")?;
        if entered.is_empty() {
            writeln!(output, "Please enter a valid image path.")?;
            continue;
        }

        let path = PathBuf::from(&entered);
        if !path.is_file() {
            let message = format!(
                "Error: File '{}' does not exist. Please try again.",
                path.display()
            );
            writeln!(output, "{}", message.red())?;
            continue;
        }

        return Ok(path);
    }
}
