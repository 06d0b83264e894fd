use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// Ask a question and read one line of input, without the trailing newline.
pub fn prompt_line<R, W>(reader: &mut R, writer: &mut W, question: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "{question}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        anyhow::bail!("Unexpected end of input while waiting for: {}", question.trim_end_matches([' ', ':']));
    }

    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);

    Ok(line)
}

/// Ask for an integer score. An empty answer keeps `current`.
pub fn prompt_score<R, W>(reader: &mut R, writer: &mut W, question: &str, current: i32) -> Result<i32>
where
    R: BufRead,
    W: Write,
{
    let answer = prompt_line(reader, writer, question)?;
    let answer = answer.trim();

    if answer.is_empty() {
        return Ok(current);
    }

    answer.parse::<i32>()
        .with_context(|| format!("Invalid integer {answer:?}"))
}
