use docqa_pipeline::Answerer;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "\nEnter your question: ";

/// How an interactive session terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `exit` in any letter case.
    Exit,
    /// Input closed before an exit command.
    EndOfInput,
}

/// Read questions line by line and print an answer for each.
pub fn run_session<A, R, W>(answerer: &A, mut input: R, out: &mut W) -> io::Result<SessionEnd>
where
    A: Answerer + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(SessionEnd::EndOfInput);
        }
        let question = line.trim_end_matches(['\n', '\r']);

        if question.to_lowercase() == "exit" {
            writeln!(out, "Goodbye!")?;
            return Ok(SessionEnd::Exit);
        }

        let answer = answerer.answer(question);
        writeln!(out, "Answer: {}", answer)?;
    }
}
