//! Whitespace-token input and one-line-per-case output shared by the solver binaries.

use std::fmt::Display;
use std::io::{BufWriter, Read, Write};
use std::str::{FromStr, SplitAsciiWhitespace};

use anyhow::{Context, Result, anyhow};

/// Reader over whitespace separated tokens. Line breaks carry no meaning.
pub struct Tokens<'a> {
    iter: SplitAsciiWhitespace<'a>,
    consumed: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            iter: input.split_ascii_whitespace(),
            consumed: 0,
        }
    }

    /// Number of tokens handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn next_token(&mut self, what: &str) -> Result<&'a str> {
        let token = self
            .iter
            .next()
            .ok_or_else(|| anyhow!("unexpected end of input, expected {what}"))?;
        self.consumed += 1;
        Ok(token)
    }

    pub fn next<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let token = self.next_token(what)?;
        token
            .parse()
            .with_context(|| format!("invalid {what}: {token:?}"))
    }

    pub fn next_vec<T>(&mut self, len: usize, what: &str) -> Result<Vec<T>>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let mut values = Vec::with_capacity(len);
        for i in 0..len {
            let value = self
                .next(what)
                .with_context(|| format!("{what} #{} of {len}", i + 1))?;
            values.push(value);
        }
        Ok(values)
    }
}

/// Reads the test count, then calls `solve_case` once per case and joins the
/// returned lines. Every line, including the last, ends with `\n`; zero cases
/// still produce one empty line.
pub fn run_cases<'a, F, D>(input: &'a str, mut solve_case: F) -> Result<String>
where
    F: FnMut(&mut Tokens<'a>) -> Result<D>,
    D: Display,
{
    use std::fmt::Write as _;

    let mut tokens = Tokens::new(input);
    let cases: usize = tokens.next("test count")?;
    log::debug!("solving {cases} test cases");

    let mut output = String::new();
    for case in 1..=cases {
        let answer = solve_case(&mut tokens).with_context(|| format!("test case {case}"))?;
        writeln!(output, "{answer}")?;
    }
    if output.is_empty() {
        output.push('\n');
    }

    log::debug!("consumed {} tokens", tokens.consumed());
    Ok(output)
}

pub fn read_stdin() -> Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    Ok(input)
}

pub fn write_stdout(output: &str) -> Result<()> {
    let mut out = BufWriter::new(std::io::stdout().lock());
    out.write_all(output.as_bytes())
        .and_then(|()| out.flush())
        .context("failed to write stdout")
}

/// Entry point for a solver binary: stdin through `solve` to stdout.
pub fn run(solve: fn(&str) -> Result<String>) -> Result<()> {
    let input = read_stdin()?;
    let output = solve(&input)?;
    write_stdout(&output)
}
