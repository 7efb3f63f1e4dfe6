use std::io::{self, BufRead, Write};

use crate::get_result;

/// Printed before every line read in interactive mode.
pub const PROMPT: &str = ">>> ";
/// Printed once when the interactive shell starts.
pub const BANNER: &str = "Type your commands";
/// Printed when the command line holds more than one expression.
pub const USAGE: &str = "Usage: exprcalc or exprcalc 'expression'";

/// Returns exactly what the shell prints for one line of input.
///
/// - Syntax errors: one line per error, each prefixed with a tab.
/// - A value: its display form followed by a newline.
/// - No value: `nil`.
///
/// # Example
/// ```
/// use exprcalc::repl::render;
///
/// assert_eq!(render("(1 + 2) * 3"), "9.00\n");
/// assert_eq!(render("sqrt(1, 2)"), "ERROR: sqrt accepts 1 argument. got=2\n");
/// assert_eq!(render(""), "nil\n");
/// assert_eq!(render("(1"), "\texpected next token to be ), got EOF instead\n");
/// ```
#[must_use]
pub fn render(source: &str) -> String {
    match get_result(source) {
        Ok(Some(value)) => format!("{value}\n"),
        Ok(None) => "nil\n".to_string(),
        Err(errors) => errors.iter().map(|e| format!("\t{e}\n")).collect(),
    }
}

/// Runs the read-eval-print loop until the input is exhausted.
///
/// Each iteration writes [`PROMPT`], reads one line and writes its
/// [`render`]ed result. End of input ends the loop silently. Bytes that are
/// not valid UTF-8 are replaced with `U+FFFD`, which the tokenizer reports as
/// an illegal token, so a garbled line does not end the session.
///
/// # Errors
/// Returns any I/O error from reading `input` or writing `output`.
///
/// # Example
/// ```
/// use exprcalc::repl::start;
///
/// let mut output = Vec::new();
/// start("1 + 1\nfoo\n".as_bytes(), &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(),
///            ">>> 2.00\n>>> ERROR: unexpected identifier: foo\n>>> ");
/// ```
pub fn start<R: BufRead, W: Write>(mut input: R, output: &mut W) -> io::Result<()> {
    let mut buffer = Vec::new();

    loop {
        output.write_all(PROMPT.as_bytes())?;
        output.flush()?;

        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buffer);
        output.write_all(render(line.trim_end_matches(['\n', '\r'])).as_bytes())?;
    }
}

/// Evaluates one expression and writes its result.
///
/// # Errors
/// Returns any I/O error from writing `output`.
pub fn run_once<W: Write>(source: &str, output: &mut W) -> io::Result<()> {
    output.write_all(render(source).as_bytes())
}

/// Evaluates every non-blank line of a script as its own expression.
///
/// # Errors
/// Returns any I/O error from writing `output`.
///
/// # Example
/// ```
/// use exprcalc::repl::run_script;
///
/// let mut output = Vec::new();
/// run_script("pow(2, 10)\n\n abs(-5)\n", &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "1024.00\n5.00\n");
/// ```
pub fn run_script<W: Write>(script: &str, output: &mut W) -> io::Result<()> {
    script.lines()
          .filter(|line| !line.trim().is_empty())
          .try_for_each(|line| run_once(line, output))
}
