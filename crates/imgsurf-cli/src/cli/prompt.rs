//! Interactive input for values not given on the command line.

use anyhow::{bail, Context, Result};
use std::io::{self, BufRead, Write};
use url::Url;

/// Writes `prompt`, reads one line, and returns it trimmed.
pub fn read_answer<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}

/// Prompts on stdout and reads the answer from stdin.
pub fn ask(prompt: &str) -> Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    read_answer(&mut stdin.lock(), &mut stdout.lock(), prompt)
}

/// Turns user input into the page URL, adding `https://` when no scheme is given.
pub fn normalize_page_url(input: &str) -> Result<Url> {
    let input = input.trim();
    if input.is_empty() {
        bail!("no website URL given");
    }
    let with_scheme = if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    };
    Url::parse(&with_scheme).with_context(|| format!("invalid website URL: {}", with_scheme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn adds_https_when_scheme_missing() {
        assert_eq!(
            normalize_page_url("example.com/gallery").unwrap().as_str(),
            "https://example.com/gallery"
        );
    }

    #[test]
    fn keeps_http_and_https() {
        assert_eq!(
            normalize_page_url("http://example.com/").unwrap().as_str(),
            "http://example.com/"
        );
        assert_eq!(
            normalize_page_url("  https://example.com/a  ").unwrap().as_str(),
            "https://example.com/a"
        );
    }

    #[test]
    fn empty_input_is_error() {
        assert!(normalize_page_url("   ").is_err());
    }

    #[test]
    fn unparseable_input_is_error() {
        assert!(normalize_page_url("http://[::1").is_err());
    }

    #[test]
    fn read_answer_trims_and_echoes_prompt() {
        let mut input = Cursor::new(b"  pics  \n".to_vec());
        let mut output = Vec::new();
        let answer = read_answer(&mut input, &mut output, "Folder: ").unwrap();
        assert_eq!(answer, "pics");
        assert_eq!(output, b"Folder: ");
    }

    #[test]
    fn read_answer_at_eof_is_empty() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        assert_eq!(read_answer(&mut input, &mut output, "> ").unwrap(), "");
    }
}
