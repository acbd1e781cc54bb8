use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LiteralError {
    #[error("literal must be wrapped in [ ]")]
    Brackets,
    #[error("entry {0}: expected an opening quote")]
    ExpectedQuote(usize),
    #[error("entry {0}: missing closing quote")]
    Unterminated(usize),
    #[error("entry {0}: expected \", \" or \"]\" after the closing quote")]
    ExpectedSeparator(usize),
}

/// `['first', 'it\'s second']`: single-quoted entries, `'` escaped with a
/// backslash, joined by `, `.
pub fn format_literal(sentences: &[String]) -> String {
    let entries: Vec<String> = sentences
        .iter()
        .map(|s| format!("'{}'", s.replace('\'', "\\'")))
        .collect();
    format!("[{}]", entries.join(", "))
}

/// Inverse of [`format_literal`].
pub fn parse_literal(literal: &str) -> Result<Vec<String>, LiteralError> {
    let inner = literal
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or(LiteralError::Brackets)?;

    let mut sentences = Vec::new();
    if inner.is_empty() {
        return Ok(sentences);
    }

    let mut rest = inner;
    loop {
        let entry = sentences.len();
        let body = rest
            .strip_prefix('\'')
            .ok_or(LiteralError::ExpectedQuote(entry))?;
        let (sentence, consumed) = read_quoted(body).ok_or(LiteralError::Unterminated(entry))?;
        sentences.push(sentence);

        rest = &body[consumed..];
        if rest.is_empty() {
            return Ok(sentences);
        }
        rest = rest
            .strip_prefix(", ")
            .ok_or(LiteralError::ExpectedSeparator(entry))?;
    }
}

/// Reads up to the first unescaped `'`; returns the unescaped text and the
/// number of bytes consumed including the closing quote.
fn read_quoted(body: &str) -> Option<(String, usize)> {
    let mut out = String::new();
    let mut chars = body.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' if matches!(chars.peek(), Some((_, '\''))) => {
                out.push('\'');
                chars.next();
            }
            '\'' => return Some((out, i + 1)),
            _ => out.push(c),
        }
    }
    None
}
