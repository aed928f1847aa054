use ::std::fs;
use ::std::io::{self, Read};
use ::std::path::Path;

use ::log::{debug, warn};

use crate::args::DataType;

/// Reads the whole input, from `input_file` when it exists and from stdin
/// otherwise, and splits it into tokens.
pub fn read_input(
    data_type: DataType,
    input_file: Option<&Path>,
) -> io::Result<Vec<String>> {
    let text = match input_file {
        Some(path) if path.exists() => {
            debug!("Reading input from {}", path.display());
            fs::read_to_string(path)?
        },
        Some(path) => {
            warn!(
                "Input file {} does not exist, reading stdin instead",
                path.display()
            );
            read_stdin()?
        },
        None => read_stdin()?,
    };

    Ok(tokenize(data_type, &text))
}

fn read_stdin() -> io::Result<String> {
    let mut text = String::new();
    io::stdin().lock().read_to_string(&mut text)?;
    Ok(text)
}

pub fn tokenize(data_type: DataType, text: &str) -> Vec<String> {
    match data_type {
        DataType::Line => split_lines(text),
        _ => split_words(text),
    }
}

/// Every line up to the last one holding something other than whitespace.
/// Blank lines in between are kept, trailing ones are not.
fn split_lines(text: &str) -> Vec<String> {
    let lines = break_lines(text);

    match lines.iter().rposition(|line| !is_blank(line)) {
        Some(last) => lines[..=last].iter().map(ToString::to_string).collect(),
        None => Vec::new(),
    }
}

/// Breaks on `\r\n`, a lone `\r` or `\n`, NEL and the Unicode line and
/// paragraph separators.
fn break_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if !matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}') {
            continue;
        }
        lines.push(&text[start..index]);
        start = index + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn split_words(text: &str) -> Vec<String> {
    text.split(is_separator)
        .flat_map(|word| word.split(' '))
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}

fn is_blank(line: &str) -> bool {
    line.chars().all(is_separator)
}

/// Characters that separate words. Non-breaking spaces and NEL are part of a
/// word; the ASCII file, group, record and unit separators are not.
fn is_separator(c: char) -> bool {
    match c {
        '\u{1c}'..='\u{1f}' => true,
        '\u{85}' | '\u{a0}' | '\u{2007}' | '\u{202f}' => false,
        _ => c.is_whitespace(),
    }
}

#[cfg(test)]
mod tests {
    use ::std::io::Write;

    use super::*;

    #[test]
    fn words_split_on_any_whitespace() {
        let tokens = tokenize(DataType::Word, "  a b\tc\n\nd  \r\n e ");
        assert_eq!(tokens, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn long_and_unspecified_tokenize_as_words() {
        let text = "3 1\n-2 x";
        assert_eq!(tokenize(DataType::Long, text), ["3", "1", "-2", "x"]);
        assert_eq!(tokenize(DataType::Unspecified, text), ["3", "1", "-2", "x"]);
    }

    #[test]
    fn lines_keep_inner_blanks_and_drop_trailing_ones() {
        let tokens = tokenize(DataType::Line, "first line\n\n second \n\n  \n");
        assert_eq!(tokens, ["first line", "", " second "]);
    }

    #[test]
    fn lines_handle_crlf() {
        let tokens = tokenize(DataType::Line, "b\r\na\r\n");
        assert_eq!(tokens, ["b", "a"]);
    }

    #[test]
    fn lines_break_on_lone_carriage_returns_and_unicode_separators() {
        let tokens = tokenize(DataType::Line, "b\ra\u{2028}c\u{85}d\r");
        assert_eq!(tokens, ["b", "a", "c", "d"]);
    }

    #[test]
    fn non_breaking_spaces_stay_inside_words() {
        let tokens = tokenize(DataType::Word, "a\u{a0}b c\u{202f}d");
        assert_eq!(tokens, ["a\u{a0}b", "c\u{202f}d"]);
    }

    #[test]
    fn ascii_separators_split_words() {
        let tokens = tokenize(DataType::Word, "a\u{1f}b\u{1c}c");
        assert_eq!(tokens, ["a", "b", "c"]);
    }

    #[test]
    fn line_of_non_breaking_spaces_is_not_blank() {
        let tokens = tokenize(DataType::Line, "x\n\u{a0}\n \n");
        assert_eq!(tokens, ["x", "\u{a0}"]);
    }

    #[test]
    fn blank_input_has_no_tokens() {
        assert!(tokenize(DataType::Line, " \n\n").is_empty());
        assert!(tokenize(DataType::Word, "").is_empty());
    }

    #[test]
    fn reads_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "one two\nthree").unwrap();

        let tokens = read_input(DataType::Word, Some(file.path())).unwrap();
        assert_eq!(tokens, ["one", "two", "three"]);
    }
}
