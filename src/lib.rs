#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod listing;
pub mod macros;

pub extern crate regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn offset(&self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.offset() - self.start.offset()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Finds the line holding byte `position` of `source`.
///
/// Returns the 1-based line number, the full text of that line (newline
/// included) and the byte column of `position` within it, or `None` when
/// `position` lies past the end of the source.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::errors::errors::{Error, ErrorImpl};
    use crate::Position;

    const SOURCE: &str = "Hello, world!\nclass A {\n\n    x <- #;\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 16).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "class A {\n");
        assert_eq!(line_pos, 2);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 34).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "    x <- #;\n");
        assert_eq!(line_pos, 9);
    }

    #[test]
    fn test_get_line_past_end() {
        assert!(super::get_line_at_position(SOURCE, SOURCE.len() as u32).is_none());
        assert!(super::get_line_at_position("", 0).is_none());
    }

    #[test]
    fn test_render_error() {
        let error = Error::new(
            ErrorImpl::UnrecognisedCharacter { character: '#' },
            Position(34, Rc::new(String::from("test.cl"))),
        );

        let rendered = super::render_error(&error, SOURCE, "test.cl");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnrecognisedCharacter (Remove `#` or replace it with a recognised character)");
        assert_eq!(lines[1], "-> test.cl");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "4 | x <- #;");
        assert_eq!(lines[4], "  | -----^");
    }
}

/// Renders `error` as a caret diagnostic pointing into `source`.
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: UnrecognisedCharacter (...)
        -> test.cl
          |
        4 | x <- #;
          | -----^
    */

    let position = error.get_position();

    let mut out = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}\n", error.get_error_name())
    } else {
        format!("Error: {} ({})\n", error.get_error_name(), error.get_tip())
    };
    out.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        out.push_str(&format!("   {}\n", error));
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
