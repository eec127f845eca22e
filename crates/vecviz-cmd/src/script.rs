//! Expression source preprocessing
//!
//! Terminal input and script files are line oriented: `#` starts a comment
//! and a line break ends a statement. The expression language wants `;`
//! between statements, so lines are terminated here before compiling.

/// Strip comments and terminate statements
///
/// A line gets a `;` unless it is blank or already ends with a token that
/// continues or closes a statement (`;`, `{`, `,`, `(`, `[`, or a binary
/// operator). A closing `}` ends a statement only when it closes a `#{`
/// object map; a block's `}` does not. Line numbers are preserved.
pub fn prepare_source(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut braces = Vec::new();
    for line in text.lines() {
        let code = strip_comment(line).trim_end();
        let closed = track_braces(code, &mut braces);
        out.push_str(code);
        if needs_terminator(code, closed) {
            out.push(';');
        }
        out.push('\n');
    }
    out
}

/// What an open `{` started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Brace {
    Block,
    Map,
}

/// Push and pop the braces on one line, outside string literals
///
/// Returns what the last `}` on the line closed.
fn track_braces(code: &str, braces: &mut Vec<Brace>) -> Option<Brace> {
    let bytes = code.as_bytes();
    let mut quote: Option<u8> = None;
    let mut closed = None;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(_) if b == b'\\' => i += 1,
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None => match b {
                b'"' | b'`' | b'\'' => quote = Some(b),
                b'{' if i > 0 && bytes[i - 1] == b'#' => braces.push(Brace::Map),
                b'{' => braces.push(Brace::Block),
                b'}' => closed = braces.pop(),
                _ => {}
            },
        }
        i += 1;
    }
    closed
}

fn needs_terminator(code: &str, closed: Option<Brace>) -> bool {
    match code.chars().last() {
        None => false,
        Some('}') => closed == Some(Brace::Map),
        Some(c) => !matches!(
            c,
            ';' | '{' | ',' | '(' | '[' | '+' | '-' | '*' | '/' | '=' | '&' | '|' | '<' | '>'
        ),
    }
}

/// Drop a trailing `#` or `//` comment, ignoring markers inside strings
///
/// `#{` is an object-map literal, not a comment.
fn strip_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) => {
                if b == b'\\' {
                    i += 1;
                } else if b == q {
                    quote = None;
                }
            }
            None => match b {
                b'"' | b'`' | b'\'' => quote = Some(b),
                b'/' if bytes.get(i + 1) == Some(&b'/') => return &line[..i],
                b'#' if bytes.get(i + 1) != Some(&b'{') => {
                    let at_start = line[..i].trim().is_empty();
                    let after_space = i > 0 && bytes[i - 1].is_ascii_whitespace();
                    if at_start || after_space {
                        return &line[..i];
                    }
                }
                _ => {}
            },
        }
        i += 1;
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statements_terminated() {
        assert_eq!(
            prepare_source("createVector2(\"a\", [1, 0, 0])\nlistVectors()"),
            "createVector2(\"a\", [1, 0, 0]);\nlistVectors();\n"
        );
    }

    #[test]
    fn test_comments_removed() {
        assert_eq!(
            prepare_source("# setup\nlet x = 1 # one\nx // done"),
            "\nlet x = 1;\nx;\n"
        );
    }

    #[test]
    fn test_markers_inside_strings_kept() {
        assert_eq!(
            prepare_source("setVectorDisplayText(\"a\", \"# // #\")"),
            "setVectorDisplayText(\"a\", \"# // #\");\n"
        );
    }

    #[test]
    fn test_continuation_lines() {
        let src = "createMatrix(\"m\", [\n  [1, 0, 0, 0],\n  [0, 1, 0, 0],\n  [0, 0, 1, 0],\n  [0, 0, 0, 1]])";
        let prepared = prepare_source(src);
        assert_eq!(prepared.matches(';').count(), 1);
        assert!(prepared.trim_end().ends_with("]]);"));
    }

    #[test]
    fn test_existing_terminators_and_maps() {
        assert_eq!(prepare_source("let a = 1;"), "let a = 1;\n");
        assert_eq!(prepare_source("let m = #{a: 1}"), "let m = #{a: 1};\n");
        assert_eq!(prepare_source("if a {"), "if a {\n");
    }

    #[test]
    fn test_map_literal_ends_statement() {
        assert_eq!(
            prepare_source("let m = #{a: 1}\nlistVectors()"),
            "let m = #{a: 1};\nlistVectors();\n"
        );
        assert_eq!(
            prepare_source("let m = #{\n  a: #{b: 2},\n}\nm"),
            "let m = #{\n  a: #{b: 2},\n};\nm;\n"
        );
    }

    #[test]
    fn test_block_close_is_not_terminated() {
        assert_eq!(
            prepare_source("if a {\n  b()\n}\nc()"),
            "if a {\n  b();\n}\nc();\n"
        );
        assert_eq!(prepare_source("if a { #{x: 1} }"), "if a { #{x: 1} }\n");
        assert_eq!(
            prepare_source("setVectorDisplayText(\"a\", \"{\")\nlet m = #{a: 1}"),
            "setVectorDisplayText(\"a\", \"{\");\nlet m = #{a: 1};\n"
        );
    }
}
