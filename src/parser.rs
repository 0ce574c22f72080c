//! Existing-comment parser — a line tokenizer plus a sequential reducer.
//!
//! Each line of the raw comment is classified in isolation into a
//! [`LineToken`]; the reducer walks the token stream and applies the
//! continuation rule to collect multi-line tag bodies. Classification is
//! per-line and stateless, so a malformed line contributes nothing instead
//! of aborting the parse.

use crate::config::DoxygenConfig;
use crate::model::{ParamDirection, ParsedComment, ParsedParam, ParsedSection};

// -- Tokenizer ----------------------------------------------------------------

/// Per-line classification of a trimmed comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineToken {
    /// Empty or unrecognizable; contributes nothing.
    Blank,
    /// Block open/close marker or a bare `*`.
    Marker,
    /// `* @param [dir] name text...` — the direction attribute is required
    /// for a param match.
    Param {
        direction: ParamDirection,
        name: String,
        text: String,
    },
    /// `* @tag text...` with a lowercase tag name. A direction-less
    /// `@param` line lands here and round-trips as a plain section.
    Tag { name: String, text: String },
    /// `* text...` — free text under no tag.
    Text(String),
}

/// Classify one pre-trimmed line.
fn classify(line: &str, tag_char: char) -> LineToken {
    if line.is_empty() {
        return LineToken::Blank;
    }
    if line == "*" || line == "/*!" || line == "*/" {
        return LineToken::Marker;
    }

    // Everything else must look like `* <content>` with whitespace after
    // the asterisk.
    let rest = match line.strip_prefix('*') {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest,
        _ => return LineToken::Blank,
    };
    let content = rest.trim_start();

    if let Some(tag_rest) = content.strip_prefix(tag_char) {
        let name: String = tag_rest.chars().take_while(char::is_ascii_lowercase).collect();
        if !name.is_empty() {
            let after_name = &tag_rest[name.len()..];
            if after_name.is_empty() || after_name.starts_with(char::is_whitespace) {
                let text = after_name.trim_start();
                if name == "param" {
                    if let Some(token) = classify_param(text) {
                        return token;
                    }
                }
                return LineToken::Tag {
                    name,
                    text: text.to_string(),
                };
            }
        }
        // `@Param` or `@foo!` — not a tag; falls through as free text.
    }

    LineToken::Text(content.to_string())
}

/// Parse `[dir] name text...` after a `param` tag; `None` when the direction
/// attribute or name is missing, in which case the generic tag rule applies.
fn classify_param(text: &str) -> Option<LineToken> {
    let rest = text.strip_prefix('[')?;
    let close = rest.find(']')?;
    let dir = &rest[..close];
    if dir.is_empty() || !dir.bytes().all(|b| b.is_ascii_lowercase() || b == b',') {
        return None;
    }

    let after_dir = &rest[close + 1..];
    if !after_dir.starts_with(char::is_whitespace) {
        return None;
    }
    let after_dir = after_dir.trim_start();

    let name: String = after_dir
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    if name.is_empty() {
        return None;
    }

    let after_name = &after_dir[name.len()..];
    if !after_name.is_empty() && !after_name.starts_with(char::is_whitespace) {
        return None;
    }

    Some(LineToken::Param {
        direction: ParamDirection::from_attr(&format!("[{}]", dir)),
        name,
        text: after_name.trim_start().to_string(),
    })
}

// -- Reducer ------------------------------------------------------------------

/// Parse raw comment text into its semantic model.
///
/// Empty input yields the empty model; parsing never fails. Unmatched lines
/// simply contribute nothing.
pub fn parse(config: &DoxygenConfig, comment: &str) -> ParsedComment {
    let mut parsed = ParsedComment::default();
    if comment.is_empty() {
        return parsed;
    }

    let tag_char = config.tag_char();
    let tokens: Vec<LineToken> = comment
        .split(&['\r', '\n'][..])
        .filter(|l| !l.is_empty())
        .map(|l| classify(l.trim(), tag_char))
        .collect();

    let mut i = 0;
    while i < tokens.len() {
        match &tokens[i] {
            LineToken::Blank | LineToken::Marker => i += 1,

            LineToken::Param {
                direction,
                name,
                text,
            } => {
                i += 1;
                // First occurrence of a name wins; a duplicate (or a param
                // with no comment text) is not recorded and its would-be
                // continuation lines fall through as free text.
                if text.is_empty() || parsed.params.contains_key(name) {
                    continue;
                }
                let mut param = ParsedParam {
                    name: name.clone(),
                    direction: *direction,
                    comments: vec![text.clone()],
                };
                i = collect_continuation(&tokens, i, &mut param.comments);
                parsed.params.insert(param.name.clone(), param);
            }

            LineToken::Tag { name, text } => {
                i += 1;
                if text.is_empty() {
                    continue;
                }
                let mut section = ParsedSection {
                    tag: name.clone(),
                    comments: vec![text.clone()],
                };
                i = collect_continuation(&tokens, i, &mut section.comments);
                if section.tag == "return" || section.tag == "returns" {
                    // Last one wins; earlier return sections are discarded.
                    parsed.returns = Some(section);
                } else {
                    parsed.sections.push(section);
                }
            }

            LineToken::Text(text) => {
                parsed.brief.push(text.clone());
                i += 1;
            }
        }
    }

    parsed
}

/// Continuation rule: consume consecutive free-text tokens into `comments`.
///
/// Stops (without consuming) at the first blank line, block marker or tag
/// line. Returns the index of the first token not consumed.
fn collect_continuation(tokens: &[LineToken], start: usize, comments: &mut Vec<String>) -> usize {
    let mut i = start;
    while let Some(LineToken::Text(text)) = tokens.get(i) {
        comments.push(text.clone());
        i += 1;
    }
    i
}

// -- Smart indentation --------------------------------------------------------

/// Column where the comment text of a tag line begins, for host-side smart
/// indentation of continuation lines.
///
/// `prev_line` is the raw, untrimmed previous line. Returns the byte column
/// of its first comment word when that column lies to the right of
/// `cur_offset`; `None` otherwise (including for non-tag lines).
pub fn smart_indent_column(
    config: &DoxygenConfig,
    prev_line: &str,
    cur_offset: usize,
) -> Option<usize> {
    let column = tag_comment_column(prev_line, config.tag_char())?;
    if column > cur_offset {
        Some(column)
    } else {
        None
    }
}

/// Byte offset of the comment text on a `* @tag ...` line, if any.
fn tag_comment_column(line: &str, tag_char: char) -> Option<usize> {
    let mut pos = skip_whitespace(line, 0);
    if !line[pos..].starts_with('*') {
        return None;
    }
    pos += 1;

    let after_star = skip_whitespace(line, pos);
    if after_star == pos {
        return None;
    }
    pos = after_star;

    if !line[pos..].starts_with(tag_char) {
        return None;
    }
    pos += tag_char.len_utf8();

    let name_len = line[pos..]
        .chars()
        .take_while(char::is_ascii_lowercase)
        .count();
    if name_len == 0 {
        return None;
    }
    let is_param = &line[pos..pos + name_len] == "param";
    pos += name_len;

    if is_param {
        let text_start = generic_comment_column(line, pos)?;
        // Param-specific shape first ([dir] name comment); when it does not
        // hold, the line still matches the generic tag rule and its text
        // begins right after the tag name.
        return Some(param_comment_column(line, text_start).unwrap_or(text_start));
    }

    generic_comment_column(line, pos)
}

/// Comment column of a well-formed `[dir] name comment` param body starting
/// at `start`.
fn param_comment_column(line: &str, start: usize) -> Option<usize> {
    let rest = &line[start..];
    let close = rest.strip_prefix('[')?.find(']')?;
    let mut pos = start + 1 + close + 1;

    pos = generic_comment_column(line, pos)?;
    let name_len = line[pos..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
        .count();
    if name_len == 0 {
        return None;
    }
    pos += name_len;

    generic_comment_column(line, pos)
}

/// Position of the first non-whitespace character at or after `pos`;
/// `None` when the rest of the line is blank.
fn generic_comment_column(line: &str, pos: usize) -> Option<usize> {
    let start = skip_whitespace(line, pos);
    if start == pos || start >= line.len() {
        return None;
    }
    Some(start)
}

fn skip_whitespace(line: &str, pos: usize) -> usize {
    pos + line[pos..]
        .chars()
        .take_while(|c| c.is_whitespace())
        .map(char::len_utf8)
        .sum::<usize>()
}
