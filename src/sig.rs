//! Host-side signature extraction — a heuristic reading of C++-like
//! declarations, not a C++ grammar.
//!
//! Good enough for the declaration shapes an editor hands over:
//! `void setEnabled(bool enabled)`, `std::string Widget::getUserName() const`,
//! `Widget::~Widget()`. Anything unrecognizable degrades to a bare function
//! with no parameters rather than an error.

use crate::model::{FunctionKind, FunctionSignature, Parameter};
use regex::Regex;
use std::sync::LazyLock;

// Trailing qualifiers and the start of a body, stripped before parsing.
static RE_TRAILERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\s*(const|noexcept|override|final))*\s*[;{]?\s*$").unwrap()
});

// Qualified function name directly before the parameter list.
static RE_QUALIFIED_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([~A-Za-z0-9_:]+)\s*$").unwrap());

// Parameter name at the end of a declarator.
static RE_PARAM_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z_][A-Za-z0-9_]*)\s*$").unwrap());

/// Extract a [`FunctionSignature`] from a declaration string.
pub fn parse(declaration: &str) -> FunctionSignature {
    let decl = declaration.trim();
    let decl = match decl.find('{') {
        Some(pos) => decl[..pos].trim_end(),
        None => decl,
    };
    let decl = RE_TRAILERS.replace(decl, "").into_owned();

    let (head, params_text) = match split_param_list(&decl) {
        Some(parts) => parts,
        None => {
            // No parameter list at all: take the last token as the name.
            log::warn!("no parameter list in declaration: {:?}", declaration);
            let name = decl.rsplit(char::is_whitespace).next().unwrap_or("");
            return FunctionSignature::function(name, "void");
        }
    };

    let (return_type, qualified) = match RE_QUALIFIED_NAME.captures(head).and_then(|c| c.get(1)) {
        Some(m) => (head[..m.start()].trim(), m.as_str()),
        None => ("", head.trim()),
    };

    let (parent, name) = match qualified.rsplit_once("::") {
        Some((scope, name)) => {
            let parent = scope.rsplit("::").next().unwrap_or(scope);
            (Some(parent.to_string()), name)
        }
        None => (None, qualified),
    };

    let kind = if let Some(dtor_name) = name.strip_prefix('~') {
        return FunctionSignature {
            name: dtor_name.to_string(),
            parent: parent.or(Some(dtor_name.to_string())),
            kind: FunctionKind::Destructor,
            params: parse_params(params_text),
        };
    } else if parent.as_deref() == Some(name) {
        FunctionKind::Constructor
    } else {
        FunctionKind::Regular {
            return_type: if return_type.is_empty() {
                "void".to_string()
            } else {
                return_type.to_string()
            },
        }
    };

    FunctionSignature {
        name: name.to_string(),
        parent,
        kind,
        params: parse_params(params_text),
    }
}

/// Split `head(params)` on the outermost parameter list; `None` when there
/// is no balanced trailing list.
fn split_param_list(decl: &str) -> Option<(&str, &str)> {
    let close = decl.rfind(')')?;
    let mut depth = 0usize;
    for (i, c) in decl[..=close].char_indices().rev() {
        match c {
            ')' => depth += 1,
            '(' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&decl[..i], &decl[i + 1..close]));
                }
            }
            _ => {}
        }
    }
    None
}

/// Split the parameter list on top-level commas and separate each
/// declarator into type and name.
fn parse_params(params_text: &str) -> Vec<Parameter> {
    split_top_level(params_text)
        .into_iter()
        .filter_map(parse_param)
        .collect()
}

fn parse_param(piece: &str) -> Option<Parameter> {
    // Drop default arguments.
    let piece = match top_level_find(piece, '=') {
        Some(pos) => &piece[..pos],
        None => piece,
    };
    let piece = piece.trim();
    if piece.is_empty() || piece == "void" {
        return None;
    }

    // Array suffix belongs to the type, not the name.
    let (piece, array_suffix) = match piece.find('[') {
        Some(pos) => (piece[..pos].trim_end(), &piece[pos..]),
        None => (piece, ""),
    };

    match RE_PARAM_NAME.captures(piece).and_then(|c| c.get(1)) {
        Some(m) if m.start() > 0 => {
            let type_name = format!("{}{}", piece[..m.start()].trim(), array_suffix);
            Some(Parameter::new(m.as_str(), &type_name))
        }
        // Unnamed parameter: keep the type spelling as the name.
        _ => Some(Parameter::new(
            piece,
            &format!("{}{}", piece, array_suffix),
        )),
    }
}

/// Split on commas outside any angle, round, square or brace brackets.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        match c {
            '<' | '(' | '[' | '{' => depth += 1,
            '>' | ')' | ']' | '}' => depth -= 1,
            ',' if depth == 0 => {
                pieces.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    pieces.push(&text[start..]);
    pieces.retain(|p| !p.trim().is_empty());
    pieces
}

fn top_level_find(text: &str, needle: char) -> Option<usize> {
    let mut depth = 0i32;
    for (i, c) in text.char_indices() {
        match c {
            '<' | '(' | '[' | '{' => depth += 1,
            '>' | ')' | ']' | '}' => depth -= 1,
            c if c == needle && depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}
