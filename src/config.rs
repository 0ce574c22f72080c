//! Doxygen style configuration — an immutable snapshot consumed by the
//! parser, generator and renderer.
//!
//! The host owns the single writable configuration (e.g. loaded from a JSON
//! settings document) and passes a reference into each generation call; the
//! core never mutates it, so a settings change is a wholesale replacement
//! between calls.

use crate::abbrev::AbbreviationMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tag introducer style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagStyle {
    /// `@param` tags.
    #[default]
    JavaDoc,
    /// `\param` tags.
    Qt,
}

impl TagStyle {
    /// The tag introducer character.
    pub fn tag_char(self) -> char {
        match self {
            TagStyle::JavaDoc => '@',
            TagStyle::Qt => '\\',
        }
    }
}

/// Configuration errors surfaced when a snapshot is loaded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A phrase template references a placeholder beyond what its call site
    /// supplies, which would render a malformed sentence.
    #[error("template `{name}` uses placeholder {{{index}}} but only {supplied} argument(s) are supplied")]
    PlaceholderOutOfRange {
        name: &'static str,
        index: usize,
        supplied: usize,
    },
}

/// Doxygen comment generation settings.
///
/// Field defaults match the original tool's options page; phrase templates
/// use positional `{0}`-style placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoxygenConfig {
    /// Extra indentation spaces for tag lines inside the block.
    pub tag_indentation: usize,
    pub tag_style: TagStyle,
    /// Generate smart descriptions for setters, getters, parameters and
    /// return values when the existing comment has none.
    pub smart_comments: bool,
    /// Extend smart briefs to all functions, not only setters and getters.
    pub smart_comments_for_all: bool,
    pub abbreviations: AbbreviationMap,

    /// File comment template with `{FILENAME}`, `{AUTHOR}`, `{YEAR}`,
    /// `{MONTH}`, `{DAY}`, `{PROJECTNAME}`, `{SMARTCOMMENT}` and `{CURSOR}`
    /// placeholders.
    pub file_comment_template: String,

    // Phrase templates. Arguments, in order:
    //   brief setter/getter: {0} subject, {1} owner possessive
    //   brief boolean getter: {0} subject, {1} owner, {2} verb word
    //   param/return templates: {0} subject
    pub brief_setter_format: String,
    pub brief_getter_format: String,
    pub brief_bool_getter_format: String,
    pub param_setter_format: String,
    pub param_boolean_format: String,
    pub return_format: String,
    pub return_boolean_format: String,
    pub file_summary_header: String,
    pub file_summary_source: String,
    pub file_summary_inline: String,
}

impl Default for DoxygenConfig {
    fn default() -> Self {
        DoxygenConfig {
            tag_indentation: 4,
            tag_style: TagStyle::JavaDoc,
            smart_comments: true,
            smart_comments_for_all: true,
            abbreviations: AbbreviationMap::new(),
            file_comment_template: "/*!\r\n *  @file {FILENAME}\r\n *  @author {AUTHOR}\r\n *  @date {YEAR}-{MONTH}-{DAY}\r\n *  @project {PROJECTNAME}\r\n *\r\n *  {SMARTCOMMENT}{CURSOR}\r\n */"
                .to_string(),
            brief_setter_format: "Sets the {1}{0}.".to_string(),
            brief_getter_format: "Returns the {1}{0}.".to_string(),
            brief_bool_getter_format: "Returns true if the {1}{2} {0}.".to_string(),
            param_setter_format: "{0} to set.".to_string(),
            param_boolean_format: "If true, {0}. Otherwise not {0}.".to_string(),
            return_format: "The {0}.".to_string(),
            return_boolean_format: "True if {0}. False if not.".to_string(),
            file_summary_header: "Declares the {0}.".to_string(),
            file_summary_source: "Implements the {0}.".to_string(),
            file_summary_inline: "Implements the {0}.".to_string(),
        }
    }
}

impl DoxygenConfig {
    /// The configured tag introducer character.
    pub fn tag_char(&self) -> char {
        self.tag_style.tag_char()
    }

    /// Indentation string placed before each tag inside the block.
    pub fn indent_string(&self) -> String {
        " ".repeat(self.tag_indentation)
    }

    /// Validate placeholder indices in every positional template against the
    /// argument count its call site supplies.
    ///
    /// Load-time validation turns a malformed template into a configuration
    /// error instead of malformed generated prose.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_template("brief_setter_format", &self.brief_setter_format, 2)?;
        check_template("brief_getter_format", &self.brief_getter_format, 2)?;
        check_template("brief_bool_getter_format", &self.brief_bool_getter_format, 3)?;
        check_template("param_setter_format", &self.param_setter_format, 1)?;
        check_template("param_boolean_format", &self.param_boolean_format, 1)?;
        check_template("return_format", &self.return_format, 1)?;
        check_template("return_boolean_format", &self.return_boolean_format, 1)?;
        check_template("file_summary_header", &self.file_summary_header, 1)?;
        check_template("file_summary_source", &self.file_summary_source, 1)?;
        check_template("file_summary_inline", &self.file_summary_inline, 1)?;
        Ok(())
    }
}

fn check_template(
    name: &'static str,
    template: &str,
    supplied: usize,
) -> Result<(), ConfigError> {
    if let Some(index) = max_placeholder_index(template) {
        if index >= supplied {
            return Err(ConfigError::PlaceholderOutOfRange {
                name,
                index,
                supplied,
            });
        }
    }
    Ok(())
}

/// Highest positional placeholder index used by a template, if any.
fn max_placeholder_index(template: &str) -> Option<usize> {
    let mut max: Option<usize> = None;
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let tail = &rest[open + 1..];
        match placeholder_at(tail) {
            Some((index, after)) => {
                max = Some(max.map_or(index, |m| m.max(index)));
                rest = &tail[after..];
            }
            None => rest = tail,
        }
    }

    max
}

/// Apply a positional template: `{0}`, `{1}`, ... replaced by `args`.
///
/// Placeholders beyond the supplied arguments are left verbatim; `validate`
/// rejects such templates up front.
pub(crate) fn apply_template(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        match placeholder_at(tail) {
            Some((index, after)) if index < args.len() => {
                out.push_str(args[index]);
                rest = &tail[after..];
            }
            Some((_, after)) => {
                out.push('{');
                out.push_str(&tail[..after]);
                rest = &tail[after..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Parse `NNN}` at the start of `tail`; returns the index and the offset one
/// past the closing brace.
fn placeholder_at(tail: &str) -> Option<(usize, usize)> {
    let close = tail.find('}')?;
    let digits = &tail[..close];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index = digits.parse().ok()?;
    Some((index, close + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(DoxygenConfig::default().validate().is_ok());
    }

    #[test]
    fn tag_chars() {
        assert_eq!(TagStyle::JavaDoc.tag_char(), '@');
        assert_eq!(TagStyle::Qt.tag_char(), '\\');
    }

    #[test]
    fn apply_positional_template() {
        assert_eq!(apply_template("Sets the {1}{0}.", &["value", ""]), "Sets the value.");
        assert_eq!(
            apply_template("Sets the {1}{0}.", &["value", "widget's "]),
            "Sets the widget's value."
        );
        assert_eq!(
            apply_template("If true, {0}. Otherwise not {0}.", &["enabled"]),
            "If true, enabled. Otherwise not enabled."
        );
    }

    #[test]
    fn apply_ignores_non_positional_braces() {
        assert_eq!(apply_template("keep {braces} and {0}", &["x"]), "keep {braces} and x");
        assert_eq!(apply_template("trailing {", &[]), "trailing {");
    }

    #[test]
    fn validate_rejects_out_of_range_placeholder() {
        let config = DoxygenConfig {
            return_format: "The {1}.".to_string(),
            ..DoxygenConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PlaceholderOutOfRange {
                name: "return_format",
                index: 1,
                supplied: 1,
            })
        );
    }

    #[test]
    fn config_from_json() {
        let json = r#"{
            "tag_style": "qt",
            "tag_indentation": 2,
            "abbreviations": "id,identifier;num,number"
        }"#;
        let config: DoxygenConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.tag_char(), '\\');
        assert_eq!(config.tag_indentation, 2);
        assert_eq!(config.abbreviations.expand("id"), "identifier");
        // Unspecified fields keep their defaults.
        assert!(config.smart_comments);
        assert_eq!(config.return_format, "The {0}.");
    }
}
