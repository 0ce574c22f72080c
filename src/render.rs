//! Comment renderer — combines parsed existing content, the function
//! signature and smart descriptions into the final aligned block.
//!
//! Output uses `\r\n` separators, opens with `/*!` and closes with `*/`;
//! every emitted line is prefixed with the caller's indentation.

use crate::config::DoxygenConfig;
use crate::generator;
use crate::model::{FunctionKind, FunctionSignature};
use crate::parser;
use crate::words;

/// Generate the full comment block.
///
/// `indent` is the literal whitespace prefix of the line the block starts
/// on; `signature` is `None` for a plain (file-level) comment. The existing
/// comment text may be empty. Never fails: any input produces a
/// syntactically well-formed block.
pub fn render(
    config: &DoxygenConfig,
    indent: &str,
    signature: Option<&FunctionSignature>,
    existing: &str,
) -> String {
    let parsed = parser::parse(config, existing);
    let tag_indent = config.indent_string();
    let tag_char = config.tag_char();

    let mut out = String::from("/*!");

    // Brief block: existing lines verbatim, otherwise one placeholder line
    // that a smart description may fill.
    if !parsed.brief.is_empty() {
        for line in &parsed.brief {
            push_content_line(&mut out, indent, line);
        }
    } else {
        push_content_line(&mut out, indent, "");
        if config.smart_comments {
            if let Some(sig) = signature {
                out.push_str(&generator::brief_description(config, sig));
            }
        }
    }

    if let Some(sig) = signature {
        // Column widths so that every direction attribute and name align.
        // The resolved direction (including one pinned by the existing
        // comment) feeds the width computation.
        let mut max_dir_len = 0;
        let mut max_name_len = 0;
        for param in &sig.params {
            let dir = generator::resolve_direction(param, parsed.params.get(&param.name));
            max_dir_len = max_dir_len.max(dir.as_str().len());
            max_name_len = max_name_len.max(param.name.len());
        }

        if !sig.params.is_empty() {
            push_separator_line(&mut out, indent);

            for param in &sig.params {
                let parsed_param = parsed.params.get(&param.name);
                let dir = generator::resolve_direction(param, parsed_param).as_str();
                let tag_line = format!(
                    "{}{}param {}{}{}{}",
                    tag_indent,
                    tag_char,
                    dir,
                    " ".repeat(max_dir_len - dir.len() + 1),
                    param.name,
                    " ".repeat(max_name_len - param.name.len() + 2),
                );
                push_content_line(&mut out, indent, &tag_line);

                if let Some(parsed_param) = parsed_param {
                    append_comments(&mut out, &parsed_param.comments, indent, tag_line.len());
                } else if config.smart_comments && sig.params.len() == 1 {
                    out.push_str(&generator::param_description(config, sig, param));
                }
            }
        }

        if let FunctionKind::Regular { return_type } = &sig.kind {
            if return_type != "void" {
                push_separator_line(&mut out, indent);
                let tag_line = format!("{}{}return ", tag_indent, tag_char);
                push_content_line(&mut out, indent, &tag_line);

                if let Some(returns) = &parsed.returns {
                    append_comments(&mut out, &returns.comments, indent, tag_line.len());
                } else if config.smart_comments {
                    out.push_str(&generator::return_description(config, sig));
                }
            }
        }
    }

    // Re-emit every other parsed section verbatim, in source order.
    for section in &parsed.sections {
        let tag_line = format!("{}{}{} ", tag_indent, tag_char, section.tag);
        push_separator_line(&mut out, indent);
        push_content_line(&mut out, indent, &tag_line);
        append_comments(&mut out, &section.comments, indent, tag_line.len());
    }

    out.push_str("\r\n");
    out.push_str(indent);
    out.push_str(" */");
    out
}

/// `\r\n<indent> *  <content>`
fn push_content_line(out: &mut String, indent: &str, content: &str) {
    out.push_str("\r\n");
    out.push_str(indent);
    out.push_str(" *  ");
    out.push_str(content);
}

/// `\r\n<indent> *` — blank separator before a tag block.
fn push_separator_line(out: &mut String, indent: &str) {
    out.push_str("\r\n");
    out.push_str(indent);
    out.push_str(" *");
}

/// Append a tag's comment lines: the first continues the current line,
/// the rest are indented to the column where the first comment word began.
fn append_comments(out: &mut String, comments: &[String], indent: &str, comment_column: usize) {
    if let Some((first, rest)) = comments.split_first() {
        out.push_str(first);
        let continuation_indent = " ".repeat(comment_column);
        for comment in rest {
            push_content_line(out, indent, &continuation_indent);
            out.push_str(comment);
        }
    }
}

// -- File comments ------------------------------------------------------------

/// Inputs for file comment generation, supplied by the host.
#[derive(Debug, Clone)]
pub struct FileCommentContext<'a> {
    /// File name including extension, e.g. `widget.h`.
    pub file_name: &'a str,
    pub author: &'a str,
    pub project: &'a str,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Render the configured file comment template.
///
/// Returns the text and the byte offset where the host should place the
/// caret, when the template contains a `{CURSOR}` placeholder.
pub fn render_file_comment(
    config: &DoxygenConfig,
    ctx: &FileCommentContext,
) -> (String, Option<usize>) {
    let smart = file_summary(config, ctx.file_name);
    let text = config
        .file_comment_template
        .replace("{FILENAME}", ctx.file_name)
        .replace("{AUTHOR}", ctx.author)
        .replace("{YEAR}", &format!("{:04}", ctx.year))
        .replace("{MONTH}", &format!("{:02}", ctx.month))
        .replace("{DAY}", &format!("{:02}", ctx.day))
        .replace("{PROJECTNAME}", ctx.project)
        .replace("{SMARTCOMMENT}", &smart);

    match text.find("{CURSOR}") {
        Some(pos) => (text.replace("{CURSOR}", ""), Some(pos)),
        None => (text, None),
    }
}

/// Summary sentence for a file comment, chosen by extension.
///
/// Empty when smart comments are disabled or the extension is not a C/C++
/// source kind.
fn file_summary(config: &DoxygenConfig, file_name: &str) -> String {
    if !config.smart_comments {
        return String::new();
    }

    let (stem, extension) = match file_name.rsplit_once('.') {
        Some((stem, extension)) => (stem, extension),
        None => (file_name, ""),
    };
    let template = match extension {
        "h" | "hpp" | "hh" | "hxx" => &config.file_summary_header,
        "c" | "cc" | "cpp" | "cxx" => &config.file_summary_source,
        "inl" => &config.file_summary_inline,
        _ => return String::new(),
    };

    crate::config::apply_template(template, &[&words::humanize(stem)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TagStyle;
    use crate::model::FunctionSignature;

    fn config() -> DoxygenConfig {
        DoxygenConfig::default()
    }

    fn lines(block: &str) -> Vec<&str> {
        block.split("\r\n").collect()
    }

    #[test]
    fn empty_model_void_function() {
        let sig = FunctionSignature::function("run", "void");
        let block = render(&config(), "", Some(&sig), "");
        // Only the brief placeholder line between the block markers.
        assert_eq!(lines(&block), ["/*!", " *  ", " */"]);
    }

    #[test]
    fn smart_setter_block() {
        let sig = FunctionSignature::function("setEnabled", "void").with_param("enabled", "bool");
        let block = render(&config(), "", Some(&sig), "");
        assert_eq!(
            lines(&block),
            [
                "/*!",
                " *  Sets the enabled.",
                " *",
                " *      @param [in] enabled  If true, enabled. Otherwise not enabled.",
                " */",
            ]
        );
    }

    #[test]
    fn smart_getter_block_with_return() {
        let sig = FunctionSignature::function("getUserName", "std::string");
        let block = render(&config(), "", Some(&sig), "");
        assert_eq!(
            lines(&block),
            [
                "/*!",
                " *  Returns the user name.",
                " *",
                " *      @return The user name.",
                " */",
            ]
        );
    }

    #[test]
    fn bool_getter_return_uses_boolean_template() {
        let sig = FunctionSignature::function("isValid", "bool");
        let block = render(&config(), "", Some(&sig), "");
        assert!(block.contains("@return True if valid. False if not."));
    }

    #[test]
    fn abbreviation_expansion_in_generated_brief() {
        let mut config = config();
        config.abbreviations.insert("id", "identifier");
        let sig = FunctionSignature::function("getId", "int");
        let block = render(&config, "", Some(&sig), "");
        assert!(block.contains("Returns the identifier."));
        assert!(!block.contains("Returns the id."));
    }

    #[test]
    fn param_name_columns_align() {
        let sig = FunctionSignature::function("compute", "void")
            .with_param("a", "int")
            .with_param("description", "const std::string&");
        let block = render(&config(), "", Some(&sig), "");
        let param_lines: Vec<&str> = lines(&block)
            .into_iter()
            .filter(|l| l.contains("@param"))
            .collect();
        assert_eq!(param_lines.len(), 2);
        // Both names start right after the direction attribute at the same
        // column.
        assert_eq!(
            param_lines[0].find("] ").unwrap(),
            param_lines[1].find("] ").unwrap()
        );
        assert!(param_lines[0].contains("[in] a  "));
        assert!(param_lines[1].contains("[in] description  "));
    }

    #[test]
    fn mixed_direction_columns_align() {
        let sig = FunctionSignature::function("fill", "void")
            .with_param("count", "int")
            .with_param("target", "std::string&");
        let block = render(&config(), "", Some(&sig), "");
        let param_lines: Vec<&str> = lines(&block)
            .into_iter()
            .filter(|l| l.contains("@param"))
            .collect();
        assert!(param_lines[0].contains("[in]"));
        assert!(param_lines[1].contains("[in,out]"));
        assert_eq!(
            param_lines[0].find("count").unwrap(),
            param_lines[1].find("target").unwrap()
        );
    }

    #[test]
    fn existing_out_direction_preserved() {
        let existing = concat!(
            "/*!\r\n",
            " *  Fills the buffer.\r\n",
            " *\r\n",
            " *      @param [out] target  Receives the data\r\n",
            " */"
        );
        let sig =
            FunctionSignature::function("fill", "void").with_param("target", "std::string&");
        let block = render(&config(), "", Some(&sig), existing);
        assert!(block.contains("@param [out] target  Receives the data"));
    }

    #[test]
    fn in_on_value_param_stays_in() {
        // A stray [out] on a by-value parameter is overridden: value types
        // are always inputs.
        let existing = "/*!\r\n *  @param [out] count  The count\r\n */";
        let sig = FunctionSignature::function("fill", "void").with_param("count", "int");
        let block = render(&config(), "", Some(&sig), existing);
        assert!(block.contains("@param [in] count  The count"));
    }

    #[test]
    fn continuation_lines_align_under_first_word() {
        let existing = concat!(
            "/*!\r\n",
            " *  Does things.\r\n",
            " *\r\n",
            " *      @param [in] value  The value\r\n",
            " *                         over two lines\r\n",
            " */"
        );
        let sig = FunctionSignature::function("apply", "void").with_param("value", "int");
        let block = render(&config(), "", Some(&sig), existing);
        let all_lines = lines(&block);
        let first = all_lines.iter().find(|l| l.contains("The value")).unwrap();
        let second = all_lines.iter().find(|l| l.contains("over two lines")).unwrap();
        assert_eq!(
            first.find("The value").unwrap(),
            second.find("over two lines").unwrap()
        );
    }

    #[test]
    fn sections_reemitted_in_order() {
        let existing = concat!(
            "/*!\r\n",
            " *  Brief.\r\n",
            " *\r\n",
            " *      @throw std::runtime_error on failure\r\n",
            " *      @sa close\r\n",
            " */"
        );
        let sig = FunctionSignature::function("open", "void");
        let block = render(&config(), "", Some(&sig), existing);
        let throw_pos = block.find("@throw").unwrap();
        let sa_pos = block.find("@sa").unwrap();
        assert!(throw_pos < sa_pos);
        assert!(block.contains("@throw std::runtime_error on failure"));
        assert!(block.contains("@sa close"));
    }

    #[test]
    fn indent_prefixes_every_line() {
        let sig = FunctionSignature::function("getCount", "int");
        let block = render(&config(), "        ", Some(&sig), "");
        for line in lines(&block).iter().skip(1) {
            assert!(line.starts_with("        "), "line not indented: {:?}", line);
        }
    }

    #[test]
    fn no_signature_renders_brief_and_sections_only() {
        let existing = "/*!\r\n *  A file-level note.\r\n *\r\n *      @sa docs/README\r\n */";
        let block = render(&config(), "", None, existing);
        assert!(block.contains("A file-level note."));
        assert!(block.contains("@sa docs/README"));
        assert!(!block.contains("@param"));
        assert!(!block.contains("@return"));
    }

    #[test]
    fn smart_comments_disabled_leaves_placeholder_blank() {
        let config = DoxygenConfig {
            smart_comments: false,
            ..DoxygenConfig::default()
        };
        let sig = FunctionSignature::function("getUserName", "std::string");
        let block = render(&config, "", Some(&sig), "");
        assert_eq!(
            lines(&block),
            ["/*!", " *  ", " *", " *      @return ", " */"]
        );
    }

    #[test]
    fn constructor_has_no_return_tag() {
        let sig = FunctionSignature {
            name: "Widget".to_string(),
            parent: Some("Widget".to_string()),
            kind: FunctionKind::Constructor,
            params: Vec::new(),
        };
        let block = render(&config(), "", Some(&sig), "");
        assert!(block.contains("Constructor."));
        assert!(!block.contains("@return"));
    }

    #[test]
    fn qt_style_rendering() {
        let config = DoxygenConfig {
            tag_style: TagStyle::Qt,
            ..DoxygenConfig::default()
        };
        let sig = FunctionSignature::function("setEnabled", "void").with_param("enabled", "bool");
        let block = render(&config, "", Some(&sig), "");
        assert!(block.contains("\\param [in] enabled"));
    }

    #[test]
    fn render_is_idempotent() {
        let config = config();
        let sig = FunctionSignature::function("setUserName", "void")
            .with_param("userName", "const std::string&");
        let first = render(&config, "    ", Some(&sig), "");
        let second = render(&config, "    ", Some(&sig), &first);
        assert_eq!(first, second);
    }

    #[test]
    fn round_trip_preserves_user_text() {
        let existing = concat!(
            "/*!\r\n",
            " *  Carefully tuned brief.\r\n",
            " *\r\n",
            " *      @param [out] result   Receives the outcome\r\n",
            " *                            and more detail\r\n",
            " *\r\n",
            " *      @return Zero on success\r\n",
            " *\r\n",
            " *      @remarks Not thread safe\r\n",
            " */"
        );
        let sig = FunctionSignature::function("run", "int").with_param("result", "std::string&");
        let block = render(&config(), "", Some(&sig), existing);
        assert!(block.contains("Carefully tuned brief."));
        assert!(block.contains("@param [out] result  Receives the outcome"));
        assert!(block.contains("and more detail"));
        assert!(block.contains("@return Zero on success"));
        assert!(block.contains("@remarks Not thread safe"));

        // And a second pass over the generated block changes nothing.
        let again = render(&config(), "", Some(&sig), &block);
        assert_eq!(block, again);
    }

    #[test]
    fn file_comment_placeholders() {
        let ctx = FileCommentContext {
            file_name: "tree_view.h",
            author: "jdoe",
            project: "Widgets",
            year: 2024,
            month: 3,
            day: 7,
        };
        let (text, cursor) = render_file_comment(&config(), &ctx);
        assert!(text.contains("@file tree_view.h"));
        assert!(text.contains("@author jdoe"));
        assert!(text.contains("@date 2024-03-07"));
        assert!(text.contains("@project Widgets"));
        assert!(text.contains("Declares the tree view."));
        assert!(!text.contains("{CURSOR}"));
        // Cursor lands right after the smart summary.
        let pos = cursor.unwrap();
        assert_eq!(&text[pos - 1..pos], ".");
    }

    #[test]
    fn file_comment_source_extension() {
        let ctx = FileCommentContext {
            file_name: "tree_view.cpp",
            author: "",
            project: "",
            year: 2024,
            month: 1,
            day: 1,
        };
        let (text, _) = render_file_comment(&config(), &ctx);
        assert!(text.contains("Implements the tree view."));
    }

    #[test]
    fn file_comment_unknown_extension_has_no_summary() {
        let ctx = FileCommentContext {
            file_name: "notes.txt",
            author: "",
            project: "",
            year: 2024,
            month: 1,
            day: 1,
        };
        let (text, _) = render_file_comment(&config(), &ctx);
        assert!(!text.contains("Declares"));
        assert!(!text.contains("Implements"));
    }
}
