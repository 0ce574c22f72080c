//! doxydoc — synthesize Doxygen comment blocks for C++ declarations.
//!
//! Reads the existing comment block (possibly empty) from stdin and writes
//! the regenerated block to stdout:
//!
//! - **comment mode** (default): `doxydoc 'void setEnabled(bool enabled)' < existing.txt`
//! - **file mode**: `doxydoc --file-comment src/widget.h --author jdoe --project Widgets`
//! - **tag listing**: `doxydoc --list-tags` (for editor completion adapters)

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::Parser;
use doxydoc::config::{DoxygenConfig, TagStyle};
use doxydoc::model::{COMPLETION_TAGS, DIRECTION_ATTRS};
use doxydoc::{render, sig};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "doxydoc",
    about = "Generate Doxygen comment blocks from C++ declarations"
)]
struct Cli {
    /// Function declaration, e.g. "std::string Widget::getUserName() const".
    /// If omitted, a plain comment block is generated from stdin content only.
    signature: Option<String>,

    /// Number of indentation spaces for the whole block
    #[arg(short, long, default_value_t = 0)]
    indent: usize,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tag style: javadoc (@param) or qt (\param)
    #[arg(short, long)]
    style: Option<String>,

    /// Disable smart description generation
    #[arg(long)]
    no_smart: bool,

    /// Generate a file comment for the given file instead of a function comment
    #[arg(long, value_name = "PATH")]
    file_comment: Option<String>,

    /// Author name for file comments
    #[arg(long, default_value = "")]
    author: String,

    /// Project name for file comments
    #[arg(long, default_value = "")]
    project: String,

    /// Print the tag and direction completion lists and exit
    #[arg(long)]
    list_tags: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if cli.list_tags {
        for tag in COMPLETION_TAGS {
            println!("{}{}", config.tag_char(), tag);
        }
        for dir in DIRECTION_ATTRS {
            println!("{}", dir);
        }
        return Ok(());
    }

    if let Some(path) = &cli.file_comment {
        let file_name = Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.clone());
        let today = Local::now();
        let ctx = render::FileCommentContext {
            file_name: &file_name,
            author: &cli.author,
            project: &cli.project,
            year: today.year(),
            month: today.month(),
            day: today.day(),
        };
        let (text, _cursor) = render::render_file_comment(&config, &ctx);
        print!("{}", text);
        return Ok(());
    }

    let mut existing = String::new();
    io::stdin()
        .read_to_string(&mut existing)
        .context("failed to read stdin")?;

    let signature = cli.signature.as_deref().map(sig::parse);
    let indent = " ".repeat(cli.indent);
    let block = render::render(&config, &indent, signature.as_ref(), &existing);
    print!("{}", block);
    Ok(())
}

/// Load the configuration snapshot: JSON file if given, defaults otherwise,
/// with command line overrides applied on top.
fn load_config(cli: &Cli) -> Result<DoxygenConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("invalid config: {}", path.display()))?
        }
        None => DoxygenConfig::default(),
    };

    if let Some(style) = &cli.style {
        config.tag_style = match style.as_str() {
            "javadoc" => TagStyle::JavaDoc,
            "qt" => TagStyle::Qt,
            other => anyhow::bail!("unknown tag style: {}. Use javadoc or qt", other),
        };
    }
    if cli.no_smart {
        config.smart_comments = false;
    }

    config.validate().context("invalid configuration")?;
    log::debug!(
        "config: style={:?} indent={} smart={} abbreviations={}",
        config.tag_style,
        config.tag_indentation,
        config.smart_comments,
        config.abbreviations.len()
    );
    Ok(config)
}
