//! jsonnetdoc — generate documentation from JSDoc-style comments in Jsonnet.
//!
//! Collects `.jsonnet` and `.libsonnet` files from a file or directory,
//! extracts every `/** ... */` block and prints the result as JSON
//! (default) or markdown (`--markdown`).

mod collect;
mod error;
mod logging;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use error::DocError;
use render::{OutputMode, RenderConfig};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "jsonnetdoc",
    version,
    about = "Documentation parser for JSDoc style comments in Jsonnet"
)]
struct Cli {
    /// Input file or directory
    path: PathBuf,

    /// Output markdown instead of JSON
    #[arg(long)]
    markdown: bool,

    /// Pretty-print JSON output
    #[arg(long, conflicts_with = "markdown")]
    pretty: bool,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            mode: if self.markdown {
                OutputMode::Markdown
            } else {
                OutputMode::Json
            },
            pretty: self.pretty,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let output = generate(&cli.path, &cli.render_config())?;
    match cli.output {
        Some(ref path) => write_file(path, &output)?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", output).context("failed to write to stdout")?;
        }
    }
    Ok(())
}

/// Collect, parse and render everything under `root`.
///
/// The first unreadable file aborts the whole run.
fn generate(root: &Path, config: &RenderConfig) -> Result<String> {
    let files = collect::collect(root)?;

    let mut docs = Vec::with_capacity(files.len());
    for path in &files {
        docs.push(parser::parse_file(path)?);
    }
    info!(
        files = docs.len(),
        functions = docs.iter().map(|d| d.functions.len()).sum::<usize>(),
        "parsed documentation"
    );

    let renderer = render::create_renderer(config);
    let output = renderer
        .render(&docs)
        .with_context(|| format!("failed to render documentation for {}", root.display()))?;
    Ok(output)
}

fn write_file(path: &Path, output: &str) -> Result<(), DocError> {
    fs::write(path, format!("{}\n", output)).map_err(|source| DocError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "wrote documentation");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn markdown_flag_selects_markdown() {
        let cli = Cli::parse_from(["jsonnetdoc", "--markdown", "lib"]);
        assert_eq!(cli.render_config().mode, OutputMode::Markdown);
        assert_eq!(cli.path, PathBuf::from("lib"));
    }

    #[test]
    fn json_is_the_default() {
        let cli = Cli::parse_from(["jsonnetdoc", "lib"]);
        let config = cli.render_config();
        assert_eq!(config.mode, OutputMode::Json);
        assert!(!config.pretty);
    }

    #[test]
    fn pretty_conflicts_with_markdown() {
        assert!(Cli::try_parse_from(["jsonnetdoc", "--markdown", "--pretty", "lib"]).is_err());
    }

    #[test]
    fn path_is_required() {
        assert!(Cli::try_parse_from(["jsonnetdoc"]).is_err());
    }

    #[test]
    fn generate_follows_collection_order() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b.libsonnet", "/**\n * @name b\n */\n");
        write(dir.path(), "a.jsonnet", "/**\n * @name a\n */\n");
        write(dir.path(), "c.txt", "/**\n * @name c\n */\n");

        let config = RenderConfig {
            mode: OutputMode::Markdown,
            pretty: false,
        };
        let out = generate(dir.path(), &config).unwrap();
        assert_eq!(out, "# a\n\n## a\n\n# b\n\n## b\n");
    }

    #[test]
    fn generate_missing_path_fails() {
        let dir = TempDir::new().unwrap();
        let err = generate(&dir.path().join("nope"), &RenderConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DocError>(),
            Some(DocError::NotFound(_))
        ));
    }

    #[test]
    fn write_file_appends_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        write_file(&path, "[]").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "[]\n");
    }

    #[test]
    fn write_file_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.json");
        assert!(matches!(
            write_file(&path, "[]"),
            Err(DocError::WriteFailure { .. })
        ));
    }
}
