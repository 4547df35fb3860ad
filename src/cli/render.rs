//! `basetools render`: expand template files.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use super::CliConfig;
use super::args::parse_definitions;
use crate::config::VariablesFile;
use crate::templating::{Placeholders, TemplateString};
use crate::utils::fs::save_files_on_change;
use crate::utils::progress::Progressor;

const TEMPLATE_SUFFIX: &str = ".template";
const PROGRESS_INTERVAL: Duration = Duration::from_millis(250);

/// Expand templates against variables.
///
/// Without `--output-dir`, results are concatenated to stdout. With it, each
/// template `NAME.template` (or `NAME`) is written to `DIR/NAME`, and files whose
/// content is unchanged are left untouched.
#[derive(Args)]
pub struct RenderCommand {
    /// Template files to expand
    #[arg(required = true, value_name = "TEMPLATE")]
    templates: Vec<PathBuf>,

    /// TOML file with a [vars] table
    #[arg(long, value_name = "FILE")]
    vars: Option<PathBuf>,

    /// Directory to write the expanded files into
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Variable definitions: --scalar NAME VALUE, --list NAME VALUE...
    #[arg(last = true, value_name = "DEFINITIONS")]
    definitions: Vec<String>,
}

/// Result of writing one expanded template.
struct Written {
    path: PathBuf,
    changed: bool,
}

impl RenderCommand {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let placeholders = self.load_placeholders().await?;
        debug!("Loaded {} template variables", placeholders.len());

        let rendered = self.render_all(&placeholders).await?;

        let Some(output_dir) = &self.output_dir else {
            let mut stdout = std::io::stdout().lock();
            for text in &rendered {
                stdout.write_all(text.as_bytes()).context("Failed to write to stdout")?;
            }
            stdout.flush().context("Failed to write to stdout")?;
            return Ok(());
        };

        let mut progress =
            Progressor::new("Writing generated files ", " done", '.', PROGRESS_INTERVAL)
                .enabled(!config.no_progress);
        progress.start()?;
        let written = self.write_all(output_dir, rendered).await;
        progress.stop();

        for file in written? {
            if file.changed {
                println!("{} {}", "Updated".green(), file.path.display());
            } else {
                println!("{} {}", "Unchanged".dimmed(), file.path.display());
            }
        }
        Ok(())
    }

    /// File variables overlaid with command-line definitions.
    async fn load_placeholders(&self) -> Result<Placeholders> {
        let mut placeholders = match &self.vars {
            Some(path) => {
                let file = VariablesFile::load_from(path).await?;
                file.to_placeholders(&path.display().to_string())?
            }
            None => Placeholders::new(),
        };

        placeholders.merge(parse_definitions(&self.definitions)?);
        Ok(placeholders)
    }

    async fn render_all(&self, placeholders: &Placeholders) -> Result<Vec<String>> {
        let mut rendered = Vec::with_capacity(self.templates.len());

        for template in &self.templates {
            let source = tokio::fs::read_to_string(template)
                .await
                .with_context(|| format!("Failed to read template {}", template.display()))?;

            let mut text = TemplateString::new();
            text.append_with(&source, placeholders)
                .with_context(|| format!("Failed to expand template {}", template.display()))?;

            debug!("Expanded {} ({} bytes)", template.display(), text.len());
            rendered.push(String::from(text));
        }

        Ok(rendered)
    }

    async fn write_all(&self, output_dir: &Path, rendered: Vec<String>) -> Result<Vec<Written>> {
        let mut seen = HashSet::new();
        let mut files = Vec::with_capacity(rendered.len());

        for (template, text) in self.templates.iter().zip(rendered) {
            let path = output_dir.join(output_name(template)?);
            if !seen.insert(path.clone()) {
                anyhow::bail!(
                    "Templates produce the same output file {}; render them separately",
                    path.display()
                );
            }
            files.push((path, text.into_bytes()));
        }

        let changed = save_files_on_change(&files).await?;
        info!(
            "Wrote {} of {} generated files",
            changed.iter().filter(|c| **c).count(),
            changed.len()
        );

        Ok(files
            .into_iter()
            .zip(changed)
            .map(|((path, _), changed)| Written {
                path,
                changed,
            })
            .collect())
    }
}

/// `AutoGen.h.template` becomes `AutoGen.h`; other names are kept as is.
fn output_name(template: &Path) -> Result<String> {
    let name = template
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Template path has no usable file name: {}", template.display()))?;

    match name.strip_suffix(TEMPLATE_SUFFIX) {
        Some(stem) if !stem.is_empty() => Ok(stem.to_string()),
        _ => Ok(name.to_string()),
    }
}
