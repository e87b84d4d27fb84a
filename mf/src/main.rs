use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mailform::cli::{Cli, Command, Format};
use mailform::config::Config;
use mailform::input::{STDIN_TEMPLATE_NAME, collect_values, read_template};
use mailtemplate::export::{preview_document, rendered_file_name, template_file_name, template_name_from_path};
use mailtemplate::required::ensure_complete;
use mailtemplate::values::blank_values;
use mailtemplate::{FieldKind, ValueMap, extract_placeholders, form_fields, render_template};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > RUST_LOG > warn
    let filter = match cli_log_level.or(config_log_level) {
        Some(level) => EnvFilter::try_new(level).context(format!("Invalid log level: {}", level))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    // stdout carries rendered HTML, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize logging: {}", e))?;

    Ok(())
}

fn write_stdout(content: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes()).context("Failed to write to stdout")?;
    stdout.flush()?;
    Ok(())
}

fn render(html: &str, values: &ValueMap, strict: bool) -> Result<String> {
    if strict {
        ensure_complete(&extract_placeholders(html), values)?;
    }
    Ok(render_template(html, values))
}

fn export_name(template: &str, name: Option<String>) -> String {
    name.map(|n| n.trim().to_string()).or_else(|| {
        if template == "-" {
            None
        } else {
            template_name_from_path(template)
        }
    })
    .unwrap_or_else(|| STDIN_TEMPLATE_NAME.to_string())
}

fn write_export(dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).context(format!("Failed to create export directory: {}", dir.display()))?;
    let path = dir.join(file_name);
    fs::write(&path, content).context(format!("Failed to write {}", path.display()))?;
    Ok(path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load log level from config file early (before full config load)
    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("mailform starting");

    match cli.command {
        Command::Fields { template, json } => {
            let html = read_template(&template)?;
            let fields = form_fields(&html, config.multiline_keywords.as_slice());
            if json {
                println!("{}", serde_json::to_string_pretty(&fields)?);
            } else if fields.is_empty() {
                println!(
                    "No placeholders found. Use curly braces like {{{{title}}}} in your template HTML to enable content fields."
                );
            } else {
                for field in fields {
                    let kind = match field.kind {
                        FieldKind::SingleLine => field.kind.to_string().dimmed(),
                        FieldKind::MultiLine => field.kind.to_string().yellow(),
                    };
                    println!("{} {}", field.name.cyan(), kind);
                }
            }
        }
        Command::Init { template, format } => {
            let html = read_template(&template)?;
            let blank = blank_values(&extract_placeholders(&html));
            let content = match format {
                Format::Json => format!("{}\n", serde_json::to_string_pretty(&blank)?),
                Format::Yaml => serde_yaml::to_string(&blank)?,
            };
            write_stdout(&content)?;
        }
        Command::Render {
            template,
            values,
            strict,
            output,
        } => {
            let html = read_template(&template)?;
            let values = collect_values(&values)?;
            let rendered = render(&html, &values, strict || config.strict)?;
            match output {
                Some(path) => {
                    fs::write(&path, &rendered).context(format!("Failed to write {}", path.display()))?;
                    info!(path = %path.display(), "Rendered template written");
                }
                None => write_stdout(&rendered)?,
            }
        }
        Command::Export {
            template,
            name,
            dir,
            values,
            strict,
            raw,
        } => {
            let html = read_template(&template)?;
            let name = export_name(&template, name);
            let dir = dir.unwrap_or_else(|| config.export_dir.clone());

            let path = if raw {
                write_export(&dir, &template_file_name(&name), &html)?
            } else {
                let values = collect_values(&values)?;
                let rendered = render(&html, &values, strict || config.strict)?;
                write_export(&dir, &rendered_file_name(&name), &rendered)?
            };
            println!("{} Exported to {}", "✓".green(), path.display().to_string().cyan());
        }
        Command::Preview { template, values } => {
            let html = read_template(&template)?;
            let values = collect_values(&values)?;
            let rendered = render_template(&html, &values);
            write_stdout(preview_document(&rendered))?;
        }
    }

    Ok(())
}
