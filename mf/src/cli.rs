//! CLI argument parsing for mailform

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mf")]
#[command(author, version, about = "Fill placeholders in HTML email templates", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Where placeholder values come from
#[derive(Args, Debug, Clone, Default)]
pub struct ValueArgs {
    /// JSON or YAML file mapping placeholder names to values
    #[arg(short, long)]
    pub values: Option<PathBuf>,

    /// Set one placeholder (KEY=VALUE), overriding --values; repeatable
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the placeholders a template uses
    Fields {
        /// Template HTML file, or - for stdin
        #[arg(required = true)]
        template: String,

        /// Print fields as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a value file with every placeholder left blank
    Init {
        /// Template HTML file, or - for stdin
        #[arg(required = true)]
        template: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Render a template with values
    Render {
        /// Template HTML file, or - for stdin
        #[arg(required = true)]
        template: String,

        #[command(flatten)]
        values: ValueArgs,

        /// Fail when any placeholder has no value
        #[arg(long)]
        strict: bool,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the rendered (or raw) template into an export directory
    Export {
        /// Template HTML file, or - for stdin
        #[arg(required = true)]
        template: String,

        /// Template name used for the file name (default: template file stem)
        #[arg(short, long)]
        name: Option<String>,

        /// Export directory (default: export_dir from config)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        #[command(flatten)]
        values: ValueArgs,

        /// Fail when any placeholder has no value
        #[arg(long)]
        strict: bool,

        /// Export the template itself, without rendering
        #[arg(long)]
        raw: bool,
    },

    /// Print the preview document for a rendered template
    Preview {
        /// Template HTML file, or - for stdin
        #[arg(required = true)]
        template: String,

        #[command(flatten)]
        values: ValueArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_collects_repeated_sets() {
        let cli = Cli::parse_from([
            "mf",
            "render",
            "welcome.html",
            "--set",
            "title=Hi",
            "-s",
            "body=Text",
            "--strict",
        ]);

        match cli.command {
            Command::Render { template, values, strict, output } => {
                assert_eq!(template, "welcome.html");
                assert_eq!(values.set, vec!["title=Hi", "body=Text"]);
                assert!(values.values.is_none());
                assert!(strict);
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["mf", "init", "-", "--format", "yaml", "--log-level", "debug"]);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Command::Init { template, format } => {
                assert_eq!(template, "-");
                assert_eq!(format, Format::Yaml);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
