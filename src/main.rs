use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use certkit::designer::placeholders::render_text;
use certkit::{
    default_config_path, editor_settings, init_logging, render_template, DataRecord,
    DesignerState, EditorConfig, TemplateDocument, TextCase, BUILD_DATE, VERSION,
};

#[derive(Parser)]
#[command(name = "certkit", version, about = "Certificate and badge template tools")]
struct Cli {
    /// Editor config file (JSON or TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the render plan of a template document as JSON
    Preview {
        template: PathBuf,
        /// Recipient record (JSON); sample values are used without one
        #[arg(long)]
        record: Option<PathBuf>,
    },
    /// Substitute placeholders in a piece of text
    Substitute {
        text: String,
        #[arg(long)]
        record: Option<PathBuf>,
        /// none, upper, lower or title
        #[arg(long, default_value = "none")]
        case: TextCase,
    },
    /// Print the effective editor configuration
    Config,
}

fn load_record(path: Option<&PathBuf>) -> anyhow::Result<Option<DataRecord>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading record {}", path.display()))?;
    let record = serde_json::from_str(&content)
        .with_context(|| format!("parsing record {}", path.display()))?;
    Ok(Some(record))
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<EditorConfig> {
    let path = match path {
        Some(path) => path,
        None => default_config_path()?,
    };
    EditorConfig::load_or_default(&path)
        .with_context(|| format!("loading config {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;
    tracing::debug!("certkit {} (built {})", VERSION, BUILD_DATE);

    let config = load_config(cli.config)?;

    match cli.command {
        Command::Preview { template, record } => {
            let document = TemplateDocument::load_from_file(&template)
                .with_context(|| format!("loading template {}", template.display()))?;
            let record = load_record(record.as_ref())?;
            let mut state = DesignerState::new(editor_settings(&config));
            state.open_template(document.into_template());
            let plan = render_template(state.template(), record.as_ref());
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Command::Substitute { text, record, case } => {
            let record = load_record(record.as_ref())?;
            println!("{}", render_text(&text, record.as_ref(), case));
        }
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
