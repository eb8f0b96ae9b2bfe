//! linkqr CLI - QR codes for links, text and contacts.

mod commands;
mod ui;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use linkqr_core::{constants, Config, ErrorCorrectionLevel, FrameStyle, HexColor};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "linkqr")]
#[command(about = "Generate QR codes for links, text and contacts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a URL (https:// is added when missing)
    Url {
        url: String,
        #[command(flatten)]
        opts: GenerateArgs,
    },
    /// Encode free text verbatim
    Text {
        text: Vec<String>,
        #[command(flatten)]
        opts: GenerateArgs,
    },
    /// Encode a contact card (vCard)
    Contact {
        #[command(flatten)]
        contact: commands::ContactArgs,
        #[command(flatten)]
        opts: GenerateArgs,
    },
    /// List error correction levels, frame styles and colors
    Info,
}

/// Styling and actions shared by every generating command
#[derive(Args)]
pub struct GenerateArgs {
    /// Edge length of the exported image, in pixels
    #[arg(long, default_value_t = constants::DEFAULT_SIZE,
          value_parser = clap::value_parser!(u32).range(constants::MIN_SIZE as i64..=constants::MAX_SIZE as i64))]
    size: u32,

    /// Foreground color as #RRGGBB or a palette name
    #[arg(short, long, default_value = constants::DEFAULT_FG_COLOR)]
    color: HexColor,

    /// Error correction level (L, M, Q, H)
    #[arg(short, long, default_value = "M")]
    level: ErrorCorrectionLevel,

    /// Frame drawn around the preview (none, dots, square, rounded)
    #[arg(short, long, default_value = "none")]
    frame: FrameStyle,

    /// Directory downloads are written to [default: your download directory]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// File name for the download, without extension
    #[arg(long, default_value = constants::DEFAULT_FILENAME)]
    filename: String,

    /// Save the QR code as a PNG
    #[arg(short, long)]
    download: bool,

    /// Copy the encoded content to the clipboard
    #[arg(long)]
    copy: bool,

    /// Share the encoded content, copying it when sharing is unavailable
    #[arg(long)]
    share: bool,
}

impl GenerateArgs {
    fn config(&self) -> Config {
        let defaults = Config::default();
        Config {
            size: self.size,
            fg_color: self.color,
            level: self.level,
            frame: self.frame,
            output_dir: self.output.clone().unwrap_or(defaults.output_dir),
            filename: self.filename.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("linkqr=info".parse()?)
                .add_directive("linkqr_core=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Url { url, opts } => commands::generate_url(url, &opts)?,
        Commands::Text { text, opts } => commands::generate_text(text.join(" "), &opts)?,
        Commands::Contact { contact, opts } => commands::generate_contact(&contact, &opts)?,
        Commands::Info => commands::show_info(),
    }

    Ok(())
}
