//! Generating commands: url, text and contact.

use std::path::PathBuf;

use clap::Args;
use linkqr_core::{
    ClipboardManager, ContactInfo, Config, Error, Mode, NoShareTarget, Notice, QrSession,
};

use crate::ui::{print_notice, print_qr_code};
use crate::GenerateArgs;

/// Contact card fields
#[derive(Args)]
pub struct ContactArgs {
    /// Full name
    #[arg(long, default_value = "")]
    name: String,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    email: Option<String>,

    /// Organization
    #[arg(long)]
    org: Option<String>,

    /// Website
    #[arg(long)]
    url: Option<String>,

    /// Load the card from a JSON file; flags override its fields
    #[arg(long, value_name = "FILE")]
    from: Option<PathBuf>,
}

impl ContactArgs {
    fn contact(&self) -> anyhow::Result<ContactInfo> {
        let mut contact = match &self.from {
            Some(path) => ContactInfo::from_json(&std::fs::read(path)?)?,
            None => ContactInfo::default(),
        };

        if !self.name.is_empty() {
            contact.name = self.name.clone();
        }
        for (field, value) in [
            (&mut contact.phone, &self.phone),
            (&mut contact.email, &self.email),
            (&mut contact.organization, &self.org),
            (&mut contact.url, &self.url),
        ] {
            if value.is_some() {
                *field = value.clone();
            }
        }

        Ok(contact)
    }
}

/// Encode a URL.
pub fn generate_url(url: String, opts: &GenerateArgs) -> anyhow::Result<()> {
    let config = opts.config();
    let mut session = QrSession::with_config(&config);
    session.set_mode(Mode::Url);
    session.set_text(url);
    run(session, opts, &config)
}

/// Encode free text.
pub fn generate_text(text: String, opts: &GenerateArgs) -> anyhow::Result<()> {
    let config = opts.config();
    let mut session = QrSession::with_config(&config);
    session.set_mode(Mode::Text);
    session.set_text(text);
    run(session, opts, &config)
}

/// Encode a contact card.
pub fn generate_contact(args: &ContactArgs, opts: &GenerateArgs) -> anyhow::Result<()> {
    let config = opts.config();
    let mut session = QrSession::with_config(&config);
    session.set_mode(Mode::Contact);
    session.set_contact(args.contact()?);
    run(session, opts, &config)
}

fn run(mut session: QrSession, opts: &GenerateArgs, config: &Config) -> anyhow::Result<()> {
    let matrix = session.render_request().matrix()?;

    println!();
    print_qr_code(&matrix, session.fg_color(), session.frame());
    println!("\n\x1b[2m{}\x1b[0m\n", session.qr_value());

    if opts.download {
        let downloaded = session
            .download(&config.output_dir, &config.filename)
            .map(|d| {
                println!("  {}", d.path.display());
                d.notice
            });
        report(downloaded)?;
    }

    if opts.copy {
        let copied = session.copy_to_clipboard(&mut ClipboardManager::new());
        report(copied)?;
    }

    if opts.share {
        let shared = session.share(&NoShareTarget, &mut ClipboardManager::new());
        report(shared)?;
    }

    Ok(())
}

/// Print the outcome of an action. Validation failures are notices, not errors.
fn report(outcome: linkqr_core::Result<Notice>) -> anyhow::Result<()> {
    match outcome {
        Ok(notice) | Err(Error::Validation(notice)) => {
            print_notice(&notice);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
