//! CLI command implementations.

mod generate;
mod info;

pub use generate::{generate_contact, generate_text, generate_url, ContactArgs};
pub use info::show_info;
