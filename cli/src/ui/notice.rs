//! Action outcome messages.

use linkqr_core::Notice;

/// Print a notice, in red on stderr when it reports a problem.
pub fn print_notice(notice: &Notice) {
    if notice.is_destructive() {
        eprintln!(
            "\x1b[1;31m✗\x1b[0m \x1b[1m{}\x1b[0m {}",
            notice.title, notice.description
        );
    } else {
        println!(
            "\x1b[1;32m✓\x1b[0m \x1b[1m{}\x1b[0m {}",
            notice.title, notice.description
        );
    }
}
