//! UI utilities for terminal output.

mod notice;
mod qr;

pub use notice::print_notice;
pub use qr::print_qr_code;
