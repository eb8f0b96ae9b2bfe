//! Terminal preview of a QR code.

use linkqr_core::{FrameStyle, HexColor, QrMatrix};

const LIGHT: [u8; 3] = [255, 255, 255];
const RESET: &str = "\x1b[0m";

/// Border glyphs: top-left, top-right, bottom-left, bottom-right, horizontal, vertical
fn border(frame: FrameStyle) -> Option<[char; 6]> {
    match frame {
        FrameStyle::None => None,
        FrameStyle::Dots => Some(['·'; 6]),
        FrameStyle::Square => Some(['┌', '┐', '└', '┘', '─', '│']),
        FrameStyle::Rounded => Some(['╭', '╮', '╰', '╯', '─', '│']),
    }
}

/// Print a QR code to the terminal.
pub fn print_qr_code(matrix: &QrMatrix, color: HexColor, frame: FrameStyle) {
    print!("{}", render_qr_code(matrix, color, frame));
}

/// Render a QR code with Unicode half blocks.
///
/// Each character covers 2 vertical modules: `▀` painted with the top
/// module as foreground and the bottom one as background, so the code
/// stays scannable on dark terminals.
pub fn render_qr_code(matrix: &QrMatrix, color: HexColor, frame: FrameStyle) -> String {
    let width = matrix.width();
    let dark = color.rgb();
    let paint = |is_dark: bool| if is_dark { dark } else { LIGHT };
    let border = border(frame);
    let mut out = String::new();

    if let Some([tl, tr, _, _, h, _]) = border {
        out.push_str(&format!("  {tl}{}{tr}\n", h.to_string().repeat(width)));
    }

    for y in (0..width).step_by(2) {
        out.push_str("  ");
        if let Some([.., v]) = border {
            out.push(v);
        }
        for x in 0..width {
            let top = paint(matrix.is_dark(x, y));
            let bottom = paint(matrix.is_dark(x, y + 1));
            out.push_str(&format!(
                "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m▀",
                top[0], top[1], top[2], bottom[0], bottom[1], bottom[2]
            ));
        }
        out.push_str(RESET);
        if let Some([.., v]) = border {
            out.push(v);
        }
        out.push('\n');
    }

    if let Some([_, _, bl, br, h, _]) = border {
        out.push_str(&format!("  {bl}{}{br}\n", h.to_string().repeat(width)));
    }

    out
}
