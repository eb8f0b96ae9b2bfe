//! Info command implementation.

use linkqr_core::constants::{MAX_SIZE, MIN_SIZE, SIZE_STEP};
use linkqr_core::{export, Config, ErrorCorrectionLevel, FrameStyle, HexColor, PALETTE};

/// Display the available styling options and defaults.
pub fn show_info() {
    let config = Config::default();

    println!("\n\x1b[1mlinkqr Options\x1b[0m");
    println!("═══════════════════════════════════════");

    println!("\n\x1b[1mError correction:\x1b[0m");
    for level in ErrorCorrectionLevel::ALL {
        let marker = if level == config.level { " (default)" } else { "" };
        println!("  {}  {}{}", level, level.description(), marker);
    }

    println!("\n\x1b[1mFrames:\x1b[0m");
    for frame in FrameStyle::ALL {
        println!("  {:<8} {}", frame.id(), frame.label());
    }

    println!("\n\x1b[1mColors:\x1b[0m");
    for entry in PALETTE {
        let swatch = entry
            .hex
            .parse::<HexColor>()
            .map(|c| {
                let [r, g, b] = c.rgb();
                format!("\x1b[48;2;{r};{g};{b}m   \x1b[0m")
            })
            .unwrap_or_default();
        println!("  {} {:<8} {}", swatch, entry.name, entry.hex);
    }

    println!(
        "\n\x1b[1mSize:\x1b[0m        {}-{} px, step {} (default {})",
        MIN_SIZE, MAX_SIZE, SIZE_STEP, config.size
    );
    println!("\x1b[1mDownloads:\x1b[0m   {}", export::default_download_dir().display());
    println!();
}
