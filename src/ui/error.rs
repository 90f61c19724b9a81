use crossterm::style::Stylize;

use romex::RomexError;

/// Suggested next step for an error, if there is an obvious one.
fn fix_hint(err: &RomexError) -> Option<String> {
    match err {
        RomexError::UnrecognizedImage { .. } => Some(
            "Use an unmodified dump of a supported version. Run with -v to see the header checksum."
                .to_string(),
        ),
        RomexError::NoCandidatesFound { .. } => Some(
            "Place a .z64, .n64 or .v64 ROM there, pass --search-dir, or give the ROM path directly."
                .to_string(),
        ),
        RomexError::AmbiguousSelectionNonInteractive { .. } => {
            Some("Pass the ROM path as an argument, or use --all to process every ROM.".to_string())
        }
        RomexError::MissingRequiredPath { what, .. } => {
            let (flag, key) = match *what {
                "custom assets path" => ("--custom-assets-path", "custom_assets_path"),
                _ => ("--custom-otr-file", "custom_otr_file"),
            };
            Some(format!("Pass {} or set archive.{} in romex.toml.", flag, key))
        }
        RomexError::InvalidModeCombination(_) => {
            Some("--gen-headers and --norom cannot be combined, and --norom takes no ROM.".to_string())
        }
        RomexError::ExtractorExecutableNotFound { .. } => Some(
            "Build ZAPD first, or point to it with --zapd / ROMEX_ZAPD.".to_string(),
        ),
        RomexError::Config { .. } => Some("Fix the TOML syntax and try again.".to_string()),
        _ => None,
    }
}

fn format_romex_error_with(err: &RomexError, supports_color: bool) -> String {
    let label = if supports_color {
        "error:".red().bold().to_string()
    } else {
        "[ERROR]".to_string()
    };
    let mut out = format!("{} {}\n", label, err);
    if let Some(hint) = fix_hint(err) {
        let fix = if supports_color {
            "fix:".cyan().to_string()
        } else {
            "fix:".to_string()
        };
        out.push_str(&format!("  {} {}\n", fix, hint));
    }
    out
}

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    match err.downcast_ref::<RomexError>() {
        Some(romex) => format_romex_error_with(romex, caps.supports_color),
        None => format!("[ERROR] {}\n", err),
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let mut output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        if let Some(file) = err.downcast_ref::<RomexError>().and_then(RomexError::file) {
            output["file"] = serde_json::Value::String(file.display().to_string());
        }
        println!("{}", output);
        return;
    }

    eprint!("{}", format_error(err));
}
