use std::path::Path;

use romex::config::ConfigWarning;

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!(
                "⚠ Unknown config key '{}' in {}:{}",
                w.key,
                path.display(),
                line
            );
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// NDJSON counterpart of [`print_config_warnings`], one object per key.
pub fn print_config_warnings_json(warnings: &[ConfigWarning]) {
    for w in warnings {
        println!("{}", config_warning_json(w));
    }
}

fn config_warning_json(w: &ConfigWarning) -> serde_json::Value {
    serde_json::json!({
        "event": "warning",
        "kind": "unknown_config_key",
        "key": w.key,
        "file": w.file.display().to_string(),
        "line": w.line,
        "suggestion": w.suggestion,
    })
}
