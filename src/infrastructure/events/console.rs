//! Console Event Sink
//!
//! Human-readable progress. Identification details only appear in verbose
//! mode; plans, results and the summary are always shown.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::{Color, Stylize};

use crate::domain::ports::{ExtractEvent, ExtractEventSink};

mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const ARROW: &str = "↳";
}

mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const ARROW: &str = "[>]";
}

/// Rendering switches for the console sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleStyle {
    pub verbose: bool,
    pub color: bool,
    pub unicode: bool,
}

impl Default for ConsoleStyle {
    fn default() -> Self {
        Self {
            verbose: false,
            color: false,
            unicode: true,
        }
    }
}

pub struct ConsoleEventSink {
    style: ConsoleStyle,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(style: ConsoleStyle) -> Self {
        Self::with_writer(io::stdout(), style)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, style: ConsoleStyle) -> Self {
        Self {
            style,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn icon(&self, unicode: &'static str, ascii: &'static str, color: Color) -> String {
        let icon = if self.style.unicode { unicode } else { ascii };
        if self.style.color {
            icon.with(color).to_string()
        } else {
            icon.to_string()
        }
    }

    fn success(&self) -> String {
        self.icon(icons::SUCCESS, icons_ascii::SUCCESS, Color::Green)
    }

    fn error(&self) -> String {
        self.icon(icons::ERROR, icons_ascii::ERROR, Color::Red)
    }

    fn warning(&self) -> String {
        self.icon(icons::WARNING, icons_ascii::WARNING, Color::Yellow)
    }

    fn progress(&self) -> String {
        self.icon(icons::PROGRESS, icons_ascii::PROGRESS, Color::Cyan)
    }

    fn arrow(&self) -> String {
        self.icon(icons::ARROW, icons_ascii::ARROW, Color::DarkGrey)
    }

    fn render(&self, event: &ExtractEvent) -> Vec<String> {
        let verbose = self.style.verbose;
        match event {
            ExtractEvent::DiscoveryStarted { dir } if verbose => {
                vec![format!("Scanning {} for ROMs", dir.display())]
            }
            ExtractEvent::CandidateRejected { path, reason } if verbose => {
                vec![format!(
                    "{} Skipping {}: {}",
                    self.warning(),
                    path.display(),
                    reason
                )]
            }
            ExtractEvent::ImageIdentified {
                path,
                version,
                checksum,
                byte_order,
                content_hash,
            } if verbose => {
                let mut lines = vec![format!(
                    "{} {} is {} (checksum {}, {})",
                    self.success(),
                    path.display(),
                    version,
                    checksum,
                    byte_order
                )];
                if let Some(hash) = content_hash {
                    lines.push(format!("  {} {}", self.arrow(), hash));
                }
                lines
            }
            ExtractEvent::Selected {
                selected,
                candidates,
            } if verbose => vec![format!("Selected {} of {} ROMs", selected, candidates)],
            ExtractEvent::PlanReady {
                mode, rom, command, ..
            } => {
                let target = match rom {
                    Some(rom) => format!("{} ({})", rom.display(), mode),
                    None => mode.to_string(),
                };
                vec![
                    format!("{} {}", self.progress(), target),
                    format!("  {} {}", self.arrow(), command),
                ]
            }
            ExtractEvent::ExtractionSucceeded { rom, .. } => {
                let what = rom
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "custom archive".to_string());
                vec![format!("{} Finished {}", self.success(), what)]
            }
            ExtractEvent::ExtractionFailed { rom, error, .. } => {
                let what = rom
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "custom archive".to_string());
                vec![
                    format!("{} Error when building {}: {}", self.error(), what, error),
                    "  Aborting...".to_string(),
                ]
            }
            ExtractEvent::Completed {
                succeeded,
                failed,
                dry_run,
            } => {
                if *dry_run {
                    vec![format!("\nDry run: {} plan(s) not executed", succeeded)]
                } else if *failed == 0 {
                    vec![format!("\n{} {} extraction(s) succeeded", self.success(), succeeded)]
                } else {
                    vec![format!(
                        "\n{} {} succeeded, {} failed",
                        self.error(),
                        succeeded,
                        failed
                    )]
                }
            }
            _ => Vec::new(),
        }
    }
}

impl ExtractEventSink for ConsoleEventSink {
    fn on_event(&self, event: ExtractEvent) {
        let lines = self.render(&event);
        if lines.is_empty() {
            return;
        }
        if let Ok(mut writer) = self.writer.lock() {
            for line in lines {
                let _ = writeln!(writer, "{}", line);
            }
            let _ = writer.flush();
        }
    }
}
