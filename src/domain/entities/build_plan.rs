//! Build Plan Entity
//!
//! A fully resolved extractor invocation. Plans are only created by the
//! planner, which validates them; once built, rendering the argument vector
//! cannot fail and always yields the same arguments in the same order.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ExtractMode;

/// Value the extractor expects for output directories it does not use here.
pub const OUTPUT_PLACEHOLDER: &str = "placeholder";

/// Exporter selected when producing an archive.
pub const ARCHIVE_EXPORTER: &str = "OTR";

/// Custom asset inputs bundled into an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomAssets {
    pub assets_path: PathBuf,
    pub archive_name: String,
}

/// What a ROM extraction writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RomOutput {
    /// Source headers only
    Headers,
    /// Packaged archive named `otr_file`, with custom assets alongside
    Archive {
        custom: CustomAssets,
        otr_file: String,
    },
}

/// Extraction driven by a ROM image (`ed` subcommand).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomExtraction {
    pub input_xml_path: PathBuf,
    pub rom_path: PathBuf,
    pub file_list_dir: String,
    pub output_dir: String,
    pub output_source_dir: String,
    pub config_path: String,
    pub output: RomOutput,
}

/// The two invocation shapes the extractor understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanKind {
    Rom(RomExtraction),
    /// Archive of custom assets only (`botr --norom`)
    CustomArchive(CustomAssets),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    executable: PathBuf,
    kind: PlanKind,
    port_version: Option<String>,
}

impl BuildPlan {
    pub(crate) fn new(executable: PathBuf, kind: PlanKind, port_version: Option<String>) -> Self {
        Self {
            executable,
            kind,
            port_version,
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn kind(&self) -> &PlanKind {
        &self.kind
    }

    pub fn mode(&self) -> ExtractMode {
        match &self.kind {
            PlanKind::Rom(rom) => match rom.output {
                RomOutput::Headers => ExtractMode::Headers,
                RomOutput::Archive { .. } => ExtractMode::Archive,
            },
            PlanKind::CustomArchive(_) => ExtractMode::CustomArchive,
        }
    }

    pub fn port_version(&self) -> Option<&str> {
        self.port_version.as_deref()
    }

    pub fn rom_path(&self) -> Option<&Path> {
        match &self.kind {
            PlanKind::Rom(rom) => Some(&rom.rom_path),
            PlanKind::CustomArchive(_) => None,
        }
    }

    pub fn config_path(&self) -> Option<&str> {
        match &self.kind {
            PlanKind::Rom(rom) => Some(&rom.config_path),
            PlanKind::CustomArchive(_) => None,
        }
    }

    pub fn input_xml_path(&self) -> Option<&Path> {
        match &self.kind {
            PlanKind::Rom(rom) => Some(&rom.input_xml_path),
            PlanKind::CustomArchive(_) => None,
        }
    }

    /// Output archive name; unset unless a ROM-derived archive is produced.
    pub fn otr_file(&self) -> Option<&str> {
        match &self.kind {
            PlanKind::Rom(RomExtraction {
                output: RomOutput::Archive { otr_file, .. },
                ..
            }) => Some(otr_file),
            _ => None,
        }
    }

    pub fn custom_assets(&self) -> Option<&CustomAssets> {
        match &self.kind {
            PlanKind::Rom(RomExtraction {
                output: RomOutput::Archive { custom, .. },
                ..
            }) => Some(custom),
            PlanKind::CustomArchive(custom) => Some(custom),
            _ => None,
        }
    }

    /// Arguments passed to the extractor, without the executable itself.
    pub fn args(&self) -> Vec<String> {
        let mut args: Vec<String> = Vec::new();

        match &self.kind {
            PlanKind::Rom(rom) => {
                args.extend([
                    "ed".to_string(),
                    "-i".to_string(),
                    path_arg(&rom.input_xml_path),
                    "-b".to_string(),
                    path_arg(&rom.rom_path),
                    "-fl".to_string(),
                    rom.file_list_dir.clone(),
                    "-o".to_string(),
                    rom.output_dir.clone(),
                    "-osf".to_string(),
                    rom.output_source_dir.clone(),
                    "-rconf".to_string(),
                    rom.config_path.clone(),
                ]);
                match &rom.output {
                    RomOutput::Headers => {
                        args.extend(["-gsf".to_string(), "1".to_string()]);
                    }
                    RomOutput::Archive { custom, otr_file } => {
                        args.extend([
                            "-gsf".to_string(),
                            "0".to_string(),
                            "-se".to_string(),
                            ARCHIVE_EXPORTER.to_string(),
                        ]);
                        push_custom_assets(&mut args, custom);
                        args.extend(["--otrfile".to_string(), otr_file.clone()]);
                    }
                }
            }
            PlanKind::CustomArchive(custom) => {
                args.extend([
                    "botr".to_string(),
                    "-se".to_string(),
                    ARCHIVE_EXPORTER.to_string(),
                    "--norom".to_string(),
                ]);
                push_custom_assets(&mut args, custom);
            }
        }

        if let Some(ver) = &self.port_version {
            args.extend(["--portVer".to_string(), ver.clone()]);
        }

        args
    }

    /// Executable followed by its arguments.
    pub fn command_line(&self) -> Vec<String> {
        let mut line = vec![path_arg(&self.executable)];
        line.extend(self.args());
        line
    }

    /// Command line for display, quoting arguments that need it.
    pub fn display_command(&self) -> String {
        self.command_line()
            .iter()
            .map(|arg| display_quote(arg))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn push_custom_assets(args: &mut Vec<String>, custom: &CustomAssets) {
    args.extend([
        "--customAssetsPath".to_string(),
        path_arg(&custom.assets_path),
        "--customOtrFile".to_string(),
        custom.archive_name.clone(),
    ]);
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn display_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./\\:=+,@".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', "'\\''"))
    }
}
