use std::path::PathBuf;

use clap::Parser;

/// romex - identify ROM images and drive the ZAPD asset extractor
#[derive(Parser, Debug)]
#[command(name = "romex")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "With no ROM given, the search directory is scanned for .z64/.n64/.v64 images."
)]
pub struct Cli {
    /// ROM image to extract from; skips directory discovery
    #[arg(value_name = "ROM")]
    pub rom: Option<PathBuf>,

    /// Path to the ZAPD executable (located automatically when omitted)
    #[arg(short = 'z', long = "zapd", value_name = "PATH")]
    pub zapd: Option<PathBuf>,

    /// Never prompt; fail when several ROMs are found
    #[arg(long)]
    pub non_interactive: bool,

    /// Show checksums, rejected files and content hashes
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate source headers instead of an archive
    #[arg(long)]
    pub gen_headers: bool,

    /// Build an archive from custom assets only, without a ROM
    #[arg(long)]
    pub norom: bool,

    /// Root of the per-version XML trees
    #[arg(long, value_name = "DIR")]
    pub xml_root: Option<PathBuf>,

    /// Custom assets bundled into the archive
    #[arg(long, value_name = "DIR")]
    pub custom_assets_path: Option<PathBuf>,

    /// File name of the custom assets archive
    #[arg(long, value_name = "NAME")]
    pub custom_otr_file: Option<String>,

    /// Port version recorded in the archive
    #[arg(long, value_name = "VER")]
    pub port_ver: Option<String>,

    /// Output archive name (defaults to oot.o2r or mm.o2r)
    #[arg(long, value_name = "NAME")]
    pub otr_file: Option<String>,

    /// Directory scanned for ROM images
    #[arg(long, value_name = "DIR")]
    pub search_dir: Option<PathBuf>,

    /// Process every identified ROM without asking
    #[arg(long, conflicts_with = "rom")]
    pub all: bool,

    /// Print the extractor command lines without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Emit NDJSON events instead of human-readable output
    #[arg(long)]
    pub json: bool,

    /// Configuration file (defaults to ./romex.toml, then the user config)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::try_parse_from(["romex"]).unwrap();
        assert_eq!(cli.rom, None);
        assert_eq!(cli.zapd, None);
        assert!(!cli.non_interactive);
        assert!(!cli.verbose);
        assert!(!cli.gen_headers);
        assert!(!cli.norom);
        assert!(!cli.all);
        assert!(!cli.dry_run);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_parse_rom_and_zapd() {
        let cli = Cli::try_parse_from(["romex", "-z", "tools/ZAPD.out", "baserom.z64"]).unwrap();
        assert_eq!(cli.zapd, Some(PathBuf::from("tools/ZAPD.out")));
        assert_eq!(cli.rom, Some(PathBuf::from("baserom.z64")));
    }

    #[test]
    fn test_cli_parse_archive_options() {
        let cli = Cli::try_parse_from([
            "romex",
            "--custom-assets-path",
            "assets/custom",
            "--custom-otr-file",
            "soh.o2r",
            "--port-ver",
            "9.0.2",
            "--otr-file",
            "game.o2r",
        ])
        .unwrap();
        assert_eq!(cli.custom_assets_path, Some(PathBuf::from("assets/custom")));
        assert_eq!(cli.custom_otr_file.as_deref(), Some("soh.o2r"));
        assert_eq!(cli.port_ver.as_deref(), Some("9.0.2"));
        assert_eq!(cli.otr_file.as_deref(), Some("game.o2r"));
    }

    #[test]
    fn test_cli_parse_both_modes_is_left_to_validation() {
        let cli = Cli::try_parse_from(["romex", "--gen-headers", "--norom"]).unwrap();
        assert!(cli.gen_headers);
        assert!(cli.norom);
    }

    #[test]
    fn test_cli_all_conflicts_with_rom() {
        assert!(Cli::try_parse_from(["romex", "--all", "baserom.z64"]).is_err());
    }

    #[test]
    fn test_cli_parse_verbose_short() {
        let cli = Cli::try_parse_from(["romex", "-v", "--non-interactive"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.non_interactive);
    }
}
