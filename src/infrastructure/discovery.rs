//! ROM Discovery
//!
//! Finds candidate ROMs in a directory when no path was given on the
//! command line. Files that fail to identify are reported and dropped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::entities::IdentifiedImage;
use crate::domain::ports::{ExtractEvent, ExtractEventSink};
use crate::error::{RomexError, RomexResult};

use super::prober::ImageProber;

/// File extensions treated as ROM dumps.
pub const ROM_EXTENSIONS: &[&str] = &["z64", "n64", "v64"];

/// Whether `path` carries one of the ROM extensions (case-insensitive).
pub fn has_rom_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| ROM_EXTENSIONS.iter().any(|r| r.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// List ROM-like files directly inside `dir`, sorted by path.
///
/// Symlinks are followed. Candidates whose metadata cannot be read are kept
/// so the prober can report them; directory entries that cannot be read at
/// all are skipped.
pub fn rom_files(dir: &Path) -> RomexResult<Vec<PathBuf>> {
    Ok(rom_paths(read_entries(dir)?, |_| {}))
}

/// Probe every ROM-like file in `dir` and keep the ones that identify.
pub fn discover(
    dir: &Path,
    prober: &ImageProber<'_>,
    events: &dyn ExtractEventSink,
) -> RomexResult<Vec<IdentifiedImage>> {
    events.on_event(ExtractEvent::DiscoveryStarted {
        dir: dir.to_path_buf(),
    });

    let paths = rom_paths(read_entries(dir)?, |err| {
        events.on_event(ExtractEvent::CandidateRejected {
            path: dir.to_path_buf(),
            reason: format!("unreadable directory entry: {}", err),
        })
    });

    let mut identified = Vec::new();
    for path in paths {
        match prober.probe(&path) {
            Ok(image) => identified.push(image),
            Err(err) => events.on_event(ExtractEvent::CandidateRejected {
                path,
                reason: err.to_string(),
            }),
        }
    }
    Ok(identified)
}

fn read_entries(dir: &Path) -> RomexResult<impl Iterator<Item = io::Result<PathBuf>>> {
    let entries = fs::read_dir(dir).map_err(|source| RomexError::UnreadableFile {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(entries.map(|entry| entry.map(|e| e.path())))
}

fn rom_paths<I, F>(entries: I, mut on_unreadable: F) -> Vec<PathBuf>
where
    I: IntoIterator<Item = io::Result<PathBuf>>,
    F: FnMut(io::Error),
{
    let mut files = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(err) => {
                on_unreadable(err);
                continue;
            }
        };
        if !has_rom_extension(&path) {
            continue;
        }
        // fs::metadata follows symlinks; fifos and directories are never probed.
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => files.push(path),
            Ok(_) => {}
            Err(_) => files.push(path),
        }
    }
    files.sort();
    files
}
