//! Extractor Locator
//!
//! Finds the ZAPD executable when none was given. The search is an ordered
//! list of candidate paths per platform: first existing wins, otherwise the
//! platform fallback is returned unchecked and the runner reports it if it
//! really is missing.

use std::path::{Path, PathBuf};

/// Platform whose build layouts are searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Ninja and Visual Studio build outputs, preferred in this order.
const WINDOWS_CANDIDATES: &[&str] = &[
    "../../build/ZAPD/ZAPD.exe",
    "../../build/ZAPD/Release/ZAPD.exe",
    "../../build/ZAPD/Debug/ZAPD.exe",
    "../../x64/Release/ZAPD.exe",
    "../../x64/Debug/ZAPD.exe",
    "x64/Release/ZAPD.exe",
];
const WINDOWS_FALLBACK: &str = "x64/Release/ZAPD.exe";

const UNIX_CANDIDATES: &[&str] = &["../../build/ZAPD/ZAPD.out", "../ZAPDTR/ZAPD.out"];
const UNIX_FALLBACK: &str = "../ZAPDTR/ZAPD.out";

/// Where the executable came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutableSource {
    /// Given on the command line or in config
    Explicit,
    /// First candidate that exists
    Found,
    /// Nothing existed; last-resort default
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedExecutable {
    pub path: PathBuf,
    pub source: ExecutableSource,
}

#[derive(Debug, Clone)]
pub struct ExtractorLocator {
    candidates: Vec<PathBuf>,
    fallback: PathBuf,
    base_dir: PathBuf,
}

impl ExtractorLocator {
    pub fn for_platform(platform: Platform) -> Self {
        let (candidates, fallback) = match platform {
            Platform::Windows => (WINDOWS_CANDIDATES, WINDOWS_FALLBACK),
            Platform::Unix => (UNIX_CANDIDATES, UNIX_FALLBACK),
        };
        Self {
            candidates: candidates.iter().map(PathBuf::from).collect(),
            fallback: PathBuf::from(fallback),
            base_dir: PathBuf::new(),
        }
    }

    pub fn new(candidates: Vec<PathBuf>, fallback: impl Into<PathBuf>) -> Self {
        Self {
            candidates,
            fallback: fallback.into(),
            base_dir: PathBuf::new(),
        }
    }

    /// Resolve candidates relative to `dir` instead of the working directory.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    pub fn fallback(&self) -> &Path {
        &self.fallback
    }

    /// Pick the executable. Never fails: existence of the fallback is checked
    /// only when the plan runs.
    pub fn resolve(&self, explicit: Option<&Path>) -> ResolvedExecutable {
        if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
            return ResolvedExecutable {
                path: path.to_path_buf(),
                source: ExecutableSource::Explicit,
            };
        }

        self.candidates
            .iter()
            .map(|c| self.base_dir.join(c))
            .find(|p| p.exists())
            .map(|path| ResolvedExecutable {
                path,
                source: ExecutableSource::Found,
            })
            .unwrap_or_else(|| ResolvedExecutable {
                path: self.base_dir.join(&self.fallback),
                source: ExecutableSource::Fallback,
            })
    }
}

impl Default for ExtractorLocator {
    fn default() -> Self {
        Self::for_platform(Platform::current())
    }
}
