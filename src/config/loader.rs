//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RomexError, RomexResult};

use super::types::Config;

/// Project-local config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "romex.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Effective configuration plus where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the settings were read from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RomexResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| RomexError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RomexError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration file and apply environment overrides.
///
/// An explicit path must exist. Otherwise `romex.toml` in `cwd` is tried,
/// then the user config directory, then built-in defaults.
pub fn load_or_default(explicit: Option<&Path>, cwd: &Path) -> RomexResult<LoadedConfig> {
    let source = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project = cwd.join(PROJECT_CONFIG_FILE);
            if project.is_file() {
                Some(project)
            } else {
                dirs::config_dir()
                    .map(|dir| dir.join("romex").join("config.toml"))
                    .filter(|path| path.is_file())
            }
        }
    };

    let (config, warnings) = match &source {
        Some(path) => load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        source,
        warnings,
    })
}

/// Apply environment variable overrides (ROMEX_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable source. Empty values are ignored.
pub fn with_env_overrides_from<F>(mut config: Config, var: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| var(key).filter(|v| !v.trim().is_empty());

    if let Some(path) = get("ROMEX_ZAPD") {
        config.extractor.path = Some(PathBuf::from(path));
    }

    if let Some(root) = get("ROMEX_XML_ROOT") {
        config.extractor.xml_root = PathBuf::from(root);
    }

    if let Some(ver) = get("ROMEX_PORT_VER") {
        config.archive.port_version = Some(ver);
    }

    if let Some(dir) = get("ROMEX_SEARCH_DIR") {
        config.discovery.search_dir = PathBuf::from(dir);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "extractor",
        "path",
        "xml_root",
        "assets_dir",
        "archive",
        "custom_assets_path",
        "custom_otr_file",
        "otr_file",
        "port_version",
        "discovery",
        "search_dir",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn unknown_keys_become_warnings_with_suggestions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("romex.toml");
        fs::write(&path, "[archive]\nport_verison = \"1.0\"\n").unwrap();

        let (config, warnings) = load_with_warnings(&path).unwrap();
        assert_eq!(config.archive.port_version, None);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "port_verison");
        assert_eq!(warnings[0].line, Some(2));
        assert_eq!(warnings[0].suggestion.as_deref(), Some("port_version"));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("romex.toml");
        fs::write(&path, "[extractor\npath = 1").unwrap();

        let err = load_with_warnings(&path).unwrap_err();
        assert!(matches!(err, RomexError::Config { .. }));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = load_or_default(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, RomexError::UnreadableFile { .. }));
    }

    #[test]
    fn project_file_is_picked_up_from_cwd() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "[discovery]\nsearch_dir = \"roms\"\n",
        )
        .unwrap();

        let loaded = load_or_default(None, dir.path()).unwrap();
        assert_eq!(
            loaded.source.as_deref(),
            Some(dir.path().join(PROJECT_CONFIG_FILE).as_path())
        );
        // ROMEX_SEARCH_DIR from the test environment could still win here
        if std::env::var_os("ROMEX_SEARCH_DIR").is_none() {
            assert_eq!(loaded.config.discovery.search_dir, PathBuf::from("roms"));
        }
    }

    #[test]
    fn env_overrides_replace_file_values() {
        let vars: HashMap<&str, &str> = [
            ("ROMEX_ZAPD", "/opt/zapd/ZAPD.out"),
            ("ROMEX_XML_ROOT", "xml"),
            ("ROMEX_PORT_VER", "8.0.0"),
            ("ROMEX_SEARCH_DIR", ""),
        ]
        .into_iter()
        .collect();

        let config = with_env_overrides_from(Config::default(), |key| {
            vars.get(key).map(|v| v.to_string())
        });
        assert_eq!(
            config.extractor.path,
            Some(PathBuf::from("/opt/zapd/ZAPD.out"))
        );
        assert_eq!(config.extractor.xml_root, PathBuf::from("xml"));
        assert_eq!(config.archive.port_version.as_deref(), Some("8.0.0"));
        assert_eq!(config.discovery.search_dir, PathBuf::from("."));
    }

    #[test]
    fn levenshtein_basics() {
        assert_eq!(levenshtein("path", "path"), 0);
        assert_eq!(levenshtein("pth", "path"), 1);
        assert_eq!(suggest_key("zzzzzzzz"), None);
    }
}
