use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config";
const DEFAULT_CONFIG_DIRECTORY: &str = ".subversion";

pub const TUNNELS_SECTION: &str = "tunnels";

/// Subversion client configuration.
///
/// Lookups read the INI-style `config` file under the configuration
/// directory: an explicit override, or `$HOME/.subversion` when none is
/// set. The value is read-only; an absent or unreadable file behaves like
/// an empty one.
#[derive(Debug, Clone, Default)]
pub struct SvnSettings {
    config_directory: Option<PathBuf>,
}

impl SvnSettings {
    pub fn new(config_directory: Option<PathBuf>) -> Self {
        SvnSettings { config_directory }
    }

    pub fn config_directory(&self) -> Option<&Path> {
        self.config_directory.as_deref()
    }

    /// Looks up a single key under a section of the client config file.
    pub fn property(&self, section: &str, key: &str) -> Option<String> {
        self.section(section).remove(key)
    }

    /// Value of a tunnel scheme under the `tunnels` section.
    pub fn tunnel(&self, name: &str) -> Option<String> {
        self.property(TUNNELS_SECTION, name)
    }

    /// Every key configured under a section, in key order.
    pub fn section(&self, name: &str) -> BTreeMap<String, String> {
        let Some(config_file) = self.config_file() else {
            return BTreeMap::new();
        };

        match std::fs::read_to_string(&config_file) {
            Ok(content) => parse_section(&content, name),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(error) => {
                tracing::warn!(
                    "failed to read subversion config {}: {}",
                    config_file.display(),
                    error
                );
                BTreeMap::new()
            }
        }
    }

    fn config_file(&self) -> Option<PathBuf> {
        match &self.config_directory {
            Some(directory) => Some(directory.join(CONFIG_FILE)),
            None => std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(DEFAULT_CONFIG_DIRECTORY).join(CONFIG_FILE)),
        }
    }
}

fn parse_section(content: &str, name: &str) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();
    let mut in_section = false;

    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            in_section = line[1..line.len() - 1].trim() == name;
            continue;
        }

        if !in_section {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            entries.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::fixture::FileWriteStr;
    use assert_fs::prelude::PathChild;

    const CONFIG: &str = "\
# client configuration
[miscellany]
enable-auto-props = yes

[tunnels]
; rsh is commented out on purpose
foo = ssh -q
bar=ssh -p 2222
empty =
";

    fn settings_with_config(content: &str) -> (assert_fs::TempDir, SvnSettings) {
        let dir = assert_fs::TempDir::new().expect("failed to create temp directory");
        dir.child("config")
            .write_str(content)
            .expect("failed to write config file");
        let settings = SvnSettings::new(Some(dir.path().to_path_buf()));
        (dir, settings)
    }

    #[test]
    fn test_property_reads_the_requested_section() {
        let (_dir, settings) = settings_with_config(CONFIG);

        assert_eq!(settings.tunnel("foo"), Some("ssh -q".to_string()));
        assert_eq!(settings.tunnel("bar"), Some("ssh -p 2222".to_string()));
        assert_eq!(settings.tunnel("empty"), Some(String::new()));
        assert_eq!(
            settings.property("miscellany", "enable-auto-props"),
            Some("yes".to_string())
        );
    }

    #[test]
    fn test_missing_key_or_section_yields_none() {
        let (_dir, settings) = settings_with_config(CONFIG);

        assert_eq!(settings.tunnel("rsh"), None);
        assert_eq!(settings.property("auth", "store-passwords"), None);
    }

    #[test]
    fn test_missing_config_file_behaves_like_an_empty_one() {
        let dir = assert_fs::TempDir::new().unwrap();
        let settings = SvnSettings::new(Some(dir.path().to_path_buf()));

        assert_eq!(settings.tunnel("foo"), None);
        assert!(settings.section(TUNNELS_SECTION).is_empty());
    }

    #[test]
    fn test_section_lists_every_configured_key() {
        let (_dir, settings) = settings_with_config(CONFIG);

        let tunnels = settings.section(TUNNELS_SECTION);
        assert_eq!(
            tunnels.keys().collect::<Vec<_>>(),
            ["bar", "empty", "foo"]
        );
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let (_dir, settings) = settings_with_config("[tunnels]\n\n# a = b\n; c = d\nfoo = ssh\n");

        let tunnels = settings.section(TUNNELS_SECTION);
        assert_eq!(tunnels.len(), 1);
        assert_eq!(tunnels.get("foo"), Some(&"ssh".to_string()));
    }
}
