// Recase Settings Module
// Optional user settings: title-case small words and the result icon

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::feedback::DEFAULT_ICON_PATH;
use crate::title::{TitleCaseError, TitleCaser, DEFAULT_SMALL_WORDS};
use crate::{Dispatcher, Registry};

/// Environment variable naming a settings file for the launcher binary
pub const CONFIG_ENV: &str = "RECASE_CONFIG";

/// Settings for recase
///
/// Loaded from a TOML file (default: ~/.config/recase/settings.toml).
/// A missing file means defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Minor words for title casing
    small_words: Vec<String>,

    /// Icon path attached to every result item
    icon_path: String,

    /// Path the settings were read from, if any
    source_path: Option<PathBuf>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

impl From<TitleCaseError> for SettingsError {
    fn from(err: TitleCaseError) -> Self {
        SettingsError::InvalidValue(format!("title_case.small_words: {}", err))
    }
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsToml {
    #[serde(default)]
    title_case: Option<TitleCaseSettings>,

    #[serde(default)]
    feedback: Option<FeedbackSettings>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TitleCaseSettings {
    #[serde(default)]
    small_words: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct FeedbackSettings {
    #[serde(default)]
    icon_path: Option<String>,
}

impl Settings {
    /// Default settings: the built-in small words and `icon.png`
    pub fn new() -> Self {
        Self {
            small_words: DEFAULT_SMALL_WORDS.iter().map(|w| w.to_string()).collect(),
            icon_path: DEFAULT_ICON_PATH.to_string(),
            source_path: None,
        }
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        Ok(settings)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(small_words) = toml_settings.title_case.and_then(|t| t.small_words) {
            TitleCaser::new(small_words.as_slice())?;
            settings.small_words = small_words;
        }

        if let Some(icon_path) = toml_settings.feedback.and_then(|f| f.icon_path) {
            if icon_path.trim().is_empty() {
                return Err(SettingsError::InvalidValue(
                    "feedback.icon_path cannot be empty".to_string(),
                ));
            }
            settings.icon_path = icon_path;
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("recase").join("settings.toml"))
    }

    /// Load from default location (~/.config/recase/settings.toml)
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        log::debug!("No settings file found, using defaults");
        Ok(Self::new())
    }

    /// Load `path` if given, otherwise the default location
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => {
                log::debug!("Loading settings from {}", path.display());
                Self::from_file(path)
            }
            None => Self::load_default(),
        }
    }

    /// Load the file named by `RECASE_CONFIG`, falling back to the default location
    pub fn load_from_env() -> Result<Self, SettingsError> {
        let path = std::env::var_os(CONFIG_ENV)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        Self::load(path.as_deref())
    }

    pub fn small_words(&self) -> &[String] {
        &self.small_words
    }

    pub fn icon_path(&self) -> &str {
        &self.icon_path
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn title_caser(&self) -> Result<TitleCaser, SettingsError> {
        Ok(TitleCaser::new(self.small_words.as_slice())?)
    }

    /// Build a dispatcher over the built-in registry using these settings
    pub fn dispatcher(&self) -> Result<Dispatcher, SettingsError> {
        Ok(Dispatcher::new(Registry::builtin(), self.title_caser()?).with_icon_path(&self.icon_path))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# Recase Settings
# Place this file at: ~/.config/recase/settings.toml

[title_case]
# Minor words kept lowercase by Title Case unless first, last,
# or following sub-phrase punctuation. Replaces the built-in list.
small_words = [
    "a", "an", "and", "as", "at", "but", "by", "en", "for", "if", "in",
    "of", "on", "or", "the", "to", "v", "v.", "via", "vs", "vs.",
]

[feedback]
# Icon shown next to every candidate
icon_path = "icon.png"
"#
}
