//! User-visible text, resolved by key.
//!
//! Every string the screen renders goes through [`Strings`] so a
//! translation file can replace the built-in English text without touching
//! the UI code. Overrides live in `<config>/mailstart/strings.toml` as
//! flat `key = "text"` entries.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Identifier for one user-visible string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StringKey {
    ScreenTitle,
    ContactsTitle,
    ContactsDescription,
    NotificationsTitle,
    NotificationsDescription,
    NextButton,
    SkipButton,
    AllowAction,
    GrantedLabel,
    LoadingLabel,
}

impl StringKey {
    /// Key as written in the override file.
    pub fn as_str(&self) -> &'static str {
        match self {
            StringKey::ScreenTitle => "screen_title",
            StringKey::ContactsTitle => "contacts_title",
            StringKey::ContactsDescription => "contacts_description",
            StringKey::NotificationsTitle => "notifications_title",
            StringKey::NotificationsDescription => "notifications_description",
            StringKey::NextButton => "next_button",
            StringKey::SkipButton => "skip_button",
            StringKey::AllowAction => "allow_action",
            StringKey::GrantedLabel => "granted_label",
            StringKey::LoadingLabel => "loading_label",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == key)
    }

    const ALL: [StringKey; 10] = [
        StringKey::ScreenTitle,
        StringKey::ContactsTitle,
        StringKey::ContactsDescription,
        StringKey::NotificationsTitle,
        StringKey::NotificationsDescription,
        StringKey::NextButton,
        StringKey::SkipButton,
        StringKey::AllowAction,
        StringKey::GrantedLabel,
        StringKey::LoadingLabel,
    ];

    fn builtin(&self) -> &'static str {
        match self {
            StringKey::ScreenTitle => "A few things before you start",
            StringKey::ContactsTitle => "Contacts",
            StringKey::ContactsDescription => {
                "Allow access to your address book so recipients are \
                 suggested as you type."
            }
            StringKey::NotificationsTitle => "Notifications",
            StringKey::NotificationsDescription => {
                "Allow desktop notifications so you hear about new mail \
                 as it arrives."
            }
            StringKey::NextButton => "Next",
            StringKey::SkipButton => "Skip for now",
            StringKey::AllowAction => "Allow",
            StringKey::GrantedLabel => "Granted",
            StringKey::LoadingLabel => "Checking permissions",
        }
    }
}

/// Errors from loading a string override file.
#[derive(Debug, Error)]
pub enum StringsError {
    #[error("Failed to read strings file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse strings file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unknown string key '{key}' in '{path}'")]
    UnknownKey { path: PathBuf, key: String },
}

/// String catalog: built-in English plus optional file overrides.
#[derive(Debug, Clone, Default)]
pub struct Strings {
    overrides: BTreeMap<StringKey, String>,
}

impl Strings {
    /// Default override file location.
    pub fn overrides_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("mailstart").join("strings.toml")
    }

    /// Loads the catalog, applying overrides from `path` when it exists.
    /// Keys absent from the file keep their built-in text; keys the catalog
    /// doesn't know are rejected so typos don't silently fall back.
    pub fn load(path: &Path) -> Result<Self, StringsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| StringsError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let raw: BTreeMap<String, String> =
            toml::from_str(&content).map_err(|e| StringsError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut overrides = BTreeMap::new();
        for (key, text) in raw {
            let Some(known) = StringKey::from_key(&key) else {
                return Err(StringsError::UnknownKey {
                    path: path.to_path_buf(),
                    key,
                });
            };
            overrides.insert(known, text);
        }

        Ok(Self { overrides })
    }

    /// Resolved text for a key.
    pub fn get(&self, key: StringKey) -> &str {
        self.overrides
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.builtin())
    }
}
