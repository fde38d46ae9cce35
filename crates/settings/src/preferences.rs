use plainpad_core::WrapMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PREFERENCES_VERSION: u32 = 1;
const MIN_FONT_SIZE: f32 = 6.0;
const MAX_FONT_SIZE: f32 = 72.0;
const MIN_WINDOW_EXTENT: f32 = 200.0;

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("failed to parse preferences: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub window: WindowPreferences,
    #[serde(default)]
    pub editor: EditorPreferences,
    #[serde(default)]
    pub dialogs: DialogPreferences,
    #[serde(default)]
    pub about: AboutPreferences,
}

fn default_version() -> u32 {
    PREFERENCES_VERSION
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            version: PREFERENCES_VERSION,
            window: WindowPreferences::default(),
            editor: EditorPreferences::default(),
            dialogs: DialogPreferences::default(),
            about: AboutPreferences::default(),
        }
    }
}

impl Preferences {
    /// Parses preferences from JSON, filling gaps with defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, PreferencesError> {
        let mut preferences: Preferences = serde_json::from_str(raw)?;
        preferences.sanitize();
        Ok(preferences)
    }

    pub fn sanitize(&mut self) {
        if self.version == 0 {
            self.version = PREFERENCES_VERSION;
        }
        self.window.sanitize();
        self.editor.sanitize();
        self.dialogs.sanitize();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowPreferences {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_title() -> String {
    "Simple Text Editor".to_string()
}

fn default_width() -> f32 {
    1200.0
}

fn default_height() -> f32 {
    500.0
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl WindowPreferences {
    fn sanitize(&mut self) {
        if self.title.trim().is_empty() {
            self.title = default_title();
        }
        if !self.width.is_finite() || self.width < MIN_WINDOW_EXTENT {
            self.width = default_width();
        }
        if !self.height.is_finite() || self.height < MIN_WINDOW_EXTENT {
            self.height = default_height();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorPreferences {
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default)]
    pub wrap: WrapMode,
}

fn default_font_size() -> f32 {
    13.0
}

impl Default for EditorPreferences {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            wrap: WrapMode::default(),
        }
    }
}

impl EditorPreferences {
    fn sanitize(&mut self) {
        if !self.font_size.is_finite() {
            self.font_size = default_font_size();
        }
        self.font_size = self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }
}

/// A named group of extensions offered by the file pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFilter {
    pub name: String,
    pub extensions: Vec<String>,
}

impl FileFilter {
    fn new(name: &str, extensions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogPreferences {
    #[serde(default = "default_filters")]
    pub filters: Vec<FileFilter>,
    #[serde(default = "default_extension")]
    pub default_extension: String,
}

fn default_filters() -> Vec<FileFilter> {
    vec![
        FileFilter::new("Text Files", &["txt"]),
        FileFilter::new("All Files", &["*"]),
    ]
}

fn default_extension() -> String {
    "txt".to_string()
}

impl Default for DialogPreferences {
    fn default() -> Self {
        Self {
            filters: default_filters(),
            default_extension: default_extension(),
        }
    }
}

impl DialogPreferences {
    fn sanitize(&mut self) {
        self.filters.retain(|filter| !filter.extensions.is_empty());
        if self.filters.is_empty() {
            self.filters = default_filters();
        }
        let trimmed = self.default_extension.trim_start_matches('.').to_string();
        self.default_extension = trimmed;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutPreferences {
    #[serde(default = "default_about_title")]
    pub window_title: String,
    #[serde(default = "default_about_heading")]
    pub heading: String,
    #[serde(default = "default_about_body")]
    pub body: String,
}

fn default_about_title() -> String {
    "About".to_string()
}

fn default_about_heading() -> String {
    "About Editor".to_string()
}

fn default_about_body() -> String {
    "A small plain-text editor: open a file, type, save it back. \
     Nothing more, so expect rough edges."
        .to_string()
}

impl Default for AboutPreferences {
    fn default() -> Self {
        Self {
            window_title: default_about_title(),
            heading: default_about_heading(),
            body: default_about_body(),
        }
    }
}
