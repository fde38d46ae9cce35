pub mod preferences;

pub use preferences::{
    AboutPreferences, DialogPreferences, EditorPreferences, FileFilter, Preferences,
    PreferencesError, WindowPreferences,
};
