pub mod command;
pub mod document;
pub mod editor;
pub mod timestamp;
pub mod workbench;

pub use command::{
    shortcuts, Command, MenuEntry, MenuSection, Shortcut, ShortcutScope, WrapMode, MENU_LAYOUT,
};
pub use document::{
    char_len, read_text, with_default_extension, write_text, DocumentError, DocumentSession,
    SaveOutcome, UNTITLED_TITLE,
};
pub use editor::{cut_selection, replace_selection, selected_text, Selection};
pub use timestamp::{format_timestamp, local_timestamp};
pub use workbench::{CloseChoice, Frontend, Notice, Prompt, Workbench};
