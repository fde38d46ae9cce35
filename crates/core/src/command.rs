use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// 文字換行模式。 / Line wrapping applied by the text widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapMode {
    None,
    Character,
    #[default]
    Word,
}

impl WrapMode {
    pub const ALL: [WrapMode; 3] = [WrapMode::None, WrapMode::Character, WrapMode::Word];

    pub fn label(self) -> &'static str {
        match self {
            WrapMode::None => "None",
            WrapMode::Character => "Character",
            WrapMode::Word => "Word",
        }
    }
}

/// Every action reachable from the menu bar or a keyboard accelerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    New,
    Open,
    Save,
    SaveAs,
    Minimize,
    Exit,
    Undo,
    Redo,
    Clear,
    Cut,
    Copy,
    Paste,
    SelectAll,
    InsertTimestamp,
    SetWrap(WrapMode),
    About,
}

/// 快捷鍵生效的範圍。 / Where a shortcut is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutScope {
    /// Active anywhere in the main window.
    Window,
    /// Active only while the text widget has keyboard focus.
    TextWidget,
}

/// A Ctrl+letter accelerator owned by the application (as opposed to the
/// ones the text widget already handles natively, such as Ctrl+Z).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub key: char,
    pub scope: ShortcutScope,
    pub command: Command,
}

static SHORTCUTS: Lazy<Vec<Shortcut>> = Lazy::new(|| {
    vec![
        Shortcut {
            key: 'n',
            scope: ShortcutScope::Window,
            command: Command::New,
        },
        Shortcut {
            key: 'o',
            scope: ShortcutScope::Window,
            command: Command::Open,
        },
        Shortcut {
            key: 's',
            scope: ShortcutScope::Window,
            command: Command::Save,
        },
        Shortcut {
            key: 'q',
            scope: ShortcutScope::Window,
            command: Command::Exit,
        },
        Shortcut {
            key: 'a',
            scope: ShortcutScope::TextWidget,
            command: Command::SelectAll,
        },
    ]
});

/// Returns the accelerator table.
pub fn shortcuts() -> &'static [Shortcut] {
    SHORTCUTS.as_slice()
}

impl Command {
    /// 依照 Ctrl+字母 查找指令；`text_focused` 決定文字元件範圍的快捷鍵是否生效。
    /// / Resolves a Ctrl+letter press; text-widget shortcuts only fire when `text_focused`.
    pub fn from_shortcut(key: char, text_focused: bool) -> Option<Command> {
        let key = key.to_ascii_lowercase();
        shortcuts()
            .iter()
            .find(|shortcut| {
                shortcut.key == key
                    && (shortcut.scope == ShortcutScope::Window || text_focused)
            })
            .map(|shortcut| shortcut.command)
    }
}

/// One entry of a drop-down menu.
#[derive(Debug, Clone)]
pub enum MenuEntry {
    Item {
        label: &'static str,
        command: Command,
        accelerator: Option<&'static str>,
    },
    /// A group of mutually exclusive wrap modes, rendered as radio buttons.
    WrapChoices { label: &'static str },
    Separator,
}

impl MenuEntry {
    const fn item(label: &'static str, command: Command) -> Self {
        MenuEntry::Item {
            label,
            command,
            accelerator: None,
        }
    }

    const fn with_accel(label: &'static str, command: Command, accelerator: &'static str) -> Self {
        MenuEntry::Item {
            label,
            command,
            accelerator: Some(accelerator),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MenuSection {
    pub title: &'static str,
    pub entries: Vec<MenuEntry>,
}

impl MenuSection {
    fn new(title: &'static str, entries: Vec<MenuEntry>) -> Self {
        Self { title, entries }
    }
}

/// Menu bar layout, left to right.
pub static MENU_LAYOUT: Lazy<Vec<MenuSection>> = Lazy::new(|| {
    vec![
        MenuSection::new(
            "File",
            vec![
                MenuEntry::with_accel("New", Command::New, "Ctrl+N"),
                MenuEntry::with_accel("Open", Command::Open, "Ctrl+O"),
                MenuEntry::with_accel("Save", Command::Save, "Ctrl+S"),
                MenuEntry::item("Save As...", Command::SaveAs),
                MenuEntry::Separator,
                MenuEntry::item("Minimize", Command::Minimize),
                MenuEntry::with_accel("Exit", Command::Exit, "Ctrl+Q"),
            ],
        ),
        MenuSection::new(
            "Edit",
            vec![
                MenuEntry::with_accel("Undo", Command::Undo, "Ctrl+Z"),
                MenuEntry::with_accel("Redo", Command::Redo, "Ctrl+Y"),
                MenuEntry::item("Clear", Command::Clear),
                MenuEntry::Separator,
                MenuEntry::with_accel("Cut", Command::Cut, "Ctrl+X"),
                MenuEntry::with_accel("Copy", Command::Copy, "Ctrl+C"),
                MenuEntry::with_accel("Paste", Command::Paste, "Ctrl+V"),
                MenuEntry::Separator,
                MenuEntry::with_accel("Select All", Command::SelectAll, "Ctrl+A"),
                MenuEntry::item("Date/Time", Command::InsertTimestamp),
            ],
        ),
        MenuSection::new("Format", vec![MenuEntry::WrapChoices { label: "Wrap" }]),
        MenuSection::new("?", vec![MenuEntry::item("About", Command::About)]),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_shortcuts_resolve_regardless_of_focus() {
        assert_eq!(Command::from_shortcut('n', false), Some(Command::New));
        assert_eq!(Command::from_shortcut('O', false), Some(Command::Open));
        assert_eq!(Command::from_shortcut('s', true), Some(Command::Save));
        assert_eq!(Command::from_shortcut('q', false), Some(Command::Exit));
    }

    #[test]
    fn select_all_is_scoped_to_text_widget() {
        assert_eq!(Command::from_shortcut('a', false), None);
        assert_eq!(Command::from_shortcut('a', true), Some(Command::SelectAll));
    }

    #[test]
    fn unbound_letters_resolve_to_nothing() {
        assert_eq!(Command::from_shortcut('z', true), None);
        assert_eq!(Command::from_shortcut('k', false), None);
    }

    #[test]
    fn menu_layout_lists_file_edit_format_help() {
        let titles: Vec<_> = MENU_LAYOUT.iter().map(|section| section.title).collect();
        assert_eq!(titles, ["File", "Edit", "Format", "?"]);

        let file_commands: Vec<_> = MENU_LAYOUT[0]
            .entries
            .iter()
            .filter_map(|entry| match entry {
                MenuEntry::Item { command, .. } => Some(*command),
                _ => None,
            })
            .collect();
        assert_eq!(
            file_commands,
            [
                Command::New,
                Command::Open,
                Command::Save,
                Command::SaveAs,
                Command::Minimize,
                Command::Exit
            ]
        );
    }

    #[test]
    fn every_shortcut_appears_in_the_menu_with_its_accelerator() {
        for shortcut in shortcuts() {
            let expected = format!("Ctrl+{}", shortcut.key.to_ascii_uppercase());
            let found = MENU_LAYOUT.iter().flat_map(|s| s.entries.iter()).any(|entry| {
                matches!(entry, MenuEntry::Item { command, accelerator: Some(accel), .. }
                    if *command == shortcut.command && *accel == expected)
            });
            assert!(found, "missing menu entry for {:?}", shortcut.command);
        }
    }

    #[test]
    fn wrap_mode_defaults_to_word() {
        assert_eq!(WrapMode::default(), WrapMode::Word);
        assert_eq!(WrapMode::ALL.map(WrapMode::label), ["None", "Character", "Word"]);
    }
}
