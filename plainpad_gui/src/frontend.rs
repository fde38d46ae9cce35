use std::path::PathBuf;

use eframe::egui;
use egui::text::CCursor;
use egui::text_edit::{CCursorRange, TextEditState};
use egui::{Context, Id, ViewportCommand};
use plainpad_core::{
    char_len, cut_selection, replace_selection, selected_text, with_default_extension, Frontend,
    Notice, Selection, WrapMode,
};
use plainpad_settings::DialogPreferences;
use tracing::{debug, warn};

/// Widget-side state: the live buffer plus the bits of window chrome the
/// workbench can toggle.
pub struct EditorSurface {
    pub text: String,
    pub wrap: WrapMode,
    pub notice: Option<Notice>,
    pub show_about: bool,
    /// Set once the workbench has approved closing the window.
    pub closing: bool,
    pub editor_id: Id,
}

impl EditorSurface {
    pub fn new(wrap: WrapMode) -> Self {
        Self {
            text: String::new(),
            wrap,
            notice: None,
            show_about: false,
            closing: false,
            editor_id: Id::new("plainpad_editor"),
        }
    }
}

/// Short-lived adapter handed to the workbench for the duration of one command.
pub struct EguiFrontend<'a> {
    ctx: &'a Context,
    surface: &'a mut EditorSurface,
    dialogs: &'a DialogPreferences,
}

impl<'a> EguiFrontend<'a> {
    pub fn new(
        ctx: &'a Context,
        surface: &'a mut EditorSurface,
        dialogs: &'a DialogPreferences,
    ) -> Self {
        Self {
            ctx,
            surface,
            dialogs,
        }
    }

    fn file_dialog(&self) -> rfd::FileDialog {
        self.dialogs
            .filters
            .iter()
            .fold(rfd::FileDialog::new(), |dialog, filter| {
                dialog.add_filter(&filter.name, filter.extensions.as_slice())
            })
    }

    fn load_state(&self) -> TextEditState {
        TextEditState::load(self.ctx, self.surface.editor_id).unwrap_or_default()
    }

    fn selection(&self, state: &TextEditState) -> Selection {
        match state.ccursor_range() {
            Some(range) => Selection::new(range.primary.index, range.secondary.index),
            None => Selection::caret(char_len(&self.surface.text)),
        }
    }

    fn place_selection(&mut self, mut state: TextEditState, selection: Selection) {
        state.set_ccursor_range(Some(CCursorRange::two(
            CCursor::new(selection.start()),
            CCursor::new(selection.end()),
        )));
        state.store(self.ctx, self.surface.editor_id);
        self.ctx
            .memory_mut(|mem| mem.request_focus(self.surface.editor_id));
    }

    fn step_history(&mut self, forward: bool) {
        let mut state = self.load_state();
        let mut undoer = state.undoer();
        let range = state
            .ccursor_range()
            .unwrap_or_else(|| CCursorRange::one(CCursor::new(char_len(&self.surface.text))));
        let current = (range, self.surface.text.clone());
        let step = if forward {
            undoer.redo(&current).cloned()
        } else {
            undoer.undo(&current).cloned()
        };
        match step {
            Some((range, text)) => {
                self.surface.text = text;
                state.set_ccursor_range(Some(range));
            }
            None => debug!(forward, "edit history has nothing to apply"),
        }
        state.set_undoer(undoer);
        state.store(self.ctx, self.surface.editor_id);
    }

    fn replace_selected(&mut self, insert: &str) {
        let state = self.load_state();
        let selection = self.selection(&state);
        let caret = replace_selection(&mut self.surface.text, selection, insert);
        self.place_selection(state, Selection::caret(caret));
    }
}

impl Frontend for EguiFrontend<'_> {
    fn text(&self) -> &str {
        &self.surface.text
    }

    fn set_text(&mut self, text: String) {
        self.surface.text = text;
        let mut state = self.load_state();
        state.set_undoer(Default::default());
        self.place_selection(state, Selection::caret(0));
    }

    fn pick_open_path(&mut self) -> Option<PathBuf> {
        self.file_dialog().pick_file()
    }

    fn pick_save_path(&mut self) -> Option<PathBuf> {
        self.file_dialog()
            .save_file()
            .map(|path| with_default_extension(path, &self.dialogs.default_extension))
    }

    fn notify_error(&mut self, notice: Notice) {
        self.surface.notice = Some(notice);
    }

    fn set_title(&mut self, title: &str) {
        self.ctx
            .send_viewport_cmd(ViewportCommand::Title(title.to_owned()));
    }

    fn close_window(&mut self) {
        self.surface.closing = true;
        self.ctx.send_viewport_cmd(ViewportCommand::Close);
    }

    fn minimize_window(&mut self) {
        self.ctx.send_viewport_cmd(ViewportCommand::Minimized(true));
    }

    fn undo(&mut self) {
        self.step_history(false);
    }

    fn redo(&mut self) {
        self.step_history(true);
    }

    fn cut(&mut self) {
        let state = self.load_state();
        let selection = self.selection(&state);
        if selection.is_empty() {
            return;
        }
        let (removed, caret) = cut_selection(&mut self.surface.text, selection);
        self.ctx.output_mut(|output| output.copied_text = removed);
        self.place_selection(state, Selection::caret(caret));
    }

    fn copy(&mut self) {
        let state = self.load_state();
        let selection = self.selection(&state);
        if selection.is_empty() {
            return;
        }
        let copied = selected_text(&self.surface.text, selection).to_owned();
        self.ctx.output_mut(|output| output.copied_text = copied);
    }

    fn paste(&mut self) {
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
            Ok(pasted) => self.replace_selected(&pasted),
            Err(err) => warn!(error = %err, "clipboard unavailable"),
        }
    }

    fn select_all(&mut self) {
        let state = self.load_state();
        let selection = Selection::all(&self.surface.text);
        self.place_selection(state, selection);
    }

    fn insert_at_caret(&mut self, text: &str) {
        self.replace_selected(text);
    }

    fn set_wrap(&mut self, mode: WrapMode) {
        self.surface.wrap = mode;
    }

    fn show_about(&mut self) {
        self.surface.show_about = true;
    }
}
