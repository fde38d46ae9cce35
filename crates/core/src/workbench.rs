use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::command::{Command, WrapMode};
use crate::document::{DocumentError, DocumentSession, SaveOutcome, UNTITLED_TITLE};
use crate::timestamp::local_timestamp;

/// A modal message shown to the user after a failed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: &'static str,
    pub detail: String,
}

impl Notice {
    fn open_failed(err: &DocumentError) -> Self {
        let message = match err {
            DocumentError::Decode { .. } => "File Type Unsupported",
            _ => "Could Not Open File",
        };
        Self {
            title: "File Parsing",
            message,
            detail: err.to_string(),
        }
    }

    fn save_failed(err: &DocumentError) -> Self {
        Self {
            title: "Error",
            message: "Save File Error",
            detail: err.to_string(),
        }
    }

    fn save_as_failed(err: &DocumentError) -> Self {
        Self {
            title: "Error Save File",
            message: "File Save Error",
            detail: err.to_string(),
        }
    }
}

/// A question the workbench is waiting on. The UI renders it as a modal and
/// reports the answer through [`Workbench::answer_close`] or
/// [`Workbench::answer_clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    SaveBeforeClose,
    ConfirmClear,
}

impl Prompt {
    pub fn title(self) -> &'static str {
        match self {
            Prompt::SaveBeforeClose => "Exit App",
            Prompt::ConfirmClear => "Clear",
        }
    }

    pub fn question(self) -> &'static str {
        match self {
            Prompt::SaveBeforeClose => "Do You Want To Save The File",
            Prompt::ConfirmClear => "Do You Want To Clear All?",
        }
    }
}

/// Answer to [`Prompt::SaveBeforeClose`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseChoice {
    Save,
    Discard,
    Cancel,
}

/// 由 UI 工具組提供的能力。 / Capabilities supplied by the UI toolkit.
///
/// The text widget owns the live buffer, the undo history, the caret and the
/// clipboard; the workbench only reaches them through this trait.
pub trait Frontend {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: String);

    fn pick_open_path(&mut self) -> Option<PathBuf>;
    fn pick_save_path(&mut self) -> Option<PathBuf>;

    fn notify_error(&mut self, notice: Notice);
    fn set_title(&mut self, title: &str);

    fn close_window(&mut self);
    fn minimize_window(&mut self);

    fn undo(&mut self);
    fn redo(&mut self);
    fn cut(&mut self);
    fn copy(&mut self);
    fn paste(&mut self);
    fn select_all(&mut self);
    fn insert_at_caret(&mut self, text: &str);
    fn set_wrap(&mut self, mode: WrapMode);

    fn show_about(&mut self);
}

/// Routes commands to the document session and the UI.
#[derive(Debug, Default)]
pub struct Workbench {
    session: DocumentSession,
    prompt: Option<Prompt>,
    wrap: WrapMode,
}

impl Workbench {
    pub fn new(wrap: WrapMode) -> Self {
        Self {
            session: DocumentSession::new(),
            prompt: None,
            wrap,
        }
    }

    pub fn session(&self) -> &DocumentSession {
        &self.session
    }

    pub fn pending_prompt(&self) -> Option<Prompt> {
        self.prompt
    }

    pub fn wrap(&self) -> WrapMode {
        self.wrap
    }

    /// Runs `command`. Ignored while a prompt is waiting for an answer.
    pub fn dispatch<F: Frontend + ?Sized>(&mut self, command: Command, ui: &mut F) {
        if let Some(prompt) = self.prompt {
            debug!(?command, ?prompt, "ignoring command while prompt is open");
            return;
        }
        debug!(?command, "dispatch");
        match command {
            Command::New => self.new_document(ui),
            Command::Open => self.open_document(ui),
            Command::Save => {
                self.save_document(ui);
            }
            Command::SaveAs => {
                self.save_as_document(ui);
            }
            Command::Minimize => ui.minimize_window(),
            Command::Exit => self.request_close(ui),
            Command::Undo => ui.undo(),
            Command::Redo => ui.redo(),
            Command::Clear => self.prompt = Some(Prompt::ConfirmClear),
            Command::Cut => ui.cut(),
            Command::Copy => ui.copy(),
            Command::Paste => ui.paste(),
            Command::SelectAll => ui.select_all(),
            Command::InsertTimestamp => ui.insert_at_caret(&local_timestamp()),
            Command::SetWrap(mode) => {
                self.wrap = mode;
                ui.set_wrap(mode);
            }
            Command::About => ui.show_about(),
        }
    }

    fn new_document<F: Frontend + ?Sized>(&mut self, ui: &mut F) {
        ui.set_text(String::new());
        self.session.reset();
        ui.set_title(UNTITLED_TITLE);
    }

    fn open_document<F: Frontend + ?Sized>(&mut self, ui: &mut F) {
        let Some(path) = ui.pick_open_path() else {
            return;
        };
        match self.session.open(&path) {
            Ok(contents) => {
                ui.set_text(contents);
                ui.set_title(&self.session.title());
            }
            Err(err) => {
                warn!(error = %err, "open failed");
                ui.notify_error(Notice::open_failed(&err));
            }
        }
    }

    /// Returns `true` when the buffer ended up on disk.
    fn save_document<F: Frontend + ?Sized>(&mut self, ui: &mut F) -> bool {
        match self.session.save(ui.text()) {
            Ok(SaveOutcome::Saved) => {
                ui.set_title(&self.session.title());
                true
            }
            Ok(SaveOutcome::NeedsPath) => self.save_as_document(ui),
            Ok(SaveOutcome::SkippedEmpty) => false,
            Err(err) => {
                warn!(error = %err, "save failed");
                ui.notify_error(Notice::save_failed(&err));
                false
            }
        }
    }

    fn save_as_document<F: Frontend + ?Sized>(&mut self, ui: &mut F) -> bool {
        let Some(target) = ui.pick_save_path() else {
            debug!("save-as cancelled");
            return false;
        };
        match self.session.save_as(&target, ui.text()) {
            Ok(SaveOutcome::Saved) => {
                ui.set_title(&self.session.title());
                true
            }
            Ok(_) => false,
            Err(err) => {
                warn!(error = %err, "save-as failed");
                ui.notify_error(Notice::save_as_failed(&err));
                false
            }
        }
    }

    /// Closes right away when the buffer length matches the last save,
    /// otherwise raises [`Prompt::SaveBeforeClose`].
    pub fn request_close<F: Frontend + ?Sized>(&mut self, ui: &mut F) {
        if self.prompt.is_some() {
            return;
        }
        if self.session.is_modified(ui.text()) {
            debug!("buffer modified, asking before close");
            self.prompt = Some(Prompt::SaveBeforeClose);
        } else {
            info!("closing unmodified document");
            ui.close_window();
        }
    }

    pub fn answer_close<F: Frontend + ?Sized>(&mut self, choice: CloseChoice, ui: &mut F) {
        if self.prompt != Some(Prompt::SaveBeforeClose) {
            return;
        }
        self.prompt = None;
        match choice {
            CloseChoice::Save => {
                if self.save_document(ui) {
                    ui.close_window();
                } else {
                    info!("close aborted, buffer was not saved");
                }
            }
            CloseChoice::Discard => {
                info!("closing without saving");
                ui.close_window();
            }
            CloseChoice::Cancel => debug!("close cancelled"),
        }
    }

    pub fn answer_clear<F: Frontend + ?Sized>(&mut self, confirmed: bool, ui: &mut F) {
        if self.prompt != Some(Prompt::ConfirmClear) {
            return;
        }
        self.prompt = None;
        if confirmed {
            ui.set_text(String::new());
        }
    }
}
