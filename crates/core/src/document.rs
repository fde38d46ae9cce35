use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

/// 尚未儲存的文件所使用的視窗標題。 / Window title shown for a document that has never been saved.
pub const UNTITLED_TITLE: &str = "Untitled";

/// 文件載入或儲存時可能發生的錯誤。 / Errors that can occur while loading or saving a document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path} is not a UTF-8 text file")]
    Decode { path: PathBuf },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DocumentError {
    pub fn path(&self) -> &Path {
        match self {
            DocumentError::Read { path, .. }
            | DocumentError::Decode { path }
            | DocumentError::Write { path, .. } => path,
        }
    }
}

/// 儲存要求的結果。 / Result of a save request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// 內容已寫入磁碟。 / Contents were written to disk.
    Saved,
    /// 文件尚無路徑，需改走另存新檔。 / The document has no path yet and must go through save-as.
    NeedsPath,
    /// 緩衝區為空，另存新檔被靜默略過。 / The buffer was empty, so save-as was skipped silently.
    SkippedEmpty,
}

/// 追蹤單一開啟檔案的路徑與最後儲存長度。 / Tracks the single open file's path and its last saved length.
///
/// The live text is owned by the text widget; every operation that needs it
/// receives it as an argument. Modification is approximated by comparing
/// character counts, so a same-length rewrite is treated as unmodified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSession {
    path: Option<PathBuf>,
    saved_len: usize,
}

impl DocumentSession {
    /// 建立一個未命名且從未儲存的工作階段。 / Creates an untitled, never-saved session.
    pub fn new() -> Self {
        Self::default()
    }

    /// 取得文件所屬的檔案路徑（若存在）。 / Retrieves the associated path if the document is linked to one.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 最近一次成功開啟或儲存時的字元數。 / Character count at the last successful open or save.
    pub fn saved_len(&self) -> usize {
        self.saved_len
    }

    /// 視窗標題：檔案路徑或 "Untitled"。 / Window title: the file path, or "Untitled".
    pub fn title(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => UNTITLED_TITLE.to_string(),
        }
    }

    /// 以長度比較判斷是否有未儲存變更。 / Returns whether `text` differs in length from the last saved content.
    pub fn is_modified(&self, text: &str) -> bool {
        char_len(text) != self.saved_len
    }

    /// 從磁碟讀取整個檔案並採用其路徑；失敗時狀態不變。 / Reads the whole file and adopts its path; state is untouched on failure.
    pub fn open(&mut self, path: &Path) -> Result<String, DocumentError> {
        let contents = read_text(path)?;
        self.path = Some(path.to_path_buf());
        self.saved_len = char_len(&contents);
        info!(path = %path.display(), chars = self.saved_len, "opened document");
        Ok(contents)
    }

    /// 重設為未命名文件，並將已儲存長度歸零。 / Resets to an untitled document and zeroes the saved length.
    pub fn reset(&mut self) {
        self.path = None;
        self.saved_len = 0;
        debug!("reset to untitled document");
    }

    /// 將文字寫回目前路徑；若尚無路徑則回報 `NeedsPath`。 / Writes `text` back to the current path, or reports `NeedsPath`.
    pub fn save(&mut self, text: &str) -> Result<SaveOutcome, DocumentError> {
        let Some(path) = self.path.clone() else {
            return Ok(SaveOutcome::NeedsPath);
        };
        write_text(&path, text)?;
        self.saved_len = char_len(text);
        info!(path = %path.display(), chars = self.saved_len, "saved document");
        Ok(SaveOutcome::Saved)
    }

    /// 將文字寫入新路徑，成功後採用該路徑。 / Writes `text` to `target` and adopts it once the write succeeds.
    ///
    /// An empty buffer is never written; the session is left as it was.
    pub fn save_as(&mut self, target: &Path, text: &str) -> Result<SaveOutcome, DocumentError> {
        if text.is_empty() {
            debug!(path = %target.display(), "skipping save-as of empty buffer");
            return Ok(SaveOutcome::SkippedEmpty);
        }
        write_text(target, text)?;
        self.saved_len = char_len(text);
        self.path = Some(target.to_path_buf());
        info!(path = %target.display(), chars = self.saved_len, "saved document under new path");
        Ok(SaveOutcome::Saved)
    }
}

/// 以 Unicode 純量值計算的長度。 / Length in Unicode scalar values.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// 讀取整個檔案為 UTF-8 文字，不做任何行尾轉換。 / Reads a whole file as UTF-8 text without touching line endings.
pub fn read_text(path: &Path) -> Result<String, DocumentError> {
    let bytes = fs::read(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| DocumentError::Decode {
        path: path.to_path_buf(),
    })
}

/// 直接覆寫目標檔案。 / Overwrites the target file in place.
pub fn write_text(path: &Path, text: &str) -> Result<(), DocumentError> {
    fs::write(path, text).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// 若使用者未輸入副檔名，補上預設副檔名。 / Appends the default extension when the chosen name has none.
pub fn with_default_extension(path: PathBuf, extension: &str) -> PathBuf {
    if path.extension().is_some() || extension.is_empty() {
        path
    } else {
        path.with_extension(extension)
    }
}
