/// 定義一段已排序（start <= end）的字元範圍。 / Represents an ordered selection range, in character indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    start: usize,
    end: usize,
}

impl Selection {
    /// 建立新的選取範圍，會自動將 start/end 排序。 / Creates a selection with automatically ordered bounds.
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// 建立不含選取的游標位置。 / Creates an empty selection at a caret position.
    pub fn caret(position: usize) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// 選取整份文字。 / Selects the whole text.
    pub fn all(text: &str) -> Self {
        Self::new(0, text.chars().count())
    }

    /// 範圍起點。 / Returns the start of the selection.
    pub fn start(&self) -> usize {
        self.start
    }

    /// 範圍終點。 / Returns the end of the selection.
    pub fn end(&self) -> usize {
        self.end
    }

    /// 選取長度。 / Returns the length of the selection.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    fn clamp(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }
}

/// 取得選取範圍內的文字。 / Returns the text covered by the selection.
pub fn selected_text(text: &str, selection: Selection) -> &str {
    let (start, end) = byte_range(text, selection);
    &text[start..end]
}

/// 以給定文字取代選取範圍，回傳新的游標位置。 / Replaces the selection with `insert` and returns the new caret index.
pub fn replace_selection(text: &mut String, selection: Selection, insert: &str) -> usize {
    let selection = selection.clamp(text.chars().count());
    let (start, end) = byte_range(text, selection);
    text.replace_range(start..end, insert);
    selection.start() + insert.chars().count()
}

/// 剪下選取範圍，回傳被移除的文字與游標位置。 / Removes the selection, returning the removed text and the caret index.
pub fn cut_selection(text: &mut String, selection: Selection) -> (String, usize) {
    let selection = selection.clamp(text.chars().count());
    let removed = selected_text(text, selection).to_owned();
    let caret = replace_selection(text, selection, "");
    (removed, caret)
}

fn byte_range(text: &str, selection: Selection) -> (usize, usize) {
    (
        byte_offset(text, selection.start()),
        byte_offset(text, selection.end()),
    )
}

fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}
