//! Line ending helpers.
//!
//! [`MemoryDocument`](crate::MemoryDocument) stores text with `'\n'` as the only line break, which
//! is what the line-set planners count lines by. Loading folds CRLF and bare CR into LF and
//! records whether the source used CRLF, so `text_with_line_ending` can hand the text back in its
//! original style.

/// Line break style a document was loaded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `'\n'`
    #[default]
    Lf,
    /// `"\r\n"`
    Crlf,
}

impl LineEnding {
    /// Style of a loaded text: CRLF as soon as one `"\r\n"` occurs.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// Turn a buffer's `'\n'` breaks back into this style.
    pub fn restore(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::Crlf => text.replace('\n', "\r\n"),
        }
    }
}

/// Fold `"\r\n"` and bare `'\r'` into `'\n'`.
pub fn normalize_to_lf(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
