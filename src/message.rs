use crate::model::DocumentRef;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Navigation
    SelectBatch(String),
    /// Zero-based position in the semester list
    SelectTerm(usize),
    SelectOption(u32),
    GoBack,
    OpenDocument(DocumentRef),

    // Cursor
    SelectDelta(isize),
    /// Activate the item at this row of the current panel
    Activate(usize),
    ActivateSelected,

    // UI
    ToggleHelp,
    ToggleTheme,
    DismissNotice,
}
