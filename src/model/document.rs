/// A reference to a static document hosted outside the application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRef {
    reference: String,
}

impl DocumentRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }

    /// The stored path or URI, untouched.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Final path segment of the reference, e.g. `EYS_Parth.pdf`.
    pub fn display_name(&self) -> &str {
        let trimmed = self.reference.trim_end_matches('/');
        match trimmed.rsplit('/').next() {
            Some(name) if !name.is_empty() => name,
            _ => &self.reference,
        }
    }

    pub fn extension(&self) -> Option<&str> {
        let name = self.display_name();
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            None
        } else {
            Some(ext)
        }
    }

    pub fn get_icon(&self) -> &str {
        match self.extension().map(|e| e.to_ascii_lowercase()).as_deref() {
            Some("pdf") => "📕",
            Some("doc" | "docx") => "📘",
            Some("ppt" | "pptx") => "📙",
            Some("png" | "jpg" | "jpeg") => "🖼",
            _ => "📄",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_is_final_segment() {
        let doc = DocumentRef::new("/pdfs/2023-2027/Semester 2/Data Lens/DL_Tourism.pdf");
        assert_eq!(doc.display_name(), "DL_Tourism.pdf");
        assert_eq!(doc.extension(), Some("pdf"));
    }

    #[test]
    fn test_display_name_without_slashes_is_whole_reference() {
        let doc = DocumentRef::new("report.pdf");
        assert_eq!(doc.display_name(), "report.pdf");
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let doc = DocumentRef::new("https://example.org/reports/");
        assert_eq!(doc.display_name(), "reports");
        assert_eq!(doc.extension(), None);
    }

    #[test]
    fn test_pdf_icon_is_case_insensitive() {
        assert_eq!(DocumentRef::new("/a/B.PDF").get_icon(), "📕");
        assert_eq!(DocumentRef::new("/a/notes").get_icon(), "📄");
    }
}
