use crate::error::OpenError;
use crate::model::DocumentRef;
use std::path::PathBuf;

/// Hands a document reference to whatever presents it. The application never
/// looks inside the document.
pub trait DocumentOpener {
    /// Open the document, returning the resolved target that was opened.
    fn open(&mut self, document: &DocumentRef) -> Result<String, OpenError>;
}

/// Opens documents with the system default handler.
pub struct SystemOpener {
    root: PathBuf,
}

impl SystemOpener {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// URIs with a scheme pass through; paths are rooted under the document
    /// root, with any leading `/` treated as the root itself.
    pub fn resolve(&self, document: &DocumentRef) -> String {
        let reference = document.reference();
        if has_scheme(reference) {
            return reference.to_string();
        }
        self.root
            .join(reference.trim_start_matches('/'))
            .to_string_lossy()
            .into_owned()
    }
}

impl DocumentOpener for SystemOpener {
    fn open(&mut self, document: &DocumentRef) -> Result<String, OpenError> {
        let target = self.resolve(document);
        tracing::info!(target = %target, "opening document");
        open::that(&target).map_err(|source| OpenError {
            target: target.clone(),
            source,
        })?;
        Ok(target)
    }
}

/// RFC 3986 scheme before the first `:`. Single letters are drive paths.
fn has_scheme(reference: &str) -> bool {
    let Some((scheme, _)) = reference.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    scheme.len() > 1
        && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Records opened documents instead of launching anything.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingOpener {
    pub opened: Vec<String>,
    pub fail: bool,
}

#[cfg(test)]
impl DocumentOpener for RecordingOpener {
    fn open(&mut self, document: &DocumentRef) -> Result<String, OpenError> {
        if self.fail {
            return Err(OpenError {
                target: document.reference().to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no handler"),
            });
        }
        self.opened.push(document.reference().to_string());
        Ok(document.reference().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_relative_references_are_rooted() {
        let opener = SystemOpener::new(PathBuf::from("/srv/site/public"));
        let doc = DocumentRef::new("/pdfs/2023-2027/Semester 1/EYS_Parth.pdf");
        assert_eq!(
            Path::new(&opener.resolve(&doc)),
            Path::new("/srv/site/public/pdfs/2023-2027/Semester 1/EYS_Parth.pdf")
        );
    }

    #[test]
    fn test_uris_pass_through() {
        let opener = SystemOpener::new(PathBuf::from("public"));
        let doc = DocumentRef::new("https://example.org/pdfs/report.pdf");
        assert_eq!(opener.resolve(&doc), "https://example.org/pdfs/report.pdf");
    }

    #[test]
    fn test_single_colon_uris_pass_through() {
        let opener = SystemOpener::new(PathBuf::from("public"));
        for uri in [
            "mailto:office@example.org",
            "urn:isbn:0451450523",
            "data:application/pdf;base64,JVBERi0=",
            "file:/tmp/a.pdf",
        ] {
            assert_eq!(opener.resolve(&DocumentRef::new(uri)), uri);
        }
    }

    #[test]
    fn test_drive_letter_is_a_path() {
        let opener = SystemOpener::new(PathBuf::from("public"));
        let resolved = opener.resolve(&DocumentRef::new("C:\\reports\\a.pdf"));
        assert!(resolved.starts_with("public"));
    }

    #[test]
    fn test_scheme_detection() {
        assert!(has_scheme("file:///tmp/a.pdf"));
        assert!(has_scheme("svn+ssh://host/a"));
        assert!(has_scheme("mailto:someone@example.org"));
        assert!(!has_scheme("/pdfs/a://b.pdf"));
        assert!(!has_scheme("://nothing"));
        assert!(!has_scheme("1ab:x"));
        assert!(!has_scheme("c:/reports/a.pdf"));
        assert!(!has_scheme("pdfs/a.pdf"));
        assert!(!has_scheme("Semester 1: Notes.pdf"));
    }
}
