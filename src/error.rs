use miette::Diagnostic;
use thiserror::Error;

/// Main error type for comicscript operations
#[derive(Error, Diagnostic, Debug)]
pub enum ComicError {
    #[error("Missing required field: title")]
    #[diagnostic(
        code(comic::parse::missing_title),
        help("Add a frontmatter block: ---\\ntitle: My Comic\\n---")
    )]
    MissingTitle,

    #[error("No pages found. Start a page with # Page 1")]
    #[diagnostic(code(comic::parse::empty_document))]
    EmptyDocument,

    #[error("Story text is empty")]
    #[diagnostic(code(comic::parse::empty_input))]
    EmptyInput,

    #[error("Parse error: {message}")]
    #[diagnostic(code(comic::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(comic::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Could not parse {}", .path.display())]
    #[diagnostic(code(comic::parse::failed))]
    Script {
        path: std::path::PathBuf,
        #[related]
        errors: Vec<ComicError>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(comic::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, ComicError>;

/// A failed parse: every structural error found, in detection order.
///
/// Callers never get a partially built comic alongside these.
#[derive(Error, Diagnostic, Debug)]
#[error("Script could not be parsed ({} error(s))", .errors.len())]
#[diagnostic(code(comic::parse::failed))]
pub struct ParseErrors {
    #[related]
    pub errors: Vec<ComicError>,
}

impl ParseErrors {
    pub fn new(errors: Vec<ComicError>) -> Self {
        Self { errors }
    }

    pub fn single(error: ComicError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Human-readable messages, one per error.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    pub fn contains(&self, predicate: impl Fn(&ComicError) -> bool) -> bool {
        self.errors.iter().any(predicate)
    }

    /// Attach the file these errors came from.
    pub fn at(self, path: &std::path::Path) -> ComicError {
        ComicError::Script {
            path: path.to_path_buf(),
            errors: self.errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_preserve_order() {
        let errors = ParseErrors::new(vec![ComicError::MissingTitle, ComicError::EmptyDocument]);

        let messages = errors.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("title"));
        assert!(messages[1].contains("page"));
    }

    #[test]
    fn test_summary_counts_errors() {
        let errors = ParseErrors::single(ComicError::EmptyInput);
        assert_eq!(errors.to_string(), "Script could not be parsed (1 error(s))");
        assert!(errors.contains(|e| matches!(e, ComicError::EmptyInput)));
    }

    #[test]
    fn test_errors_at_path() {
        let error = ParseErrors::single(ComicError::MissingTitle).at(std::path::Path::new("a.md"));

        assert_eq!(error.to_string(), "Could not parse a.md");
        match error {
            ComicError::Script { errors, .. } => assert_eq!(errors.len(), 1),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
