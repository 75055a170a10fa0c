//! Error adapter for converting ClassforgeError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use classforge::ClassforgeError;

/// Adapter wrapping a [`ClassforgeError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a ClassforgeError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ClassforgeError::Io(_) => "classforge::io",
            ClassforgeError::Json(_) => "classforge::json",
            ClassforgeError::Model(_) => "classforge::model",
            ClassforgeError::Resolve(_) => "classforge::resolve",
            ClassforgeError::Scaffold(_) => "classforge::scaffold",
            ClassforgeError::Archive(_) => "classforge::archive",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help: &str = match &self.0 {
            ClassforgeError::Json(_) => {
                "the input must be a diagram model document, or a wrapper object with a `model` key"
            }
            ClassforgeError::Scaffold(_) => {
                "set `generator.scaffold_dir` in the configuration to an existing directory, or remove it"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use classforge::ClassforgeError;
    use miette::Diagnostic;

    use super::ErrorAdapter;

    #[test]
    fn scaffold_errors_carry_a_code_and_help() {
        let err = ClassforgeError::Scaffold("scaffold directory not found".to_string());
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "classforge::scaffold");
        assert!(adapter.help().is_some());
        assert!(adapter.to_string().contains("scaffold directory not found"));
    }

    #[test]
    fn io_errors_have_no_help() {
        let err = ClassforgeError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "classforge::io");
        assert!(adapter.help().is_none());
    }
}
