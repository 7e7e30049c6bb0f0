use error_set::error_set;
use std::path::Path;

pub mod compare;
pub mod diff;
pub mod lcs;
pub mod logging;
pub mod render;

pub use compare::{DiffOptions, LineComparison, Whitespace};
pub use diff::{Addition, Deletion, Diff, DiffEntry, NoChange};
pub use lcs::LcsError;

error_set! {
    /// Top-level error for kindling operations
    KindlingError := {
        LcsError(LcsError),
    } || InputError

    /// Errors loading the text to compare
    InputError := {
        #[display("Failed to read {path}: {message}")]
        ReadFailed { path: String, message: String },
        #[display("{path} is not valid UTF-8: {message}")]
        InvalidUtf8 { path: String, message: String },
    }
}

/// Main interface for comparing text artifacts
pub struct Kindling {
    options: DiffOptions,
}

impl Kindling {
    /// Create a comparer with the given options
    pub fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    /// Compare two files line by line
    ///
    /// # Examples
    /// ```no_run
    /// # use kindling::{DiffOptions, Kindling};
    /// let kindling = Kindling::new(DiffOptions::default());
    /// let diff = kindling.compare_files("wrapper.log.1", "wrapper.log").unwrap();
    /// println!("{} lines added", diff.additions().len());
    /// ```
    pub fn compare_files(
        &self,
        original: impl AsRef<Path>,
        modified: impl AsRef<Path>,
    ) -> Result<Diff<String>, KindlingError> {
        let original_text = read_text(original.as_ref())?;
        let modified_text = read_text(modified.as_ref())?;
        self.compare_text(&original_text, &modified_text)
    }

    /// Compare two in-memory texts line by line
    ///
    /// # Examples
    /// ```
    /// # use kindling::{DiffOptions, Kindling};
    /// let kindling = Kindling::new(DiffOptions::default());
    /// let diff = kindling.compare_text("a\nb\n", "a\nc\n").unwrap();
    /// assert_eq!(diff.deletions()[0].value, "b");
    /// assert_eq!(diff.additions()[0].value, "c");
    /// ```
    pub fn compare_text(
        &self,
        original: &str,
        modified: &str,
    ) -> Result<Diff<String>, KindlingError> {
        Ok(compare::diff_lines(original, modified, &self.options)?)
    }
}

/// Read a file as UTF-8 text
fn read_text(path: &Path) -> Result<String, InputError> {
    tracing::debug!(path = %path.display(), "reading input");

    let bytes = std::fs::read(path).map_err(|e| InputError::ReadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    String::from_utf8(bytes).map_err(|e| InputError::InvalidUtf8 {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
