use std::fmt;

/// A fatal flag-parsing error: one message line plus an optional note that
/// explains how to fix the flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagError {
  pub text: String,
  pub note: Option<String>,
}

impl FlagError {
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: text.into(), note: None }
  }

  pub fn with_note(text: impl Into<String>, note: impl Into<String>) -> Self {
    let note = note.into();
    Self { text: text.into(), note: if note.is_empty() { None } else { Some(note) } }
  }
}

impl fmt::Display for FlagError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.text)
  }
}

impl std::error::Error for FlagError {}

pub type FlagResult<T> = Result<T, FlagError>;
