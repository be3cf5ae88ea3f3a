use std::path::PathBuf;

use crate::Loader;

/// The module synthesized from standard input when no entry points are
/// given. `resolve_dir` anchors import resolution for its contents.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StdinOptions {
  pub contents: String,
  pub resolve_dir: Option<PathBuf>,
  pub sourcefile: Option<String>,
  pub loader: Loader,
}
