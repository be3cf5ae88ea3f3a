use std::io;
use std::path::{Path, PathBuf};

/// The parts of the file system the CLI layer touches directly. Everything
/// else (reading modules, writing bundles) happens inside the build engine.
pub trait FileSystem {
  /// Resolve `path` against the working directory. Returns `None` when the
  /// path cannot be turned into an absolute path (e.g. it is empty).
  fn absolute(&self, path: &Path) -> Option<PathBuf>;

  fn create_dir_all(&self, dir: &Path) -> io::Result<()>;

  fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}
