use std::io;
use std::path::{Path, PathBuf};

use sugar_path::SugarPath;

use crate::FileSystem;

#[derive(Debug, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn absolute(&self, path: &Path) -> Option<PathBuf> {
    if path.as_os_str().is_empty() {
      return None;
    }
    Some(dunce::simplified(&path.absolutize()).to_path_buf())
  }

  fn create_dir_all(&self, dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(dir)
  }

  fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
    std::fs::write(path, contents)
  }
}
