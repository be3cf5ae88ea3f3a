#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
  #[default]
  Default,
  Ascii,
  Utf8,
}
