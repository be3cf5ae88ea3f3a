#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LegalComments {
  #[default]
  Default,
  None,
  Inline,
  EndOfFile,
  Linked,
  External,
}
