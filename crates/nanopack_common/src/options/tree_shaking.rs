#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TreeShaking {
  #[default]
  Default,
  True,
  False,
}
