#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SourcesContent {
  #[default]
  Default,
  Include,
  Exclude,
}
