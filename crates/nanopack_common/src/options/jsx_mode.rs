#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum JsxMode {
  #[default]
  Transform,
  Preserve,
}
