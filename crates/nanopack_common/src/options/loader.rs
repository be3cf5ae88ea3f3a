/// How the engine interprets an input file's contents.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Loader {
  #[default]
  Default,
  Js,
  Jsx,
  Ts,
  Tsx,
  Css,
  Json,
  Text,
  Base64,
  DataUrl,
  File,
  Binary,
}
