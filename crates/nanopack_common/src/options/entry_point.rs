/// An entry point spelled as `output-path=input-path`, letting the user pick
/// where the output for that input lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
  pub output_path: String,
  pub input_path: String,
}
