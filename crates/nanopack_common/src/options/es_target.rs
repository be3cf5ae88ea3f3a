/// The language-version baseline the output must stay within. Engine
/// constraints (see [`crate::EngineConstraint`]) can narrow this further.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ESTarget {
  #[default]
  Default,
  EsNext,
  Es5,
  Es2015,
  Es2016,
  Es2017,
  Es2018,
  Es2019,
  Es2020,
  Es2021,
}
