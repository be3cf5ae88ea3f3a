//! Parsing of `--target=` value lists: one language-version baseline plus
//! any number of engine version constraints, in any order.

use itertools::Itertools;
use nanopack_common::{ESTarget, EngineConstraint, EngineName};
use nanopack_error::{FlagError, FlagResult};

/// Engine names are matched as case-sensitive prefixes, so `chrome80` is
/// chrome at version 80. Kept alphabetical; the diagnostic below relies on it.
const ENGINE_PREFIXES: &[(&str, EngineName)] = &[
  ("chrome", EngineName::Chrome),
  ("edge", EngineName::Edge),
  ("firefox", EngineName::Firefox),
  ("ios", EngineName::Ios),
  ("node", EngineName::Node),
  ("safari", EngineName::Safari),
];

fn baseline_for(token: &str) -> Option<ESTarget> {
  Some(match token {
    "esnext" => ESTarget::EsNext,
    "es5" => ESTarget::Es5,
    "es6" | "es2015" => ESTarget::Es2015,
    "es2016" => ESTarget::Es2016,
    "es2017" => ESTarget::Es2017,
    "es2018" => ESTarget::Es2018,
    "es2019" => ESTarget::Es2019,
    "es2020" => ESTarget::Es2020,
    "es2021" => ESTarget::Es2021,
    _ => return None,
  })
}

/// `arg` is the full flag text, only used for error context. The last
/// baseline token wins; engine constraints accumulate in order, duplicate
/// engine names included.
pub(crate) fn parse_targets(
  tokens: &[String],
  arg: &str,
) -> FlagResult<(ESTarget, Vec<EngineConstraint>)> {
  let mut target = ESTarget::Default;
  let mut engines = Vec::new();

  'outer: for token in tokens {
    if let Some(baseline) = baseline_for(&token.to_ascii_lowercase()) {
      target = baseline;
      continue;
    }

    for &(prefix, name) in ENGINE_PREFIXES {
      if let Some(version) = token.strip_prefix(prefix) {
        if version.is_empty() {
          return Err(FlagError::new(format!(
            "Target {token:?} is missing a version number in {arg:?}"
          )));
        }
        engines.push(EngineConstraint { name, version: version.to_string() });
        continue 'outer;
      }
    }

    let patterns: Vec<String> =
      ENGINE_PREFIXES.iter().map(|(prefix, _)| format!("\"{prefix}N\"")).collect();
    return Err(FlagError::with_note(
      format!("Invalid target {token:?} in {arg:?}"),
      format!(
        "Valid values are \"esN\", {}, or {} where N is a version number.",
        patterns[..patterns.len() - 1].iter().join(", "),
        patterns[patterns.len() - 1],
      ),
    ));
  }

  Ok((target, engines))
}
