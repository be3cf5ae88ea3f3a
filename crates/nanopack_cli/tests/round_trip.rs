//! Re-parsing the canonical spelling of the map- and list-valued flags
//! yields an equal configuration.

use nanopack_cli::parse_build_options;
use nanopack_common::{BuildOptions, Loader};
use proptest::prelude::*;

fn loader_token(loader: Loader) -> &'static str {
  match loader {
    Loader::Js => "js",
    Loader::Jsx => "jsx",
    Loader::Ts => "ts",
    Loader::Tsx => "tsx",
    Loader::Css => "css",
    Loader::Json => "json",
    Loader::Text => "text",
    Loader::Base64 => "base64",
    Loader::DataUrl => "dataurl",
    Loader::File => "file",
    Loader::Binary => "binary",
    Loader::Default => "default",
  }
}

/// The canonical spelling of the repeatable flags: maps sorted by key,
/// lists in their stored order.
fn canonical_flags(options: &BuildOptions) -> Vec<String> {
  let mut flags = Vec::new();

  let mut defines: Vec<_> = options.define.iter().collect();
  defines.sort();
  for (name, replacement) in defines {
    flags.push(format!("--define:{name}={replacement}"));
  }

  let mut loaders: Vec<_> = options.loader.iter().collect();
  loaders.sort();
  for (ext, loader) in loaders {
    flags.push(format!("--loader:{ext}={}", loader_token(*loader)));
  }

  for external in &options.external {
    flags.push(format!("--external:{external}"));
  }

  flags
}

#[test]
fn printed_maps_and_lists_parse_back_to_the_same_config() {
  let first = parse_build_options(&[
    "--define:DEBUG=true".to_string(),
    "--define:VERSION=\"1.2\"".to_string(),
    "--loader:.txt=text".to_string(),
    "--loader:.png=file".to_string(),
    "--external:react".to_string(),
    "--external:lodash".to_string(),
  ])
  .unwrap();

  let second = parse_build_options(&canonical_flags(&first)).unwrap();
  assert_eq!(first, second);
}

proptest! {
  #[test]
  fn round_trip_holds_for_arbitrary_keys_and_values(
    defines in proptest::collection::hash_map("[A-Za-z_][A-Za-z0-9_]{0,8}", "[A-Za-z0-9_=./-]{0,10}", 0..6),
    loaders in proptest::collection::hash_map("\\.[a-z]{1,5}", prop_oneof![
      Just(Loader::Js), Just(Loader::Ts), Just(Loader::Json), Just(Loader::Text), Just(Loader::File),
    ], 0..4),
    externals in proptest::collection::vec("[A-Za-z@/_-][A-Za-z0-9@/_-]{0,10}", 0..4),
  ) {
    let mut flags = Vec::new();
    for (name, replacement) in &defines {
      flags.push(format!("--define:{name}={replacement}"));
    }
    for (ext, loader) in &loaders {
      flags.push(format!("--loader:{ext}={}", loader_token(*loader)));
    }
    for external in &externals {
      flags.push(format!("--external:{external}"));
    }

    let first = parse_build_options(&flags).unwrap();

    // Everything that went in came out.
    prop_assert_eq!(first.define.len(), defines.len());
    for (name, replacement) in &defines {
      prop_assert_eq!(first.define.get(name), Some(replacement));
    }
    prop_assert_eq!(first.loader.len(), loaders.len());
    prop_assert_eq!(&first.external, &externals);

    // And the canonical spelling re-parses to an equal configuration.
    let second = parse_build_options(&canonical_flags(&first)).unwrap();
    prop_assert_eq!(first, second);
  }
}
