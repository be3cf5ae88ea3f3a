//! Best-effort recovery of user intent from a flag the parser rejected.

use crate::flags::{BARE_FLAGS, COLON_FLAGS, EQUALS_FLAGS};

/// Produce a corrective note for an unrecognized flag, or `None` when no
/// likely mistake can be identified. The checks run in a fixed order and the
/// later separator check overwrites the earlier one when both apply; a flag
/// containing both `=` and `:` can therefore receive a one-sided suggestion.
pub(crate) fn note_for_unrecognized_flag(arg: &str) -> Option<String> {
  if arg == "-o" {
    return Some("Use \"--outfile=\" to configure the output file instead of \"-o\".".to_string());
  }

  if arg == "-v" {
    return Some(
      "Use \"--log-level=verbose\" to generate verbose logs instead of \"-v\".".to_string(),
    );
  }

  if let Some(body) = arg.strip_prefix("--") {
    let mut note = None;

    if let Some(i) = body.find('=') {
      if COLON_FLAGS.contains(&body[..i]) {
        let fix = format!("--{}:{}", &body[..i], &body[i + 1..]);
        note = Some(format!(
          "Use {fix:?} instead of {arg:?}. Flags that can be re-specified multiple times use \":\" instead of \"=\"."
        ));
      }
    }

    if let Some(i) = body.find(':') {
      if EQUALS_FLAGS.contains(&body[..i]) {
        let fix = format!("--{}={}", &body[..i], &body[i + 1..]);
        note = Some(format!(
          "Use {fix:?} instead of {arg:?}. Flags that can only be specified once use \"=\" instead of \":\"."
        ));
      }
    }

    return note;
  }

  if let Some(body) = arg.strip_prefix('-') {
    let mut is_valid = BARE_FLAGS.contains(body);
    let mut fix = format!("-{arg}");

    if let Some(i) = body.find('=') {
      if EQUALS_FLAGS.contains(&body[..i]) {
        is_valid = true;
      } else if COLON_FLAGS.contains(&body[..i]) {
        is_valid = true;
        fix = format!("--{}:{}", &body[..i], &body[i + 1..]);
      }
    }

    if !is_valid {
      if let Some(i) = body.find(':') {
        if COLON_FLAGS.contains(&body[..i]) {
          is_valid = true;
        } else if EQUALS_FLAGS.contains(&body[..i]) {
          is_valid = true;
          fix = format!("--{}={}", &body[..i], &body[i + 1..]);
        }
      }
    }

    if is_valid {
      return Some(format!(
        "Use {fix:?} instead of {arg:?}. Flags are always specified with two dashes instead of one dash."
      ));
    }
  }

  None
}
