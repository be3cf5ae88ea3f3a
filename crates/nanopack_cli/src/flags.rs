//! Which flag names use which value-binding syntax. These tables exist only
//! so the hint generator can recognize near-miss spellings; the parser's own
//! dispatch never consults them.

use phf::phf_set;

/// Flags that take no value at all.
pub static BARE_FLAGS: phf::Set<&'static str> = phf_set! {
  "allow-overwrite",
  "bundle",
  "ignore-annotations",
  "keep-names",
  "metafile",
  "minify",
  "minify-identifiers",
  "minify-syntax",
  "minify-whitespace",
  "preserve-symlinks",
  "sourcemap",
  "splitting",
  "watch",
};

/// Flags that take a single `=value` and may only be specified once.
pub static EQUALS_FLAGS: phf::Set<&'static str> = phf_set! {
  "asset-names",
  "banner",
  "charset",
  "chunk-names",
  "color",
  "conditions",
  "entry-names",
  "footer",
  "format",
  "global-name",
  "jsx",
  "jsx-factory",
  "jsx-fragment",
  "legal-comments",
  "loader",
  "log-level",
  "log-limit",
  "main-fields",
  "outbase",
  "outdir",
  "outfile",
  "platform",
  "public-path",
  "resolve-extensions",
  "source-root",
  "sourcefile",
  "sourcemap",
  "sources-content",
  "target",
  "tree-shaking",
  "tsconfig",
  "tsconfig-raw",
};

/// Flags that carry a repeatable `:key=value` (or `:value`) payload.
pub static COLON_FLAGS: phf::Set<&'static str> = phf_set! {
  "banner",
  "define",
  "external",
  "footer",
  "inject",
  "loader",
  "out-extension",
  "pure",
};
