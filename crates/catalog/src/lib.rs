//! Skills marketplace catalog: discovery, metadata parsing, defaults, and
//! manifest assembly.
//!
//! A skills directory holds one subdirectory per skill, each with a `SKILL.md`
//! whose `---` header carries `key: value` metadata. The pipeline scans those
//! directories, merges catalog-level defaults from an optional `package.json`,
//! and produces a `.claude-plugin/marketplace.json` manifest.

pub mod assemble;
pub mod defaults;
pub mod error;
pub mod frontmatter;
pub mod generate;
pub mod scan;
pub mod types;
pub mod writer;

pub use error::{Error, Result};
