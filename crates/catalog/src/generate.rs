//! End-to-end manifest generation: scan, resolve defaults, assemble.

use std::path::PathBuf;

use tracing::info;

use crate::{
    Result,
    assemble::assemble,
    defaults::load_project_defaults,
    scan,
    types::{Marketplace, Overrides},
};

/// Default skills directory, relative to the invocation root.
pub const DEFAULT_SKILLS_DIR: &str = "skills";

/// Inputs for one generator run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Invocation root. Relative paths and `package.json` resolve against it.
    pub root: PathBuf,
    pub skills_dir: PathBuf,
    pub overrides: Overrides,
}

impl GenerateOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            skills_dir: PathBuf::from(DEFAULT_SKILLS_DIR),
            overrides: Overrides::default(),
        }
    }
}

/// Build the marketplace manifest for `opts` without writing it.
pub fn generate(opts: &GenerateOptions) -> Result<Marketplace> {
    let skills = scan::scan_skills(&opts.root, &opts.skills_dir)?;
    let defaults = load_project_defaults(&opts.root);
    let plugin_root = scan::plugin_root(&opts.root, &opts.skills_dir);
    let overrides = opts.overrides.clone().normalized();

    let manifest = assemble(
        &overrides,
        &defaults,
        plugin_root,
        skills,
        &opts.root.join(&opts.skills_dir),
    )?;
    info!(
        name = %manifest.name,
        plugins = manifest.plugins.len(),
        "assembled marketplace"
    );
    Ok(manifest)
}
