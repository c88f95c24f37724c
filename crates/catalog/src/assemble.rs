use std::path::Path;

use crate::{
    Error, Result,
    defaults::ProjectDefaults,
    types::{ManifestMetadata, Marketplace, Overrides, Owner, SkillEntry},
};

/// Combine caller overrides, project defaults and scanned skills into a
/// marketplace manifest.
///
/// Overrides win over defaults field by field. `plugins` keeps scan order.
/// An empty `skills` list is an error: an empty marketplace is never produced.
pub fn assemble(
    overrides: &Overrides,
    defaults: &ProjectDefaults,
    plugin_root: String,
    skills: Vec<SkillEntry>,
    skills_path: &Path,
) -> Result<Marketplace> {
    if skills.is_empty() {
        return Err(Error::no_skills_found(skills_path));
    }

    let pick = |explicit: &Option<String>, fallback: &str| {
        explicit.clone().unwrap_or_else(|| fallback.to_string())
    };

    Ok(Marketplace {
        name: pick(&overrides.name, &defaults.name),
        owner: Owner {
            name: pick(&overrides.owner, &defaults.owner),
            email: overrides.email.clone().or_else(|| defaults.email.clone()),
        },
        metadata: ManifestMetadata {
            description: pick(&overrides.description, &defaults.description),
            plugin_root,
        },
        plugins: skills,
    })
}
