//! Skill directory scanning.
//!
//! Every direct subdirectory of the skills directory that contains a
//! `SKILL.md` becomes one [`SkillEntry`]. Entries keep directory-listing order.

use std::path::{Component, Path};

use tracing::{info, warn};

use crate::{
    Error, Result,
    frontmatter::{Frontmatter, parse_frontmatter},
    types::{PluginAuthor, SkillEntry},
};

/// File name of the metadata document inside each skill directory.
pub const SKILL_FILE: &str = "SKILL.md";

/// Scan `skills_dir` (resolved against `root`) for skill directories.
///
/// Fails if the directory does not exist. Subdirectories without a readable
/// `SKILL.md` are skipped with a warning.
pub fn scan_skills(root: &Path, skills_dir: &Path) -> Result<Vec<SkillEntry>> {
    let base = root.join(skills_dir);
    if !base.is_dir() {
        return Err(Error::skills_dir_not_found(&base));
    }

    let mut skills = Vec::new();
    for entry in std::fs::read_dir(&base)?.flatten() {
        let skill_dir = entry.path();
        if !skill_dir.is_dir() {
            continue;
        }

        let skill_md = skill_dir.join(SKILL_FILE);
        if !skill_md.is_file() {
            warn!(dir = %skill_dir.display(), "skipping directory without SKILL.md");
            continue;
        }
        let content = match std::fs::read(&skill_md) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                warn!(path = %skill_md.display(), %e, "failed to read SKILL.md, skipping");
                continue;
            },
        };

        let dir_name = entry.file_name().to_string_lossy().into_owned();
        let source = relative_source(root, &skill_dir);
        let skill = entry_from_frontmatter(&dir_name, source, &parse_frontmatter(&content));
        info!(name = %skill.name, "found skill");
        skills.push(skill);
    }

    Ok(skills)
}

/// Build a plugin entry from a parsed header.
///
/// Empty header values count as missing.
pub fn entry_from_frontmatter(dir_name: &str, source: String, fm: &Frontmatter) -> SkillEntry {
    let field = |key: &str| fm.get(key).filter(|v| !v.is_empty()).cloned();

    let name = field("name").unwrap_or_else(|| dir_name.to_string());
    let description = field("description").unwrap_or_else(|| format!("Skill: {name}"));
    let keywords = field("keywords")
        .map(|raw| split_keywords(&raw))
        .filter(|k| !k.is_empty());

    SkillEntry {
        name,
        source,
        description,
        strict: false,
        version: field("version"),
        author: field("author").map(|name| PluginAuthor { name }),
        keywords,
        category: field("category"),
    }
}

/// Split a comma-separated list, trimming each item and dropping empty ones.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}

/// `./`-prefixed path of `path` relative to `root`, using `/` separators.
///
/// Paths outside `root` are returned as given.
pub fn relative_source(root: &Path, path: &Path) -> String {
    let Ok(rel) = path.strip_prefix(root) else {
        return path.to_string_lossy().into_owned();
    };

    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(p) => Some(p.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        ".".to_string()
    } else {
        format!("./{}", parts.join("/"))
    }
}

/// `pluginRoot` value for a skills directory: `./` plus its final component
/// after `.` and `..` are resolved lexically.
pub fn plugin_root(root: &Path, skills_dir: &Path) -> String {
    let mut parts: Vec<String> = Vec::new();
    for component in root.join(skills_dir).components() {
        match component {
            Component::Normal(p) => parts.push(p.to_string_lossy().into_owned()),
            Component::ParentDir => {
                parts.pop();
            },
            _ => {},
        }
    }
    match parts.last() {
        Some(name) => format!("./{name}"),
        None => ".".to_string(),
    }
}
