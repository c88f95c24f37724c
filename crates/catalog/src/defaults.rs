//! Catalog-level defaults from the project's `package.json`.

use std::path::Path;

use {serde::Deserialize, tracing::debug};

/// Project descriptor looked up at the invocation root.
pub const PACKAGE_FILE: &str = "package.json";

pub const DEFAULT_NAME: &str = "skills-marketplace";
pub const DEFAULT_OWNER: &str = "Skills Team";
pub const DEFAULT_DESCRIPTION: &str = "A collection of Claude Code skills";

/// The subset of `package.json` used for defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageJson {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<PackageAuthor>,
}

/// npm allows `author` as a string or an object with `name`/`email`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PackageAuthor {
    Simple(String),
    Object {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        email: Option<String>,
    },
}

/// Defaults for the catalog-level manifest fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDefaults {
    pub name: String,
    pub owner: String,
    pub email: Option<String>,
    pub description: String,
}

impl Default for ProjectDefaults {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            owner: DEFAULT_OWNER.to_string(),
            email: None,
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl ProjectDefaults {
    /// Compute defaults from an optional descriptor, falling back per field.
    pub fn from_descriptor(pkg: Option<&PackageJson>) -> Self {
        let mut defaults = Self::default();
        let Some(pkg) = pkg else {
            return defaults;
        };

        if let Some(name) = non_empty(&pkg.name) {
            defaults.name = sanitize_name(name);
        }
        if let Some(description) = non_empty(&pkg.description) {
            defaults.description = description.to_string();
        }
        match &pkg.author {
            Some(PackageAuthor::Simple(name)) if !name.trim().is_empty() => {
                defaults.owner = name.clone();
            },
            Some(PackageAuthor::Object { name, email }) => {
                if let Some(name) = non_empty(name) {
                    defaults.owner = name.to_string();
                    defaults.email = non_empty(email).map(String::from);
                }
            },
            _ => {},
        }
        defaults
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Lowercase `name` and replace every character outside `[a-z0-9-]` with `-`.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Read and parse `package.json` under `root`.
///
/// Returns `None` if the file is missing or can't be parsed.
pub fn read_package_json(root: &Path) -> Option<PackageJson> {
    let path = root.join(PACKAGE_FILE);
    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            debug!(path = %path.display(), %e, "no usable package.json, using built-in defaults");
            return None;
        },
    };
    match serde_json::from_str(&content) {
        Ok(pkg) => Some(pkg),
        Err(e) => {
            debug!(path = %path.display(), %e, "ignoring malformed package.json");
            None
        },
    }
}

/// Resolve project defaults for `root`. Never fails.
pub fn load_project_defaults(root: &Path) -> ProjectDefaults {
    let defaults = ProjectDefaults::from_descriptor(read_package_json(root).as_ref());
    debug!(
        name = %defaults.name,
        owner = %defaults.owner,
        "resolved project defaults"
    );
    defaults
}
