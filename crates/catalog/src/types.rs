use serde::{Deserialize, Serialize};

// ── Plugin entries ───────────────────────────────────────────────────────────

/// One skill directory as listed in the marketplace `plugins` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    /// Plugin name: `name` from the header, else the directory name.
    pub name: String,
    /// Path of the skill directory relative to the invocation root, `./`-prefixed.
    pub source: String,
    pub description: String,
    /// Always `false`: the marketplace entry fully describes the plugin, so no
    /// `plugin.json` is required inside the skill directory.
    pub strict: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<PluginAuthor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginAuthor {
    pub name: String,
}

// ── Marketplace manifest ─────────────────────────────────────────────────────

/// Marketplace owner. `email` is only emitted when known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestMetadata {
    pub description: String,
    /// Directory that plugin sources live under, e.g. `./skills`.
    pub plugin_root: String,
}

/// The `.claude-plugin/marketplace.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marketplace {
    pub name: String,
    pub owner: Owner,
    pub metadata: ManifestMetadata,
    pub plugins: Vec<SkillEntry>,
}

// ── Caller overrides ─────────────────────────────────────────────────────────

/// Values supplied explicitly by the caller. Each one beats the project
/// defaults when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub name: Option<String>,
    pub owner: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
}

impl Overrides {
    /// Drop values that are empty after trimming so they fall through to defaults.
    #[must_use]
    pub fn normalized(self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }
        Self {
            name: keep(self.name),
            owner: keep(self.owner),
            email: keep(self.email),
            description: keep(self.description),
        }
    }
}
