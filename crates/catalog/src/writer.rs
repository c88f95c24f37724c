use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result, types::Marketplace};

/// Default output location, relative to the invocation root.
pub const DEFAULT_OUTPUT: &str = ".claude-plugin/marketplace.json";

/// Serialize a manifest as indented JSON with a single trailing newline.
pub fn render_manifest(manifest: &Marketplace) -> Result<String> {
    let mut data = serde_json::to_string_pretty(manifest)?;
    data.push('\n');
    Ok(data)
}

/// Write `manifest` to `output` (resolved against `root`), replacing any
/// existing file. Parent directories are created as needed.
///
/// The file is written to a sibling temp path and renamed into place.
pub fn write_manifest(root: &Path, output: &Path, manifest: &Marketplace) -> Result<PathBuf> {
    let path = root.join(output);
    let data = render_manifest(manifest)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::write(&path, e))?;
    }
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, data).map_err(|e| Error::write(&path, e))?;
    if let Err(e) = std::fs::rename(&tmp, &path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(Error::write(&path, e));
    }

    debug!(path = %path.display(), plugins = manifest.plugins.len(), "wrote marketplace manifest");
    Ok(path)
}

/// Compare `manifest` with the file at `output` without writing anything.
///
/// Returns the resolved path when the file is byte-identical to what
/// [`write_manifest`] would produce, [`Error::Stale`] otherwise.
pub fn check_manifest(root: &Path, output: &Path, manifest: &Marketplace) -> Result<PathBuf> {
    let path = root.join(output);
    let expected = render_manifest(manifest)?;
    match std::fs::read_to_string(&path) {
        Ok(current) if current == expected => Ok(path),
        Ok(_) => Err(Error::Stale { path }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::Stale { path }),
        Err(e) => Err(e.into()),
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::types::{ManifestMetadata, Owner, SkillEntry},
    };

    fn manifest() -> Marketplace {
        Marketplace {
            name: "demo".into(),
            owner: Owner {
                name: "Skills Team".into(),
                email: None,
            },
            metadata: ManifestMetadata {
                description: "Demo".into(),
                plugin_root: "./skills".into(),
            },
            plugins: vec![SkillEntry {
                name: "one".into(),
                source: "./skills/one".into(),
                description: "Skill: one".into(),
                strict: false,
                version: None,
                author: None,
                keywords: None,
                category: None,
            }],
        }
    }

    #[test]
    fn render_is_indented_with_trailing_newline() {
        let out = render_manifest(&manifest()).unwrap();
        assert!(out.starts_with("{\n  \"name\": \"demo\","));
        assert!(out.ends_with("}\n"));
        assert!(!out.ends_with("\n\n"));
    }

    #[test]
    fn render_field_order() {
        let out = render_manifest(&manifest()).unwrap();
        let name = out.find("\"name\"").unwrap();
        let owner = out.find("\"owner\"").unwrap();
        let metadata = out.find("\"metadata\"").unwrap();
        let plugins = out.find("\"plugins\"").unwrap();
        assert!(name < owner && owner < metadata && metadata < plugins);
        assert!(out.contains("\"pluginRoot\": \"./skills\""));
        assert!(out.contains("\"strict\": false"));
    }

    #[test]
    fn write_creates_parent_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_manifest(tmp.path(), Path::new(DEFAULT_OUTPUT), &manifest()).unwrap();
        assert_eq!(path, tmp.path().join(DEFAULT_OUTPUT));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_manifest(&manifest()).unwrap());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn write_overwrites_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let output = Path::new("out/marketplace.json");
        std::fs::create_dir_all(tmp.path().join("out")).unwrap();
        std::fs::write(tmp.path().join(output), "x".repeat(10_000)).unwrap();

        write_manifest(tmp.path(), output, &manifest()).unwrap();
        let written = std::fs::read_to_string(tmp.path().join(output)).unwrap();
        assert_eq!(written, render_manifest(&manifest()).unwrap());
    }

    #[test]
    fn write_failure_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        // A regular file where a parent directory is needed.
        std::fs::write(tmp.path().join("blocker"), "").unwrap();
        let err =
            write_manifest(tmp.path(), Path::new("blocker/marketplace.json"), &manifest())
                .unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }

    #[test]
    fn check_detects_missing_and_stale() {
        let tmp = tempfile::tempdir().unwrap();
        let output = Path::new("marketplace.json");
        assert!(matches!(
            check_manifest(tmp.path(), output, &manifest()),
            Err(Error::Stale { .. })
        ));

        write_manifest(tmp.path(), output, &manifest()).unwrap();
        assert!(check_manifest(tmp.path(), output, &manifest()).is_ok());

        let mut changed = manifest();
        changed.name = "renamed".into();
        assert!(matches!(
            check_manifest(tmp.path(), output, &changed),
            Err(Error::Stale { .. })
        ));
    }
}
