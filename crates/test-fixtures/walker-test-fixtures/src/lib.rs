use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    paths: HashMap<String, String>,
    #[serde(default)]
    configs: HashMap<String, String>,
}

/// Resolve a manifest entry to a file under the workspace `fixtures/` directory.
fn locate(map: &HashMap<String, String>, kind: &str, name: &str) -> Result<PathBuf> {
    let rel = map
        .get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))?;
    Ok(Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../../fixtures")
        .join(rel))
}

fn read_fixture(file: &Path) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("reading fixture {}", file.display()))
}

/// Control-point path files (text or JSON).
pub mod paths {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.paths.keys().cloned().collect()
    }

    pub fn text(name: &str) -> Result<String> {
        read_fixture(&path(name)?)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        locate(&MANIFEST.paths, "path", name)
    }
}

/// Walker configuration overrides.
pub mod configs {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.configs.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        read_fixture(&locate(&MANIFEST.configs, "config", name)?)
    }

    /// Deserialize a config fixture into any serde type.
    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let raw = json(name)?;
        serde_json::from_str(&raw).with_context(|| format!("config fixture '{name}' is not valid"))
    }
}
