use anyhow::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;

use crate::error::ConfigError;
use crate::model::ModelHandle;

/// Declarative project manifest (`droidconv.toml`)
///
/// The author-facing surface: SDK settings and dependency buckets declared
/// as data, then applied onto the configuration model. Manifest values are
/// explicit values, so they win over convention defaults regardless of
/// whether they land before or after the convention pass.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub android: AndroidSection,
    /// Bucket name to dependency coordinates, e.g.
    /// `implementation = ["androidx.core:core-ktx:1.12.0"]`
    #[serde(default)]
    pub dependencies: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AndroidSection {
    pub jdk_version: Option<u32>,
    pub compile_sdk: Option<u32>,
}

impl Manifest {
    /// Push the manifest's explicit values onto a configuration model
    pub fn apply_to(&self, model: &ModelHandle) {
        let mut model = model.borrow_mut();
        if let Some(jdk) = self.android.jdk_version {
            model.set_jdk_version(jdk);
        }
        if let Some(sdk) = self.android.compile_sdk {
            model.set_compile_sdk(sdk);
        }
        for (bucket, coordinates) in &self.dependencies {
            for coordinate in coordinates {
                model.dependencies_mut().add(bucket, coordinate.clone());
            }
        }
    }
}

/// Load and parse a droidconv.toml manifest
pub fn load_manifest(path: &str) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            anyhow::anyhow!("could not find `{}` in current directory", path)
        } else {
            anyhow::anyhow!("failed to read `{}`: {}", path, e)
        }
    })?;

    let manifest: Manifest = toml::from_str(&content)
        .map_err(|e| anyhow::anyhow!("failed to parse `{}`: {}", path, e))?;

    // Validate dependency coordinates up front; the toolchain's own
    // resolution errors for malformed coordinates are much harder to read
    for coordinates in manifest.dependencies.values() {
        for coordinate in coordinates {
            validate_coordinate(coordinate)?;
        }
    }

    Ok(manifest)
}

/// Validate a `group:artifact[:version]` dependency coordinate
fn validate_coordinate(coordinate: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidCoordinate {
        coordinate: coordinate.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = coordinate.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(invalid(
            "expected `group:artifact` or `group:artifact:version`",
        ));
    }

    for part in &parts {
        if part.is_empty() {
            return Err(invalid("empty segment"));
        }
        if part.contains(char::is_whitespace) {
            return Err(invalid("segment contains whitespace"));
        }
    }

    Ok(())
}
