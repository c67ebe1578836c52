use std::collections::BTreeMap;
use serde_json::Value;

/// Version specification for a dependency (e.g., "^1.0.0", "1.3.0")
pub type VersionSpec = String;

/// The parts of a `package.json` manifest that an export needs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    /// Package name, if declared
    pub name: Option<String>,
    /// Package version, if declared
    pub version: Option<String>,
    /// Runtime dependencies (dependency name → version spec), in name order
    pub dependencies: BTreeMap<String, VersionSpec>,
}

impl Manifest {
    /// Parse manifest JSON
    ///
    /// A missing (or `null`) `dependencies` field is an error unless
    /// `allow_missing_dependencies` is set, in which case the map is empty.
    /// Errors are returned as a reason string for the caller to attach a path to.
    pub fn from_json(content: &str, allow_missing_dependencies: bool) -> Result<Self, String> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| format!("invalid JSON: {e}"))?;

        let Value::Object(fields) = value else {
            return Err("expected a JSON object at the top level".to_string());
        };

        let dependencies = match fields.get("dependencies") {
            None | Some(Value::Null) if allow_missing_dependencies => BTreeMap::new(),
            None | Some(Value::Null) => {
                return Err("missing \"dependencies\" field".to_string());
            }
            Some(deps) => serde_json::from_value::<BTreeMap<String, VersionSpec>>(deps.clone())
                .map_err(|e| format!("\"dependencies\" must map names to version strings: {e}"))?,
        };

        Ok(Self {
            name: fields.get("name").and_then(Value::as_str).map(str::to_string),
            version: fields.get("version").and_then(Value::as_str).map(str::to_string),
            dependencies,
        })
    }

    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}
