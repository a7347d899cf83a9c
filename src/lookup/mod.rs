use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Static per-country lookup: display-name overrides and supplementary
/// numeric attributes. Loaded once at startup, read-only afterwards, and
/// passed down to the renderer rather than held as ambient global state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Lookup {
    #[serde(default)]
    names: HashMap<String, String>,
    #[serde(default)]
    attributes: HashMap<String, HashMap<String, i64>>,
}

impl Lookup {
    /// Compiled-in default table, used when no extras file is given.
    pub fn builtin() -> Self {
        let names = [
            ("chn", "China"),
            ("gbr", "Great Britain"),
            ("usa", "United States"),
        ]
        .into_iter()
        .map(|(id, name)| (id.to_string(), name.to_string()))
        .collect();

        let attributes = [("chn", 5), ("usa", 3), ("fra", 2), ("aus", 1)]
            .into_iter()
            .map(|(id, diamonds)| {
                (
                    id.to_string(),
                    HashMap::from([("diamonds".to_string(), diamonds)]),
                )
            })
            .collect();

        Self { names, attributes }
    }

    /// Load a lookup table from a JSON file of the shape
    /// `{"names": {id: name}, "attributes": {id: {attr: n}}}`. Both top-level
    /// keys are optional.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("Failed to open {}", path.as_ref().display()))?;
        let reader = BufReader::new(file);
        let lookup: Lookup = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse {}", path.as_ref().display()))?;

        debug!(
            "Loaded lookup table: {} name overrides, {} attribute entries",
            lookup.names.len(),
            lookup.attributes.len()
        );

        Ok(lookup)
    }

    /// Returns the stored attribute value, or 0 when either the country or
    /// the attribute is absent.
    pub fn resolve(&self, country_id: &str, attribute: &str) -> i64 {
        self.attributes
            .get(country_id)
            .and_then(|attrs| attrs.get(attribute))
            .copied()
            .unwrap_or(0)
    }

    /// Returns the override name when one exists for `country_id`, else
    /// `fallback` unchanged.
    pub fn display_name<'a>(&'a self, country_id: &str, fallback: &'a str) -> &'a str {
        self.names
            .get(country_id)
            .map(String::as_str)
            .unwrap_or(fallback)
    }
}
