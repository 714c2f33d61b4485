//! GeoJSON FeatureCollection decoding into region features.
//!
//! Geometry is never interpreted here: each feature's `geometry` member is
//! carried through as an opaque JSON value for the rendering layer. Only
//! the key and name properties are read.

use std::fmt;

use scene::{RegionFeature, RegionKey};
use serde_json::Value;

/// Property bindings for the region decoder.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionOptions {
    /// Property holding the region key.
    pub key_property: String,
    /// Property holding the display name, when present.
    pub name_property: Option<String>,
}

impl Default for RegionOptions {
    /// Property names of the reference dataset.
    fn default() -> Self {
        Self {
            key_property: "state_abbr".to_string(),
            name_property: Some("name".to_string()),
        }
    }
}

#[derive(Debug)]
pub enum RegionsError {
    NotAFeatureCollection,
    InvalidFeature { index: usize, reason: String },
}

impl fmt::Display for RegionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionsError::NotAFeatureCollection => {
                write!(f, "expected GeoJSON FeatureCollection")
            }
            RegionsError::InvalidFeature { index, reason } => {
                write!(f, "invalid feature at index {index}: {reason}")
            }
        }
    }
}

impl std::error::Error for RegionsError {}

/// Decoded region features, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionCollection {
    pub features: Vec<RegionFeature>,
}

impl RegionCollection {
    pub fn from_geojson_str(payload: &str, options: &RegionOptions) -> Result<Self, RegionsError> {
        let value: Value =
            serde_json::from_str(payload).map_err(|e| RegionsError::InvalidFeature {
                index: 0,
                reason: format!("JSON parse error: {e}"),
            })?;
        Self::from_geojson_value(&value, options)
    }

    pub fn from_geojson_value(
        value: &Value,
        options: &RegionOptions,
    ) -> Result<Self, RegionsError> {
        let obj = value.as_object().ok_or(RegionsError::NotAFeatureCollection)?;
        let ty = obj
            .get("type")
            .and_then(|v| v.as_str())
            .ok_or(RegionsError::NotAFeatureCollection)?;
        if ty != "FeatureCollection" {
            return Err(RegionsError::NotAFeatureCollection);
        }

        let features_val = obj
            .get("features")
            .and_then(|v| v.as_array())
            .ok_or(RegionsError::NotAFeatureCollection)?;

        let mut features = Vec::with_capacity(features_val.len());
        for (index, feat_val) in features_val.iter().enumerate() {
            let feat_obj = feat_val.as_object().ok_or(RegionsError::InvalidFeature {
                index,
                reason: "feature must be an object".to_string(),
            })?;

            let feat_type = feat_obj.get("type").and_then(|v| v.as_str()).ok_or(
                RegionsError::InvalidFeature {
                    index,
                    reason: "feature missing type".to_string(),
                },
            )?;
            if feat_type != "Feature" {
                return Err(RegionsError::InvalidFeature {
                    index,
                    reason: format!("unexpected feature type: {feat_type}"),
                });
            }

            let props = feat_obj.get("properties").and_then(|v| v.as_object());

            // A feature without a key can never join; reject it rather
            // than carry an unaddressable region.
            let key = props
                .and_then(|p| p.get(&options.key_property))
                .and_then(property_as_key)
                .ok_or_else(|| RegionsError::InvalidFeature {
                    index,
                    reason: format!("missing key property {:?}", options.key_property),
                })?;

            let name = options
                .name_property
                .as_ref()
                .and_then(|name| props.and_then(|p| p.get(name)))
                .and_then(|v| v.as_str())
                .map(str::to_string);

            let geometry = feat_obj.get("geometry").cloned().unwrap_or(Value::Null);

            features.push(RegionFeature::new(RegionKey::new(key), name, geometry));
        }

        Ok(Self { features })
    }
}

fn property_as_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
