use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Asset manifest naming every file resource an app fetches.
/// Loaded from a JSON file at runtime; all paths are relative to the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Texture name → image path.
    #[serde(default)]
    pub textures: BTreeMap<String, String>,
    /// Model name → glTF asset.
    #[serde(default)]
    pub models: BTreeMap<String, ModelDescriptor>,
    /// Data file name → path (spreadsheets, JSON, ...).
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

/// Describes an external 3D model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Relative path to the model file.
    pub path: String,
    /// Uniform scale applied to every clone.
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn texture(&self, name: &str) -> Option<&str> {
        self.textures.get(name).map(String::as_str)
    }

    pub fn model(&self, name: &str) -> Option<&ModelDescriptor> {
        self.models.get(name)
    }

    pub fn data_file(&self, name: &str) -> Option<&str> {
        self.data.get(name).map(String::as_str)
    }
}
