//! Serializable record of a written iconset.
//!
//! An [`IconsetManifest`] lists every file the builder wrote, in write order.
//! It serializes to camelCase JSON:
//!
//! ```json
//! {
//!   "directory": "/tmp/work/app.iconset",
//!   "entries": [
//!     { "fileName": "icon_16x16.png", "logicalSize": 16, "scale": 1, "pixelSize": 16 },
//!     { "fileName": "icon_16x16@2x.png", "logicalSize": 16, "scale": 2, "pixelSize": 32 }
//!   ]
//! }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::icon::IconImage;

/// One PNG in the iconset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    /// File name inside the iconset directory.
    pub file_name: String,

    /// Edge length in points.
    pub logical_size: u32,

    /// Display scale factor (1 or 2).
    pub scale: u32,

    /// Edge length in pixels (`logical_size * scale`).
    pub pixel_size: u32,
}

impl ManifestEntry {
    /// Describes a rendered image.
    pub fn from_icon(icon: &IconImage) -> Self {
        Self {
            file_name: icon.file_name(),
            logical_size: icon.logical_size(),
            scale: icon.scale,
            pixel_size: icon.dimensions().0,
        }
    }
}

/// The files written into one iconset directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconsetManifest {
    /// The iconset directory.
    pub directory: PathBuf,

    /// Written files, in write order.
    #[serde(default)]
    pub entries: Vec<ManifestEntry>,
}

impl IconsetManifest {
    /// Creates an empty manifest for `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            entries: Vec::new(),
        }
    }

    /// Records a written file.
    pub fn push(&mut self, entry: ManifestEntry) {
        self.entries.push(entry);
    }

    /// Absolute paths of every written file.
    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.entries.iter().map(|e| self.directory.join(&e.file_name))
    }

    /// Serializes the manifest to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a manifest from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::RectPx;
    use image::RgbaImage;

    #[test]
    fn entry_describes_retina_icon() {
        let icon = IconImage::new(RgbaImage::new(64, 64), 2, RectPx::from_size(64, 64));
        let entry = ManifestEntry::from_icon(&icon);
        assert_eq!(
            entry,
            ManifestEntry {
                file_name: "icon_32x32@2x.png".to_string(),
                logical_size: 32,
                scale: 2,
                pixel_size: 64,
            }
        );
    }

    #[test]
    fn json_uses_camel_case() {
        let mut manifest = IconsetManifest::new("/tmp/work/app.iconset");
        manifest.push(ManifestEntry {
            file_name: "icon_16x16.png".to_string(),
            logical_size: 16,
            scale: 1,
            pixel_size: 16,
        });

        let json = manifest.to_json().unwrap();
        assert!(json.contains("\"fileName\": \"icon_16x16.png\""));
        assert!(json.contains("\"pixelSize\": 16"));

        let restored = IconsetManifest::from_json(&json).unwrap();
        assert_eq!(restored, manifest);
    }

    #[test]
    fn missing_entries_default_to_empty() {
        let manifest = IconsetManifest::from_json(r#"{ "directory": "/x" }"#).unwrap();
        assert!(manifest.entries.is_empty());
        assert!(IconsetManifest::from_json("not json").is_err());
    }

    #[test]
    fn paths_join_directory() {
        let mut manifest = IconsetManifest::new("/a/app.iconset");
        manifest.push(ManifestEntry {
            file_name: "icon_16x16.png".to_string(),
            logical_size: 16,
            scale: 1,
            pixel_size: 16,
        });
        let paths: Vec<_> = manifest.paths().collect();
        assert_eq!(paths, [PathBuf::from("/a/app.iconset/icon_16x16.png")]);
    }
}
