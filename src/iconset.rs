//! Writing an iconset directory.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::icon::IconImage;
use crate::manifest::{IconsetManifest, ManifestEntry};
use crate::renderer::IconRenderer;

/// Logical sizes every iconset contains, smallest first.
pub const ICON_SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];

/// Largest logical size that also gets an @2x rendition.
pub const RETINA_MAX_SIZE: u32 = 512;

/// Name of the staging directory created under the working directory.
pub const ICONSET_DIR_NAME: &str = "app.iconset";

/// Renders the icon at every required size and writes the PNGs.
///
/// # Example
///
/// ```no_run
/// use pulse_icon_renderer::IconsetBuilder;
///
/// let manifest = IconsetBuilder::new().build("/tmp/work/app.iconset".as_ref())?;
/// assert_eq!(manifest.entries.len(), 13);
/// # Ok::<(), pulse_icon_renderer::Error>(())
/// ```
pub struct IconsetBuilder {
    sizes: Vec<u32>,
    retina_max: u32,
    renderer: IconRenderer,
}

impl Default for IconsetBuilder {
    fn default() -> Self {
        Self::with_sizes(&ICON_SIZES)
    }
}

impl IconsetBuilder {
    /// A builder for the standard [`ICON_SIZES`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder for a custom list of logical sizes.
    pub fn with_sizes(sizes: &[u32]) -> Self {
        Self {
            sizes: sizes.to_vec(),
            retina_max: RETINA_MAX_SIZE,
            renderer: IconRenderer::new(),
        }
    }

    /// Replaces the renderer.
    pub fn renderer(mut self, renderer: IconRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Every `(logical_size, scale)` pair to write, in write order.
    ///
    /// Each size gets an @1x rendition, followed by an @2x rendition when
    /// the size is at most [`RETINA_MAX_SIZE`].
    pub fn renditions(&self) -> Vec<(u32, u32)> {
        self.sizes
            .iter()
            .flat_map(|&size| {
                let retina = (size <= self.retina_max).then_some((size, 2));
                std::iter::once((size, 1)).chain(retina)
            })
            .collect()
    }

    /// Writes a fresh iconset into `dir`.
    ///
    /// Any existing `dir` is removed first, so no file from an earlier run
    /// survives. Each rendition is rendered and saved before the next one is
    /// rendered.
    pub fn build(&self, dir: &Path) -> Result<IconsetManifest> {
        if dir.exists() {
            debug!(dir = %dir.display(), "removing previous iconset");
            fs::remove_dir_all(dir).map_err(|e| Error::io("remove directory", dir, e))?;
        }
        fs::create_dir_all(dir).map_err(|e| Error::io("create directory", dir, e))?;

        let mut manifest = IconsetManifest::new(dir);
        for (size, scale) in self.renditions() {
            let icon = self.renderer.render(size, scale);
            manifest.push(write_png(&icon, dir)?);
        }

        info!(
            dir = %dir.display(),
            files = manifest.entries.len(),
            "iconset written"
        );
        Ok(manifest)
    }
}

fn write_png(icon: &IconImage, dir: &Path) -> Result<ManifestEntry> {
    let entry = ManifestEntry::from_icon(icon);
    let path = dir.join(&entry.file_name);
    icon.data
        .save_with_format(&path, image::ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: path.clone(),
            source,
        })?;
    debug!(file = %entry.file_name, pixels = entry.pixel_size, "saved");
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ColorType;

    #[test]
    fn standard_renditions() {
        let renditions = IconsetBuilder::new().renditions();
        assert_eq!(renditions.len(), 13);
        assert_eq!(&renditions[..3], &[(16, 1), (16, 2), (32, 1)]);
        assert_eq!(renditions.last(), Some(&(1024, 1)));
        assert!(!renditions.contains(&(1024, 2)));
    }

    #[test]
    fn build_writes_named_pngs() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join(ICONSET_DIR_NAME);

        let manifest = IconsetBuilder::with_sizes(&[16, 32]).build(&dir).unwrap();

        let names: Vec<_> = manifest.entries.iter().map(|e| e.file_name.as_str()).collect();
        assert_eq!(
            names,
            [
                "icon_16x16.png",
                "icon_16x16@2x.png",
                "icon_32x32.png",
                "icon_32x32@2x.png"
            ]
        );

        for entry in &manifest.entries {
            let img = image::open(dir.join(&entry.file_name)).unwrap();
            assert_eq!(img.width(), entry.pixel_size);
            assert_eq!(img.height(), entry.pixel_size);
            assert_eq!(img.color(), ColorType::Rgba8);
        }
    }

    #[test]
    fn rebuild_removes_stale_files() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join(ICONSET_DIR_NAME);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("icon_48x48.png"), b"stale").unwrap();

        IconsetBuilder::with_sizes(&[16]).build(&dir).unwrap();

        assert!(!dir.join("icon_48x48.png").exists());
        let mut files: Vec<_> = fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        files.sort();
        assert_eq!(files, ["icon_16x16.png", "icon_16x16@2x.png"]);
    }

    #[test]
    fn sizes_above_retina_max_get_no_2x() {
        let renditions = IconsetBuilder::with_sizes(&[512, 1024]).renditions();
        assert_eq!(renditions, [(512, 1), (512, 2), (1024, 1)]);
    }

    #[test]
    fn build_fails_when_directory_cannot_be_created() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, b"").unwrap();

        let err = IconsetBuilder::with_sizes(&[16])
            .build(&blocker.join(ICONSET_DIR_NAME))
            .unwrap_err();
        assert!(matches!(err, Error::Io { action: "create directory", .. }));
    }
}
