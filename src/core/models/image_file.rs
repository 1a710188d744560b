use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use image::ImageFormat;

use crate::global_constants;

#[derive(Clone, PartialEq)]
pub struct ImageFile {
    pub name: String,
    pub mime_type: String,
    bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageFile")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

impl ImageFile {
    pub fn build_from_bytes(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        let name = name.into();
        let mime_type = mime_type.into();

        log::debug!(
            "[IMAGE_FILE] building file {} ({}, {} bytes)",
            name,
            mime_type,
            bytes.len()
        );

        Self {
            name,
            mime_type,
            bytes,
        }
    }

    pub async fn load_from_path(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read image file {:?}", path))?;

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        let mime_type = Self::detect_mime_type(path, &bytes);
        log::info!("[IMAGE_FILE] Loaded {:?} as {}", path, mime_type);

        Ok(Self::build_from_bytes(name, mime_type, bytes))
    }

    fn detect_mime_type(path: &Path, bytes: &[u8]) -> String {
        ImageFormat::from_path(path)
            .or_else(|_| image::guess_format(bytes))
            .map(|format| format.to_mime_type().to_string())
            .unwrap_or_else(|_| global_constants::FALLBACK_MIME_TYPE.to_string())
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    pub fn crop_region(&self, x: u32, y: u32, crop_width: u32, crop_height: u32) -> Result<Self> {
        if crop_width == 0 || crop_height == 0 {
            anyhow::bail!("Crop dimensions must be greater than zero");
        }

        let decoded = image::load_from_memory(&self.bytes).context("Failed to decode image")?;
        let (width, height) = (decoded.width(), decoded.height());

        if x >= width || y >= height {
            anyhow::bail!("Crop origin ({}, {}) lies outside {}x{} image", x, y, width, height);
        }

        let crop_width = crop_width.min(width - x);
        let crop_height = crop_height.min(height - y);

        log::debug!(
            "[IMAGE_FILE] Cropping region: {}x{} at ({}, {}) from {}x{}",
            crop_width,
            crop_height,
            x,
            y,
            width,
            height
        );

        let cropped = decoded.crop_imm(x, y, crop_width, crop_height);

        let mut encoded = Vec::new();
        cropped
            .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
            .context("Failed to encode cropped image")?;

        let stem = Path::new(&self.name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        Ok(Self::build_from_bytes(
            format!("{}-cropped.png", stem),
            ImageFormat::Png.to_mime_type(),
            encoded,
        ))
    }
}
