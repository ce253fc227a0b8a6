use crate::constants::DEFAULT_RESOLUTION;
use crate::raster::RasterImage;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Export configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SaveOptions {
    /// Pixels per inch used to size pages; 72.0 means one point per pixel
    pub resolution: f32,

    /// Append pages to the existing document at the destination instead of
    /// creating a fresh one
    pub append: bool,

    /// Additional images whose frames follow the primary image's pages
    /// (only consulted by `save_all`)
    #[cfg_attr(feature = "serde", serde(default))]
    pub append_images: Vec<RasterImage>,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            append: false,
            append_images: Vec::new(),
        }
    }
}

impl SaveOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ExportError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ExportError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return Err(ExportError::Config(format!(
                "resolution must be a positive number, got {}",
                self.resolution
            )));
        }
        Ok(())
    }
}
