//! Heightmap conversion configuration types

use crate::image_pipeline::normals::NormalMapOptions;

/// Configuration for image to heightmap conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Decode samples with the 2.2 power-law before any adjustment
    pub srgb: bool,
    /// Multiplier applied to every plane after extraction
    pub scale: f32,
    /// Offset applied to every plane after extraction (`floor + v * scale`)
    pub floor: f32,
    /// Whether to reject zero-sized images before conversion
    pub validate_dimensions: bool,
    /// Normal map settings, `None` skips the normal map entirely
    pub normals: Option<NormalMapOptions>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            srgb: false,
            scale: 1.0,
            floor: 0.0,
            validate_dimensions: true,
            normals: None,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    srgb: Option<bool>,
    scale: Option<f32>,
    floor: Option<f32>,
    validate_dimensions: Option<bool>,
    normals: Option<Option<NormalMapOptions>>,
}

impl ConversionConfigBuilder {
    pub fn srgb(mut self, enable: bool) -> Self {
        self.srgb = Some(enable);
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn floor(mut self, floor: f32) -> Self {
        self.floor = Some(floor);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn normals(mut self, options: Option<NormalMapOptions>) -> Self {
        self.normals = Some(options);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            srgb: self.srgb.unwrap_or(default.srgb),
            scale: self.scale.unwrap_or(default.scale),
            floor: self.floor.unwrap_or(default.floor),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
            normals: self.normals.unwrap_or(default.normals),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::normals::{EdgeFilter, KernelSize, ZRange};

    #[test]
    fn test_defaults() {
        let config = ConversionConfig::builder().build();

        assert_eq!(config, ConversionConfig::default());
        assert!(!config.srgb);
        assert_eq!(config.scale, 1.0);
        assert_eq!(config.floor, 0.0);
        assert!(config.validate_dimensions);
        assert!(config.normals.is_none());
    }

    #[test]
    fn test_config_builder() {
        let options = NormalMapOptions {
            kernel_size: KernelSize::K9,
            filter: EdgeFilter::Scharr,
            z_range: ZRange::Full,
        };
        let config = ConversionConfig::builder()
            .srgb(true)
            .scale(2.0)
            .floor(10.0)
            .validate_dimensions(false)
            .normals(Some(options))
            .build();

        assert!(config.srgb);
        assert_eq!(config.scale, 2.0);
        assert_eq!(config.floor, 10.0);
        assert!(!config.validate_dimensions);
        assert_eq!(config.normals, Some(options));
    }
}
