use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::image_pipeline::{
    channels::{ChannelPlanes, adjust_channels, extract_channels},
    common::error::{ConversionError, Result},
    config::ConversionConfig,
    normals::{NormalMap, generate_normal_map},
    output::{HeightmapWriter, NormalMapWriter, StandardExrWriter, StandardPngWriter},
    source::{ImageCrateReader, SourceImageReader},
};

const HEIGHTMAP_SUFFIX: &str = "heightmap.exr";
const NORMALMAP_SUFFIX: &str = "normalmap.png";

/// In-memory result of a conversion, ready to be serialized.
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    /// Floor/scale-adjusted height, green, blue and alpha planes
    pub planes: ChannelPlanes,
    /// Present when normal generation is configured
    pub normal_map: Option<NormalMap>,
}

/// Files written by [`HeightmapPipeline::convert_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub heightmap: PathBuf,
    pub normal_map: Option<PathBuf>,
}

/// `<outdir>/<stem>.heightmap.exr` and `<outdir>/<stem>.normalmap.png`.
pub fn output_paths(input_path: &Path, outdir: &Path) -> Result<(PathBuf, PathBuf)> {
    let stem = input_path
        .file_stem()
        .ok_or_else(|| {
            ConversionError::InputReadError(format!("{}: no file name", input_path.display()))
        })?
        .to_string_lossy();

    Ok((
        outdir.join(format!("{stem}.{HEIGHTMAP_SUFFIX}")),
        outdir.join(format!("{stem}.{NORMALMAP_SUFFIX}")),
    ))
}

pub struct HeightmapPipeline<R: SourceImageReader, H: HeightmapWriter, N: NormalMapWriter> {
    reader: R,
    heightmap_writer: H,
    normal_writer: N,
    config: ConversionConfig,
}

impl HeightmapPipeline<ImageCrateReader, StandardExrWriter, StandardPngWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            heightmap_writer: StandardExrWriter,
            normal_writer: StandardPngWriter,
            config,
        }
    }
}

impl<R: SourceImageReader, H: HeightmapWriter, N: NormalMapWriter> HeightmapPipeline<R, H, N> {
    pub fn with_custom(
        reader: R,
        heightmap_writer: H,
        normal_writer: N,
        config: ConversionConfig,
    ) -> Self {
        Self {
            reader,
            heightmap_writer,
            normal_writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    /// Decode, extract, adjust and (optionally) derive normals, without any I/O.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn process(&self, input_data: &[u8]) -> Result<ConversionOutput> {
        let image = {
            let _span = tracing::info_span!("decode_image").entered();
            self.reader.read_image(input_data)?
        };

        {
            let _span = tracing::info_span!(
                "validate_dimensions",
                width = image.width(),
                height = image.height()
            )
            .entered();
            self.validate_dimensions(image.width(), image.height())?;
        }

        let mut planes = {
            let _span =
                tracing::info_span!("extract_channels", srgb = self.config.srgb).entered();
            extract_channels(&image, self.config.srgb)
        };

        {
            let _span = tracing::info_span!(
                "adjust_channels",
                floor = self.config.floor,
                scale = self.config.scale
            )
            .entered();
            adjust_channels(&mut planes, self.config.floor, self.config.scale);
        }

        let normal_map = self.config.normals.as_ref().map(|options| {
            let _span = tracing::info_span!(
                "generate_normal_map",
                kernel_size = options.kernel_size.value()
            )
            .entered();
            generate_normal_map(&planes.height, options)
        });

        Ok(ConversionOutput { planes, normal_map })
    }

    /// Serialize a processed result. The normal map is only written when both
    /// the map and a destination are present.
    pub fn write(
        &self,
        output: &ConversionOutput,
        heightmap_out: &mut dyn Write,
        normal_out: Option<&mut dyn Write>,
    ) -> Result<()> {
        {
            let _span = tracing::info_span!("encode_heightmap").entered();
            self.heightmap_writer.write_heightmap(&output.planes, heightmap_out)?;
        }

        if let (Some(map), Some(out)) = (output.normal_map.as_ref(), normal_out) {
            let _span = tracing::info_span!("encode_normal_map").entered();
            self.normal_writer.write_normal_map(map, out)?;
        }

        Ok(())
    }

    #[instrument(
        skip(self, input_data, heightmap_out, normal_out),
        fields(input_size = input_data.len())
    )]
    pub fn convert(
        &self,
        input_data: &[u8],
        heightmap_out: &mut dyn Write,
        normal_out: Option<&mut dyn Write>,
    ) -> Result<()> {
        info!("Starting heightmap conversion");

        let output = self.process(input_data)?;
        self.write(&output, heightmap_out, normal_out)?;

        info!(
            width = output.planes.width(),
            height = output.planes.rows(),
            normals = output.normal_map.is_some(),
            "Conversion complete"
        );
        Ok(())
    }

    /// Convert `input_path` into files under `outdir`, creating it if needed.
    ///
    /// Nothing is created on disk until the input has been processed and
    /// every output has been encoded in memory.
    #[instrument(skip(self, input_path, outdir))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        outdir: Q,
    ) -> Result<OutputPaths> {
        let input_path = input_path.as_ref();
        let outdir = outdir.as_ref();

        info!(
            input = %input_path.display(),
            outdir = %outdir.display(),
            "Converting file"
        );

        let (heightmap_path, normal_map_path) = output_paths(input_path, outdir)?;

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let output = self.process(&input_data)?;

        let mut heightmap_bytes = Vec::new();
        let mut normal_bytes = output.normal_map.as_ref().map(|_| Vec::new());
        self.write(
            &output,
            &mut heightmap_bytes,
            normal_bytes.as_mut().map(|b| b as &mut dyn Write),
        )?;

        if !outdir.exists() {
            info!("Creating output directory: {}", outdir.display());
            std::fs::create_dir_all(outdir).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", outdir.display(), e))
            })?;
        }

        info!("Generating {}", heightmap_path.display());
        write_output_file(&heightmap_path, &heightmap_bytes)?;

        let normal_map_path = match normal_bytes {
            Some(bytes) => {
                info!("Generating {}", normal_map_path.display());
                write_output_file(&normal_map_path, &bytes)?;
                Some(normal_map_path)
            }
            None => None,
        };

        Ok(OutputPaths {
            heightmap: heightmap_path,
            normal_map: normal_map_path,
        })
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}

fn write_output_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let _span =
        tracing::info_span!("write_output_file", size = bytes.len()).entered();
    std::fs::write(path, bytes)
        .map_err(|e| ConversionError::OutputWriteError(format!("{}: {}", path.display(), e)))
}
