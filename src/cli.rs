//! Command line surface of the converter.

use std::path::PathBuf;

use clap::Parser;

use crate::image_pipeline::{ConversionConfig, EdgeFilter, KernelSize, NormalMapOptions, ZRange};

fn parse_kernel_size(s: &str) -> Result<KernelSize, String> {
    s.parse()
}

/// Generate a heightmap from a grayscale image.
#[derive(Parser, Debug, Clone)]
#[command(name = "heightmap-exr", version, about, long_about = None)]
pub struct Cli {
    /// Path to the input image, either 8-bit greyscale or 8-bit RGBA
    /// (PNG, JPEG, TIFF, BMP, TGA or WebP).
    #[arg(long, value_name = "PATH")]
    pub infile: PathBuf,

    /// Directory to save the output files. Default is the current directory.
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub outdir: PathBuf,

    /// Convert the image from sRGB before processing.
    #[arg(long)]
    pub srgb: bool,

    /// Scale factor for the heightmap. Height values are multiplied by this
    /// value in the output image.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub scale: f32,

    /// Floor value for the heightmap.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub floor: f32,

    /// Generate a normal map from the heightmap.
    #[arg(long)]
    pub normals: bool,

    /// Sobel kernel size for normal map generation, one of -1, 3, 5, 7, 9.
    #[arg(
        long = "normal-sobel-ksize",
        value_name = "N",
        default_value = "3",
        allow_negative_numbers = true,
        value_parser = parse_kernel_size
    )]
    pub normal_sobel_ksize: KernelSize,

    /// Generate normal map with full Z range ([-1, 1] instead of [0, 1]).
    #[arg(long = "normal-full-z-range")]
    pub normal_full_z_range: bool,

    /// Use Scharr filter instead of Sobel for normal map generation.
    #[arg(long = "normal-use-scharr")]
    pub normal_use_scharr: bool,
}

impl Cli {
    pub fn normal_map_options(&self) -> Option<NormalMapOptions> {
        self.normals.then(|| NormalMapOptions {
            kernel_size: self.normal_sobel_ksize,
            filter: if self.normal_use_scharr {
                EdgeFilter::Scharr
            } else {
                EdgeFilter::Sobel
            },
            z_range: if self.normal_full_z_range {
                ZRange::Full
            } else {
                ZRange::Half
            },
        })
    }

    pub fn conversion_config(&self) -> ConversionConfig {
        ConversionConfig::builder()
            .srgb(self.srgb)
            .scale(self.scale)
            .floor(self.floor)
            .normals(self.normal_map_options())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("heightmap-exr").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["--infile", "in.png"]).unwrap();

        assert_eq!(cli.infile, PathBuf::from("in.png"));
        assert_eq!(cli.outdir, PathBuf::from("."));
        assert!(!cli.srgb);
        assert_eq!(cli.scale, 1.0);
        assert_eq!(cli.floor, 0.0);
        assert_eq!(cli.normal_sobel_ksize, KernelSize::K3);
        assert!(cli.normal_map_options().is_none());
        assert_eq!(cli.conversion_config(), ConversionConfig::default());
    }

    #[test]
    fn test_infile_is_required() {
        assert!(parse(&["--normals"]).is_err());
    }

    #[test]
    fn test_full_flag_set() {
        let cli = parse(&[
            "--infile",
            "in.png",
            "--outdir",
            "out",
            "--srgb",
            "--scale",
            "2",
            "--floor",
            "-0.5",
            "--normals",
            "--normal-sobel-ksize",
            "-1",
            "--normal-full-z-range",
            "--normal-use-scharr",
        ])
        .unwrap();

        let config = cli.conversion_config();
        assert!(config.srgb);
        assert_eq!(config.scale, 2.0);
        assert_eq!(config.floor, -0.5);
        assert_eq!(
            config.normals,
            Some(NormalMapOptions {
                kernel_size: KernelSize::Scharr3,
                filter: EdgeFilter::Scharr,
                z_range: ZRange::Full,
            })
        );
    }

    #[test]
    fn test_kernel_size_outside_allow_list_is_rejected() {
        for bad in ["1", "4", "11", "-3", "x"] {
            assert!(
                parse(&["--infile", "in.png", "--normal-sobel-ksize", bad]).is_err(),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn test_negative_scale_is_accepted_verbatim() {
        let cli = parse(&["--infile", "in.png", "--scale", "-3"]).unwrap();
        assert_eq!(cli.conversion_config().scale, -3.0);
    }
}
