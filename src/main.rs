use anyhow::Context;
use clap::Parser;

use heightmap_exr_rs::cli::Cli;
use heightmap_exr_rs::image_pipeline::HeightmapPipeline;
use heightmap_exr_rs::logger;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init();

    info!("Starting heightmap_exr...");

    let pipeline = HeightmapPipeline::new(cli.conversion_config());

    info!("Image to heightmap pipeline initialized");
    info!(
        srgb = pipeline.config().srgb,
        scale = pipeline.config().scale,
        floor = pipeline.config().floor,
        "Channel settings"
    );
    match pipeline.config().normals {
        Some(options) => info!(
            kernel_size = %options.kernel_size,
            filter = ?options.filter,
            z_range = ?options.z_range,
            "Normal map: enabled"
        ),
        None => info!("Normal map: disabled"),
    }

    let outputs = pipeline
        .convert_file(&cli.infile, &cli.outdir)
        .inspect_err(|e| error!("Conversion failed: {}", e))
        .with_context(|| format!("converting {}", cli.infile.display()))?;

    info!(heightmap = %outputs.heightmap.display(), "Wrote heightmap");
    if let Some(path) = &outputs.normal_map {
        info!(normal_map = %path.display(), "Wrote normal map");
    }
    info!("Conversion successful!");

    Ok(())
}
