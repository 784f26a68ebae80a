use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

pub type RgbaPixel = (f32, f32, f32, f32);

/// Write a constant single-channel PNG and return its path.
pub fn flat_gray_png(dir: &Path, name: &str, size: u32, value: u8) -> PathBuf {
    let path = dir.join(name);
    GrayImage::from_pixel(size, size, Luma([value]))
        .save(&path)
        .expect("write gray fixture");
    path
}

/// Write an RGBA PNG whose channels vary with position.
pub fn gradient_rgba_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 40 % 256) as u8,
            (y * 50 % 256) as u8,
            ((x + y) * 20 % 256) as u8,
            (255 - x * 10) as u8,
        ])
    })
    .save(&path)
    .expect("write rgba fixture");
    path
}

/// Write a three-channel PNG, a layout the converter rejects.
pub fn rgb_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(4, 4, Rgb([10, 20, 30]))
        .save(&path)
        .expect("write rgb fixture");
    path
}

/// Write a 2×2 indexed PNG whose palette carries transparency.
pub fn palette_png_with_transparency(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("create palette fixture");
    let mut encoder = png::Encoder::new(BufWriter::new(file), 2, 2);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(vec![0, 0, 0, 255, 255, 255]);
    encoder.set_trns(vec![128, 255]);
    let mut writer = encoder.write_header().expect("write palette header");
    writer
        .write_image_data(&[0, 1, 1, 0])
        .expect("write palette pixels");
    writer.finish().expect("finish palette fixture");
    path
}

/// Read every RGBA pixel of an EXR file as rows.
pub fn read_exr(path: &Path) -> Vec<Vec<RgbaPixel>> {
    let image = exr::prelude::read_first_rgba_layer_from_file(
        path,
        |resolution, _| {
            let empty_line = vec![(0.0f32, 0.0f32, 0.0f32, 0.0f32); resolution.width()];
            vec![empty_line; resolution.height()]
        },
        |pixels: &mut Vec<Vec<RgbaPixel>>, position, (r, g, b, a): RgbaPixel| {
            pixels[position.y()][position.x()] = (r, g, b, a);
        },
    )
    .expect("read exr output");

    image.layer_data.channel_data.pixels
}
