use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use image::AnimationDecoder;
use image::codecs::gif::GifDecoder;
use pdf_export::{RasterImage, SaveOptions};

#[derive(Parser)]
#[command(name = "imgpdf", about = "Export raster images as PDF documents", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export one or more images as a multi-page PDF
    Convert {
        /// Input image file(s) - the first becomes page one
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Resolution in pixels per inch
        #[arg(long, default_value = "72.0")]
        resolution: f32,

        /// Append pages to an existing PDF instead of replacing it
        #[arg(long)]
        append: bool,

        /// Emit one page per frame of multi-frame inputs (GIF)
        #[arg(long)]
        all_frames: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            resolution,
            append,
            all_frames,
        } => {
            let mut images = Vec::with_capacity(input.len());
            for path in &input {
                images.push(load_image(path, all_frames)?);
            }

            let primary = images.remove(0);
            let multi = all_frames || !images.is_empty();
            let pages: usize = if multi {
                primary.frame_count()
                    + images.iter().map(RasterImage::frame_count).sum::<usize>()
            } else {
                1
            };

            let options = SaveOptions {
                resolution,
                append,
                append_images: images,
            };

            if multi {
                pdf_export::save_all(&primary, &output, &options).await?;
            } else {
                pdf_export::save(&primary, &output, &options).await?;
            }

            let verb = if append { "Appended" } else { "Exported" };
            println!("{} {} page(s) → {}", verb, pages, output.display());
        }
    }

    Ok(())
}

/// Decode one input file into the export model.
///
/// GIF inputs are frame-expanded when `all_frames` is set; everything else
/// goes through `image::open` and yields a single frame.
fn load_image(path: &Path, all_frames: bool) -> Result<RasterImage> {
    let is_gif = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gif"));

    if all_frames && is_gif {
        return load_gif_frames(path);
    }

    let decoded = image::open(path).with_context(|| format!("cannot decode {}", path.display()))?;
    RasterImage::from_dynamic(&decoded)
        .with_context(|| format!("cannot convert {}", path.display()))
}

fn load_gif_frames(path: &Path) -> Result<RasterImage> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let decoder =
        GifDecoder::new(BufReader::new(file)).with_context(|| format!("cannot decode {}", path.display()))?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .with_context(|| format!("cannot decode frames of {}", path.display()))?;

    let mut iter = frames.into_iter();
    let first = iter
        .next()
        .with_context(|| format!("{} has no frames", path.display()))?;
    let first_rgb = image::DynamicImage::ImageRgba8(first.into_buffer()).to_rgb8();
    let (width, height) = first_rgb.dimensions();

    let mut raster = RasterImage::new(
        pdf_export::ColorMode::Rgb,
        width,
        height,
        first_rgb.into_raw(),
    )?;
    for frame in iter {
        let rgb = image::DynamicImage::ImageRgba8(frame.into_buffer()).to_rgb8();
        raster
            .add_frame(rgb.into_raw())
            .with_context(|| format!("frame size mismatch in {}", path.display()))?;
    }
    Ok(raster)
}
