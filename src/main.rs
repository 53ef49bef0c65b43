mod error;
mod indexed;
mod preview;
mod report;
mod rom;

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use log::{error, info};

use error::ConvertError;
use indexed::{IndexedImage, IndexedPixels};
use report::ConversionReport;
use rom::Mode;

/// Converts png images to arcade tile, sprite and colour ROM files.
/// Input image should be a paletted png file.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Just output palette (32 colour entries)
    #[arg(short = 'p', long = "palette")]
    palette_only: bool,

    /// Convert as 16x16 sprites (default is 8x8 characters)
    #[arg(short = 's', long, conflicts_with = "palette_only")]
    sprites: bool,

    /// Write a JSON summary of the conversion to this file
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Write a PNG of the input as the hardware colours would show it
    #[arg(long, value_name = "FILE")]
    preview: Option<PathBuf>,

    /// Paletted PNG to convert
    infile: PathBuf,

    /// ROM file to write
    outfile: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ConvertError> {
    let mode = Mode::from_flags(args.palette_only, args.sprites);

    let image = IndexedImage::from_png_file(&args.infile)?;
    info!(
        "Decoded {:?}: {}x{} pixels, {} palette entries",
        args.infile,
        image.width(),
        image.height(),
        image.palette().len()
    );

    // Encode everything before touching the output so a failure leaves no partial ROM
    info!("Converting as {}", mode);
    let bytes = rom::convert(mode, &image)?;
    write_rom(&args.outfile, &bytes)?;
    info!("Wrote {} bytes to {:?}", bytes.len(), args.outfile);

    if let Some(path) = &args.report {
        let report = ConversionReport::new(
            &args.infile,
            &args.outfile,
            mode,
            (image.width(), image.height()),
            image.palette().len(),
            &bytes,
        );
        report.write(path)?;
        info!("Report: {:?}", path);
    }

    if let Some(path) = &args.preview {
        preview::save_preview(&image, path)?;
        info!("Preview: {:?}", path);
    }

    Ok(())
}

fn write_rom(path: &Path, rom: &[u8]) -> Result<(), ConvertError> {
    let mut file = File::create(path)?;
    file.write_all(rom)?;
    file.flush()?;
    Ok(())
}
