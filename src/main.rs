// This file is a small example of how to use the `chroma_scan` library.
// The main library entry point is `src/lib.rs`.

use chroma_scan::core_modules::spectrums;
use chroma_scan::core_modules::utils::hsv_helper::hsv_helper;
use chroma_scan::{ScanConfig, ScanPipeline};

fn main() {
    println!("chroma_scan - Example Runner");

    let Some(path) = std::env::args().nth(1) else {
        println!("Usage: chroma_scan <image_path>");
        return;
    };

    let image = match image::open(&path) {
        Ok(image) => image.to_rgb8(),
        Err(error) => {
            eprintln!("Failed to open '{path}': {error}");
            return;
        }
    };

    let planes = match hsv_helper::planes_from_image(&image) {
        Ok(planes) => planes,
        Err(error) => {
            eprintln!("Failed to extract channel planes: {error}");
            return;
        }
    };

    let pipeline = ScanPipeline::new(ScanConfig { check_value: true });
    match pipeline.scan_batch(&planes, &spectrums::default_spectrums()) {
        Ok(results) => {
            for (name, result) in spectrums::DEFAULT_SPECTRUM_NAMES.iter().zip(results) {
                println!(
                    "{name}: {} pixels ({:.2}% of image)",
                    result.pixel_count,
                    result.image_fraction * 100.0
                );
            }
        }
        Err(error) => eprintln!("Scan failed: {error}"),
    }
}
