pub mod hsv_helper {
    use crate::core_modules::error::ScanError;
    use crate::core_modules::hsv_planes::hsv_planes::HsvPlanes;
    use image::RgbImage;

    /// Converts an 8-bit sRGB image into normalized HSV channel planes.
    ///
    /// All three channels land in [0.0, 1.0]; hue is the angle divided by
    /// 360. Pixels are flattened with the x coordinate varying fastest, so a
    /// match at image position (x, y) is reported by the scanner as
    /// `(row, col) = (x + 1, y + 1)`.
    pub fn planes_from_image(image: &RgbImage) -> Result<HsvPlanes, ScanError> {
        let width = image.width();
        let height = image.height();
        let pixel_total = (width as usize) * (height as usize);

        let mut hue = Vec::with_capacity(pixel_total);
        let mut saturation = Vec::with_capacity(pixel_total);
        let mut value = Vec::with_capacity(pixel_total);

        for y in 0..height {
            for x in 0..width {
                let pixel = image.get_pixel(x, y);
                let (h, s, v) = rgb_to_hsv(pixel.0[0], pixel.0[1], pixel.0[2]);
                hue.push(h);
                saturation.push(s);
                value.push(v);
            }
        }

        HsvPlanes::new(hue, saturation, value, width)
    }

    /// Byte RGB to normalized HSV. Hue of an achromatic pixel is 0.
    pub fn rgb_to_hsv(red: u8, green: u8, blue: u8) -> (f64, f64, f64) {
        let red_normalized = red as f64 / 255.0;
        let green_normalized = green as f64 / 255.0;
        let blue_normalized = blue as f64 / 255.0;

        let maximum_channel = red_normalized.max(green_normalized.max(blue_normalized));
        let minimum_channel = red_normalized.min(green_normalized.min(blue_normalized));
        let chroma = maximum_channel - minimum_channel;

        let value = maximum_channel;
        let saturation = if maximum_channel > 0.0 {
            chroma / maximum_channel
        } else {
            0.0
        };

        if chroma <= 0.0 {
            return (0.0, saturation, value);
        }

        let (base_difference, sector_offset) = if maximum_channel == red_normalized {
            (green_normalized - blue_normalized, 0.0)
        } else if maximum_channel == green_normalized {
            (blue_normalized - red_normalized, 2.0)
        } else {
            (red_normalized - green_normalized, 4.0)
        };

        let mut hue_degrees = (base_difference / chroma + sector_offset) * 60.0;
        if hue_degrees < 0.0 {
            hue_degrees += 360.0;
        }

        (hue_degrees / 360.0, saturation, value)
    }
}
