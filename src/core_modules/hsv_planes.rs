// THEORY:
// The `HsvPlanes` module is the most fundamental data unit of the scanning
// engine. It is a "dumb" data container: three flat channel planes (hue,
// saturation, value) holding one sample per pixel, plus the image width that
// gives the flat indices their 2-D meaning. It performs no classification of
// its own.
//
// Key architectural principles:
// 1.  **Marshal once, scan many**: The planes are extracted from an image a
//     single time and then shared, read-only, across every bound box scanned
//     against them. This container is the thing being reused; the entire
//     performance rationale of batch scanning is that constructing it is the
//     expensive step, not the per-pixel comparisons.
// 2.  **Validated at the border**: The constructor is the only place plane
//     geometry is checked (equal lengths, non-zero width). Everything
//     downstream can index the planes without re-validating.
// 3.  **Layout contract**: Pixels are flattened with the row coordinate
//     varying fastest: flat index `i` maps to `row = i % width`,
//     `col = i / width` (0-based here; the scanner reports 1-based). The
//     width does not need to divide the pixel count evenly — a partial final
//     column is permitted and simply holds fewer rows.

pub mod hsv_planes {
    use crate::core_modules::error::ScanError;

    /// A "dumb" data container holding the three flat HSV channel planes of
    /// one image, plus the width that shapes them.
    #[derive(Debug, Clone, PartialEq)]
    pub struct HsvPlanes {
        /// The hue samples, one per pixel.
        pub hue: Vec<f64>,
        /// The saturation samples, one per pixel.
        pub saturation: Vec<f64>,
        /// The value (brightness) samples, one per pixel. Always present,
        /// even when a scan ignores the channel.
        pub value: Vec<f64>,
        /// The image width used to map flat indices to (row, col).
        width: u32,
    }

    impl HsvPlanes {
        /// Builds the container, rejecting degenerate geometry.
        pub fn new(
            hue: Vec<f64>,
            saturation: Vec<f64>,
            value: Vec<f64>,
            width: u32,
        ) -> Result<Self, ScanError> {
            if width == 0 {
                return Err(ScanError::InvalidWidth);
            }
            if hue.len() != saturation.len() || hue.len() != value.len() {
                return Err(ScanError::PlaneLengthMismatch {
                    hue: hue.len(),
                    saturation: saturation.len(),
                    value: value.len(),
                });
            }
            Ok(Self {
                hue,
                saturation,
                value,
                width,
            })
        }

        /// The number of pixels in the image.
        pub fn len(&self) -> usize {
            self.hue.len()
        }

        pub fn is_empty(&self) -> bool {
            self.hue.is_empty()
        }

        /// The image width in pixels.
        pub fn width(&self) -> u32 {
            self.width
        }

        /// The number of columns the flat planes span, counting a partial
        /// final column.
        pub fn columns(&self) -> u32 {
            self.len().div_ceil(self.width as usize) as u32
        }
    }

}
