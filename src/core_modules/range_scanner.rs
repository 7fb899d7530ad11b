// THEORY:
// The `RangeScanner` is the engine of the classification layer. It performs
// the single linear pass that decides, for one bound box, which pixels of the
// channel planes fall inside the box's closed intervals.
//
// Key architectural principles & algorithm steps:
// 1.  **One pass, ascending order**: The scanner walks the flat planes from
//     index 0 to N-1 exactly once per box. Matches are accumulated in
//     ascending flat-index order — this ordering is part of the output
//     contract, not an implementation detail, because downstream consumers
//     index into the coordinate list positionally.
// 2.  **Closed intervals, exact comparison**: Membership is
//     `lower <= sample <= upper` per checked channel. Both ends are
//     inclusive, and no epsilon is applied — boundary pixels are governed by
//     exact floating-point `<=` semantics.
// 3.  **Hoisted bounds, split loops**: The box's corners are loaded into
//     locals before the pass, and the value-channel check is decided once
//     rather than per pixel, keeping the hot loop to pure comparisons.
// 4.  **Stateless utility**: Like the other scan stages, the scanner holds no
//     state. It reads the shared planes, writes only its own output, and is
//     therefore trivially safe to run concurrently for independent boxes.
//
// The scanner assumes its inputs already passed validation: the bound box has
// an admissible shape (3-D when `check_value` is set) and the planes are
// non-empty. The pipeline layers enforce both before dispatching.

use crate::core_modules::bound_box::BoundBox;
use crate::core_modules::hsv_planes::hsv_planes::HsvPlanes;

/// A single matching pixel location. Both coordinates are 1-based; `row` is
/// the fast-varying axis of the flat plane layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelCoord {
    pub row: u32,
    pub col: u32,
}

/// The per-bound-box output record of a scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    /// Matching pixel locations in ascending flat-index order. Empty when no
    /// pixel matched — a valid, non-exceptional outcome.
    pub pixel_coords: Vec<PixelCoord>,
    /// The number of matches; always equal to `pixel_coords.len()`.
    pub pixel_count: usize,
    /// `pixel_count` as a fraction of the total pixel count, in [0, 1].
    pub image_fraction: f64,
}

pub mod range_scanner {
    use super::*; // Make structs from parent module available.

    /// Scans the planes once for a single validated bound box.
    pub fn scan(planes: &HsvPlanes, bound_box: &BoundBox, check_value: bool) -> ScanResult {
        let pixel_total = planes.len();
        let width = planes.width() as usize;
        let mut pixel_coords: Vec<PixelCoord> = Vec::new();

        // The bounds are loop-invariant; hoist them out of the hot loop.
        let lower_hue = bound_box.lower[0];
        let lower_saturation = bound_box.lower[1];
        let upper_hue = bound_box.upper[0];
        let upper_saturation = bound_box.upper[1];

        if check_value {
            let lower_value = bound_box.lower[2];
            let upper_value = bound_box.upper[2];
            for i in 0..pixel_total {
                if lower_hue <= planes.hue[i]
                    && planes.hue[i] <= upper_hue
                    && lower_saturation <= planes.saturation[i]
                    && planes.saturation[i] <= upper_saturation
                    && lower_value <= planes.value[i]
                    && planes.value[i] <= upper_value
                {
                    pixel_coords.push(coord_of(i, width));
                }
            }
        } else {
            for i in 0..pixel_total {
                if lower_hue <= planes.hue[i]
                    && planes.hue[i] <= upper_hue
                    && lower_saturation <= planes.saturation[i]
                    && planes.saturation[i] <= upper_saturation
                {
                    pixel_coords.push(coord_of(i, width));
                }
            }
        }

        let pixel_count = pixel_coords.len();
        ScanResult {
            image_fraction: pixel_count as f64 / pixel_total as f64,
            pixel_count,
            pixel_coords,
        }
    }

    /// Maps a flat plane index to its 1-based (row, col) location.
    #[inline]
    fn coord_of(i: usize, width: usize) -> PixelCoord {
        PixelCoord {
            row: (i % width) as u32 + 1,
            col: (i / width) as u32 + 1,
        }
    }
}
