// THEORY:
// The `pipeline` module is the top-level API for the scanning engine. It
// encapsulates the full stack — shape validation, the empty-input gate, and
// the per-box linear scans — into a single, easy-to-use interface. Callers
// hand it channel planes and bound data and receive plain result records;
// they never touch the scan loop directly.
//
// The batch entry point is the reason this crate exists: K classifications
// are evaluated over the same channel planes in one invocation, so the
// planes are marshaled out of the source image once instead of once per
// box. The per-pixel comparison cost is identical to K separate calls; what
// batching removes is the K-fold re-extraction of a potentially
// multi-million-sample array.
//
// Validation is strict and total: the whole bound set is checked before the
// first pixel is read, and a failure returns no partial results.

use crate::core_modules::bound_box::{BoundBox, BoundSet};
use crate::core_modules::error::ScanError;
use crate::core_modules::hsv_planes::hsv_planes::HsvPlanes;
use crate::core_modules::range_scanner::range_scanner;

// Re-export key data structures for the public API.
pub use crate::core_modules::error::BoundField;
pub use crate::core_modules::range_scanner::{PixelCoord, ScanResult};

/// Configuration for a `ScanPipeline`, fixed for its lifetime.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanConfig {
    /// Whether the value channel participates in membership testing. When
    /// set, every bound box must be 3-D; when unset, 2-D and 3-D boxes are
    /// both admissible but only hue and saturation are compared.
    pub check_value: bool,
}

/// The main, top-level struct for the scanning engine.
pub struct ScanPipeline {
    config: ScanConfig,
}

impl ScanPipeline {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> ScanConfig {
        self.config
    }

    /// Classifies the planes against a single bound box.
    ///
    /// This is the K=1 case of `scan_batch` and shares its validation and
    /// scan path.
    pub fn scan_single(
        &self,
        planes: &HsvPlanes,
        bound_box: &BoundBox,
    ) -> Result<ScanResult, ScanError> {
        bound_box.validate_shape(0, self.config.check_value)?;
        Self::ensure_scannable(planes)?;
        Ok(range_scanner::scan(
            planes,
            bound_box,
            self.config.check_value,
        ))
    }

    /// Classifies the planes against every box of the set, reusing the same
    /// planes for each pass. Results come back in set order, one per box.
    ///
    /// An empty set yields an empty vector. Any shape violation fails the
    /// whole call before the first scan; no partial results are returned.
    pub fn scan_batch(
        &self,
        planes: &HsvPlanes,
        bound_set: &BoundSet,
    ) -> Result<Vec<ScanResult>, ScanError> {
        bound_set.validate(self.config.check_value)?;
        Self::ensure_scannable(planes)?;
        Ok(bound_set
            .boxes
            .iter()
            .map(|bound_box| range_scanner::scan(planes, bound_box, self.config.check_value))
            .collect())
    }

    /// Empty planes would make every fraction 0/0; reject them up front
    /// instead of emitting NaN.
    fn ensure_scannable(planes: &HsvPlanes) -> Result<(), ScanError> {
        if planes.is_empty() {
            return Err(ScanError::EmptyPlanes);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_planes() -> HsvPlanes {
        HsvPlanes::new(
            vec![0.1, 0.5, 0.9, 0.7],
            vec![0.1, 0.5, 0.9, 0.7],
            vec![0.5, 0.5, 0.5, 0.5],
            2,
        )
        .expect("valid planes")
    }

    #[test]
    fn batch_equals_repeated_single_scans() {
        let pipeline = ScanPipeline::new(ScanConfig { check_value: false });
        let planes = square_planes();
        let bound_set = BoundSet::new(vec![
            BoundBox::hs([0.0, 0.0], [0.6, 0.6]),
            BoundBox::hs([0.95, 0.95], [1.0, 1.0]),
            BoundBox::hs([0.1, 0.1], [0.9, 0.9]),
        ]);

        let batched = pipeline
            .scan_batch(&planes, &bound_set)
            .expect("valid batch");
        assert_eq!(batched.len(), bound_set.len());

        for (bound_box, batch_result) in bound_set.boxes.iter().zip(&batched) {
            let single = pipeline
                .scan_single(&planes, bound_box)
                .expect("valid single scan");
            assert_eq!(&single, batch_result);
        }
    }

    #[test]
    fn empty_bound_set_yields_empty_results() {
        let pipeline = ScanPipeline::new(ScanConfig::default());
        let results = pipeline
            .scan_batch(&square_planes(), &BoundSet::default())
            .expect("empty set is valid");
        assert!(results.is_empty());
    }

    #[test]
    fn empty_planes_fail_fast() {
        let pipeline = ScanPipeline::new(ScanConfig::default());
        let planes = HsvPlanes::new(vec![], vec![], vec![], 2).expect("geometry is valid");
        let bound_set = BoundSet::new(vec![BoundBox::hs([0.0, 0.0], [1.0, 1.0])]);

        assert_eq!(
            pipeline.scan_batch(&planes, &bound_set),
            Err(ScanError::EmptyPlanes)
        );
        assert_eq!(
            pipeline.scan_single(&planes, &bound_set.boxes[0]),
            Err(ScanError::EmptyPlanes)
        );
    }

    #[test]
    fn invalid_shape_fails_before_any_scan() {
        let pipeline = ScanPipeline::new(ScanConfig { check_value: true });
        // A box that would match every pixel, but with 2-D bounds under the
        // value-check mode. The error must surface instead of any result.
        let bound_box = BoundBox::hs([0.0, 0.0], [1.0, 1.0]);

        let result = pipeline.scan_single(&square_planes(), &bound_box);
        assert_eq!(
            result,
            Err(ScanError::InvalidBoundShape {
                field: BoundField::Lower,
                index: 0,
                expected: "3",
                actual: 2,
            })
        );
    }

    #[test]
    fn mixed_dimensionality_rejects_the_whole_batch() {
        let pipeline = ScanPipeline::new(ScanConfig { check_value: false });
        let bound_set = BoundSet::new(vec![
            BoundBox::hs([0.0, 0.0], [1.0, 1.0]),
            BoundBox::hsv([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
        ]);

        assert!(matches!(
            pipeline.scan_batch(&square_planes(), &bound_set),
            Err(ScanError::MismatchedBoundSet { index: 1, .. })
        ));
    }

    #[test]
    fn count_and_fraction_stay_consistent() {
        let pipeline = ScanPipeline::new(ScanConfig { check_value: false });
        let planes = square_planes();
        let results = pipeline
            .scan_batch(
                &planes,
                &BoundSet::new(vec![
                    BoundBox::hs([0.0, 0.0], [0.6, 0.6]),
                    BoundBox::hs([0.0, 0.0], [1.0, 1.0]),
                ]),
            )
            .expect("valid batch");

        for result in results {
            assert_eq!(result.pixel_count, result.pixel_coords.len());
            assert_eq!(
                result.image_fraction,
                result.pixel_count as f64 / planes.len() as f64
            );
        }
    }
}
