// THEORY:
// The `bound_box` module defines the classification geometry of the engine:
// axis-aligned, closed rectangular intervals in HSV space, and the ordered
// collections of them that are evaluated together in one batch. It also owns
// the shape validator — the only gate between caller-supplied bound data and
// the scan loop.
//
// Key architectural principles:
// 1.  **Dumb geometry, strict gate**: A `BoundBox` is a plain data pair of
//     lower/upper corners; it carries no behavior beyond construction
//     helpers. All admissibility rules live in the validator, which runs to
//     completion (or fails) before a single pixel is read.
// 2.  **Dimensionality is a set property**: An individual box may be 2-D
//     (hue, saturation) or 3-D (hue, saturation, value), but every box in a
//     set scanned together must agree on one dimensionality, and enabling
//     the value-channel check forces 3-D. The validator returns the agreed
//     dimensionality so callers never have to re-derive it.
// 3.  **Inverted bounds are not errors**: A box whose lower corner exceeds
//     its upper corner in some channel describes an empty region. It matches
//     nothing, which is a valid scan outcome, so the validator deliberately
//     does not reject it.

use crate::core_modules::error::{BoundField, ScanError};

/// A closed rectangular interval in 2 (H, S) or 3 (H, S, V) channel
/// dimensions. Both corners are inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundBox {
    /// The inclusive lower corner, one entry per channel.
    pub lower: Vec<f64>,
    /// The inclusive upper corner, same length as `lower` once validated.
    pub upper: Vec<f64>,
}

impl BoundBox {
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Self {
        Self { lower, upper }
    }

    /// A 2-D box over hue and saturation only.
    pub fn hs(lower: [f64; 2], upper: [f64; 2]) -> Self {
        Self::new(lower.to_vec(), upper.to_vec())
    }

    /// A 3-D box over hue, saturation and value.
    pub fn hsv(lower: [f64; 3], upper: [f64; 3]) -> Self {
        Self::new(lower.to_vec(), upper.to_vec())
    }

    /// Checks this box's shape in isolation, reporting failures under the
    /// given set index. Returns the box's dimensionality.
    pub fn validate_shape(&self, index: usize, check_value: bool) -> Result<usize, ScanError> {
        let expected: &'static str = if check_value { "3" } else { "2 or 3" };
        let admissible = |length: usize| {
            if check_value {
                length == 3
            } else {
                length == 2 || length == 3
            }
        };

        if !admissible(self.lower.len()) {
            return Err(ScanError::InvalidBoundShape {
                field: BoundField::Lower,
                index,
                expected,
                actual: self.lower.len(),
            });
        }
        if !admissible(self.upper.len()) {
            return Err(ScanError::InvalidBoundShape {
                field: BoundField::Upper,
                index,
                expected,
                actual: self.upper.len(),
            });
        }
        if self.lower.len() != self.upper.len() {
            return Err(ScanError::UnevenBounds {
                index,
                lower: self.lower.len(),
                upper: self.upper.len(),
            });
        }
        Ok(self.lower.len())
    }
}

/// An ordered collection of `BoundBox`es evaluated together in one pass over
/// the channel planes. Order is preserved into the result sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundSet {
    /// The boxes, in evaluation (and result) order.
    pub boxes: Vec<BoundBox>,
}

impl BoundSet {
    pub fn new(boxes: Vec<BoundBox>) -> Self {
        Self { boxes }
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Validates every box and their agreement on dimensionality. Returns
    /// the common dimensionality of the set.
    ///
    /// An empty set is valid (it scans into an empty result sequence); its
    /// nominal dimensionality is the minimum the check mode admits.
    pub fn validate(&self, check_value: bool) -> Result<usize, ScanError> {
        let mut set_dimensions: Option<usize> = None;
        for (index, bound_box) in self.boxes.iter().enumerate() {
            let dimensions = bound_box.validate_shape(index, check_value)?;
            match set_dimensions {
                None => set_dimensions = Some(dimensions),
                Some(expected) if expected != dimensions => {
                    return Err(ScanError::MismatchedBoundSet {
                        index,
                        expected,
                        actual: dimensions,
                    });
                }
                Some(_) => {}
            }
        }
        Ok(set_dimensions.unwrap_or(if check_value { 3 } else { 2 }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_two_dimensional_boxes_without_value_check() {
        let set = BoundSet::new(vec![
            BoundBox::hs([0.0, 0.0], [0.5, 0.5]),
            BoundBox::hs([0.5, 0.5], [1.0, 1.0]),
        ]);
        assert_eq!(set.validate(false), Ok(2));
    }

    #[test]
    fn accepts_three_dimensional_boxes_in_both_modes() {
        let set = BoundSet::new(vec![BoundBox::hsv([0.0, 0.0, 0.0], [1.0, 1.0, 1.0])]);
        assert_eq!(set.validate(false), Ok(3));
        assert_eq!(set.validate(true), Ok(3));
    }

    #[test]
    fn rejects_short_lower_bound_when_value_check_enabled() {
        let set = BoundSet::new(vec![BoundBox::new(vec![0.0, 0.0], vec![1.0, 1.0, 1.0])]);
        assert_eq!(
            set.validate(true),
            Err(ScanError::InvalidBoundShape {
                field: BoundField::Lower,
                index: 0,
                expected: "3",
                actual: 2,
            })
        );
    }

    #[test]
    fn rejects_uneven_lower_and_upper_lengths() {
        let set = BoundSet::new(vec![BoundBox::new(vec![0.0, 0.0], vec![1.0, 1.0, 1.0])]);
        assert_eq!(
            set.validate(false),
            Err(ScanError::UnevenBounds {
                index: 0,
                lower: 2,
                upper: 3,
            })
        );
    }

    #[test]
    fn rejects_mixed_dimensionality_within_one_set() {
        let set = BoundSet::new(vec![
            BoundBox::hs([0.0, 0.0], [1.0, 1.0]),
            BoundBox::hsv([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
        ]);
        assert_eq!(
            set.validate(false),
            Err(ScanError::MismatchedBoundSet {
                index: 1,
                expected: 2,
                actual: 3,
            })
        );
    }

    #[test]
    fn rejects_oversized_bounds_in_either_mode() {
        let set = BoundSet::new(vec![BoundBox::new(
            vec![0.0, 0.0, 0.0, 0.0],
            vec![1.0, 1.0, 1.0, 1.0],
        )]);
        assert!(matches!(
            set.validate(false),
            Err(ScanError::InvalidBoundShape {
                field: BoundField::Lower,
                actual: 4,
                ..
            })
        ));
    }

    #[test]
    fn empty_set_is_valid() {
        assert_eq!(BoundSet::default().validate(false), Ok(2));
        assert_eq!(BoundSet::default().validate(true), Ok(3));
    }
}
