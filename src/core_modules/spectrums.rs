// THEORY:
// The `spectrums` module is a configuration collaborator, not part of the
// engine: it supplies ready-made bound sets for the plant-quantification use
// case this crate grew out of. The scanning pipeline itself holds no default
// bounds — callers either build their own boxes or start from these presets
// and tune them per imaging setup.
//
// All presets are 3-D (hue, saturation, value) with every channel normalized
// to [0, 1], so they are admissible in both check modes. The values are
// deliberately wide starting points; lighting rigs and camera profiles shift
// them, which is why they are functions returning owned data rather than
// anything the pipeline consults implicitly.

use crate::core_modules::bound_box::{BoundBox, BoundSet};

/// Preset names, in the order `default_spectrums` emits their boxes.
pub const DEFAULT_SPECTRUM_NAMES: [&str; 4] = ["green", "drought", "root", "identifier"];

/// Healthy green plant tissue.
pub fn green() -> BoundBox {
    BoundBox::hsv([0.167, 0.10, 0.02], [0.472, 1.0, 1.0])
}

/// Drought-stressed tissue: yellows through browns.
pub fn drought() -> BoundBox {
    BoundBox::hsv([0.056, 0.10, 0.10], [0.167, 1.0, 1.0])
}

/// Pale root tissue against a dark scan background.
pub fn root() -> BoundBox {
    BoundBox::hsv([0.0, 0.0, 0.30], [0.167, 0.30, 1.0])
}

/// The pink size-identifier marker placed in frame for area calibration.
pub fn identifier() -> BoundBox {
    BoundBox::hsv([0.875, 0.30, 0.20], [1.0, 1.0, 1.0])
}

/// The full preset collection, ordered as `DEFAULT_SPECTRUM_NAMES`.
pub fn default_spectrums() -> BoundSet {
    BoundSet::new(vec![green(), drought(), root(), identifier()])
}
