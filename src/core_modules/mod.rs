pub mod bound_box;
pub mod error;
pub mod hsv_planes;
pub mod range_scanner;
pub mod spectrums;
pub mod utils;
