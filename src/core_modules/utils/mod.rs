pub mod hsv_helper;
