//! Uploaded image summary.

use serde::Serialize;

use crate::constants::{BYTES_PER_KB, SIZE_KB_DECIMALS};

/// What the upload endpoint reports about a received file
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ImageSummary {
    /// Client supplied file name
    #[cfg_attr(feature = "openapi", schema(example = "photo.png"))]
    pub filename: String,
    /// Content type of the part
    #[cfg_attr(feature = "openapi", schema(example = "image/png"))]
    pub format: String,
    /// Size in kilobytes, two decimals
    #[serde(rename = "size(kb)")]
    #[cfg_attr(feature = "openapi", schema(example = 2.0))]
    pub size_kb: f64,
}

impl ImageSummary {
    pub fn new(filename: impl Into<String>, format: impl Into<String>, byte_len: usize) -> Self {
        Self {
            filename: filename.into(),
            format: format.into(),
            size_kb: size_in_kb(byte_len),
        }
    }
}

/// `byte_len / 1024`, rounded to two decimals. Exact half-way values round to even.
pub fn size_in_kb(byte_len: usize) -> f64 {
    let scale = 10f64.powi(SIZE_KB_DECIMALS);
    (byte_len as f64 / BYTES_PER_KB * scale).round_ties_even() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_kilobytes() {
        assert_eq!(size_in_kb(0), 0.0);
        assert_eq!(size_in_kb(1024), 1.0);
        assert_eq!(size_in_kb(2048), 2.0);
    }

    #[test]
    fn rounds_to_two_decimals() {
        // 1500 / 1024 = 1.46484375
        assert_eq!(size_in_kb(1500), 1.46);
        // 1000 / 1024 = 0.9765625
        assert_eq!(size_in_kb(1000), 0.98);
    }

    #[test]
    fn half_way_sizes_round_to_even() {
        // 128 / 1024 = 0.125
        assert_eq!(size_in_kb(128), 0.12);
        // 640 / 1024 = 0.625
        assert_eq!(size_in_kb(640), 0.62);
        // 384 / 1024 = 0.375
        assert_eq!(size_in_kb(384), 0.38);
    }

    #[test]
    fn serializes_size_under_kb_key() {
        let summary = ImageSummary::new("photo.png", "image/png", 2048);
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value["filename"], "photo.png");
        assert_eq!(value["format"], "image/png");
        assert_eq!(value["size(kb)"], 2.0);
    }
}
