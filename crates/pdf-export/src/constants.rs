//! Shared constants for PDF export
//!
//! This module centralizes the unit conversion and the handful of fixed
//! names and parameters used throughout the export process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Page-space units per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// Resolution assumed when the caller does not specify one (1 pixel = 1 point)
pub const DEFAULT_RESOLUTION: f32 = 72.0;

/// Convert a pixel extent to page-space points at the given resolution.
///
/// Truncates toward zero. The assembler uses this single function for both
/// the media box and the content-stream transform; the two must agree or the
/// painted image will not fill the page.
#[inline]
pub fn px_to_pt(pixels: u32, resolution: f32) -> i64 {
    (pixels as f64 * POINTS_PER_INCH / resolution as f64) as i64
}

// =============================================================================
// Document Fixtures
// =============================================================================

/// PDF version written into the header of fresh documents
pub const PDF_VERSION: &str = "1.7";

/// Name under which each page's single image resource is registered
pub const IMAGE_RESOURCE_NAME: &str = "image";

/// Quality passed to the DCT (JPEG) encoder
pub const JPEG_QUALITY: u8 = 75;
