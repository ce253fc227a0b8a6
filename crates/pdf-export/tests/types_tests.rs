use pdf_export::constants::px_to_pt;
use pdf_export::*;

#[test]
fn test_color_mode_display() {
    assert_eq!(ColorMode::Bilevel.to_string(), "1");
    assert_eq!(ColorMode::Gray.to_string(), "L");
    assert_eq!(ColorMode::GrayAlpha.to_string(), "LA");
    assert_eq!(ColorMode::Palette.to_string(), "P");
    assert_eq!(ColorMode::Rgb.to_string(), "RGB");
    assert_eq!(ColorMode::Rgba.to_string(), "RGBA");
    assert_eq!(ColorMode::Cmyk.to_string(), "CMYK");
}

#[test]
fn test_filter_pdf_names() {
    assert_eq!(Filter::AsciiHex.pdf_name(), "ASCIIHexDecode");
    assert_eq!(Filter::Dct.pdf_name(), "DCTDecode");
    assert_eq!(Filter::Flate.pdf_name(), "FlateDecode");
    assert_eq!(Filter::RunLength.pdf_name(), "RunLengthDecode");
}

#[test]
fn test_frame_len_per_mode() {
    // Bilevel rows are padded to byte boundaries
    assert_eq!(ColorMode::Bilevel.frame_len(10, 3), 2 * 3);
    assert_eq!(ColorMode::Bilevel.frame_len(8, 2), 1 * 2);
    assert_eq!(ColorMode::Gray.frame_len(4, 5), 20);
    assert_eq!(ColorMode::GrayAlpha.frame_len(4, 5), 40);
    assert_eq!(ColorMode::Palette.frame_len(4, 5), 20);
    assert_eq!(ColorMode::Rgb.frame_len(4, 5), 60);
    assert_eq!(ColorMode::Rgba.frame_len(4, 5), 80);
    assert_eq!(ColorMode::Cmyk.frame_len(4, 5), 80);
}

#[test]
fn test_px_to_pt_identity_at_default_resolution() {
    for w in [0u32, 1, 7, 72, 100, 1000, 4096] {
        assert_eq!(px_to_pt(w, 72.0), w as i64);
    }
}

#[test]
fn test_px_to_pt_monotonic() {
    let mut previous = px_to_pt(0, 100.0);
    for w in 1..500 {
        let current = px_to_pt(w, 100.0);
        assert!(current >= previous);
        previous = current;
    }
}

#[test]
fn test_px_to_pt_truncates() {
    // 100 * 72 / 96 = 75.0 exactly, 99 * 72 / 96 = 74.25 -> 74
    assert_eq!(px_to_pt(100, 96.0), 75);
    assert_eq!(px_to_pt(99, 96.0), 74);
    assert_eq!(px_to_pt(200, 100.0), 144);
    assert_eq!(px_to_pt(1, 300.0), 0);
}

#[test]
fn test_error_messages_name_the_culprit() {
    let err = ExportError::UnsupportedMode(ColorMode::Rgba);
    assert_eq!(err.to_string(), "cannot save mode RGBA");

    let err = ExportError::UnsupportedFilter(Filter::Flate);
    assert_eq!(err.to_string(), "unsupported PDF filter (FlateDecode)");
}

#[test]
fn test_raster_image_rejects_bad_buffer() {
    let result = RasterImage::new(ColorMode::Rgb, 2, 2, vec![0; 11]);
    match result {
        Err(ExportError::Raster(msg)) => assert!(msg.contains("12 bytes")),
        _ => panic!("Expected Raster error"),
    }

    assert!(RasterImage::new(ColorMode::Rgb, 0, 2, vec![]).is_err());
}

#[test]
fn test_raster_image_frames() {
    let mut img = RasterImage::new(ColorMode::Gray, 2, 2, vec![0; 4]).unwrap();
    assert_eq!(img.frame_count(), 1);

    img.add_frame(vec![1; 4]).unwrap();
    assert_eq!(img.frame_count(), 2);
    assert_eq!(img.frame_data(1).unwrap(), &[1; 4]);

    assert!(img.add_frame(vec![0; 3]).is_err());
    assert!(img.frame_data(2).is_err());
}

#[test]
fn test_palette_validation() {
    let mut img = RasterImage::new(ColorMode::Palette, 2, 2, vec![0; 4]).unwrap();
    assert!(img.set_palette(vec![0; 4]).is_err());
    assert!(img.set_palette(vec![0; 769]).is_err());
    assert!(img.set_palette(vec![]).is_err());

    img.set_palette(vec![0; 768]).unwrap();
    assert_eq!(img.palette().unwrap().len(), 768);
}
