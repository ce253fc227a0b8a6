use pdf_export::*;

#[test]
fn test_hex_payload_is_upper_hex_with_eod() {
    let img = RasterImage::new(ColorMode::Palette, 2, 1, vec![0x0A, 0xFF]).unwrap();
    let encoded = encode_frame(&img, 0, Filter::AsciiHex).unwrap();

    assert_eq!(encoded.data, b"0AFF>".to_vec());
    assert_eq!(encoded.width, 2);
    assert_eq!(encoded.height, 1);
}

#[test]
fn test_bilevel_reshape_declares_pixel_count() {
    // 10x1: packed row is 2 bytes, but the declared geometry must cover
    // every pixel exactly once.
    let img = RasterImage::new(ColorMode::Bilevel, 10, 1, vec![0b1111_1111, 0b1100_0000]).unwrap();
    let encoded = encode_frame(&img, 0, Filter::AsciiHex).unwrap();

    assert_eq!(encoded.width, 10);
    assert_eq!(encoded.height, 1);
    // 10 expanded bytes -> 20 hex digits + EOD
    assert_eq!(encoded.data.len(), 21);
    assert_eq!(*encoded.data.last().unwrap(), b'>');
}

#[test]
fn test_bilevel_reshape_independent_of_aspect_ratio() {
    // Same 12 pixels, three shapes; the declared area is always the pixel count.
    let shapes: [(u32, u32, usize); 3] = [(12, 1, 2), (4, 3, 3), (2, 6, 6)];
    for (w, h, packed_len) in shapes {
        let img = RasterImage::new(ColorMode::Bilevel, w, h, vec![0; packed_len]).unwrap();
        let encoded = encode_frame(&img, 0, Filter::AsciiHex).unwrap();
        assert_eq!(
            encoded.width as usize * encoded.height as usize,
            (w * h) as usize,
            "shape {}x{}",
            w,
            h
        );
        assert_eq!(encoded.height, 1);
    }
}

#[test]
fn test_jpeg_payload_starts_with_soi() {
    let img = RasterImage::new(ColorMode::Gray, 8, 8, vec![128; 64]).unwrap();
    let encoded = encode_frame(&img, 0, Filter::Dct).unwrap();

    assert_eq!(&encoded.data[..2], &[0xFF, 0xD8]);
    assert_eq!(encoded.width, 8);
    assert_eq!(encoded.height, 8);
}

#[test]
fn test_jpeg_rgb_and_cmyk() {
    let rgb = RasterImage::new(ColorMode::Rgb, 4, 4, vec![200; 48]).unwrap();
    assert!(encode_frame(&rgb, 0, Filter::Dct).is_ok());

    let cmyk = RasterImage::new(ColorMode::Cmyk, 4, 4, vec![10; 64]).unwrap();
    assert!(encode_frame(&cmyk, 0, Filter::Dct).is_ok());
}

#[test]
fn test_unimplemented_filters_fail() {
    let img = RasterImage::new(ColorMode::Gray, 2, 2, vec![0; 4]).unwrap();

    for filter in [Filter::Flate, Filter::RunLength] {
        match encode_frame(&img, 0, filter) {
            Err(ExportError::UnsupportedFilter(f)) => assert_eq!(f, filter),
            other => panic!("Expected UnsupportedFilter, got {:?}", other),
        }
    }
}

#[test]
fn test_encode_second_frame() {
    let mut img = RasterImage::new(ColorMode::Palette, 2, 1, vec![0x00, 0x01]).unwrap();
    img.add_frame(vec![0x02, 0x03]).unwrap();

    let first = encode_frame(&img, 0, Filter::AsciiHex).unwrap();
    let second = encode_frame(&img, 1, Filter::AsciiHex).unwrap();
    assert_eq!(first.data, b"0001>".to_vec());
    assert_eq!(second.data, b"0203>".to_vec());
}
