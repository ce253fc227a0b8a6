use pdf_export::*;

#[test]
fn test_defaults() {
    let options = SaveOptions::default();
    assert_eq!(options.resolution, 72.0);
    assert!(!options.append);
    assert!(options.append_images.is_empty());
}

#[test]
fn test_validation_rejects_bad_resolution() {
    let mut options = SaveOptions::default();
    assert!(options.validate().is_ok());

    options.resolution = 0.0;
    assert!(options.validate().is_err());

    options.resolution = -72.0;
    assert!(options.validate().is_err());

    options.resolution = f32::NAN;
    match options.validate() {
        Err(ExportError::Config(msg)) => assert!(msg.contains("resolution")),
        _ => panic!("Expected Config error"),
    }

    options.resolution = 300.0;
    assert!(options.validate().is_ok());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let mut options = SaveOptions {
        resolution: 150.0,
        append: true,
        append_images: Vec::new(),
    };
    options
        .append_images
        .push(RasterImage::new(ColorMode::Gray, 2, 2, vec![0; 4]).unwrap());

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = SaveOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}
