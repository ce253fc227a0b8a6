use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot save mode {0}")]
    UnsupportedMode(ColorMode),
    #[error("unsupported PDF filter ({0})")]
    UnsupportedFilter(Filter),
    #[error("cannot append to existing document: {0}")]
    MalformedDocument(String),
    #[error("Invalid raster image: {0}")]
    Raster(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("JPEG encoding error: {0}")]
    Jpeg(#[from] jpeg_encoder::EncodingError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Color mode of a source raster image.
///
/// Only `Bilevel`, `Gray`, `Palette`, `Rgb` and `Cmyk` can be exported;
/// the remaining variants exist so that unsupported inputs are
/// representable and fail at policy lookup rather than at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorMode {
    /// 1 bit per pixel, packed 8 pixels per byte, MSB first
    Bilevel,
    /// 8-bit grayscale
    Gray,
    /// 8-bit grayscale with alpha
    GrayAlpha,
    /// 8-bit palette indices into an RGB palette
    Palette,
    /// 8-bit RGB
    Rgb,
    /// 8-bit RGB with alpha
    Rgba,
    /// 8-bit CMYK
    Cmyk,
}

impl ColorMode {
    /// Bytes occupied by one frame of the given pixel dimensions.
    pub fn frame_len(self, width: u32, height: u32) -> usize {
        let (w, h) = (width as usize, height as usize);
        match self {
            ColorMode::Bilevel => w.div_ceil(8) * h,
            ColorMode::Gray | ColorMode::Palette => w * h,
            ColorMode::GrayAlpha => 2 * w * h,
            ColorMode::Rgb => 3 * w * h,
            ColorMode::Rgba | ColorMode::Cmyk => 4 * w * h,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorMode::Bilevel => "1",
            ColorMode::Gray => "L",
            ColorMode::GrayAlpha => "LA",
            ColorMode::Palette => "P",
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
            ColorMode::Cmyk => "CMYK",
        })
    }
}

/// PDF stream filters the policy table can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Filter {
    AsciiHex,
    Dct,
    Flate,
    RunLength,
}

impl Filter {
    /// The filter's name as written into stream dictionaries.
    pub fn pdf_name(self) -> &'static str {
        match self {
            Filter::AsciiHex => "ASCIIHexDecode",
            Filter::Dct => "DCTDecode",
            Filter::Flate => "FlateDecode",
            Filter::RunLength => "RunLengthDecode",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pdf_name())
    }
}

/// Shape of the color space declaration an image resource carries.
///
/// `IndexedRgb` expands to the compound `[/Indexed /DeviceRGB 255 <palette>]`
/// form and needs the source image's palette bytes at assembly time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpaceKind {
    DeviceGray,
    DeviceRgb,
    DeviceCmyk,
    IndexedRgb,
}

/// Procedure-set tag declared in a page's resource dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcSet {
    /// Grayscale images
    ImageB,
    /// Color images
    ImageC,
    /// Indexed (palette) images
    ImageI,
}

impl ProcSet {
    pub fn name(self) -> &'static str {
        match self {
            ProcSet::ImageB => "ImageB",
            ProcSet::ImageC => "ImageC",
            ProcSet::ImageI => "ImageI",
        }
    }
}
