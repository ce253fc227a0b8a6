//! Per-color-mode export policy
//!
//! One static table decides, for every supported color mode, which stream
//! filter encodes the pixels, which color space the image resource declares,
//! how many bits each component occupies, and which procedure set the page
//! announces.

use crate::types::{ColorMode, ColorSpaceKind, ExportError, Filter, ProcSet, Result};

/// Encoding decisions for one color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModePolicy {
    pub filter: Filter,
    pub color_space: ColorSpaceKind,
    pub bits_per_component: u8,
    pub proc_set: ProcSet,
}

impl ModePolicy {
    /// Look up the policy for a color mode.
    ///
    /// Fails with [`ExportError::UnsupportedMode`] for any mode outside the
    /// five supported ones. The failure is fatal to the whole save: pages
    /// already written reference earlier identifiers, so one unsupported
    /// image invalidates the entire document.
    // TODO: move Bilevel and Palette to RunLengthDecode or FlateDecode once
    // encoders for those filters are wired into the dispatcher.
    pub fn for_mode(mode: ColorMode) -> Result<Self> {
        match mode {
            ColorMode::Bilevel => Ok(Self {
                filter: Filter::AsciiHex,
                color_space: ColorSpaceKind::DeviceGray,
                bits_per_component: 1,
                proc_set: ProcSet::ImageB,
            }),
            ColorMode::Gray => Ok(Self {
                filter: Filter::Dct,
                color_space: ColorSpaceKind::DeviceGray,
                bits_per_component: 8,
                proc_set: ProcSet::ImageB,
            }),
            ColorMode::Palette => Ok(Self {
                filter: Filter::AsciiHex,
                color_space: ColorSpaceKind::IndexedRgb,
                bits_per_component: 8,
                proc_set: ProcSet::ImageI,
            }),
            ColorMode::Rgb => Ok(Self {
                filter: Filter::Dct,
                color_space: ColorSpaceKind::DeviceRgb,
                bits_per_component: 8,
                proc_set: ProcSet::ImageC,
            }),
            ColorMode::Cmyk => Ok(Self {
                filter: Filter::Dct,
                color_space: ColorSpaceKind::DeviceCmyk,
                bits_per_component: 8,
                proc_set: ProcSet::ImageC,
            }),
            other => Err(ExportError::UnsupportedMode(other)),
        }
    }
}
