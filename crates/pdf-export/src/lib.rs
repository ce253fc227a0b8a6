pub mod constants;
mod encode;
pub mod export;
mod options;
mod policy;
mod raster;
mod types;

pub use encode::{EncodedFrame, encode_frame};
pub use export::{PageUnit, append_to_document, build_document, page_units, save, save_all};
pub use options::SaveOptions;
pub use policy::ModePolicy;
pub use raster::RasterImage;
pub use types::*;
