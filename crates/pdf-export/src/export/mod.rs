//! PDF export - turning raster images into document pages
//!
//! This module orchestrates the export process:
//! 1. Enumerate the (image, frame) pairs that become pages
//! 2. Open a fresh document, or parse the existing one when appending
//! 3. Assemble the per-page object graph and the shared page tree
//! 4. Serialize through lopdf, which owns identifiers, xref and trailer

mod assemble;

use std::path::Path;

use lopdf::{Document, Object, ObjectId};

use crate::constants::PDF_VERSION;
use crate::options::SaveOptions;
use crate::raster::RasterImage;
use crate::types::{ExportError, Result};
use assemble::{assemble_pages, write_catalog, write_pages_tree};

/// One (source image, frame index) pair destined to become one page.
#[derive(Debug, Clone, Copy)]
pub struct PageUnit<'a> {
    pub image: &'a RasterImage,
    pub frame: usize,
}

/// Save a single page: the first frame of `image`.
///
/// Honors `options.append`; `options.append_images` is ignored here, use
/// [`save_all`] for multi-image output.
pub async fn save(
    image: &RasterImage,
    output: impl AsRef<Path>,
    options: &SaveOptions,
) -> Result<()> {
    run(image, output.as_ref(), options, false).await
}

/// Save every frame of `image`, then every frame of each entry in
/// `options.append_images`, one page per frame.
pub async fn save_all(
    image: &RasterImage,
    output: impl AsRef<Path>,
    options: &SaveOptions,
) -> Result<()> {
    run(image, output.as_ref(), options, true).await
}

async fn run(
    image: &RasterImage,
    output: &Path,
    options: &SaveOptions,
    all_frames: bool,
) -> Result<()> {
    let image = image.clone();
    let options = options.clone();
    let path = output.to_owned();
    let target = path.clone();

    let bytes =
        tokio::task::spawn_blocking(move || export_bytes(&image, &path, &options, all_frames))
            .await??;

    tokio::fs::write(&target, bytes).await?;
    Ok(())
}

/// Sync core shared by [`save`] and [`save_all`]: assemble the document in
/// memory, then serialize it in one pass. Nothing reaches the destination
/// until assembly has fully succeeded.
fn export_bytes(
    image: &RasterImage,
    path: &Path,
    options: &SaveOptions,
    all_frames: bool,
) -> Result<Vec<u8>> {
    let mut doc = if options.append {
        let mut doc = Document::load(path)
            .map_err(|e| ExportError::MalformedDocument(e.to_string()))?;
        let sources = gather_sources(image, options, all_frames);
        append_to_document(&mut doc, &sources, options, all_frames)?;
        doc
    } else {
        build_document(image, options, all_frames)?
    };

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}

/// Build a fresh document from `image` (and, in all-frames mode, the
/// configured append images).
pub fn build_document(
    image: &RasterImage,
    options: &SaveOptions,
    all_frames: bool,
) -> Result<Document> {
    options.validate()?;

    let mut doc = Document::with_version(PDF_VERSION);
    // Pages-tree root allocated before its children exist; pages reference
    // it as Parent and the tree is written once the kids list is complete.
    let pages_root = doc.new_object_id();

    let sources = gather_sources(image, options, all_frames);
    let units = page_units(&sources, all_frames);
    let kids = assemble_pages(&mut doc, pages_root, Vec::new(), &units, options.resolution)?;

    write_pages_tree(&mut doc, pages_root, kids);
    write_catalog(&mut doc, pages_root);
    Ok(doc)
}

/// Append pages to an already-parsed document.
///
/// The existing page tree is recovered through the catalog, its page
/// references seed the kids list, and new pages are numbered above every
/// prior object. Appending zero sources leaves the page list unchanged.
pub fn append_to_document(
    doc: &mut Document,
    sources: &[&RasterImage],
    options: &SaveOptions,
    all_frames: bool,
) -> Result<()> {
    options.validate()?;

    let (pages_root, kids) = recover_page_tree(doc)?;
    let units = page_units(sources, all_frames);
    let kids = assemble_pages(doc, pages_root, kids, &units, options.resolution)?;
    write_pages_tree(doc, pages_root, kids);
    Ok(())
}

/// Flatten sources into the ordered (image, frame) page list.
///
/// Every source contributes its frames in order, sources in input order.
/// With `all_frames` off only the first frame of each source is used.
pub fn page_units<'a>(sources: &[&'a RasterImage], all_frames: bool) -> Vec<PageUnit<'a>> {
    let mut units = Vec::new();
    for &image in sources {
        let frames = if all_frames { image.frame_count() } else { 1 };
        for frame in 0..frames {
            units.push(PageUnit { image, frame });
        }
    }
    units
}

fn gather_sources<'a>(
    image: &'a RasterImage,
    options: &'a SaveOptions,
    all_frames: bool,
) -> Vec<&'a RasterImage> {
    let mut sources = vec![image];
    if all_frames {
        sources.extend(options.append_images.iter());
    }
    sources
}

fn recover_page_tree(doc: &Document) -> Result<(ObjectId, Vec<Object>)> {
    let malformed =
        |what: &str, e: lopdf::Error| ExportError::MalformedDocument(format!("{}: {}", what, e));

    let catalog_id = doc
        .trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .map_err(|e| malformed("no document catalog", e))?;
    let catalog = doc
        .get_dictionary(catalog_id)
        .map_err(|e| malformed("catalog is not a dictionary", e))?;
    let pages_root = catalog
        .get(b"Pages")
        .and_then(Object::as_reference)
        .map_err(|e| malformed("catalog has no page tree", e))?;
    doc.get_dictionary(pages_root)
        .map_err(|e| malformed("page tree root is not a dictionary", e))?;

    // Seed from the flat page list in display order; the rewritten tree
    // lists every page directly under the root.
    let kids: Vec<Object> = doc
        .get_pages()
        .values()
        .map(|&id| Object::Reference(id))
        .collect();

    Ok((pages_root, kids))
}
