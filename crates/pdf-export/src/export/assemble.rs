//! Object-graph assembly for exported pages
//!
//! This module writes the per-page object triples (image resource, page,
//! page contents) plus the shared page tree and catalog into a
//! `lopdf::Document`, which owns identifier allocation and the final
//! cross-reference table.

use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::constants::{IMAGE_RESOURCE_NAME, px_to_pt};
use crate::encode::{EncodedFrame, encode_frame};
use crate::policy::ModePolicy;
use crate::types::{ColorSpaceKind, ExportError, Result};

use super::PageUnit;

// =============================================================================
// Page Assembly
// =============================================================================

/// Write one page per unit and return the grown kids list.
///
/// All identifier triples are allocated before any object is written, so
/// every page dictionary can reference its later-numbered contents stream
/// without a second pass. `kids` arrives pre-seeded with the existing page
/// references in append mode.
pub(crate) fn assemble_pages(
    doc: &mut Document,
    pages_root: ObjectId,
    mut kids: Vec<Object>,
    units: &[PageUnit<'_>],
    resolution: f32,
) -> Result<Vec<Object>> {
    let ids: Vec<(ObjectId, ObjectId, ObjectId)> = units
        .iter()
        .map(|_| {
            (
                doc.new_object_id(),
                doc.new_object_id(),
                doc.new_object_id(),
            )
        })
        .collect();

    for (unit, &(image_id, page_id, contents_id)) in units.iter().zip(&ids) {
        let policy = ModePolicy::for_mode(unit.image.mode())?;
        let encoded = encode_frame(unit.image, unit.frame, policy.filter)?;

        // Same conversion feeds the media box and the paint transform.
        let page_width = px_to_pt(unit.image.width(), resolution);
        let page_height = px_to_pt(unit.image.height(), resolution);

        write_image_resource(doc, image_id, &policy, encoded, unit.image.palette())?;
        write_page(doc, page_id, pages_root, image_id, contents_id, &policy, page_width, page_height);
        write_contents(doc, contents_id, page_width, page_height);

        kids.push(Object::Reference(page_id));
    }

    Ok(kids)
}

/// The embedded image XObject. Width/Height come from the encoder, which
/// reshapes bilevel frames; the page geometry stays with the caller.
fn write_image_resource(
    doc: &mut Document,
    image_id: ObjectId,
    policy: &ModePolicy,
    encoded: EncodedFrame,
    palette: Option<&[u8]>,
) -> Result<()> {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(encoded.width as i64));
    dict.set("Height", Object::Integer(encoded.height as i64));
    dict.set(
        "Filter",
        Object::Name(policy.filter.pdf_name().as_bytes().to_vec()),
    );
    dict.set(
        "BitsPerComponent",
        Object::Integer(policy.bits_per_component as i64),
    );
    dict.set(
        "ColorSpace",
        color_space_object(policy.color_space, palette)?,
    );

    let stream = Stream::new(dict, encoded.data).with_compression(false);
    doc.objects.insert(image_id, Object::Stream(stream));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn write_page(
    doc: &mut Document,
    page_id: ObjectId,
    pages_root: ObjectId,
    image_id: ObjectId,
    contents_id: ObjectId,
    policy: &ModePolicy,
    page_width: i64,
    page_height: i64,
) {
    let mut xobjects = Dictionary::new();
    xobjects.set(IMAGE_RESOURCE_NAME, Object::Reference(image_id));

    let mut resources = Dictionary::new();
    resources.set(
        "ProcSet",
        Object::Array(vec![
            Object::Name(b"PDF".to_vec()),
            Object::Name(policy.proc_set.name().as_bytes().to_vec()),
        ]),
    );
    resources.set("XObject", Object::Dictionary(xobjects));

    let mut page = Dictionary::new();
    page.set("Type", Object::Name(b"Page".to_vec()));
    page.set("Parent", Object::Reference(pages_root));
    page.set("Resources", Object::Dictionary(resources));
    page.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(page_width),
            Object::Integer(page_height),
        ]),
    );
    page.set("Contents", Object::Reference(contents_id));

    doc.objects.insert(page_id, Object::Dictionary(page));
}

/// The fixed paint program: scale the unit square to the page box, draw the
/// image resource, restore state.
fn write_contents(doc: &mut Document, contents_id: ObjectId, page_width: i64, page_height: i64) {
    let program = format!(
        "q {} 0 0 {} 0 0 cm /{} Do Q\n",
        page_width, page_height, IMAGE_RESOURCE_NAME
    );
    doc.objects.insert(
        contents_id,
        Object::Stream(Stream::new(Dictionary::new(), program.into_bytes())),
    );
}

fn color_space_object(kind: ColorSpaceKind, palette: Option<&[u8]>) -> Result<Object> {
    match kind {
        ColorSpaceKind::DeviceGray => Ok(Object::Name(b"DeviceGray".to_vec())),
        ColorSpaceKind::DeviceRgb => Ok(Object::Name(b"DeviceRGB".to_vec())),
        ColorSpaceKind::DeviceCmyk => Ok(Object::Name(b"DeviceCMYK".to_vec())),
        ColorSpaceKind::IndexedRgb => {
            let palette = palette.ok_or_else(|| {
                ExportError::Raster("palette-mode image has no palette".to_string())
            })?;
            Ok(Object::Array(vec![
                Object::Name(b"Indexed".to_vec()),
                Object::Name(b"DeviceRGB".to_vec()),
                Object::Integer(255),
                Object::String(palette.to_vec(), StringFormat::Hexadecimal),
            ]))
        }
    }
}

// =============================================================================
// Page Tree and Catalog
// =============================================================================

/// Write the pages-tree root with the final kids list.
///
/// In append mode the root object already exists; its other keys are kept
/// and only Kids and Count change.
pub(crate) fn write_pages_tree(doc: &mut Document, pages_root: ObjectId, kids: Vec<Object>) {
    let count = kids.len() as i64;
    let mut pages_dict = match doc.objects.get(&pages_root) {
        Some(Object::Dictionary(existing)) => existing.clone(),
        _ => Dictionary::from_iter(vec![("Type", Object::Name(b"Pages".to_vec()))]),
    };
    pages_dict.set("Kids", Object::Array(kids));
    pages_dict.set("Count", Object::Integer(count));
    doc.objects
        .insert(pages_root, Object::Dictionary(pages_dict));
}

/// Write the catalog and document information dictionary of a fresh
/// document and point the trailer at the catalog.
pub(crate) fn write_catalog(doc: &mut Document, pages_root: ObjectId) {
    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_root)),
    ]));
    doc.trailer.set("Root", catalog_id);

    let info_id = doc.add_object(Dictionary::from_iter(vec![(
        "Producer",
        Object::string_literal(concat!("pdf-export ", env!("CARGO_PKG_VERSION"))),
    )]));
    doc.trailer.set("Info", info_id);
}
