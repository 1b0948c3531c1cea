//! Single-page PDF container assembly
//!
//! Embeds the composed surface into an A4 portrait page, scaled to fill
//! the printable width inside the page margins. Content past the printable
//! height is clipped, not paginated.

use super::template::{RunStyle, Surface, PAGE_HEIGHT_MM, PAGE_MARGIN_MM, PAGE_WIDTH_MM};
use super::RenderError;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

const POINTS_PER_MM: f32 = 72.0 / 25.4;

fn real(v: f32) -> Object {
    Object::Real(v)
}

/// Which of the two page fonts a run uses
fn font_name(style: RunStyle) -> &'static str {
    match style {
        RunStyle::Title | RunStyle::Heading | RunStyle::Label => "F2",
        _ => "F1",
    }
}

/// Fill tone per run role (0.0 = black)
fn fill_gray(style: RunStyle) -> f32 {
    match style {
        RunStyle::Label => 0.45,
        RunStyle::Subtitle => 0.35,
        RunStyle::Footer => 0.6,
        _ => 0.0,
    }
}

/// Assemble the surface into PDF bytes
pub(crate) fn assemble(surface: &Surface) -> Result<Vec<u8>, RenderError> {
    let page_w = PAGE_WIDTH_MM * POINTS_PER_MM;
    let page_h = PAGE_HEIGHT_MM * POINTS_PER_MM;
    let margin = PAGE_MARGIN_MM * POINTS_PER_MM;
    let printable_w = page_w - 2.0 * margin;
    let printable_h = page_h - 2.0 * margin;

    // The surface fills the printable width; height is capped at the
    // printable area and anything past it is dropped.
    let scale = printable_w / surface.width;
    let clip_limit = margin + printable_h;

    let mut ops: Vec<Operation> = Vec::new();

    ops.push(Operation::new(
        "RG",
        vec![real(0.78), real(0.78), real(0.78)],
    ));
    ops.push(Operation::new("w", vec![real(0.7)]));
    for rule in &surface.rules {
        let y_top = margin + rule.y * scale;
        if y_top > clip_limit {
            continue;
        }
        let y = page_h - y_top;
        ops.push(Operation::new(
            "m",
            vec![real(margin + rule.x0 * scale), real(y)],
        ));
        ops.push(Operation::new(
            "l",
            vec![real(margin + rule.x1 * scale), real(y)],
        ));
        ops.push(Operation::new("S", vec![]));
    }

    for run in &surface.runs {
        let y_top = margin + run.y * scale;
        if y_top > clip_limit {
            continue;
        }
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new("g", vec![real(fill_gray(run.style))]));
        ops.push(Operation::new(
            "Tf",
            vec![font_name(run.style).into(), real(run.size * scale)],
        ));
        ops.push(Operation::new(
            "Td",
            vec![real(margin + run.x * scale), real(page_h - y_top)],
        ));
        ops.push(Operation::new(
            "Tj",
            vec![Object::string_literal(run.text.as_str())],
        ));
        ops.push(Operation::new("ET", vec![]));
    }

    let content = Content { operations: ops };
    let encoded = content
        .encode()
        .map_err(|e| RenderError::Content(e.to_string()))?;

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    // TODO: embed a subsetted Unicode font so the Arabic text shapes
    // correctly in viewers that do not substitute one for Helvetica.
    let font_regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let font_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_regular,
            "F2" => font_bold,
        },
    });

    let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Resources" => resources_id,
        "MediaBox" => vec![real(0.0), real(0.0), real(page_w), real(page_h)],
        "Contents" => content_id,
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| RenderError::Assembly(e.to_string()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::super::template::{Rule, TextRun};
    use super::*;

    fn small_surface() -> Surface {
        Surface {
            width: 1587.4,
            height: 2245.0,
            runs: vec![TextRun {
                x: 64.0,
                y: 112.0,
                size: 48.0,
                style: RunStyle::Title,
                text: "طلب تغطية إعلامية".to_string(),
            }],
            rules: vec![Rule {
                y: 160.0,
                x0: 64.0,
                x1: 1523.4,
            }],
        }
    }

    #[test]
    fn test_assemble_produces_pdf_bytes() {
        let bytes = assemble(&small_surface()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        assert!(bytes.windows(8).any(|w| w == b"MediaBox"));
    }

    #[test]
    fn test_overflow_runs_are_clipped_not_fatal() {
        let mut surface = small_surface();
        surface.runs.push(TextRun {
            x: 64.0,
            // Far past the printable height once scaled
            y: 10_000.0,
            size: 26.0,
            style: RunStyle::Body,
            text: "مقطوع".to_string(),
        });
        assert!(assemble(&surface).is_ok());
    }

    #[test]
    fn test_assemble_empty_surface() {
        let surface = Surface {
            width: 1587.4,
            height: 2245.0,
            runs: vec![],
            rules: vec![],
        };
        assert!(assemble(&surface).unwrap().starts_with(b"%PDF"));
    }
}
