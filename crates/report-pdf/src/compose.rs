//! Document composer.
//!
//! Drives the layout engine over a record snapshot and emits one PDF page
//! per record behind a title page. The composer never fails for content
//! reasons: unreadable images degrade to the square fallback ratio and an
//! empty bordered frame, and an empty description renders as an empty text
//! frame.

use crate::constants::*;
use crate::layout::{LayoutParams, LayoutPlan, Rect, compute_layout};
use crate::types::{ComposeError, Result};
use printpdf::*;
use report_core::{Record, ReportSettings};
use std::path::Path;

/// Compose and serialize the full report to PDF bytes.
pub fn report_pdf_bytes(
    records: &[Record],
    settings: &ReportSettings,
    params: &LayoutParams,
) -> Result<Vec<u8>> {
    let mut doc = compose_document(records, settings, params)?;
    let mut warnings = Vec::new();
    Ok(doc.save(&PdfSaveOptions::default(), &mut warnings))
}

/// Compose the full page sequence into an unserialized document: a title
/// page, then one content page per record in store order.
pub fn compose_document(
    records: &[Record],
    settings: &ReportSettings,
    params: &LayoutParams,
) -> Result<PdfDocument> {
    if records.is_empty() {
        return Err(ComposeError::EmptyReport);
    }

    let mut doc = PdfDocument::new(&settings.title);
    let mut pages = Vec::with_capacity(records.len() + 1);

    pages.push(title_page(settings, params));
    for (index, record) in records.iter().enumerate() {
        pages.push(record_page(&mut doc, record, index, settings, params));
    }

    doc.pages = pages;
    Ok(doc)
}

/// Generate the report and write it to disk.
pub async fn generate_pdf(
    records: &[Record],
    settings: &ReportSettings,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let records = records.to_vec();
    let settings = settings.clone();
    let output_path = output_path.as_ref().to_owned();

    // PDF generation is CPU-bound, spawn blocking
    let bytes = tokio::task::spawn_blocking(move || {
        report_pdf_bytes(&records, &settings, &LayoutParams::default())
    })
    .await??;

    tokio::fs::write(&output_path, bytes).await?;

    Ok(())
}

fn title_page(settings: &ReportSettings, params: &LayoutParams) -> PdfPage {
    let mut ops = Vec::new();

    let center_x = params.page_width_mm / 2.0;
    let title_y = params.page_height_mm * 0.42;
    let subtitle_y = title_y + 2.0 * pt_to_mm(SUBTITLE_FONT_SIZE_PT);

    push_centered_text(
        &mut ops,
        &settings.title,
        BuiltinFont::HelveticaBold,
        TITLE_FONT_SIZE_PT,
        center_x,
        title_y,
        params,
    );
    push_centered_text(
        &mut ops,
        &settings.subtitle,
        BuiltinFont::Helvetica,
        SUBTITLE_FONT_SIZE_PT,
        center_x,
        subtitle_y,
        params,
    );

    PdfPage::new(Mm(params.page_width_mm), Mm(params.page_height_mm), ops)
}

fn record_page(
    doc: &mut PdfDocument,
    record: &Record,
    index: usize,
    settings: &ReportSettings,
    params: &LayoutParams,
) -> PdfPage {
    let plan = compute_layout(record.image.aspect_ratio(), params);
    let mut ops = Vec::new();

    push_header(&mut ops, &plan.header_box, &record.category, params);
    push_description(&mut ops, &plan.description_box, &record.description, params);
    push_picture(doc, &mut ops, &plan.image_box, record, index, params);
    push_footer(&mut ops, &plan, settings, index, params);

    PdfPage::new(Mm(params.page_width_mm), Mm(params.page_height_mm), ops)
}

/// Dark filled bar with the category, vertically centered, left inset.
fn push_header(ops: &mut Vec<Op>, header_box: &Rect, category: &str, params: &LayoutParams) {
    let (r, g, b) = HEADER_FILL_RGB;
    ops.push(Op::SetFillColor { col: rgb(r, g, b) });
    push_rect(ops, header_box, PaintMode::Fill, params);

    let baseline = centered_baseline(header_box, HEADER_FONT_SIZE_PT);
    push_text_line(
        ops,
        category,
        BuiltinFont::HelveticaBold,
        HEADER_FONT_SIZE_PT,
        rgb(1.0, 1.0, 1.0),
        header_box.x + TEXT_INSET_MM,
        baseline,
        params,
    );
}

/// White filled, black-stroked frame with top-anchored, word-wrapped text.
fn push_description(ops: &mut Vec<Op>, body_box: &Rect, description: &str, params: &LayoutParams) {
    ops.push(Op::SetFillColor {
        col: rgb(1.0, 1.0, 1.0),
    });
    ops.push(Op::SetOutlineColor {
        col: rgb(0.0, 0.0, 0.0),
    });
    ops.push(Op::SetOutlineThickness {
        pt: Pt(FRAME_STROKE_PT),
    });
    push_rect(ops, body_box, PaintMode::FillStroke, params);

    let usable_width = body_box.width - 2.0 * TEXT_INSET_MM;
    let line_height = pt_to_mm(BODY_FONT_SIZE_PT * BODY_LINE_SPACING);
    let first_baseline = body_box.y + TEXT_INSET_MM + pt_to_mm(BODY_FONT_SIZE_PT);

    for (i, line) in wrap_text(description, usable_width, BODY_FONT_SIZE_PT)
        .iter()
        .enumerate()
    {
        if line.is_empty() {
            continue;
        }
        push_text_line(
            ops,
            line,
            BuiltinFont::Helvetica,
            BODY_FONT_SIZE_PT,
            rgb(0.0, 0.0, 0.0),
            body_box.x + TEXT_INSET_MM,
            first_baseline + i as f32 * line_height,
            params,
        );
    }
}

/// Picture scaled to exactly fill the box (the box wins over the aspect
/// ratio, so mixed-orientation documents stay visually aligned), behind a
/// thin border stroke. Undecodable bytes leave the bordered frame empty.
fn push_picture(
    doc: &mut PdfDocument,
    ops: &mut Vec<Op>,
    image_box: &Rect,
    record: &Record,
    index: usize,
    params: &LayoutParams,
) {
    let mut warnings = Vec::new();
    match RawImage::decode_from_bytes(record.image.bytes(), &mut warnings) {
        Ok(image) => {
            let image_id = doc.add_image(&image);
            let scale_x = mm_to_pt(image_box.width) / image.width as f32;
            let scale_y = mm_to_pt(image_box.height) / image.height as f32;
            ops.push(Op::UseXobject {
                id: image_id,
                transform: XObjectTransform {
                    translate_x: Some(Mm(image_box.x).into_pt()),
                    translate_y: Some(Mm(pdf_y(params, image_box.bottom())).into_pt()),
                    rotate: None,
                    scale_x: Some(scale_x),
                    scale_y: Some(scale_y),
                    dpi: Some(72.0),
                },
            });
        }
        Err(err) => {
            log::warn!(
                "Page {}: could not decode image ({}); leaving the picture frame empty",
                index + 1,
                err
            );
        }
    }

    ops.push(Op::SetOutlineColor {
        col: rgb(0.0, 0.0, 0.0),
    });
    ops.push(Op::SetOutlineThickness {
        pt: Pt(FRAME_STROKE_PT),
    });
    push_rect(ops, image_box, PaintMode::Stroke, params);
}

/// Report title on the left, right-aligned 1-based page label on the right.
fn push_footer(
    ops: &mut Vec<Op>,
    plan: &LayoutPlan,
    settings: &ReportSettings,
    index: usize,
    params: &LayoutParams,
) {
    let baseline = centered_baseline(&plan.footer_band, FOOTER_FONT_SIZE_PT);

    push_text_line(
        ops,
        &settings.title,
        BuiltinFont::Helvetica,
        FOOTER_FONT_SIZE_PT,
        rgb(0.0, 0.0, 0.0),
        plan.footer_title_box.x,
        baseline,
        params,
    );

    let label = format!("Page {}", index + 1);
    let x = plan.footer_page_box.right() - approx_text_width_mm(&label, FOOTER_FONT_SIZE_PT);
    push_text_line(
        ops,
        &label,
        BuiltinFont::Helvetica,
        FOOTER_FONT_SIZE_PT,
        rgb(0.0, 0.0, 0.0),
        x,
        baseline,
        params,
    );
}

// =============================================================================
// Op Helpers
// =============================================================================

/// Convert a top-down layout y into the PDF's bottom-up space.
fn pdf_y(params: &LayoutParams, y_from_top: f32) -> f32 {
    params.page_height_mm - y_from_top
}

fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color::Rgb(Rgb {
        r,
        g,
        b,
        icc_profile: None,
    })
}

/// Approximate rendered width of builtin-Helvetica text in millimeters.
fn approx_text_width_mm(text: &str, size_pt: f32) -> f32 {
    pt_to_mm(text.chars().count() as f32 * size_pt * HELVETICA_CHAR_WIDTH_RATIO)
}

/// Baseline (from the page top) that visually centers a single line in a box.
fn centered_baseline(rect: &Rect, size_pt: f32) -> f32 {
    rect.y + rect.height / 2.0 + pt_to_mm(size_pt) * 0.35
}

fn push_text_line(
    ops: &mut Vec<Op>,
    text: &str,
    font: BuiltinFont,
    size_pt: f32,
    color: Color,
    x_mm: f32,
    baseline_from_top_mm: f32,
    params: &LayoutParams,
) {
    ops.push(Op::SetFillColor { col: color });
    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: Point {
            x: Mm(x_mm).into_pt(),
            y: Mm(pdf_y(params, baseline_from_top_mm)).into_pt(),
        },
    });
    ops.push(Op::SetFontSizeBuiltinFont {
        font,
        size: Pt(size_pt),
    });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(text.to_string())],
        font,
    });
    ops.push(Op::EndTextSection);
}

fn push_centered_text(
    ops: &mut Vec<Op>,
    text: &str,
    font: BuiltinFont,
    size_pt: f32,
    center_x_mm: f32,
    baseline_from_top_mm: f32,
    params: &LayoutParams,
) {
    let x = center_x_mm - approx_text_width_mm(text, size_pt) / 2.0;
    push_text_line(
        ops,
        text,
        font,
        size_pt,
        rgb(0.0, 0.0, 0.0),
        x,
        baseline_from_top_mm,
        params,
    );
}

/// Axis-aligned rectangle at a layout box, filled and/or stroked.
fn push_rect(ops: &mut Vec<Op>, rect: &Rect, mode: PaintMode, params: &LayoutParams) {
    let left = Mm(rect.x).into_pt();
    let right = Mm(rect.right()).into_pt();
    let top = Mm(pdf_y(params, rect.y)).into_pt();
    let bottom = Mm(pdf_y(params, rect.bottom())).into_pt();

    let points = [(left, bottom), (right, bottom), (right, top), (left, top)]
        .into_iter()
        .map(|(x, y)| LinePoint {
            p: Point { x, y },
            bezier: false,
        })
        .collect();

    ops.push(Op::DrawPolygon {
        polygon: Polygon {
            rings: vec![PolygonRing { points }],
            mode,
            winding_order: WindingOrder::NonZero,
        },
    });
}

/// Greedy word wrap using the average Helvetica glyph width.
///
/// Lines beyond the box capacity are still emitted; overflow is not detected
/// here, matching the fixed-constant layout policy.
fn wrap_text(text: &str, max_width_mm: f32, font_size_pt: f32) -> Vec<String> {
    let max_chars = (mm_to_pt(max_width_mm) / (font_size_pt * HELVETICA_CHAR_WIDTH_RATIO))
        .max(1.0) as usize;

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if !current.is_empty() && candidate > max_chars {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_empty_text_has_no_lines() {
        assert!(wrap_text("", 100.0, 18.0).is_empty());
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        assert_eq!(wrap_text("Cracked tile", 100.0, 18.0), vec!["Cracked tile"]);
    }

    #[test]
    fn test_wrap_breaks_on_word_boundaries() {
        // 20mm at 18pt allows roughly six characters per line.
        let lines = wrap_text("one two three", 20.0, 18.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(!line.starts_with(' ') && !line.ends_with(' '));
        }
        assert_eq!(lines.join(" "), "one two three");
    }

    #[test]
    fn test_wrap_preserves_paragraph_breaks() {
        let lines = wrap_text("first\n\nsecond", 100.0, 18.0);
        assert_eq!(lines, vec!["first", "", "second"]);
    }

    #[test]
    fn test_wrap_keeps_overlong_words_whole() {
        let lines = wrap_text("incomprehensibilities", 5.0, 18.0);
        assert_eq!(lines, vec!["incomprehensibilities"]);
    }
}
