//! Per-record page layout
//!
//! Chooses the layout variant from the image aspect ratio and computes
//! non-overlapping boxes in absolute page units. When the landscape geometry
//! would press the image into the footer band, the description box gives way,
//! never the image box.

use super::{LayoutParams, LayoutPlan, Rect, Variant};

impl Variant {
    /// Landscape at or above the threshold, portrait below it.
    pub fn from_aspect_ratio(ratio: f32, threshold: f32) -> Self {
        if ratio >= threshold {
            Variant::Landscape
        } else {
            Variant::Portrait
        }
    }
}

/// Compute the box placements for one record.
///
/// Never fails: degenerate ratios arrive here already replaced by the
/// probe's square fallback.
pub fn compute_layout(aspect_ratio: f32, params: &LayoutParams) -> LayoutPlan {
    let variant = Variant::from_aspect_ratio(aspect_ratio, params.landscape_threshold);

    let footer_band = Rect::new(
        0.0,
        params.page_height_mm - params.footer_height_mm,
        params.page_width_mm,
        params.footer_height_mm,
    );
    let content_width = params.page_width_mm - 2.0 * params.margin_mm;

    let (header_box, description_box, image_box) = match variant {
        Variant::Portrait => portrait_boxes(params, &footer_band, content_width),
        Variant::Landscape => landscape_boxes(params, &footer_band, content_width),
    };

    let (footer_title_box, footer_page_box) = footer_boxes(params, &footer_band, content_width);

    LayoutPlan {
        variant,
        header_box,
        description_box,
        image_box,
        footer_band,
        footer_title_box,
        footer_page_box,
    }
}

/// Two columns: header and description stacked on the left, the image on the
/// right spanning the same total height so its bottom aligns exactly with
/// the description bottom.
fn portrait_boxes(
    params: &LayoutParams,
    footer_band: &Rect,
    content_width: f32,
) -> (Rect, Rect, Rect) {
    let column_width = (content_width - params.gap_mm) / 2.0;
    let top = params.top_margin_mm;
    // Column height leaves a gap above the footer band by construction.
    let column_height = (footer_band.y - params.gap_mm) - top;

    let header_box = Rect::new(params.margin_mm, top, column_width, params.header_height_mm);
    let description_box = Rect::new(
        params.margin_mm,
        header_box.bottom(),
        column_width,
        column_height - params.header_height_mm,
    );
    let image_box = Rect::new(
        params.margin_mm + column_width + params.gap_mm,
        top,
        column_width,
        column_height,
    );
    (header_box, description_box, image_box)
}

/// Stacked rows: the image takes everything between the description and the
/// footer band. If that leaves less than the minimum usable height, the
/// description shrinks to its fixed minimum and the image is recomputed,
/// exactly once. The trigger is the static threshold alone; text length
/// never participates.
fn landscape_boxes(
    params: &LayoutParams,
    footer_band: &Rect,
    content_width: f32,
) -> (Rect, Rect, Rect) {
    let top = params.top_margin_mm;
    let header_box = Rect::new(params.margin_mm, top, content_width, params.header_height_mm);

    let mut description_box = Rect::new(
        params.margin_mm,
        header_box.bottom(),
        content_width,
        params.body_height_mm,
    );
    let mut image_box = remaining_image_box(params, footer_band, &description_box, content_width);

    if image_box.height < params.min_image_height_mm {
        description_box.height = params.min_body_height_mm;
        image_box = remaining_image_box(params, footer_band, &description_box, content_width);
    }

    (header_box, description_box, image_box)
}

fn remaining_image_box(
    params: &LayoutParams,
    footer_band: &Rect,
    description_box: &Rect,
    content_width: f32,
) -> Rect {
    let top = description_box.bottom() + params.gap_mm;
    let height = (footer_band.y - params.gap_mm) - top;
    Rect::new(params.margin_mm, top, content_width, height)
}

/// Identical footer rectangles for both variants: title text on the left
/// half, right-aligned page label on the right half.
fn footer_boxes(params: &LayoutParams, footer_band: &Rect, content_width: f32) -> (Rect, Rect) {
    let half = content_width / 2.0;
    let title = Rect::new(params.margin_mm, footer_band.y, half, footer_band.height);
    let page = Rect::new(params.margin_mm + half, footer_band.y, half, footer_band.height);
    (title, page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_threshold_boundary() {
        let params = LayoutParams::default();
        let t = params.landscape_threshold;
        assert_eq!(Variant::from_aspect_ratio(1.09, t), Variant::Portrait);
        assert_eq!(Variant::from_aspect_ratio(1.10, t), Variant::Landscape);
        assert_eq!(Variant::from_aspect_ratio(1.11, t), Variant::Landscape);
    }

    #[test]
    fn test_portrait_columns_align() {
        let params = LayoutParams::default();
        let plan = compute_layout(0.75, &params);

        assert_eq!(plan.variant, Variant::Portrait);
        assert_eq!(plan.header_box.y, plan.image_box.y);
        assert_eq!(plan.description_box.y, plan.header_box.bottom());
        // Image bottom aligns exactly with the description bottom.
        assert!((plan.image_box.bottom() - plan.description_box.bottom()).abs() < 0.01);
        assert!(
            (plan.image_box.height - plan.header_box.height - plan.description_box.height).abs()
                < 0.01
        );
        // Both columns share a width.
        assert_eq!(plan.header_box.width, plan.image_box.width);
    }

    #[test]
    fn test_landscape_image_consumes_remaining_space() {
        let params = LayoutParams::default();
        let plan = compute_layout(1.5, &params);

        assert_eq!(plan.variant, Variant::Landscape);
        assert_eq!(plan.description_box.height, params.body_height_mm);
        assert_eq!(
            plan.image_box.y,
            plan.description_box.bottom() + params.gap_mm
        );
        assert!(
            (plan.image_box.bottom() - (plan.footer_band.y - params.gap_mm)).abs() < 0.01
        );
        assert_eq!(plan.header_box.width, plan.image_box.width);
    }

    #[test]
    fn test_landscape_shrink_reduces_description_not_image() {
        // Force the shrink by making the default description tall enough to
        // squeeze the image below its minimum.
        let params = LayoutParams {
            body_height_mm: 100.0,
            ..Default::default()
        };
        let plan = compute_layout(1.5, &params);

        assert_eq!(plan.description_box.height, params.min_body_height_mm);
        assert!(plan.image_box.height >= params.min_image_height_mm);
        assert!(!plan.image_box.intersects(&plan.footer_band));
    }

    #[test]
    fn test_landscape_shrink_is_single_shot() {
        // A huge minimum image height cannot be satisfied even after the
        // shrink; the geometry settles on the once-reduced description rather
        // than iterating.
        let params = LayoutParams {
            min_image_height_mm: 1000.0,
            ..Default::default()
        };
        let plan = compute_layout(1.5, &params);

        assert_eq!(plan.description_box.height, params.min_body_height_mm);
        assert!(plan.image_box.height < params.min_image_height_mm);
    }

    #[test]
    fn test_header_top_matches_across_variants() {
        let params = LayoutParams::default();
        let portrait = compute_layout(0.8, &params);
        let landscape = compute_layout(1.8, &params);
        assert_eq!(portrait.header_box.y, landscape.header_box.y);
    }

    #[test]
    fn test_footer_boxes_sit_inside_the_band() {
        let params = LayoutParams::default();
        let plan = compute_layout(1.0, &params);

        assert_eq!(plan.footer_title_box.y, plan.footer_band.y);
        assert_eq!(plan.footer_page_box.y, plan.footer_band.y);
        assert!((plan.footer_page_box.x - plan.footer_title_box.right()).abs() < 0.01);
        assert!(plan.footer_page_box.right() <= plan.footer_band.right());
    }

    #[test]
    fn test_rect_intersection() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(10.0, 0.0, 5.0, 5.0);
        assert!(a.intersects(&b));
        // Touching edges do not count as overlap.
        assert!(!a.intersects(&c));
    }
}
