//! Shared layout and styling constants for report pages.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Page Geometry
// =============================================================================

/// Page width in millimeters (10 inch, 4:3 presentation frame)
pub const PAGE_WIDTH_MM: f32 = 254.0;

/// Page height in millimeters (7.5 inch)
pub const PAGE_HEIGHT_MM: f32 = 190.5;

// =============================================================================
// Typography
// =============================================================================

/// Font size for the title page heading (points)
pub const TITLE_FONT_SIZE_PT: f32 = 40.0;

/// Font size for the title page subtitle (points)
pub const SUBTITLE_FONT_SIZE_PT: f32 = 20.0;

/// Font size for the category header bar (points)
pub const HEADER_FONT_SIZE_PT: f32 = 24.0;

/// Font size for description text (points)
pub const BODY_FONT_SIZE_PT: f32 = 18.0;

/// Font size for footer texts (points)
pub const FOOTER_FONT_SIZE_PT: f32 = 10.0;

/// Approximate character width ratio for Helvetica
pub const HELVETICA_CHAR_WIDTH_RATIO: f32 = 0.5;

/// Line height multiplier for wrapped description text
pub const BODY_LINE_SPACING: f32 = 1.3;

/// Horizontal text inset inside filled shapes (mm)
pub const TEXT_INSET_MM: f32 = 3.0;

// =============================================================================
// Shape Styling
// =============================================================================

/// Header bar fill (dark grey)
pub const HEADER_FILL_RGB: (f32, f32, f32) = (50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0);

/// Stroke width for the picture border and description frame (points)
pub const FRAME_STROKE_PT: f32 = 1.0;
