//! Layout data types for report pages
//!
//! Geometry is computed in millimeters with `y` measured from the top edge
//! of the page; the composer flips boxes into the PDF's bottom-up coordinate
//! space when emitting operations.

use crate::constants::{PAGE_HEIGHT_MM, PAGE_WIDTH_MM};

/// Layout family chosen from the image aspect ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Tall or square images: two columns, text left, image right
    Portrait,
    /// Wide images: stacked rows, the image consuming the space above the
    /// footer band
    Landscape,
}

/// A rectangular area in millimeters, `y` measured from the page top
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True if the two rectangles share interior area
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Tunable page geometry for the layout engine
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    /// Page width
    pub page_width_mm: f32,
    /// Page height
    pub page_height_mm: f32,
    /// Left/right page margin
    pub margin_mm: f32,
    /// Top margin above the header box
    pub top_margin_mm: f32,
    /// Header box height, shared by both variants
    pub header_height_mm: f32,
    /// Gap between columns, and between boxes and the footer band
    pub gap_mm: f32,
    /// Default description height in the landscape variant
    pub body_height_mm: f32,
    /// Reduced description height applied by the single-shot shrink
    pub min_body_height_mm: f32,
    /// Smallest usable landscape image height before the shrink triggers
    pub min_image_height_mm: f32,
    /// Footer band height, anchored to the page bottom
    pub footer_height_mm: f32,
    /// Aspect ratio at or above which a record uses the landscape variant
    pub landscape_threshold: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            page_width_mm: PAGE_WIDTH_MM,
            page_height_mm: PAGE_HEIGHT_MM,
            margin_mm: 12.7,
            top_margin_mm: 12.7,
            header_height_mm: 15.0,
            gap_mm: 5.0,
            body_height_mm: 40.0,
            min_body_height_mm: 20.0,
            min_image_height_mm: 60.0,
            footer_height_mm: 12.0,
            landscape_threshold: 1.10,
        }
    }
}

/// Absolute box placements for one content page
///
/// `image_box` never intersects `footer_band`; the landscape description
/// gives way first when the two would collide.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub variant: Variant,
    pub header_box: Rect,
    pub description_box: Rect,
    pub image_box: Rect,
    pub footer_band: Rect,
    /// Left footer text box holding the report title
    pub footer_title_box: Rect,
    /// Right footer text box holding the right-aligned page label
    pub footer_page_box: Rect,
}
