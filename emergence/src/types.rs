/// A width/height pair in document pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An x/y pair in document pixels (positions and scroll offsets).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A document-absolute box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Shrinks every edge inward by `cushion` times the box dimension on that axis.
    ///
    /// The result is returned as edges (`top`, `right`, `bottom`, `left`) because a large cushion
    /// can invert the box, which a width/height representation cannot express.
    pub fn inset(&self, cushion: f64) -> Edges {
        let dy = self.height * cushion;
        let dx = self.width * cushion;
        Edges {
            top: self.top + dy,
            right: self.right() - dx,
            bottom: self.bottom() - dy,
            left: self.left + dx,
        }
    }
}

/// Box edges in document coordinates. Unlike [`Bounds`], edges may be inverted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    /// Strict axis-aligned overlap: touching edges do not count.
    pub fn overlaps(&self, other: &Edges) -> bool {
        self.top < other.bottom
            && self.bottom > other.top
            && self.left < other.right
            && self.right > other.left
    }
}

/// Pixel adjustments applied to the viewport edges.
///
/// Positive values shrink the detection region; negative values expand it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offsets {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Offsets {
    pub fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(px: i32) -> Self {
        Self::new(px, px, px, px)
    }
}

/// The scrollable region elements are tested against.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Viewport<N> {
    /// The global window (layout viewport + page scroll).
    Window,
    /// A scrollable container element.
    Element(N),
}

impl<N> Default for Viewport<N> {
    fn default() -> Self {
        Self::Window
    }
}

impl<N> Viewport<N> {
    pub fn is_window(&self) -> bool {
        matches!(self, Self::Window)
    }
}

/// Host events that schedule an engagement pass through the throttle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Signal {
    Load,
    Scroll,
    Resize,
}

/// Result of [`crate::Emergence::init`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitOutcome {
    /// Listeners are wired and the first pass has run.
    Engaged,
    /// The host cannot query elements; the engine stays inert.
    Unsupported,
    /// The device is handheld and `handheld` is disabled; the engine stays inert.
    HandheldExcluded,
}
