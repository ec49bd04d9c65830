use crate::{Bounds, Document, Point, Size, Viewport};

/// Skips non-numeric layout contributions (detached nodes report NaN).
fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Computes the document-absolute box of `node` by walking its offset-parent chain.
pub fn element_bounds<D: Document + ?Sized>(doc: &D, node: &D::Node) -> Bounds {
    let size = doc.offset_size(node);
    let mut top = 0.0;
    let mut left = 0.0;

    let mut cur = Some(node.clone());
    while let Some(n) = cur {
        let pos = doc.offset_position(&n);
        top += finite_or_zero(pos.y);
        left += finite_or_zero(pos.x);
        cur = doc.offset_parent(&n);
    }

    Bounds {
        top,
        left,
        width: finite_or_zero(size.width),
        height: finite_or_zero(size.height),
    }
}

/// The size of the visible region of `viewport`.
///
/// For the window this is the layout viewport, falling back to the root element's client size.
/// For a container it is the container's client size.
pub fn viewport_size<D: Document + ?Sized>(doc: &D, viewport: &Viewport<D::Node>) -> Size {
    match viewport {
        Viewport::Window => {
            let root = doc.root_client_size();
            match doc.window_inner_size() {
                Some(inner) => Size {
                    width: nonzero_or(inner.width, root.width),
                    height: nonzero_or(inner.height, root.height),
                },
                None => root,
            }
        }
        Viewport::Element(node) => doc.client_size(node),
    }
}

/// Scroll offsets of `viewport`, normalised to document-absolute coordinates.
///
/// A container's own scroll offsets are shifted by the container's absolute position so they
/// live in the same space as [`element_bounds`].
pub fn viewport_scroll<D: Document + ?Sized>(doc: &D, viewport: &Viewport<D::Node>) -> Point {
    match viewport {
        Viewport::Window => {
            let root = doc.root_scroll();
            match doc.page_offset() {
                Some(page) => Point {
                    x: nonzero_or(page.x, root.x),
                    y: nonzero_or(page.y, root.y),
                },
                None => root,
            }
        }
        Viewport::Element(node) => {
            let scroll = doc.scroll_position(node);
            let at = element_bounds(doc, node);
            Point {
                x: finite_or_zero(scroll.x) + at.left,
                y: finite_or_zero(scroll.y) + at.top,
            }
        }
    }
}

/// `true` when the node has no offset parent: it or an ancestor is `display: none`, or it is
/// detached.
pub fn is_ancestor_hidden<D: Document + ?Sized>(doc: &D, node: &D::Node) -> bool {
    doc.offset_parent(node).is_none()
}

// Browsers report 0 for unset window metrics, so 0 falls through to the root element.
fn nonzero_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() && v != 0.0 { v } else { fallback }
}
