use crate::geometry::{element_bounds, is_ancestor_hidden, viewport_scroll, viewport_size};
use crate::{Bounds, Document, Edges, Offsets, Point, Size, Viewport};

/// The detection region of a viewport: its absolute box shrunk (or grown) by `offsets`.
pub fn viewport_edges(scroll: Point, size: Size, offsets: Offsets) -> Edges {
    Edges {
        top: scroll.y + offsets.top as f64,
        right: scroll.x + size.width - offsets.right as f64,
        bottom: scroll.y + size.height - offsets.bottom as f64,
        left: scroll.x + offsets.left as f64,
    }
}

/// Pure overlap test between an element box and a viewport, with cushion and offsets applied.
///
/// `cushion` insets each element edge by that fraction of the element's size, so a larger share of
/// the element must overlap before it counts as visible. Values of `0.5` or more invert the box, at
/// which point the result is no longer meaningful; callers keep the cushion below that.
pub fn overlaps(elem: Bounds, scroll: Point, size: Size, cushion: f64, offsets: Offsets) -> bool {
    elem.inset(cushion)
        .overlaps(&viewport_edges(scroll, size, offsets))
}

/// Whether `node` is currently inside `viewport`.
///
/// Returns `false` without measuring anything when the node or an ancestor is hidden.
pub fn is_visible<D: Document + ?Sized>(
    doc: &D,
    node: &D::Node,
    viewport: &Viewport<D::Node>,
    cushion: f64,
    offsets: Offsets,
) -> bool {
    if is_ancestor_hidden(doc, node) {
        return false;
    }

    let elem = element_bounds(doc, node);
    let size = viewport_size(doc, viewport);
    let scroll = viewport_scroll(doc, viewport);
    overlaps(elem, scroll, size, cushion, offsets)
}
