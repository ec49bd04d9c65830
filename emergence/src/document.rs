use alloc::vec::Vec;

use crate::{NodeKey, Point, Size, Viewport};

/// Host access to a rendered document.
///
/// The engine holds no UI objects. A browser binding, a test harness, or a layout engine
/// implements this trait to expose the handful of layout metrics and attribute operations the
/// engine needs. Metrics follow the usual DOM semantics:
///
/// - `offset_*` are border-box values relative to the node's offset parent.
/// - `client_size` is the padding box (no borders, no scrollbars).
/// - `scroll_position` is the node's own `scrollLeft`/`scrollTop`.
pub trait Document {
    type Node: NodeKey;

    /// Capability test: whether the host can enumerate elements by attribute.
    fn supports_query(&self) -> bool {
        true
    }

    /// The user agent string, used for handheld detection.
    fn user_agent(&self) -> Option<&str> {
        None
    }

    /// Pushes every node currently carrying `attribute` into `out`, in document order.
    fn tracked_nodes(&self, attribute: &str, out: &mut Vec<Self::Node>);

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    fn remove_attribute(&mut self, node: &Self::Node, name: &str);

    /// Adds a class to the root element (`<html>`).
    fn add_root_class(&mut self, class: &str);

    fn offset_size(&self, node: &Self::Node) -> Size;

    /// Position relative to the offset parent. Detached nodes may report NaN.
    fn offset_position(&self, node: &Self::Node) -> Point;

    /// `None` when the node or an ancestor is `display: none`, or the node is detached.
    fn offset_parent(&self, node: &Self::Node) -> Option<Self::Node>;

    fn client_size(&self, node: &Self::Node) -> Size;

    fn scroll_position(&self, node: &Self::Node) -> Point;

    /// `window.innerWidth`/`innerHeight`, when available.
    fn window_inner_size(&self) -> Option<Size>;

    /// Client size of the root element, used when the window size is unavailable.
    fn root_client_size(&self) -> Size;

    /// `window.pageXOffset`/`pageYOffset`, when available.
    fn page_offset(&self) -> Option<Point>;

    /// Scroll offsets of the root element, used when page offsets are unavailable.
    fn root_scroll(&self) -> Point;

    /// Called when scroll/resize listeners on `viewport` should be wired or unwired.
    fn set_listening(&mut self, viewport: &Viewport<Self::Node>, listening: bool) {
        let _ = (viewport, listening);
    }

    /// Called when the window load listener should be wired or unwired.
    fn set_load_listening(&mut self, listening: bool) {
        let _ = listening;
    }
}
