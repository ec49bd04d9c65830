use alloc::string::{String, ToString};
use alloc::vec::Vec;

use emergence::{Document, Point, Size, Viewport};

/// Identity of a node in a [`SimDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct SimNode {
    parent: Option<NodeId>,
    offset: Point,
    size: Size,
    client: Option<Size>,
    scroll: Point,
    display_none: bool,
    detached: bool,
    attributes: Vec<(String, String)>,
}

/// An in-memory document for driving the engine without a browser.
///
/// Nodes are laid out with explicit offsets relative to their offset parent, which is the node
/// they were appended to. The body (`SimDocument::body`) is the root of the offset chain.
///
/// Listener wiring requested by the engine is recorded so hosts and tests can observe it.
///
/// # Panics
///
/// Methods taking a [`NodeId`] panic when the id was not handed out by this document.
#[derive(Clone, Debug)]
pub struct SimDocument {
    nodes: Vec<SimNode>,
    window: Option<Size>,
    root_client: Size,
    page_offset: Option<Point>,
    root_scroll: Point,
    root_classes: Vec<String>,
    supports_query: bool,
    user_agent: Option<String>,
    listening: Vec<Viewport<NodeId>>,
    load_listening: bool,
}

impl SimDocument {
    /// Creates a document with a `width` x `height` window scrolled to the origin.
    pub fn new(width: f64, height: f64) -> Self {
        let body = SimNode {
            parent: None,
            offset: Point::default(),
            size: Size::new(width, height),
            client: None,
            scroll: Point::default(),
            display_none: false,
            detached: false,
            attributes: Vec::new(),
        };
        Self {
            nodes: alloc::vec![body],
            window: Some(Size::new(width, height)),
            root_client: Size::new(width, height),
            page_offset: Some(Point::default()),
            root_scroll: Point::default(),
            root_classes: Vec::new(),
            supports_query: true,
            user_agent: None,
            listening: Vec::new(),
            load_listening: false,
        }
    }

    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends a node under `parent` at (`top`, `left`) relative to it.
    pub fn append(&mut self, parent: NodeId, top: f64, left: f64, width: f64, height: f64) -> NodeId {
        debug_assert!(parent.index() < self.nodes.len(), "append: unknown parent");
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SimNode {
            parent: Some(parent),
            offset: Point::new(left, top),
            size: Size::new(width, height),
            client: None,
            scroll: Point::default(),
            display_none: false,
            detached: false,
            attributes: Vec::new(),
        });
        id
    }

    /// Appends a node under the body and marks it with `marker`.
    pub fn append_tracked(
        &mut self,
        marker: &str,
        top: f64,
        left: f64,
        width: f64,
        height: f64,
    ) -> NodeId {
        let id = self.append(self.body(), top, left, width, height);
        self.node_mut(id)
            .attributes
            .push((marker.to_string(), String::new()));
        id
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node)
            .attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.iter().any(|c| c == class)
    }

    pub fn set_display_none(&mut self, node: NodeId, display_none: bool) {
        self.node_mut(node).display_none = display_none;
    }

    /// Removes `node` from the layout: it loses its offset parent and reports NaN offsets.
    pub fn detach(&mut self, node: NodeId) {
        self.node_mut(node).detached = true;
    }

    pub fn set_offset(&mut self, node: NodeId, top: f64, left: f64) {
        self.node_mut(node).offset = Point::new(left, top);
    }

    pub fn set_size(&mut self, node: NodeId, width: f64, height: f64) {
        self.node_mut(node).size = Size::new(width, height);
    }

    /// Overrides the client size (defaults to the offset size, i.e. no borders or scrollbars).
    pub fn set_client_size(&mut self, node: NodeId, width: f64, height: f64) {
        self.node_mut(node).client = Some(Size::new(width, height));
    }

    pub fn scroll_element_to(&mut self, node: NodeId, x: f64, y: f64) {
        self.node_mut(node).scroll = Point::new(x, y);
    }

    pub fn scroll_window_to(&mut self, x: f64, y: f64) {
        if self.page_offset.is_some() {
            self.page_offset = Some(Point::new(x, y));
        }
        self.root_scroll = Point::new(x, y);
    }

    pub fn window_scroll(&self) -> Point {
        self.page_offset.unwrap_or(self.root_scroll)
    }

    pub fn resize_window(&mut self, width: f64, height: f64) {
        if self.window.is_some() {
            self.window = Some(Size::new(width, height));
        }
        self.root_client = Size::new(width, height);
    }

    /// Simulates a host without `innerWidth`/`pageXOffset`, forcing the root-element fallbacks.
    pub fn without_window_metrics(mut self) -> Self {
        self.window = None;
        self.page_offset = None;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn with_supports_query(mut self, supports_query: bool) -> Self {
        self.supports_query = supports_query;
        self
    }

    /// Whether scroll/resize listeners are currently wired on `viewport`.
    pub fn is_listening(&self, viewport: &Viewport<NodeId>) -> bool {
        self.listening.contains(viewport)
    }

    pub fn is_load_listening(&self) -> bool {
        self.load_listening
    }

    fn node(&self, node: NodeId) -> &SimNode {
        assert!(node.index() < self.nodes.len(), "unknown node {node:?}");
        &self.nodes[node.index()]
    }

    fn node_mut(&mut self, node: NodeId) -> &mut SimNode {
        assert!(node.index() < self.nodes.len(), "unknown node {node:?}");
        &mut self.nodes[node.index()]
    }

    fn is_rendered(&self, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(id) = cur {
            let n = self.node(id);
            if n.display_none || n.detached {
                return false;
            }
            cur = n.parent;
        }
        true
    }
}

impl Document for SimDocument {
    type Node = NodeId;

    fn supports_query(&self) -> bool {
        self.supports_query
    }

    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    fn tracked_nodes(&self, attribute: &str, out: &mut Vec<NodeId>) {
        out.extend(
            self.nodes
                .iter()
                .enumerate()
                .filter(|(_, n)| n.attributes.iter().any(|(k, _)| k == attribute))
                .map(|(i, _)| NodeId(i as u32)),
        );
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        let attrs = &mut self.node_mut(*node).attributes;
        match attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => {
                v.clear();
                v.push_str(value);
            }
            None => attrs.push((name.to_string(), value.to_string())),
        }
    }

    fn remove_attribute(&mut self, node: &NodeId, name: &str) {
        self.node_mut(*node).attributes.retain(|(k, _)| k != name);
    }

    fn add_root_class(&mut self, class: &str) {
        if !self.has_root_class(class) {
            self.root_classes.push(class.to_string());
        }
    }

    fn offset_size(&self, node: &NodeId) -> Size {
        let n = self.node(*node);
        if n.detached { Size::default() } else { n.size }
    }

    fn offset_position(&self, node: &NodeId) -> Point {
        let n = self.node(*node);
        if n.detached {
            Point::new(f64::NAN, f64::NAN)
        } else {
            n.offset
        }
    }

    fn offset_parent(&self, node: &NodeId) -> Option<NodeId> {
        if !self.is_rendered(*node) {
            return None;
        }
        self.node(*node).parent
    }

    fn client_size(&self, node: &NodeId) -> Size {
        let n = self.node(*node);
        n.client.unwrap_or(n.size)
    }

    fn scroll_position(&self, node: &NodeId) -> Point {
        self.node(*node).scroll
    }

    fn window_inner_size(&self) -> Option<Size> {
        self.window
    }

    fn root_client_size(&self) -> Size {
        self.root_client
    }

    fn page_offset(&self) -> Option<Point> {
        self.page_offset
    }

    fn root_scroll(&self) -> Point {
        self.root_scroll
    }

    fn set_listening(&mut self, viewport: &Viewport<NodeId>, listening: bool) {
        if listening {
            if !self.listening.contains(viewport) {
                self.listening.push(viewport.clone());
            }
        } else {
            self.listening.retain(|v| v != viewport);
        }
    }

    fn set_load_listening(&mut self, listening: bool) {
        self.load_listening = listening;
    }
}
