use emergence::{
    Document, Emergence, EmergenceOptions, InitOutcome, PassReport, Signal, Viewport,
};

use crate::{NodeId, SimDocument};

/// A framework-neutral controller that owns an `emergence::Emergence` engine and its document.
///
/// This type does not hold any UI objects beyond the `Document` it is given. Adapters drive it by
/// calling:
/// - `init` once the document is ready
/// - `on_scroll` / `on_resize` / `on_load` when UI events occur
/// - `tick(now_ms)` each frame/timer tick, which runs a due throttled pass
///
/// Use `next_deadline` to schedule a one-shot timer instead of ticking every frame.
pub struct Controller<D: Document> {
    engine: Emergence<D::Node>,
    doc: D,
}

impl<D: Document> Controller<D> {
    pub fn new(options: EmergenceOptions<D::Node>, doc: D) -> Self {
        Self {
            engine: Emergence::new(options),
            doc,
        }
    }

    pub fn from_parts(engine: Emergence<D::Node>, doc: D) -> Self {
        Self { engine, doc }
    }

    pub fn engine(&self) -> &Emergence<D::Node> {
        &self.engine
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    /// Mutable access to the document, e.g. to apply layout changes between events.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    pub fn into_parts(self) -> (Emergence<D::Node>, D) {
        (self.engine, self.doc)
    }

    pub fn init(&mut self) -> InitOutcome {
        self.engine.init(&mut self.doc)
    }

    /// Returns whether a pass was scheduled.
    pub fn on_scroll(&mut self, now_ms: u64) -> bool {
        self.engine.signal(Signal::Scroll, now_ms)
    }

    /// Returns whether a pass was scheduled.
    pub fn on_resize(&mut self, now_ms: u64) -> bool {
        self.engine.signal(Signal::Resize, now_ms)
    }

    /// Returns whether a pass was scheduled.
    pub fn on_load(&mut self, now_ms: u64) -> bool {
        self.engine.signal(Signal::Load, now_ms)
    }

    /// Advances the controller, running the pending pass if it is due.
    pub fn tick(&mut self, now_ms: u64) -> Option<PassReport> {
        self.engine.tick(&mut self.doc, now_ms)
    }

    /// The timestamp at which the pending pass becomes due.
    pub fn next_deadline(&self) -> Option<u64> {
        self.engine.due_at()
    }

    /// Forces a pass immediately, bypassing the throttle.
    pub fn engage(&mut self) -> PassReport {
        self.engine.engage(&mut self.doc)
    }

    pub fn disengage(&mut self) {
        self.engine.disengage(&mut self.doc);
    }
}

impl Controller<SimDocument> {
    /// Scrolls the simulated window. The event reaches the engine only when the window is its
    /// viewport.
    pub fn scroll_window_to(&mut self, x: f64, y: f64, now_ms: u64) -> bool {
        self.doc.scroll_window_to(x, y);
        self.engine.options().container.is_window() && self.on_scroll(now_ms)
    }

    /// Scrolls a simulated container. The event reaches the engine only when `node` is its
    /// viewport.
    pub fn scroll_element_to(&mut self, node: NodeId, x: f64, y: f64, now_ms: u64) -> bool {
        self.doc.scroll_element_to(node, x, y);
        self.engine.options().container == Viewport::Element(node) && self.on_scroll(now_ms)
    }

    /// Resizes the simulated window. The event reaches the engine only when the window is its
    /// viewport.
    pub fn resize_window(&mut self, width: f64, height: f64, now_ms: u64) -> bool {
        self.doc.resize_window(width, height);
        self.engine.options().container.is_window() && self.on_resize(now_ms)
    }
}

impl<D> Clone for Controller<D>
where
    D: Document + Clone,
{
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            doc: self.doc.clone(),
        }
    }
}

impl<D> core::fmt::Debug for Controller<D>
where
    D: Document + core::fmt::Debug,
    D::Node: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("engine", &self.engine)
            .field("doc", &self.doc)
            .finish()
    }
}
