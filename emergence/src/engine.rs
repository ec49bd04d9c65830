use alloc::vec::Vec;

use crate::handheld::is_handheld_user_agent;
use crate::key::{NodeKey, NodeMap};
use crate::throttle::Throttle;
use crate::visibility::is_visible;
use crate::{Document, ElementState, EmergenceOptions, InitOutcome, PassReport, Signal, Transition};

#[derive(Clone, Copy, Debug)]
struct Tracked {
    state: ElementState,
    seen_in_pass: u64,
}

/// A headless scroll-visibility engine.
///
/// The engine holds no UI objects. Your host drives it:
/// - `init` once, with a [`Document`] implementation
/// - `signal(Signal::Scroll | Signal::Resize | Signal::Load, now_ms)` from event listeners
/// - `tick(doc, now_ms)` from a timer or frame callback to run a due, throttled pass
///
/// Each pass enumerates the elements carrying the marker attribute, tests them against the
/// viewport and writes `visible`/`hidden` back to the attribute. Per-element state is tracked
/// here and the attribute is only ever written as output.
///
/// Engines are independent: several can run against the same document with different markers
/// or containers.
#[derive(Clone, Debug)]
pub struct Emergence<N> {
    options: EmergenceOptions<N>,
    throttle: Throttle,
    outcome: Option<InitOutcome>,
    listening: bool,
    load_listening: bool,
    states: NodeMap<N, Tracked>,
    pass: u64,
    scratch: Vec<N>,
}

impl<N: NodeKey> Emergence<N> {
    pub fn new(options: EmergenceOptions<N>) -> Self {
        edebug!(
            throttle_ms = options.throttle_ms,
            reset = options.reset,
            handheld = options.handheld,
            elem_cushion = options.elem_cushion,
            "Emergence::new"
        );
        Self {
            throttle: Throttle::new(options.throttle_ms),
            options,
            outcome: None,
            listening: false,
            load_listening: false,
            states: NodeMap::<N, Tracked>::new(),
            pass: 0,
            scratch: Vec::new(),
        }
    }

    pub fn options(&self) -> &EmergenceOptions<N> {
        &self.options
    }

    /// The result of `init`, or `None` before it was called.
    pub fn outcome(&self) -> Option<InitOutcome> {
        self.outcome
    }

    pub fn is_initialized(&self) -> bool {
        self.outcome.is_some()
    }

    fn is_inert(&self) -> bool {
        matches!(
            self.outcome,
            Some(InitOutcome::Unsupported | InitOutcome::HandheldExcluded)
        )
    }

    /// Whether scroll/resize listeners on the viewport are wired.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn is_load_listening(&self) -> bool {
        self.load_listening
    }

    pub fn is_pending(&self) -> bool {
        self.throttle.is_pending()
    }

    /// When the pending throttled pass becomes due, if one is pending.
    pub fn due_at(&self) -> Option<u64> {
        self.throttle.due_at()
    }

    pub fn state_of(&self, node: &N) -> ElementState {
        self.states
            .get(node)
            .map(|t| t.state)
            .unwrap_or_default()
    }

    /// Visits every element with a known state (anything but `Untracked`).
    pub fn for_each_state(&self, mut f: impl FnMut(&N, ElementState)) {
        for (node, t) in &self.states {
            if t.state != ElementState::Untracked {
                f(node, t.state);
            }
        }
    }

    /// One-time setup.
    ///
    /// Checks the host capability and the handheld policy; if both pass, marks the root element,
    /// runs a first pass and then wires the listeners. An empty registry at this point does not
    /// leave the engine deaf: markers added later are picked up by the next scroll, resize or
    /// load. Calling `init` again returns the earlier outcome.
    pub fn init<D: Document<Node = N> + ?Sized>(&mut self, doc: &mut D) -> InitOutcome {
        if let Some(outcome) = self.outcome {
            return outcome;
        }

        let outcome = if !doc.supports_query() {
            ewarn!("element querying is not supported by this host; staying inert");
            InitOutcome::Unsupported
        } else if !self.options.handheld && doc.user_agent().is_some_and(is_handheld_user_agent) {
            einfo!("handheld device and handheld disabled; staying inert");
            InitOutcome::HandheldExcluded
        } else {
            doc.add_root_class(&self.options.root_class);
            self.engage(doc);
            doc.set_load_listening(true);
            self.load_listening = true;
            self.wire(doc);
            InitOutcome::Engaged
        };
        self.outcome = Some(outcome);
        edebug!(?outcome, "Emergence::init");
        outcome
    }

    fn wire<D: Document<Node = N> + ?Sized>(&mut self, doc: &mut D) {
        if self.listening {
            return;
        }
        doc.set_listening(&self.options.container, true);
        self.listening = true;
        edebug!("scroll/resize listeners wired");
    }

    /// Routes a host event through the throttle.
    ///
    /// Returns whether a new pass was scheduled. Events for unwired listeners and events arriving
    /// while a pass is already pending are dropped.
    pub fn signal(&mut self, signal: Signal, now_ms: u64) -> bool {
        let wired = match signal {
            Signal::Load => self.load_listening,
            Signal::Scroll | Signal::Resize => self.listening,
        };
        if !wired {
            return false;
        }
        let armed = self.throttle.arm(now_ms);
        etrace!(?signal, now_ms, armed, "Emergence::signal");
        armed
    }

    /// Runs the pending pass if its throttle interval has elapsed at `now_ms`.
    pub fn tick<D: Document<Node = N> + ?Sized>(
        &mut self,
        doc: &mut D,
        now_ms: u64,
    ) -> Option<PassReport> {
        if !self.throttle.take_due(now_ms) {
            return None;
        }
        Some(self.engage(doc))
    }

    /// Runs one engagement pass immediately.
    ///
    /// When no element carries the marker, the engine disengages instead. Calling `engage` after
    /// markers were added back re-wires the listeners of an initialized engine.
    ///
    /// The callback must not drive this engine; it only receives the node.
    pub fn engage<D: Document<Node = N> + ?Sized>(&mut self, doc: &mut D) -> PassReport {
        if self.is_inert() {
            return PassReport::default();
        }

        let mut nodes = core::mem::take(&mut self.scratch);
        nodes.clear();
        doc.tracked_nodes(&self.options.marker, &mut nodes);

        self.pass = self.pass.wrapping_add(1);
        let pass = self.pass;
        let mut report = PassReport {
            tracked: nodes.len(),
            ..PassReport::default()
        };

        if nodes.is_empty() {
            einfo!("no tracked elements; disengaging");
            self.forget_stale(pass);
            self.scratch = nodes;
            self.disengage(doc);
            report.disengaged = true;
            return report;
        }

        if self.outcome == Some(InitOutcome::Engaged) {
            self.wire(doc);
        }

        let opts = &self.options;
        for node in &nodes {
            let visible = is_visible(&*doc, node, &opts.container, opts.elem_cushion, opts.offsets);
            let (next, transition) = match (visible, opts.reset) {
                (true, true) => (ElementState::Visible, Transition::Visible),
                (true, false) => (ElementState::Removed, Transition::Visible),
                (false, true) => (ElementState::Hidden, Transition::Reset),
                (false, false) => (ElementState::Untracked, Transition::NoReset),
            };

            if visible {
                doc.set_attribute(node, &opts.marker, "visible");
                report.visible += 1;
            } else {
                if let Some(value) = next.attribute_value() {
                    doc.set_attribute(node, &opts.marker, value);
                }
                report.hidden += 1;
            }

            if let Some(cb) = &opts.callback {
                cb(node, transition);
            }

            // One-shot: the marker goes only after the callback has seen `visible`.
            if next == ElementState::Removed {
                doc.remove_attribute(node, &opts.marker);
                report.removed += 1;
            }

            self.states.insert(
                node.clone(),
                Tracked {
                    state: next,
                    seen_in_pass: pass,
                },
            );
        }

        self.forget_stale(pass);
        self.scratch = nodes;
        etrace!(
            tracked = report.tracked,
            visible = report.visible,
            hidden = report.hidden,
            removed = report.removed,
            "Emergence::engage"
        );
        report
    }

    // Elements that lost their marker since the last pass become untracked again; one-shot
    // removals are remembered.
    fn forget_stale(&mut self, pass: u64) {
        self.states
            .retain(|_, t| t.seen_in_pass == pass || t.state == ElementState::Removed);
    }

    /// Stops listening: unwires scroll/resize listeners and cancels any pending pass.
    ///
    /// The configuration and the load listener are kept. Call [`Emergence::engage`] to resume after
    /// new markers appear.
    pub fn disengage<D: Document<Node = N> + ?Sized>(&mut self, doc: &mut D) {
        if self.listening {
            doc.set_listening(&self.options.container, false);
            self.listening = false;
            edebug!("scroll/resize listeners unwired");
        }
        self.throttle.cancel();
    }
}
