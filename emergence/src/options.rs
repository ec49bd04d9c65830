use alloc::string::String;
use alloc::sync::Arc;

use crate::parse::{parse_float, parse_int};
use crate::{Offsets, Transition, Viewport};

pub const DEFAULT_THROTTLE_MS: u64 = 250;
pub const DEFAULT_ELEM_CUSHION: f64 = 0.15;
pub const DEFAULT_MARKER: &str = "data-emergence";
pub const DEFAULT_ROOT_CLASS: &str = "emergence";

/// A callback fired for every tracked element on every engagement pass.
///
/// The callback only sees the node, never the engine, so it cannot re-enter an engagement pass.
pub type Callback<N> = Arc<dyn Fn(&N, Transition) + Send + Sync>;

/// Configuration for [`crate::Emergence`].
///
/// Options are fixed once the engine is built. They are cheap to clone: the callback and strings
/// live behind `Arc`s.
pub struct EmergenceOptions<N> {
    /// The scroll viewport. Defaults to the window.
    pub container: Viewport<N>,
    /// Minimum time between engagement passes triggered by host events.
    pub throttle_ms: u64,
    /// Re-hide elements after they leave the viewport. When disabled, the marker is removed the
    /// first time an element becomes visible (one-shot mode).
    pub reset: bool,
    /// Run on handheld devices.
    pub handheld: bool,
    /// Fraction of the element size inset from each edge before the overlap test.
    pub elem_cushion: f64,
    /// Pixel adjustments applied to the viewport edges.
    pub offsets: Offsets,
    pub callback: Option<Callback<N>>,
    /// Attribute that marks an element as tracked and carries its state.
    pub marker: Arc<str>,
    /// Class added to the root element once the engine is set up.
    pub root_class: Arc<str>,
}

impl<N: Clone> Clone for EmergenceOptions<N> {
    fn clone(&self) -> Self {
        Self {
            container: self.container.clone(),
            throttle_ms: self.throttle_ms,
            reset: self.reset,
            handheld: self.handheld,
            elem_cushion: self.elem_cushion,
            offsets: self.offsets,
            callback: self.callback.clone(),
            marker: Arc::clone(&self.marker),
            root_class: Arc::clone(&self.root_class),
        }
    }
}

impl<N> Default for EmergenceOptions<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> EmergenceOptions<N> {
    pub fn new() -> Self {
        Self {
            container: Viewport::Window,
            throttle_ms: DEFAULT_THROTTLE_MS,
            reset: true,
            handheld: true,
            elem_cushion: DEFAULT_ELEM_CUSHION,
            offsets: Offsets::default(),
            callback: None,
            marker: Arc::from(DEFAULT_MARKER),
            root_class: Arc::from(DEFAULT_ROOT_CLASS),
        }
    }

    /// Builds options from loosely typed input, falling back to defaults for anything that does
    /// not parse.
    pub fn from_raw(raw: &RawOptions) -> Self {
        let int = |v: &Option<RawValue>, fallback: i64| {
            v.as_ref().and_then(RawValue::as_int).unwrap_or(fallback)
        };
        let offset = |v: &Option<RawValue>| clamp_i32(int(v, 0));

        let elem_cushion = raw
            .elem_cushion
            .as_ref()
            .and_then(RawValue::as_float)
            .filter(|c| c.is_finite())
            .unwrap_or(DEFAULT_ELEM_CUSHION);

        let mut opts = Self::new();
        opts.throttle_ms = int(&raw.throttle, DEFAULT_THROTTLE_MS as i64).max(0) as u64;
        opts.reset = raw.reset.unwrap_or(true);
        opts.handheld = raw.handheld.unwrap_or(true);
        opts.elem_cushion = elem_cushion;
        opts.offsets = Offsets {
            top: offset(&raw.offset_top),
            right: offset(&raw.offset_right),
            bottom: offset(&raw.offset_bottom),
            left: offset(&raw.offset_left),
        };
        if let Some(marker) = raw.marker.as_deref().filter(|m| !m.is_empty()) {
            opts.marker = Arc::from(marker);
        }
        if let Some(class) = raw.root_class.as_deref().filter(|c| !c.is_empty()) {
            opts.root_class = Arc::from(class);
        }
        opts
    }

    pub fn with_container(mut self, container: Viewport<N>) -> Self {
        self.container = container;
        self
    }

    pub fn with_container_element(mut self, node: N) -> Self {
        self.container = Viewport::Element(node);
        self
    }

    pub fn with_throttle_ms(mut self, throttle_ms: u64) -> Self {
        self.throttle_ms = throttle_ms;
        self
    }

    pub fn with_reset(mut self, reset: bool) -> Self {
        self.reset = reset;
        self
    }

    pub fn with_handheld(mut self, handheld: bool) -> Self {
        self.handheld = handheld;
        self
    }

    pub fn with_elem_cushion(mut self, elem_cushion: f64) -> Self {
        self.elem_cushion = elem_cushion;
        self
    }

    pub fn with_offsets(mut self, offsets: Offsets) -> Self {
        self.offsets = offsets;
        self
    }

    pub fn with_callback(
        mut self,
        callback: Option<impl Fn(&N, Transition) + Send + Sync + 'static>,
    ) -> Self {
        self.callback = callback.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_marker(mut self, marker: &str) -> Self {
        self.marker = Arc::from(marker);
        self
    }

    pub fn with_root_class(mut self, root_class: &str) -> Self {
        self.root_class = Arc::from(root_class);
        self
    }
}

impl<N: core::fmt::Debug> core::fmt::Debug for EmergenceOptions<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EmergenceOptions")
            .field("container", &self.container)
            .field("throttle_ms", &self.throttle_ms)
            .field("reset", &self.reset)
            .field("handheld", &self.handheld)
            .field("elem_cushion", &self.elem_cushion)
            .field("offsets", &self.offsets)
            .field("marker", &self.marker)
            .field("root_class", &self.root_class)
            .finish_non_exhaustive()
    }
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// A loosely typed numeric option: either a number or text to be parsed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Integer value, truncating fractions. Text parses a leading integer prefix.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Number(v) if v.is_finite() => Some(*v as i64),
            Self::Number(_) => None,
            Self::Text(s) => parse_int(s),
        }
    }

    /// Float value. Text parses a leading decimal prefix.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(s) => parse_float(s),
        }
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        Self::Text(String::from(v))
    }
}

/// Untyped configuration as a page would provide it.
///
/// Convert with [`EmergenceOptions::from_raw`]. The container and callback are host objects and
/// are set on the resulting options directly.
///
/// With `feature = "serde"`, this type deserializes from camelCase keys (`elemCushion`,
/// `offsetTop`, ...).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RawOptions {
    pub throttle: Option<RawValue>,
    pub reset: Option<bool>,
    pub handheld: Option<bool>,
    pub elem_cushion: Option<RawValue>,
    pub offset_top: Option<RawValue>,
    pub offset_right: Option<RawValue>,
    pub offset_bottom: Option<RawValue>,
    pub offset_left: Option<RawValue>,
    pub marker: Option<String>,
    pub root_class: Option<String>,
}
