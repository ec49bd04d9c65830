/// Per-element tracking state.
///
/// The engine keeps this as its source of truth and writes it back to the marker attribute after
/// each evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementState {
    /// Not carrying the marker, or carrying it but not evaluated yet.
    #[default]
    Untracked,
    Hidden,
    Visible,
    /// One-shot mode: the marker was removed after the first visible evaluation.
    Removed,
}

impl ElementState {
    /// The marker attribute value for this state, if the attribute should be present.
    pub fn attribute_value(self) -> Option<&'static str> {
        match self {
            Self::Hidden => Some("hidden"),
            Self::Visible => Some("visible"),
            Self::Untracked | Self::Removed => None,
        }
    }
}

/// The kind of evaluation reported to the callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Transition {
    /// The element is inside the viewport.
    Visible,
    /// The element is outside the viewport and was reset to `hidden`.
    Reset,
    /// The element is outside the viewport and reset is disabled; nothing was written.
    NoReset,
}

impl Transition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Reset => "reset",
            Self::NoReset => "noreset",
        }
    }
}

impl core::fmt::Display for Transition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A summary of one engagement pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassReport {
    /// Number of elements carrying the marker at pass start.
    pub tracked: usize,
    pub visible: usize,
    pub hidden: usize,
    /// Elements whose marker was removed during this pass (one-shot mode).
    pub removed: usize,
    /// `true` when the registry was empty and the pass disengaged instead.
    pub disengaged: bool,
}
