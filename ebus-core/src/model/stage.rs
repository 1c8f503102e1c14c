//! Stage: trait abstraction for the presentation boundary
//!
//! Provides a clean interface for visibility and navigation handlers to
//! reach whatever is displaying the components, without the dispatch core
//! depending on any UI toolkit. The in-memory implementation lives in
//! [`scene`](crate::model::scene); tests run against it headlessly.

use std::fmt::Debug;

use compact_str::CompactString;

/// Computed visibility of a presentation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Visibility {
    Visible = 0,
    Hidden = 1,
}

/// Presentation state of a single target.
///
/// `display` is the in-layout flag; `opacity` and `scale` carry the
/// transition's intermediate appearance for the view to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPresentation {
    pub display: bool,
    pub opacity: f32,
    pub scale: f32,
}

impl PanelPresentation {
    /// Fully visible, settled.
    #[must_use]
    pub const fn shown() -> Self {
        Self {
            display: true,
            opacity: 1.0,
            scale: 1.0,
        }
    }

    /// In layout but at the transition's start state.
    #[must_use]
    pub const fn entering() -> Self {
        Self {
            display: true,
            opacity: 0.0,
            scale: 0.8,
        }
    }

    /// Fading out, still in layout until the transition window elapses.
    #[must_use]
    pub const fn exiting() -> Self {
        Self {
            display: true,
            opacity: 0.0,
            scale: 0.8,
        }
    }

    /// Removed from layout.
    #[must_use]
    pub const fn hidden() -> Self {
        Self {
            display: false,
            opacity: 0.0,
            scale: 0.8,
        }
    }

    /// Visibility as read from live state. Targets still mid-exit count as
    /// visible until `display` drops; toggling must use this, not any flag
    /// tracked beside the target.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        if self.display {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }
}

impl Default for PanelPresentation {
    fn default() -> Self {
        Self::shown()
    }
}

/// Trait for resolving external identifiers to presentation targets and
/// mutating their visibility with a timed transition.
///
/// Contract: at most one target per identifier; an unknown identifier is a
/// warning and a no-op, never an error, including inside deferred
/// transition callbacks whose target has meanwhile disappeared.
pub trait Stage: Send + Sync + Debug {
    /// Whether `target_id` resolves to a target.
    fn contains(&self, target_id: &str) -> bool;

    /// Computed visibility, `None` for unknown targets.
    fn visibility(&self, target_id: &str) -> Option<Visibility>;

    /// Bring the target into layout and settle it to fully shown after the
    /// enter delay.
    fn show(&self, target_id: &str);

    /// Start the exit state and drop the target from layout once the
    /// transition window elapses.
    fn hide(&self, target_id: &str);

    /// Simple navigation to a route.
    fn navigate(&self, route: &str);

    /// Current route.
    fn route(&self) -> CompactString;
}
