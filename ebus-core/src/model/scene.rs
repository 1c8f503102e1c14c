//! In-memory stage: the panel table the demo page renders.
//!
//! Panels are keyed by their external identifier (the analogue of a
//! `data-component-id` attribute). Transition phase two runs on deferred
//! Tokio timers; a panel removed before its timer fires is a no-op, and
//! cancellation is deliberately not tracked.

use std::sync::{Arc, Weak};
use std::time::Duration;

use compact_str::CompactString;
use dashmap::DashMap;
use parking_lot::RwLock;
use tracing::{debug, info, trace, warn};

use crate::config::TransitionConfig;
use crate::model::stage::{PanelPresentation, Stage, Visibility};

/// A renderable component registered on the stage.
#[derive(Debug, Clone)]
pub struct ScenePanel {
    pub id: CompactString,
    pub label: CompactString,
    pub presentation: PanelPresentation,
}

/// Transition phase applied when a deferred timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Settle,
    Remove,
}

/// Shared in-memory [`Stage`]. Cloning hands out another handle to the same
/// scene, so the registry's handlers and the renderer see one table.
#[derive(Debug, Clone)]
pub struct SceneStage {
    inner: Arc<SceneInner>,
}

#[derive(Debug)]
struct SceneInner {
    panels: DashMap<CompactString, ScenePanel>,
    route: RwLock<CompactString>,
    timing: TransitionConfig,
}

impl Default for SceneStage {
    fn default() -> Self {
        Self::new(TransitionConfig::default())
    }
}

impl SceneStage {
    #[must_use]
    pub fn new(timing: TransitionConfig) -> Self {
        Self {
            inner: Arc::new(SceneInner {
                panels: DashMap::new(),
                route: RwLock::new(CompactString::const_new("/")),
                timing,
            }),
        }
    }

    /// Register a panel, initially shown. Re-registering an id replaces it.
    pub fn add_panel(&self, id: impl Into<CompactString>, label: impl Into<CompactString>) {
        let id = id.into();

        self.inner.panels.insert(
            id.clone(),
            ScenePanel {
                id,
                label: label.into(),
                presentation: PanelPresentation::shown(),
            },
        );
    }

    /// Drop a panel entirely; pending transition timers for it become no-ops.
    pub fn remove_panel(&self, id: &str) -> bool {
        self.inner.panels.remove(id).is_some()
    }

    /// Snapshot of the panels, ordered by id for stable rendering.
    #[must_use]
    pub fn panels(&self) -> Vec<ScenePanel> {
        let mut panels: Vec<ScenePanel> = self
            .inner
            .panels
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        panels.sort_by(|a, b| a.id.cmp(&b.id));
        panels
    }

    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.inner.panels.len()
    }

    fn apply_phase(inner: &SceneInner, target_id: &str, phase: Phase) {
        // Target may have been removed while the timer was pending.
        let Some(mut panel) = inner.panels.get_mut(target_id) else {
            trace!(target = target_id, "transition target gone before timer fired");
            return;
        };

        panel.presentation = match phase {
            Phase::Settle => PanelPresentation::shown(),
            Phase::Remove => PanelPresentation::hidden(),
        };

        trace!(target = target_id, ?phase, "transition phase applied");
    }

    fn schedule(&self, delay: Duration, target_id: &str, phase: Phase) {
        let target: CompactString = target_id.into();

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            // No runtime to defer on; land the terminal state immediately.
            Self::apply_phase(&self.inner, &target, phase);
            return;
        };

        let weak: Weak<SceneInner> = Arc::downgrade(&self.inner);

        handle.spawn(async move {
            tokio::time::sleep(delay).await;

            if let Some(inner) = weak.upgrade() {
                Self::apply_phase(&inner, &target, phase);
            }
        });
    }
}

impl Stage for SceneStage {
    fn contains(&self, target_id: &str) -> bool {
        self.inner.panels.contains_key(target_id)
    }

    fn visibility(&self, target_id: &str) -> Option<Visibility> {
        self.inner
            .panels
            .get(target_id)
            .map(|panel| panel.presentation.visibility())
    }

    fn show(&self, target_id: &str) {
        {
            let Some(mut panel) = self.inner.panels.get_mut(target_id) else {
                warn!(target = target_id, "component not found");
                return;
            };

            panel.presentation = PanelPresentation::entering();
        }

        debug!(target = target_id, "component entering");
        self.schedule(self.inner.timing.enter_delay, target_id, Phase::Settle);
    }

    fn hide(&self, target_id: &str) {
        {
            let Some(mut panel) = self.inner.panels.get_mut(target_id) else {
                warn!(target = target_id, "component not found");
                return;
            };

            panel.presentation = PanelPresentation::exiting();
        }

        debug!(target = target_id, "component exiting");
        self.schedule(self.inner.timing.duration, target_id, Phase::Remove);
    }

    fn navigate(&self, route: &str) {
        info!(route, "navigating");
        *self.inner.route.write() = CompactString::from(route);
    }

    fn route(&self) -> CompactString {
        self.inner.route.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_with_panel(id: &str) -> SceneStage {
        let scene = SceneStage::default();
        scene.add_panel(id, "Panel under test");
        scene
    }

    #[tokio::test(start_paused = true)]
    async fn hide_removes_from_layout_after_the_transition_window() {
        let scene = scene_with_panel("panel-1");

        scene.hide("panel-1");

        // Exit state holds the panel in layout until the window elapses.
        assert_eq!(scene.visibility("panel-1"), Some(Visibility::Visible));

        tokio::time::sleep(Duration::from_millis(350)).await;

        assert_eq!(scene.visibility("panel-1"), Some(Visibility::Hidden));
    }

    #[tokio::test(start_paused = true)]
    async fn show_settles_after_the_enter_delay() {
        let scene = scene_with_panel("panel-1");

        scene.hide("panel-1");
        tokio::time::sleep(Duration::from_millis(350)).await;

        scene.show("panel-1");
        assert_eq!(scene.visibility("panel-1"), Some(Visibility::Visible));

        tokio::time::sleep(Duration::from_millis(50)).await;

        let panel = &scene.panels()[0];
        assert_eq!(panel.presentation, PanelPresentation::shown());
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_target_is_tolerated_without_mutation() {
        let scene = scene_with_panel("panel-1");
        let before = scene.panels()[0].presentation;

        scene.show("does-not-exist");
        scene.hide("does-not-exist");
        assert_eq!(scene.visibility("does-not-exist"), None);

        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(scene.panels()[0].presentation, before);
        assert_eq!(scene.panel_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn panel_removed_mid_transition_is_a_noop_for_the_timer() {
        let scene = scene_with_panel("panel-1");

        scene.hide("panel-1");
        assert!(scene.remove_panel("panel-1"));

        // Pending Remove timer fires against a missing panel.
        tokio::time::sleep(Duration::from_millis(350)).await;

        assert_eq!(scene.panel_count(), 0);
    }

    #[test]
    fn without_a_runtime_the_terminal_state_lands_immediately() {
        let scene = scene_with_panel("panel-1");

        scene.hide("panel-1");

        assert_eq!(scene.visibility("panel-1"), Some(Visibility::Hidden));
    }

    #[test]
    fn navigate_updates_the_route() {
        let scene = SceneStage::default();
        assert_eq!(scene.route(), "/");

        scene.navigate("/about");

        assert_eq!(scene.route(), "/about");
    }
}
