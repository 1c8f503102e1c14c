//! Visibility-control seeds.
//!
//! `toggleComponent` decides by reading the target's computed visibility
//! from the stage, never by tracking its own flag, so it stays correct when
//! other code mutates the same target. The show/hide legs are dispatched
//! reentrantly through the registry so custom overrides of either leg take
//! effect for toggling too.

use tracing::{debug, warn};

use super::{events, seed};
use crate::controller::registry::HandlerTable;
use crate::model::stage::Visibility;

pub(crate) fn install(table: &mut HandlerTable) {
    seed(table, events::SHOW_COMPONENT, |registry, payload| {
        let Some(target) = payload.target_id() else {
            debug!("show event without target id");
            return;
        };

        registry.stage().show(target);
    });

    seed(table, events::HIDE_COMPONENT, |registry, payload| {
        let Some(target) = payload.target_id() else {
            debug!("hide event without target id");
            return;
        };

        registry.stage().hide(target);
    });

    seed(table, events::TOGGLE_COMPONENT, |registry, payload| {
        let Some(target) = payload.target_id() else {
            debug!("toggle event without target id");
            return;
        };

        match registry.stage().visibility(target) {
            Some(Visibility::Hidden) => {
                registry.trigger(events::SHOW_COMPONENT, payload.clone());
            }
            Some(Visibility::Visible) => {
                registry.trigger(events::HIDE_COMPONENT, payload.clone());
            }
            None => warn!(target, "component not found"),
        }
    });
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use serde_json::json;

    use crate::controller::handlers::events;
    use crate::controller::notifier::LogNotifier;
    use crate::controller::payload::EventPayload;
    use crate::controller::registry::{EventRegistry, EventRegistryBuilder};
    use crate::model::scene::SceneStage;
    use crate::model::stage::{Stage, Visibility};

    fn registry_over(scene: &SceneStage) -> EventRegistry {
        EventRegistryBuilder::new()
            .with_stage(Arc::new(scene.clone()))
            .with_notifier(Arc::new(LogNotifier))
            .build()
    }

    fn target(id: &str) -> EventPayload {
        EventPayload::from_value(json!({ "targetId": id }))
    }

    #[tokio::test(start_paused = true)]
    async fn hide_then_toggle_restores_visibility() {
        let scene = SceneStage::default();
        scene.add_panel("panel-1", "Panel");
        let registry = registry_over(&scene);

        registry.trigger(events::HIDE_COMPONENT, target("panel-1"));
        tokio::time::sleep(Duration::from_millis(350)).await;
        assert_eq!(scene.visibility("panel-1"), Some(Visibility::Hidden));

        registry.trigger(events::TOGGLE_COMPONENT, target("panel-1"));
        assert_eq!(scene.visibility("panel-1"), Some(Visibility::Visible));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(scene.visibility("panel-1"), Some(Visibility::Visible));
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_reads_live_state_not_shadow_state() {
        let scene = SceneStage::default();
        scene.add_panel("panel-1", "Panel");
        let registry = registry_over(&scene);

        // Some other code hides the panel behind the registry's back.
        scene.hide("panel-1");
        tokio::time::sleep(Duration::from_millis(350)).await;

        registry.trigger(events::TOGGLE_COMPONENT, target("panel-1"));

        assert_eq!(scene.visibility("panel-1"), Some(Visibility::Visible));
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_target_completes_without_mutation() {
        let scene = SceneStage::default();
        scene.add_panel("panel-1", "Panel");
        let registry = registry_over(&scene);
        let before = scene.panels()[0].presentation;

        registry.trigger(events::SHOW_COMPONENT, target("does-not-exist"));
        registry.trigger(events::TOGGLE_COMPONENT, target("does-not-exist"));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(scene.panels()[0].presentation, before);
    }

    #[tokio::test(start_paused = true)]
    async fn payload_without_target_id_is_ignored() {
        let scene = SceneStage::default();
        scene.add_panel("panel-1", "Panel");
        let registry = registry_over(&scene);

        registry.trigger(events::HIDE_COMPONENT, EventPayload::empty());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(scene.visibility("panel-1"), Some(Visibility::Visible));
    }

    #[tokio::test(start_paused = true)]
    async fn legacy_component_id_key_still_resolves() {
        let scene = SceneStage::default();
        scene.add_panel("panel-1", "Panel");
        let registry = registry_over(&scene);

        registry.trigger(
            events::HIDE_COMPONENT,
            EventPayload::from_value(json!({ "componentId": "panel-1" })),
        );
        tokio::time::sleep(Duration::from_millis(350)).await;

        assert_eq!(scene.visibility("panel-1"), Some(Visibility::Hidden));
    }
}
