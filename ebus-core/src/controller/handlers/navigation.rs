//! Navigation seeds: each maps its intent to a fixed route on the stage.

use tracing::info;

use super::{events, seed};
use crate::controller::registry::HandlerTable;

pub(crate) fn install(table: &mut HandlerTable) {
    for (name, route) in [
        (events::HOME_CLICK, "/"),
        (events::ABOUT_CLICK, "/about"),
        (events::SERVICES_CLICK, "/services"),
        (events::CONTACT_CLICK, "/contact"),
    ] {
        seed(table, name, move |registry, _payload| {
            info!(route, "navigation intent");
            registry.stage().navigate(route);
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::controller::handlers::events;
    use crate::controller::notifier::LogNotifier;
    use crate::controller::payload::EventPayload;
    use crate::controller::registry::EventRegistryBuilder;
    use crate::model::scene::SceneStage;
    use crate::model::stage::Stage;

    #[test]
    fn navigation_seeds_change_the_route() {
        let scene = SceneStage::default();
        let registry = EventRegistryBuilder::new()
            .with_stage(Arc::new(scene.clone()))
            .with_notifier(Arc::new(LogNotifier))
            .build();

        registry.trigger(events::ABOUT_CLICK, EventPayload::empty());
        assert_eq!(scene.route(), "/about");

        registry.trigger(events::HOME_CLICK, EventPayload::empty());
        assert_eq!(scene.route(), "/");
    }
}
