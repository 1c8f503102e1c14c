//! Control acknowledgments: buttons, cards and the custom-action seed.

use tracing::info;

use toastr::Toast;

use super::{events, seed};
use crate::controller::registry::HandlerTable;

pub(crate) fn install(table: &mut HandlerTable) {
    seed(table, events::BUTTON_CLICK, |registry, payload| {
        let text = payload.text().unwrap_or("Button");
        info!(text, "button clicked");

        registry.notifier().notify(Toast::success(
            "Button",
            format!("Button \"{text}\" was clicked!"),
        ));
    });

    seed(table, events::SUBMIT_CLICK, |registry, payload| {
        info!(%payload, "submit clicked");

        registry.notifier().notify(Toast::success(
            "Form",
            "Form submitted! Validation hooks go here.",
        ));
    });

    seed(table, events::CANCEL_CLICK, |registry, payload| {
        info!(%payload, "cancel clicked");

        registry
            .notifier()
            .notify(Toast::warning("Form", "Action cancelled!"));
    });

    seed(table, events::CARD_CLICK, |registry, payload| {
        let title = payload.title().unwrap_or("Card");
        info!(title, "card clicked");

        registry
            .notifier()
            .notify(Toast::info("Card", format!("Card \"{title}\" was clicked!")));
    });

    seed(table, events::CUSTOM_ACTION, |registry, payload| {
        info!(%payload, "custom action triggered");

        registry.notifier().notify(Toast::info(
            "Custom Action",
            "Custom action triggered! Define any behavior here.",
        ));
    });
}
