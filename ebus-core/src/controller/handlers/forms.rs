//! Form-intent seeds. Change events are log-only; submission acknowledges
//! with the serialized payload.

use tracing::{debug, info};

use toastr::Toast;

use super::{events, seed};
use crate::controller::registry::HandlerTable;

pub(crate) fn install(table: &mut HandlerTable) {
    seed(table, events::INPUT_CHANGE, |_registry, payload| {
        debug!(%payload, "input changed");
    });

    seed(table, events::FORM_SUBMIT, |registry, payload| {
        info!(%payload, "form submitted");

        registry.notifier().notify(Toast::success(
            "Form",
            format!("Form submitted with data: {payload}"),
        ));
    });

    seed(table, events::SWITCH_TOGGLE, |_registry, payload| {
        debug!(%payload, "switch toggled");
    });

    seed(table, events::CHECKBOX_TOGGLE, |_registry, payload| {
        debug!(%payload, "checkbox toggled");
    });
}
