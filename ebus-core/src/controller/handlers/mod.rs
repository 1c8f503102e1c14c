//! Seed handler catalog.
//!
//! The fixed set of common intents installed at initialization and restored
//! by `reset_to_defaults`. These are default wiring, not core logic: each
//! performs a narrowly-scoped side effect (a log line, an acknowledgment
//! notification, or a stage mutation keyed by the payload's target id).

pub mod controls;
pub mod forms;
pub mod navigation;
pub mod visibility;

use std::sync::Arc;

use compact_str::CompactString;

use crate::config::SeedConfig;
use crate::controller::payload::EventPayload;
use crate::controller::registry::{EventRegistry, HandlerEntry, HandlerTable};

/// Wire-visible names of the seed events, kept verbatim from the widget
/// side that raises them.
pub mod events {
    pub const BUTTON_CLICK: &str = "onButtonClick";
    pub const SUBMIT_CLICK: &str = "onSubmitClick";
    pub const CANCEL_CLICK: &str = "onCancelClick";
    pub const CARD_CLICK: &str = "onCardClick";
    pub const CUSTOM_ACTION: &str = "onCustomAction";

    pub const INPUT_CHANGE: &str = "onInputChange";
    pub const FORM_SUBMIT: &str = "onFormSubmit";
    pub const SWITCH_TOGGLE: &str = "onSwitchToggle";
    pub const CHECKBOX_TOGGLE: &str = "onCheckboxToggle";

    pub const HOME_CLICK: &str = "onHomeClick";
    pub const ABOUT_CLICK: &str = "onAboutClick";
    pub const SERVICES_CLICK: &str = "onServicesClick";
    pub const CONTACT_CLICK: &str = "onContactClick";

    pub const SHOW_COMPONENT: &str = "showComponent";
    pub const HIDE_COMPONENT: &str = "hideComponent";
    pub const TOGGLE_COMPONENT: &str = "toggleComponent";

    /// Every seed name, in catalog order.
    pub const ALL: [&str; 16] = [
        BUTTON_CLICK,
        SUBMIT_CLICK,
        CANCEL_CLICK,
        CARD_CLICK,
        CUSTOM_ACTION,
        INPUT_CHANGE,
        FORM_SUBMIT,
        SWITCH_TOGGLE,
        CHECKBOX_TOGGLE,
        HOME_CLICK,
        ABOUT_CLICK,
        SERVICES_CLICK,
        CONTACT_CLICK,
        SHOW_COMPONENT,
        HIDE_COMPONENT,
        TOGGLE_COMPONENT,
    ];
}

/// Build a fresh seed table for the enabled groups.
pub(crate) fn seed_catalog(config: &SeedConfig) -> HandlerTable {
    let mut table = HandlerTable::default();

    if config.controls {
        controls::install(&mut table);
    }

    if config.forms {
        forms::install(&mut table);
    }

    if config.navigation {
        navigation::install(&mut table);
    }

    if config.visibility {
        visibility::install(&mut table);
    }

    table
}

pub(crate) fn seed<F>(table: &mut HandlerTable, name: &'static str, handler: F)
where
    F: Fn(&EventRegistry, &EventPayload) + Send + Sync + 'static,
{
    table.insert(
        CompactString::const_new(name),
        HandlerEntry::seed(Arc::new(handler)),
    );
}
