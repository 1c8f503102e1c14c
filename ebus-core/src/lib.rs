pub mod error;

pub mod config;

pub mod controller {
    pub mod payload;
    pub use payload::EventPayload;

    pub mod registry;
    pub use registry::{EventRegistry, EventRegistryBuilder, Handler, HandlerOrigin, HandlerStats};

    pub mod notifier;
    pub use notifier::{LogNotifier, Notifier, ToastNotifier};

    pub mod handlers;
    pub use handlers::events;
}

pub mod model {
    pub mod stage;
    pub use stage::{PanelPresentation, Stage, Visibility};

    pub mod scene;
    pub use scene::{SceneStage, ScenePanel};
}

pub mod view {
    pub mod theme;

    pub mod ui;
    pub use ui::UIRenderer;

    pub mod components {
        pub mod dispatch_log;
        pub use dispatch_log::{DispatchLog, DispatchRecord};
        pub mod panel_grid;
        pub use panel_grid::PanelGrid;
        pub mod status_bar;
        pub use status_bar::StatusBar;
        pub mod toast_overlay;
        pub use toast_overlay::ToastOverlay;
    }

    pub use components::*;
}

pub mod logging;

pub use config::Config;
pub use controller::{EventPayload, EventRegistry};
pub use error::BusError;
pub use model::{scene::SceneStage, stage::Stage};
