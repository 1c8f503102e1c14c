//! EventRegistry: named-handler event dispatch
//!
//! A mutable mapping from event names to handlers, mediating between the
//! widgets that raise intents and the behavior those intents trigger:
//! - Register/unregister with silent last-wins overwrite
//! - Synchronous dispatch; unknown names fall through to a notification
//!   instead of failing
//! - Bulk registration and reset to the seed catalog
//! - Per-handler dispatch counters for diagnostics
//!
//! No lock is held while a handler runs, so handlers may reentrantly call
//! `trigger`, `register` or `unregister` on the registry they were invoked
//! from; enumeration always works on a point-in-time snapshot.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use ahash::RandomState;
use chrono::Utc;
use compact_str::CompactString;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use toastr::{Toast, ToastCenter};

use crate::config::SeedConfig;
use crate::controller::handlers;
use crate::controller::notifier::{Notifier, ToastNotifier};
use crate::controller::payload::EventPayload;
use crate::model::scene::SceneStage;
use crate::model::stage::Stage;

/// Handler bound to an event name.
///
/// The registry passes itself to the handler, so a handler can trigger
/// further events or mutate the table mid-dispatch.
pub type Handler = Arc<dyn Fn(&EventRegistry, &EventPayload) + Send + Sync>;

/// Where a binding came from; purely diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum HandlerOrigin {
    Seed = 0,
    Custom = 1,
}

/// Entry for each registered handler, with dispatch metadata.
#[derive(Clone)]
pub struct HandlerEntry {
    handler: Handler,
    origin: HandlerOrigin,
    dispatch_count: Arc<AtomicU64>,
    total_processing_ns: Arc<AtomicU64>,
}

impl HandlerEntry {
    fn new(handler: Handler, origin: HandlerOrigin) -> Self {
        Self {
            handler,
            origin,
            dispatch_count: Arc::new(AtomicU64::new(0)),
            total_processing_ns: Arc::new(AtomicU64::new(0)),
        }
    }

    pub(crate) fn seed(handler: Handler) -> Self {
        Self::new(handler, HandlerOrigin::Seed)
    }

    fn custom(handler: Handler) -> Self {
        Self::new(handler, HandlerOrigin::Custom)
    }

    #[must_use]
    pub fn origin(&self) -> HandlerOrigin {
        self.origin
    }
}

impl fmt::Debug for HandlerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerEntry")
            .field("origin", &self.origin)
            .field(
                "dispatch_count",
                &self.dispatch_count.load(Ordering::Relaxed),
            )
            .finish()
    }
}

/// Handler performance statistics.
#[derive(Debug, Clone)]
pub struct HandlerStats {
    pub name: CompactString,
    pub origin: HandlerOrigin,
    pub dispatch_count: u64,
    pub average_processing_time_ns: u64,
}

pub type HandlerTable = IndexMap<CompactString, HandlerEntry, RandomState>;

static GLOBAL: Lazy<EventRegistry> = Lazy::new(|| EventRegistryBuilder::new().build());

/// Named-handler dispatch registry.
pub struct EventRegistry {
    entries: RwLock<HandlerTable>,
    stage: Arc<dyn Stage>,
    notifier: Arc<dyn Notifier>,
    seeds: SeedConfig,
}

impl EventRegistry {
    /// The process-wide default instance, seeded with the full catalog over
    /// an in-memory scene and a toast-backed notifier. Prefer constructing
    /// isolated instances with [`EventRegistryBuilder`] anywhere testability
    /// matters; this accessor exists for ad hoc access outside the normal
    /// call graph.
    #[must_use]
    pub fn global() -> &'static EventRegistry {
        &GLOBAL
    }

    /// Insert or silently overwrite the binding for `name`; the last
    /// registration wins.
    pub fn register<F>(&self, name: impl Into<CompactString>, handler: F)
    where
        F: Fn(&EventRegistry, &EventPayload) + Send + Sync + 'static,
    {
        self.register_handler(name, Arc::new(handler));
    }

    /// `register` for an already-shared handler.
    pub fn register_handler(&self, name: impl Into<CompactString>, handler: Handler) {
        let name = name.into();
        let replaced = self
            .entries
            .write()
            .insert(name.clone(), HandlerEntry::custom(handler))
            .is_some();

        debug!(event = %name, replaced, "registered event handler");
    }

    /// Remove the binding for `name` if present; absent names are a no-op.
    pub fn unregister(&self, name: &str) -> bool {
        let removed = self.entries.write().shift_remove(name).is_some();

        if removed {
            debug!(event = name, "unregistered event handler");
        }

        removed
    }

    /// Dispatch `name` synchronously.
    ///
    /// A bound handler runs with `payload`; its panics propagate to the
    /// caller untouched. An unbound name is never an error: diagnostics are
    /// logged and a transient notification summarizes the event.
    pub fn trigger(&self, name: &str, payload: EventPayload) {
        let entry = self.entries.read().get(name).cloned();

        match entry {
            Some(entry) => {
                debug!(event = name, %payload, "triggering event");

                let started = Instant::now();
                (entry.handler)(self, &payload);

                entry.dispatch_count.fetch_add(1, Ordering::Relaxed);
                entry
                    .total_processing_ns
                    .fetch_add(started.elapsed().as_nanos() as u64, Ordering::Relaxed);
            }

            None => self.handle_unmapped(name, &payload),
        }
    }

    /// Register every entry in `handlers` in a single pass under one write
    /// lock, so callers observe all of them or none.
    pub fn register_multiple<I>(&self, handlers: I) -> usize
    where
        I: IntoIterator<Item = (CompactString, Handler)>,
    {
        let mut table = self.entries.write();
        let mut count = 0;

        for (name, handler) in handlers {
            table.insert(name, HandlerEntry::custom(handler));
            count += 1;
        }

        info!(count, "registered event handlers in bulk");
        count
    }

    /// Replace the whole table with a fresh copy of the seed catalog,
    /// discarding any custom registrations.
    pub fn reset_to_defaults(&self) {
        let fresh = handlers::seed_catalog(&self.seeds);
        *self.entries.write() = fresh;

        info!("event registry reset to seed handlers");
    }

    /// Pure membership lookup.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    /// Ordered snapshot of the currently registered names.
    #[must_use]
    pub fn registered_events(&self) -> Vec<CompactString> {
        self.entries.read().keys().cloned().collect()
    }

    /// Shallow, independent copy of the table; mutating it does not affect
    /// the registry.
    #[must_use]
    pub fn snapshot(&self) -> HandlerTable {
        self.entries.read().clone()
    }

    /// Per-handler dispatch report, in registration order.
    #[must_use]
    pub fn handler_stats(&self) -> Vec<HandlerStats> {
        self.entries
            .read()
            .iter()
            .map(|(name, entry)| {
                let dispatch_count = entry.dispatch_count.load(Ordering::Relaxed);
                let total_ns = entry.total_processing_ns.load(Ordering::Relaxed);

                let average = if dispatch_count > 0 {
                    total_ns / dispatch_count
                } else {
                    0
                };

                HandlerStats {
                    name: name.clone(),
                    origin: entry.origin,
                    dispatch_count,
                    average_processing_time_ns: average,
                }
            })
            .collect()
    }

    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.entries.read().len()
    }

    /// Install a handler that acknowledges the event with a notification:
    /// the fixed `message` when given, otherwise whatever message the
    /// payload carries.
    pub fn quick_register(&self, name: impl Into<CompactString>, message: Option<String>) {
        let name = name.into();
        let event = name.clone();

        self.register(name, move |registry, payload| {
            debug!(event = %event, "quick handler fired");

            match &message {
                Some(message) => registry
                    .show_event_notification(&event, &payload.with_message(message.clone())),
                None => registry.show_event_notification(&event, payload),
            }
        });
    }

    /// Surface the "custom event" notification for `name`, using the
    /// payload's message when it has one.
    pub fn show_event_notification(&self, name: &str, payload: &EventPayload) {
        let body = payload
            .message()
            .map(str::to_owned)
            .unwrap_or_else(|| format!("Event \"{name}\" triggered!"));

        self.notifier
            .notify(Toast::info("Custom Event", format!("{body} (event: {name})")));
    }

    #[must_use]
    pub fn stage(&self) -> &Arc<dyn Stage> {
        &self.stage
    }

    #[must_use]
    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    fn handle_unmapped(&self, name: &str, payload: &EventPayload) {
        warn!(event = name, "no handler registered for event");
        debug!(
            event = name,
            %payload,
            timestamp = %Utc::now().to_rfc3339(),
            "unmapped event details"
        );

        self.show_event_notification(name, payload);
    }
}

impl fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRegistry")
            .field("handler_count", &self.handler_count())
            .finish()
    }
}

/// Builder for isolated registry instances.
pub struct EventRegistryBuilder {
    stage: Option<Arc<dyn Stage>>,
    notifier: Option<Arc<dyn Notifier>>,
    seeds: SeedConfig,
}

impl EventRegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: None,
            notifier: None,
            seeds: SeedConfig::default(),
        }
    }

    #[must_use]
    pub fn with_stage(mut self, stage: Arc<dyn Stage>) -> Self {
        self.stage = Some(stage);
        self
    }

    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    #[must_use]
    pub fn with_seeds(mut self, seeds: SeedConfig) -> Self {
        self.seeds = seeds;
        self
    }

    /// No seed handlers; a completely empty table.
    #[must_use]
    pub fn without_seeds(self) -> Self {
        self.with_seeds(SeedConfig::none())
    }

    #[must_use]
    pub fn build(self) -> EventRegistry {
        let stage = self
            .stage
            .unwrap_or_else(|| Arc::new(SceneStage::default()));
        let notifier = self
            .notifier
            .unwrap_or_else(|| Arc::new(ToastNotifier::new(ToastCenter::new())));

        let registry = EventRegistry {
            entries: RwLock::new(handlers::seed_catalog(&self.seeds)),
            stage,
            notifier,
            seeds: self.seeds,
        };

        info!(
            handler_count = registry.handler_count(),
            "EventRegistry initialized"
        );

        registry
    }
}

impl Default for EventRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::handlers::events;
    use parking_lot::Mutex;
    use serde_json::json;
    use std::sync::atomic::AtomicUsize;

    /// Captures every toast instead of displaying it.
    #[derive(Debug, Clone, Default)]
    struct RecordingNotifier {
        toasts: Arc<Mutex<Vec<Toast>>>,
    }

    impl RecordingNotifier {
        fn bodies(&self) -> Vec<String> {
            self.toasts
                .lock()
                .iter()
                .map(|toast| toast.body.clone())
                .collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, toast: Toast) {
            self.toasts.lock().push(toast);
        }
    }

    fn bare_registry() -> (EventRegistry, RecordingNotifier) {
        let notifier = RecordingNotifier::default();
        let registry = EventRegistryBuilder::new()
            .with_notifier(Arc::new(notifier.clone()))
            .without_seeds()
            .build();

        (registry, notifier)
    }

    fn counting_handler(counter: &Arc<AtomicUsize>) -> Handler {
        let counter = Arc::clone(counter);
        Arc::new(move |_, _| {
            counter.fetch_add(1, Ordering::Relaxed);
        })
    }

    #[test]
    fn overwrite_leaves_exactly_one_binding() {
        let (registry, _) = bare_registry();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        registry.register_handler("onButtonClick", counting_handler(&first));
        registry.register_handler("onButtonClick", counting_handler(&second));

        registry.trigger("onButtonClick", EventPayload::empty());

        assert_eq!(first.load(Ordering::Relaxed), 0);
        assert_eq!(second.load(Ordering::Relaxed), 1);
        assert_eq!(registry.handler_count(), 1);
    }

    #[test]
    fn unregister_of_absent_name_leaves_table_unchanged() {
        let (registry, _) = bare_registry();
        registry.register("present", |_, _| {});

        assert!(!registry.unregister("absent"));
        assert_eq!(registry.registered_events(), vec!["present"]);
    }

    #[test]
    fn unknown_event_invokes_fallback_with_name_and_payload() {
        let (registry, notifier) = bare_registry();

        registry.trigger(
            "totally-unknown-event",
            EventPayload::from_value(json!({ "foo": 1 })),
        );

        let bodies = notifier.bodies();
        assert_eq!(bodies.len(), 1);
        assert!(bodies[0].contains("totally-unknown-event"));
    }

    #[test]
    fn fallback_prefers_the_payload_message() {
        let (registry, notifier) = bare_registry();

        registry.trigger(
            "unknown",
            EventPayload::from_value(json!({ "message": "from the widget" })),
        );

        assert!(notifier.bodies()[0].contains("from the widget"));
    }

    #[test]
    fn unregistered_name_falls_back_after_removal() {
        let (registry, notifier) = bare_registry();
        registry.register("onCardClick", |_, _| {});

        registry.unregister("onCardClick");
        registry.trigger("onCardClick", EventPayload::empty());

        assert_eq!(notifier.bodies().len(), 1);
    }

    #[test]
    fn reset_restores_exactly_the_seed_set() {
        let registry = EventRegistryBuilder::new().build();
        let seeded: Vec<_> = registry.registered_events();

        registry.register("x", |_, _| {});
        registry.unregister(events::BUTTON_CLICK);
        registry.reset_to_defaults();

        assert!(!registry.is_registered("x"));
        assert_eq!(registry.registered_events(), seeded);

        for name in events::ALL {
            assert!(registry.is_registered(name), "missing seed {name}");
        }
    }

    #[test]
    fn bulk_registration_is_immediately_dispatchable() {
        let (registry, _) = bare_registry();
        let a = Arc::new(AtomicUsize::new(0));
        let b = Arc::new(AtomicUsize::new(0));

        let registered = registry.register_multiple([
            (CompactString::const_new("a"), counting_handler(&a)),
            (CompactString::const_new("b"), counting_handler(&b)),
        ]);

        assert_eq!(registered, 2);

        registry.trigger("a", EventPayload::empty());
        registry.trigger("b", EventPayload::empty());

        assert_eq!(a.load(Ordering::Relaxed), 1);
        assert_eq!(b.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn reentrant_mutation_mid_dispatch_is_safe() {
        let (registry, _) = bare_registry();
        let observed = Arc::new(Mutex::new(Vec::new()));

        let observed_in_handler = Arc::clone(&observed);
        registry.register("p", move |registry, _| {
            registry.register("q", |_, _| {});
            registry.quick_register("r", None);

            // Enumeration from inside a handler sees a consistent snapshot.
            observed_in_handler
                .lock()
                .push(registry.registered_events());
        });

        registry.trigger("p", EventPayload::empty());

        let seen = observed.lock();
        assert_eq!(seen[0], vec!["p", "q", "r"]);
        assert!(registry.is_registered("q"));
        assert!(registry.is_registered("r"));
    }

    #[test]
    fn reentrant_trigger_mid_dispatch_reaches_the_inner_handler() {
        let (registry, _) = bare_registry();
        let inner_calls = Arc::new(AtomicUsize::new(0));

        registry.register_handler("inner", counting_handler(&inner_calls));
        registry.register("outer", |registry, payload| {
            registry.trigger("inner", payload.clone());
        });

        registry.trigger("outer", EventPayload::empty());

        assert_eq!(inner_calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn snapshot_is_independent_of_the_live_table() {
        let (registry, _) = bare_registry();
        registry.register("kept", |_, _| {});

        let mut snapshot = registry.snapshot();
        snapshot.shift_remove("kept");
        snapshot.insert(
            CompactString::const_new("phantom"),
            HandlerEntry::custom(Arc::new(|_, _| {})),
        );

        assert!(registry.is_registered("kept"));
        assert!(!registry.is_registered("phantom"));
    }

    #[test]
    fn stats_count_dispatches_per_handler() {
        let (registry, _) = bare_registry();
        registry.register("hot", |_, _| {});
        registry.register("cold", |_, _| {});

        registry.trigger("hot", EventPayload::empty());
        registry.trigger("hot", EventPayload::empty());

        let stats = registry.handler_stats();
        let hot = stats.iter().find(|s| s.name == "hot").unwrap();
        let cold = stats.iter().find(|s| s.name == "cold").unwrap();

        assert_eq!(hot.dispatch_count, 2);
        assert_eq!(cold.dispatch_count, 0);
        assert_eq!(hot.origin, HandlerOrigin::Custom);
    }

    #[test]
    fn quick_register_uses_fixed_message_over_payload() {
        let (registry, notifier) = bare_registry();

        registry.quick_register("onGreeting", Some("fixed greeting".to_string()));
        registry.trigger(
            "onGreeting",
            EventPayload::from_value(json!({ "message": "payload message" })),
        );

        registry.quick_register("onEcho", None);
        registry.trigger(
            "onEcho",
            EventPayload::from_value(json!({ "message": "payload message" })),
        );

        let bodies = notifier.bodies();
        assert!(bodies[0].contains("fixed greeting"));
        assert!(bodies[1].contains("payload message"));
    }
}
