//! Event Bus implementation.
//!
//! The bus is an ordinary value: construct one, wrap it in an `Arc`, and hand
//! it to every component that publishes or observes canvas events. Dispatch
//! is synchronous and follows registration order.

use parking_lot::RwLock;
use std::collections::VecDeque;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

use super::events::{CanvasEvent, EventCategory};

/// Subscription handle for unsubscribing from events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Create a new unique subscription ID
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.simple().to_string()[..8])
    }
}

/// Filter to receive only specific event types
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    /// Receive all events.
    #[default]
    All,
    /// Receive events matching any of these categories.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    /// Filter for a single category
    pub fn category(category: EventCategory) -> Self {
        EventFilter::Categories(vec![category])
    }

    /// Check if an event matches this filter
    pub fn matches(&self, event: &CanvasEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

/// Type alias for event handler functions
type EventHandler = Arc<dyn Fn(&CanvasEvent) + Send + Sync>;

struct Registration {
    id: SubscriptionId,
    filter: EventFilter,
    once: bool,
    handler: EventHandler,
}

/// Configuration for the event bus
#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Whether to keep event history.
    pub enable_history: bool,
    /// Maximum number of events to retain in history.
    pub max_history_size: usize,
    /// How long to retain events in history.
    pub history_retention: Duration,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            enable_history: false,
            max_history_size: 1000,
            history_retention: Duration::from_secs(300),
        }
    }
}

/// Event with timestamp for history
#[derive(Debug, Clone)]
struct TimestampedEvent {
    event: CanvasEvent,
    timestamp: Instant,
}

/// Publish/subscribe hub for canvas events
pub struct EventBus {
    /// Registered handlers in subscription order
    handlers: RwLock<Vec<Registration>>,
    /// Event history (optional)
    history: RwLock<VecDeque<TimestampedEvent>>,
    /// Configuration
    config: EventBusConfig,
}

impl EventBus {
    /// Create a new event bus with default configuration
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    /// Create a new event bus with custom configuration
    pub fn with_config(config: EventBusConfig) -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
            history: RwLock::new(VecDeque::new()),
            config,
        }
    }

    /// Create a bus ready to be shared between components
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Publish an event to all matching subscribers
    ///
    /// Handlers run on the calling thread in subscription order. The handler
    /// list is captured before dispatch, so handlers may subscribe, unsubscribe
    /// or publish without deadlocking; such changes apply to later events.
    /// A panicking handler is logged and skipped. Returns the number of
    /// handlers invoked.
    pub fn publish(&self, event: CanvasEvent) -> usize {
        if self.config.enable_history {
            self.add_to_history(&event);
        }

        tracing::trace!("Publishing {}", event.description());

        let targets: Vec<(SubscriptionId, EventHandler)> = {
            let mut handlers = self.handlers.write();
            let targets = handlers
                .iter()
                .filter(|r| r.filter.matches(&event))
                .map(|r| (r.id, Arc::clone(&r.handler)))
                .collect();
            handlers.retain(|r| !(r.once && r.filter.matches(&event)));
            targets
        };

        for (id, handler) in &targets {
            let outcome = catch_unwind(AssertUnwindSafe(|| handler(&event)));
            if outcome.is_err() {
                tracing::error!(
                    "Event handler {} panicked while handling {}",
                    id,
                    event.description()
                );
            }
        }

        targets.len()
    }

    /// Subscribe to events with a synchronous handler
    ///
    /// The handler will be called on the publishing thread, so it should
    /// return quickly to avoid blocking event dispatch.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&CanvasEvent) + Send + Sync + 'static,
    {
        self.register(filter, false, Arc::new(handler))
    }

    /// Subscribe for a single delivery
    ///
    /// The subscription is removed as soon as one matching event is
    /// dispatched to it.
    pub fn subscribe_once<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&CanvasEvent) + Send + Sync + 'static,
    {
        self.register(filter, true, Arc::new(handler))
    }

    fn register(&self, filter: EventFilter, once: bool, handler: EventHandler) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.handlers.write().push(Registration {
            id,
            filter,
            once,
            handler,
        });
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Unsubscribe from events
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.write();
        let before = handlers.len();
        handlers.retain(|r| r.id != id);
        let removed = handlers.len() != before;
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    /// Get the number of active subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Get recent event history (if enabled)
    ///
    /// Returns events since the given instant, or all history if None.
    pub fn history(&self, since: Option<Instant>) -> Vec<CanvasEvent> {
        if !self.config.enable_history {
            return Vec::new();
        }

        let history = self.history.read();
        match since {
            Some(since) => history
                .iter()
                .filter(|e| e.timestamp >= since)
                .map(|e| e.event.clone())
                .collect(),
            None => history.iter().map(|e| e.event.clone()).collect(),
        }
    }

    /// Clear event history
    pub fn clear_history(&self) {
        self.history.write().clear();
    }

    /// Get the current configuration
    pub fn config(&self) -> &EventBusConfig {
        &self.config
    }

    /// Add an event to history, maintaining size and age limits
    fn add_to_history(&self, event: &CanvasEvent) {
        let mut history = self.history.write();
        let now = Instant::now();

        history.push_back(TimestampedEvent {
            event: event.clone(),
            timestamp: now,
        });

        let retention = self.config.history_retention;
        while history
            .front()
            .is_some_and(|e| now.duration_since(e.timestamp) > retention)
        {
            history.pop_front();
        }

        while history.len() > self.config.max_history_size {
            history.pop_front();
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("config", &self.config)
            .finish()
    }
}
