use std::{collections::HashMap, sync::Arc};

use credo_core::{AccountEvent, EventHandler, EventName};
use tracing::Instrument;

/// Fan-out of account events to the handlers registered for their name.
///
/// The table is built once at startup and shared read-only afterwards.
/// Handlers run on their own tasks; a failing handler is logged and never
/// reaches the operation that emitted the event.
#[derive(Default, Clone)]
pub struct NotificationDispatcher {
    handlers: HashMap<EventName, Vec<Arc<dyn EventHandler>>>,
}

#[derive(Default)]
pub struct NotificationDispatcherBuilder {
    handlers: HashMap<EventName, Vec<Arc<dyn EventHandler>>>,
}

impl NotificationDispatcherBuilder {
    pub fn register<H>(self, name: EventName, handler: H) -> Self
    where
        H: EventHandler + 'static,
    {
        self.register_shared(name, Arc::new(handler))
    }

    pub fn register_shared(mut self, name: EventName, handler: Arc<dyn EventHandler>) -> Self {
        self.handlers.entry(name).or_default().push(handler);
        self
    }

    pub fn build(self) -> NotificationDispatcher {
        NotificationDispatcher {
            handlers: self.handlers,
        }
    }
}

impl NotificationDispatcher {
    pub fn builder() -> NotificationDispatcherBuilder {
        NotificationDispatcherBuilder::default()
    }

    pub fn handler_count(&self, name: EventName) -> usize {
        self.handlers.get(&name).map_or(0, Vec::len)
    }

    /// Must be called from within a tokio runtime.
    #[tracing::instrument(name = "NotificationDispatcher::dispatch", skip_all, fields(event = %event.name()))]
    pub fn dispatch(&self, event: AccountEvent) {
        let Some(handlers) = self.handlers.get(&event.name()) else {
            tracing::debug!("No handlers registered");
            return;
        };

        let event = Arc::new(event);
        for handler in handlers {
            let handler = Arc::clone(handler);
            let event = Arc::clone(&event);
            tokio::spawn(
                async move {
                    if let Err(error) = handler.handle(&event).await {
                        tracing::error!(error = %error, "Notification handler failed");
                    }
                }
                .in_current_span(),
            );
        }
    }
}
