//! Process-wide integration state, explicitly owned.
//!
//! The registry replaces the ambient globals of a browser runtime with one
//! owned object constructed at startup and shared by `Arc`. Slots are mutex
//! guarded so the attempt-at-most-once invariant holds even when the host is
//! multi-threaded: `begin_attempt` is the single atomic gate through which an
//! integration may move out of `NotAttempted`.

use crate::integration::{Integration, IntegrationState};
use crate::sink::EventSink;
use std::sync::{Arc, Mutex};
use tracing::warn;

enum Slot {
    NotAttempted,
    Attempting,
    Loaded(Arc<dyn EventSink>),
    Failed,
}

impl Slot {
    fn state(&self) -> IntegrationState {
        match self {
            Slot::NotAttempted => IntegrationState::NotAttempted,
            Slot::Attempting => IntegrationState::Attempting,
            Slot::Loaded(_) => IntegrationState::Loaded,
            Slot::Failed => IntegrationState::Failed,
        }
    }
}

/// Registry of per-integration lifecycle state and installed event sinks.
pub struct AnalyticsRegistry {
    slots: [Mutex<Slot>; 4],
}

impl Default for AnalyticsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsRegistry {
    /// Creates a registry with every integration `NotAttempted`.
    pub fn new() -> Self {
        Self {
            slots: [
                Mutex::new(Slot::NotAttempted),
                Mutex::new(Slot::NotAttempted),
                Mutex::new(Slot::NotAttempted),
                Mutex::new(Slot::NotAttempted),
            ],
        }
    }

    fn slot(&self, integration: Integration) -> &Mutex<Slot> {
        &self.slots[integration.index()]
    }

    /// Current lifecycle state of an integration.
    pub fn state(&self, integration: Integration) -> IntegrationState {
        self.slot(integration)
            .lock()
            .map(|slot| slot.state())
            .unwrap_or(IntegrationState::Failed)
    }

    /// Attempts the `NotAttempted -> Attempting` transition.
    ///
    /// Returns true exactly once per integration per process; every later
    /// call returns false. This is the idempotency guard against duplicate
    /// initialization.
    pub fn begin_attempt(&self, integration: Integration) -> bool {
        let Ok(mut slot) = self.slot(integration).lock() else {
            return false;
        };
        if matches!(*slot, Slot::NotAttempted) {
            *slot = Slot::Attempting;
            true
        } else {
            false
        }
    }

    /// Marks an attempting integration loaded and installs its event sink.
    ///
    /// Ignored with a warning unless the slot is `Attempting`: terminal
    /// states never change.
    pub fn mark_loaded(&self, integration: Integration, sink: Arc<dyn EventSink>) {
        let Ok(mut slot) = self.slot(integration).lock() else {
            return;
        };
        match *slot {
            Slot::Attempting => *slot = Slot::Loaded(sink),
            _ => warn!(integration = %integration, "mark_loaded outside Attempting ignored"),
        }
    }

    /// Marks an attempting integration failed.
    pub fn mark_failed(&self, integration: Integration) {
        let Ok(mut slot) = self.slot(integration).lock() else {
            return;
        };
        match *slot {
            Slot::Attempting => *slot = Slot::Failed,
            _ => warn!(integration = %integration, "mark_failed outside Attempting ignored"),
        }
    }

    /// Sinks of every loaded integration, in declaration order.
    pub fn loaded_sinks(&self) -> Vec<(Integration, Arc<dyn EventSink>)> {
        Integration::ALL
            .into_iter()
            .filter_map(|integration| {
                let slot = self.slot(integration).lock().ok()?;
                match &*slot {
                    Slot::Loaded(sink) => Some((integration, Arc::clone(sink))),
                    _ => None,
                }
            })
            .collect()
    }

    /// Number of loaded integrations.
    pub fn loaded_count(&self) -> usize {
        self.loaded_sinks().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::EventSink;
    use lectern_core::events::AnalyticsEvent;
    use lectern_core::AppError;

    struct NullSink;

    impl EventSink for NullSink {
        fn send(&self, _event: &AnalyticsEvent) -> Result<(), AppError> {
            Ok(())
        }
    }

    #[test]
    fn test_initial_state() {
        let registry = AnalyticsRegistry::new();
        for integration in Integration::ALL {
            assert_eq!(registry.state(integration), IntegrationState::NotAttempted);
        }
        assert_eq!(registry.loaded_count(), 0);
    }

    #[test]
    fn test_begin_attempt_once() {
        let registry = AnalyticsRegistry::new();
        assert!(registry.begin_attempt(Integration::AnalyticsSuite));
        assert!(!registry.begin_attempt(Integration::AnalyticsSuite));
        assert_eq!(
            registry.state(Integration::AnalyticsSuite),
            IntegrationState::Attempting
        );
        // Other integrations unaffected.
        assert!(registry.begin_attempt(Integration::TagManager));
    }

    #[test]
    fn test_loaded_is_terminal() {
        let registry = AnalyticsRegistry::new();
        registry.begin_attempt(Integration::SocialPixel);
        registry.mark_loaded(Integration::SocialPixel, Arc::new(NullSink));
        assert_eq!(
            registry.state(Integration::SocialPixel),
            IntegrationState::Loaded
        );
        registry.mark_failed(Integration::SocialPixel);
        assert_eq!(
            registry.state(Integration::SocialPixel),
            IntegrationState::Loaded
        );
        assert!(!registry.begin_attempt(Integration::SocialPixel));
    }

    #[test]
    fn test_failed_is_terminal() {
        let registry = AnalyticsRegistry::new();
        registry.begin_attempt(Integration::NetworkInsight);
        registry.mark_failed(Integration::NetworkInsight);
        registry.mark_loaded(Integration::NetworkInsight, Arc::new(NullSink));
        assert_eq!(
            registry.state(Integration::NetworkInsight),
            IntegrationState::Failed
        );
    }

    #[test]
    fn test_mark_loaded_requires_attempt() {
        let registry = AnalyticsRegistry::new();
        registry.mark_loaded(Integration::TagManager, Arc::new(NullSink));
        assert_eq!(
            registry.state(Integration::TagManager),
            IntegrationState::NotAttempted
        );
    }

    #[test]
    fn test_loaded_sinks_only_loaded() {
        let registry = AnalyticsRegistry::new();
        registry.begin_attempt(Integration::AnalyticsSuite);
        registry.mark_loaded(Integration::AnalyticsSuite, Arc::new(NullSink));
        registry.begin_attempt(Integration::TagManager);
        registry.mark_failed(Integration::TagManager);

        let sinks = registry.loaded_sinks();
        assert_eq!(sinks.len(), 1);
        assert_eq!(sinks[0].0, Integration::AnalyticsSuite);
    }
}
