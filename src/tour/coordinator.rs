//! TourCoordinator — owns the tour state, persistence, and observer fan-out.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{RwLock, broadcast};
use tracing::{debug, info, warn};

use crate::catalog::{DemoType, StepCatalog, TourStep};
use crate::store::CompletionStore;

use super::state::{EndReason, TourEvent, TourState};

/// Default broadcast channel capacity.
const BROADCAST_CAPACITY: usize = 64;

/// Messages pushed to observers — WebSocket clients, the checklist, tests.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TourUpdate {
    /// Full state snapshot (sent on WS connect and after a lagged re-sync).
    StateSync { status: TourStatus },
    /// The tour started (or replayed) from `step_index`.
    TourStarted { step_index: usize },
    /// The cursor moved past a step.
    StepAdvanced { step_index: usize },
    /// The content persona changed; step order is untouched.
    DemoTypeChanged { demo_type: DemoType },
    /// The tour finished or was skipped; the completion flag is persisted.
    TourEnded { reason: EndReason },
    /// Progress was wiped, including the persisted flag.
    ProgressReset,
}

/// Snapshot handed to the host UI.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TourStatus {
    pub running: bool,
    pub step_index: usize,
    pub step_count: usize,
    pub demo_type: DemoType,
    pub completed: bool,
}

struct Inner {
    state: TourState,
    completed: bool,
}

/// Coordinates the guided tour: the single writer of [`TourState`], the
/// only component that touches the completion flag, and the broadcast
/// source observers derive from.
pub struct TourCoordinator {
    catalog: Arc<StepCatalog>,
    store: Arc<dyn CompletionStore>,
    inner: RwLock<Inner>,
    tx: broadcast::Sender<TourUpdate>,
}

impl TourCoordinator {
    /// Build the coordinator, reading the completion flag once to decide
    /// whether the tour auto-runs. A failed read degrades to "show the
    /// tour" — storage is never allowed to block onboarding.
    pub async fn new(
        catalog: Arc<StepCatalog>,
        store: Arc<dyn CompletionStore>,
        demo_type: DemoType,
    ) -> Arc<Self> {
        let completed = match store.load().await {
            Ok(flag) => flag,
            Err(e) => {
                warn!(error = %e, "Failed to read completion flag, showing tour");
                false
            }
        };

        let (tx, _rx) = broadcast::channel(BROADCAST_CAPACITY);
        Arc::new(Self {
            catalog,
            store,
            inner: RwLock::new(Inner {
                state: TourState::new(demo_type, completed),
                completed,
            }),
            tx,
        })
    }

    /// Subscribe to state-change events.
    pub fn subscribe(&self) -> broadcast::Receiver<TourUpdate> {
        self.tx.subscribe()
    }

    /// Current snapshot for the host UI.
    pub async fn status(&self) -> TourStatus {
        let inner = self.inner.read().await;
        TourStatus {
            running: inner.state.running,
            step_index: inner.state.step_index,
            step_count: self.catalog.len(),
            demo_type: inner.state.demo_type,
            completed: inner.completed,
        }
    }

    /// Resolved steps for the current demo type.
    pub async fn steps(&self) -> Vec<TourStep> {
        let demo = self.inner.read().await.state.demo_type;
        self.catalog.resolve(demo)
    }

    /// Begin (or replay) the tour from `from_index`.
    pub async fn start(&self, from_index: usize) {
        let step_index = {
            let mut inner = self.inner.write().await;
            inner.state.start(from_index, self.catalog.len());
            inner.state.step_index
        };
        info!(step_index, "Tour started");
        let _ = self.tx.send(TourUpdate::TourStarted { step_index });
    }

    /// Single dispatch point for rendering-collaborator callbacks.
    pub async fn handle_event(&self, event: TourEvent) {
        match event {
            TourEvent::Advanced { index } | TourEvent::TargetNotFound { index } => {
                self.on_step_advance(index).await;
            }
            TourEvent::Finished => self.end(EndReason::Finished).await,
            TourEvent::Skipped => self.end(EndReason::Skipped).await,
        }
    }

    async fn on_step_advance(&self, reported_index: usize) {
        let step_index = {
            let mut inner = self.inner.write().await;
            if reported_index != inner.state.step_index {
                debug!(
                    reported_index,
                    step_index = inner.state.step_index,
                    "Renderer index differs from coordinator cursor"
                );
            }
            inner.state.advance(self.catalog.len());
            inner.state.step_index
        };
        debug!(step_index, "Step advanced");
        let _ = self.tx.send(TourUpdate::StepAdvanced { step_index });
    }

    /// Finish or skip the tour. Persists the completion flag best-effort:
    /// a failed write is logged and the in-memory state stays
    /// authoritative for the session. Safe to call repeatedly.
    pub async fn end(&self, reason: EndReason) {
        {
            let mut inner = self.inner.write().await;
            inner.state.end();
            inner.completed = true;
        }

        if let Err(e) = self.store.store(true).await {
            warn!(error = %e, "Failed to persist completion flag");
        }

        info!(%reason, "Tour ended");
        let _ = self.tx.send(TourUpdate::TourEnded { reason });
    }

    /// Swap the content persona. Cursor and running flag are untouched.
    pub async fn select_demo_type(&self, demo_type: DemoType) {
        {
            let mut inner = self.inner.write().await;
            inner.state.select_demo_type(demo_type);
        }
        info!(%demo_type, "Demo type selected");
        let _ = self.tx.send(TourUpdate::DemoTypeChanged { demo_type });
    }

    /// Wipe progress: idle state, cursor at 0, persisted flag cleared.
    pub async fn reset(&self) {
        {
            let mut inner = self.inner.write().await;
            inner.state.end();
            inner.completed = false;
        }

        if let Err(e) = self.store.store(false).await {
            warn!(error = %e, "Failed to clear completion flag");
        }

        info!("Tour progress reset");
        let _ = self.tx.send(TourUpdate::ProgressReset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::store::MemoryStore;
    use async_trait::async_trait;

    /// Store that fails every operation, for the degraded path.
    struct FailingStore;

    #[async_trait]
    impl CompletionStore for FailingStore {
        async fn load(&self) -> Result<bool, StorageError> {
            Err(StorageError::Query("boom".to_string()))
        }
        async fn store(&self, _completed: bool) -> Result<(), StorageError> {
            Err(StorageError::Query("boom".to_string()))
        }
    }

    async fn coordinator_with(
        store: Arc<dyn CompletionStore>,
    ) -> Arc<TourCoordinator> {
        TourCoordinator::new(
            Arc::new(StepCatalog::dashboard()),
            store,
            DemoType::CareerChange,
        )
        .await
    }

    #[tokio::test]
    async fn fresh_store_means_tour_runs() {
        let coordinator = coordinator_with(Arc::new(MemoryStore::new())).await;
        let status = coordinator.status().await;
        assert!(status.running);
        assert_eq!(status.step_index, 0);
        assert!(!status.completed);
    }

    #[tokio::test]
    async fn completed_store_means_tour_stays_idle() {
        let store = Arc::new(MemoryStore::new());
        store.store(true).await.unwrap();

        let coordinator = coordinator_with(store).await;
        let status = coordinator.status().await;
        assert!(!status.running);
        assert!(status.completed);
    }

    #[tokio::test]
    async fn start_sets_cursor() {
        let coordinator = coordinator_with(Arc::new(MemoryStore::new())).await;
        coordinator.start(4).await;

        let status = coordinator.status().await;
        assert!(status.running);
        assert_eq!(status.step_index, 4);
    }

    #[tokio::test]
    async fn advance_and_target_not_found_both_move_the_cursor() {
        let coordinator = coordinator_with(Arc::new(MemoryStore::new())).await;
        coordinator.start(0).await;

        coordinator.handle_event(TourEvent::Advanced { index: 0 }).await;
        assert_eq!(coordinator.status().await.step_index, 1);

        coordinator
            .handle_event(TourEvent::TargetNotFound { index: 1 })
            .await;
        assert_eq!(coordinator.status().await.step_index, 2);
    }

    #[tokio::test]
    async fn end_persists_and_resets_for_both_reasons() {
        for (event, _reason) in [
            (TourEvent::Finished, EndReason::Finished),
            (TourEvent::Skipped, EndReason::Skipped),
        ] {
            let store = Arc::new(MemoryStore::new());
            let coordinator = coordinator_with(store.clone()).await;
            coordinator.start(3).await;
            coordinator.handle_event(event).await;

            let status = coordinator.status().await;
            assert!(!status.running);
            assert_eq!(status.step_index, 0);
            assert!(status.completed);
            assert!(store.load().await.unwrap());
        }
    }

    #[tokio::test]
    async fn end_is_idempotent() {
        let coordinator = coordinator_with(Arc::new(MemoryStore::new())).await;
        coordinator.start(5).await;

        coordinator.end(EndReason::Finished).await;
        let once = coordinator.status().await;
        coordinator.end(EndReason::Finished).await;
        let twice = coordinator.status().await;

        assert_eq!(once.running, twice.running);
        assert_eq!(once.step_index, twice.step_index);
        assert_eq!(once.completed, twice.completed);
    }

    #[tokio::test]
    async fn demo_type_swap_keeps_the_cursor() {
        let coordinator = coordinator_with(Arc::new(MemoryStore::new())).await;
        coordinator.start(3).await;
        coordinator.select_demo_type(DemoType::FirstJob).await;

        let status = coordinator.status().await;
        assert_eq!(status.step_index, 3);
        assert!(status.running);
        assert_eq!(status.demo_type, DemoType::FirstJob);

        let steps = coordinator.steps().await;
        assert!(steps[2].content.contains("first professional profile"));
    }

    #[tokio::test]
    async fn completion_survives_coordinator_rebuild() {
        let store = Arc::new(MemoryStore::new());

        let first = coordinator_with(store.clone()).await;
        first.start(0).await;
        first.end(EndReason::Finished).await;

        let relaunched = coordinator_with(store).await;
        assert!(!relaunched.status().await.running);
    }

    #[tokio::test]
    async fn failing_store_degrades_to_running() {
        let coordinator = coordinator_with(Arc::new(FailingStore)).await;
        assert!(coordinator.status().await.running);

        // Write failure is non-fatal; in-memory state still ends the tour.
        coordinator.end(EndReason::Skipped).await;
        let status = coordinator.status().await;
        assert!(!status.running);
        assert!(status.completed);
    }

    #[tokio::test]
    async fn reset_clears_progress_and_flag() {
        let store = Arc::new(MemoryStore::new());
        let coordinator = coordinator_with(store.clone()).await;
        coordinator.start(0).await;
        coordinator.end(EndReason::Finished).await;

        coordinator.reset().await;
        let status = coordinator.status().await;
        assert!(!status.running);
        assert!(!status.completed);
        assert!(!store.load().await.unwrap());
    }

    #[tokio::test]
    async fn observers_receive_updates() {
        let coordinator = coordinator_with(Arc::new(MemoryStore::new())).await;
        let mut rx = coordinator.subscribe();

        coordinator.start(0).await;
        match rx.recv().await.unwrap() {
            TourUpdate::TourStarted { step_index } => assert_eq!(step_index, 0),
            other => panic!("expected TourStarted, got {other:?}"),
        }

        coordinator.handle_event(TourEvent::Finished).await;
        match rx.recv().await.unwrap() {
            TourUpdate::TourEnded { reason } => assert_eq!(reason, EndReason::Finished),
            other => panic!("expected TourEnded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn full_walk_scenario() {
        let store = Arc::new(MemoryStore::new());
        let coordinator = coordinator_with(store.clone()).await;

        coordinator.start(0).await;
        for index in 0..8 {
            coordinator.handle_event(TourEvent::Advanced { index }).await;
        }
        assert_eq!(coordinator.status().await.step_index, 8);

        coordinator.handle_event(TourEvent::Finished).await;
        let status = coordinator.status().await;
        assert_eq!(status.step_index, 0);
        assert!(!status.running);
        assert!(store.load().await.unwrap());
    }
}
