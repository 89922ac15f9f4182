//! Storage seam for accepted barcode values
//!
//! The persistence mechanism belongs to the host application; it plugs in
//! through [`BarcodeStore`]. [`MemoryStore`] is the in-process reference
//! implementation and broadcasts every change to its subscribers.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, MutexGuard};
use std::time::SystemTime;

use tracing::debug;

use crate::encoder::{ChecksumPolicy, validate_with_policy};
use crate::error::Result;
use crate::models::BarcodeValue;

/// Change notification sent to store observers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A value was saved (replacing any previous one)
    Updated(BarcodeValue),
    /// The stored value was removed
    Deleted,
}

/// Single-slot storage for the user's barcode
pub trait BarcodeStore {
    /// Persist `value`, replacing any previous one
    fn save(&self, value: BarcodeValue);
    /// Currently stored value
    fn get(&self) -> Option<BarcodeValue>;
    /// Remove the stored value; returns whether one was present
    fn delete(&self) -> bool;
    /// When the current value was saved
    fn last_saved_at(&self) -> Option<SystemTime>;

    /// True if a value is stored
    fn has(&self) -> bool {
        self.get().is_some()
    }
}

#[derive(Default)]
struct Slot {
    value: Option<BarcodeValue>,
    saved_at: Option<SystemTime>,
    subscribers: Vec<Sender<StoreEvent>>,
}

/// Thread-safe in-memory store with channel notifications
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Slot>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer; it receives every change made after this call
    pub fn subscribe(&self) -> Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.lock().subscribers.push(tx);
        rx
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        // every update leaves the slot consistent, so poisoning is ignored
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn broadcast(slot: &mut Slot, event: StoreEvent) {
        slot.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl BarcodeStore for MemoryStore {
    fn save(&self, value: BarcodeValue) {
        let mut slot = self.lock();
        slot.value = Some(value);
        slot.saved_at = Some(SystemTime::now());
        Self::broadcast(&mut slot, StoreEvent::Updated(value));
        debug!(value = %value, subscribers = slot.subscribers.len(), "stored barcode");
    }

    fn get(&self) -> Option<BarcodeValue> {
        self.lock().value
    }

    fn delete(&self) -> bool {
        let mut slot = self.lock();
        let had_value = slot.value.take().is_some();
        slot.saved_at = None;
        Self::broadcast(&mut slot, StoreEvent::Deleted);
        debug!(had_value, "deleted barcode");
        had_value
    }

    fn last_saved_at(&self) -> Option<SystemTime> {
        self.lock().saved_at
    }
}

/// Validate a capture-surface candidate and persist it on success
///
/// On failure the store is left untouched and the error is returned so the
/// capture surface can prompt for another scan.
pub fn accept_candidate<S: BarcodeStore + ?Sized>(
    store: &S,
    candidate: &str,
    policy: ChecksumPolicy,
) -> Result<BarcodeValue> {
    let value = validate_with_policy(candidate, policy)?;
    store.save(value);
    Ok(value)
}
