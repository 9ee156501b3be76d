use crate::error::ClientError;
use crate::models::page::Page;

/// What a table or card renders. Error and Empty are distinct states; the
/// interface never substitutes fabricated rows for a failed fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Error(String),
    Empty,
    Populated(T),
}

/// Result payloads that know when they have nothing to show.
pub trait Emptiness {
    fn is_empty(&self) -> bool;
}

impl<T> Emptiness for Page<T> {
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Emptiness for Vec<T> {
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// One fetchable slot of the interface. Each `begin` bumps a generation
/// counter; a response tagged with an older generation is dropped, so a slow
/// reply can never overwrite the result of a newer filter change.
#[derive(Debug)]
pub struct FetchSlot<T> {
    state: FetchState<T>,
    generation: u64,
}

impl<T> FetchSlot<T> {
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Marks the slot loading and returns the tag the eventual response
    /// must present.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = FetchState::Loading;
        self.generation
    }

    /// Applies a response. Returns false when the tag is stale and the
    /// response was discarded.
    pub fn resolve(&mut self, tag: u64, result: Result<T, ClientError>) -> bool
    where
        T: Emptiness,
    {
        if tag != self.generation {
            return false;
        }

        self.state = match result {
            Ok(value) if value.is_empty() => FetchState::Empty,
            Ok(value) => FetchState::Populated(value),
            Err(err) => FetchState::Error(err.to_string()),
        };
        true
    }
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{FetchSlot, FetchState};
    use crate::error::ClientError;

    #[test]
    fn starts_idle() {
        let slot: FetchSlot<Vec<u32>> = FetchSlot::new();
        assert_eq!(*slot.state(), FetchState::Idle);
    }

    #[test]
    fn begin_moves_to_loading() {
        let mut slot: FetchSlot<Vec<u32>> = FetchSlot::new();
        slot.begin();
        assert_eq!(*slot.state(), FetchState::Loading);
    }

    #[test]
    fn populated_and_empty_are_distinct() {
        let mut slot: FetchSlot<Vec<u32>> = FetchSlot::new();

        let tag = slot.begin();
        assert!(slot.resolve(tag, Ok(vec![1, 2])));
        assert_eq!(*slot.state(), FetchState::Populated(vec![1, 2]));

        let tag = slot.begin();
        assert!(slot.resolve(tag, Ok(vec![])));
        assert_eq!(*slot.state(), FetchState::Empty);
    }

    #[test]
    fn error_is_surfaced_not_masked() {
        let mut slot: FetchSlot<Vec<u32>> = FetchSlot::new();
        let tag = slot.begin();
        slot.resolve(
            tag,
            Err(ClientError::Rejected {
                status: 500,
                body: "boom".to_string(),
            }),
        );

        match slot.state() {
            FetchState::Error(msg) => assert!(msg.contains("500")),
            other => panic!("expected error state, got {other:?}"),
        }
    }

    #[test]
    fn stale_response_cannot_overwrite_newer_fetch() {
        let mut slot: FetchSlot<Vec<u32>> = FetchSlot::new();

        let first = slot.begin();
        let second = slot.begin();

        assert!(slot.resolve(second, Ok(vec![2])));
        // The first fetch finishes late; it must be dropped.
        assert!(!slot.resolve(first, Ok(vec![1])));
        assert_eq!(*slot.state(), FetchState::Populated(vec![2]));
    }

    #[test]
    fn stale_error_cannot_overwrite_newer_result() {
        let mut slot: FetchSlot<Vec<u32>> = FetchSlot::new();

        let first = slot.begin();
        let second = slot.begin();

        assert!(slot.resolve(second, Ok(vec![7])));
        assert!(!slot.resolve(first, Err(ClientError::Network("timeout".to_string()))));
        assert_eq!(*slot.state(), FetchState::Populated(vec![7]));
    }
}
