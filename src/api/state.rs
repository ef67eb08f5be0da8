//! Application state for the airline ledger API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::airline::Airline;

/// Shared application state.
///
/// Holds the single airline behind a mutex so that concurrent requests are
/// applied one at a time.
#[derive(Clone)]
pub struct AppState {
    airline: Arc<Mutex<Airline>>,
}

impl AppState {
    /// Creates a new application state owning the given airline.
    pub fn new(airline: Airline) -> Self {
        Self {
            airline: Arc::new(Mutex::new(airline)),
        }
    }

    /// Locks the airline for the duration of a request.
    pub async fn airline(&self) -> MutexGuard<'_, Airline> {
        self.airline.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_clones_share_the_airline() {
        let state = AppState::new(Airline::new("Airline Name").unwrap());
        let other = state.clone();

        state.airline().await.add_client("John Doe").unwrap();
        assert_eq!(other.airline().await.clients().len(), 1);
    }
}
