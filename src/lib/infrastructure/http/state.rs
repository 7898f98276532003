//! Application state module

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};

use crate::domain::quotes::service::QuoteIntake;

/// Global application state
#[derive(Clone)]
pub struct AppState<Q: QuoteIntake> {
    /// The time the server started
    pub start_time: DateTime<Utc>,

    /// Quote intake service
    pub quotes: Arc<Q>,
}

impl<Q> fmt::Debug for AppState<Q>
where
    Q: QuoteIntake,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("start_time", &self.start_time)
            .field("quotes", &"QuoteIntake")
            .finish()
    }
}

#[cfg(test)]
use crate::domain::quotes::service::MockQuoteIntake;

#[cfg(test)]
pub fn test_state(quotes: Option<MockQuoteIntake>) -> AppState<MockQuoteIntake> {
    let quotes = quotes
        .map(Arc::new)
        .unwrap_or_else(|| Arc::new(MockQuoteIntake::new()));

    AppState {
        start_time: Utc::now(),
        quotes,
    }
}
