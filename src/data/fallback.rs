use thiserror::Error;

/// Connection state of a remote poller, re-decided on every poll cycle.
/// There is no sticky "degraded" state: one good poll flips straight back to
/// Connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum ConnectionStatus {
    Connected,
    Connecting,
    Disconnected,
}

/// Why a poll cycle substituted demo data. Timeout is kept distinct from
/// transport errors so the distinction survives into logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Http(u16),
    #[error("malformed payload: {0}")]
    Decode(String),
    #[error("offline mode")]
    Offline,
}

impl FetchError {
    pub(crate) fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

/// Outcome of one best-effort fetch: the real payload, or a synthetic
/// stand-in of the same shape tagged with why the substitution happened.
/// Failures are never surfaced as hard errors; the dashboard always has
/// something plausible to show.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Live(T),
    Demo(T, FetchError),
}

impl<T> FetchOutcome<T> {
    pub fn is_demo(&self) -> bool {
        matches!(self, FetchOutcome::Demo(..))
    }

    pub fn data(&self) -> &T {
        match self {
            FetchOutcome::Live(data) | FetchOutcome::Demo(data, _) => data,
        }
    }

    pub fn into_data(self) -> T {
        match self {
            FetchOutcome::Live(data) | FetchOutcome::Demo(data, _) => data,
        }
    }

    pub fn reason(&self) -> Option<&FetchError> {
        match self {
            FetchOutcome::Live(_) => None,
            FetchOutcome::Demo(_, reason) => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let live = FetchOutcome::Live(7);
        assert!(!live.is_demo());
        assert_eq!(live.reason(), None);
        assert_eq!(*live.data(), 7);

        let demo = FetchOutcome::Demo(9, FetchError::Timeout);
        assert!(demo.is_demo());
        assert_eq!(demo.reason(), Some(&FetchError::Timeout));
        assert_eq!(demo.into_data(), 9);
    }
}
