use serde::{Deserialize, Serialize};

/// Load state of the content feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LoadingState {
    #[default]
    Loading,
    Ready,
    Error(String),
}

impl LoadingState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadingState::Ready)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadingState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn can_retry(&self) -> bool {
        matches!(self, LoadingState::Error(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingEvent {
    StartLoading,
    LoadComplete,
    LoadError(String),
    RetryRequested,
}

impl LoadingEvent {
    pub fn apply_to_state(self, current_state: LoadingState) -> LoadingState {
        match (self, current_state) {
            (LoadingEvent::StartLoading, _) => LoadingState::Loading,
            (LoadingEvent::LoadComplete, _) => LoadingState::Ready,
            (LoadingEvent::LoadError(msg), _) => LoadingState::Error(msg),
            (LoadingEvent::RetryRequested, LoadingState::Error(_)) => LoadingState::Loading,
            (LoadingEvent::RetryRequested, state) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_state_properties() {
        let loading = LoadingState::Loading;
        assert!(!loading.is_ready());
        assert_eq!(loading.error_message(), None);

        let ready = LoadingState::Ready;
        assert!(ready.is_ready());
        assert_eq!(ready.error_message(), None);

        let error = LoadingState::Error("missing file".to_string());
        assert!(!error.is_ready());
        assert_eq!(error.error_message(), Some("missing file"));
    }

    #[test]
    fn test_loading_events() {
        let state = LoadingState::Loading;

        let ready = LoadingEvent::LoadComplete.apply_to_state(state.clone());
        assert_eq!(ready, LoadingState::Ready);

        let failed = LoadingEvent::LoadError("bad json".to_string()).apply_to_state(state);
        assert_eq!(failed, LoadingState::Error("bad json".to_string()));

        let reloading = LoadingEvent::StartLoading.apply_to_state(ready);
        assert_eq!(reloading, LoadingState::Loading);
    }

    #[test]
    fn test_retry_only_from_error() {
        let retried =
            LoadingEvent::RetryRequested.apply_to_state(LoadingState::Error("x".to_string()));
        assert_eq!(retried, LoadingState::Loading);

        let untouched = LoadingEvent::RetryRequested.apply_to_state(LoadingState::Ready);
        assert_eq!(untouched, LoadingState::Ready);

        assert!(LoadingState::Error("x".to_string()).can_retry());
        assert!(!LoadingState::Ready.can_retry());
    }
}
