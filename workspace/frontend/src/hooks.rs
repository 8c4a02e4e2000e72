/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Number of skeleton placeholders a list view shows for this state.
/// Placeholders only appear while a fetch is pending; settled states render
/// real cards (success) or the error panel instead.
pub fn placeholder_count<T>(state: &FetchState<T>, loading_placeholders: usize) -> usize {
    match state {
        FetchState::Success(_) | FetchState::Error(_) => 0,
        FetchState::NotStarted | FetchState::Loading => loading_placeholders,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_are_mutually_exclusive() {
        let loading: FetchState<Vec<i32>> = FetchState::Loading;
        assert!(loading.is_loading());
        assert!(!loading.is_success());
        assert!(!loading.is_error());
        assert!(loading.data().is_none());

        let success = FetchState::Success(vec![1, 2, 3]);
        assert!(!success.is_loading());
        assert!(success.is_success());
        assert_eq!(success.data().map(Vec::len), Some(3));

        let error: FetchState<Vec<i32>> = FetchState::Error("boom".to_string());
        assert!(error.is_error());
        assert_eq!(error.error().map(String::as_str), Some("boom"));
    }

    #[test]
    fn test_default_is_not_started() {
        let state: FetchState<()> = FetchState::default();
        assert!(matches!(state, FetchState::NotStarted));
    }

    #[test]
    fn test_successful_fetch_renders_cards_without_skeletons() {
        let state = FetchState::Success(vec!["a", "b", "c"]);
        assert_eq!(state.data().map(Vec::len), Some(3));
        assert_eq!(placeholder_count(&state, 6), 0);
    }

    #[test]
    fn test_pending_fetch_renders_fixed_placeholder_block() {
        let state: FetchState<Vec<&str>> = FetchState::Loading;
        assert_eq!(placeholder_count(&state, 6), 6);

        let state: FetchState<Vec<&str>> = FetchState::NotStarted;
        assert_eq!(placeholder_count(&state, 6), 6);
    }

    #[test]
    fn test_failed_fetch_renders_no_placeholders() {
        let state: FetchState<Vec<&str>> = FetchState::Error("boom".to_string());
        assert_eq!(placeholder_count(&state, 6), 0);
    }
}
