#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerState {
    pub result_text: String,
    pub is_loading: bool,
    pub last_error: Option<String>,
}

impl ControllerState {
    pub fn begin_request(&mut self) {
        self.is_loading = true;
        self.result_text.clear();
        self.last_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle_and_empty() {
        let state = ControllerState::default();

        assert_eq!(state.result_text, "");
        assert!(!state.is_loading);
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn test_begin_request_clears_result_and_error() {
        let mut state = ControllerState {
            result_text: "previous".to_string(),
            is_loading: false,
            last_error: Some("old failure".to_string()),
        };

        state.begin_request();

        assert!(state.is_loading);
        assert_eq!(state.result_text, "");
        assert_eq!(state.last_error, None);
    }
}
