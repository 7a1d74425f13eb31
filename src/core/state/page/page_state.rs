/// Observable result state of a page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    /// User-facing message of the last failed fetch.
    Error(String),
    Ready(T),
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            PageState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PageState::Loading => "loading",
            PageState::Error(_) => "error",
            PageState::Ready(_) => "ready",
        }
    }
}
