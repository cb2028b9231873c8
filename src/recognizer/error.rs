#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecognizerError {
    #[error("route path {path:?} is already registered")]
    DuplicatePath { path: Box<str> },

    #[error("cannot add ambiguous route: the pattern {path:?} clashes with {existing:?}")]
    AmbiguousRoute { path: Box<str>, existing: Box<str> },
}

impl RecognizerError {
    pub(super) fn duplicate(path: &str) -> Self {
        Self::DuplicatePath { path: path.into() }
    }

    pub(super) fn ambiguous(path: &str, existing: &str) -> Self {
        Self::AmbiguousRoute {
            path: path.into(),
            existing: existing.into(),
        }
    }
}
