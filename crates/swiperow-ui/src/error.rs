use crate::PaneId;

/// Configuration errors raised when attaching swipe behavior to a row.
///
/// Both are fatal for the attach call; nothing is installed on the row and
/// the caller has to fix the configuration and attach again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeError {
    /// A required collaborator was not supplied.
    NullArgument { what: &'static str },
    /// The row does not expose one of the five named panes.
    MissingChildPane { pane: PaneId },
}

impl std::fmt::Display for SwipeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwipeError::NullArgument { what } => write!(f, "null {what}"),
            SwipeError::MissingChildPane { pane } => {
                write!(f, "no {} child pane", pane.name())
            }
        }
    }
}

impl std::error::Error for SwipeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(
            SwipeError::NullArgument { what: "listener" }.to_string(),
            "null listener"
        );
        assert_eq!(
            SwipeError::MissingChildPane { pane: PaneId::Right }.to_string(),
            "no right child pane"
        );
    }
}
