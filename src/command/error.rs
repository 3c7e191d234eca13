use thiserror::Error;

pub type Result<T, E = StackError> = std::result::Result<T, E>;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum OperationError {
    #[error("Element `{0}` was not found in the collection")]
    ElementNotFound(String),
}

impl OperationError {
    pub(crate) fn not_found<T: std::fmt::Debug>(element: &T) -> Self {
        Self::ElementNotFound(format!("{:?}", element))
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum StackError {
    #[error("Nothing to undo")]
    EmptyUndoStack,
    #[error("Nothing to redo")]
    EmptyRedoStack,
    #[error("The number of commands to undo or redo should be positive")]
    InvalidCount,
    #[error(transparent)]
    Operation(#[from] OperationError),
}
