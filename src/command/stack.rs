use crate::command::{
    error::{OperationError, Result, StackError},
    Operation,
};

/// Executes operations and keeps track of them so that they can be undone and redone.
///
/// `undo_stack` holds the operations currently in effect, most recent on top, and `redo_stack`
/// holds the ones rolled back by `undo`, the next to be redone on top.
#[derive(Debug)]
pub struct CommandStack<O> {
    undo_stack: Vec<O>,
    redo_stack: Vec<O>,
}

impl<O> Default for CommandStack<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> CommandStack<O> {
    pub fn new() -> Self {
        Self {
            undo_stack: vec![],
            redo_stack: vec![],
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// The operation the next `undo` would reverse.
    pub fn peek_undo(&self) -> Option<&O> {
        self.undo_stack.last()
    }

    /// The operation the next `redo` would apply.
    pub fn peek_redo(&self) -> Option<&O> {
        self.redo_stack.last()
    }

    /// Forgets both histories. The target collection is left as it is.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl<O: Operation> CommandStack<O> {
    /// Applies `operation` and records it as the most recent one.
    ///
    /// Whatever was undone before can't be redone anymore after this. If the operation fails,
    /// its error is returned as is and neither stack is touched.
    pub fn execute(&mut self, mut operation: O) -> Result<(), OperationError> {
        operation.apply()?;
        log::debug!("Executed `{:?}`", operation);
        self.undo_stack.push(operation);
        if !self.redo_stack.is_empty() {
            log::trace!("Discarding {} undone command(s)", self.redo_stack.len());
            self.redo_stack.clear();
        }
        Ok(())
    }

    /// Reverses the last `n` operations, most recent first.
    ///
    /// Stops at the first failure. Operations reversed before that stay reversed, and an
    /// operation whose reverse failed stays on the undo stack.
    pub fn undo(&mut self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(StackError::InvalidCount);
        }
        for _ in 0..n {
            let mut operation = self.undo_stack.pop().ok_or(StackError::EmptyUndoStack)?;
            if let Err(e) = operation.reverse() {
                log::warn!("Failed to undo `{:?}`: {}", operation, e);
                self.undo_stack.push(operation);
                return Err(e.into());
            }
            log::debug!("Undid `{:?}`", operation);
            self.redo_stack.push(operation);
        }
        log::trace!(
            "undo: {}, redo: {}",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        Ok(())
    }

    /// Re-applies the last `n` undone operations, the most recently undone first.
    ///
    /// Failures are handled the same way as in [`CommandStack::undo`].
    pub fn redo(&mut self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(StackError::InvalidCount);
        }
        for _ in 0..n {
            let mut operation = self.redo_stack.pop().ok_or(StackError::EmptyRedoStack)?;
            if let Err(e) = operation.apply() {
                log::warn!("Failed to redo `{:?}`: {}", operation, e);
                self.redo_stack.push(operation);
                return Err(e.into());
            }
            log::debug!("Redid `{:?}`", operation);
            self.undo_stack.push(operation);
        }
        log::trace!(
            "undo: {}, redo: {}",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        Ok(())
    }

    pub fn undo_one(&mut self) -> Result<()> {
        self.undo(1)
    }

    pub fn redo_one(&mut self) -> Result<()> {
        self.redo(1)
    }
}
