use thiserror::Error;

pub use command::{
    CommandStack, Delete, Insert, Operation, OperationError, SetOperation, StackError,
};
pub use sorted::Target;

pub mod command;
mod sorted;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum UndoListError {
    #[error(transparent)]
    OperationError(#[from] OperationError),
    #[error(transparent)]
    StackError(#[from] StackError),
}

/// Builds a target out of `elements`, in ascending order.
pub fn sorted_target<T: Ord>(elements: impl IntoIterator<Item = T>) -> Target<T> {
    let mut list: Vec<T> = elements.into_iter().collect();
    sorted::restore_order(&mut list);
    log::trace!("Built a target of {} element(s)", list.len());
    Target::new(list)
}
