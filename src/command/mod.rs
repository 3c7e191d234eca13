use std::fmt::{self, Debug, Display};

use derive_more::From;

pub use self::{
    delete::Delete,
    error::{OperationError, StackError},
    insert::Insert,
    stack::CommandStack,
};
use crate::sorted::Target;

mod delete;
pub mod error;
mod insert;
mod stack;

/// A single reversible mutation of a target collection.
///
/// `reverse` must be the exact inverse of `apply`, and both leave the target in ascending
/// order when they succeed. A failing call leaves the target untouched.
///
/// The `Debug` impl is used to describe the operation in logs, e.g. `Insert(1)`.
pub trait Operation: Debug {
    fn apply(&mut self) -> Result<(), OperationError>;
    fn reverse(&mut self) -> Result<(), OperationError>;
}

impl<O: Operation + ?Sized> Operation for Box<O> {
    fn apply(&mut self) -> Result<(), OperationError> {
        (**self).apply()
    }

    fn reverse(&mut self) -> Result<(), OperationError> {
        (**self).reverse()
    }
}

/// Either of the two operations on a sorted collection.
#[derive(From)]
pub enum SetOperation<'a, T> {
    Insert(Insert<'a, T>),
    Delete(Delete<'a, T>),
}

impl<'a, T> SetOperation<'a, T> {
    pub fn insert(target: &'a Target<T>, element: T) -> Self {
        Self::Insert(Insert::new(target, element))
    }

    pub fn delete(target: &'a Target<T>, element: T) -> Self {
        Self::Delete(Delete::new(target, element))
    }

    pub fn element(&self) -> &T {
        match self {
            Self::Insert(op) => op.element(),
            Self::Delete(op) => op.element(),
        }
    }
}

impl<T: Ord + Clone + Debug> Operation for SetOperation<'_, T> {
    fn apply(&mut self) -> Result<(), OperationError> {
        match self {
            Self::Insert(op) => op.apply(),
            Self::Delete(op) => op.apply(),
        }
    }

    fn reverse(&mut self) -> Result<(), OperationError> {
        match self {
            Self::Insert(op) => op.reverse(),
            Self::Delete(op) => op.reverse(),
        }
    }
}

impl<T: Debug> Debug for SetOperation<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert(op) => Debug::fmt(op, f),
            Self::Delete(op) => Debug::fmt(op, f),
        }
    }
}

impl<T: Display> Display for SetOperation<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert(op) => Display::fmt(op, f),
            Self::Delete(op) => Display::fmt(op, f),
        }
    }
}
