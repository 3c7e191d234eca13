use std::fmt::{self, Debug, Display};

use crate::{
    command::{error::OperationError, Operation},
    sorted::{self, Target},
};

/// Adds `element` to the target on apply, and removes one occurrence of it on reverse.
pub struct Insert<'a, T> {
    target: &'a Target<T>,
    element: T,
}

impl<'a, T> Insert<'a, T> {
    pub fn new(target: &'a Target<T>, element: T) -> Self {
        Self { target, element }
    }

    pub fn element(&self) -> &T {
        &self.element
    }
}

impl<T: Ord + Clone + Debug> Operation for Insert<'_, T> {
    fn apply(&mut self) -> Result<(), OperationError> {
        sorted::insert_one(&mut self.target.borrow_mut(), self.element.clone());
        Ok(())
    }

    fn reverse(&mut self) -> Result<(), OperationError> {
        sorted::remove_one(&mut self.target.borrow_mut(), &self.element)
            .map(drop)
            .ok_or_else(|| OperationError::not_found(&self.element))
    }
}

impl<T: Debug> Debug for Insert<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Insert").field(&self.element).finish()
    }
}

impl<T: Display> Display for Insert<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "insert {}", self.element)
    }
}
