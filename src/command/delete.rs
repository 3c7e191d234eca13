use std::fmt::{self, Debug, Display};

use crate::{
    command::{error::OperationError, Operation},
    sorted::{self, Target},
};

/// Removes one occurrence of `element` from the target on apply, and adds it back on reverse.
pub struct Delete<'a, T> {
    target: &'a Target<T>,
    element: T,
}

impl<'a, T> Delete<'a, T> {
    pub fn new(target: &'a Target<T>, element: T) -> Self {
        Self { target, element }
    }

    pub fn element(&self) -> &T {
        &self.element
    }
}

impl<T: Ord + Clone + Debug> Operation for Delete<'_, T> {
    fn apply(&mut self) -> Result<(), OperationError> {
        sorted::remove_one(&mut self.target.borrow_mut(), &self.element)
            .map(drop)
            .ok_or_else(|| OperationError::not_found(&self.element))
    }

    fn reverse(&mut self) -> Result<(), OperationError> {
        sorted::insert_one(&mut self.target.borrow_mut(), self.element.clone());
        Ok(())
    }
}

impl<T: Debug> Debug for Delete<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Delete").field(&self.element).finish()
    }
}

impl<T: Display> Display for Delete<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "delete {}", self.element)
    }
}
