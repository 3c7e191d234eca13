use std::{num::ParseIntError, str::FromStr};

use derive_more::Display;
use thiserror::Error;
use undolist::{CommandStack, SetOperation, Target, UndoListError};

pub(crate) type Element = i64;

/// One step of a command-line script, e.g. `insert:1` or `undo:2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub(crate) enum Step {
    #[display(fmt = "insert:{}", _0)]
    Insert(Element),
    #[display(fmt = "delete:{}", _0)]
    Delete(Element),
    #[display(fmt = "undo:{}", _0)]
    Undo(usize),
    #[display(fmt = "redo:{}", _0)]
    Redo(usize),
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub(crate) enum StepParseError {
    #[error("Unknown step `{0}`, expected one of insert, delete, undo or redo")]
    UnknownStep(String),
    #[error("Step `{0}` needs an element, e.g. `{0}:1`")]
    MissingElement(String),
    #[error("Invalid number `{1}` in step `{0}`: {2}")]
    InvalidNumber(String, String, ParseIntError),
}

fn parse_number<N: FromStr<Err = ParseIntError>>(
    name: &str,
    arg: &str,
) -> Result<N, StepParseError> {
    arg.trim()
        .parse()
        .map_err(|e| StepParseError::InvalidNumber(name.to_string(), arg.to_string(), e))
}

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg)),
            None => (s.trim(), None),
        };
        let element = || -> Result<Element, StepParseError> {
            let arg = arg.ok_or_else(|| StepParseError::MissingElement(name.to_string()))?;
            parse_number::<Element>(name, arg)
        };
        let count = || arg.map_or(Ok(1), |arg| parse_number::<usize>(name, arg));
        match name {
            "insert" => element().map(Step::Insert),
            "delete" => element().map(Step::Delete),
            "undo" => count().map(Step::Undo),
            "redo" => count().map(Step::Redo),
            _ => Err(StepParseError::UnknownStep(s.to_string())),
        }
    }
}

impl Step {
    pub(crate) fn run<'a>(
        self,
        stack: &mut CommandStack<SetOperation<'a, Element>>,
        list: &'a Target<Element>,
    ) -> Result<(), UndoListError> {
        log::info!("Running `{}`", self);
        match self {
            Step::Insert(element) => stack.execute(SetOperation::insert(list, element))?,
            Step::Delete(element) => stack.execute(SetOperation::delete(list, element))?,
            Step::Undo(n) => stack.undo(n)?,
            Step::Redo(n) => stack.redo(n)?,
        }
        Ok(())
    }
}
