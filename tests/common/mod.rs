use std::error::Error;

use undolist::{sorted_target, CommandStack, SetOperation, Target, UndoListError};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Step {
    Insert(i32),
    Delete(i32),
    Undo(usize),
    Redo(usize),
}

pub(crate) fn run_step<'a>(
    stack: &mut CommandStack<SetOperation<'a, i32>>,
    list: &'a Target<i32>,
    step: Step,
) -> Result<(), UndoListError> {
    match step {
        Step::Insert(e) => stack.execute(SetOperation::insert(list, e))?,
        Step::Delete(e) => stack.execute(SetOperation::delete(list, e))?,
        Step::Undo(n) => stack.undo(n)?,
        Step::Redo(n) => stack.redo(n)?,
    }
    Ok(())
}

#[macro_export]
macro_rules! scenario {
    ($name: ident, $initial: expr, [$($step: expr),* $(,)?], $expected: expr) => {
        #[test]
        fn $name() -> Result<(), Box<dyn std::error::Error>> {
            #[allow(unused_imports)]
            use $crate::common::Step::*;
            $crate::common::run_scenario(&$initial, &[$($step),*], &$expected)
        }
    };
}

#[macro_export]
macro_rules! scenario_fails {
    ($name: ident, $initial: expr, [$($step: expr),* $(,)?], $error: expr, $expected: expr) => {
        #[test]
        fn $name() -> Result<(), Box<dyn std::error::Error>> {
            #[allow(unused_imports)]
            use $crate::common::Step::*;
            $crate::common::run_failing_scenario(&$initial, &[$($step),*], $error.into(), &$expected)
        }
    };
}

pub(crate) fn run_scenario(
    initial: &[i32],
    steps: &[Step],
    expected: &[i32],
) -> Result<(), Box<dyn Error>> {
    let list = sorted_target(initial.iter().copied());
    let mut stack = CommandStack::new();
    for &step in steps {
        run_step(&mut stack, &list, step)?;
    }
    drop(stack);
    let output = list.into_inner();
    if expected != output.as_slice() {
        eprintln!("{expected:?} {output:?}");
    }
    assert_eq!(expected, output.as_slice());
    Ok(())
}

/// Runs `steps`, all of which but the last one should succeed.
pub(crate) fn run_failing_scenario(
    initial: &[i32],
    steps: &[Step],
    error: UndoListError,
    expected: &[i32],
) -> Result<(), Box<dyn Error>> {
    let (&last, init) = steps.split_last().ok_or("A scenario needs at least one step")?;
    let list = sorted_target(initial.iter().copied());
    let mut stack = CommandStack::new();
    for &step in init {
        run_step(&mut stack, &list, step)?;
    }
    assert_eq!(run_step(&mut stack, &list, last), Err(error));
    drop(stack);
    assert_eq!(expected, list.into_inner().as_slice());
    Ok(())
}
