#![no_main]
use libfuzzer_sys::fuzz_target;
use undolist::{sorted_target, CommandStack, SetOperation};

fuzz_target!(|input: (Vec<i8>, Vec<(u8, i8)>)| {
    let (initial, steps) = input;
    let list = sorted_target(initial);
    let mut stack = CommandStack::new();
    for (kind, value) in steps {
        let result = match kind % 4 {
            0 => stack.execute(SetOperation::insert(&list, value)).map_err(Into::into),
            1 => stack.execute(SetOperation::delete(&list, value)).map_err(Into::into),
            2 => stack.undo(value.unsigned_abs() as usize % 4),
            _ => stack.redo(value.unsigned_abs() as usize % 4),
        };
        result.ok();
        assert!(list.borrow().windows(2).all(|w| w[0] <= w[1]));
    }
});
