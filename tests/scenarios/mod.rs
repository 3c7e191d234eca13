use undolist::{OperationError, StackError};

use crate::{scenario, scenario_fails};

scenario!(insert, [2, 5, 7], [Insert(1)], [1, 2, 5, 7]);

scenario!(insert_then_undo, [2, 5, 7], [Insert(1), Undo(1)], [2, 5, 7]);

scenario!(
    insert_undo_redo,
    [2, 5, 7],
    [Insert(1), Undo(1), Redo(1)],
    [1, 2, 5, 7]
);

scenario!(
    insert_then_delete,
    [2, 5, 7],
    [Insert(1), Delete(5)],
    [1, 2, 7]
);

scenario!(
    undo_two,
    [2, 5, 7],
    [Insert(1), Delete(5), Undo(2)],
    [2, 5, 7]
);

scenario!(
    redo_only_first_undone,
    [2, 5, 7],
    [Insert(1), Delete(5), Undo(2), Redo(1)],
    [1, 2, 5, 7]
);

scenario!(
    redo_all_undone,
    [2, 5, 7],
    [Insert(1), Delete(5), Undo(2), Redo(2)],
    [1, 2, 7]
);

scenario!(
    undo_one_at_a_time,
    [2, 5, 7],
    [Insert(1), Insert(8), Delete(2), Undo(1), Undo(1), Undo(1)],
    [2, 5, 7]
);

scenario!(
    new_command_after_undo,
    [2, 5, 7],
    [Insert(1), Undo(1), Insert(9)],
    [2, 5, 7, 9]
);

scenario_fails!(
    new_command_discards_redo,
    [2, 5, 7],
    [Insert(1), Undo(1), Insert(9), Redo(1)],
    StackError::EmptyRedoStack,
    [2, 5, 7, 9]
);

scenario!(delete_last, [3], [Delete(3)], []);

scenario_fails!(
    delete_twice,
    [3],
    [Delete(3), Delete(3)],
    OperationError::ElementNotFound("3".to_string()),
    []
);

scenario_fails!(
    undo_nothing,
    [2, 5, 7],
    [Undo(1)],
    StackError::EmptyUndoStack,
    [2, 5, 7]
);

scenario_fails!(
    redo_nothing,
    [2, 5, 7],
    [Insert(1), Redo(1)],
    StackError::EmptyRedoStack,
    [1, 2, 5, 7]
);

scenario_fails!(
    undo_zero,
    [2, 5, 7],
    [Insert(1), Undo(0)],
    StackError::InvalidCount,
    [1, 2, 5, 7]
);

scenario_fails!(
    redo_zero,
    [2, 5, 7],
    [Insert(1), Undo(1), Redo(0)],
    StackError::InvalidCount,
    [2, 5, 7]
);

scenario_fails!(
    undo_more_than_done,
    [2, 5, 7],
    [Insert(1), Insert(3), Undo(3)],
    StackError::EmptyUndoStack,
    [2, 5, 7]
);
