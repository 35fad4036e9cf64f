//! Behavioural tests for creating, moving and listing tasks.

use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use rstest::{fixture, rstest};
use task_board::{
    flatten, BoardError, BoardStore, DefaultClock, NewTask, TaskDraft, TaskId, TaskStatus,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn new_task(summary: &str) -> NewTask {
    NewTask {
        summary: summary.to_string(),
        assignee: "Sam".to_string(),
        ..NewTask::default()
    }
}

fn ids(store: &BoardStore, status: TaskStatus) -> Vec<TaskId> {
    store
        .column(status)
        .tasks()
        .iter()
        .map(|t| t.id().clone())
        .collect()
}

#[fixture]
fn empty_board() -> BoardStore {
    init_logging();
    BoardStore::new(DefaultClock)
}

/// `todo=[A, B]`, the other columns empty.
#[fixture]
fn board_ab(mut empty_board: BoardStore) -> (BoardStore, TaskId, TaskId) {
    let a = empty_board.create_task(new_task("A"));
    let b = empty_board.create_task(new_task("B"));
    (empty_board, a, b)
}

#[rstest]
fn creating_on_empty_board(mut empty_board: BoardStore) {
    let before = Utc::now();
    let draft = TaskDraft {
        summary: "Write spec".to_string(),
        assignee: "Sam".to_string(),
        ..TaskDraft::default()
    };
    let id = empty_board.create_task(draft.validate().expect("draft is valid"));
    let after = Utc::now();

    let todo = empty_board.column(TaskStatus::Todo);
    assert_eq!(todo.len(), 1);
    let task = &todo.tasks()[0];
    assert_eq!(task.id(), &id);
    assert!(!id.as_str().is_empty());
    assert_eq!(task.status(), TaskStatus::Todo);
    assert_eq!(task.summary(), "Write spec");
    assert_eq!(task.description(), "");
    assert_eq!(task.start_date(), None);
    assert_eq!(task.ship_date(), None);
    assert!(before <= task.created_at() && task.created_at() <= after);
    assert!(empty_board.column(TaskStatus::InProgress).is_empty());
    assert!(empty_board.column(TaskStatus::Done).is_empty());
}

#[rstest]
#[case(None)]
#[case(Some(TaskStatus::Todo))]
#[case(Some(TaskStatus::InProgress))]
#[case(Some(TaskStatus::Done))]
fn requested_status_is_overridden(mut empty_board: BoardStore, #[case] status: Option<TaskStatus>) {
    let id = empty_board.create_task(NewTask {
        status,
        ..new_task("A")
    });
    assert_eq!(ids(&empty_board, TaskStatus::Todo), vec![id]);
    assert_eq!(empty_board.task_count(), 1);
}

#[rstest]
fn every_creation_lands_in_todo_with_a_fresh_id(mut empty_board: BoardStore) {
    let created: Vec<TaskId> = (0..50)
        .map(|i| empty_board.create_task(new_task(&format!("task {i}"))))
        .collect();

    assert_eq!(empty_board.task_count(), 50);
    assert_eq!(ids(&empty_board, TaskStatus::Todo), created);
    assert!(empty_board
        .column(TaskStatus::Todo)
        .tasks()
        .iter()
        .all(|t| t.status() == TaskStatus::Todo));

    let unique: HashSet<_> = created.iter().collect();
    assert_eq!(unique.len(), created.len());
}

#[rstest]
fn move_to_in_progress(board_ab: (BoardStore, TaskId, TaskId)) {
    let (mut board, a, b) = board_ab;

    board.move_task(a.as_str(), "inprogress").unwrap();

    assert_eq!(ids(&board, TaskStatus::Todo), vec![b]);
    assert_eq!(ids(&board, TaskStatus::InProgress), vec![a.clone()]);
    assert!(board.column(TaskStatus::Done).is_empty());
    assert_eq!(board.find_task(a.as_str()).unwrap().status(), TaskStatus::InProgress);
}

#[rstest]
#[case(TaskStatus::Todo)]
#[case(TaskStatus::InProgress)]
#[case(TaskStatus::Done)]
fn moved_task_lives_in_exactly_one_column(
    board_ab: (BoardStore, TaskId, TaskId),
    #[case] target: TaskStatus,
) {
    let (mut board, a, _) = board_ab;
    let created_at = board.find_task(a.as_str()).unwrap().created_at();

    board.move_task(a.as_str(), target.as_str()).unwrap();

    for column in board.list_columns() {
        let hits = column.tasks().iter().filter(|t| t.id() == &a).count();
        assert_eq!(hits, usize::from(column.status() == target));
    }
    let task = board.find_task(a.as_str()).unwrap();
    assert_eq!(task.status(), target);
    assert_eq!(task.created_at(), created_at);
    assert_eq!(board.task_count(), 2);
}

#[rstest]
fn moving_within_a_column_appends(board_ab: (BoardStore, TaskId, TaskId)) {
    let (mut board, a, b) = board_ab;

    board.move_task(a.as_str(), "todo").unwrap();

    assert_eq!(ids(&board, TaskStatus::Todo), vec![b, a]);
    assert!(board.column(TaskStatus::InProgress).is_empty());
    assert!(board.column(TaskStatus::Done).is_empty());
}

#[rstest]
fn done_tasks_can_move_back(board_ab: (BoardStore, TaskId, TaskId)) {
    let (mut board, a, b) = board_ab;

    board.move_task(a.as_str(), "done").unwrap();
    board.move_task(a.as_str(), "todo").unwrap();

    assert_eq!(ids(&board, TaskStatus::Todo), vec![b, a.clone()]);
    assert_eq!(board.find_task(a.as_str()).unwrap().status(), TaskStatus::Todo);
}

#[rstest]
fn unknown_task_leaves_board_unchanged(board_ab: (BoardStore, TaskId, TaskId)) {
    let (mut board, _, _) = board_ab;
    let before = board.list_columns().to_vec();

    let err = board.move_task("nonexistent-id", "done").unwrap_err();

    assert_eq!(err, BoardError::TaskNotFound("nonexistent-id".to_string()));
    assert_eq!(board.list_columns(), before.as_slice());
}

#[rstest]
fn unknown_column_keeps_the_task(board_ab: (BoardStore, TaskId, TaskId)) {
    let (mut board, a, b) = board_ab;

    let err = board.move_task(a.as_str(), "archived").unwrap_err();

    assert_eq!(err, BoardError::ColumnNotFound("archived".to_string()));
    assert_eq!(ids(&board, TaskStatus::Todo), vec![a, b]);
    assert_eq!(board.task_count(), 2);
}

#[rstest]
fn list_view_flattens_in_column_order(mut empty_board: BoardStore) {
    let c = empty_board.create_task(new_task("C"));
    let b = empty_board.create_task(new_task("B"));
    let a = empty_board.create_task(new_task("A"));
    empty_board.move_task(c.as_str(), "done").unwrap();
    empty_board.move_task(b.as_str(), "inprogress").unwrap();

    let rows = flatten(empty_board.list_columns());
    let order: Vec<_> = rows.iter().map(|r| r.id.clone()).collect();
    assert_eq!(order, vec![a, b, c]);
    let statuses: Vec<_> = rows.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done]
    );
}

#[rstest]
fn demo_board_matches_seed() {
    init_logging();
    let board = BoardStore::with_demo_data(DefaultClock);

    assert_eq!(ids(&board, TaskStatus::Todo), vec![TaskId::from("1"), TaskId::from("2")]);
    assert_eq!(ids(&board, TaskStatus::InProgress), vec![TaskId::from("3")]);
    assert_eq!(ids(&board, TaskStatus::Done), vec![TaskId::from("4")]);

    let design = board.find_task("1").unwrap();
    assert_eq!(design.assignee(), "John Doe");
    assert_eq!(design.start_date(), None);
    assert_eq!(design.ship_date(), NaiveDate::from_ymd_opt(2024, 6, 20));
    assert_eq!(
        design.created_at().date_naive(),
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    );
}

#[rstest]
fn new_ids_never_collide_with_seeded_ones() {
    let mut board = BoardStore::with_demo_data(DefaultClock);
    let id = board.create_task(new_task("E"));
    assert!(!["1", "2", "3", "4"].contains(&id.as_str()));
    assert_eq!(board.task_count(), 5);
}

#[rstest]
fn list_rows_label_missing_ship_dates(mut empty_board: BoardStore) {
    empty_board.create_task(new_task("undated"));
    empty_board.create_task(NewTask {
        ship_date: NaiveDate::from_ymd_opt(2024, 6, 20),
        ..new_task("dated")
    });

    let labels: Vec<_> = flatten(empty_board.list_columns())
        .iter()
        .map(|row| row.ship_date_label())
        .collect();
    assert_eq!(labels, vec!["N/A".to_string(), "2024-06-20".to_string()]);
}
