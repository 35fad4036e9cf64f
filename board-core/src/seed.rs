use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{NewTask, Task, TaskId, TaskStatus};

struct DemoTask {
    id: &'static str,
    status: TaskStatus,
    summary: &'static str,
    description: &'static str,
    assignee: &'static str,
    created: (i32, u32, u32),
    start: Option<(i32, u32, u32)>,
    ship: Option<(i32, u32, u32)>,
}

const DEMO_TASKS: [DemoTask; 4] = [
    DemoTask {
        id: "1",
        status: TaskStatus::Todo,
        summary: "Design user authentication flow",
        description: "Create wireframes and mockups for the login and registration process",
        assignee: "John Doe",
        created: (2024, 6, 10),
        start: None,
        ship: Some((2024, 6, 20)),
    },
    DemoTask {
        id: "2",
        status: TaskStatus::Todo,
        summary: "Implement user dashboard",
        description: "Build the main dashboard with user statistics and recent activity",
        assignee: "Jane Smith",
        created: (2024, 6, 12),
        start: Some((2024, 6, 15)),
        ship: Some((2024, 6, 25)),
    },
    DemoTask {
        id: "3",
        status: TaskStatus::InProgress,
        summary: "Setup database schema",
        description: "Create and configure the database tables for user management",
        assignee: "Bob Johnson",
        created: (2024, 6, 8),
        start: Some((2024, 6, 10)),
        ship: Some((2024, 6, 18)),
    },
    DemoTask {
        id: "4",
        status: TaskStatus::Done,
        summary: "Project setup and configuration",
        description: "Initialize the project structure and configure development environment",
        assignee: "Alice Wilson",
        created: (2024, 6, 5),
        start: Some((2024, 6, 5)),
        ship: Some((2024, 6, 7)),
    },
];

fn date((y, m, d): (i32, u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn midnight_utc(ymd: (i32, u32, u32)) -> DateTime<Utc> {
    date(ymd)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

/// Demo tasks paired with the column each one starts in.
pub(crate) fn demo_tasks() -> Vec<(TaskStatus, Task)> {
    DEMO_TASKS
        .iter()
        .map(|demo| {
            let new_task = NewTask {
                summary: demo.summary.to_string(),
                description: demo.description.to_string(),
                assignee: demo.assignee.to_string(),
                start_date: demo.start.and_then(date),
                ship_date: demo.ship.and_then(date),
                status: None,
            };
            let task = Task::from_new(TaskId::from(demo.id), new_task, midnight_utc(demo.created));
            (demo.status, task)
        })
        .collect()
}
