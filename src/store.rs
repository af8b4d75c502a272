use std::collections::HashMap;

use chrono::{Days, NaiveDate, NaiveDateTime};

use crate::model::{
    Assignee, Discussion, Notification, Priority, Project, ProjectColor, ProjectStatus, Task,
    TaskPatch, TaskStatus,
};

/// Which tasks the project view lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Status(TaskStatus),
}

impl TaskFilter {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Status(TaskStatus::Todo),
            Self::Status(TaskStatus::Todo) => Self::Status(TaskStatus::Progress),
            Self::Status(TaskStatus::Progress) => Self::Status(TaskStatus::Done),
            Self::Status(TaskStatus::Done) => Self::All,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Status(status) => status.label(),
        }
    }

    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => task.status == status,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub overdue: usize,
    pub team_members: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub todo: usize,
    pub progress: usize,
    pub done: usize,
}

impl TaskCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.todo + self.progress + self.done
    }
}

/// Completion of one project, derived from its tasks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

fn percent_done(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    u8::try_from(done * 100 / total).unwrap_or(100)
}

/// In-memory home of every project, task, discussion and notification.
#[derive(Clone, Debug, Default)]
pub struct Store {
    projects: Vec<Project>,
    tasks: HashMap<String, Vec<Task>>,
    discussions: HashMap<String, Vec<Discussion>>,
    notifications: Vec<Notification>,
    next_id: u64,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh id. Ids are unique for the lifetime of the store.
    pub fn next_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn add_project(&mut self, project: Project) {
        self.tasks.entry(project.id.clone()).or_default();
        self.projects.push(project);
    }

    #[must_use]
    pub fn tasks_for(&self, project_id: &str) -> &[Task] {
        self.tasks.get(project_id).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn tasks_with_filter(&self, project_id: &str, filter: TaskFilter) -> Vec<&Task> {
        self.tasks_for(project_id)
            .iter()
            .filter(|t| filter.matches(t))
            .collect()
    }

    #[must_use]
    pub fn task(&self, project_id: &str, task_id: &str) -> Option<&Task> {
        self.tasks_for(project_id).iter().find(|t| t.id == task_id)
    }

    pub fn add_task(&mut self, task: Task) {
        let project_id = task.project_id.clone();
        self.tasks.entry(project_id.clone()).or_default().push(task);
        self.sync_counters(&project_id);
    }

    /// Merges `patch` into the matching task and returns the merged value.
    pub fn update_task(
        &mut self,
        project_id: &str,
        task_id: &str,
        patch: &TaskPatch,
    ) -> Option<Task> {
        let task = self
            .tasks
            .get_mut(project_id)?
            .iter_mut()
            .find(|t| t.id == task_id)?;
        patch.apply(task);
        let merged = task.clone();
        self.sync_counters(project_id);
        Some(merged)
    }

    /// Copies the task tallies into the stored project record.
    fn sync_counters(&mut self, project_id: &str) {
        let counts = self.task_counts(project_id);
        let Some(project) = self.projects.iter_mut().find(|p| p.id == project_id) else {
            return;
        };
        project.total_tasks = counts.total();
        project.completed_tasks = counts.done;
        if counts.total() > 0 {
            project.progress = percent_done(counts.done, counts.total());
        }
    }

    /// Task tallies for `project`. A project without tasks reports its recorded values.
    #[must_use]
    pub fn project_progress(&self, project: &Project) -> ProjectProgress {
        let counts = self.task_counts(&project.id);
        if counts.total() == 0 {
            return ProjectProgress {
                completed: project.completed_tasks,
                total: project.total_tasks,
                percent: project.progress,
            };
        }
        ProjectProgress {
            completed: counts.done,
            total: counts.total(),
            percent: percent_done(counts.done, counts.total()),
        }
    }

    /// Case-insensitive substring match on name or description.
    #[must_use]
    pub fn search_projects(&self, query: &str) -> Vec<&Project> {
        let needle = query.trim().to_lowercase();
        self.projects
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    #[must_use]
    pub fn dashboard_metrics(&self) -> DashboardMetrics {
        let mut metrics = DashboardMetrics {
            total: self.projects.len(),
            ..Default::default()
        };
        for project in &self.projects {
            match project.status {
                ProjectStatus::Active => metrics.active += 1,
                ProjectStatus::Completed => metrics.completed += 1,
                ProjectStatus::Overdue => metrics.overdue += 1,
            }
            metrics.team_members += project.team_size;
        }
        metrics
    }

    #[must_use]
    pub fn task_counts(&self, project_id: &str) -> TaskCounts {
        let mut counts = TaskCounts::default();
        for task in self.tasks_for(project_id) {
            match task.status {
                TaskStatus::Todo => counts.todo += 1,
                TaskStatus::Progress => counts.progress += 1,
                TaskStatus::Done => counts.done += 1,
            }
        }
        counts
    }

    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Returns false when no notification has that id.
    pub fn mark_notification_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.is_read = true;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn unread_notification_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    #[must_use]
    pub fn discussions_for(&self, project_id: &str) -> &[Discussion] {
        self.discussions.get(project_id).map_or(&[], Vec::as_slice)
    }

    pub fn post_discussion(&mut self, project_id: &str, discussion: Discussion) {
        self.discussions
            .entry(project_id.to_string())
            .or_default()
            .push(discussion);
    }

    /// A store pre-filled with a few projects so a fresh session has something to browse.
    #[must_use]
    pub fn with_demo_data(today: NaiveDate) -> Self {
        let mut store = Self::new();
        let at = |date: NaiveDate, h: u32, m: u32| -> NaiveDateTime {
            date.and_hms_opt(h, m, 0).unwrap_or_default()
        };
        let plus = |days: u64| today.checked_add_days(Days::new(days)).unwrap_or(today);
        let minus = |days: u64| today.checked_sub_days(Days::new(days)).unwrap_or(today);

        let demo_projects = [
            (
                "Mobile App Redesign",
                "Refresh the mobile experience with the new design system",
                5,
                ProjectStatus::Active,
                plus(30),
            ),
            (
                "API Integration",
                "Connect billing and analytics services to the platform",
                4,
                ProjectStatus::Overdue,
                minus(3),
            ),
            (
                "Documentation Update",
                "Bring the developer guides up to date",
                2,
                ProjectStatus::Completed,
                minus(10),
            ),
        ];

        for (i, (name, description, team, status, due)) in demo_projects.into_iter().enumerate() {
            let id = store.next_id();
            store.add_project(Project {
                id: id.clone(),
                name: name.to_string(),
                description: description.to_string(),
                progress: 0,
                total_tasks: 0,
                completed_tasks: 0,
                team_size: team,
                due_date: Some(due),
                status,
                color: ProjectColor::nth(i),
            });
            store.seed_tasks(&id, today, status == ProjectStatus::Completed);
            store.seed_discussions(&id, today);
        }

        let notifications = [
            (
                "New Task Assigned",
                "You have been assigned a new task in Mobile App Redesign.",
                false,
                at(today, 10, 30),
            ),
            (
                "Task Deadline Approaching",
                "API Integration task is due in 2 days.",
                false,
                at(today, 9, 15),
            ),
            (
                "Project Completed",
                "Documentation Update project has been marked as completed.",
                true,
                at(minus(1), 15, 0),
            ),
        ];
        for (title, description, is_read, timestamp) in notifications {
            let id = store.next_id();
            store.add_notification(Notification {
                id,
                title: title.to_string(),
                description: description.to_string(),
                is_read,
                timestamp,
            });
        }

        store
    }

    fn seed_tasks(&mut self, project_id: &str, today: NaiveDate, all_done: bool) {
        let tasks = [
            (
                "Design user interface mockups",
                "Create high-fidelity mockups for the main user interface",
                TaskStatus::Done,
                Priority::High,
                "Alice Johnson",
                5,
            ),
            (
                "Implement authentication system",
                "Set up user login and registration functionality",
                TaskStatus::Progress,
                Priority::High,
                "Bob Smith",
                7,
            ),
            (
                "Create API documentation",
                "Document all API endpoints and usage examples",
                TaskStatus::Todo,
                Priority::Medium,
                "Carol Davis",
                10,
            ),
            (
                "Set up testing framework",
                "Configure unit and integration testing setup",
                TaskStatus::Todo,
                Priority::Medium,
                "David Wilson",
                13,
            ),
        ];

        for (i, (title, description, status, priority, assignee, due_in)) in
            tasks.into_iter().enumerate()
        {
            let id = self.next_id();
            let created = today
                .checked_sub_days(Days::new(20 - i as u64))
                .unwrap_or(today);
            self.add_task(Task {
                id,
                project_id: project_id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                status: if all_done { TaskStatus::Done } else { status },
                priority,
                assignee: Assignee::named(assignee),
                due_date: today.checked_add_days(Days::new(due_in)).unwrap_or(today),
                created_at: created.and_hms_opt(9, 0, 0).unwrap_or_default(),
            });
        }
    }

    fn seed_discussions(&mut self, project_id: &str, today: NaiveDate) {
        let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);
        let reply = Discussion {
            id: self.next_id(),
            author: "Bob Smith".to_string(),
            message: "Agreed! The color scheme really works well.".to_string(),
            timestamp: yesterday.and_hms_opt(10, 45, 0).unwrap_or_default(),
            replies: Vec::new(),
        };
        let thread = Discussion {
            id: self.next_id(),
            author: "Alice Johnson".to_string(),
            message: "Great progress on the UI mockups! The new design looks much cleaner."
                .to_string(),
            timestamp: yesterday.and_hms_opt(10, 30, 0).unwrap_or_default(),
            replies: vec![reply],
        };
        let standup = Discussion {
            id: self.next_id(),
            author: "Project Manager".to_string(),
            message: "Weekly standup scheduled for tomorrow at 9 AM. Please update your task statuses."
                .to_string(),
            timestamp: yesterday.and_hms_opt(14, 15, 0).unwrap_or_default(),
            replies: Vec::new(),
        };
        self.post_discussion(project_id, thread);
        self.post_discussion(project_id, standup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn search_matches_name_or_description_ignoring_case() {
        let store = Store::with_demo_data(today());

        let hits = store.search_projects("MOBILE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Mobile App Redesign");

        let hits = store.search_projects("developer guides");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Documentation Update");

        assert_eq!(store.search_projects("").len(), 3);
        assert!(store.search_projects("nothing like this").is_empty());
    }

    #[test]
    fn metrics_group_by_status_and_sum_team_sizes() {
        let store = Store::with_demo_data(today());
        let metrics = store.dashboard_metrics();

        assert_eq!(metrics.total, 3);
        assert_eq!(metrics.active, 1);
        assert_eq!(metrics.completed, 1);
        assert_eq!(metrics.overdue, 1);
        assert_eq!(metrics.team_members, 5 + 4 + 2);
    }

    #[test]
    fn metrics_of_empty_store_are_zero() {
        assert_eq!(Store::new().dashboard_metrics(), DashboardMetrics::default());
    }

    #[test]
    fn filter_cycles_through_every_status() {
        let mut filter = TaskFilter::All;
        let mut seen = vec![filter];
        for _ in 0..4 {
            filter = filter.next();
            seen.push(filter);
        }
        assert_eq!(seen.first(), seen.last());
        assert!(seen.contains(&TaskFilter::Status(TaskStatus::Progress)));
    }

    #[test]
    fn tasks_filtered_by_status() {
        let store = Store::with_demo_data(today());
        let project_id = store.projects()[0].id.clone();

        assert_eq!(store.tasks_with_filter(&project_id, TaskFilter::All).len(), 4);
        let todo = store.tasks_with_filter(&project_id, TaskFilter::Status(TaskStatus::Todo));
        assert_eq!(todo.len(), 2);
        assert!(todo.iter().all(|t| t.status == TaskStatus::Todo));

        let counts = store.task_counts(&project_id);
        assert_eq!((counts.todo, counts.progress, counts.done), (2, 1, 1));
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn update_task_merges_and_returns_value() {
        let mut store = Store::with_demo_data(today());
        let project_id = store.projects()[0].id.clone();
        let task_id = store.tasks_for(&project_id)[2].id.clone();

        let patch = TaskPatch {
            status: Some(TaskStatus::Done),
            ..Default::default()
        };
        let merged = store.update_task(&project_id, &task_id, &patch).unwrap();

        assert_eq!(merged.status, TaskStatus::Done);
        assert_eq!(store.task(&project_id, &task_id), Some(&merged));
        assert!(store.update_task(&project_id, "missing", &patch).is_none());
        assert!(store.update_task("missing", &task_id, &patch).is_none());
    }

    #[test]
    fn demo_counters_match_seeded_tasks() {
        let store = Store::with_demo_data(today());
        for project in store.projects() {
            let counts = store.task_counts(&project.id);
            assert_eq!(project.total_tasks, counts.total(), "{}", project.name);
            assert_eq!(project.completed_tasks, counts.done, "{}", project.name);
        }

        let docs = &store.projects()[2];
        assert_eq!(docs.status, ProjectStatus::Completed);
        let progress = store.project_progress(docs);
        assert_eq!((progress.completed, progress.total, progress.percent), (4, 4, 100));
    }

    #[test]
    fn task_changes_move_project_progress() {
        let mut store = Store::with_demo_data(today());
        let project = store.projects()[0].clone();
        let before = store.project_progress(&project);
        assert_eq!((before.completed, before.total, before.percent), (1, 4, 25));

        let mut task = store.tasks_for(&project.id)[0].clone();
        task.id = store.next_id();
        task.status = TaskStatus::Todo;
        store.add_task(task);
        let after_add = store.project_progress(&project);
        assert_eq!((after_add.completed, after_add.total, after_add.percent), (1, 5, 20));

        let task_id = store.tasks_for(&project.id)[2].id.clone();
        let patch = TaskPatch {
            status: Some(TaskStatus::Done),
            ..Default::default()
        };
        store.update_task(&project.id, &task_id, &patch);
        let after_update = store.project_progress(&project);
        assert_eq!(
            (after_update.completed, after_update.total, after_update.percent),
            (2, 5, 40)
        );

        let stored = &store.projects()[0];
        assert_eq!((stored.completed_tasks, stored.total_tasks, stored.progress), (2, 5, 40));
    }

    #[test]
    fn project_without_tasks_reports_recorded_progress() {
        let mut store = Store::new();
        store.add_project(Project {
            id: "p".to_string(),
            name: "Imported".to_string(),
            description: String::new(),
            progress: 60,
            total_tasks: 5,
            completed_tasks: 3,
            team_size: 1,
            due_date: None,
            status: ProjectStatus::Active,
            color: ProjectColor::Blue,
        });
        let progress = store.project_progress(&store.projects()[0]);
        assert_eq!((progress.completed, progress.total, progress.percent), (3, 5, 60));
    }

    #[test]
    fn notifications_mark_read() {
        let mut store = Store::with_demo_data(today());
        assert_eq!(store.unread_notification_count(), 2);

        let id = store.notifications()[0].id.clone();
        assert!(store.mark_notification_read(&id));
        assert_eq!(store.unread_notification_count(), 1);

        // Marking twice is harmless
        assert!(store.mark_notification_read(&id));
        assert_eq!(store.unread_notification_count(), 1);
        assert!(!store.mark_notification_read("nope"));
    }

    #[test]
    fn ids_are_unique() {
        let mut store = Store::new();
        let a = store.next_id();
        let b = store.next_id();
        assert_ne!(a, b);
    }

    #[test]
    fn demo_discussions_have_replies() {
        let store = Store::with_demo_data(today());
        let project_id = &store.projects()[0].id;
        let threads = store.discussions_for(project_id);
        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].replies.len(), 1);
    }
}
