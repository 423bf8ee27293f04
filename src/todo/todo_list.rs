use crate::todo::sorting::{self, SortMode};
use crate::todo::task::{Priority, Task};
use chrono::{Local, NaiveDateTime, Timelike};
use std::collections::HashSet;

/// Timestamp layout of generated task IDs (microsecond resolution)
const TASK_ID_FORMAT: &str = "%Y%m%d%H%M%S%6f";

/// Base task ID for a task created at `now`
pub(crate) fn task_id_base(now: NaiveDateTime) -> String {
    now.format(TASK_ID_FORMAT).to_string()
}

/// `base`, or `base-N` with the smallest N not present in `taken`
pub(crate) fn unique_id(taken: &HashSet<String>, base: String) -> String {
    if !taken.contains(&base) {
        return base;
    }
    let mut suffix = 1u32;
    loop {
        let candidate = format!("{}-{}", base, suffix);
        if !taken.contains(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

/// In-memory task collection
///
/// Storage order carries no meaning; presentation order always comes from
/// [`TodoList::sorted`]. This type performs no I/O, see `TodoStore` for the
/// persisted variant.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    /// All tasks, in insertion order
    pub(crate) tasks: Vec<Task>,

    /// ID index for O(1) uniqueness checks
    ///
    /// Kept in sync with `tasks` by every mutating operation and rebuilt
    /// during deserialization. Never serialized.
    pub(crate) id_index: HashSet<String>,
}

impl PartialEq for TodoList {
    fn eq(&self, other: &Self) -> bool {
        self.tasks == other.tasks
    }
}

impl TodoList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks in storage order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.id_index.contains(id)
    }

    /// Find a task by its ID
    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Generate a task ID for a task created at `now`
    ///
    /// The ID is the creation time down to the microsecond. If that ID is
    /// already taken a `-N` suffix is appended, so generated IDs never collide
    /// with an existing task.
    pub fn generate_task_id(&self, now: NaiveDateTime) -> String {
        unique_id(&self.id_index, task_id_base(now))
    }

    /// Add a new incomplete task
    ///
    /// # Arguments
    /// * `text` - Task text; surrounding whitespace is trimmed
    /// * `priority` - Task priority
    ///
    /// # Returns
    /// The new task's ID, or `None` when `text` is empty or whitespace-only
    pub fn add(&mut self, text: &str, priority: Priority) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        // One clock read, so the ID and created_at describe the same instant
        let now = Local::now().naive_local();
        let id = self.generate_task_id(now);
        let task = Task {
            id: id.clone(),
            text: text.to_string(),
            completed: false,
            priority,
            created_at: now.with_nanosecond(0).unwrap_or(now),
        };
        self.insert(task);
        Some(id)
    }

    /// Insert a fully-formed task
    ///
    /// # Returns
    /// `false` (and leaves the list unchanged) if a task with the same ID exists
    pub fn insert(&mut self, task: Task) -> bool {
        if !self.id_index.insert(task.id.clone()) {
            return false;
        }
        self.tasks.push(task);
        true
    }

    /// Mark a task as completed or incomplete
    ///
    /// # Returns
    /// `true` if a task with `id` was found
    pub fn set_completed(&mut self, id: &str, completed: bool) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.completed = completed;
                true
            }
            None => false,
        }
    }

    /// Change a task's priority
    ///
    /// # Returns
    /// `true` if a task with `id` was found
    pub fn set_priority(&mut self, id: &str, priority: Priority) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.priority = priority;
                true
            }
            None => false,
        }
    }

    /// Remove a task and return it
    pub fn remove(&mut self, id: &str) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        let task = self.tasks.remove(pos);
        self.id_index.remove(id);
        Some(task)
    }

    /// Remove every completed task
    ///
    /// # Returns
    /// Number of tasks removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        self.id_index = self.tasks.iter().map(|t| t.id.clone()).collect();
        before - self.tasks.len()
    }

    /// Tasks in presentation order for `mode`
    pub fn sorted(&self, mode: SortMode) -> Vec<&Task> {
        sorting::sorted(&self.tasks, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_add_trims_text() {
        let mut list = TodoList::new();
        let id = list.add("  Buy milk  ", Priority::Low).unwrap();
        assert_eq!(list.find(&id).unwrap().text, "Buy milk");
        assert!(!list.find(&id).unwrap().completed);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut list = TodoList::new();
        assert!(list.add("", Priority::High).is_none());
        assert!(list.add("   \t ", Priority::High).is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_generate_task_id_format() {
        let list = TodoList::new();
        let id = list.generate_task_id(at(14, 30, 5));
        assert_eq!(id, "20250301143005000000");
    }

    #[test]
    fn test_add_id_matches_created_at() {
        let mut list = TodoList::new();
        for i in 0..20 {
            let id = list.add(&format!("task {}", i), Priority::Low).unwrap();
            let task = list.find(&id).unwrap();
            assert_eq!(task.created_at.nanosecond(), 0);
            assert!(id.starts_with(&task.created_at.format("%Y%m%d%H%M%S").to_string()));
        }
    }

    #[test]
    fn test_generate_task_id_avoids_collisions() {
        let mut list = TodoList::new();
        let now = at(9, 0, 0);
        let first = list.generate_task_id(now);
        list.insert(Task::new(first.clone(), "a", Priority::Low));
        let second = list.generate_task_id(now);
        list.insert(Task::new(second.clone(), "b", Priority::Low));
        let third = list.generate_task_id(now);

        assert_eq!(second, format!("{}-1", first));
        assert_eq!(third, format!("{}-2", first));
    }

    #[test]
    fn test_rapid_adds_get_unique_ids() {
        let mut list = TodoList::new();
        let ids: HashSet<String> = (0..50)
            .map(|i| list.add(&format!("task {}", i), Priority::Low).unwrap())
            .collect();
        assert_eq!(ids.len(), 50);
        assert_eq!(list.len(), 50);
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut list = TodoList::new();
        assert!(list.insert(Task::new("x", "first", Priority::Low)));
        assert!(!list.insert(Task::new("x", "second", Priority::High)));
        assert_eq!(list.len(), 1);
        assert_eq!(list.find("x").unwrap().text, "first");
    }

    #[test]
    fn test_mutations_on_unknown_id_are_noops() {
        let mut list = TodoList::new();
        list.insert(Task::new("a", "task", Priority::Low));
        let before = list.clone();

        assert!(!list.set_completed("missing", true));
        assert!(!list.set_priority("missing", Priority::High));
        assert!(list.remove("missing").is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove_updates_index() {
        let mut list = TodoList::new();
        list.insert(Task::new("a", "task", Priority::Low));
        let removed = list.remove("a").unwrap();
        assert_eq!(removed.text, "task");
        assert!(!list.contains_id("a"));
        // The ID can be reused after removal
        assert!(list.insert(Task::new("a", "again", Priority::Low)));
    }

    #[test]
    fn test_clear_completed_keeps_incomplete() {
        let mut list = TodoList::new();
        list.insert(Task::new("a", "one", Priority::Low));
        list.insert(Task::new("b", "two", Priority::Low));
        list.insert(Task::new("c", "three", Priority::Low));
        list.set_completed("a", true);
        list.set_completed("c", true);

        assert_eq!(list.clear_completed(), 2);
        assert_eq!(list.len(), 1);
        assert_eq!(list.tasks()[0].id, "b");
        assert!(!list.contains_id("a"));
        assert!(!list.contains_id("c"));
        assert!(list.contains_id("b"));
    }
}
