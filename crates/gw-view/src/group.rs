//! Task board columns and file categories.
//!
//! Tasks partition over a closed enum, so [`TaskGroups`] has one field per
//! status. File categories are open text, so [`FileGroups`] is an ordered map
//! keyed by first appearance. Both keep input order inside each group.

use gw_core::entities::{FileItem, Task};
use gw_core::enums::TaskStatus;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskGroups<'a> {
    pub todo: Vec<&'a Task>,
    pub in_progress: Vec<&'a Task>,
    pub done: Vec<&'a Task>,
}

impl<'a> TaskGroups<'a> {
    #[must_use]
    pub fn get(&self, status: TaskStatus) -> &[&'a Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    /// Total tasks across all columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Board columns in display order.
    pub fn columns(&self) -> impl Iterator<Item = (TaskStatus, &[&'a Task])> + '_ {
        TaskStatus::ALL
            .into_iter()
            .map(move |status| (status, self.get(status)))
    }
}

#[must_use]
pub fn group_tasks_by_status<'a, I>(tasks: I) -> TaskGroups<'a>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut groups = TaskGroups::default();
    for task in tasks {
        match task.status {
            TaskStatus::Todo => groups.todo.push(task),
            TaskStatus::InProgress => groups.in_progress.push(task),
            TaskStatus::Done => groups.done.push(task),
        }
    }
    groups
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileGroups<'a>(IndexMap<String, Vec<&'a FileItem>>);

impl<'a> FileGroups<'a> {
    /// Categories in first-seen order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[&'a FileItem]> {
        self.0.get(category).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a FileItem])> {
        self.0
            .iter()
            .map(|(category, files)| (category.as_str(), files.as_slice()))
    }

    /// Number of distinct categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[must_use]
pub fn group_files_by_category<'a, I>(files: I) -> FileGroups<'a>
where
    I: IntoIterator<Item = &'a FileItem>,
{
    let mut groups: IndexMap<String, Vec<&'a FileItem>> = IndexMap::new();
    for file in files {
        groups.entry(file.category.clone()).or_default().push(file);
    }
    FileGroups(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_core::RecordStore;
    use gw_core::enums::TaskPriority;
    use pretty_assertions::assert_eq;

    fn file(id: &str, category: &str) -> FileItem {
        FileItem {
            id: id.to_string(),
            name: format!("{id}.pdf"),
            category: category.to_string(),
            date: "2025-06-10".to_string(),
            size: "1.0 MB".to_string(),
            project_id: "p".to_string(),
        }
    }

    fn task(id: &str, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            title: id.to_string(),
            status,
            assignee: "Someone".to_string(),
            project_id: "p".to_string(),
            priority: TaskPriority::Low,
        }
    }

    fn ids<'a>(tasks: &[&'a Task]) -> Vec<&'a str> {
        tasks.iter().map(|task| task.id.as_str()).collect()
    }

    #[test]
    fn tasks_partition_exhaustively_in_order() {
        let tasks = vec![
            task("a", TaskStatus::Done),
            task("b", TaskStatus::Todo),
            task("c", TaskStatus::Done),
            task("d", TaskStatus::InProgress),
            task("e", TaskStatus::Todo),
        ];
        let groups = group_tasks_by_status(&tasks);
        assert_eq!(ids(&groups.todo), vec!["b", "e"]);
        assert_eq!(ids(&groups.in_progress), vec!["d"]);
        assert_eq!(ids(&groups.done), vec!["a", "c"]);
        assert_eq!(groups.len(), tasks.len());

        let mut seen: Vec<&str> = groups
            .columns()
            .flat_map(|(_, column)| column.iter().map(|task| task.id.as_str()))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn empty_columns_still_exist() {
        let tasks = vec![task("only", TaskStatus::InProgress)];
        let groups = group_tasks_by_status(&tasks);
        let sizes: Vec<(TaskStatus, usize)> = groups
            .columns()
            .map(|(status, column)| (status, column.len()))
            .collect();
        assert_eq!(
            sizes,
            vec![
                (TaskStatus::Todo, 0),
                (TaskStatus::InProgress, 1),
                (TaskStatus::Done, 0),
            ]
        );
        assert!(group_tasks_by_status(&Vec::<Task>::new()).is_empty());
    }

    #[test]
    fn demo_board_counts() {
        let store = RecordStore::demo().unwrap();
        let groups = group_tasks_by_status(store.tasks_for("bloemhof"));
        assert_eq!(
            (groups.todo.len(), groups.in_progress.len(), groups.done.len()),
            (4, 3, 3)
        );
    }

    #[test]
    fn file_categories_keep_first_seen_order() {
        let files = vec![file("f1", "Plans"), file("f2", "Plans"), file("f3", "Permits")];
        let groups = group_files_by_category(&files);
        assert_eq!(groups.categories().collect::<Vec<_>>(), vec!["Plans", "Permits"]);

        let plans: Vec<&str> = groups
            .get("Plans")
            .unwrap()
            .iter()
            .map(|file| file.id.as_str())
            .collect();
        assert_eq!(plans, vec!["f1", "f2"]);
        assert!(groups.get("Photos").is_none());
    }

    #[test]
    fn demo_file_categories() {
        let store = RecordStore::demo().unwrap();
        let groups = group_files_by_category(store.files_for("bloemhof"));
        assert_eq!(
            groups.categories().collect::<Vec<_>>(),
            vec!["Plans", "Permits", "Change Orders", "Contracts", "Photos"]
        );
        assert_eq!(groups.get("Plans").map(<[_]>::len), Some(3));
        assert_eq!(groups.iter().map(|(_, files)| files.len()).sum::<usize>(), 8);
    }
}
