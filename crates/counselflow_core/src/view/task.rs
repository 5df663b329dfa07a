use super::{
    parse_selection, unknown_field, Domain, Listable, Selection, SortDirection, ViewResult,
};
use crate::model::common::Priority;
use crate::model::task::{Task, TaskStatus};
use std::cmp::Ordering;

labeled_enum! {
    pub enum TaskSort {
        Due => "due",
        Priority => "priority",
        Progress => "progress",
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub status: Selection<TaskStatus>,
    pub priority: Selection<Priority>,
}

impl Listable for Task {
    type Filter = TaskFilter;
    type SortKey = TaskSort;

    const DOMAIN: Domain = Domain::Tasks;
    const FILTER_FIELDS: &'static [&'static str] = &["status", "priority"];

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str(), self.assignee.as_str()]
    }

    fn matches_filter(&self, filter: &TaskFilter) -> bool {
        filter.status.admits(&self.status) && filter.priority.admits(&self.priority)
    }

    fn compare_by(&self, other: &Self, key: TaskSort) -> Ordering {
        match key {
            TaskSort::Due => self.due_date.cmp(&other.due_date),
            TaskSort::Priority => self.priority.cmp(&other.priority),
            TaskSort::Progress => self.progress.cmp(&other.progress),
        }
    }

    fn sort_keys() -> &'static [TaskSort] {
        TaskSort::ALL
    }

    fn direction(_key: TaskSort) -> SortDirection {
        SortDirection::Descending
    }

    fn default_sort() -> Option<TaskSort> {
        None
    }

    fn sort_key_label(key: TaskSort) -> &'static str {
        key.as_str()
    }

    fn set_filter(filter: &mut TaskFilter, field: &str, value: &str) -> ViewResult<()> {
        match field.to_ascii_lowercase().as_str() {
            "status" => {
                filter.status = parse_selection(Self::DOMAIN, "status", value, TaskStatus::parse)?
            }
            "priority" => {
                filter.priority = parse_selection(Self::DOMAIN, "priority", value, Priority::parse)?
            }
            _ => return Err(unknown_field(Self::DOMAIN, field)),
        }
        Ok(())
    }

    fn facet_labels(&self, field: &str) -> Vec<&str> {
        match field {
            "status" => vec![self.status.as_str()],
            "priority" => vec![self.priority.as_str()],
            _ => Vec::new(),
        }
    }
}
