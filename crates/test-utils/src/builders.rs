#![allow(dead_code)]

use chrono::NaiveDate;
use taskorder::request::{ScheduleRequest, TaskDescriptor};

/// Builder for `ScheduleRequest` to simplify test setup.
pub struct ScheduleRequestBuilder {
    request: ScheduleRequest,
}

impl ScheduleRequestBuilder {
    pub fn new() -> Self {
        Self {
            request: ScheduleRequest::default(),
        }
    }

    pub fn with_task(mut self, task: TaskDescriptor) -> Self {
        self.request.tasks.push(task);
        self
    }

    /// Shorthand for a task with only a title and dependencies.
    pub fn task(self, title: &str, deps: &[&str]) -> Self {
        let mut builder = TaskDescriptorBuilder::new(title);
        for dep in deps {
            builder = builder.after(dep);
        }
        self.with_task(builder.build())
    }

    pub fn tasks(&self) -> &[TaskDescriptor] {
        &self.request.tasks
    }

    pub fn build(self) -> ScheduleRequest {
        self.request
    }
}

impl Default for ScheduleRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskDescriptor`.
pub struct TaskDescriptorBuilder {
    task: TaskDescriptor,
}

impl TaskDescriptorBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            task: TaskDescriptor::new(title),
        }
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.dependencies.push(dep.to_string());
        self
    }

    pub fn estimated_hours(mut self, hours: u32) -> Self {
        self.task.estimated_hours = hours;
        self
    }

    pub fn due(mut self, year: i32, month: u32, day: u32) -> Self {
        self.task.due_date = NaiveDate::from_ymd_opt(year, month, day);
        self
    }

    pub fn build(self) -> TaskDescriptor {
        self.task
    }
}
