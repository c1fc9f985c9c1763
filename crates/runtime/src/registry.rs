use std::collections::HashMap;

use status_sim::TimerKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskLifecycle {
    Starting,
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisteredTask {
    pub id: TaskId,
    pub timer: TimerKind,
    pub state: TaskLifecycle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("task {0:?} was never registered")]
    UnknownTask(TaskId),
    #[error("task {0:?} is already stopped")]
    AlreadyStopped(TaskId),
}

/// Periodic tasks owned by one session. Every registered task is
/// deregistered at most once.
#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: HashMap<TaskId, RegisteredTask>,
    next_id: u64,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, timer: TimerKind) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.tasks.insert(
            id,
            RegisteredTask {
                id,
                timer,
                state: TaskLifecycle::Starting,
            },
        );
        id
    }

    pub fn mark_running(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.get_mut(&id) {
            if task.state == TaskLifecycle::Starting {
                task.state = TaskLifecycle::Running;
            }
        }
    }

    pub fn deregister(&mut self, id: TaskId) -> Result<TimerKind, RegistryError> {
        let task = self
            .tasks
            .get_mut(&id)
            .ok_or(RegistryError::UnknownTask(id))?;
        if task.state == TaskLifecycle::Stopped {
            return Err(RegistryError::AlreadyStopped(id));
        }
        task.state = TaskLifecycle::Stopped;
        Ok(task.timer)
    }

    pub fn get(&self, id: TaskId) -> Option<RegisteredTask> {
        self.tasks.get(&id).copied()
    }

    pub fn active_count(&self) -> usize {
        self.tasks
            .values()
            .filter(|task| task.state != TaskLifecycle::Stopped)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use status_sim::TimerKind;

    use super::{RegistryError, TaskId, TaskLifecycle, TaskRegistry};

    #[test]
    fn deregister_returns_error_for_unknown_task() {
        let mut registry = TaskRegistry::new();

        let err = registry.deregister(TaskId(99)).unwrap_err();

        assert_eq!(err, RegistryError::UnknownTask(TaskId(99)));
    }

    #[test]
    fn running_task_stops_exactly_once() {
        let mut registry = TaskRegistry::new();
        let task_id = registry.register(TimerKind::Metrics);
        registry.mark_running(task_id);
        assert_eq!(registry.active_count(), 1);

        assert_eq!(registry.deregister(task_id), Ok(TimerKind::Metrics));
        assert_eq!(
            registry.deregister(task_id),
            Err(RegistryError::AlreadyStopped(task_id))
        );

        let task = registry.get(task_id).unwrap();
        assert_eq!(task.state, TaskLifecycle::Stopped);
        assert_eq!(registry.active_count(), 0);
    }

    #[test]
    fn stopped_task_is_not_revived_by_mark_running() {
        let mut registry = TaskRegistry::new();
        let task_id = registry.register(TimerKind::Clock);
        registry.deregister(task_id).unwrap();

        registry.mark_running(task_id);

        assert_eq!(registry.get(task_id).unwrap().state, TaskLifecycle::Stopped);
    }

    #[test]
    fn ids_are_unique_per_registration() {
        let mut registry = TaskRegistry::new();

        let ids: Vec<TaskId> = TimerKind::ALL
            .into_iter()
            .map(|timer| registry.register(timer))
            .collect();

        assert_eq!(ids, vec![TaskId(1), TaskId(2), TaskId(3)]);
        assert_eq!(registry.active_count(), 3);
    }
}
