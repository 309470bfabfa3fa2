use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::actions::{Action, DialogType};
use crate::storage::ExerciseStore;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<anyhow::Result<TaskResult>>,
    pub description: String,
    pub started_at: std::time::Instant,
}

#[derive(Debug, Clone)]
pub enum TaskResult {
    OperationCompleted(String),
    DataLoadCompleted { exercises: usize, templates: usize },
    Other(String),
}

/// Owns the background tokio tasks the UI spawns against the store and the
/// channel their completions come back on.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a background store mutation (insert, delete).
    ///
    /// On success a `ReloadData` is sent so the UI re-reads the collection;
    /// on failure an error dialog action is sent instead. The screen never
    /// waits on the result.
    pub fn spawn_store_operation<F, Fut>(&mut self, operation: F, description: String) -> TaskId
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = anyhow::Result<String>> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let desc_for_task = description.clone();

        let handle = tokio::spawn(async move {
            match operation().await {
                Ok(message) => {
                    let result = TaskResult::OperationCompleted(message);
                    let _ = action_sender.send(Action::ReloadData);
                    Ok(result)
                }
                Err(e) => {
                    let error_msg = format!("Operation failed: {e}");
                    let result = TaskResult::Other(error_msg.clone());
                    let _ = action_sender.send(Action::ShowDialog(DialogType::Error(error_msg)));
                    Ok(result)
                }
            }
        });

        let task = BackgroundTask {
            id: task_id,
            handle,
            description: desc_for_task,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Spawn a background read of the full collection and catalog.
    pub fn spawn_data_load(&mut self, store: Arc<dyn ExerciseStore>) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let description = "Loading data from storage".to_string();

        let handle = tokio::spawn(async move {
            match (store.all_exercises().await, store.all_templates().await) {
                (Ok(exercises), Ok(templates)) => {
                    let result = TaskResult::DataLoadCompleted {
                        exercises: exercises.len(),
                        templates: templates.len(),
                    };
                    let _ = action_sender.send(Action::DataLoaded { exercises, templates });
                    Ok(result)
                }
                (Err(e), _) | (_, Err(e)) => {
                    let error_msg = format!("Failed to load data: {e}");
                    let _ = action_sender.send(Action::ShowDialog(DialogType::Error(error_msg.clone())));
                    Ok(TaskResult::Other(error_msg))
                }
            }
        });

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Check for completed tasks and clean them up
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            self.tasks.remove(task_id);
        }

        finished
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
