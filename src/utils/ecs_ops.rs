//! ECS operations abstraction for testability
//!
//! This module provides a trait-based abstraction over the two ECS calls the
//! relay makes, enabling dependency injection and mocking for tests.

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_ecs::Client;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// ARN of a running ECS task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaskArn(pub String);

impl TaskArn {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The parts of an ExecuteCommand response worth logging
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResponse {
    pub cluster_arn: Option<String>,
    pub task_arn: Option<String>,
    pub container_name: Option<String>,
    pub interactive: bool,
    pub session_id: Option<String>,
}

/// Abstraction for ECS operations, enabling mocking in tests
#[async_trait]
pub trait EcsOperations: Send + Sync {
    /// First task listed for the service, if any
    async fn first_task(&self, cluster: &str, service: &str) -> Result<Option<TaskArn>>;

    /// Run a command in a task's container through ECS Exec (interactive)
    async fn execute_command(
        &self,
        cluster: &str,
        task: &TaskArn,
        container: &str,
        command: &str,
    ) -> Result<CommandResponse>;
}

/// Default implementation backed by the AWS SDK
#[derive(Debug, Clone)]
pub struct RealEcsOps {
    client: Client,
}

impl RealEcsOps {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_conf(sdk_config: &aws_config::SdkConfig) -> Self {
        Self::new(Client::new(sdk_config))
    }
}

#[async_trait]
impl EcsOperations for RealEcsOps {
    async fn first_task(&self, cluster: &str, service: &str) -> Result<Option<TaskArn>> {
        let output = self
            .client
            .list_tasks()
            .cluster(cluster)
            .service_name(service)
            .send()
            .await
            .context(format!("Failed to list tasks for service '{}' in '{}'", service, cluster))?;

        debug!("ListTasks returned {} task(s)", output.task_arns().len());

        Ok(output.task_arns().first().cloned().map(TaskArn))
    }

    async fn execute_command(
        &self,
        cluster: &str,
        task: &TaskArn,
        container: &str,
        command: &str,
    ) -> Result<CommandResponse> {
        let output = self
            .client
            .execute_command()
            .cluster(cluster)
            .task(task.as_str())
            .container(container)
            .command(command)
            .interactive(true)
            .send()
            .await
            .context(format!("Failed to execute command in task {}", task))?;

        Ok(CommandResponse {
            cluster_arn: output.cluster_arn().map(str::to_string),
            task_arn: output.task_arn().map(str::to_string),
            container_name: output.container_name().map(str::to_string),
            interactive: output.interactive(),
            session_id: output
                .session()
                .and_then(|s| s.session_id())
                .map(str::to_string),
        })
    }
}

/// Mock implementation for testing
/// Available for use in external test crates
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Recorded ECS operation call
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum EcsCall {
        ListTasks { cluster: String, service: String },
        ExecuteCommand { cluster: String, task: String, container: String, command: String },
    }

    /// Mock ECS operations for testing
    #[derive(Clone, Default)]
    pub struct MockEcsOps {
        /// Recorded operation calls
        pub calls: Arc<Mutex<Vec<EcsCall>>>,
        /// Tasks returned by ListTasks
        pub tasks: Arc<Mutex<Vec<String>>>,
        /// Whether ListTasks should fail
        pub should_fail_list: Arc<Mutex<bool>>,
        /// Whether ExecuteCommand should fail
        pub should_fail_execute: Arc<Mutex<bool>>,
    }

    impl MockEcsOps {
        pub fn new() -> Self {
            Self::default()
        }

        /// Configure the running tasks
        pub fn with_tasks(self, tasks: Vec<String>) -> Self {
            *self.tasks.lock().unwrap() = tasks;
            self
        }

        /// Configure a single running task
        pub fn with_task(self, task: &str) -> Self {
            self.with_tasks(vec![task.to_string()])
        }

        /// Configure ListTasks to fail
        pub fn with_failing_list(self) -> Self {
            *self.should_fail_list.lock().unwrap() = true;
            self
        }

        /// Configure ExecuteCommand to fail
        pub fn with_failing_execute(self) -> Self {
            *self.should_fail_execute.lock().unwrap() = true;
            self
        }

        /// Get all recorded calls
        pub fn get_calls(&self) -> Vec<EcsCall> {
            self.calls.lock().unwrap().clone()
        }

        /// Check if ListTasks was called
        pub fn list_tasks_called(&self) -> bool {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .any(|c| matches!(c, EcsCall::ListTasks { .. }))
        }

        /// Commands sent through ExecuteCommand, in order
        pub fn executed_commands(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter_map(|c| match c {
                    EcsCall::ExecuteCommand { command, .. } => Some(command.clone()),
                    _ => None,
                })
                .collect()
        }

        fn record_call(&self, call: EcsCall) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl EcsOperations for MockEcsOps {
        async fn first_task(&self, cluster: &str, service: &str) -> Result<Option<TaskArn>> {
            self.record_call(EcsCall::ListTasks {
                cluster: cluster.to_string(),
                service: service.to_string(),
            });
            if *self.should_fail_list.lock().unwrap() {
                anyhow::bail!("Mock list_tasks failure");
            }
            Ok(self.tasks.lock().unwrap().first().cloned().map(TaskArn))
        }

        async fn execute_command(
            &self,
            cluster: &str,
            task: &TaskArn,
            container: &str,
            command: &str,
        ) -> Result<CommandResponse> {
            self.record_call(EcsCall::ExecuteCommand {
                cluster: cluster.to_string(),
                task: task.to_string(),
                container: container.to_string(),
                command: command.to_string(),
            });
            if *self.should_fail_execute.lock().unwrap() {
                anyhow::bail!("Mock execute_command failure in task {}", task);
            }
            Ok(CommandResponse {
                cluster_arn: Some(format!("arn:aws:ecs:us-west-2:000000000000:cluster/{}", cluster)),
                task_arn: Some(task.to_string()),
                container_name: Some(container.to_string()),
                interactive: true,
                session_id: Some("ecs-execute-command-mock".to_string()),
            })
        }
    }
}
