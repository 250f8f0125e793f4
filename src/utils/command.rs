//! Shell command strings sent into the running container

use crate::config::SENTINEL_FILE_NAME;

/// Wrap a script so ECS Exec runs it through `sh -c`
pub fn shell_command(script: &str) -> String {
    format!("sh -c '{}'", script)
}

/// Pipe a producer's output through gzip into the sentinel file
pub fn gzip_into_sentinel(producer: &str, efs_path: &str) -> String {
    shell_command(&format!(
        "{} | gzip - > {}/{}",
        producer, efs_path, SENTINEL_FILE_NAME
    ))
}

/// Remove the sentinel once its dump has been archived
pub fn remove_sentinel_command(efs_path: &str) -> String {
    shell_command(&format!("rm -rf {}/{}", efs_path, SENTINEL_FILE_NAME))
}
