// src/output/writer.rs
//! Executes output plans. The only place output I/O happens.

use super::types::*;
use crate::error::ChangelogError;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Delivers every operation of `plan`, recording failures instead of
/// stopping at the first one.
pub fn deliver(plan: OutputPlan) -> OutputReport {
    log::debug!(
        "Executing output plan with {} operations",
        plan.operations.len()
    );

    let report = plan
        .operations
        .into_iter()
        .fold(OutputReport::new(), |report, operation| {
            match execute_operation(&operation) {
                Ok(bytes_written) => report.with_completed(CompletedOperation {
                    operation,
                    bytes_written,
                }),
                Err(e) => {
                    log::error!("Output operation failed: {}", e);
                    report.with_failed(FailedOperation {
                        operation,
                        error: e.to_string(),
                    })
                }
            }
        });

    log::debug!(
        "Output plan complete: {} succeeded, {} failed, {} bytes",
        report.completed.len(),
        report.failed.len(),
        report.bytes_written
    );

    report
}

fn execute_operation(operation: &DeliveryTarget) -> Result<usize, ChangelogError> {
    match operation {
        DeliveryTarget::WriteFile { path, content } => write_file(path, content),
        DeliveryTarget::PrintToStdout { content } => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(content.len())
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<usize, ChangelogError> {
    log::debug!("Writing {} bytes to {}", content.len(), path.display());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;

    log::info!("Wrote changelog to {}", path.display());
    Ok(content.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "github-changelog-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_write_file_creates_parents() {
        let dir = scratch_dir("write");
        let path = dir.join("nested").join("changelog.html");

        let report = deliver(OutputPlan::for_destination(
            Some(path.clone()),
            "<p>yay</p>\n".to_string(),
        ));

        assert!(report.is_success());
        assert_eq!(report.bytes_written, 11);
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>yay</p>\n");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_failures_are_reported() {
        let dir = scratch_dir("fail");
        fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("file");
        fs::write(&blocker, "x").unwrap();

        let report = deliver(
            OutputPlan::new()
                .with_operation(DeliveryTarget::WriteFile {
                    path: blocker.join("changelog.html"),
                    content: "a".to_string(),
                })
                .with_operation(DeliveryTarget::WriteFile {
                    path: dir.join("ok.html"),
                    content: "b".to_string(),
                }),
        );

        assert!(!report.is_success());
        assert_eq!(report.failure_messages().len(), 1);
        assert_eq!(report.completed.len(), 1);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_plan_without_path_prints() {
        let plan = OutputPlan::for_destination(None, "x".to_string());
        assert_eq!(
            plan.operations,
            vec![DeliveryTarget::PrintToStdout {
                content: "x".to_string()
            }]
        );
    }
}
