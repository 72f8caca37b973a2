use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{AnodraError, Result};
use crate::plan::{Plan, StepAction};

/// Working context threaded through step execution. `ChangeDir` steps mutate
/// this context only, never the process-wide current directory.
#[derive(Debug, Clone)]
pub struct ExecContext {
    cwd: PathBuf,
}

impl ExecContext {
    pub fn new(start_dir: &Path) -> Self {
        Self {
            cwd: start_dir.to_path_buf(),
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

/// Run the plan strictly in order, one spinner per step. The first failing
/// step halts execution; completed side effects stay on disk.
pub fn execute(plan: &Plan, start_dir: &Path) -> Result<()> {
    let mut ctx = ExecContext::new(start_dir);

    for step in &plan.steps {
        let spinner = step_spinner(&step.description);
        match run_step(&step.action, &mut ctx) {
            Ok(()) => {
                spinner.finish_with_message(format!(
                    "{} {}",
                    style("✓").green().bold(),
                    step.description
                ));
            }
            Err(message) => {
                spinner.finish_with_message(format!(
                    "{} {}",
                    style("✗").red().bold(),
                    step.description
                ));
                return Err(AnodraError::StepFailed {
                    step: step.description.clone(),
                    message,
                });
            }
        }
    }

    Ok(())
}

fn step_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Single execution protocol shared by every step kind: perform the action,
/// return a failure message for the step report on error.
fn run_step(action: &StepAction, ctx: &mut ExecContext) -> std::result::Result<(), String> {
    match action {
        StepAction::Run { command } => {
            let output = Command::new("sh")
                .arg("-c")
                .arg(command)
                .current_dir(ctx.cwd())
                .output()
                .map_err(|e| format!("failed to execute `{command}`: {e}"))?;

            if output.status.success() {
                Ok(())
            } else {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let stderr = stderr.trim();
                if stderr.is_empty() {
                    Err(format!("`{command}` exited with {}", output.status))
                } else {
                    Err(format!(
                        "`{command}` exited with {}:\n{stderr}",
                        output.status
                    ))
                }
            }
        }
        StepAction::ChangeDir { path } => {
            if !path.is_dir() {
                return Err(format!("directory not found: {}", path.display()));
            }
            ctx.cwd = path.clone();
            Ok(())
        }
        StepAction::WriteFile { path, contents } => {
            let target = ctx.cwd().join(path);
            std::fs::write(&target, contents)
                .map_err(|e| format!("writing {}: {e}", target.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::PlanStep;

    fn run(command: &str) -> PlanStep {
        PlanStep {
            description: format!("run {command}"),
            action: StepAction::Run {
                command: command.to_string(),
            },
        }
    }

    #[test]
    fn steps_share_one_working_context() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("demo");

        let plan = Plan {
            steps: vec![
                run("mkdir demo"),
                PlanStep {
                    description: "enter demo".to_string(),
                    action: StepAction::ChangeDir {
                        path: project.clone(),
                    },
                },
                PlanStep {
                    description: "write marker".to_string(),
                    action: StepAction::WriteFile {
                        path: PathBuf::from("marker.txt"),
                        contents: "ready\n".to_string(),
                    },
                },
            ],
        };

        execute(&plan, dir.path()).unwrap();

        let written = std::fs::read_to_string(project.join("marker.txt")).unwrap();
        assert_eq!(written, "ready\n");
    }

    #[test]
    fn first_failure_halts_remaining_steps() {
        let dir = tempfile::tempdir().unwrap();

        let plan = Plan {
            steps: vec![
                run("true"),
                run("false"),
                PlanStep {
                    description: "never reached".to_string(),
                    action: StepAction::WriteFile {
                        path: PathBuf::from("leftover.txt"),
                        contents: "should not exist".to_string(),
                    },
                },
            ],
        };

        let err = execute(&plan, dir.path()).unwrap_err();
        match err {
            AnodraError::StepFailed { step, .. } => assert_eq!(step, "run false"),
            other => panic!("expected StepFailed, got: {other:?}"),
        }
        assert!(!dir.path().join("leftover.txt").exists());
    }

    #[test]
    fn command_failure_carries_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let plan = Plan {
            steps: vec![run("echo boom >&2; exit 3")],
        };

        let err = execute(&plan, dir.path()).unwrap_err();
        match err {
            AnodraError::StepFailed { message, .. } => assert!(message.contains("boom")),
            other => panic!("expected StepFailed, got: {other:?}"),
        }
    }

    #[test]
    fn change_dir_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let plan = Plan {
            steps: vec![PlanStep {
                description: "enter missing".to_string(),
                action: StepAction::ChangeDir {
                    path: dir.path().join("missing"),
                },
            }],
        };

        assert!(execute(&plan, dir.path()).is_err());
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.js"), "old").unwrap();

        let plan = Plan {
            steps: vec![PlanStep {
                description: "write config".to_string(),
                action: StepAction::WriteFile {
                    path: PathBuf::from("config.js"),
                    contents: "new".to_string(),
                },
            }],
        };

        execute(&plan, dir.path()).unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("config.js")).unwrap(),
            "new"
        );
    }
}
