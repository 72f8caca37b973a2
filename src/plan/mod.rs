pub mod templates;

use std::path::{Path, PathBuf};

use crate::selection::{Selection, UiLibrary};

/// One external action within a plan. `Run` commands execute in the
/// executor's current working context; `ChangeDir` updates that context
/// rather than the process-wide working directory; `WriteFile` paths are
/// relative to the context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    Run { command: String },
    ChangeDir { path: PathBuf },
    WriteFile { path: PathBuf, contents: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStep {
    pub description: String,
    pub action: StepAction,
}

/// Ordered step sequence derived from a completed selection. Built once,
/// executed once, never replayed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Plan {
    pub steps: Vec<PlanStep>,
}

/// Terminal actions are configurable because the dev server blocks until it
/// is shut down.
#[derive(Debug, Clone, Copy)]
pub struct PlanOptions {
    pub open_editor: bool,
    pub start_dev_server: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            open_editor: true,
            start_dev_server: true,
        }
    }
}

/// Map a completed selection to the ordered list of external steps. Pure and
/// deterministic; identical inputs yield identical plans.
pub fn build_plan(
    selection: &Selection,
    project_name: &str,
    project_path: &Path,
    options: &PlanOptions,
) -> Plan {
    let mut steps = Vec::new();

    steps.push(PlanStep {
        description: format!("Creating a new React project: {project_name}"),
        action: StepAction::Run {
            command: format!(
                "npm create vite@latest {project_name} -- --template {}",
                selection.language.template_id()
            ),
        },
    });

    steps.push(PlanStep {
        description: format!("Entering {project_name}"),
        action: StepAction::ChangeDir {
            path: project_path.to_path_buf(),
        },
    });

    steps.push(PlanStep {
        description: "Installing dependencies".to_string(),
        action: StepAction::Run {
            command: "npm install".to_string(),
        },
    });

    if let Some(install) = selection.ui_library.install_command() {
        steps.push(PlanStep {
            description: format!("Installing {}", selection.ui_library.label()),
            action: StepAction::Run {
                command: install.to_string(),
            },
        });

        if selection.ui_library == UiLibrary::Tailwind {
            // Generates the scaffolding the file writes below overwrite.
            steps.push(PlanStep {
                description: "Initializing Tailwind CSS".to_string(),
                action: StepAction::Run {
                    command: "npx tailwindcss init -p".to_string(),
                },
            });
        }
    }

    for template in templates::config_files(selection.ui_library) {
        steps.push(PlanStep {
            description: format!("Writing {}", template.relative_path),
            action: StepAction::WriteFile {
                path: PathBuf::from(template.relative_path),
                contents: template.contents.to_string(),
            },
        });
    }

    if options.open_editor {
        steps.push(PlanStep {
            description: "Opening project in VS Code".to_string(),
            action: StepAction::Run {
                command: "code .".to_string(),
            },
        });
    }

    if options.start_dev_server {
        steps.push(PlanStep {
            description: "Starting the development server".to_string(),
            action: StepAction::Run {
                command: "npm run dev".to_string(),
            },
        });
    }

    Plan { steps }
}
