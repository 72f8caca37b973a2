pub mod error;
pub mod exec;
pub mod guard;
pub mod plan;
pub mod selection;

use std::path::Path;

use console::style;

use crate::error::{AnodraError, Result};
use crate::plan::PlanOptions;
use crate::selection::{Choose, SelectionOutcome};

pub struct CreateOptions {
    pub project_name: String,
    pub open_editor: bool,
    pub start_dev_server: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The plan ran to completion.
    Scaffolded,
    /// The chosen project kind has no flow yet; nothing was created.
    Unsupported,
}

/// Full scaffolding flow: guard the target path, collect the selection,
/// build the plan, execute it.
pub fn create_project(options: &CreateOptions, chooser: &mut dyn Choose) -> Result<CreateOutcome> {
    let cwd = std::env::current_dir().map_err(|e| AnodraError::Io {
        context: "getting current directory".into(),
        source: e,
    })?;
    create_project_in(&cwd, options, chooser)
}

/// Same flow with an explicit base directory; the target path is
/// `base_dir/<project_name>`.
pub fn create_project_in(
    base_dir: &Path,
    options: &CreateOptions,
    chooser: &mut dyn Choose,
) -> Result<CreateOutcome> {
    let project_path = base_dir.join(&options.project_name);
    guard::ensure_absent(&project_path)?;

    println!("Project name: {}", style(&options.project_name).cyan());

    let selection = match selection::run_selection(chooser)? {
        SelectionOutcome::Ready(selection) => selection,
        SelectionOutcome::Unsupported(_) => {
            println!("This section is under processing");
            return Ok(CreateOutcome::Unsupported);
        }
    };

    let plan_options = PlanOptions {
        open_editor: options.open_editor,
        start_dev_server: options.start_dev_server,
    };
    let plan = plan::build_plan(
        &selection,
        &options.project_name,
        &project_path,
        &plan_options,
    );

    // The scaffold command runs in the parent and creates the project
    // directory itself.
    let start_dir = project_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| base_dir.to_path_buf());
    exec::execute(&plan, &start_dir)?;

    println!(
        "\n{} Project ready at {}",
        style("✓").green().bold(),
        style(project_path.display()).cyan()
    );

    Ok(CreateOutcome::Scaffolded)
}
