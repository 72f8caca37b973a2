use anodra::selection::InquirePrompter;
use anodra::CreateOptions;
use miette::Result;

pub fn run(name: String, no_editor: bool, no_dev: bool) -> Result<()> {
    let options = CreateOptions {
        project_name: name,
        open_editor: !no_editor,
        start_dev_server: !no_dev,
    };

    let mut prompter = InquirePrompter;
    anodra::create_project(&options, &mut prompter)?;

    Ok(())
}
