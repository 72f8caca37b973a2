use console::style;
use miette::Result;

pub fn run() -> Result<()> {
    println!("{}", style("anodra").bold());
    println!(
        "{}",
        style(format!("Version: {}", env!("CARGO_PKG_VERSION"))).blue()
    );
    println!(
        "{}",
        style("Scaffolds vite-based React projects with an optional UI library pre-wired").blue()
    );
    println!(
        "{}",
        style("Supported libraries: MUI Design, Bootstrap, Ant Design, Tailwind CSS").blue()
    );
    Ok(())
}
