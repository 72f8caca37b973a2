use console::style;
use miette::Result;

pub fn run() -> Result<()> {
    println!("Welcome to {}!", style("anodra").green().bold());
    Ok(())
}
