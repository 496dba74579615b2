//! Implementation of the `promptgen list` command.

use promptgen::catalog::Catalog;
use promptgen::error::Result;

/// One line per preset, numbered in catalog order.
pub fn render_list(catalog: &Catalog) -> String {
    let width = catalog
        .list()
        .iter()
        .map(|entry| entry.description.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (i, entry) in catalog.list().iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {:<width$}  {}\n",
            i + 1,
            entry.description,
            entry.config.agent_name,
            width = width
        ));
    }
    out
}

/// Execute the `promptgen list` command.
pub fn cmd_list(catalog: &Catalog) -> Result<()> {
    if catalog.is_empty() {
        println!("No presets available.");
        return Ok(());
    }
    print!("{}", render_list(catalog));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_follows_catalog_order() {
        let catalog = Catalog::builtin();
        let rendered = render_list(catalog);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), catalog.len());
        assert!(lines[0].starts_with(" 1. Project Management Assistant"));
        assert!(lines[0].ends_with("ProjectManager-AI"));
        for (line, entry) in lines.iter().zip(catalog.list()) {
            assert!(line.contains(&entry.description));
        }
    }
}
