//! Implementation of the `promptgen paradigm` command.

use crate::cli::ParadigmArgs;
use promptgen::error::{PromptError, Result};
use promptgen::reasoning::{Paradigm, Selection, WorldModel, paradigm_prompt, select_paradigm};

/// Build the world model from repeated `--world key=value` arguments.
fn parse_world(assignments: &[String]) -> Result<WorldModel> {
    let mut world = WorldModel::new();
    for raw in assignments {
        let (key, value) = WorldModel::parse_assignment(raw).ok_or_else(|| {
            PromptError::UserError(format!(
                "invalid --world value '{}' (expected key=value)",
                raw
            ))
        })?;
        world.insert(key, value);
    }
    Ok(world)
}

fn resolve(args: &ParadigmArgs) -> Selection {
    match args.paradigm {
        Some(paradigm) => {
            let domain = match paradigm {
                Paradigm::ExpertLexicon => select_paradigm(&args.task).domain,
                _ => None,
            };
            Selection { paradigm, domain }
        }
        None => select_paradigm(&args.task),
    }
}

/// Header line naming the paradigm, followed by its prompt.
pub fn render_paradigm(args: &ParadigmArgs) -> Result<String> {
    let selection = resolve(args);
    let world = parse_world(&args.world)?;

    let header = match selection.domain {
        Some(domain) => format!("Paradigm: {} ({})", selection.paradigm, domain.as_str()),
        None => format!("Paradigm: {}", selection.paradigm),
    };

    Ok(format!(
        "{}\n\n{}",
        header,
        paradigm_prompt(selection.paradigm, &args.task, &world)
    ))
}

/// Execute the `promptgen paradigm` command.
pub fn cmd_paradigm(args: ParadigmArgs) -> Result<()> {
    print!("{}", render_paradigm(&args)?);
    Ok(())
}
