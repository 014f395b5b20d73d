//! The `unitdrill validate` command.

use anyhow::Result;

use unitdrill_core::config::{validate_config, UnitdrillConfig};

pub fn execute(config: &UnitdrillConfig) -> Result<()> {
    if let Ok(catalog) = config.catalog() {
        let range = catalog.quantity_range();
        println!(
            "Quiz: {} units, {} measures, quantities {} to {}",
            catalog.units().len(),
            catalog.measures().len(),
            range.start(),
            range.end()
        );
    }
    if let Ok(words) = config.word_list() {
        println!(
            "Word game: {} words, {} difficulty",
            words.len(),
            config.hangman.difficulty
        );
    }

    let warnings = validate_config(config);
    tracing::info!(warnings = warnings.len(), "config validated");
    for w in &warnings {
        println!("  [{}] WARNING: {}", w.section, w.message);
    }

    if warnings.is_empty() {
        println!("Configuration valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
