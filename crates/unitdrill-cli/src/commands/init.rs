//! The `unitdrill init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("unitdrill.toml").exists() {
        println!("unitdrill.toml already exists, skipping.");
        return Ok(());
    }

    std::fs::write("unitdrill.toml", SAMPLE_CONFIG)?;
    println!("Created unitdrill.toml");

    println!("\nNext steps:");
    println!("  1. Edit unitdrill.toml to change units, quantities or words");
    println!("  2. Run: unitdrill validate");
    println!("  3. Run: unitdrill play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# unitdrill configuration

# Fixed seed for reproducible runs (leave out for a new game every time).
# seed = 42

[quiz]
min_quantity = 1
max_quantity = 1000
measures = ["m", "l", "g"]

# Scales are written as strings so they stay exact.
[[quiz.units]]
name = "M"
scale = "1000000"

[[quiz.units]]
name = "k"
scale = "1000"

[[quiz.units]]
name = "h"
scale = "100"

[[quiz.units]]
name = "da"
scale = "10"

[[quiz.units]]
name = ""
scale = "1"

[[quiz.units]]
name = "d"
scale = "0.1"

[[quiz.units]]
name = "c"
scale = "0.01"

[[quiz.units]]
name = "m"
scale = "0.001"

[[quiz.units]]
name = "µ"
scale = "0.000001"

[hangman]
difficulty = "easy"
# words = ["kilogram", "litre"]

[logging]
# file = "unitdrill.log"
level = "info"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use unitdrill_core::config::{parse_config_str, validate_config};
    use unitdrill_core::Catalog;

    #[test]
    fn sample_config_matches_builtin_catalog() {
        let config = parse_config_str(SAMPLE_CONFIG, Path::new("unitdrill.toml")).unwrap();
        assert!(validate_config(&config).is_empty());
        assert_eq!(config.catalog().unwrap(), Catalog::metric());
        assert_eq!(config.seed, None);
    }
}
