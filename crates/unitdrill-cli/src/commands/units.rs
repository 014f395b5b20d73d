//! The `unitdrill units` command.

use anyhow::{Context, Result};
use serde::Serialize;

use unitdrill_core::config::UnitdrillConfig;
use unitdrill_core::{Catalog, Unit};

use super::OutputFormat;

#[derive(Serialize)]
struct CatalogListing<'a> {
    units: &'a [Unit],
    measures: &'a [String],
    min_quantity: u32,
    max_quantity: u32,
}

pub fn execute(config: &UnitdrillConfig, format: &str) -> Result<()> {
    let format = OutputFormat::parse(format)?;
    let catalog = config.catalog().context("invalid [quiz] configuration")?;

    match format {
        OutputFormat::Json => {
            let range = catalog.quantity_range();
            let listing = CatalogListing {
                units: catalog.units(),
                measures: catalog.measures(),
                min_quantity: *range.start(),
                max_quantity: *range.end(),
            };
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        OutputFormat::Text => print_table(&catalog),
    }

    Ok(())
}

fn print_table(catalog: &Catalog) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    let mut header = vec!["Prefix".to_string(), "Scale".to_string()];
    header.extend(catalog.measures().iter().map(|m| format!("Symbol ({m})")));
    table.set_header(header);

    for unit in catalog.units() {
        let prefix = if unit.is_standard() {
            "(standard)".to_string()
        } else {
            unit.name().to_string()
        };
        let mut row = vec![Cell::new(prefix), Cell::new(unit.scale())];
        row.extend(catalog.measures().iter().map(|m| Cell::new(unit.symbol(m))));
        table.add_row(row);
    }

    let range = catalog.quantity_range();
    println!("{table}");
    println!("Quantities: {} to {}", range.start(), range.end());
}
