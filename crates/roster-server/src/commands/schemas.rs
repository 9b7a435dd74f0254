use anyhow::{Context, bail};

use roster_schema::SchemaRegistry;

use crate::cli::SchemasArgs;

/// Handle `roster schemas`.
pub fn handle(args: &SchemasArgs) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new().context("failed to build schema registry")?;

    match &args.name {
        Some(name) => {
            let Some(document) = registry.get(name) else {
                bail!("unknown schema '{name}' (known: {})", registry.list().join(", "));
            };
            let pretty = serde_json::to_string_pretty(document)
                .context("failed to render schema document")?;
            println!("{pretty}");
        }
        None => {
            for name in registry.list() {
                println!("{name}");
            }
        }
    }
    Ok(())
}
