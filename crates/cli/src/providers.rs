use dbscope_core::{ResolverConfig, Result};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Serialize, Tabled)]
struct ProviderRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Enabled")]
    enabled: bool,
    #[tabled(rename = "Description")]
    description: String,
}

pub fn run(config: ResolverConfig, json: bool) -> Result<()> {
    let resolver = dbscope_runtime::build_default_resolver(config, [])?;

    let rows: Vec<ProviderRow> = resolver
        .providers()
        .map(|info| ProviderRow {
            id: info.id.clone(),
            name: info.name.clone(),
            enabled: !resolver.config().is_disabled(&info.id),
            description: info.description.clone().unwrap_or_default(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{}", Table::new(rows));
    }
    Ok(())
}
