use dbscope_core::{ResolverConfig, Result};

pub fn run(config: &ResolverConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
