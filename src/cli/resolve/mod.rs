//! Resolve command - prints where a chain hop to an instance would go

use clap::Args;

use crate::config::AppConfig;
use crate::domain::{InstanceId, InstanceResolver};

/// Arguments for the resolve command
#[derive(Args, Clone, Debug)]
pub struct ResolveArgs {
    /// Instance id to resolve
    pub id: InstanceId,
}

/// Print the base address for `args.id` under the current configuration
pub fn run(args: ResolveArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    let resolver = crate::naming_resolver(&config);

    println!("{}", resolver.resolve(args.id)?);

    Ok(())
}
