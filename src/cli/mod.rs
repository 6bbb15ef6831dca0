//! CLI module for the traffic testbench
//!
//! - `serve`: run one bench instance
//! - `resolve`: print the address a peer instance id resolves to

pub mod resolve;
pub mod serve;

use clap::{Parser, Subcommand};

/// Traffic Testbench - synthetic traffic for observability pipelines
#[derive(Parser)]
#[command(name = "traffic-testbench")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a bench instance
    Serve(serve::ServeArgs),

    /// Print the address used to reach an instance
    Resolve(resolve::ResolveArgs),
}
