use clap::Parser;

/// quadbatch, a dynamic mesh batching demo.
///
/// Space grows the quad grid, R resets it, Escape quits.
#[derive(Parser, Debug)]
#[command(name = "quadbatch", version, about)]
pub struct Args {
    /// Path to a config file (defaults to the platform config directory).
    #[arg(short, long)]
    pub config: Option<String>,

    /// Tracing filter directive, e.g. `quadbatch=debug`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Issue one draw call per quad instead of one per frame.
    #[arg(long)]
    pub per_quad: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
