use clap::Parser;
use tracing_subscriber::EnvFilter;
use typegen::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let bundle = typegen::run(&args)?;
    for error in bundle.errors() {
        tracing::error!("{}", error);
    }
    if bundle.has_errors() {
        tracing::warn!(
            "generated {} types with {} errors",
            bundle.len(),
            bundle.errors().len()
        );
    }

    Ok(())
}
