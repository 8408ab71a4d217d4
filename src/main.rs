use anyhow::Result;
use clap::Parser;
use hita_gomi::cli::Cli;

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with rendered output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hita_gomi=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
