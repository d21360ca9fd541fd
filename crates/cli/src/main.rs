use clap::Parser;

use checkout_cli::Args;

fn main() -> anyhow::Result<()> {
    checkout_observability::init();

    let args = Args::parse();
    let report = checkout_cli::run(&args)?;
    print!("{report}");

    Ok(())
}
