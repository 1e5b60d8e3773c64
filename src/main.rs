use anyhow::Result;
use clap::Parser;

use autocompleter::{actions, cli, logging};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(args.log_file.as_deref())?;
    actions::handle(args)
}
