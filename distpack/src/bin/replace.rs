use color_eyre::eyre::Result;
use distpack::{cli::ReplaceCli, commands, logging};

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = ReplaceCli::parse_args();
  logging::init(&cli.verbose);

  commands::replace::run(&cli)
}
