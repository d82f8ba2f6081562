use color_eyre::eyre::Result;
use distpack::{cli::AssembleCli, commands, logging};

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = AssembleCli::parse_args();
  logging::init(&cli.verbose);

  commands::assemble::run(&cli)?;
  Ok(())
}
