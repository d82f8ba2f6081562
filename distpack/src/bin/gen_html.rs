use color_eyre::eyre::Result;
use distpack::{cli::GenHtmlCli, commands, logging};

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = GenHtmlCli::parse_args();
  logging::init(&cli.verbose);

  commands::gen_html::run(&cli)?;
  Ok(())
}
