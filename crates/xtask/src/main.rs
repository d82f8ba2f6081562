use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand};
use clap_complete::{generate_to, shells};
use clap_mangen::Man;
use distpack::cli::{AssembleCli, GenHtmlCli, ReplaceCli};

#[derive(Parser)]
#[command(author, version, about)]
struct Xtask {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build distribution artifacts for the distpack tools
  Dist {
    /// Output directory for generated files.
    #[arg(short, long, default_value = "dist", value_parser = clap::value_parser!(std::path::PathBuf))]
    output_dir: PathBuf,

    /// Only generate shell completions.
    #[arg(long, conflicts_with = "manpage_only")]
    completions_only: bool,

    /// Only generate manpages.
    #[arg(long, conflicts_with = "completions_only")]
    manpage_only: bool,
  },
}

/// Every binary shipped by the distpack package.
fn tool_commands() -> [Command; 3] {
  [
    AssembleCli::command(),
    GenHtmlCli::command(),
    ReplaceCli::command(),
  ]
}

fn main() -> Result<()> {
  let xtask = Xtask::parse();

  match xtask.command {
    Commands::Dist {
      output_dir,
      completions_only,
      manpage_only,
    } => {
      for cmd in tool_commands() {
        if completions_only {
          generate_completions(cmd, &output_dir)?;
        } else if manpage_only {
          generate_manpage(cmd, &output_dir)?;
        } else {
          generate_completions(cmd.clone(), &output_dir)?;
          generate_manpage(cmd, &output_dir)?;
        }
      }
    },
  }

  Ok(())
}

/// Generate shell completions for various shells.
fn generate_completions(mut cmd: Command, output_dir: &Path) -> Result<()> {
  let completions_dir = output_dir.join("completions");
  fs::create_dir_all(&completions_dir)?;
  let name = cmd.get_name().to_string();
  generate_to(shells::Bash, &mut cmd, &name, &completions_dir)?;
  generate_to(shells::Zsh, &mut cmd, &name, &completions_dir)?;
  generate_to(shells::Fish, &mut cmd, &name, &completions_dir)?;
  generate_to(shells::PowerShell, &mut cmd, &name, &completions_dir)?;
  println!(
    "Shell completions for {name} generated in {}",
    completions_dir.display()
  );
  Ok(())
}

/// Generate a manpage for one tool.
fn generate_manpage(cmd: Command, output_dir: &Path) -> Result<()> {
  let man_dir = output_dir.join("man");
  fs::create_dir_all(&man_dir)?;
  let name = cmd.get_name().to_string();
  let man = Man::new(cmd);
  let file_path = man_dir.join(format!("{name}.1"));
  let mut file = fs::File::create(&file_path).with_context(|| {
    format!("Failed to create manpage file at {}", file_path.display())
  })?;
  man
    .render(&mut file)
    .with_context(|| format!("Failed to render manpage for {name}"))?;
  println!("Manpage for {name} generated in {}", man_dir.display());
  Ok(())
}
