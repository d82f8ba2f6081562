//! Library side of the `assemble`, `gen_html` and `replace` binaries.
//!
//! Each binary parses its own CLI struct from [`cli`], sets up logging and
//! hands off to the matching runner in [`commands`].
pub mod cli;
pub mod commands;
pub mod logging;
