pub mod assemble;
pub mod error;
pub mod fs;
pub mod substitute;

pub use assemble::{AssembleReport, assemble};
pub use error::FsError;
pub use substitute::render_template_file;
