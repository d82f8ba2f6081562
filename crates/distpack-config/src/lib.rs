pub mod bundle;
pub mod error;
pub mod substitutions;

pub use bundle::{AssetSources, Bundle, BundleConfig};
pub use error::ConfigError;
pub use substitutions::{Substitution, Substitutions};
