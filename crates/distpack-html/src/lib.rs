pub mod bundle;
pub mod markup;
pub mod template;

pub use bundle::{BundleReport, generate_bundle};
pub use markup::{AssetKind, Markup, asset_url};
