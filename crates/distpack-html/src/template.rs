use std::fs;

use color_eyre::eyre::{Context, Result};
use distpack_config::Bundle;
use distpack_templates::INDEX_TEMPLATE;
use tera::Tera;

use crate::markup::Markup;

const TEMPLATE_NAME: &str = "index";

/// Render the bundle's `index.html`.
///
/// Uses the bundle's custom template when one is configured and the embedded
/// one otherwise. Values are inserted verbatim: autoescaping is off, so any
/// markup in the title, header or content ends up in the document as is.
///
/// # Errors
///
/// Returns an error if the custom template cannot be read, parsed or
/// rendered.
pub fn render(bundle: &Bundle, markup: &Markup) -> Result<String> {
  let template_content = match &bundle.template_path {
    Some(path) => {
      log::debug!("Using custom index template {}", path.display());
      fs::read_to_string(path).wrap_err_with(|| {
        format!("Failed to read template: {}", path.display())
      })?
    },
    None => INDEX_TEMPLATE.to_string(),
  };

  let mut tera = Tera::default();
  tera.autoescape_on(vec![]);
  tera
    .add_raw_template(TEMPLATE_NAME, &template_content)
    .wrap_err("Failed to parse index template")?;

  let mut tera_context = tera::Context::new();
  tera_context.insert("title", &bundle.title);
  tera_context.insert("header", &bundle.header);
  tera_context.insert("content", &bundle.content);
  tera_context.insert("head_content", &markup.head_content());
  tera_context.insert("body_content", &markup.body_content());
  tera_context.insert("stylesheets", markup.stylesheets());
  tera_context.insert("scripts", markup.scripts());
  tera_context.insert("preloads", markup.preloads());

  tera
    .render(TEMPLATE_NAME, &tera_context)
    .wrap_err("Failed to render index template")
}
