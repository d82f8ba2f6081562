pub mod assemble;
pub mod gen_html;
pub mod replace;
