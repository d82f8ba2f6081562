pub const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");
