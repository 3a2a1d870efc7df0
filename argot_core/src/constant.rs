pub(crate) const TRUE_LITERAL: &str = "true";
pub(crate) const FALSE_LITERAL: &str = "false";
pub(crate) const VALUE_SEPARATOR: &str = "=";
pub(crate) const PATH_SEPARATOR: &str = " ";
