pub mod metadata;
pub mod resolver;
pub mod transformer;
pub mod validation;
