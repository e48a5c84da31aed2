pub mod page_types;
pub mod relation_types;
pub mod sig_types;
