pub mod page_consts;
pub mod relation_consts;
