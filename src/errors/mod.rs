pub mod relation_error;
