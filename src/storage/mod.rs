pub mod bits;
pub mod page;
pub mod page_header;
pub mod paged_file;
