pub mod io;
pub mod layout;
pub mod validate;
