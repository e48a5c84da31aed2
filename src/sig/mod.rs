pub mod bsig;
pub mod psig;
pub mod tsig;
