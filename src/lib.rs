pub mod consts;
pub mod errors;
pub mod params;
pub mod relation;
pub mod sig;
pub mod stats;
pub mod storage;
pub mod tuple;
pub mod types;
