pub mod error;
pub mod model;
pub mod ops;
pub mod storage;
