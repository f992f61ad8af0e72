//! Backend services.
//!
//! # Services
//!
//! - [`upload`] - Dataset upload to the DataPolish preview endpoints

pub mod upload;

pub use upload::*;
