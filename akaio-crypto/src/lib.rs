//! Cryptographic algorithms for aka-io
//!
//! - Milenage kernel E_K (AES-128)
//! - Milenage (f1, f1*, f2, f3, f4, f5, f5*) and resynchronisation tokens

pub mod kernel;
pub mod milenage;

pub use milenage::{AuthOutputs, Milenage, MilenageError};
