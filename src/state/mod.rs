//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `notice`) and kept free of browser
//! types so transitions can be unit tested off-wasm.

pub mod notice;
pub mod theme;
