//! Gemcascade (workspace facade crate).
//!
//! This package keeps a single `gemcascade::{core,engine,types}` public
//! API while the implementation lives in dedicated crates under
//! `crates/`.

pub use gemcascade_core as core;
pub use gemcascade_engine as engine;
pub use gemcascade_types as types;
