//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule orchestrates between:
//! - Model state (pure, in the library's `model`)
//! - The load service (via `api_tx`)
//! - Logic (pure business logic in the library's `logic`)
//!
//! Methods are kept as `impl App` but organized by functional domain.

pub(crate) mod file_ops;
pub(crate) mod navigation;
