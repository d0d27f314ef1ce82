//! Build module documents: the decoded TOML model, the mutations that edit
//! it and the patcher that runs them against files on disk.

pub mod domain;
pub mod mutations;
pub mod services;
