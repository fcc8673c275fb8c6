//! Command handlers. The tool has a single command: generate a monorepo.

pub mod generate;
