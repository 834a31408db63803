//! Command-line front-end for the `tquiz` binary.

pub mod commands;
