//! Command handlers, one module per subcommand.

pub mod apply;
pub mod check;
pub mod export;
pub mod import;
pub mod restart;
