//! CLI command handlers, one file per subcommand.

mod batch;
mod fetch;

pub use batch::run_batch;
pub use fetch::run_fetch;
