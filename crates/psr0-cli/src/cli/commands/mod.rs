//! CLI command handlers, one per file.

mod completions;
mod load;
mod loaders;
mod resolve;

pub use completions::{run_completions, run_manpage};
pub use load::run_load;
pub use loaders::{run_loaders, write_loaders};
pub use resolve::{run_resolve, write_resolve};
