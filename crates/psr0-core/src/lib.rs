pub mod config;
pub mod logging;

pub mod chain;
pub mod error;
pub mod include;
pub mod loader;
pub mod search_path;

pub use chain::{Candidate, LoaderChain, Located};
pub use error::LoadError;
pub use include::{FsIncluder, SourceIncluder, SourceUnit};
pub use loader::{ClassLoader, DEFAULT_FILE_EXTENSION, NAMESPACE_SEPARATOR};
pub use search_path::SearchPath;
