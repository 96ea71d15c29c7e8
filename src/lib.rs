pub mod ast;
pub mod config;
pub mod depth;
pub mod errors;
pub mod logger;
pub mod printer;
pub mod stats;
pub mod teardown;
pub mod token;
pub mod utils;
pub mod visiters;

pub const VERSION: &str = "0.1.0";

pub use ast::{Node, NodeKind, Teardown};
pub use config::TreeConfig;
pub use errors::{TreeError, TreeResult};
