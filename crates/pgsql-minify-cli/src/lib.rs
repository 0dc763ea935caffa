//! Command-line front end for `pgsql-minify-core`.
//!
//! Reads one SQL statement from a file or stdin and prints either its
//! minified form or its token stream.
//!
//! # CLI Usage
//!
//! ```bash
//! # Minify a statement from stdin
//! echo "SELECT  a ,b FROM t ;" | pgsql-minify minify
//!
//! # Keep comments and drop the trailing semicolon
//! pgsql-minify minify --comments --no-trailing-semicolon query.sql
//!
//! # Dump tokens as JSON using a custom keyword list
//! pgsql-minify --keywords words.txt tokens --json query.sql
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use config::Config;
pub use error::{CliError, Result};
