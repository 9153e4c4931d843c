//! secretenv - AWS Secrets Manager for your shell.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── inject        # aws -s: run a program or write a file
//! │   ├── secret/       # aws secret create|update|upsert|list|get|delete
//! │   ├── output        # JSON / table rendering, status lines
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── env           # KEY=value parser
//!     ├── scope         # profile/region precedence
//!     ├── source        # --value / --value-stdin / --file
//!     ├── validation    # names, tags, recovery windows
//!     ├── secrets       # vault operations
//!     ├── launcher      # child processes and env files
//!     └── vault/        # SecretsVault trait and AWS backend
//! ```

pub mod cli;
pub mod core;
pub mod error;
