//! # Cardz Architecture
//!
//! Cardz keeps a **forest of cards** (named nodes with a subtitle, a link and
//! nested children) in a single JSON document, and answers keyword searches
//! against it through a derived inverted index. It is a library first; the
//! `cardz` binary is one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, shared.rs)                              │
//! │  - Thin facade over commands, owns the index cache          │
//! │  - SharedCardz serializes access across threads             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create / update / delete / list / view / search / doctor │
//! │  - Every mutation ends with save + index rebuild            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (tree.rs, index.rs, search.rs)                        │
//! │  - Pure functions over `Forest`                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract TreeStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Search Index
//!
//! The index maps lowercase words to the cards whose name or subtitle contain
//! them, each with its slash-joined ancestry path. It is never persisted: it is
//! rebuilt from the forest after every mutation and whenever the whole forest is
//! rendered, and built on demand if a search arrives first. See `index.rs`.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, core, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr (diagnostics go through `tracing`)
//! - **Never** calls `std::process::exit`
//!
//! ## Testing Strategy
//!
//! 1. **Core and commands**: unit tests next to the code, against `InMemoryStore`
//!    and the `StoreFixture` builder.
//! 2. **API** (`api.rs`): dispatch tests, checking that configuration reaches the
//!    commands.
//! 3. **CLI** (`tests/`): end-to-end runs of the binary with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`shared`]: Thread-safe wrapper around the API
//! - [`commands`]: Business logic for each command
//! - [`tree`]: Forest traversal and surgery
//! - [`index`]: Tokenizer and inverted index
//! - [`search`]: Query parsing, scoring, ranking
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Card`, `Forest`, `CardDraft`, `CardPatch`)
//! - [`config`]: Configuration management
//! - [`init`]: Locating the store and wiring a `CardzApi`
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod search;
pub mod shared;
pub mod store;
pub mod tree;
