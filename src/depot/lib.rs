//! # Depot Architecture
//!
//! Depot is a **UI-agnostic file-depot library**: a fixed catalog of folder
//! namespaces holding opaque-named blobs, with fuzzy filename resolution and
//! paginated search on top. The bundled CLI is just one client; a chat bot or
//! any other front end drives the same API.
//!
//! ## The Layers
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs + args.rs)                                     │
//! │  - Parses arguments, formats output, owns exit codes         │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  API Facade (api.rs)                                         │
//! │  - Depot<S: FolderStore>: catalog init, input policy,        │
//! │    query history; returns structured Result types           │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                               │
//! │  - resolve: exact-then-partial, fail-closed on ambiguity     │
//! │  - search: paginated substring match + similarity fallback   │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                      │
//! │  - FolderStore trait                                         │
//! │  - DirStore (production), InMemoryStore (testing)            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns plain Rust
//! types, never writes to stdout/stderr, and never exits the process.
//!
//! ## Concurrency
//!
//! There is no locking. Concurrent saves to the same name are
//! last-writer-wins; a save racing a folder delete may recreate the folder
//! holding only the new file (`save_file` self-heals missing folders). File
//! lists are re-enumerated on every call; results reflect the store at call
//! time, not a snapshot.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: resolution and search logic
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: core types (`FileHandle`, `MatchEntry`, `SearchRequest`, …)
//! - [`similarity`]: the pinned string-similarity ratio
//! - [`history`]: bounded, advisory query history
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod model;
pub mod similarity;
pub mod store;
