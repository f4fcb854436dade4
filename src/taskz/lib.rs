//! # Taskz Architecture
//!
//! Taskz is a **UI-agnostic task-list library**: the store and its invariants
//! live here, and the `tz` binary is just one client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Translates one request each into store calls             │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - TaskStore: mutex-guarded collection + id sequence        │
//! │  - StorageBackend: FsBackend (production), MemBackend (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! The same core could serve an HTTP front end or any other UI.
//!
//! ## Consistency Contract
//!
//! The store holds the whole collection in memory and rewrites the whole
//! document on every mutation, under one mutex that also covers the disk
//! write. After any successful mutating call, reloading from disk yields
//! exactly what `all()` returns. The one deliberate exception: when the disk
//! write itself fails, the in-memory mutation is kept and the error surfaces
//! to the caller. Memory then runs ahead of disk until the next successful
//! persist.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Request-layer logic for each operation
//! - [`store`]: The task store, its locking discipline, and backends
//! - [`model`]: Core data types (`Item`, `Priority`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
