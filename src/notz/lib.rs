//! # Notz Architecture
//!
//! Notz is a **UI-agnostic note-taking library**. The interactive shell that
//! ships with it is just one client; the library never assumes a terminal.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell Layer (main.rs + args.rs)                            │
//! │  - Parses input lines, formats output, owns stdout/stderr   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (display indexes → note ids)           │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract NoteStore trait                                 │
//! │  - MemoryStore: ordered, in-memory, nothing persisted       │
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
//! User feedback is data: commands return [`commands::CmdMessage`] values and
//! the shell decides how to render them. A rejected `add` is a message, not
//! an error — the user fixes the input and tries again.
//!
//! ## Notes Are Ephemeral
//!
//! The store is in-memory only. Notes live for the duration of one shell
//! session and are gone at process exit. There is no file format, no config,
//! no state outside the running process.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: The core data type ([`model::Note`])
//! - [`validate`]: Input validation for new notes
//! - [`index`]: 1-based display indexing over the note list
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
pub mod validate;
