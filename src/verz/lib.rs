//! # Verz Architecture
//!
//! Verz is a **UI-agnostic verse-browsing library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (wired by main.rs, args.rs, browse.rs)           │
//! │  - Parses arguments, draws pages, handles terminal I/O      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Browser Layer (browser.rs)                                 │
//! │  - The one controller instance: corpus + cursor + highlight │
//! │  - Dispatches named Actions to command functions            │
//! │  - Returns structured Result types (CmdResult)              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure browsing logic: paging, search, random pick         │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (source/)                                     │
//! │  - Abstract CorpusSource trait                              │
//! │  - FileSource (production), InMemorySource (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `browser.rs` inward (browser, commands, sources), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`CmdResult`, `Result<T>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The same core drives both the one-shot subcommands and the interactive
//! full-screen mode, and could drive any other UI unchanged.
//!
//! ## State Model
//!
//! The corpus is loaded exactly once and never mutated. The only mutable
//! state is the cursor (the current chapter index) and the active search
//! highlight, both owned by the single [`browser::Browser`] instance. Every
//! operation re-renders the whole page; at these data sizes there is no
//! reason for incremental rendering.
//!
//! ## Module Overview
//!
//! - [`browser`]: The controller—entry point for all operations
//! - [`commands`]: Pure logic for paging, navigation, search, random pick
//! - [`source`]: Corpus loading abstraction and implementations
//! - [`model`]: Core data types (`Corpus`, `Chapter`, `Row`, `VerseRef`)
//! - [`sanitize`]: Markup escaping for query input
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod browser;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod sanitize;
pub mod source;
