//! # Studygen Architecture
//!
//! Studygen is a **UI-agnostic document-generation library** with a thin CLI
//! client. Given a set of study-guide markdown topic files it produces two
//! artifacts: a consolidated printable guide and a flashcard deck derived from
//! pattern-catalog sections.
//!
//! ## Layers
//!
//! ```text
//! CLI (src/main.rs + src/args.rs)
//!   - argument parsing, colored output, exit codes
//!   - the ONLY place that knows about stdout/stderr
//!         │
//! API (api.rs)
//!   - thin facade, dispatches to commands, returns Result<CmdResult>
//!         │
//! Commands (commands/*.rs)
//!   - orchestration per generator: load → transform → write
//!   - returns structured messages, no terminal I/O
//!         │
//! Core (model, loader, manifest, guide, extract, flashcards, output)
//!   - pure transforms over immutable Documents
//! ```
//!
//! ## Data flow
//!
//! ```text
//! sources ──loader──► Vec<Document> ──guide────► printable guide ──output──► file
//!                          │
//!                          └──extract──► PatternRecords ──flashcards──► deck ──output──► file
//! ```
//!
//! Every run builds a fresh in-memory model and discards it after writing; no
//! component retains state across invocations or mutates its inputs. Output is
//! deterministic: ordering always comes from the manifest (or the explicit
//! source list), never from directory iteration.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade — entry point for all operations
//! - [`commands`]: orchestration and result/message types
//! - [`model`]: `Document`, `FrontMatter`, `Section`, markdown splitting
//! - [`loader`]: ordered source loading
//! - [`manifest`]: aggregation ordering configuration
//! - [`guide`]: the aggregator (TOC, heading demotion)
//! - [`extract`]: the pattern extractor (lazy section scan)
//! - [`flashcards`]: the card renderer
//! - [`output`]: atomic output writes
//! - [`error`]: error taxonomy

pub mod api;
pub mod commands;
pub mod error;
pub mod extract;
pub mod flashcards;
pub mod guide;
pub mod loader;
pub mod manifest;
pub mod model;
pub mod output;
