//! # Tagcheck Architecture
//!
//! Tagcheck answers one question about a corpus of DICOM files: *what values
//! does tag X ever take?* It walks a directory tree, decodes every candidate
//! file, looks up a curated list of tags and reports each distinct value once.
//!
//! Like most of our tools it is a library with a thin CLI client.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, picks the report sink, sets up logging │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Holds decoder, walker and registry for a run             │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/)                                  │
//! │  - scan: walk, decode, extract, aggregate                   │
//! │  - report: render a TagTable to any io::Write               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Decoder Layer (decoder/)                                   │
//! │  - Abstract Decoder/Record traits                           │
//! │  - DicomDecoder (production), InMemoryDecoder (testing)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//!
//! Only a missing root, a malformed tag list, a bad config file or an
//! unwritable output abort a run. A file that fails to decode is logged and
//! skipped; an absent or empty tag is not an error at all.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Scan and report commands
//! - [`decoder`]: Decoder abstraction and implementations
//! - [`table`]: The aggregation table
//! - [`walker`]: Directory traversal
//! - [`registry`]: The tag list
//! - [`extract`]: Per-record tag lookup
//! - [`filter`]: Candidate file matching
//! - [`config`]: Configuration file
//! - [`model`]: Tag identities
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod decoder;
pub mod error;
pub mod extract;
pub mod filter;
pub mod model;
pub mod registry;
pub mod table;
pub mod walker;
