//! # patch_robot
//!
//! Batch-patches HTML files in place, inserting a robots meta line
//! immediately after the `<head>` opening line so crawlers neither index
//! the page nor follow its links.
//!
//! The crate is a library with a thin CLI binary on top:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (args.rs + main.rs, binary only)                       │
//! │  - Parses paths, prints leveled messages, picks exit code   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Batch layer (batch.rs)                                     │
//! │  - Applies the patcher to each path independently           │
//! │  - Continue-on-error; returns structured outcomes/messages  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Patcher (patcher.rs)                                       │
//! │  - Read bytes, decode UTF-8, insert, write back in place    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Line layer (lines.rs)                                      │
//! │  - Pure, terminator-preserving line ops; exact anchor match │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `batch` inward, code never writes to stdout/stderr and never
//! calls `std::process::exit`; everything is a regular `Result` so the
//! same core could drive any other frontend.
//!
//! Deliberate limits: no HTML parsing (the anchor is an exact literal
//! line), no guard against double application, no atomic write, and no
//! cross-file transaction in a batch.
//!
//! ## Module Overview
//!
//! - [`batch`]: batch driver and structured report
//! - [`patcher`]: per-file read/insert/write operation
//! - [`lines`]: terminator-preserving line operations
//! - [`error`]: error types

pub mod batch;
pub mod error;
pub mod lines;
pub mod patcher;
