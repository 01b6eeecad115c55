//! # tieq - Inline-directive translation CLI
//!
//! `tieq` translates a line of text through the Google Translate web endpoint
//! and prints a one-line JSON summary. The source and target languages are
//! picked with an inline directive anywhere in the text.
//!
//! ## Features
//!
//! - **Inline directives**: `[from>to]`, `[from]` or `[>to]` inside the text
//! - **JSON output**: one record per invocation, ready for piping
//! - **Tiếq Việt**: Vietnamese to Vietnamese requests are respelled locally
//!
//! ## Quick Start
//!
//! ```bash
//! # Auto-detect the source, translate to Vietnamese
//! tieq good morning
//!
//! # Explicit pair
//! tieq "hello [en>fr]"
//!
//! # Vietnamese source defaults to English
//! tieq "xin chào [vi]"
//!
//! # Respell Vietnamese
//! tieq "Tiếng Việt [vi>vi]"
//! ```
//!
//! ## Output
//!
//! ```json
//! {"text":"bonjour","from":"English","to":"French"}
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Domain error types and exit code mapping.
pub mod error;

/// Input reading from arguments and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, verbosity).
pub mod output;

/// Tiếq Việt phonetic respelling.
pub mod tieq;

/// Directive parsing, language table and the translation service client.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
