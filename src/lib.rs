//! # filelist
//!
//! A persistent, ordered list of `(value, comment)` pairs backed by a flat
//! text file:
//! - One item per line, inline comments after `//`
//! - Blank and comment-only lines ignored on load
//! - O(1) existence checks next to ordered iteration
//! - Change tracking (`changed`, `last_modified`) since the last load/save
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  FileList                   │
//! │   items (Vec)  +  index (HashMap)  + meta   │
//! └───────────┬─────────────────────▲───────────┘
//!        save │                     │ load
//!             ▼                     │
//! ┌─────────────────────┐ ┌─────────┴───────────┐
//! │  codec::format_line │ │  codec::parse_line  │
//! └──────────┬──────────┘ └─────────▲───────────┘
//!            ▼                      │
//! ┌─────────────────────┐ ┌─────────┴───────────┐
//! │  file::LineWriter   │ │  file::LineReader   │
//! │ (\r or \r\n ending) │ │ (\r, \n split)      │
//! └─────────────────────┘ └─────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use filelist::FileList;
//!
//! # fn main() -> filelist::Result<()> {
//! let mut list = FileList::new();
//! list.add("alpha", "first");
//! list.add_once("beta", "");
//! list.save("list.txt")?;
//!
//! let loaded = FileList::load("list.txt")?;
//! assert_eq!(loaded.get_comment("alpha"), "first");
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod item;
pub mod codec;
pub mod file;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FileListError, Result};
pub use config::{Config, LineEnding};
pub use item::Item;
pub use store::FileList;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of filelist
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
