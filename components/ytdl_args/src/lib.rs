// components/ytdl_args/src/lib.rs
//! Renders a feed's download policy into the command line of an external
//! youtube-dl compatible downloader.
//!
//! The downloader treats its `--format` value as a small language with
//! left-to-right fallback, so the order of everything returned here matters.
mod args;
mod error;
mod selector;
mod types;

pub use args::build_args;
pub use error::ParseError;
pub use selector::{height_cap, video_selector, Clause, Selector};
pub use types::{CustomFormat, DownloadConfig, Episode, Format, Quality, Tier};
