//! The library code for the `rafall` static site generator. Posts are HTML
//! (or markdown) source files that begin with a JSON front-matter block
//! wrapped in an HTML comment. Building a site starts with collecting the
//! posts:
//!
//! 1. Timestamps in front matter are parsed by [`crate::time`]
//! 2. Each source file is split into [`crate::metadata::Metadata`] and content
//!    by [`crate::frontmatter`]
//! 3. The [`crate::build::Generator`] gathers the posts into a
//!    [`crate::filelist::FileList`] and sorts it by date
//!
//! The sorted list is then traversed in order, with each post's content
//! rendered through [`crate::markdown`].

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod build;
pub mod config;
pub mod filelist;
pub mod frontmatter;
pub mod markdown;
pub mod metadata;
pub mod time;
mod util;
