//! Splits a post source file into its JSON front matter and its content.
//!
//! A file with front matter begins with the JSON object wrapped in an HTML
//! comment:
//!
//! ```html
//! <!--{
//! "Title": "Hello world",
//! "Date": "27 May 12 01:50 -0300",
//! "Tags": ["post"]
//! }-->
//! <p>Body text</p>
//! ```
//!
//! The braces of the delimiters belong to the JSON object. Everything after
//! `}-->` is the content, verbatim.

use crate::metadata::Metadata;
use std::fmt;

/// Opening delimiter. It must appear at byte offset zero.
pub const START: &[u8] = b"<!--{";

/// Closing delimiter. The first occurrence after [`START`] ends the block.
pub const END: &[u8] = b"}-->";

/// Extracts the front matter from `content`. Returns the content that follows
/// the front matter along with the decoded [`Metadata`]. If `content` does not
/// begin with [`START`], it is returned unchanged with no metadata.
pub fn extract(content: &[u8]) -> Result<(&[u8], Option<Metadata>)> {
    let (json_start, json_stop, body_start) = match indices(content)? {
        None => return Ok((content, None)),
        Some(indices) => indices,
    };

    let json = &content[json_start..json_stop];
    match serde_json::from_slice(json) {
        Ok(metadata) => Ok((&content[body_start..], Some(metadata))),
        Err(err) => Err(Error::DecodeMetadata {
            bytes: json.to_vec(),
            err,
        }),
    }
}

// Returns the start and stop of the JSON object (braces included) and the
// start of the body.
fn indices(content: &[u8]) -> Result<Option<(usize, usize, usize)>> {
    if !content.starts_with(START) {
        return Ok(None);
    }
    match find(&content[START.len()..], END) {
        None => Err(Error::MalformedFrontMatter),
        Some(offset) => {
            let end = START.len() + offset;
            Ok(Some((
                START.len() - 1, // the opening `{`
                end + 1,         // just past the closing `}`
                end + END.len(),
            )))
        }
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Represents the result of a front-matter extraction.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error extracting front matter from a file.
#[derive(Debug)]
pub enum Error {
    /// Returned when the file begins with `<!--{` but `}-->` never follows.
    MalformedFrontMatter,

    /// Returned when the front matter is not a valid JSON [`Metadata`]
    /// object. `bytes` holds the offending JSON.
    DecodeMetadata {
        bytes: Vec<u8>,
        err: serde_json::Error,
    },
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MalformedFrontMatter => {
                write!(
                    f,
                    "front matter opened with `<!--{{` is missing its \
                     closing `}}-->`"
                )
            }
            Error::DecodeMetadata { bytes, err } => write!(
                f,
                "decoding front matter {:?}: {}",
                String::from_utf8_lossy(bytes),
                err
            ),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MalformedFrontMatter => None,
            Error::DecodeMetadata { bytes: _, err } => Some(err),
        }
    }
}
