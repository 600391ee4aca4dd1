use pulldown_cmark::{html, Options, Parser};
use std::fmt;
use std::str::Utf8Error;

/// Converts a post's content to HTML. The content may mix markdown and raw
/// HTML; raw HTML is passed through untouched.
pub fn to_html(content: &[u8]) -> Result<String, Error> {
    let markdown = std::str::from_utf8(content)?;

    let mut options = Options::empty();
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, Parser::new_ext(markdown, options));
    Ok(output)
}

/// Represents an error converting markdown to HTML.
#[derive(Debug)]
pub enum Error {
    /// Returned when the content is not valid UTF-8.
    Utf8(Utf8Error),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Utf8(err) => write!(f, "content is not UTF-8: {}", err),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Utf8(err) => Some(err),
        }
    }
}

impl From<Utf8Error> for Error {
    /// Converts a [`Utf8Error`] into an [`Error`]. It allows us to use the `?`
    /// operator on [`std::str::from_utf8`].
    fn from(err: Utf8Error) -> Error {
        Error::Utf8(err)
    }
}
