pub mod auth;
pub mod gallery;
pub mod images;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// Sanitized filenames only contain [A-Za-z0-9._ -], but encode defensively
// for everything a URL path segment cannot carry.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`');

pub(crate) fn encode_filename(filename: &str) -> String {
    utf8_percent_encode(filename, PATH_SEGMENT).to_string()
}
