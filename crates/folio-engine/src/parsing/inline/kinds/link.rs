/// Markdown link `[text](url)` delimiters.
pub struct Link;

impl Link {
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
}

/// Markdown image `![alt](url)`: a link prefixed with a bang.
pub struct Image;

impl Image {
    pub const OPEN: &'static [u8; 2] = b"![";
}
