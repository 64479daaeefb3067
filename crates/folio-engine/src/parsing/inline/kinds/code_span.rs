/// Code span inline type with owned delimiter constant.
///
/// On the homepage a line made only of code spans is a tag list:
/// `` `Rust` `Tokio` ``.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
