/// Classification of one unit of input, as produced by the outer
/// record reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    /// A complete logical line, terminated by a hard line break
    Normal,
    /// A fragment of a logical line. The rest of the line follows
    /// in subsequent records.
    Continuation,
    /// Any other record; ends the message text
    EndOfMessage,
}

impl RecordType {
    pub fn is_text(self) -> bool {
        matches!(self, Self::Normal | Self::Continuation)
    }
}
