/// The subset of header semantics that the MIME state machine
/// dispatches on. Everything that is not a Content-* header we
/// act on is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    ContentType,
    ContentTransferEncoding,
    Other,
}

/// Descriptor for a message header that an MTA knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderOpts {
    pub name: &'static str,
    pub kind: HeaderKind,
}

const fn opt(name: &'static str, kind: HeaderKind) -> HeaderOpts {
    HeaderOpts { name, kind }
}

static KNOWN_HEADERS: &[HeaderOpts] = &[
    opt("Bcc", HeaderKind::Other),
    opt("Cc", HeaderKind::Other),
    opt("Content-Description", HeaderKind::Other),
    opt("Content-Disposition", HeaderKind::Other),
    opt("Content-Id", HeaderKind::Other),
    opt("Content-Transfer-Encoding", HeaderKind::ContentTransferEncoding),
    opt("Content-Type", HeaderKind::ContentType),
    opt("Date", HeaderKind::Other),
    opt("From", HeaderKind::Other),
    opt("Message-Id", HeaderKind::Other),
    opt("Mime-Version", HeaderKind::Other),
    opt("Received", HeaderKind::Other),
    opt("Reply-To", HeaderKind::Other),
    opt("Resent-Bcc", HeaderKind::Other),
    opt("Resent-Cc", HeaderKind::Other),
    opt("Resent-Date", HeaderKind::Other),
    opt("Resent-From", HeaderKind::Other),
    opt("Resent-Message-Id", HeaderKind::Other),
    opt("Resent-Sender", HeaderKind::Other),
    opt("Resent-To", HeaderKind::Other),
    opt("Return-Path", HeaderKind::Other),
    opt("Sender", HeaderKind::Other),
    opt("Subject", HeaderKind::Other),
    opt("To", HeaderKind::Other),
];

/// Look up the descriptor for an assembled `Name: value` header.
/// The match on the name is ASCII case-insensitive.
pub fn header_opts_find(header: &[u8]) -> Option<&'static HeaderOpts> {
    let colon = header.iter().position(|&b| b == b':')?;
    let name = &header[..colon];
    KNOWN_HEADERS
        .iter()
        .find(|opts| name.eq_ignore_ascii_case(opts.name.as_bytes()))
}

/// Returns the length of the header name when `text` begins with a
/// valid RFC 822 header label, or 0 when it does not.
///
/// A label is one or more printable ASCII characters followed by a
/// colon. Whitespace may separate the name from the colon (the
/// obsolete `name :` form); the returned length never includes it.
pub fn is_header(text: &[u8]) -> usize {
    let mut len = 0;
    let mut saw_space = false;
    for &c in text {
        if c == b':' {
            return if len > 0 { len } else { 0 };
        }
        if !c.is_ascii() || c.is_ascii_whitespace() {
            if len == 0 {
                return 0;
            }
            saw_space = true;
        } else {
            if saw_space {
                return 0;
            }
            len += 1;
        }
    }
    0
}
