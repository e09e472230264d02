use crate::{
    header_opts_find, header_token, is_header, ContentSubtype, ContentTransferEncoding,
    ContentType, EncodingDomain, HeaderKind, HeaderOpts, HeaderToken, HeaderTokenKind,
    MimeStateError, RecordType, Result, RFC2045_TSPECIALS,
};
use bstr::BString;
use serde::Deserialize;
use std::str::FromStr;

/// Tokens per attribute when lexing a structured header value
const MAX_TOKEN: usize = 3;

bitflags::bitflags! {
    /// Processing options, fixed at construction time.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct MimeOptions: u32 {
        /// Pay no attention to Content-* headers; switch to body
        /// state at the end of the primary message headers.
        const DISABLE_MIME = 0b0000_0001;
        /// Record `MimeErrors::TRUNC_HEADER` when a logical header
        /// exceeds the header limit.
        const REPORT_TRUNC_HEADER = 0b0000_0010;
        /// Record `MimeErrors::EIGHT_BIT_IN_HEADER` when a header
        /// contains a byte with the high bit set.
        const REPORT_8BIT_IN_HEADER = 0b0000_0100;
        /// Record `MimeErrors::EIGHT_BIT_IN_7BIT_BODY` when a body
        /// that is declared (or defaults to) 7bit contains a byte
        /// with the high bit set.
        const REPORT_8BIT_IN_7BIT_BODY = 0b0000_1000;
        /// Record `MimeErrors::ENCODING_DOMAIN` when a message or
        /// multipart entity declares a transformation instead of an
        /// encoding domain.
        const REPORT_ENCODING_DOMAIN = 0b0001_0000;
        /// Descend into every message/* subpart, not just
        /// message/rfc822. Cannot be combined with DOWNGRADE.
        const RECURSE_ALL_MESSAGE = 0b0010_0000;
        /// Rewrite content that claims to be 8-bit as
        /// quoted-printable, replacing the Content-Transfer-Encoding
        /// headers accordingly.
        const DOWNGRADE = 0b0100_0000;
    }
}

impl FromStr for MimeOptions {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, String> {
        let mut result = Self::default();
        for ele in s.split('|') {
            if ele.is_empty() {
                continue;
            }
            match Self::from_name(ele) {
                Some(v) => {
                    result = result.union(v);
                }
                None => {
                    let mut possible: Vec<String> = Self::all()
                        .iter_names()
                        .map(|(name, _)| format!("'{name}'"))
                        .collect();
                    possible.sort();
                    let possible = possible.join(", ");
                    return Err(format!(
                        "invalid MimeOptions flag '{ele}', possible values are {possible}"
                    ));
                }
            }
        }
        Ok(result)
    }
}

impl ToString for MimeOptions {
    fn to_string(&self) -> String {
        let mut names: Vec<&str> = self.iter_names().map(|(name, _)| name).collect();
        names.sort();
        names.join("|")
    }
}

bitflags::bitflags! {
    /// Structural violations observed so far. The mask only ever
    /// grows over the lifetime of a parser.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct MimeErrors: u8 {
        const TRUNC_HEADER = 0b0000_0001;
        const NESTING = 0b0000_0010;
        const EIGHT_BIT_IN_HEADER = 0b0000_0100;
        const EIGHT_BIT_IN_7BIT_BODY = 0b0000_1000;
        const ENCODING_DOMAIN = 0b0001_0000;
    }
}

impl MimeErrors {
    /// Returns the message for what we deem the most serious error
    /// in the mask. Calling this on an empty mask is a bug in the
    /// caller.
    pub fn worst(self) -> &'static str {
        if self.contains(Self::NESTING) {
            return "MIME nesting exceeds safety limit";
        }
        if self.contains(Self::TRUNC_HEADER) {
            return "message header was truncated";
        }
        if self.contains(Self::EIGHT_BIT_IN_HEADER) {
            return "improper use of 8-bit data in message header";
        }
        if self.contains(Self::EIGHT_BIT_IN_7BIT_BODY) {
            return "improper use of 8-bit data in message body";
        }
        if self.contains(Self::ENCODING_DOMAIN) {
            return "invalid message/* or multipart/* encoding domain";
        }
        panic!("MimeErrors::worst: no error bits are set");
    }
}

/// Resource limits that bound what an adversarial message can make
/// the parser store.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct MimeLimits {
    /// Maximum size of one logical header, in bytes. Text beyond
    /// the limit is discarded.
    pub header_limit: usize,
    /// Maximum multipart nesting depth.
    pub max_depth: usize,
    /// Maximum stored size of a boundary string, in bytes.
    /// Delimiter matching is by prefix, so a truncated boundary
    /// still finds every delimiter line.
    pub boundary_limit: usize,
}

impl Default for MimeLimits {
    fn default() -> Self {
        Self {
            header_limit: 102_400,
            max_depth: 20,
            boundary_limit: 2048,
        }
    }
}

/// Where a message header was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderClass {
    /// In the primary message header section
    Primary,
    /// In the header section after a multipart boundary
    Multipart,
    /// At the start of a nested (e.g. message/rfc822) message
    Nested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    PrimaryHeader,
    MultipartHeader,
    NestedHeader,
    Body,
}

impl ParseState {
    fn header_class(self) -> HeaderClass {
        match self {
            Self::PrimaryHeader => HeaderClass::Primary,
            Self::MultipartHeader => HeaderClass::Multipart,
            Self::NestedHeader => HeaderClass::Nested,
            Self::Body => unreachable!("no headers are parsed in body state"),
        }
    }
}

/// The output side of the state machine. Sinks are invoked inline
/// from `update`, on the calling thread, in input order.
pub trait MimeSink {
    /// Receives each reassembled logical header. A folded header
    /// arrives as one chunk with embedded newlines; breaking it back
    /// into records is the sink's business. The buffer may be
    /// modified, but must not be retained past the call.
    fn head_out(
        &mut self,
        class: HeaderClass,
        opts: Option<&'static HeaderOpts>,
        buf: &mut BString,
    );

    /// Called once, after the last header of the primary header
    /// block.
    fn head_end(&mut self) {}

    /// Receives unmodified body records, or the result of the 8-bit
    /// to 7-bit conversion.
    fn body_out(&mut self, rec_type: RecordType, text: &[u8]);

    /// Called when the record that ends the message text is seen.
    /// This is the last opportunity to emit pending output.
    fn body_end(&mut self) {}
}

struct BoundaryEntry {
    boundary: BString,
    def_ctype: ContentType,
    def_stype: ContentSubtype,
}

/// A one-pass MIME processor with optional 8-bit to quoted-printable
/// conversion.
///
/// The machine starts out expecting text/plain 7-bit content, the
/// RFC default when no MIME headers are present. It is driven one
/// record at a time through [`update`](Self::update) and reports
/// structural violations by accumulating [`MimeErrors`] rather than
/// failing; malformed input is always recovered from locally.
pub struct MimeState<S: MimeSink> {
    state: ParseState,
    ctype: ContentType,
    stype: ContentSubtype,
    encoding: ContentTransferEncoding,
    domain: EncodingDomain,
    /// Assembles one logical header at a time while in a header
    /// state, and holds the pending quoted-printable output line
    /// while in body state
    output_buffer: BString,
    prev_rec_type: Option<RecordType>,
    stack: Vec<BoundaryEntry>,
    tokens: Vec<HeaderToken>,
    token_buffer: BString,
    errors: MimeErrors,
    options: MimeOptions,
    limits: MimeLimits,
    sink: S,
}

impl<S: MimeSink> MimeState<S> {
    pub fn new(options: MimeOptions, limits: MimeLimits, sink: S) -> Result<Self> {
        if options.contains(MimeOptions::RECURSE_ALL_MESSAGE)
            && options.contains(MimeOptions::DOWNGRADE)
        {
            return Err(MimeStateError::IncompatibleOptions);
        }
        Ok(Self {
            state: ParseState::PrimaryHeader,
            ctype: ContentType::Text,
            stype: ContentSubtype::Plain,
            encoding: ContentTransferEncoding::SevenBit,
            domain: EncodingDomain::SevenBit,
            output_buffer: BString::default(),
            prev_rec_type: None,
            stack: vec![],
            tokens: vec![],
            token_buffer: BString::default(),
            errors: MimeErrors::empty(),
            options,
            limits,
            sink,
        })
    }

    /// The errors observed so far.
    pub fn errors(&self) -> MimeErrors {
        self.errors
    }

    /// The current multipart nesting depth.
    pub fn nesting_level(&self) -> usize {
        self.stack.len()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Feed the next input record through the state machine. Output
    /// is produced by calling the sink inline. Returns the
    /// accumulated error mask.
    pub fn update(&mut self, rec_type: RecordType, text: &[u8]) -> MimeErrors {
        // Flush any partial line that is still buffered up before
        // taking any other end-of-input action, so that input ending
        // in data other than a hard line break still gets one.
        if !rec_type.is_text() && self.prev_rec_type == Some(RecordType::Continuation) {
            self.update(RecordType::Normal, b"");
        }

        if self.state != ParseState::Body && self.process_header_record(rec_type, text) {
            self.prev_rec_type = Some(rec_type);
            return self.errors;
        }

        self.process_body_record(rec_type, text);
        self.prev_rec_type = Some(rec_type);
        self.errors
    }

    /// Header-state handling for one record. Returns true when the
    /// record was consumed; false means the record ends the header
    /// block and must continue through body processing.
    fn process_header_record(&mut self, rec_type: RecordType, text: &[u8]) -> bool {
        let input_is_text = rec_type.is_text();

        // First deal with header text accumulated from previous
        // records.
        if !self.output_buffer.is_empty() {
            if input_is_text {
                if self.prev_rec_type == Some(RecordType::Continuation) {
                    self.append_to_header(text);
                    return true;
                }
                if text.first().is_some_and(|b| b.is_ascii_whitespace()) {
                    // A folded continuation line
                    self.append_to_header(b"\n");
                    self.append_to_header(text);
                    return true;
                }
            }
            // No more input belongs to the saved header
            self.flush_header();
        }

        if input_is_text {
            let name_len = is_header(text);
            if name_len > 0 {
                // The beginning of another header. The obsolete
                // "name space colon" form is normalized to "name
                // colon"; anything else causes too much confusion
                // downstream.
                self.append_to_header(&text[..name_len]);
                let mut rest = &text[name_len..];
                while rest.first().is_some_and(|b| b.is_ascii_whitespace()) {
                    rest = &rest[1..];
                }
                self.append_to_header(rest);
                return true;
            }
        }

        // This record terminates the header block. When converting
        // 8-bit to 7-bit mail this is the place to emit the correct
        // transfer encoding header: message and multipart entities
        // get a domain, leaf entities get the transformation.
        if self.options.contains(MimeOptions::DOWNGRADE)
            && self.domain != EncodingDomain::SevenBit
        {
            let encoding = if matches!(self.ctype, ContentType::Message | ContentType::Multipart)
            {
                ContentTransferEncoding::SevenBit
            } else {
                ContentTransferEncoding::QuotedPrintable
            };
            let mut buf = BString::from(format!(
                "Content-Transfer-Encoding: {}",
                encoding.name()
            ));
            self.sink
                .head_out(self.state.header_class(), None, &mut buf);
        }

        if self.state == ParseState::PrimaryHeader {
            self.sink.head_end();
        }

        // Check that the sender specified an identity encoding for
        // multipart and message entities. partial and external-body
        // additionally require the 7bit domain.
        if self.options.contains(MimeOptions::REPORT_ENCODING_DOMAIN) {
            match self.ctype {
                ContentType::Message => {
                    if matches!(
                        self.stype,
                        ContentSubtype::Partial | ContentSubtype::ExternalBody
                    ) {
                        if self.domain != EncodingDomain::SevenBit {
                            self.errors |= MimeErrors::ENCODING_DOMAIN;
                        }
                    } else if !self.encoding.is_domain() {
                        self.errors |= MimeErrors::ENCODING_DOMAIN;
                    }
                }
                ContentType::Multipart => {
                    if !self.encoding.is_domain() {
                        self.errors |= MimeErrors::ENCODING_DOMAIN;
                    }
                }
                _ => {}
            }
        }

        // Find out if the next body starts with its own message
        // headers, then fall through to body processing with this
        // same record.
        if input_is_text {
            if text.is_empty() {
                match self.ctype {
                    ContentType::Message => {
                        if self.stype == ContentSubtype::Rfc822
                            || self.options.contains(MimeOptions::RECURSE_ALL_MESSAGE)
                        {
                            self.set_state(
                                ParseState::NestedHeader,
                                ContentType::Text,
                                ContentSubtype::Plain,
                                ContentTransferEncoding::SevenBit,
                                EncodingDomain::SevenBit,
                            );
                        } else {
                            self.state = ParseState::Body;
                        }
                    }
                    ContentType::Multipart => {
                        // The prolog between here and the first
                        // boundary has no content type of its own
                        self.set_state(
                            ParseState::Body,
                            ContentType::Other,
                            ContentSubtype::Other,
                            ContentTransferEncoding::SevenBit,
                            EncodingDomain::SevenBit,
                        );
                    }
                    _ => self.state = ParseState::Body,
                }
            } else {
                // Invalid input where the blank separator belongs.
                // Force output of one blank line and jump to the
                // body state, leaving all other state alone.
                self.sink.body_out(RecordType::Normal, b"");
                self.state = ParseState::Body;
            }
        } else {
            self.state = ParseState::Body;
        }
        false
    }

    /// Body-state handling for one record: boundary recognition,
    /// the 8-bit-in-7-bit check, and output routing.
    fn process_body_record(&mut self, rec_type: RecordType, text: &[u8]) {
        if !rec_type.is_text() {
            self.sink.body_end();
            return;
        }

        if self.options.contains(MimeOptions::REPORT_8BIT_IN_7BIT_BODY)
            && self.encoding == ContentTransferEncoding::SevenBit
            && !self.errors.contains(MimeErrors::EIGHT_BIT_IN_7BIT_BODY)
            && text.iter().any(|b| !b.is_ascii())
        {
            self.errors |= MimeErrors::EIGHT_BIT_IN_7BIT_BODY;
        }

        // Look for message boundaries. Trailing cruft after the
        // boundary is ignored, both because some MUAs emit it and
        // because the stored boundary string may have been
        // truncated. A continued line can never start a boundary.
        if !self.stack.is_empty()
            && self.prev_rec_type != Some(RecordType::Continuation)
            && text.starts_with(b"--")
        {
            let tail = &text[2..];
            if let Some(matched) = self
                .stack
                .iter()
                .rposition(|entry| tail.starts_with(&entry.boundary[..]))
            {
                // Inner parts that are missing their own closing
                // delimiter are implicitly closed by this one
                while self.stack.len() > matched + 1 {
                    self.pop_boundary();
                }
                let bound_len = self.stack[matched].boundary.len();
                if tail[bound_len..].starts_with(b"--") {
                    // Closing delimiter
                    self.pop_boundary();
                    self.set_state(
                        ParseState::Body,
                        ContentType::Other,
                        ContentSubtype::Other,
                        ContentTransferEncoding::SevenBit,
                        EncodingDomain::SevenBit,
                    );
                } else {
                    // Opening delimiter of a sibling part
                    let entry = &self.stack[matched];
                    let (def_ctype, def_stype) = (entry.def_ctype, entry.def_stype);
                    self.set_state(
                        ParseState::MultipartHeader,
                        def_ctype,
                        def_stype,
                        ContentTransferEncoding::SevenBit,
                        EncodingDomain::SevenBit,
                    );
                }
                // The delimiter line itself is not body content
                return;
            }
        }

        if self.options.contains(MimeOptions::DOWNGRADE)
            && self.domain != EncodingDomain::SevenBit
        {
            self.downgrade(rec_type, text);
        } else {
            self.sink.body_out(rec_type, text);
        }
    }

    /// Append text to the header under assembly, discarding anything
    /// beyond the header length limit.
    fn append_to_header(&mut self, text: &[u8]) {
        let avail = self
            .limits
            .header_limit
            .saturating_sub(self.output_buffer.len());
        if text.len() <= avail {
            self.output_buffer.extend_from_slice(text);
        } else {
            self.output_buffer.extend_from_slice(&text[..avail]);
            if self.options.contains(MimeOptions::REPORT_TRUNC_HEADER) {
                self.errors |= MimeErrors::TRUNC_HEADER;
            }
        }
    }

    /// Output processing for the saved header: run the Content-*
    /// analyzers, scan for 8-bit data, and hand the header to the
    /// sink.
    fn flush_header(&mut self) {
        let mut buf = std::mem::take(&mut self.output_buffer);

        let header_info = header_opts_find(&buf);
        if !self.options.contains(MimeOptions::DISABLE_MIME) {
            if let Some(info) = header_info {
                match info.kind {
                    HeaderKind::ContentType => self.parse_content_type(&buf, info),
                    HeaderKind::ContentTransferEncoding => {
                        self.parse_content_encoding(&buf, info)
                    }
                    HeaderKind::Other => {}
                }
            }
        }

        if self.options.contains(MimeOptions::REPORT_8BIT_IN_HEADER)
            && !self.errors.contains(MimeErrors::EIGHT_BIT_IN_HEADER)
            && buf.iter().any(|b| !b.is_ascii())
        {
            self.errors |= MimeErrors::EIGHT_BIT_IN_HEADER;
        }

        // Hold back the transfer encoding header when we will be
        // substituting our own at the end of the header block. The
        // right substitute depends on the content type header, which
        // may not have been seen yet.
        let suppress = self.options.contains(MimeOptions::DOWNGRADE)
            && self.domain != EncodingDomain::SevenBit
            && header_info.is_some_and(|info| info.kind == HeaderKind::ContentTransferEncoding);
        if !suppress {
            self.sink
                .head_out(self.state.header_class(), header_info, &mut buf);
        }

        self.prev_rec_type = None;
        buf.clear();
        self.output_buffer = buf;
    }

    /// Process a Content-Type header value.
    fn parse_content_type(&mut self, buf: &[u8], info: &'static HeaderOpts) {
        let mut cursor = &buf[(info.name.len() + 1).min(buf.len())..];

        let tok_count = header_token(
            &mut self.tokens,
            MAX_TOKEN,
            &mut self.token_buffer,
            &mut cursor,
            Some(RFC2045_TSPECIALS),
            Some(b';'),
        )
        .unwrap_or(0);

        if tok_count > 0 {
            let has_subtype = tok_count >= 3 && self.tok_is_special(1, b'/');

            if self.tok_matches(0, "text") {
                self.ctype = ContentType::Text;
                self.stype = if has_subtype && self.tok_matches(2, "plain") {
                    ContentSubtype::Plain
                } else {
                    ContentSubtype::Other
                };
                return;
            }

            // message/* body parts start with another block of
            // message headers that we may want to look at. The
            // partial and external-body subtypes can never be
            // subjected to 8-bit to 7-bit conversion, so they must
            // be recognized exactly.
            if self.tok_matches(0, "message") {
                self.ctype = ContentType::Message;
                self.stype = ContentSubtype::Other;
                if has_subtype {
                    if self.tok_matches(2, "rfc822") {
                        self.stype = ContentSubtype::Rfc822;
                    } else if self.tok_matches(2, "partial") {
                        self.stype = ContentSubtype::Partial;
                    } else if self.tok_matches(2, "external-body") {
                        self.stype = ContentSubtype::ExternalBody;
                    }
                }
                return;
            }

            if self.tok_matches(0, "multipart") {
                self.ctype = ContentType::Multipart;
                // multipart/digest changes the default content type
                // of the parts from text/plain to message/rfc822
                let (def_ctype, def_stype) = if has_subtype && self.tok_matches(2, "digest") {
                    (ContentType::Message, ContentSubtype::Rfc822)
                } else {
                    (ContentType::Text, ContentSubtype::Plain)
                };

                // Capture every boundary parameter, even though more
                // than one is illegal: as long as the sender frames
                // parts with any one of them we can still find the
                // embedded message headers. The value's annotation
                // (word vs quoted string) is ignored.
                let mut boundaries: Vec<BString> = vec![];
                while let Some(count) = header_token(
                    &mut self.tokens,
                    MAX_TOKEN,
                    &mut self.token_buffer,
                    &mut cursor,
                    Some(RFC2045_TSPECIALS),
                    Some(b';'),
                ) {
                    if count >= 3
                        && self.tok_matches(0, "boundary")
                        && self.tok_is_special(1, b'=')
                    {
                        boundaries.push(BString::from(self.tokens[2].value(&self.token_buffer)));
                    }
                }
                for boundary in boundaries {
                    self.push_boundary(def_ctype, def_stype, &boundary);
                }
                return;
            }
        }

        self.ctype = ContentType::Other;
        self.stype = ContentSubtype::Other;
    }

    /// Process a Content-Transfer-Encoding header value. The domain
    /// is never set to anything other than 7bit, 8bit or binary,
    /// even when the token is unrecognized.
    fn parse_content_encoding(&mut self, buf: &[u8], info: &'static HeaderOpts) {
        let mut cursor = &buf[(info.name.len() + 1).min(buf.len())..];

        let Some(count) = header_token(
            &mut self.tokens,
            1,
            &mut self.token_buffer,
            &mut cursor,
            None,
            None,
        ) else {
            return;
        };
        if count > 0 && self.tokens[0].kind == HeaderTokenKind::Token {
            let parsed = std::str::from_utf8(self.tokens[0].value(&self.token_buffer))
                .ok()
                .and_then(|s| s.parse::<ContentTransferEncoding>().ok());
            if let Some(encoding) = parsed {
                self.encoding = encoding;
                self.domain = encoding.domain();
            }
        }
    }

    fn tok_matches(&self, idx: usize, text: &str) -> bool {
        self.tokens.get(idx).is_some_and(|t| {
            t.kind == HeaderTokenKind::Token
                && t.value(&self.token_buffer)
                    .eq_ignore_ascii_case(text.as_bytes())
        })
    }

    fn tok_is_special(&self, idx: usize, c: u8) -> bool {
        self.tokens.get(idx).is_some_and(|t| t.is_special(c))
    }

    fn push_boundary(
        &mut self,
        def_ctype: ContentType,
        def_stype: ContentSubtype,
        boundary: &[u8],
    ) {
        if self.stack.len() > self.limits.max_depth {
            self.errors |= MimeErrors::NESTING;
            return;
        }
        // RFC 2046 allows up to 70 characters; some MTAs embed
        // their fully qualified name and blow past that, so longer
        // strings are accepted but only boundary_limit bytes are
        // stored.
        let keep = boundary.len().min(self.limits.boundary_limit);
        let entry = BoundaryEntry {
            boundary: BString::from(&boundary[..keep]),
            def_ctype,
            def_stype,
        };
        tracing::trace!("push boundary {}", entry.boundary);
        self.stack.push(entry);
    }

    fn pop_boundary(&mut self) {
        let entry = self
            .stack
            .pop()
            .expect("pop_boundary: the boundary stack is empty");
        tracing::trace!("pop boundary {}", entry.boundary);
    }

    /// Convert one record of 8-bit data to quoted-printable,
    /// inserting a soft line break whenever the output line reaches
    /// a critical length before the end of the input line.
    fn downgrade(&mut self, rec_type: RecordType, text: &[u8]) {
        let mut last = 0u8;
        for &ch in text {
            if self.output_buffer.len() > 72 {
                self.output_buffer.push(b'=');
                self.sink
                    .body_out(RecordType::Normal, &self.output_buffer);
                self.output_buffer.clear();
            }
            last = ch;
            if (ch < 32 && ch != b'\t') || ch == b'=' || ch > 126 {
                qp_encode(&mut self.output_buffer, ch);
            } else {
                self.output_buffer.push(ch);
            }
        }

        // Flush after a hard line break, re-encoding trailing
        // whitespace per the RFC. The worst case grows the line
        // from 73 to 75 bytes here.
        if rec_type == RecordType::Normal {
            if last == b' ' || last == b'\t' {
                let len = self.output_buffer.len();
                self.output_buffer.truncate(len - 1);
                qp_encode(&mut self.output_buffer, last);
            }
            self.sink
                .body_out(RecordType::Normal, &self.output_buffer);
            self.output_buffer.clear();
        }
    }

    fn set_state(
        &mut self,
        state: ParseState,
        ctype: ContentType,
        stype: ContentSubtype,
        encoding: ContentTransferEncoding,
        domain: EncodingDomain,
    ) {
        self.state = state;
        self.ctype = ctype;
        self.stype = stype;
        self.encoding = encoding;
        self.domain = domain;
    }
}

fn qp_encode(buf: &mut BString, ch: u8) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    buf.push(b'=');
    buf.push(HEX[(ch >> 4) as usize]);
    buf.push(HEX[(ch & 0x0f) as usize]);
}
