use crate::{MimeStateError, Result};
use std::str::FromStr;

/// Content types the state machine cares about, either because the
/// structure of the message depends on them or because we want to
/// filter out broken messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Other,
    Text,
    Message,
    Multipart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSubtype {
    Other,
    Plain,
    Rfc822,
    Partial,
    ExternalBody,
}

/// An RFC 2045 transfer encoding. The first three name the byte-range
/// properties of the content (a domain), the last two name a
/// reversible transformation over 7bit bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentTransferEncoding {
    SevenBit,
    EightBit,
    Binary,
    QuotedPrintable,
    Base64,
}

/// The encoding domain of an entity. Multipart and message parents
/// may only declare a domain, never a transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingDomain {
    SevenBit,
    EightBit,
    Binary,
}

impl ContentTransferEncoding {
    pub fn domain(self) -> EncodingDomain {
        match self {
            Self::SevenBit | Self::QuotedPrintable | Self::Base64 => EncodingDomain::SevenBit,
            Self::EightBit => EncodingDomain::EightBit,
            Self::Binary => EncodingDomain::Binary,
        }
    }

    /// True when the encoding names a domain rather than a
    /// transformation.
    pub fn is_domain(self) -> bool {
        matches!(self, Self::SevenBit | Self::EightBit | Self::Binary)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::SevenBit => "7bit",
            Self::EightBit => "8bit",
            Self::Binary => "binary",
            Self::QuotedPrintable => "quoted-printable",
            Self::Base64 => "base64",
        }
    }
}

impl FromStr for ContentTransferEncoding {
    type Err = MimeStateError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("7bit") {
            Ok(Self::SevenBit)
        } else if s.eq_ignore_ascii_case("8bit") {
            Ok(Self::EightBit)
        } else if s.eq_ignore_ascii_case("binary") {
            Ok(Self::Binary)
        } else if s.eq_ignore_ascii_case("quoted-printable") {
            Ok(Self::QuotedPrintable)
        } else if s.eq_ignore_ascii_case("base64") {
            Ok(Self::Base64)
        } else {
            Err(MimeStateError::InvalidContentTransferEncoding(
                s.to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_encoding() {
        k9::assert_equal!(
            "Quoted-Printable".parse::<ContentTransferEncoding>().unwrap(),
            ContentTransferEncoding::QuotedPrintable
        );
        k9::assert_equal!(
            "8BIT".parse::<ContentTransferEncoding>().unwrap(),
            ContentTransferEncoding::EightBit
        );
        assert!("uuencode".parse::<ContentTransferEncoding>().is_err());
    }

    #[test]
    fn domains() {
        use ContentTransferEncoding::*;
        assert!(SevenBit.is_domain());
        assert!(EightBit.is_domain());
        assert!(Binary.is_domain());
        assert!(!QuotedPrintable.is_domain());
        assert!(!Base64.is_domain());

        k9::assert_equal!(Base64.domain(), EncodingDomain::SevenBit);
        k9::assert_equal!(QuotedPrintable.domain(), EncodingDomain::SevenBit);
        k9::assert_equal!(Binary.domain(), EncodingDomain::Binary);
    }
}
