use encoding_rs::Encoding;
use std::fmt;
use std::str::FromStr;

/// Code pages strings can be restricted to
///
/// `ascii` and `latin1` are handled directly since the WHATWG labels map
/// both onto windows-1252. Any other label is resolved through `encoding_rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodePage {
    Ascii,
    #[default]
    Latin1,
    Utf8,
    Other(&'static Encoding),
}

impl CodePage {
    pub const VARIANTS: &'static str = "ascii, latin1 (latin-1, iso-8859-1, l1), utf-8 (utf8), \
         or an encoding label such as cp1252, shift_jis or gbk";

    /// Checks whether `c` can be encoded in this code page
    pub fn can_encode(self, c: char) -> bool {
        match self {
            CodePage::Ascii => c.is_ascii(),
            CodePage::Latin1 => (c as u32) <= 0xFF,
            CodePage::Utf8 => true,
            CodePage::Other(encoding) => {
                let mut buf = [0u8; 4];
                let (_, _, had_unmappable) = encoding.encode(c.encode_utf8(&mut buf));
                !had_unmappable
            }
        }
    }
}

impl FromStr for CodePage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "ascii" | "us-ascii" => Ok(CodePage::Ascii),
            "latin1" | "latin-1" | "iso-8859-1" | "iso8859-1" | "l1" => Ok(CodePage::Latin1),
            "utf-8" | "utf8" => Ok(CodePage::Utf8),
            label => Encoding::for_label(label.as_bytes())
                .map(CodePage::Other)
                .ok_or_else(|| {
                    format!(
                        "Invalid code page: {}. Please specify one of: {}",
                        s,
                        Self::VARIANTS
                    )
                }),
        }
    }
}

impl fmt::Display for CodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodePage::Ascii => write!(f, "ascii"),
            CodePage::Latin1 => write!(f, "latin1"),
            CodePage::Utf8 => write!(f, "utf-8"),
            CodePage::Other(encoding) => write!(f, "{}", encoding.name().to_lowercase()),
        }
    }
}

/// StringSanitizer - Drops characters a code page cannot encode
#[derive(Debug, Clone, Copy)]
pub struct StringSanitizer {
    code_page: CodePage,
}

impl StringSanitizer {
    pub fn new(code_page: CodePage) -> Self {
        Self { code_page }
    }

    pub fn sanitize(&self, value: &str) -> String {
        value
            .chars()
            .filter(|&c| self.code_page.can_encode(c))
            .collect()
    }
}
