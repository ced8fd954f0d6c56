use crate::error::Result;
use regex::Regex;
use std::borrow::Cow;

/// Matches the dead estimation block that follows the extraction loop in
/// `bwa-upload-working.html`: everything from the `// **FALLBACK:` comment
/// after the loop's closing braces up to and including the
/// `// **VALIDIERUNG**` marker. Group 1 captures the tail of the extraction
/// loop (the "Stop wenn beide gefunden" guard and its braces) so it can be
/// carried over unchanged.
///
/// `(?s)` lets `.` cross line boundaries; the closing marker is consumed by
/// the match and re-inserted verbatim by the replacement, so the content
/// after it continues unchanged.
pub const FALLBACK_BLOCK_PATTERN: &str = r"(?s)(                // Stop wenn beide gefunden\s+if \(revenue > 0 && costs > 0\) \{\s+console\.log\([^)]+\);\s+break;\s+\}\s+\})\s+// \*\*FALLBACK:.*?// \*\*VALIDIERUNG\*\*";

/// Replacement for the fallback block: the captured loop tail, a completion
/// log statement in place of the estimation code, and the closing marker.
pub const FALLBACK_BLOCK_REPLACEMENT: &str = "${1}\n            \n            // ✅ EXTRAKTION ABGESCHLOSSEN - Keine Schätzungen, nur echte PDF-Zahlen!\n            console.log('📊 Extraktion abgeschlossen. Revenue:', revenue, '€, Costs:', costs, '€');\n            \n            // **VALIDIERUNG - Bei Fehler Demo-Daten verwenden**\n            // **VALIDIERUNG**";

/// The one substitution this tool performs. The pattern and replacement are
/// fixed constants; they describe a single hand-written file and are not
/// meant to be configured or generalized.
#[derive(Debug)]
pub struct FallbackRule {
    regex: Regex,
}

impl FallbackRule {
    pub fn new() -> Result<Self> {
        let regex = Regex::new(FALLBACK_BLOCK_PATTERN)?;
        Ok(Self { regex })
    }

    pub fn is_match(&self, content: &str) -> bool {
        self.regex.is_match(content)
    }

    /// Applies the substitution. Returns borrowed content when nothing
    /// matched.
    pub fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        self.regex.replace_all(content, FALLBACK_BLOCK_REPLACEMENT)
    }
}
