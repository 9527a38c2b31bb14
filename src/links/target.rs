// src/links/target.rs
// =============================================================================
// This module splits a raw Markdown link target into the address we rewrite
// and the syntax around it that must survive byte for byte.
//
// Markdown allows a lot around the address inside the parentheses:
//   [a]( ./a.md )                 surrounding whitespace
//   [a](./a.md "Title")           a quoted title after the address
//   [a](<./my file.md> "Title")   angle brackets around an address with spaces
//
// LinkTarget borrows every piece from the raw string, so parsing allocates
// nothing. Only rebuild() creates a new String.
// =============================================================================

/// How the address was written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Plain,
    /// `<address>`
    Angle,
}

/// One raw link target, split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget<'a> {
    pub leading_whitespace: &'a str,
    pub core: &'a str,
    pub delimiter: Delimiter,
    /// Everything after the address, e.g. ` "Title"`
    pub suffix: &'a str,
    pub trailing_whitespace: &'a str,
}

impl<'a> LinkTarget<'a> {
    /// Splits `raw` into its parts
    ///
    /// Returns None when there is nothing to resolve: an empty core, or an
    /// opening '<' without a closing '>'.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let trimmed_start = raw.trim_start();
        let leading_whitespace = &raw[..raw.len() - trimmed_start.len()];
        let inner = trimmed_start.trim_end();
        let trailing_whitespace = &trimmed_start[inner.len()..];

        let (core, delimiter, suffix) = if let Some(rest) = inner.strip_prefix('<') {
            let close = rest.find('>')?;
            (&rest[..close], Delimiter::Angle, &rest[close + 1..])
        } else {
            match inner.find(char::is_whitespace) {
                Some(split) => (&inner[..split], Delimiter::Plain, &inner[split..]),
                None => (inner, Delimiter::Plain, ""),
            }
        };

        if core.is_empty() {
            return None;
        }

        Some(Self {
            leading_whitespace,
            core,
            delimiter,
            suffix,
            trailing_whitespace,
        })
    }

    /// Puts the target back together around a new address
    pub fn rebuild(&self, resolved: &str) -> String {
        let mut out = String::with_capacity(
            self.leading_whitespace.len()
                + resolved.len()
                + self.suffix.len()
                + self.trailing_whitespace.len()
                + 2,
        );
        out.push_str(self.leading_whitespace);
        match self.delimiter {
            Delimiter::Plain => out.push_str(resolved),
            Delimiter::Angle => {
                out.push('<');
                out.push_str(resolved);
                out.push('>');
            }
        }
        out.push_str(self.suffix);
        out.push_str(self.trailing_whitespace);
        out
    }
}

// Parses `raw`, maps its address through `resolve`, and rebuilds it
//
// A malformed target comes back unchanged.
pub fn rewrite_target(raw: &str, resolve: impl FnOnce(&str) -> String) -> String {
    match LinkTarget::parse(raw) {
        Some(target) => target.rebuild(&resolve(target.core)),
        None => raw.to_string(),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is the 'a in LinkTarget<'a>?
//    - A lifetime: every &'a str field points into the raw target string
//    - The compiler makes sure a LinkTarget never outlives that string
//
// 2. Why return Option instead of Result?
//    - A malformed target is not an error for us, we just leave it alone
//    - The ? operator works on Option too: rest.find('>')? returns None
//      from parse() when there is no closing bracket
// -----------------------------------------------------------------------------
