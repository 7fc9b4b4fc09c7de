//! Purpose: Provide the internal runtime JSON decode entrypoints.
//! Exports: `from_slice`, `from_str`, `ParseFailureCategory`, categorization helpers.
//! Role: Parser boundary that centralizes simd-json usage details.
//! Invariants: Response bodies and CLI documents are decoded through this module.
//! Invariants: Input buffers are copied once to satisfy simd-json mutable-slice API.
//! Invariants: Nesting deeper than `MAX_DEPTH` is rejected before the parser runs.
//! Notes: Error mapping is done by callsites so domain context stays explicit.

use serde::de::DeserializeOwned;

/// Deepest object/array nesting accepted at the boundary.
pub const MAX_DEPTH: usize = 512;

pub fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T, simd_json::Error> {
    let mut bytes = input.to_vec();
    simd_json::serde::from_slice(&mut bytes)
}

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, simd_json::Error> {
    from_slice(input.as_bytes())
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseFailureCategory {
    Syntax,
    Utf8,
    NumericRange,
    DepthLimit,
    Unknown,
}

impl ParseFailureCategory {
    pub fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Utf8 => "utf8",
            ParseFailureCategory::NumericRange => "numeric-range",
            ParseFailureCategory::DepthLimit => "depth-limit",
            ParseFailureCategory::Unknown => "unknown",
        }
    }
}

pub fn categorize_error(err: &simd_json::Error) -> ParseFailureCategory {
    categorize_message(&err.to_string())
}

pub fn categorize_message(message: &str) -> ParseFailureCategory {
    let lower = message.to_ascii_lowercase();
    if lower.contains("utf8") || lower.contains("utf-8") {
        ParseFailureCategory::Utf8
    } else if lower.contains("recursion") || lower.contains("depth") {
        ParseFailureCategory::DepthLimit
    } else if lower.contains("number") || lower.contains("overflow") || lower.contains("range")
    {
        ParseFailureCategory::NumericRange
    } else if lower.contains("syntax")
        || lower.contains("expected")
        || lower.contains("eof")
        || lower.contains("unexpected")
        || lower.contains("invalid")
    {
        ParseFailureCategory::Syntax
    } else {
        ParseFailureCategory::Unknown
    }
}

pub fn hint_for_error(err: &simd_json::Error, context: &str) -> String {
    hint_for_category(categorize_error(err), context)
}

pub fn hint_for_category(category: ParseFailureCategory, context: &str) -> String {
    format!("parse category: {}; context: {context}", category.label())
}

/// Whether brackets in `input` nest deeper than `limit`.
///
/// Brackets inside string literals are ignored. Malformed input is left for
/// the parser to reject.
pub fn exceeds_depth(input: &[u8], limit: usize) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for &byte in input {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > limit {
                    return true;
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    false
}
