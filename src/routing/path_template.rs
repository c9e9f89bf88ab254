//! Path template parsing.
//!
//! # Responsibilities
//! - Extract `{name}` path placeholders
//! - Extract `?key={name}` / `&key={name}` query placeholders
//!
//! # Design Decisions
//! - Total: malformed templates yield fewer matches, never an error
//! - Two independent left-to-right scans; a placeholder inside a query
//!   pair is also reported as a path placeholder
//! - No regex, single pass per scan

use std::collections::BTreeMap;

/// Placeholders found in a path template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPathParams {
    /// Path placeholders, keyed and valued by their own name.
    pub path_params: BTreeMap<String, String>,
    /// Query key → placeholder name.
    pub query_params: BTreeMap<String, String>,
}

impl ParsedPathParams {
    pub fn is_empty(&self) -> bool {
        self.path_params.is_empty() && self.query_params.is_empty()
    }
}

/// Parse a path template into its named parameters.
pub fn parse(path: &str) -> ParsedPathParams {
    ParsedPathParams {
        path_params: scan_path_params(path),
        query_params: scan_query_params(path),
    }
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || b == b'+'
}

/// Length of the `{identifier}` at `start`, braces included.
fn placeholder_at(bytes: &[u8], start: usize) -> Option<usize> {
    if bytes.get(start) != Some(&b'{') {
        return None;
    }
    let ident_len = bytes[start + 1..]
        .iter()
        .take_while(|b| is_ident_byte(**b))
        .count();
    let close = start + 1 + ident_len;
    if ident_len > 0 && bytes.get(close) == Some(&b'}') {
        Some(ident_len + 2)
    } else {
        None
    }
}

fn scan_path_params(path: &str) -> BTreeMap<String, String> {
    let bytes = path.as_bytes();
    let mut params = BTreeMap::new();
    let mut i = 0;
    while i < bytes.len() {
        match placeholder_at(bytes, i) {
            Some(len) => {
                let name = &path[i + 1..i + len - 1];
                params.insert(name.to_string(), name.to_string());
                i += len;
            }
            None => i += 1,
        }
    }
    params
}

fn scan_query_params(path: &str) -> BTreeMap<String, String> {
    let bytes = path.as_bytes();
    let mut params = BTreeMap::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'?' && bytes[i] != b'&' {
            i += 1;
            continue;
        }
        let key_start = i + 1;
        let key_len = bytes[key_start..]
            .iter()
            .take_while(|b| is_ident_byte(**b))
            .count();
        let eq = key_start + key_len;
        if key_len == 0 || bytes.get(eq) != Some(&b'=') {
            i += 1;
            continue;
        }
        match placeholder_at(bytes, eq + 1) {
            Some(len) => {
                let key = &path[key_start..eq];
                let name = &path[eq + 2..eq + len];
                params.insert(key.to_string(), name.to_string());
                i = eq + 1 + len;
            }
            None => i += 1,
        }
    }
    params
}
