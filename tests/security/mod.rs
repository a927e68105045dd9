//! Security tests module
//!
//! Each test attacks the full router and then checks the credential store
//! was left intact.

pub mod authorization_test;
pub mod sql_injection_test;

/// Percent-encode a query value byte by byte
pub fn encode(value: &str) -> String {
    value
        .bytes()
        .map(|byte| match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (byte as char).to_string()
            }
            _ => format!("%{byte:02X}"),
        })
        .collect()
}
