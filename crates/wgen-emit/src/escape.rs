//! Literal escaping for generated C++ source

use std::fmt::Write;

/// Escape bytes as the body of a C string literal.
///
/// Printable ASCII passes through; everything else, plus `\` and `"`,
/// becomes a three-digit octal escape. Octal escapes never swallow a
/// following digit, unlike `\x`.
pub fn c_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        if (32..127).contains(&b) && b != b'\\' && b != b'"' {
            out.push(b as char);
        } else {
            let _ = write!(out, "\\{:03o}", b);
        }
    }
    out
}

/// Brace initializer listing each byte, e.g. `{0x0,0xff,0x10,}`
pub fn byte_list(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 5 + 2);
    out.push('{');
    for b in bytes {
        let _ = write!(out, "{:#x},", b);
    }
    out.push('}');
    out
}

/// Indent every line after the first by one tab
pub fn indent_code(code: &str) -> String {
    code.replace('\n', "\n\t")
}
