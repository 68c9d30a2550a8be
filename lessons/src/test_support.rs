//! Test-only helpers for capturing demo output.

use std::io::Write;

use crate::error::Result;

/// Run `f` against an in-memory sink and return what it wrote.
pub fn capture<F>(f: F) -> Result<String>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let mut buf: Vec<u8> = Vec::new();
    let sink: &mut dyn Write = &mut buf;
    f(sink)?;
    Ok(String::from_utf8(buf).expect("demo output is utf-8"))
}
