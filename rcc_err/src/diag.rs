use crate::err::RccErr;
use std::process;

/// Exit status used whenever translation stops on a diagnostic.
pub const FATAL_EXIT_CODE: i32 = 1;

/// A resolved location in the source buffer. Lines and columns are 1-based, columns
/// count characters rather than bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePos {
    pub line: usize,
    pub col: usize,
    pub offset: usize,
}

/// Resolve a byte offset into a line/column pair. Offsets past the end of the buffer
/// (the end of input position) are clamped to the buffer length.
pub fn locate(src: &str, pos: usize) -> SourcePos {
    let offset = char_floor(src, pos);
    let start = line_start(src, offset);

    SourcePos {
        line: src[..offset].matches('\n').count() + 1,
        col: src[start..offset].chars().count() + 1,
        offset,
    }
}

/// Returns the full text of the line holding the given offset, without its line terminator.
pub fn line_at(src: &str, pos: usize) -> &str {
    let offset = char_floor(src, pos);
    let start = line_start(src, offset);
    let end = match src[offset..].find('\n') {
        Some(i) => offset + i,
        None => src.len(),
    };

    src[start..end].trim_end_matches('\r')
}

/// Build the text of a diagnostic: the position, the offending source line, and a caret
/// under the offending column followed by the message.
///
/// rcc: error at line 1, column 3 (offset 2)
/// 1+;
///   ^ expected a number, identifier or '(', but found ';'
pub fn render(src: &str, pos: usize, msg: &str) -> String {
    let loc = locate(src, pos);
    let mut out = format!(
        "rcc: error at line {}, column {} (offset {})\n",
        loc.line, loc.col, loc.offset
    );

    out.push_str(line_at(src, pos));
    out.push('\n');
    out.push_str(&" ".repeat(loc.col - 1));
    out.push_str("^ ");
    out.push_str(msg);
    out.push('\n');
    out
}

/// Report an error against its source and terminate the process with a failure status.
/// This is the only place the front end exits: library code returns errors, and the
/// driver hands the first one it receives to this function.
pub fn report_fatal<E: RccErr + ?Sized>(src: &str, err: &E) -> ! {
    err.emit(src);
    process::exit(FATAL_EXIT_CODE)
}

fn line_start(src: &str, offset: usize) -> usize {
    match src[..offset].rfind('\n') {
        Some(i) => i + 1,
        None => 0,
    }
}

fn char_floor(src: &str, pos: usize) -> usize {
    let mut offset = pos.min(src.len());
    while !src.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
