use std::fmt::Write;

// Append `value` zero-padded to at least `width` digits.
pub(crate) fn push_zero_padded(out: &mut String, value: i64, width: usize) {
    let _ = write!(out, "{value:0width$}");
}
