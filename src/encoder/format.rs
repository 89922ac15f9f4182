use crate::models::EAN13_LEN;

/// Group boundaries of the display form `D-DDDDDD-DDDDD-D`
const GROUP_BREAKS: [usize; 3] = [1, 7, 12];

/// Format a 13-character code as `D-DDDDDD-DDDDD-D`
///
/// Purely positional. Input of any other length is returned unchanged.
pub fn format_grouped(code: &str) -> String {
    if code.chars().count() != EAN13_LEN {
        return code.to_string();
    }
    let mut out = String::with_capacity(code.len() + GROUP_BREAKS.len());
    for (i, c) in code.chars().enumerate() {
        if GROUP_BREAKS.contains(&i) {
            out.push('-');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_grouped("0123456789012"), "0-123456-78901-2");
        assert_eq!(format_grouped("4006381333931"), "4-006381-33393-1");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(format_grouped("12345"), "12345");
        assert_eq!(format_grouped(""), "");
        assert_eq!(format_grouped("01234567890123"), "01234567890123");
    }
}
