//! Filesystem-safe names derived from tune titles

use crate::Tune;

/// Characters that are replaced by an underscore, because some filesystem rejects them
pub const RESERVED_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// The maximum length of a sanitized title, in bytes
pub const MAX_LEN: usize = 50;

/// The file extension used for ABC files
pub const EXTENSION: &str = "abc";

/// Turn a tune title into something that can be used as (part of) a filename
///
/// Every reserved character is replaced with `_`, after which the result is cut down to at most
/// [`MAX_LEN`] bytes. The cut never splits a UTF-8 sequence: if the limit falls inside a
/// multi-byte character, that character is dropped entirely. ASCII titles are therefore cut to
/// exactly [`MAX_LEN`] characters.
pub fn sanitize(title: &str) -> String {
    let mut name = title.replace(RESERVED_CHARS, "_");
    name.truncate(floor_char_boundary(&name, MAX_LEN));
    name
}

/// The filename a tune is written to: `<setting_id>_<sanitized title>.abc`
pub fn file_name(tune: &Tune) -> String {
    format!("{}_{}.{EXTENSION}", tune.setting_id, sanitize(&tune.name))
}

/// The largest char boundary in `str` that doesn't exceed `index`
fn floor_char_boundary(str: &str, index: usize) -> usize {
    if index >= str.len() {
        return str.len();
    }

    // Index 0 is always a boundary, so this terminates
    (0..=index)
        .rev()
        .find(|index| str.is_char_boundary(*index))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_characters() {
        assert_eq!(sanitize("Tune: The/Best?"), "Tune_ The_Best_");
        assert_eq!(sanitize("Reel: A  B"), "Reel_ A  B");
        assert_eq!(sanitize(r#"a\b*c"d<e>f|g"#), "a_b_c_d_e_f_g");
        assert_eq!(sanitize("The Silver Spear"), "The Silver Spear");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn truncate_ascii() {
        let title = "x".repeat(80);
        assert_eq!(sanitize(&title).len(), MAX_LEN);

        let title = "y".repeat(MAX_LEN);
        assert_eq!(sanitize(&title), title);
    }

    #[test]
    fn truncate_on_char_boundary() {
        // 49 ASCII bytes followed by a two-byte 'é' straddling the limit
        let title = format!("{}éé", "a".repeat(49));
        let name = sanitize(&title);
        assert_eq!(name, "a".repeat(49));

        // Three-byte characters: 16 of them fit in 48 bytes, the 17th would need 51
        let title = "音".repeat(20);
        let name = sanitize(&title);
        assert_eq!(name.len(), 48);
        assert_eq!(name.chars().count(), 16);
    }

    #[test]
    fn reserved_before_truncation() {
        let title = format!("{}/{}", "a".repeat(49), "b".repeat(10));
        assert_eq!(sanitize(&title), format!("{}_", "a".repeat(49)));
    }

    #[test]
    fn tune_file_name() {
        let tune = Tune::new("42", "Tune: The/Best?", "reel", "4/4", "Gmajor", "");
        assert_eq!(file_name(&tune), "42_Tune_ The_Best_.abc");
    }
}
