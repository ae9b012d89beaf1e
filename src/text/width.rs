//! Column counting where full-width characters occupy two columns.

use unicode_width::UnicodeWidthChar;

/// Count the length of `text`.
///
/// With `full_width_as_two == false` this is the number of characters.
/// Otherwise East Asian wide and full-width characters (kanji, hiragana,
/// full-width alphanumerics) count as 2 and everything else as 1, including
/// half-width katakana and control characters.
///
/// # Example
///
/// ```
/// use jp_value_objects::text::text_width;
///
/// assert_eq!(text_width("山田abc", false), 5);
/// assert_eq!(text_width("山田abc", true), 7);
/// ```
pub fn text_width(text: &str, full_width_as_two: bool) -> usize {
    if !full_width_as_two {
        return text.chars().count();
    }

    text.chars()
        .map(|c| match c.width() {
            Some(2) => 2,
            _ => 1,
        })
        .sum()
}
