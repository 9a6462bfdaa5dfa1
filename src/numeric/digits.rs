// ============================================================================
// Numeral Classification
// Script-aware decimal digit detection for grapheme clusters
// ============================================================================

/// Code points of the digit zero for every run of ten decimal digits (Unicode
/// general category Nd). Each run is contiguous: `zero + n` is the digit `n`.
///
/// Sorted ascending so lookups can binary search.
const DIGIT_ZEROS: &[u32] = &[
    0x0030,  // ASCII
    0x0660,  // Arabic-Indic
    0x06F0,  // Extended Arabic-Indic
    0x07C0,  // NKo
    0x0966,  // Devanagari
    0x09E6,  // Bengali
    0x0A66,  // Gurmukhi
    0x0AE6,  // Gujarati
    0x0B66,  // Oriya
    0x0BE6,  // Tamil
    0x0C66,  // Telugu
    0x0CE6,  // Kannada
    0x0D66,  // Malayalam
    0x0DE6,  // Sinhala Lith
    0x0E50,  // Thai
    0x0ED0,  // Lao
    0x0F20,  // Tibetan
    0x1040,  // Myanmar
    0x1090,  // Myanmar Shan
    0x17E0,  // Khmer
    0x1810,  // Mongolian
    0x1946,  // Limbu
    0x19D0,  // New Tai Lue
    0x1A80,  // Tai Tham Hora
    0x1A90,  // Tai Tham Tham
    0x1B50,  // Balinese
    0x1BB0,  // Sundanese
    0x1C40,  // Lepcha
    0x1C50,  // Ol Chiki
    0xA620,  // Vai
    0xA8D0,  // Saurashtra
    0xA900,  // Kayah Li
    0xA9D0,  // Javanese
    0xA9F0,  // Myanmar Tai Laing
    0xAA50,  // Cham
    0xABF0,  // Meetei Mayek
    0xFF10,  // Fullwidth
    0x104A0, // Osmanya
    0x10D30, // Hanifi Rohingya
    0x10D40, // Garay
    0x11066, // Brahmi
    0x110F0, // Sora Sompeng
    0x11136, // Chakma
    0x111D0, // Sharada
    0x112F0, // Khudawadi
    0x11450, // Newa
    0x114D0, // Tirhuta
    0x11650, // Modi
    0x116C0, // Takri
    0x116D0, // Myanmar Pao
    0x116DA, // Myanmar Eastern Pwo Karen
    0x11730, // Ahom
    0x118E0, // Warang Citi
    0x11950, // Dives Akuru
    0x11BF0, // Sunuwar
    0x11C50, // Bhaiksuki
    0x11D50, // Masaram Gondi
    0x11DA0, // Gunjala Gondi
    0x11F50, // Kawi
    0x16130, // Gurung Khema
    0x16A60, // Mro
    0x16AC0, // Tangsa
    0x16B50, // Pahawh Hmong
    0x16D70, // Kirat Rai
    0x1CCF0, // Outlined
    0x1D7CE, // Mathematical bold
    0x1D7D8, // Mathematical double-struck
    0x1D7E2, // Mathematical sans-serif
    0x1D7EC, // Mathematical sans-serif bold
    0x1D7F6, // Mathematical monospace
    0x1E140, // Nyiakeng Puachue Hmong
    0x1E2F0, // Wancho
    0x1E4F0, // Nag Mundari
    0x1E5F1, // Ol Onal
    0x1E950, // Adlam
    0x1FBF0, // Segmented
];

/// Returns the decimal value (0-9) of `c` if it is a decimal digit in any
/// script, `None` otherwise.
///
/// # Example
/// ```
/// use numeric_text::numeric::digit_value;
///
/// assert_eq!(digit_value('7'), Some(7));
/// assert_eq!(digit_value('५'), Some(5)); // DEVANAGARI DIGIT FIVE
/// assert_eq!(digit_value('x'), None);
/// ```
#[inline]
pub fn digit_value(c: char) -> Option<u32> {
    let cp = c as u32;
    if c.is_ascii_digit() {
        return Some(cp - 0x30);
    }

    // Index of the last run starting at or before `cp`
    let idx = match DIGIT_ZEROS.binary_search(&cp) {
        Ok(i) => i,
        Err(0) => return None,
        Err(i) => i - 1,
    };

    let offset = cp - DIGIT_ZEROS[idx];
    (offset < 10).then_some(offset)
}

/// Whether `c` is a decimal digit in any script.
#[inline]
pub fn is_digit_char(c: char) -> bool {
    digit_value(c).is_some()
}

/// Whether a grapheme cluster is a single numeral.
///
/// Only clusters made of exactly one scalar value qualify, so a digit carrying
/// a combining mark (`"5\u{0301}"`) is not a numeral.
#[inline]
pub fn is_numeral(grapheme: &str) -> bool {
    let mut chars = grapheme.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => is_digit_char(c),
        _ => false,
    }
}

/// Returns the ASCII digit for `c` if it is a decimal digit in any script.
#[inline]
pub fn to_ascii_digit(c: char) -> Option<char> {
    digit_value(c).and_then(|d| char::from_digit(d, 10))
}

/// Maps the digit `value` (0-9) into the script whose zero is `zero`.
///
/// Returns `None` if `zero` is not a digit zero or `value` is out of range.
#[inline]
pub fn digit_in_script(zero: char, value: u32) -> Option<char> {
    if value > 9 || digit_value(zero) != Some(0) {
        return None;
    }
    char::from_u32(zero as u32 + value)
}

// ============================================================================
// Tests
// ============================================================================
