//! International Morse Code table.
//!
//! Maps the supported character set (A-Z, 0-9, and eleven punctuation marks)
//! to canonical dot/dash sequences. Lookup is pure and table-driven; any
//! character outside the supported set is simply unmapped.

/// One atomic Morse timing unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorseSymbol {
    /// Short element, one dot-length of tone.
    Dot,
    /// Long element, three dot-lengths of tone.
    Dash,
}

impl MorseSymbol {
    /// Duration of this symbol in dot-lengths.
    pub fn units(&self) -> u32 {
        match self {
            MorseSymbol::Dot => 1,
            MorseSymbol::Dash => 3,
        }
    }

    /// Renders this symbol as its conventional text form.
    pub fn render(&self) -> char {
        match self {
            MorseSymbol::Dot => '.',
            MorseSymbol::Dash => '-',
        }
    }
}

/// Looks up the Morse sequence for a character.
///
/// Letters are case-folded to uppercase before lookup. Returns `None` for
/// any character outside the 47-entry supported set, including whitespace
/// (word splitting happens upstream in the encoder).
pub fn lookup(c: char) -> Option<&'static [MorseSymbol]> {
    use MorseSymbol::{Dash, Dot};

    let seq: &'static [MorseSymbol] = match c.to_ascii_uppercase() {
        'A' => &[Dot, Dash],
        'B' => &[Dash, Dot, Dot, Dot],
        'C' => &[Dash, Dot, Dash, Dot],
        'D' => &[Dash, Dot, Dot],
        'E' => &[Dot],
        'F' => &[Dot, Dot, Dash, Dot],
        'G' => &[Dash, Dash, Dot],
        'H' => &[Dot, Dot, Dot, Dot],
        'I' => &[Dot, Dot],
        'J' => &[Dot, Dash, Dash, Dash],
        'K' => &[Dash, Dot, Dash],
        'L' => &[Dot, Dash, Dot, Dot],
        'M' => &[Dash, Dash],
        'N' => &[Dash, Dot],
        'O' => &[Dash, Dash, Dash],
        'P' => &[Dot, Dash, Dash, Dot],
        'Q' => &[Dash, Dash, Dot, Dash],
        'R' => &[Dot, Dash, Dot],
        'S' => &[Dot, Dot, Dot],
        'T' => &[Dash],
        'U' => &[Dot, Dot, Dash],
        'V' => &[Dot, Dot, Dot, Dash],
        'W' => &[Dot, Dash, Dash],
        'X' => &[Dash, Dot, Dot, Dash],
        'Y' => &[Dash, Dot, Dash, Dash],
        'Z' => &[Dash, Dash, Dot, Dot],
        '0' => &[Dash, Dash, Dash, Dash, Dash],
        '1' => &[Dot, Dash, Dash, Dash, Dash],
        '2' => &[Dot, Dot, Dash, Dash, Dash],
        '3' => &[Dot, Dot, Dot, Dash, Dash],
        '4' => &[Dot, Dot, Dot, Dot, Dash],
        '5' => &[Dot, Dot, Dot, Dot, Dot],
        '6' => &[Dash, Dot, Dot, Dot, Dot],
        '7' => &[Dash, Dash, Dot, Dot, Dot],
        '8' => &[Dash, Dash, Dash, Dot, Dot],
        '9' => &[Dash, Dash, Dash, Dash, Dot],
        '.' => &[Dot, Dash, Dot, Dash, Dot, Dash],
        ',' => &[Dash, Dash, Dot, Dot, Dash, Dash],
        '?' => &[Dot, Dot, Dash, Dash, Dot, Dot],
        '!' => &[Dash, Dot, Dash, Dot, Dash, Dash],
        '/' => &[Dash, Dot, Dot, Dash, Dot],
        '&' => &[Dot, Dash, Dot, Dot, Dot],
        ':' => &[Dash, Dash, Dash, Dot, Dot, Dot],
        ';' => &[Dash, Dot, Dash, Dot, Dash, Dot],
        '_' => &[Dot, Dot, Dash, Dash, Dot, Dash],
        '$' => &[Dot, Dot, Dot, Dash, Dot, Dot, Dash],
        '@' => &[Dot, Dash, Dash, Dot, Dash, Dot],
        _ => return None,
    };

    Some(seq)
}
