//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word, or all copies already accounted for)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::word::{ALPHABET_SIZE, WORD_LENGTH, letter_index};
use super::{InputShapeError, Word};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter matches this position exactly
    Correct,
    /// Letter exists elsewhere in the target
    Present,
    /// Letter does not occur (after duplicates are accounted for)
    Absent,
}

impl Feedback {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts C/P/A, G/Y/-/_ and the usual emoji squares.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'C' | 'c' | 'G' | 'g' | '🟩' => Some(Self::Correct),
            'P' | 'p' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            'A' | 'a' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Letter form used when printing patterns
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Correct => 'C',
            Self::Present => 'P',
            Self::Absent => 'A',
        }
    }
}

/// Feedback pattern for a guess
///
/// Represents the per-position feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// All positions Correct
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// All positions Absent
    pub const NOTHING: Self = Self(0);

    /// Number of distinct patterns (3^5)
    pub const COUNT: usize = 243;

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Build a pattern from per-position feedback
    #[must_use]
    pub fn from_symbols(symbols: [Feedback; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for symbol in symbols {
            pattern += symbol.digit() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all Correct)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Decode into per-position feedback
    #[must_use]
    pub fn symbols(self) -> [Feedback; WORD_LENGTH] {
        let mut symbols = [Feedback::Absent; WORD_LENGTH];
        let mut val = self.0;
        for symbol in &mut symbols {
            *symbol = Feedback::from_digit(val % 3);
            val /= 3;
        }
        symbols
    }

    /// Calculate the pattern when `guess` is played against `target`
    ///
    /// Duplicate letters follow the usual rules: Correct positions claim their
    /// letter first, then Present marks are handed out left to right only while
    /// the target still has unclaimed copies of that letter.
    ///
    /// # Examples
    /// ```
    /// use sedecordle_solver::core::{Pattern, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("erase").unwrap();
    /// assert_eq!(Pattern::calculate(&guess, &target).to_string(), "PAPPA");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let guess = guess.chars();
        let target = target.chars();
        let mut result = [0u8; WORD_LENGTH];
        let mut remaining = [0u8; ALPHABET_SIZE];

        // First pass: Correct positions, tally the unmatched target letters
        for i in 0..WORD_LENGTH {
            if guess[i] == target[i] {
                result[i] = 2;
            } else {
                remaining[letter_index(target[i])] += 1;
            }
        }

        // Second pass: Present while supply lasts
        for i in 0..WORD_LENGTH {
            if result[i] == 0 {
                let slot = &mut remaining[letter_index(guess[i])];
                if *slot > 0 {
                    result[i] = 1;
                    *slot -= 1;
                }
            }
        }

        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for &digit in &result {
            pattern += digit * multiplier;
            multiplier *= 3;
        }

        Self(pattern)
    }

    /// Parse a pattern from text such as "CPAAP", "c p a a p", "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Errors
    /// Returns `InputShapeError` if there are not exactly five symbols or a
    /// symbol is not recognized.
    ///
    /// # Examples
    /// ```
    /// use sedecordle_solver::core::Pattern;
    ///
    /// let p1 = Pattern::parse("CP AC P").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    pub fn parse(s: &str) -> Result<Self, InputShapeError> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();

        if chars.len() != WORD_LENGTH {
            return Err(InputShapeError::PatternLength(chars.len()));
        }

        let mut symbols = [Feedback::Absent; WORD_LENGTH];
        for (slot, ch) in symbols.iter_mut().zip(chars) {
            *slot = Feedback::from_char(ch).ok_or(InputShapeError::InvalidSymbol(ch))?;
        }

        Ok(Self::from_symbols(symbols))
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.symbols()
            .iter()
            .map(|s| match s {
                Feedback::Correct => '🟩',
                Feedback::Present => '🟨',
                Feedback::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            write!(f, "{}", symbol.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = InputShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn pattern_perfect_constant() {
        assert_eq!(Pattern::PERFECT.value(), 242);
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.symbols(), [Feedback::Correct; WORD_LENGTH]);
        assert_eq!(Pattern::PERFECT.to_string(), "CCCCC");
    }

    #[test]
    fn pattern_all_absent() {
        let pattern = Pattern::calculate(&word("abcde"), &word("fghij"));
        assert_eq!(pattern, Pattern::NOTHING);
        assert_eq!(pattern.to_string(), "AAAAA");
    }

    #[test]
    fn pattern_self_is_perfect() {
        for w in ["crane", "slate", "speed", "zzzzz", "aaaaa", "erase"] {
            let w = word(w);
            assert_eq!(Pattern::calculate(&w, &w), Pattern::PERFECT);
        }
    }

    #[test]
    fn pattern_speed_against_erase() {
        // S in ERASE at 3, P absent, both E's present (ERASE has two), D absent
        let pattern = Pattern::calculate(&word("speed"), &word("erase"));

        assert_eq!(
            pattern.symbols(),
            [
                Feedback::Present,
                Feedback::Absent,
                Feedback::Present,
                Feedback::Present,
                Feedback::Absent,
            ]
        );
        // 1 + 0×3 + 1×9 + 1×27 + 0×81 = 37
        assert_eq!(pattern.value(), 37);
    }

    #[test]
    fn pattern_surplus_duplicates_are_absent() {
        // EERIE has three E's; THEME has two, one of them at position 4
        let pattern = Pattern::calculate(&word("eerie"), &word("theme"));
        assert_eq!(pattern.to_string(), "PAAAC");
    }

    #[test]
    fn pattern_correct_claims_supply_first() {
        // ROBOT vs FLOOR: second O is Correct, first O still gets the other O
        let pattern = Pattern::calculate(&word("robot"), &word("floor"));
        assert_eq!(pattern.to_string(), "PPACA");

        // LLLLL vs HELLO: both L's are claimed by Correct positions
        let pattern = Pattern::calculate(&word("lllll"), &word("hello"));
        assert_eq!(pattern.to_string(), "AACCA");
    }

    #[test]
    fn pattern_is_deterministic() {
        let (g, t) = (word("sassy"), word("essay"));
        assert_eq!(Pattern::calculate(&g, &t), Pattern::calculate(&g, &t));
    }

    #[test]
    fn pattern_symbols_roundtrip_through_value() {
        let symbols = [
            Feedback::Correct,
            Feedback::Present,
            Feedback::Absent,
            Feedback::Absent,
            Feedback::Correct,
        ];
        let pattern = Pattern::from_symbols(symbols);
        assert_eq!(pattern.symbols(), symbols);
        assert_eq!(pattern.value(), 2 + 3 + 162);
    }

    #[test]
    fn pattern_parse_accepts_all_notations() {
        let p1 = Pattern::parse("CPACA").unwrap();
        let p2 = Pattern::parse("c p a c a").unwrap();
        let p3 = Pattern::parse("GY-G_").unwrap();
        let p4 = Pattern::parse("🟩🟨⬜🟩⬛").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1, p4);
        assert_eq!(p1.to_string(), "CPACA");
    }

    #[test]
    fn pattern_parse_rejects_bad_shape() {
        assert_eq!(
            Pattern::parse("CPACAC"),
            Err(InputShapeError::PatternLength(6))
        );
        assert_eq!(Pattern::parse("CPA"), Err(InputShapeError::PatternLength(3)));
        assert_eq!(Pattern::parse(""), Err(InputShapeError::PatternLength(0)));
        assert_eq!(
            Pattern::parse("CPXCA"),
            Err(InputShapeError::InvalidSymbol('X'))
        );
    }

    #[test]
    fn pattern_to_emoji() {
        let pattern = Pattern::parse("CPAAA").unwrap();
        assert_eq!(pattern.to_emoji(), "🟩🟨⬜⬜⬜");
    }
}
