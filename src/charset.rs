//! Character classes shared by the classifier and the generator.

/// Symbols recognised as "special characters".
pub const SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Generation alphabet: ASCII letters, digits and [`SYMBOLS`].
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                              abcdefghijklmnopqrstuvwxyz\
                              0123456789\
                              !@#$%^&*(),.?\":{}|<>";

/// Returns `true` if `c` belongs to [`SYMBOLS`].
pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

/// Which character classes occur at least once in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterClasses {
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl CharacterClasses {
    pub fn of(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut acc, c| {
            acc.upper |= c.is_ascii_uppercase();
            acc.lower |= c.is_ascii_lowercase();
            acc.digit |= c.is_ascii_digit();
            acc.symbol |= is_symbol(c);
            acc
        })
    }

    pub fn has_mixed_case(&self) -> bool {
        self.upper && self.lower
    }

    pub fn is_complete(&self) -> bool {
        self.upper && self.lower && self.digit && self.symbol
    }
}
