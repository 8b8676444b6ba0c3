// Password strength checks

use once_cell::sync::Lazy;
use regex::Regex;

static LOWERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").expect("lowercase pattern"));
static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("uppercase pattern"));
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("digit pattern"));
static SYMBOL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("symbol pattern"));

/// One of the character classes a password must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            CharClass::Lowercase => &LOWERCASE,
            CharClass::Uppercase => &UPPERCASE,
            CharClass::Digit => &DIGIT,
            CharClass::Symbol => &SYMBOL,
        }
    }

    /// Human-readable name, used by the CLI when listing what is missing.
    pub fn describe(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase letter",
            CharClass::Uppercase => "uppercase letter",
            CharClass::Digit => "digit",
            CharClass::Symbol => "special character",
        }
    }
}

/// Which character classes were found in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordReport {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl PasswordReport {
    pub fn evaluate(password: &str) -> Self {
        Self {
            lowercase: CharClass::Lowercase.pattern().is_match(password),
            uppercase: CharClass::Uppercase.pattern().is_match(password),
            digit: CharClass::Digit.pattern().is_match(password),
            symbol: CharClass::Symbol.pattern().is_match(password),
        }
    }

    pub fn has(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Digit => self.digit,
            CharClass::Symbol => self.symbol,
        }
    }

    /// Classes absent from the password, in `CharClass::ALL` order.
    pub fn missing(&self) -> Vec<CharClass> {
        CharClass::ALL
            .into_iter()
            .filter(|c| !self.has(*c))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.lowercase && self.uppercase && self.digit && self.symbol
    }
}

/// Checks if a password is strong.
///
/// A strong password contains at least one each of:
/// - lowercase letter (`a-z`)
/// - uppercase letter (`A-Z`)
/// - digit
/// - character outside `a-zA-Z0-9` (space included)
///
/// There is no minimum length; the empty string fails because it has none
/// of the classes.
pub fn validate_password(password: &str) -> bool {
    PasswordReport::evaluate(password).is_valid()
}
