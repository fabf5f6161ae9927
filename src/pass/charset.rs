//! Character classes and working-alphabet construction.

pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+{}[]<>?";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Digits,
    Symbols,
    Uppercase,
    Lowercase,
}

impl CharClass {
    /// Alphabet order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Digits,
        CharClass::Symbols,
        CharClass::Uppercase,
        CharClass::Lowercase,
    ];

    pub fn members(self) -> &'static str {
        match self {
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Digits => "Digits",
            CharClass::Symbols => "Symbols",
            CharClass::Uppercase => "Uppercase",
            CharClass::Lowercase => "Lowercase",
        }
    }
}

/// Which classes feed the working alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSet {
    pub digits: bool,
    pub symbols: bool,
    pub uppercase: bool,
    pub lowercase: bool,
}

impl ClassSet {
    pub const fn all() -> Self {
        Self {
            digits: true,
            symbols: true,
            uppercase: true,
            lowercase: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            digits: false,
            symbols: false,
            uppercase: false,
            lowercase: false,
        }
    }

    pub fn only(class: CharClass) -> Self {
        let mut set = Self::none();
        set.set(class, true);
        set
    }

    pub fn contains(&self, class: CharClass) -> bool {
        match class {
            CharClass::Digits => self.digits,
            CharClass::Symbols => self.symbols,
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
        }
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        match class {
            CharClass::Digits => self.digits = enabled,
            CharClass::Symbols => self.symbols = enabled,
            CharClass::Uppercase => self.uppercase = enabled,
            CharClass::Lowercase => self.lowercase = enabled,
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.set(class, !self.contains(class));
    }

    pub fn is_empty(&self) -> bool {
        !(self.digits || self.symbols || self.uppercase || self.lowercase)
    }

    /// Enabled classes in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

impl Default for ClassSet {
    fn default() -> Self {
        Self::all()
    }
}

/// Working alphabet: the enabled classes concatenated in [`CharClass::ALL`] order.
pub fn alphabet(classes: ClassSet) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(classes));
    for class in classes.iter() {
        chars.extend_from_slice(class.members().as_bytes());
    }
    chars
}

/// Length of the working alphabet (for entropy calculation).
pub fn size(classes: ClassSet) -> usize {
    classes.iter().map(|c| c.members().len()).sum()
}
