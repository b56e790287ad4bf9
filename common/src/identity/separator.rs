use std::fmt;

/// Character between the birth date and the serial number.
///
/// `+` historically marks a holder who is 100 years or older. Both forms pass
/// validation and are preserved when the number is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Separator {
    #[default]
    Dash,
    Plus,
}

impl Separator {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'-' => Some(Separator::Dash),
            b'+' => Some(Separator::Plus),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Separator::Dash => '-',
            Separator::Plus => '+',
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_byte() {
        assert_eq!(Separator::from_byte(b'-'), Some(Separator::Dash));
        assert_eq!(Separator::from_byte(b'+'), Some(Separator::Plus));
        assert_eq!(Separator::from_byte(b'_'), None);
        assert_eq!(Separator::from_byte(b'1'), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Separator::Dash.to_string(), "-");
        assert_eq!(Separator::Plus.to_string(), "+");
    }
}
