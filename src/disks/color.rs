#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiskColor {
    Light,
    Dark,
}

impl DiskColor {
    /// Single-letter token used in row renderings
    pub fn token(self) -> &'static str {
        match self {
            DiskColor::Light => "L",
            DiskColor::Dark => "D",
        }
    }

    /// Parse a rendering token back into a color
    pub fn from_token(token: &str) -> Option<DiskColor> {
        match token {
            "L" => Some(DiskColor::Light),
            "D" => Some(DiskColor::Dark),
            _ => None,
        }
    }

    /// Color required at `index` in the canonical alternating row
    pub fn alternating_at(index: usize) -> DiskColor {
        if index % 2 == 0 {
            DiskColor::Light
        } else {
            DiskColor::Dark
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip() {
        for color in [DiskColor::Light, DiskColor::Dark] {
            assert_eq!(DiskColor::from_token(color.token()), Some(color));
        }
        assert_eq!(DiskColor::from_token("l"), None);
        assert_eq!(DiskColor::from_token("X"), None);
    }

    #[test]
    fn test_alternating_at() {
        assert_eq!(DiskColor::alternating_at(0), DiskColor::Light);
        assert_eq!(DiskColor::alternating_at(1), DiskColor::Dark);
        assert_eq!(DiskColor::alternating_at(6), DiskColor::Light);
    }
}
