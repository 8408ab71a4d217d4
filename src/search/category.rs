// ============================================================
// Layer 5 — Category Tagging Rule
// ============================================================
// Maps a category label to a display style by substring, in a
// fixed priority order. First match wins:
//
//   1. 燃やせるごみ               → Burnable     (#ff6b6b)
//   2. 燃やせないごみ / カナモノ  → NonBurnable  (#4ecdc4)
//   3. ビン / ペットボトル        → Bottle       (#45b7d1)
//   4. 空き缶                     → Can          (#96ceb4)
//   5. anything else              → Plain        (bold only)
//
// Labels can contain several markers at once (e.g.
// "空き缶・ビン"), so the order of the checks decides the style.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleClass {
    Burnable,
    NonBurnable,
    Bottle,
    Can,
    Plain,
}

/// (markers, style) in priority order
const RULES: [(&[&str], StyleClass); 4] = [
    (&["燃やせるごみ"], StyleClass::Burnable),
    (&["燃やせないごみ", "カナモノ"], StyleClass::NonBurnable),
    (&["ビン", "ペットボトル"], StyleClass::Bottle),
    (&["空き缶"], StyleClass::Can),
];

pub fn tag(category: &str) -> StyleClass {
    RULES
        .iter()
        .find(|(markers, _)| markers.iter().any(|m| category.contains(m)))
        .map(|(_, style)| *style)
        .unwrap_or(StyleClass::Plain)
}

impl StyleClass {
    /// RGB colour of the label, `None` for plain bold text
    pub fn rgb(self) -> Option<(u8, u8, u8)> {
        match self {
            Self::Burnable    => Some((0xff, 0x6b, 0x6b)),
            Self::NonBurnable => Some((0x4e, 0xcd, 0xc4)),
            Self::Bottle      => Some((0x45, 0xb7, 0xd1)),
            Self::Can         => Some((0x96, 0xce, 0xb4)),
            Self::Plain       => None,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_rule() {
        assert_eq!(tag("燃やせるごみ"), StyleClass::Burnable);
        assert_eq!(tag("燃やせないごみ"), StyleClass::NonBurnable);
        assert_eq!(tag("カナモノ"), StyleClass::NonBurnable);
        assert_eq!(tag("ビン"), StyleClass::Bottle);
        assert_eq!(tag("ペットボトル"), StyleClass::Bottle);
        assert_eq!(tag("空き缶"), StyleClass::Can);
        assert_eq!(tag("粗大ごみ"), StyleClass::Plain);
        assert_eq!(tag(""), StyleClass::Plain);
    }

    #[test]
    fn test_priority_on_overlapping_labels() {
        // Burnable outranks everything after it
        assert_eq!(tag("燃やせるごみ（ビン以外）"), StyleClass::Burnable);
        // Non-burnable outranks bottle and can
        assert_eq!(tag("カナモノ・空き缶"), StyleClass::NonBurnable);
        // Bottle outranks can
        assert_eq!(tag("空き缶・ビン"), StyleClass::Bottle);
    }

    #[test]
    fn test_plain_has_no_colour() {
        assert_eq!(StyleClass::Plain.rgb(), None);
        assert_eq!(StyleClass::Burnable.rgb(), Some((0xff, 0x6b, 0x6b)));
    }
}
