//! Brew method catalogue.
//!
//! The add form offers a fixed list of methods plus an "Other" choice that
//! takes free text. On the wire and in [`Brew`](crate::domain::Brew) the method
//! is plain text, so a custom value round-trips unchanged.

use std::fmt;

/// A brewing method chosen in the add form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BrewMethod {
    V60,
    Espresso,
    Aeropress,
    FrenchPress,
    Chemex,
    KalitaWave,
    MokaPot,
    ColdBrew,
    /// Free-text method entered after choosing "Other".
    Other(String),
}

impl BrewMethod {
    /// The fixed methods in the order the form lists them.
    pub const PRESETS: [Self; 8] = [
        Self::V60,
        Self::Espresso,
        Self::Aeropress,
        Self::FrenchPress,
        Self::Chemex,
        Self::KalitaWave,
        Self::MokaPot,
        Self::ColdBrew,
    ];

    /// Label shown for the free-text choice.
    pub const OTHER_LABEL: &'static str = "Other";

    /// Display label, which is also the persisted text.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::V60 => "V60",
            Self::Espresso => "Espresso",
            Self::Aeropress => "Aeropress",
            Self::FrenchPress => "French Press",
            Self::Chemex => "Chemex",
            Self::KalitaWave => "Kalita Wave",
            Self::MokaPot => "Moka Pot",
            Self::ColdBrew => "Cold Brew",
            Self::Other(text) => text,
        }
    }

    /// Maps persisted text back onto a preset, falling back to `Other`.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    #[must_use]
    pub fn from_label(text: &str) -> Self {
        let trimmed = text.trim();
        Self::PRESETS
            .iter()
            .find(|preset| preset.label().eq_ignore_ascii_case(trimmed))
            .cloned()
            .unwrap_or_else(|| Self::Other(trimmed.to_string()))
    }

    /// Whether this is a free-text method.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

impl fmt::Display for BrewMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_round_trip_through_labels() {
        for preset in BrewMethod::PRESETS {
            assert_eq!(BrewMethod::from_label(preset.label()), preset);
        }
    }

    #[test]
    fn unknown_label_becomes_other() {
        let method = BrewMethod::from_label("  Siphon ");
        assert_eq!(method, BrewMethod::Other("Siphon".to_string()));
        assert!(method.is_custom());
        assert_eq!(method.to_string(), "Siphon");
    }

    #[test]
    fn label_lookup_ignores_case() {
        assert_eq!(BrewMethod::from_label("french press"), BrewMethod::FrenchPress);
    }
}
