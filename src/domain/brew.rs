//! Brew domain model and display rules.
//!
//! A [`Brew`] is one logged coffee preparation. Before the server assigns an
//! identity it exists as a [`NewBrew`]; the id is never changed after that.

use serde::{Deserialize, Serialize};

/// Default card images keyed by bean origin, checked in order.
const ORIGIN_IMAGES: [(&str, &str); 3] = [
    (
        "Ethiopian",
        "https://images.unsplash.com/photo-1610632380989-680fe40816c6?auto=format&fit=crop&w=400&q=80",
    ),
    (
        "Colombian",
        "https://images.unsplash.com/photo-1559056199-641a0ac8b55e?auto=format&fit=crop&w=400&q=80",
    ),
    (
        "Brazilian",
        "https://images.unsplash.com/photo-1514432324607-a09d9b4aefdd?auto=format&fit=crop&w=400&q=80",
    ),
];

/// Image used when neither the brew nor its origin provides one.
pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1611854779393-1b2da9d400fe?auto=format&fit=crop&w=400&q=80";

/// Brew fields as entered by the user, before the server assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBrew {
    pub bean_type: String,
    pub image_url: Option<String>,
    pub brew_type: String,
    pub water_temp: f64,
    pub weight_in: f64,
    pub weight_out: f64,
    /// Always `MM:SS`.
    pub brew_time: String,
    /// Seconds; zero means no bloom was recorded.
    pub bloom_time: u32,
    pub details: Option<String>,
}

/// A persisted brew.
///
/// # Fields
///
/// - `id`: server-assigned identity, immutable once set
/// - `bean_type`: bean label, never blank
/// - `image_url`: data URL or remote URL, if any
/// - `brew_type`: method label (preset or free text)
/// - `water_temp`: Celsius
/// - `weight_in` / `weight_out`: grams
/// - `brew_time`: `MM:SS`
/// - `bloom_time`: seconds, `0` when unset
/// - `details`: free-form notes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brew {
    pub id: i64,
    pub bean_type: String,
    pub image_url: Option<String>,
    pub brew_type: String,
    pub water_temp: f64,
    pub weight_in: f64,
    pub weight_out: f64,
    pub brew_time: String,
    pub bloom_time: u32,
    pub details: Option<String>,
}

impl Brew {
    /// Attaches a server-assigned id to submitted fields.
    #[must_use]
    pub fn from_new(id: i64, brew: NewBrew) -> Self {
        Self {
            id,
            bean_type: brew.bean_type,
            image_url: brew.image_url,
            brew_type: brew.brew_type,
            water_temp: brew.water_temp,
            weight_in: brew.weight_in,
            weight_out: brew.weight_out,
            brew_time: brew.brew_time,
            bloom_time: brew.bloom_time,
            details: brew.details,
        }
    }

    /// Strips the id, yielding the fields sent on create or full replace.
    #[must_use]
    pub fn to_new(&self) -> NewBrew {
        NewBrew {
            bean_type: self.bean_type.clone(),
            image_url: self.image_url.clone(),
            brew_type: self.brew_type.clone(),
            water_temp: self.water_temp,
            weight_in: self.weight_in,
            weight_out: self.weight_out,
            brew_time: self.brew_time.clone(),
            bloom_time: self.bloom_time,
            details: self.details.clone(),
        }
    }

    /// Whether the card shows a bloom annotation.
    #[must_use]
    pub const fn has_bloom(&self) -> bool {
        self.bloom_time > 0
    }

    /// Bloom label such as `30s`, or `None` when no bloom was recorded.
    #[must_use]
    pub fn bloom_label(&self) -> Option<String> {
        self.has_bloom()
            .then(|| format_time_label(&self.bloom_time.to_string()))
    }

    /// Brew time label for the stats grid.
    #[must_use]
    pub fn brew_time_label(&self) -> String {
        format_time_label(&self.brew_time)
    }

    /// Image to show on the card.
    ///
    /// Uses `image_url` unless it is missing or a placeholder; otherwise picks
    /// the first origin image whose name appears in the bean type.
    #[must_use]
    pub fn display_image(&self) -> &str {
        if let Some(url) = self.image_url.as_deref() {
            if !url.is_empty() && !url.contains("placeholder") {
                return url;
            }
        }

        let bean = self.bean_type.to_lowercase();
        ORIGIN_IMAGES
            .iter()
            .find(|(origin, _)| bean.contains(&origin.to_lowercase()))
            .map_or(DEFAULT_IMAGE, |&(_, url)| url)
    }
}

/// Appends a seconds suffix to bare numbers.
///
/// Values already containing `:` or `s`, and the literal `N/A`, are returned
/// unchanged.
#[must_use]
pub fn format_time_label(value: &str) -> String {
    if value.contains(':') || value.contains('s') || value == "N/A" {
        value.to_string()
    } else {
        format!("{value}s")
    }
}

/// Formats a measurement without a trailing `.0` for whole numbers.
#[must_use]
pub fn format_measure(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Parses a temperature or weight; only finite decimals are accepted.
#[must_use]
pub fn parse_measure(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Leading integer of `raw`, ignoring whatever follows the digits.
///
/// `"30s"` and `"30.5"` both read as 30. Returns `None` when no digits lead.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }
    let digits = unsigned.len() - unsigned.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}


#[cfg(test)]
mod tests {
    use super::fixtures::brew;
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("02:30", "02:30")]
    #[case("30", "30s")]
    #[case("45s", "45s")]
    #[case("N/A", "N/A")]
    fn time_label_suffixing(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_time_label(input), expected);
    }

    #[rstest]
    #[case("93", Some(93.0))]
    #[case(" 36.5 ", Some(36.5))]
    #[case("NaN", None)]
    #[case("inf", None)]
    #[case("-inf", None)]
    #[case("warm", None)]
    fn measures_must_be_finite(#[case] raw: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_measure(raw), expected);
    }

    #[rstest]
    #[case("30", Some(30))]
    #[case(" 30s", Some(30))]
    #[case("30.5", Some(30))]
    #[case("-5", Some(-5))]
    #[case("+7", Some(7))]
    #[case("", None)]
    #[case("s30", None)]
    #[case("--3", None)]
    fn leading_int_parsing(#[case] raw: &str, #[case] expected: Option<i64>) {
        assert_eq!(parse_leading_int(raw), expected);
    }

    #[test]
    fn zero_bloom_has_no_label() {
        let b = brew(1, "Kenyan");
        assert!(!b.has_bloom());
        assert_eq!(b.bloom_label(), None);
    }

    #[test]
    fn bloom_label_appends_seconds() {
        let mut b = brew(1, "Kenyan");
        b.bloom_time = 30;
        assert_eq!(b.bloom_label().as_deref(), Some("30s"));
    }

    #[test]
    fn display_image_prefers_own_url() {
        let mut b = brew(1, "Ethiopian Yirgacheffe");
        b.image_url = Some("data:image/png;base64,AAAA".to_string());
        assert_eq!(b.display_image(), "data:image/png;base64,AAAA");
    }

    #[test]
    fn display_image_falls_back_to_origin() {
        let mut b = brew(1, "washed ethiopian yirgacheffe");
        b.image_url = Some("https://example.com/placeholder.png".to_string());
        assert!(b.display_image().contains("photo-1610632380989"));
    }

    #[test]
    fn display_image_defaults_when_origin_unknown() {
        let b = brew(1, "Sumatra Mandheling");
        assert_eq!(b.display_image(), DEFAULT_IMAGE);
    }

    #[test]
    fn new_round_trip_keeps_fields() {
        let b = brew(7, "Colombian");
        assert_eq!(Brew::from_new(7, b.to_new()), b);
    }

    #[test]
    fn measures_drop_trailing_zero() {
        assert_eq!(format_measure(18.0), "18");
        assert_eq!(format_measure(92.5), "92.5");
    }
}
