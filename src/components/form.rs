//! Add-brew form.
//!
//! Holds the raw text of every input so that half-typed values survive
//! re-renders, and turns it into a [`NewBrew`] on submit. Validation errors are
//! kept on the form for display and also returned to the caller.

use crate::components::time_picker::{PickerEvent, TimePicker};
use crate::components::outside_click::PointerBus;
use crate::domain::{self, BrewMethod, BrewlogError, NewBrew, Result};

/// Text inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    BeanType,
    ImageUrl,
    CustomMethod,
    WaterTemp,
    WeightIn,
    WeightOut,
    BloomTime,
    Details,
}

impl FormField {
    /// Every field in display order.
    pub const ALL: [Self; 8] = [
        Self::BeanType,
        Self::ImageUrl,
        Self::CustomMethod,
        Self::WaterTemp,
        Self::WeightIn,
        Self::WeightOut,
        Self::BloomTime,
        Self::Details,
    ];

    /// Short name used to address the field from the console.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::BeanType => "bean",
            Self::ImageUrl => "image",
            Self::CustomMethod => "custom",
            Self::WaterTemp => "temp",
            Self::WeightIn => "in",
            Self::WeightOut => "out",
            Self::BloomTime => "bloom",
            Self::Details => "details",
        }
    }

    /// Looks a field up by its [`key`](Self::key).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Label used in the rendered form and in validation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BeanType => "Beans",
            Self::ImageUrl => "Image",
            Self::CustomMethod => "Custom brew method",
            Self::WaterTemp => "Water temperature",
            Self::WeightIn => "Weight in",
            Self::WeightOut => "Weight out",
            Self::BloomTime => "Bloom time",
            Self::Details => "Details",
        }
    }

    /// Example value shown while the input is empty.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::BeanType => "e.g., Ethiopian Yirgacheffe",
            Self::ImageUrl => "image URL (optional)",
            Self::CustomMethod => "Enter custom brew method",
            Self::WaterTemp => "e.g., 93",
            Self::WeightIn => "e.g., 18",
            Self::WeightOut => "e.g., 36",
            Self::BloomTime => "e.g., 30",
            Self::Details => "Add any additional notes about your brew",
        }
    }
}

/// Input to the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Input { field: FormField, value: String },
    /// A method label from the dropdown; `Other` enables the custom field.
    SelectMethod(String),
    Picker(PickerEvent),
    Submit,
    Cancel,
    /// Click on the dimmed area around the form.
    BackdropClick,
}

/// What the owner should do after a form event.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    /// Form state changed (or not); nothing for the owner to do.
    Updated(bool),
    /// Valid submission, ready to send.
    Submitted(NewBrew),
    /// Submission rejected; errors are shown on the form.
    Rejected,
    /// The user dismissed the form.
    Closed,
}

/// State of the add-brew form.
#[derive(Debug)]
pub struct AddBrewForm {
    pub bean_type: String,
    pub image_url: String,
    pub method: Option<BrewMethod>,
    pub custom_method: String,
    pub water_temp: String,
    pub weight_in: String,
    pub weight_out: String,
    pub bloom_time: String,
    pub details: String,
    pub picker: TimePicker,
    pub errors: Vec<String>,
}

impl AddBrewForm {
    /// Creates an empty form whose time picker listens on `bus`.
    #[must_use]
    pub fn new(bus: PointerBus) -> Self {
        Self {
            bean_type: String::new(),
            image_url: String::new(),
            method: None,
            custom_method: String::new(),
            water_temp: String::new(),
            weight_in: String::new(),
            weight_out: String::new(),
            bloom_time: "0".to_string(),
            details: String::new(),
            picker: TimePicker::new(bus),
            errors: Vec::new(),
        }
    }

    /// Whether the free-text method input is shown.
    #[must_use]
    pub fn wants_custom_method(&self) -> bool {
        self.method.as_ref().is_some_and(BrewMethod::is_custom)
    }

    /// Current text of a field.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::BeanType => &self.bean_type,
            FormField::ImageUrl => &self.image_url,
            FormField::CustomMethod => &self.custom_method,
            FormField::WaterTemp => &self.water_temp,
            FormField::WeightIn => &self.weight_in,
            FormField::WeightOut => &self.weight_out,
            FormField::BloomTime => &self.bloom_time,
            FormField::Details => &self.details,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::BeanType => &mut self.bean_type,
            FormField::ImageUrl => &mut self.image_url,
            FormField::CustomMethod => &mut self.custom_method,
            FormField::WaterTemp => &mut self.water_temp,
            FormField::WeightIn => &mut self.weight_in,
            FormField::WeightOut => &mut self.weight_out,
            FormField::BloomTime => &mut self.bloom_time,
            FormField::Details => &mut self.details,
        }
    }

    /// Applies an event to the form.
    pub fn handle(&mut self, event: FormEvent) -> FormOutcome {
        match event {
            FormEvent::Input { field, value } => {
                let slot = self.value_mut(field);
                let changed = *slot != value;
                *slot = value;
                FormOutcome::Updated(changed)
            }
            FormEvent::SelectMethod(label) => {
                let method = if label.trim().eq_ignore_ascii_case(BrewMethod::OTHER_LABEL) {
                    BrewMethod::Other(String::new())
                } else {
                    BrewMethod::from_label(&label)
                };
                // A typed method that matches no preset fills the custom input.
                if let BrewMethod::Other(text) = &method {
                    if !text.is_empty() {
                        self.custom_method.clone_from(text);
                    }
                }
                self.method = Some(method);
                FormOutcome::Updated(true)
            }
            FormEvent::Picker(picker_event) => FormOutcome::Updated(self.picker.handle(picker_event)),
            FormEvent::Submit => match self.submit() {
                Ok(brew) => {
                    self.errors.clear();
                    FormOutcome::Submitted(brew)
                }
                Err(BrewlogError::Validation(errors)) => {
                    tracing::debug!(error_count = errors.len(), "form submission rejected");
                    self.errors = errors;
                    FormOutcome::Rejected
                }
                Err(err) => {
                    self.errors = vec![err.to_string()];
                    FormOutcome::Rejected
                }
            },
            FormEvent::Cancel | FormEvent::BackdropClick => FormOutcome::Closed,
        }
    }

    /// Validates the inputs and builds the brew payload.
    ///
    /// The brew time is taken from the picker as `MM:SS`, so a picker that was
    /// never opened yields `00:00`.
    ///
    /// # Errors
    ///
    /// Returns [`BrewlogError::Validation`] listing every invalid field.
    pub fn submit(&self) -> Result<NewBrew> {
        let mut errors = Vec::new();

        let bean_type = self.bean_type.trim();
        if bean_type.is_empty() {
            errors.push(format!("{} are required", FormField::BeanType.label()));
        }

        let brew_type = match &self.method {
            None => {
                errors.push("Brew type is required".to_string());
                String::new()
            }
            Some(BrewMethod::Other(_)) => {
                let custom = self.custom_method.trim();
                if custom.is_empty() {
                    errors.push(format!("{} is required", FormField::CustomMethod.label()));
                }
                custom.to_string()
            }
            Some(preset) => preset.label().to_string(),
        };

        let water_temp = parse_measure(FormField::WaterTemp, &self.water_temp, &mut errors);
        let weight_in = parse_measure(FormField::WeightIn, &self.weight_in, &mut errors);
        let weight_out = parse_measure(FormField::WeightOut, &self.weight_out, &mut errors);
        let bloom_time = parse_bloom(&self.bloom_time, &mut errors);

        if !errors.is_empty() {
            return Err(BrewlogError::Validation(errors));
        }

        Ok(NewBrew {
            bean_type: bean_type.to_string(),
            image_url: non_blank(&self.image_url),
            brew_type,
            water_temp,
            weight_in,
            weight_out,
            brew_time: self.picker.value().to_mm_ss(),
            bloom_time,
            details: non_blank(&self.details),
        })
    }
}

fn parse_measure(field: FormField, raw: &str, errors: &mut Vec<String>) -> f64 {
    domain::parse_measure(raw).unwrap_or_else(|| {
        errors.push(format!("{} must be a number", field.label()));
        0.0
    })
}

/// Reads the leading whole seconds; input without leading digits counts as no
/// bloom.
fn parse_bloom(raw: &str, errors: &mut Vec<String>) -> u32 {
    match domain::parse_leading_int(raw) {
        Some(seconds) if seconds < 0 => {
            errors.push(format!("{} cannot be negative", FormField::BloomTime.label()));
            0
        }
        Some(seconds) => u32::try_from(seconds).unwrap_or(u32::MAX),
        None => 0,
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn filled() -> AddBrewForm {
        let mut form = AddBrewForm::new(PointerBus::new());
        form.bean_type = "Ethiopian Yirgacheffe".to_string();
        form.method = Some(BrewMethod::V60);
        form.water_temp = "93".to_string();
        form.weight_in = "18".to_string();
        form.weight_out = "36.5".to_string();
        form
    }

    #[test]
    fn untouched_picker_submits_zero_time() {
        let brew = filled().submit().unwrap();
        assert_eq!(brew.brew_time, "00:00");
        assert_eq!(brew.bloom_time, 0);
        assert_eq!(brew.details, None);
        assert_eq!(brew.image_url, None);
        assert!((brew.weight_out - 36.5).abs() < f64::EPSILON);
    }

    #[test]
    fn picked_time_is_frozen_into_text() {
        let mut form = filled();
        form.handle(FormEvent::Picker(PickerEvent::FieldClicked));
        form.handle(FormEvent::Picker(PickerEvent::SetMinute(3)));
        form.handle(FormEvent::Picker(PickerEvent::SetSecond(5)));
        form.handle(FormEvent::Picker(PickerEvent::Done));

        match form.handle(FormEvent::Submit) {
            FormOutcome::Submitted(brew) => assert_eq!(brew.brew_time, "03:05"),
            other => panic!("expected submission, got {other:?}"),
        }
    }

    #[test]
    fn other_method_uses_custom_text() {
        let mut form = filled();
        form.handle(FormEvent::SelectMethod("Other".to_string()));
        assert!(form.wants_custom_method());
        form.handle(FormEvent::Input {
            field: FormField::CustomMethod,
            value: " Siphon ".to_string(),
        });

        assert_eq!(form.submit().unwrap().brew_type, "Siphon");
    }

    #[test]
    fn typed_method_outside_presets_is_kept() {
        let mut form = filled();
        form.handle(FormEvent::SelectMethod("Siphon".to_string()));

        assert!(form.wants_custom_method());
        assert_eq!(form.value(FormField::CustomMethod), "Siphon");
        match form.handle(FormEvent::Submit) {
            FormOutcome::Submitted(brew) => assert_eq!(brew.brew_type, "Siphon"),
            other => panic!("expected submission, got {other:?}"),
        }
    }

    #[test]
    fn preset_selection_persists_label() {
        let mut form = filled();
        form.handle(FormEvent::SelectMethod("french press".to_string()));
        assert_eq!(form.submit().unwrap().brew_type, "French Press");
    }

    #[test]
    fn empty_form_reports_every_missing_field() {
        let mut form = AddBrewForm::new(PointerBus::new());
        assert_eq!(form.handle(FormEvent::Submit), FormOutcome::Rejected);
        assert_eq!(
            form.errors,
            vec![
                "Beans are required",
                "Brew type is required",
                "Water temperature must be a number",
                "Weight in must be a number",
                "Weight out must be a number",
            ]
        );
    }

    #[test]
    fn other_without_text_is_rejected() {
        let mut form = filled();
        form.handle(FormEvent::SelectMethod("Other".to_string()));
        let err = form.submit().unwrap_err();
        assert_eq!(err.to_string(), "Invalid brew: Custom brew method is required");
    }

    #[rstest]
    #[case("", 0)]
    #[case("abc", 0)]
    #[case(" 30 ", 30)]
    #[case("30.5", 30)]
    #[case("30s", 30)]
    fn bloom_parsing(#[case] raw: &str, #[case] expected: u32) {
        let mut form = filled();
        form.bloom_time = raw.to_string();
        assert_eq!(form.submit().unwrap().bloom_time, expected);
    }

    #[test]
    fn negative_bloom_is_rejected() {
        let mut form = filled();
        form.bloom_time = "-5".to_string();
        assert!(matches!(form.submit(), Err(BrewlogError::Validation(errors)) if errors == ["Bloom time cannot be negative"]));
    }

    #[rstest]
    #[case("inf")]
    #[case("NaN")]
    #[case("ninety")]
    fn non_finite_measure_is_rejected(#[case] raw: &str) {
        let mut form = filled();
        form.water_temp = raw.to_string();
        assert!(form.submit().is_err());
    }

    #[test]
    fn successful_submit_clears_previous_errors() {
        let mut form = filled();
        form.bean_type.clear();
        form.handle(FormEvent::Submit);
        assert_eq!(form.errors.len(), 1);

        form.handle(FormEvent::Input {
            field: FormField::BeanType,
            value: "Kenya AA".to_string(),
        });
        assert!(matches!(form.handle(FormEvent::Submit), FormOutcome::Submitted(_)));
        assert!(form.errors.is_empty());
    }

    #[test]
    fn field_keys_round_trip() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_key(field.key()), Some(field));
        }
        assert_eq!(FormField::from_key("grind"), None);
    }

    #[test]
    fn cancel_and_backdrop_close() {
        let mut form = filled();
        assert_eq!(form.handle(FormEvent::Cancel), FormOutcome::Closed);
        assert_eq!(form.handle(FormEvent::BackdropClick), FormOutcome::Closed);
    }
}
