//! Screen state as an immutable value.
//!
//! Every transition consumes the old [`ViewState`] and returns the next one;
//! nothing mutates a field in place.

use zeroize::Zeroizing;

use crate::bmi::BmiResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Bmi,
    IdealWeight,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub screen: Screen,
    pub bmi: Option<BmiResult>,
    pub password: Option<Zeroizing<String>>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between the calculator and the ideal-weight table.
    pub fn toggle_view(self) -> Self {
        let screen = match self.screen {
            Screen::Bmi => Screen::IdealWeight,
            Screen::IdealWeight => Screen::Bmi,
            Screen::Password => Screen::Password,
        };
        Self { screen, ..self }
    }

    pub fn show(self, screen: Screen) -> Self {
        Self { screen, ..self }
    }

    pub fn with_bmi(self, result: BmiResult) -> Self {
        Self {
            bmi: Some(result),
            ..self
        }
    }

    pub fn clear_bmi(self) -> Self {
        Self { bmi: None, ..self }
    }

    pub fn with_password(self, password: Zeroizing<String>) -> Self {
        Self {
            password: Some(password),
            ..self
        }
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().map(String::as_str)
    }

    /// Caption for the view toggle on the current screen.
    pub fn toggle_label(&self) -> &'static str {
        match self.screen {
            Screen::Bmi => "Show ideal weight",
            Screen::IdealWeight => "Back to BMI",
            Screen::Password => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::{Thresholds, classify};

    #[test]
    fn toggle_twice_is_identity() {
        let start = ViewState::new();
        let toggled = start.clone().toggle_view();
        assert_eq!(toggled.screen, Screen::IdealWeight);
        assert_eq!(toggled.toggle_label(), "Back to BMI");
        assert_eq!(toggled.toggle_view(), start);
    }

    #[test]
    fn toggle_leaves_password_screen_alone() {
        let state = ViewState::new().show(Screen::Password).toggle_view();
        assert_eq!(state.screen, Screen::Password);
    }

    #[test]
    fn results_survive_screen_changes() {
        let result = classify(70.0, 1.75, Thresholds::Standard).unwrap();
        let state = ViewState::new()
            .with_bmi(result)
            .with_password(Zeroizing::new("abc".to_string()))
            .toggle_view()
            .show(Screen::Password);
        assert_eq!(state.bmi, Some(result));
        assert_eq!(state.password(), Some("abc"));
    }

    #[test]
    fn clear_bmi_drops_result_only() {
        let result = classify(70.0, 1.75, Thresholds::Standard).unwrap();
        let state = ViewState::new()
            .with_bmi(result)
            .with_password(Zeroizing::new("p".to_string()))
            .clear_bmi();
        assert_eq!(state.bmi, None);
        assert_eq!(state.password(), Some("p"));
    }
}
