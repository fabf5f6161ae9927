//! Controller between the front ends and the core.
//!
//! A user action goes in, the core runs, messages go out through the
//! [`Notifier`], and the [`ViewState`] is replaced with its successor.

use tracing::{debug, info};

use crate::bmi::{self, BmiResult, Thresholds};
use crate::error::{CalcError, PassError};
use crate::notify::{Clipboard, Notifier};
use crate::pass::{self, ClassSet};
use crate::rng::RandomSource;
use crate::view::{Screen, ViewState};

pub const COPIED: &str = "Password copied to clipboard.";
pub const NOTHING_TO_COPY: &str = "Generate a password first.";

pub struct App<N, C> {
    notifier: N,
    clipboard: C,
    rng: Box<dyn RandomSource>,
    thresholds: Thresholds,
    state: ViewState,
}

impl<N: Notifier, C: Clipboard> App<N, C> {
    pub fn new(notifier: N, clipboard: C, rng: Box<dyn RandomSource>, thresholds: Thresholds) -> Self {
        Self {
            notifier,
            clipboard,
            rng,
            thresholds,
            state: ViewState::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn set_thresholds(&mut self, thresholds: Thresholds) {
        self.thresholds = thresholds;
    }

    pub fn set_rng(&mut self, rng: Box<dyn RandomSource>) {
        self.rng = rng;
    }

    fn transition(&mut self, step: impl FnOnce(ViewState) -> ViewState) {
        let current = std::mem::take(&mut self.state);
        self.state = step(current);
    }

    /// Invalid input clears any previous result so nothing stale is shown.
    pub fn calculate_bmi(&mut self, weight: f64, height: f64) -> Result<BmiResult, CalcError> {
        match bmi::classify(weight, height, self.thresholds) {
            Ok(result) => {
                debug!(index = result.index, category = ?result.category, "bmi classified");
                self.transition(|s| s.with_bmi(result));
                Ok(result)
            }
            Err(e) => {
                self.notifier.notify(&e.to_string());
                self.transition(ViewState::clear_bmi);
                Err(e)
            }
        }
    }

    /// An empty class selection keeps the previously generated password.
    pub fn generate_password(&mut self, length: usize, classes: ClassSet) -> Result<(), PassError> {
        match pass::generate(length, classes, &mut *self.rng) {
            Ok(password) => {
                self.transition(|s| s.with_password(password));
                Ok(())
            }
            Err(e) => {
                self.notifier.notify(&e.to_string());
                Err(e)
            }
        }
    }

    /// Returns whether the clipboard accepted the password. The password
    /// itself is never touched.
    pub fn copy_password(&mut self) -> bool {
        let Some(password) = self.state.password() else {
            self.notifier.notify(NOTHING_TO_COPY);
            return false;
        };

        match self.clipboard.copy(password) {
            Ok(()) => {
                info!("password copied to clipboard");
                self.notifier.notify(COPIED);
                true
            }
            Err(e) => {
                self.notifier.notify(&e.to_string());
                false
            }
        }
    }

    pub fn toggle_view(&mut self) {
        self.transition(ViewState::toggle_view);
    }

    pub fn show(&mut self, screen: Screen) {
        self.transition(|s| s.show(screen));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmi::Category;
    use crate::notify::{BufferNotifier, MemoryClipboard};
    use crate::pass::CharClass;
    use crate::rng::SequenceSource;

    fn app_with(clipboard: MemoryClipboard) -> App<BufferNotifier, MemoryClipboard> {
        App::new(
            BufferNotifier::default(),
            clipboard,
            Box::new(SequenceSource::new(vec![0u64, 1, 2, 3, 4, 5, 6, 7, 8, 9])),
            Thresholds::Standard,
        )
    }

    fn app() -> App<BufferNotifier, MemoryClipboard> {
        app_with(MemoryClipboard::default())
    }

    #[test]
    fn bmi_success_is_stored() {
        let mut app = app();
        let result = app.calculate_bmi(70.0, 1.75).unwrap();
        assert_eq!(result.category, Category::Normal);
        assert_eq!(app.state().bmi, Some(result));
        assert!(app.notifier().messages().is_empty());
    }

    #[test]
    fn invalid_bmi_notifies_and_clears() {
        let mut app = app();
        app.calculate_bmi(70.0, 1.75).unwrap();
        assert!(app.calculate_bmi(0.0, 1.75).is_err());
        assert_eq!(app.state().bmi, None);
        assert_eq!(
            app.notifier().last(),
            Some("Please enter valid values for weight and height.")
        );
    }

    #[test]
    fn thresholds_can_be_switched() {
        let mut app = app();
        app.set_thresholds(Thresholds::Legacy);
        let result = app.calculate_bmi(24.95, 1.0).unwrap();
        assert_eq!(result.category, Category::Obese);
    }

    #[test]
    fn password_is_generated_from_injected_source() {
        let mut app = app();
        app.generate_password(10, ClassSet::only(CharClass::Digits)).unwrap();
        assert_eq!(app.state().password(), Some("0123456789"));
    }

    #[test]
    fn empty_selection_keeps_previous_password() {
        let mut app = app();
        app.generate_password(4, ClassSet::only(CharClass::Digits)).unwrap();
        let err = app.generate_password(4, ClassSet::none()).unwrap_err();
        assert_eq!(err, PassError::NoCharacterClassSelected);
        assert_eq!(app.state().password(), Some("0123"));
        assert_eq!(app.notifier().last(), Some("Select at least one character type."));
    }

    #[test]
    fn copy_puts_password_on_clipboard() {
        let mut app = app();
        app.generate_password(4, ClassSet::only(CharClass::Digits)).unwrap();
        assert!(app.copy_password());
        assert_eq!(app.clipboard().contents(), Some("0123"));
        assert_eq!(app.notifier().last(), Some(COPIED));
    }

    #[test]
    fn copy_failure_is_reported_and_password_kept() {
        let mut app = app_with(MemoryClipboard::failing());
        app.generate_password(4, ClassSet::only(CharClass::Digits)).unwrap();
        assert!(!app.copy_password());
        assert_eq!(app.state().password(), Some("0123"));
        assert!(app.notifier().last().unwrap().starts_with("clipboard unavailable"));
    }

    #[test]
    fn copy_without_password() {
        let mut app = app();
        assert!(!app.copy_password());
        assert_eq!(app.notifier().last(), Some(NOTHING_TO_COPY));
    }

    #[test]
    fn view_transitions_go_through_state() {
        let mut app = app();
        app.toggle_view();
        assert_eq!(app.state().screen, Screen::IdealWeight);
        app.show(Screen::Password);
        assert_eq!(app.state().screen, Screen::Password);
    }
}
