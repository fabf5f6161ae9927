use crate::app::App;
use crate::bmi::Thresholds;
use crate::notify::{BufferNotifier, Notifier, SystemClipboard};
use crate::pass::CharClass;
use crate::settings::Settings;
use crate::terminal::clear;
use crate::view::Screen;

use super::{
    enter_prompt, get_decimal_input, get_editable_input, get_length_input, print_bmi_screen,
    print_help, print_ideal_screen, print_main_menu, print_password_screen,
};

pub type TuiApp = App<BufferNotifier, SystemClipboard>;

const INVALID_OPTION: &str = "Invalid option.";
const SETTINGS_SAVED: &str = "Settings saved.";

use LoopAction::*;
pub enum LoopAction {
    Break,
    Continue,
}

/// Last values typed into the BMI form, offered again on the next edit.
#[derive(Debug, Default, Clone, Copy)]
struct BmiForm {
    weight: f64,
    height: f64,
}

pub fn main_menu(app: &mut TuiApp, settings: &mut Settings) {
    let mut print_invalid = false;
    let mut form = BmiForm::default();

    loop {
        print_main_menu(&mut print_invalid);

        // Esc, or a terminal that stopped answering, leaves the menus
        let Some(input) = get_editable_input(enter_prompt(), "") else {
            clear();
            break;
        };

        let screen = match input.trim() {
            "1" => Screen::Bmi,
            "2" => Screen::IdealWeight,
            "3" => Screen::Password,
            "4" => {
                clear();
                print_help();
                continue;
            }
            "5" => {
                clear();
                break;
            }
            "" => {
                clear();
                continue;
            }
            _ => {
                clear();
                print_invalid = true;
                continue;
            }
        };

        app.show(screen);
        run_screens(app, settings, &mut form);
    }
}

/// Redraws whichever screen the view state points at until the user backs
/// out to the main menu.
fn run_screens(app: &mut TuiApp, settings: &mut Settings, form: &mut BmiForm) {
    loop {
        clear();
        let action = match app.state().screen {
            Screen::Bmi => bmi_screen(app, settings, form),
            Screen::IdealWeight => ideal_screen(app),
            Screen::Password => password_screen(app, settings),
        };
        if let Break = action {
            clear();
            break;
        }
    }
}

fn toggled(thresholds: Thresholds) -> Thresholds {
    match thresholds {
        Thresholds::Standard => Thresholds::Legacy,
        Thresholds::Legacy => Thresholds::Standard,
    }
}

fn bmi_screen(app: &mut TuiApp, settings: &mut Settings, form: &mut BmiForm) -> LoopAction {
    let status = app.notifier_mut().take();
    print_bmi_screen(app.state(), app.thresholds(), status.as_deref());

    let Some(choice) = get_editable_input(enter_prompt(), "") else {
        return Break;
    };

    match choice.trim() {
        "" => {
            let Some(weight) = get_decimal_input("Weight (kg)", form.weight) else {
                return Continue;
            };
            let Some(height) = get_decimal_input("Height (m)", form.height) else {
                return Continue;
            };
            *form = BmiForm { weight, height };
            // failures are reported through the notifier
            let _ = app.calculate_bmi(weight, height);
        }
        "t" => app.toggle_view(),
        "l" => {
            let thresholds = toggled(app.thresholds());
            app.set_thresholds(thresholds);
            settings.thresholds = thresholds;
            if app.state().bmi.is_some() {
                let _ = app.calculate_bmi(form.weight, form.height);
            }
        }
        "b" => return Break,
        _ => app.notifier_mut().notify(INVALID_OPTION),
    }
    Continue
}

fn ideal_screen(app: &mut TuiApp) -> LoopAction {
    print_ideal_screen(app.state());

    let Some(choice) = get_editable_input(enter_prompt(), "") else {
        return Break;
    };

    match choice.trim() {
        "t" => app.toggle_view(),
        "b" => return Break,
        _ => {}
    }
    Continue
}

fn password_screen(app: &mut TuiApp, settings: &mut Settings) -> LoopAction {
    let status = app.notifier_mut().take();
    print_password_screen(
        app.state(),
        settings.pass_length,
        settings.classes,
        status.as_deref(),
    );

    let Some(choice) = get_editable_input(enter_prompt(), "") else {
        return Break;
    };

    match choice.trim() {
        "" => {
            let generated = app.generate_password(settings.pass_length, settings.classes);
            if generated.is_ok() && settings.to_clipboard {
                app.copy_password();
            }
        }
        "1" => {
            if let Some(length) = get_length_input("Enter new password length", settings.pass_length)
            {
                settings.pass_length = length;
            }
        }
        n @ ("2" | "3" | "4" | "5") => {
            // "2" is the first class row
            let idx = n.as_bytes()[0] - b'2';
            settings.classes.toggle(CharClass::ALL[idx as usize]);
        }
        "c" => {
            app.copy_password();
        }
        "s" => match settings.save_to_file() {
            Ok(()) => app.notifier_mut().notify(SETTINGS_SAVED),
            Err(e) => app.notifier_mut().notify(&e.to_string()),
        },
        "b" => return Break,
        _ => app.notifier_mut().notify(INVALID_OPTION),
    }
    Continue
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_toggle_back_and_forth() {
        assert_eq!(toggled(Thresholds::Standard), Thresholds::Legacy);
        assert_eq!(toggled(toggled(Thresholds::Standard)), Thresholds::Standard);
    }
}
