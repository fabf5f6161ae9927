use crate::bmi::{BmiResult, IdealRow, Thresholds, ideal_table};
use crate::pass::{CharClass, ClassSet, charset, entropy_bits, strength};
use crate::settings::{PASS_LEN_MAX, PASS_LEN_MIN};
use crate::terminal::{
    BOLD, RESET, UNDERLINE, box_bottom, box_columns, box_line, box_line_center, box_opt, box_top,
    category_color, flush, print_error, print_rule, print_status,
};
use crate::view::ViewState;

pub fn enter_prompt() -> &'static str {
    "Enter menu option"
}

pub fn print_main_menu(invalid: &mut bool) {
    box_top("bmipass");
    box_line_center("BMI calculator and password generator");
    box_line("");
    box_line("  1) BMI calculator");
    box_line("  2) Ideal weight table");
    box_line("  3) Password generator");
    box_line("  4) help");
    box_line("  5) quit");
    box_line("");
    box_bottom();

    if std::mem::take(invalid) {
        print_error("Invalid option.");
    } else {
        println!();
    }
    flush();
}

pub fn print_help() {
    box_top("Help");
    box_line("MODES:");
    box_line("  Run without arguments for these menus, or pass a");
    box_line("  subcommand to print results and exit.");
    box_line("");
    box_line("COMMANDS:");
    box_opt("  bmi <KG> <M>", "Body-mass index and category");
    box_opt("  ideal [--height M]", "Ideal weight at BMI 22");
    box_opt("  pass [OPTIONS]", "Generate passwords (see pass --help)");
    box_opt("  settings show|reset|path", "Inspect the settings file");
    box_line("");
    box_line("KEYS:");
    box_opt("  Esc / Ctrl+Q", "Cancel input or leave a screen");
    box_opt("  Ctrl+U", "Clear the input line");
    box_opt("  Ctrl+C", "Quit immediately");
    box_line("");
    box_line("CATEGORIES (standard):");
    box_opt("  < 18.5", "Underweight");
    box_opt("  18.5 - 25", "Normal weight");
    box_opt("  25 - 30", "Overweight");
    box_opt("  >= 30", "Obese");
    box_line("  Legacy thresholds end Normal at 24.9 and Overweight");
    box_line("  at 29.9; the gaps up to 25 and 30 count as Obese.");
    box_bottom();
    println!();
}

fn format_result(result: &BmiResult) -> String {
    format!(
        "Your BMI: {BOLD}{:.1}{RESET}  {}{}{RESET}",
        result.index,
        category_color(result.category),
        result.category.label()
    )
}

pub fn print_bmi_screen(state: &ViewState, thresholds: Thresholds, status: Option<&str>) {
    box_top("BMI Calculator");
    box_line("");
    match &state.bmi {
        Some(result) => box_line_center(&format_result(result)),
        None => box_line_center("Enter your weight (kg) and height (m)."),
    }
    box_line("");
    box_line(&format!("Thresholds: {}", thresholds.name()));
    print_rule();
    box_line(&format!(
        "  Enter) calculate | t) {} | l) thresholds",
        state.toggle_label().to_lowercase()
    ));
    box_line("  Esc) back");
    box_bottom();
    print_status(status);
    flush();
}

pub fn format_ideal_row(row: &IdealRow) -> (String, String) {
    (format!("{:.1} m", row.height), format!("{:.1} kg", row.weight))
}

pub fn print_ideal_screen(state: &ViewState) {
    box_top("Ideal weight for each height");
    box_columns(
        &format!("{UNDERLINE}Height (m){RESET}"),
        &format!("{UNDERLINE}Ideal weight{RESET}"),
    );
    for row in ideal_table() {
        let (height, weight) = format_ideal_row(&row);
        box_columns(&height, &weight);
    }
    print_rule();
    box_line(&format!(
        "  t) {} | Esc) back",
        state.toggle_label().to_lowercase()
    ));
    box_bottom();
    println!();
    flush();
}

pub fn class_marker(enabled: bool) -> &'static str {
    if enabled { "[x]" } else { "[ ]" }
}

pub fn print_password_screen(
    state: &ViewState,
    length: usize,
    classes: ClassSet,
    status: Option<&str>,
) {
    box_top("Password Generator");
    box_line("");
    box_line(&format!(
        "  1) Length: {length}  ({PASS_LEN_MIN}-{PASS_LEN_MAX})"
    ));
    for (n, class) in CharClass::ALL.iter().enumerate() {
        box_line(&format!(
            "  {}) {} {}",
            n + 2,
            class_marker(classes.contains(*class)),
            class.name()
        ));
    }
    box_line("");

    let bits = entropy_bits(length, charset::size(classes));
    box_line(&format!("Entropy: {:.1} bits ({})", bits, strength(bits)));
    box_line("");
    match state.password() {
        Some(password) => box_line_center(&format!("{BOLD}{password}{RESET}")),
        None => box_line_center("No password yet."),
    }
    box_line("");
    print_rule();
    box_line("  Enter) generate | c) copy | s) save settings");
    box_line("  Esc) back");
    box_bottom();
    print_status(status);
    flush();
}
