/// Pure functions for birthday greeting formatting
use crate::models::Birthday;
use crate::utils::datetime::{calculate_age, format_date_display};

/// Name used when a record carries no `name` field
pub const UNKNOWN_NAME: &str = "someone";

/// Replace placeholders in a message template
pub fn apply_message_template(template: &str, name: &str, date: &str, age: &str) -> String {
    template
        .replace("{name}", name)
        .replace("{date}", date)
        .replace("{age}", age)
        .replace("\\n", "\n")
}

/// Format age information string
pub fn format_age_info(birth_year: Option<i32>, current_year: i32) -> String {
    birth_year
        .map(|year| {
            let age = calculate_age(year, current_year);
            format!(" (turning {})", age)
        })
        .unwrap_or_default()
}

/// Build the greeting for one birthday, using the custom template if given
pub fn build_birthday_message(
    birthday: &Birthday,
    current_year: i32,
    custom_template: Option<&str>,
) -> String {
    let name = birthday.name().unwrap_or(UNKNOWN_NAME);
    let date = format_date_display(birthday.month, birthday.day);

    match custom_template {
        Some(template) => {
            let age = birthday
                .year()
                .map(|year| calculate_age(year, current_year).to_string())
                .unwrap_or_default();
            apply_message_template(template, name, &date, &age)
        }
        None => {
            let age_info = format_age_info(birthday.year(), current_year);
            format!("🎉 Happy birthday, {}{}! ({})", name, age_info, date)
        }
    }
}
