//! Plain-text lines the assistant says.

use crate::domain::form::{Field, FormKind};

pub const GREETING: &str = "Hello! I am Agro Aid. How can I help you today?";
pub const MENU_HEADER: &str = "Please choose an option:";
pub const MENU_OPTIONS: [&str; 4] = [
    "1) Crop prediction",
    "2) Fertilizer recommendation",
    "3) Disease detection on plant",
    "4) Government scheme suggestion",
];
pub const QUIT_HINT: &str = "Type 'quit' to exit";
pub const BACK_TO_MENU: &str = "Back to main menu. Please choose an option:";
pub const INVALID_OPTION: &str = "Invalid option. Please choose between 1-4.";
pub const DISEASE_DETECTION_UNAVAILABLE: &str = "Disease detection module coming soon.";
pub const GOODBYE: &str = "Goodbye!";
pub const INTERNAL_ERROR: &str = "Something went wrong on our side.";

pub const DEPARTMENTS_HEADER: &str = "Available Departments:";
pub const DEPARTMENT_PROMPT: &str = "Enter the department number:";
pub const SCHEME_PROMPT: &str = "Enter the scheme number:";
pub const INVALID_DEPARTMENT: &str = "Invalid department number.";
pub const INVALID_SCHEME: &str = "Invalid scheme number.";
pub const NOT_A_NUMBER: &str = "Please enter a valid number.";
pub const NO_DEPARTMENTS: &str = "No departments are available right now.";
pub const NO_SCHEMES: &str = "No schemes are listed under this department.";

/// Full menu as shown at start-up.
pub fn menu() -> Vec<String> {
    std::iter::once(MENU_HEADER)
        .chain(MENU_OPTIONS)
        .chain(std::iter::once(QUIT_HINT))
        .map(String::from)
        .collect()
}

/// Menu re-shown after a flow completes.
pub fn back_to_menu() -> Vec<String> {
    std::iter::once(BACK_TO_MENU)
        .chain(MENU_OPTIONS)
        .map(String::from)
        .collect()
}

pub fn form_selected(kind: FormKind) -> String {
    format!("You've selected {}.", kind.display_name())
}

pub fn prompt_for(field: Field) -> String {
    format!("Please enter {}:", field)
}

pub fn numbered_item(number: usize, name: &str) -> String {
    format!("{}. {}", number, name)
}

pub fn schemes_header(department: &str) -> String {
    format!("Schemes under {}:", department)
}

pub fn predicted_crop(crop: &str) -> String {
    format!("Predicted Crop: {}", crop)
}

pub fn variety(variety: &str) -> String {
    format!("Variety: {}", variety)
}

pub fn recommended_fertilizer(fertilizer: &str) -> String {
    format!("Recommended Fertilizer: {}", fertilizer)
}

/// Diagnostic for a categorical answer the model never saw.
pub fn unknown_category(field: Field, value: &str) -> String {
    format!(
        "Unknown {} '{}'. Please start again with a value the model knows.",
        field, value
    )
}

/// Diagnostic for any other failure while running a form's prediction.
pub fn prediction_failed(kind: FormKind, cause: &str) -> String {
    match kind {
        FormKind::Crop => format!("Error during crop prediction: {}", cause),
        FormKind::Fertilizer => format!("Error during fertilizer recommendation: {}", cause),
    }
}
