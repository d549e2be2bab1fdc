// Rust guideline compliant 2026-02-23

//! The built-in demonstration applications.

use domain::Application;

/// Five applications covering accept, reject, moderate risk, the age rule,
/// and a missing field.
#[must_use]
pub fn demo_applications() -> Vec<Application> {
    vec![
        Application::new(30, false, false),
        Application::new(50, true, true),
        Application::new(40, true, false),
        Application::new(17, false, false),
        // chronic_illness omitted.
        Application::default().with_age(45).with_smoker(false),
    ]
}
