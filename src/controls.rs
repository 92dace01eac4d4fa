// src/controls.rs
//
// The seam between the filter core and whatever draws the filter widgets.
// Front ends own concrete controls, forward user changes as `ControlEvent`s,
// and let the controller push option lists and resets back through
// `SelectControl`.

use crate::model::Category;

/// A closed-choice control (dropdown). `None` is the "all" entry.
pub trait SelectControl {
    /// Replace the offered options. A current value that is no longer
    /// offered is dropped.
    fn set_options(&mut self, options: Vec<String>);

    fn options(&self) -> &[String];

    fn value(&self) -> Option<&str>;

    /// Programmatic change; does not produce a `ControlEvent`.
    fn set_value(&mut self, value: Option<&str>);
}

/// A user-initiated change of one filter input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    Category(Option<Category>),
    Specialty(Option<String>),
    Area(Option<String>),
    Query(String),
}

/// Plain in-memory control; the GUI wraps one per dropdown and tests use it
/// directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListSelect {
    options: Vec<String>,
    value: Option<String>,
}

impl ListSelect {
    pub fn new() -> Self { Self::default() }
}

impl SelectControl for ListSelect {
    fn set_options(&mut self, options: Vec<String>) {
        if let Some(v) = &self.value {
            if !options.iter().any(|o| o == v) {
                self.value = None;
            }
        }
        self.options = options;
    }

    fn options(&self) -> &[String] { &self.options }

    fn value(&self) -> Option<&str> { self.value.as_deref() }

    fn set_value(&mut self, value: Option<&str>) {
        self.value = value
            .filter(|v| self.options.iter().any(|o| o == v))
            .map(String::from);
    }
}

/// Option keys for the category control, in display order.
pub fn category_options() -> Vec<String> {
    Category::ALL.iter().map(|c| s!(c.key())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_select_drops_values_not_offered() {
        let mut c = ListSelect::new();
        c.set_options(vec![s!("Cairo"), s!("Giza")]);
        c.set_value(Some("Giza"));
        assert_eq!(c.value(), Some("Giza"));

        c.set_value(Some("Aswan"));
        assert_eq!(c.value(), None);

        c.set_value(Some("Cairo"));
        c.set_options(vec![s!("Giza")]);
        assert_eq!(c.value(), None);
    }
}
