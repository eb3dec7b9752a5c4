/// Select-control state. Repopulation keeps the current selection when it
/// still exists among the new options and falls back to the placeholder
/// otherwise.
#[derive(Debug, Clone, Default)]
pub struct Dropdown {
    placeholder: String,
    options: Vec<String>,
    selected: Option<String>,
}

impl Dropdown {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            options: Vec::new(),
            selected: None,
        }
    }

    pub fn repopulate(&mut self, options: Vec<String>) {
        let previous = self.selected.take();
        self.options = options;
        self.selected = previous.filter(|v| self.options.iter().any(|o| o == v));
    }

    pub fn select(&mut self, value: &str) -> bool {
        if self.options.iter().any(|o| o == value) {
            self.selected = Some(value.to_string());
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}
