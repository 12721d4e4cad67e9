//! Selectable input abstraction

/// A single-choice form control (`<select>` on web)
pub trait SelectControl {
    /// Current value (empty when nothing is selectable)
    fn value(&self) -> String;

    /// Select the option with this value
    fn set_value(&mut self, value: &str);

    /// Whether some option carries this value
    fn has_option(&self, value: &str) -> bool;
}

/// In-memory `<select>` stand-in
///
/// Starts on its first option like a freshly rendered select.
#[derive(Debug, Clone, Default)]
pub struct StubControl {
    options: Vec<String>,
    selected: Option<usize>,
}

impl StubControl {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        let selected = if options.is_empty() { None } else { Some(0) };
        Self { options, selected }
    }

    /// Simulate the user picking an option; unknown values are ignored
    pub fn choose(&mut self, value: &str) {
        self.set_value(value);
    }
}

impl SelectControl for StubControl {
    fn value(&self) -> String {
        self.selected
            .and_then(|i| self.options.get(i))
            .cloned()
            .unwrap_or_default()
    }

    fn set_value(&mut self, value: &str) {
        if let Some(i) = self.options.iter().position(|o| o == value) {
            self.selected = Some(i);
        }
    }

    fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o == value)
    }
}
