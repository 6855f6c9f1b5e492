//! Display surface the calculator reads its operand from and writes results to.

/// Text shown when nothing has been written yet.
pub const INITIAL_TEXT: &str = "0";

/// A single line of calculator output.
pub trait DisplaySurface {
    /// Current displayed text; `"0"` when empty.
    fn read(&self) -> &str;

    /// Replace the displayed text.
    fn write(&mut self, text: &str);
}

/// In-memory display backed by a `String`.
#[derive(Clone, Debug, Default)]
pub struct TextDisplay {
    text: String,
}

impl TextDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySurface for TextDisplay {
    fn read(&self) -> &str {
        if self.text.is_empty() {
            INITIAL_TEXT
        } else {
            &self.text
        }
    }

    fn write(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}

impl<D: DisplaySurface + ?Sized> DisplaySurface for &mut D {
    fn read(&self) -> &str {
        (**self).read()
    }

    fn write(&mut self, text: &str) {
        (**self).write(text)
    }
}
