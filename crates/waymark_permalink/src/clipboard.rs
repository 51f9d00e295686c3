/// Anything that can take text for the user to paste somewhere else.
pub trait Clipboard {
    fn set_text(&mut self, text: &str);
}

/// Keeps the last copied text. Used when there's no ui (cli, tests).
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_owned());
    }
}

/// egui hands the copied text to the platform integration at the end of the frame.
impl Clipboard for egui::Context {
    fn set_text(&mut self, text: &str) {
        self.output_mut(|o| o.copied_text = text.to_owned());
    }
}
