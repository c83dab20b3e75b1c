/// Guidance printed at the top of every report.
pub const BUG_TEMPLATE: &[&str] = &[
    "Thank you for filling out a Git bug report!",
    "Please answer the following questions to help us understand your issue.",
    "",
    "What did you do before the bug happened? (Steps to reproduce your issue)",
    "",
    "What did you expect to happen? (Expected behavior)",
    "",
    "What happened instead? (Actual behavior)",
    "",
    "What's different between what you expected and what actually happened?",
    "",
    "Anything else you want to add:",
    "",
    "Please review the rest of the bug report below.",
    "You can delete any lines you don't wish to send.",
];

/// One titled block of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
}

/// The assembled bug report: the guidance template followed by every
/// collector's section, in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    sections: Vec<Section>,
}

impl Report {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.sections.push(Section {
            title: title.into(),
            body: body.into(),
        });
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Renders the report as the text written to disk.
    pub fn render(&self) -> String {
        let mut out = template();
        for section in &self.sections {
            out.push_str(&format!("\n\n[{}]\n", section.title));
            out.push_str(&section.body);
        }
        out
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

/// The guidance template as a single block of text.
pub fn template() -> String {
    let mut text = BUG_TEMPLATE.join("\n");
    text.push('\n');
    text
}
