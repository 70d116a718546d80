use serde::{Deserialize, Serialize};

use crate::models::{
    problem::{Problem, ProblemSettings},
    solution_file::{FileListResponse, Language, OpenFileView},
    test_run::TestRunView,
    wizard::WizardView,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum EditorTheme {
    #[serde(rename = "vs")]
    Light,
    #[default]
    #[serde(rename = "vs-dark")]
    Dark,
    #[serde(rename = "hc-black")]
    HighContrast,
}

/// Options the client code editor widget is created with
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EditorOptions {
    pub language: String,
    pub theme: EditorTheme,
    pub font_size: u8,
    pub minimap: bool,
    pub word_wrap: bool,
    pub line_numbers: bool,
    pub folding: bool,
}

impl EditorOptions {
    pub fn code(language: Language) -> Self {
        Self {
            language: language.as_str().to_string(),
            theme: EditorTheme::Dark,
            font_size: 14,
            minimap: true,
            word_wrap: false,
            line_numbers: true,
            folding: true,
        }
    }

    pub fn markdown() -> Self {
        Self {
            minimap: false,
            word_wrap: true,
            ..Self::code(Language::Markdown)
        }
    }

    /// Scratch input for custom test runs
    pub fn custom_input() -> Self {
        Self {
            minimap: false,
            line_numbers: false,
            folding: false,
            ..Self::code(Language::Javascript)
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarkdownViewMode {
    Edit,
    #[default]
    Split,
    Preview,
}

impl MarkdownViewMode {
    pub fn shows_editor(&self) -> bool {
        matches!(self, MarkdownViewMode::Edit | MarkdownViewMode::Split)
    }

    pub fn shows_preview(&self) -> bool {
        matches!(self, MarkdownViewMode::Preview | MarkdownViewMode::Split)
    }
}

/// Markdown toolbar actions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MarkdownTool {
    Heading,
    Bold,
    Italic,
    Code,
    Quote,
    List,
    Link,
    Image,
    Table,
}

impl MarkdownTool {
    /// Template with `{}` standing for the selection
    pub fn syntax(&self) -> &'static str {
        match self {
            MarkdownTool::Heading => "# {}",
            MarkdownTool::Bold => "**{}**",
            MarkdownTool::Italic => "*{}*",
            MarkdownTool::Code => "`{}`",
            MarkdownTool::Quote => "> {}",
            MarkdownTool::List => "- {}",
            MarkdownTool::Link => "[{}](url)",
            MarkdownTool::Image => "![{}](url)",
            MarkdownTool::Table => "| {} | Column 2 |\n|------|----------|\n| Row 1 | Data |",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            MarkdownTool::Heading => "Heading",
            MarkdownTool::Bold => "bold text",
            MarkdownTool::Italic => "italic text",
            MarkdownTool::Code => "code",
            MarkdownTool::Quote => "quote",
            MarkdownTool::List => "item",
            MarkdownTool::Link => "link text",
            MarkdownTool::Image => "alt text",
            MarkdownTool::Table => "Column 1",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct InsertMarkdownRequest {
    pub tool: MarkdownTool,
    /// Selection start, in characters
    #[serde(default)]
    pub start: usize,
    /// Selection end, in characters
    #[serde(default)]
    pub end: usize,
}

#[derive(Debug, Deserialize)]
pub struct SetViewModeRequest {
    pub mode: MarkdownViewMode,
}

#[derive(Debug, Serialize)]
pub struct DescriptionView {
    pub content: String,
    pub view_mode: MarkdownViewMode,
    pub show_editor: bool,
    pub show_preview: bool,
    pub editor: EditorOptions,
}

#[derive(Debug, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Choices offered by the wizard forms
#[derive(Debug, Serialize)]
pub struct FormOptions {
    pub difficulties: Vec<SelectOption>,
    pub categories: Vec<SelectOption>,
    pub languages: Vec<SelectOption>,
    pub time_limits_seconds: Vec<u32>,
    pub memory_limits_mb: Vec<u32>,
}

/// Everything the editor page renders for one workspace
#[derive(Debug, Serialize)]
pub struct EditorView {
    pub wizard: WizardView,
    pub problem: Problem,
    pub settings: ProblemSettings,
    pub description: DescriptionView,
    pub files: FileListResponse,
    pub active_file: Option<OpenFileView>,
    pub tests: TestRunView,
    pub options: FormOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_presets() {
        let code = EditorOptions::code(Language::Python);
        assert_eq!(code.language, "python");
        assert!(code.minimap);

        let markdown = EditorOptions::markdown();
        assert_eq!(markdown.language, "markdown");
        assert!(markdown.word_wrap);
        assert!(!markdown.minimap);

        let custom = EditorOptions::custom_input();
        assert!(!custom.line_numbers);
        assert!(!custom.folding);
    }

    #[test]
    fn test_theme_names() {
        assert_eq!(serde_json::to_value(EditorTheme::Dark).unwrap(), "vs-dark");
        assert_eq!(serde_json::to_value(EditorTheme::HighContrast).unwrap(), "hc-black");
    }
}
