use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::models::editor::EditorOptions;

/// Languages a solution file can be written in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Javascript,
    Python,
    Java,
    Cpp,
    Csharp,
    Go,
    Rust,
    Typescript,
    Markdown,
}

impl Language {
    pub const ALL: [Language; 9] = [
        Language::Javascript,
        Language::Python,
        Language::Java,
        Language::Cpp,
        Language::Csharp,
        Language::Go,
        Language::Rust,
        Language::Typescript,
        Language::Markdown,
    ];

    /// Identifier used by the client editor and in JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Csharp => "csharp",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Typescript => "typescript",
            Language::Markdown => "markdown",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Language::Javascript => ".js",
            Language::Python => ".py",
            Language::Java => ".java",
            Language::Cpp => ".cpp",
            Language::Csharp => ".cs",
            Language::Go => ".go",
            Language::Rust => ".rs",
            Language::Typescript => ".ts",
            Language::Markdown => ".md",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::Javascript => "JavaScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::Csharp => "C#",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Typescript => "TypeScript",
            Language::Markdown => "Markdown",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Language::Javascript => "🟨",
            Language::Python => "🐍",
            Language::Java => "☕",
            Language::Cpp => "⚡",
            Language::Csharp | Language::Typescript => "🔷",
            Language::Go => "🐹",
            Language::Rust => "🦀",
            Language::Markdown => "📝",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SolutionFile {
    pub id: String,
    pub name: String,
    pub language: Language,
    pub content: String,
    pub saved: bool,
}

/// File row in the sidebar listing (content omitted)
#[derive(Debug, Serialize)]
pub struct FileEntry {
    pub id: String,
    pub name: String,
    pub language: Language,
    pub icon: &'static str,
    pub saved: bool,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct FileListResponse {
    pub files: Vec<FileEntry>,
    pub active_file_id: Option<String>,
    /// Size of the whole collection, regardless of the search filter
    pub total: usize,
    pub unsaved_count: usize,
}

/// A file opened in the code surface
#[derive(Debug, Serialize)]
pub struct OpenFileView {
    pub file: SolutionFile,
    pub editor: EditorOptions,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileListQuery {
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFileRequest {
    #[validate(length(min = 1, max = 255, message = "File name must be between 1 and 255 characters"))]
    pub name: String,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RenameFileRequest {
    #[validate(length(min = 1, max = 255, message = "File name must be between 1 and 255 characters"))]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFileContentRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct SaveAllResponse {
    pub saved: usize,
    pub unsaved_count: usize,
}
