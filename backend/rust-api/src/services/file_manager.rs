use chrono::Utc;
use thiserror::Error;

use crate::models::solution_file::{FileEntry, FileListResponse, Language, SolutionFile};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FileError {
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("File name cannot be empty")]
    EmptyName,
}

/// Appends the language extension unless the name already carries one.
pub fn resolve_file_name(name: &str, language: Language) -> Result<String, FileError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FileError::EmptyName);
    }

    if name.contains('.') {
        Ok(name.to_string())
    } else {
        Ok(format!("{}{}", name, language.extension()))
    }
}

/// Ordered solution files of one workspace plus the active selection.
///
/// Ids are unique and `active_file_id`, when set, always names a file in `files`.
#[derive(Debug, Clone, Default)]
pub struct FileManager {
    files: Vec<SolutionFile>,
    active_file_id: Option<String>,
}

impl FileManager {
    /// The first file becomes active.
    pub fn new(files: Vec<SolutionFile>) -> Self {
        let active_file_id = files.first().map(|file| file.id.clone());
        Self {
            files,
            active_file_id,
        }
    }

    pub fn files(&self) -> &[SolutionFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn active_file_id(&self) -> Option<&str> {
        self.active_file_id.as_deref()
    }

    pub fn active_file(&self) -> Option<&SolutionFile> {
        self.active_file_id.as_deref().and_then(|id| self.find(id))
    }

    pub fn get(&self, id: &str) -> Result<&SolutionFile, FileError> {
        self.find(id)
            .ok_or_else(|| FileError::NotFound(id.to_string()))
    }

    pub fn create(&mut self, name: &str, language: Language) -> Result<&SolutionFile, FileError> {
        self.create_at(name, language, Utc::now().timestamp_millis())
    }

    fn create_at(
        &mut self,
        name: &str,
        language: Language,
        now_millis: i64,
    ) -> Result<&SolutionFile, FileError> {
        let name = resolve_file_name(name, language)?;
        let id = self.next_id(now_millis);

        self.files.push(SolutionFile {
            id: id.clone(),
            name,
            language,
            content: format!("// New {} solution\n\n", language),
            saved: false,
        });
        self.active_file_id = Some(id);

        tracing::debug!("Created solution file, {} files in workspace", self.files.len());

        Ok(&self.files[self.files.len() - 1])
    }

    /// Timestamp-derived id, moved forward past any id already taken.
    fn next_id(&self, now_millis: i64) -> String {
        let mut candidate = now_millis;
        while self.find(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }

    /// Removes a file. Deleting the active file activates the first remaining one.
    pub fn delete(&mut self, id: &str) -> Result<SolutionFile, FileError> {
        let position = self
            .position(id)
            .ok_or_else(|| FileError::NotFound(id.to_string()))?;
        let removed = self.files.remove(position);

        if self.active_file_id.as_deref() == Some(id) {
            self.active_file_id = self.files.first().map(|file| file.id.clone());
        }

        Ok(removed)
    }

    pub fn save(&mut self, id: &str) -> Result<(), FileError> {
        self.find_mut(id)?.saved = true;
        Ok(())
    }

    /// Marks every unsaved file saved and returns how many changed.
    pub fn save_all(&mut self) -> usize {
        let mut saved = 0;
        for file in self.files.iter_mut().filter(|file| !file.saved) {
            file.saved = true;
            saved += 1;
        }
        saved
    }

    pub fn select(&mut self, id: &str) -> Result<(), FileError> {
        self.get(id)?;
        self.active_file_id = Some(id.to_string());
        Ok(())
    }

    /// Replaces the content; edited files become unsaved.
    pub fn update_content(&mut self, id: &str, content: String) -> Result<(), FileError> {
        let file = self.find_mut(id)?;
        file.content = content;
        file.saved = false;
        Ok(())
    }

    pub fn rename(&mut self, id: &str, name: &str) -> Result<&SolutionFile, FileError> {
        let language = self.get(id)?.language;
        let name = resolve_file_name(name, language)?;

        let file = self.find_mut(id)?;
        file.name = name;
        Ok(file)
    }

    /// Case-insensitive name filter; the collection itself is untouched.
    pub fn search(&self, query: &str) -> Vec<&SolutionFile> {
        let query = query.to_lowercase();
        self.files
            .iter()
            .filter(|file| file.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn unsaved_count(&self) -> usize {
        self.files.iter().filter(|file| !file.saved).count()
    }

    pub fn listing(&self, query: Option<&str>) -> FileListResponse {
        let active = self.active_file_id();
        let files = self
            .search(query.unwrap_or_default())
            .into_iter()
            .map(|file| FileEntry {
                id: file.id.clone(),
                name: file.name.clone(),
                language: file.language,
                icon: file.language.icon(),
                saved: file.saved,
                active: active == Some(file.id.as_str()),
            })
            .collect();

        FileListResponse {
            files,
            active_file_id: self.active_file_id.clone(),
            total: self.files.len(),
            unsaved_count: self.unsaved_count(),
        }
    }

    fn find(&self, id: &str) -> Option<&SolutionFile> {
        self.files.iter().find(|file| file.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut SolutionFile, FileError> {
        self.files
            .iter_mut()
            .find(|file| file.id == id)
            .ok_or_else(|| FileError::NotFound(id.to_string()))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.files.iter().position(|file| file.id == id)
    }
}
