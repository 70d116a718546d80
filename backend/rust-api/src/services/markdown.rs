use crate::models::editor::MarkdownTool;

/// Applies a toolbar action to `text`, wrapping the selected character range
/// (or the tool's placeholder when nothing is selected) in the tool syntax.
///
/// Offsets count characters, not bytes, and are clamped to the text length.
pub fn insert_markdown(text: &str, tool: MarkdownTool, start: usize, end: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let (start, end) = {
        let a = start.min(chars.len());
        let b = end.min(chars.len());
        (a.min(b), a.max(b))
    };

    let selected: String = chars[start..end].iter().collect();
    let selected = if selected.is_empty() {
        tool.placeholder().to_string()
    } else {
        selected
    };

    let before: String = chars[..start].iter().collect();
    let after: String = chars[end..].iter().collect();

    format!(
        "{}{}{}",
        before,
        tool.syntax().replacen("{}", &selected, 1),
        after
    )
}
