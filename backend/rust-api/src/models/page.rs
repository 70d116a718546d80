use serde::Serialize;

use crate::models::{
    editor::EditorView,
    problem::{ListProblemsQuery, ProblemListResponse},
    user::UserProfile,
};

/// Filter controls as echoed back to the dashboard
#[derive(Debug, Serialize)]
pub struct DashboardFilters {
    pub search: String,
    pub difficulty: String,
    pub status: String,
}

impl From<&ListProblemsQuery> for DashboardFilters {
    fn from(query: &ListProblemsQuery) -> Self {
        let or_all = |value: &Option<String>| match value.as_deref().map(str::trim) {
            None | Some("") => "all".to_string(),
            Some(value) => value.to_string(),
        };

        Self {
            search: query.search.clone().unwrap_or_default(),
            difficulty: or_all(&query.difficulty),
            status: or_all(&query.status),
        }
    }
}

/// `/`: signed-in user and the filtered problem list
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub user: Option<UserProfile>,
    pub filters: DashboardFilters,
    #[serde(flatten)]
    pub list: ProblemListResponse,
}

/// `/problems`: the editor workspace of the signed-in user
#[derive(Debug, Serialize)]
pub struct EditorPage {
    pub user: Option<UserProfile>,
    #[serde(flatten)]
    pub editor: EditorView,
}

/// `/login`: where the form posts and where it goes afterwards
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginView {
    pub title: &'static str,
    pub description: &'static str,
    pub submit_url: &'static str,
    pub callback_url: String,
    /// Form pre-fill
    pub email: &'static str,
    pub password: &'static str,
    pub hint: &'static str,
}

impl LoginView {
    pub fn new(callback_url: String) -> Self {
        Self {
            title: "Login",
            description: "Sign in to access the LeetCode Dashboard",
            submit_url: "/api/auth/login",
            callback_url,
            email: "demo@example.com",
            password: "password123",
            hint: "Demo credentials are pre-filled for convenience",
        }
    }
}
