use crate::config::Config;
use crate::middlewares::auth::JwtService;

use self::{
    problem_catalog::ProblemCatalog, test_runner::MockTestRunner, user_directory::UserDirectory,
    workspace_store::WorkspaceStore,
};

pub struct AppState {
    pub config: Config,
    pub users: UserDirectory,
    pub tokens: JwtService,
    pub workspaces: WorkspaceStore,
    pub catalog: ProblemCatalog,
    pub test_runner: MockTestRunner,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        tracing::info!("Building user directory...");
        let users = UserDirectory::load(&config.auth).await?;

        let tokens = JwtService::new(&config.session.secret);
        let test_runner = MockTestRunner::new(&config.runner);

        Ok(Self {
            config,
            users,
            tokens,
            workspaces: WorkspaceStore::new(),
            catalog: ProblemCatalog::default(),
            test_runner,
        })
    }
}

pub mod auth_service;
pub mod file_manager;
pub mod markdown;
pub mod problem_catalog;
pub mod seed;
pub mod test_runner;
pub mod user_directory;
pub mod wizard;
pub mod workspace;
pub mod workspace_store;
