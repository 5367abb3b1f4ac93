use dockflow::repository::Repository;
use tokio::sync::RwLock;

/// `None` until the datasets are loaded, and for good if loading failed.
#[derive(Default)]
pub struct AppState {
    pub repository: RwLock<Option<Repository>>,
}

impl AppState {
    pub fn new(repository: Option<Repository>) -> Self {
        Self {
            repository: RwLock::new(repository),
        }
    }
}
