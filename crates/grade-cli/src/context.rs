use grade_config::GradesConfig;
use grade_db::service::GradeStore;

/// Resources opened once at startup and shared by command handlers.
pub struct AppContext {
    pub store: GradeStore,
    pub config: GradesConfig,
}

impl AppContext {
    pub async fn init(config: GradesConfig) -> anyhow::Result<Self> {
        let store = GradeStore::open(&config.database).await?;
        Ok(Self { store, config })
    }

    pub fn close(self) {
        self.store.close();
    }
}
