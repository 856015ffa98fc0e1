pub mod models;
pub mod service;

use std::sync::Arc;

use async_trait::async_trait;
use bookstore_kernel::{InitCtx, Module};
use parking_lot::Mutex;
use serde_json::json;

use crate::utils;
use service::CatalogService;

/// Books module: owns the catalog for the lifetime of the application
pub struct BooksModule {
    catalog: Arc<Mutex<CatalogService>>,
}

impl BooksModule {
    pub fn new(catalog: Arc<Mutex<CatalogService>>) -> Self {
        Self { catalog }
    }

    fn seed(&self, ctx: &InitCtx<'_>) -> anyhow::Result<usize> {
        let seeded = CatalogService::from_seed(&ctx.settings.catalog.seed)?;
        let size = seeded.len();
        *self.catalog.lock() = seeded;
        Ok(size)
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let books = self.seed(ctx)?;
        tracing::info!(
            target: "bookstore.modules",
            prefix = %utils::log_prefix(self.name()),
            environment = ?ctx.settings.environment,
            books,
            "books module initialized"
        );
        Ok(())
    }

    fn describe(&self) -> serde_json::Value {
        json!({
            "name": self.name(),
            "books": self.catalog.lock().len(),
        })
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Create a new instance of the books module
pub fn create_module(catalog: Arc<Mutex<CatalogService>>) -> Arc<dyn Module> {
    Arc::new(BooksModule::new(catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_kernel::settings::{BookSeed, Settings};

    fn settings_with(seed: Vec<BookSeed>) -> Settings {
        let mut settings = Settings::default();
        settings.catalog.seed = seed;
        settings
    }

    fn dune_seed() -> BookSeed {
        BookSeed {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            genre: "SciFi".to_string(),
            price: 9.99,
            reviews: vec![],
        }
    }

    #[tokio::test]
    async fn init_seeds_the_shared_catalog() {
        let catalog = Arc::new(Mutex::new(CatalogService::new()));
        let module = BooksModule::new(Arc::clone(&catalog));
        let settings = settings_with(vec![dune_seed()]);

        module.init(&InitCtx { settings: &settings }).await.unwrap();

        assert_eq!(catalog.lock().search("Dune").len(), 1);
        assert_eq!(module.describe(), json!({ "name": "books", "books": 1 }));
    }

    #[tokio::test]
    async fn init_rejects_duplicate_seed() {
        let module = BooksModule::new(Arc::new(Mutex::new(CatalogService::new())));
        let settings = settings_with(vec![dune_seed(), dune_seed()]);

        let err = module
            .init(&InitCtx { settings: &settings })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("'Dune' more than once"));
    }
}
