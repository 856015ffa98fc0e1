pub mod models;
pub mod service;

use std::sync::Arc;

use async_trait::async_trait;
use bookstore_kernel::{InitCtx, Module};
use parking_lot::Mutex;
use serde_json::json;

use crate::modules::books::service::CatalogService;
use crate::utils;
use service::AccountService;

/// Users module: owns the account map; purchases point into the catalog
pub struct UsersModule {
    accounts: Arc<Mutex<AccountService>>,
    catalog: Arc<Mutex<CatalogService>>,
}

impl UsersModule {
    pub fn new(accounts: Arc<Mutex<AccountService>>, catalog: Arc<Mutex<CatalogService>>) -> Self {
        Self { accounts, catalog }
    }

    fn seed(&self, ctx: &InitCtx<'_>) -> anyhow::Result<usize> {
        let seeded = {
            let catalog = self.catalog.lock();
            AccountService::from_seed(&ctx.settings.accounts.seed, &catalog)?
        };
        let size = seeded.len();
        *self.accounts.lock() = seeded;
        Ok(size)
    }
}

#[async_trait]
impl Module for UsersModule {
    fn name(&self) -> &'static str {
        "users"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let accounts = self.seed(ctx)?;
        tracing::info!(
            target: "bookstore.modules",
            prefix = %utils::log_prefix(self.name()),
            environment = ?ctx.settings.environment,
            accounts,
            "users module initialized"
        );
        Ok(())
    }

    fn describe(&self) -> serde_json::Value {
        json!({
            "name": self.name(),
            "accounts": self.accounts.lock().len(),
        })
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "users module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "users module stopped");
        Ok(())
    }
}

/// Create a new instance of the users module
pub fn create_module(
    accounts: Arc<Mutex<AccountService>>,
    catalog: Arc<Mutex<CatalogService>>,
) -> Arc<dyn Module> {
    Arc::new(UsersModule::new(accounts, catalog))
}
