use anyhow::Context;
use bookstore_app::{modules, Storefront};
use bookstore_kernel::{settings::Settings, InitCtx, ModuleRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load bookstore settings")?;

    let storefront = Storefront::new();
    let mut registry = ModuleRegistry::new();
    registry.register_core(bookstore_telemetry::create_module());
    modules::register_all(&mut registry, &storefront);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry
        .boot(&ctx)
        .await
        .with_context(|| "bookstore bootstrap failed")?;

    tracing::info!(
        env = ?settings.environment,
        books = storefront.catalog().len(),
        accounts = storefront.accounts().len(),
        "bookstore-app bootstrap complete"
    );

    registry.shutdown().await?;
    Ok(())
}
