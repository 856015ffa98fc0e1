//! Command-line front end over a seeded, in-process bookstore.

use anyhow::{bail, Context};
use bookstore_app::{modules, SharedBook, Storefront};
use bookstore_kernel::{settings::Settings, InitCtx, ModuleRegistry};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bookstore")]
#[command(about = "Query the configured bookstore catalog and accounts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search titles, authors, and genres (case-sensitive)
    Search {
        /// Substring to look for; empty lists the whole catalog
        #[arg(default_value = "")]
        keyword: String,
    },

    /// Check a username and password
    Login { username: String, password: String },

    /// Show the reviews of a book
    Reviews {
        /// Exact title
        title: String,
    },

    /// Describe every registered module
    Modules,
}

fn format_book(book: &SharedBook) -> String {
    let book = book.snapshot();
    format!(
        "{} | {} | {} | {:.2}",
        book.title, book.author, book.genre, book.price
    )
}

fn run(command: Commands, storefront: &Storefront, registry: &ModuleRegistry) -> anyhow::Result<()> {
    match command {
        Commands::Search { keyword } => {
            let hits = storefront.catalog().search(&keyword);
            if hits.is_empty() {
                println!("no books match");
            }
            for book in &hits {
                println!("{}", format_book(book));
            }
        }
        Commands::Login { username, password } => {
            let Some(user) = storefront.accounts().login(&username, &password) else {
                bail!("login failed");
            };
            println!("welcome, {} ({})", user.username(), user.email());
        }
        Commands::Reviews { title } => {
            let book = storefront
                .catalog()
                .find_by_title(&title)
                .with_context(|| format!("no book titled '{}'", title))?;
            for review in book.reviews() {
                println!("{}", review);
            }
        }
        Commands::Modules => {
            for description in registry.describe_all() {
                println!("{}", description);
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load bookstore settings")?;

    let storefront = Storefront::new();
    let mut registry = ModuleRegistry::new();
    registry.register_core(bookstore_telemetry::create_module());
    modules::register_all(&mut registry, &storefront);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.boot(&ctx).await?;

    let outcome = run(cli.command, &storefront, &registry);
    tracing::info!(
        env = ?settings.environment,
        succeeded = outcome.is_ok(),
        "bookstore command finished"
    );

    registry.shutdown().await?;
    outcome
}
