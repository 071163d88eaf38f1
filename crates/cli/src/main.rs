//! Mercadito CLI - command-line storefront.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog (falls back to sample data when the API is down)
//! mercadito catalog --category tech --sort price_asc
//!
//! # Search across names and categories with a price window
//! mercadito catalog -q lamp --price-min 20 --price-max 60
//!
//! # Cart operations, persisted under the data directory
//! mercadito cart add 0004 --quantity 2
//! mercadito cart list
//! mercadito cart update 0004 3
//! mercadito cart remove 0004
//!
//! # Wishlist and ratings
//! mercadito wishlist toggle 0001
//! mercadito rate 0001 5
//!
//! # Session keys
//! mercadito login ada --token <jwt>
//! mercadito whoami
//! ```
//!
//! # Commands
//!
//! - `catalog` - Filter and sort the active catalog
//! - `cart` - Manage the locally persisted cart
//! - `wishlist` - Manage the locally persisted wishlist
//! - `rate` - Submit a 1-5 star rating
//! - `login` / `logout` / `whoami` - Manage the stored session keys

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use mercadito_storefront::{
    CartStore, CatalogQuery, JsonFileStore, ProductClient, ProductSource, RatingStore, Session,
    SortOrder, StorefrontConfig, WishlistStore,
};

mod commands;

#[derive(Parser)]
#[command(name = "mercadito")]
#[command(author, version, about = "Mercadito command-line storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and sort the active catalog
    Catalog {
        /// Text matched against product names and categories
        #[arg(short, long, default_value = "")]
        query: String,

        /// Category name, or "all"
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Lowest price to include
        #[arg(long)]
        price_min: Option<String>,

        /// Highest price to include
        #[arg(long)]
        price_max: Option<String>,

        /// Sort order: relevance, price_asc, price_desc, name_asc
        #[arg(short, long, default_value = "relevance")]
        sort: String,
    },
    /// Manage the locally persisted cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the locally persisted wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Submit a star rating for a product
    Rate {
        /// Product id
        id: String,

        /// Stars, clamped to 1-5
        stars: u8,
    },
    /// Store the session keys for this profile
    Login {
        /// Display username
        username: String,

        /// Bearer token from the auth endpoint
        #[arg(long)]
        token: Option<String>,
    },
    /// Clear the stored session keys
    Logout,
    /// Show the stored session
    Whoami,
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product by id
    Add {
        /// Product id
        id: String,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// List cart contents and totals
    List,
    /// Set the quantity for a line
    Update {
        /// Product id
        id: String,

        /// New quantity (rounded, floored at 1)
        quantity: f64,
    },
    /// Remove a line
    Remove {
        /// Product id
        id: String,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Save a product, or drop it when already saved
    Toggle {
        /// Product id
        id: String,
    },
    /// List saved products
    List,
    /// Empty the wishlist
    Clear,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let backend = JsonFileStore::open(&config.data_dir)?;

    match cli.command {
        Commands::Catalog {
            query,
            category,
            price_min,
            price_max,
            sort,
        } => {
            let source = ProductSource::new(ProductClient::new(&config));
            let ratings = RatingStore::new(backend);
            let criteria = CatalogQuery {
                text: query,
                category,
                price_min: price_min.as_deref().and_then(CatalogQuery::parse_bound),
                price_max: price_max.as_deref().and_then(CatalogQuery::parse_bound),
                sort: sort.parse::<SortOrder>()?,
            };
            commands::catalog::browse(&source, &ratings, &criteria).await;
        }
        Commands::Cart { action } => {
            let cart = CartStore::new(backend);
            match action {
                CartAction::Add { id, quantity } => {
                    let source = ProductSource::new(ProductClient::new(&config));
                    commands::cart::add(&source, &cart, &id, quantity).await?;
                }
                CartAction::List => commands::cart::list(&cart),
                CartAction::Update { id, quantity } => {
                    commands::cart::update(&cart, &id, quantity)?;
                }
                CartAction::Remove { id } => commands::cart::remove(&cart, &id)?,
                CartAction::Clear => commands::cart::clear(&cart)?,
            }
        }
        Commands::Wishlist { action } => {
            let wishlist = WishlistStore::new(backend);
            match action {
                WishlistAction::Toggle { id } => {
                    let source = ProductSource::new(ProductClient::new(&config));
                    commands::wishlist::toggle(&source, &wishlist, &id).await?;
                }
                WishlistAction::List => commands::wishlist::list(&wishlist),
                WishlistAction::Clear => commands::wishlist::clear(&wishlist)?,
            }
        }
        Commands::Rate { id, stars } => {
            let ratings = RatingStore::new(backend);
            commands::rate::submit(&ratings, &id, stars)?;
        }
        Commands::Login { username, token } => {
            let session = Session::new(backend);
            commands::account::login(&session, &username, token.as_deref())?;
        }
        Commands::Logout => {
            let session = Session::new(backend);
            commands::account::logout(&session)?;
        }
        Commands::Whoami => {
            let session = Session::new(backend);
            commands::account::whoami(&session);
        }
    }
    Ok(())
}
