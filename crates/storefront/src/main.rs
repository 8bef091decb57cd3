//! `vitrine` — browse the product catalog from the terminal.

use std::sync::Arc;

use clap::{Parser, Subcommand};

use vitrine_catalog::{DEFAULT_PRICE_CEILING, PriceRange, Product, Selection, SortKey};
use vitrine_client::{DEFAULT_BASE_URL, FakeStore, InMemoryCatalog, ProductProvider};
use vitrine_core::ProductId;
use vitrine_storefront::{
    CategoryView, LOAD_FAILED_FALLBACK, NO_MATCHES, NO_PRODUCTS_IN_CATEGORY, ProductsView,
};

/// Storefront catalog browser.
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(about = "Browse the product catalog from the terminal")]
struct Args {
    /// Catalog API base URL.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Browse a built-in demo catalog instead of calling the API.
    #[arg(long)]
    demo: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List products, with search, filters, ordering, and pages of 8.
    Products(ProductsArgs),
    /// List one category's products.
    Category(CategoryArgs),
    /// List the catalog's category names.
    Categories,
}

#[derive(clap::Args, Debug)]
struct ProductsArgs {
    /// Case-insensitive title search.
    #[arg(long, default_value = "")]
    search: String,

    /// Keep only this category (exact name).
    #[arg(long)]
    category: Option<String>,

    /// Keep only this brand (exact name).
    #[arg(long)]
    brand: Option<String>,

    /// Lowest price to keep.
    #[arg(long, default_value_t = 0.0)]
    min_price: f64,

    /// Highest price to keep.
    #[arg(long, default_value_t = DEFAULT_PRICE_CEILING)]
    max_price: f64,

    /// Ordering: default, price-asc, price-desc, name-asc, name-desc.
    #[arg(long, default_value = "default")]
    sort: SortKey,

    /// 1-based page.
    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[derive(clap::Args, Debug)]
struct CategoryArgs {
    /// Category name, exactly as the catalog spells it.
    name: String,

    /// Ordering: default, price-asc, price-desc, name-asc, name-desc.
    #[arg(long, default_value = "default")]
    sort: SortKey,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vitrine_observability::init();
    let args = Args::parse();

    let provider: Arc<dyn ProductProvider> = if args.demo {
        Arc::new(InMemoryCatalog::new(demo_catalog()))
    } else {
        Arc::new(FakeStore::with_base_url(&args.api_url))
    };

    match args.command {
        Command::Products(opts) => browse_products(provider, opts).await,
        Command::Category(opts) => browse_category(provider, opts).await,
        Command::Categories => list_categories(provider).await,
    }
}

async fn browse_products(
    provider: Arc<dyn ProductProvider>,
    opts: ProductsArgs,
) -> anyhow::Result<()> {
    let mut view = ProductsView::new(provider);
    view.set_search(opts.search);
    if let Some(category) = opts.category {
        view.set_category(Selection::only(category));
    }
    if let Some(brand) = opts.brand {
        view.set_brand(Selection::only(brand));
    }
    view.set_price_range(PriceRange::new(opts.min_price, opts.max_price)?);
    view.set_sort(opts.sort);
    view.set_page(opts.page)?;
    view.load().await;

    if let Some(message) = view.error() {
        println!("{message}");
        return Ok(());
    }

    let Some(page) = view.visible() else {
        return Ok(());
    };

    if page.total == 0 {
        println!("{NO_MATCHES}");
        return Ok(());
    }

    print_products(page.items);
    if page.pages > 1 {
        println!();
        println!(
            "page {} of {} ({} matching)",
            page.number, page.pages, page.total
        );
    }
    Ok(())
}

async fn browse_category(
    provider: Arc<dyn ProductProvider>,
    opts: CategoryArgs,
) -> anyhow::Result<()> {
    let mut view = CategoryView::new(provider, opts.name);
    view.set_sort(opts.sort);
    view.load().await;

    if let Some(message) = view.error() {
        println!("{message}");
        return Ok(());
    }

    match view.products() {
        Some([]) => println!("{NO_PRODUCTS_IN_CATEGORY}"),
        Some(products) => print_products(products),
        None => {}
    }
    Ok(())
}

async fn list_categories(provider: Arc<dyn ProductProvider>) -> anyhow::Result<()> {
    match provider.fetch_categories().await {
        Ok(categories) => {
            for category in categories {
                println!("{category}");
            }
        }
        Err(err) => {
            let message = err.server_message().unwrap_or(LOAD_FAILED_FALLBACK);
            println!("{message}");
        }
    }
    Ok(())
}

fn print_products(products: &[Product]) {
    for product in products {
        println!(
            "{:>4}  {:<56}  {:>9}  {}",
            product.id,
            clip(&product.title, 56),
            format!("${:.2}", product.price),
            product.category
        );
    }
}

fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(max - 3).collect();
    clipped.push_str("...");
    clipped
}

fn demo_product(id: u64, title: &str, price: f64, category: &str, brand: Option<&str>) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        price,
        description: String::new(),
        category: category.to_string(),
        brand: brand.map(str::to_string),
        image: String::new(),
        rating: None,
    }
}

/// Fixed catalog for `--demo`, shaped like the public API's data.
fn demo_catalog() -> Vec<Product> {
    vec![
        demo_product(1, "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops", 109.95, "men's clothing", None),
        demo_product(2, "Mens Casual Premium Slim Fit T-Shirts", 22.3, "men's clothing", None),
        demo_product(3, "Mens Cotton Jacket", 55.99, "men's clothing", None),
        demo_product(4, "Mens Casual Slim Fit", 15.99, "men's clothing", None),
        demo_product(5, "John Hardy Women's Legends Naga Bracelet", 695.0, "jewelery", None),
        demo_product(6, "Solid Gold Petite Micropave", 168.0, "jewelery", None),
        demo_product(7, "White Gold Plated Princess", 9.99, "jewelery", None),
        demo_product(8, "Pierced Owl Rose Gold Plated Earrings", 10.99, "jewelery", None),
        demo_product(9, "WD 2TB Elements Portable External Hard Drive", 64.0, "electronics", Some("WD")),
        demo_product(10, "SanDisk SSD PLUS 1TB Internal SSD", 109.0, "electronics", Some("SanDisk")),
        demo_product(11, "Silicon Power 256GB SSD 3D NAND A55", 109.0, "electronics", Some("Silicon Power")),
        demo_product(12, "WD 4TB Gaming Drive Works with Playstation 4", 114.0, "electronics", Some("WD")),
        demo_product(13, "Acer SB220Q bi 21.5 inches Full HD IPS Monitor", 599.0, "electronics", Some("Acer")),
        demo_product(14, "Samsung 49-Inch CHG90 144Hz Curved Gaming Monitor", 999.99, "electronics", Some("Samsung")),
        demo_product(15, "BIYLACLESEN Women's 3-in-1 Snowboard Jacket", 56.99, "women's clothing", None),
        demo_product(16, "Lock and Love Women's Hooded Faux Leather Jacket", 29.95, "women's clothing", None),
        demo_product(17, "Rain Jacket Women Windbreaker Striped Climbing", 39.99, "women's clothing", None),
        demo_product(18, "MBJ Women's Solid Short Sleeve Boat Neck V", 9.85, "women's clothing", None),
        demo_product(19, "Opna Women's Short Sleeve Moisture", 7.95, "women's clothing", None),
        demo_product(20, "DANVOUY Womens T Shirt Casual Cotton Short", 12.99, "women's clothing", None),
    ]
}
