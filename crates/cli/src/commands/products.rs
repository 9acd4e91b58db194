//! Product browsing commands.
//!
//! `products list` drives the full query pipeline the listing screen uses:
//! search, category filter, price range, sort, and pagination. `products
//! show` renders one product with its resolved image and variants.

use clap::{Subcommand, ValueEnum};
use rust_decimal::Decimal;

use mercato_core::{Category, Price, ProductId};
use mercato_storefront::{AppState, ImageSlot, QueryParams, SortOrder, run_query};

use super::CliError;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    Featured,
    PriceAscending,
    PriceDescending,
    Newest,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Featured => Self::Featured,
            SortArg::PriceAscending => Self::PriceAscending,
            SortArg::PriceDescending => Self::PriceDescending,
            SortArg::Newest => Self::Newest,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ProductsAction {
    /// List products with filters, sorting, and pagination
    List {
        /// Case-insensitive name search
        #[arg(short, long)]
        search: Option<String>,

        /// Category slug (repeatable), e.g. home-living
        #[arg(short, long)]
        category: Vec<Category>,

        /// Lower price bound (inclusive)
        #[arg(long)]
        min_price: Option<Decimal>,

        /// Upper price bound (inclusive)
        #[arg(long)]
        max_price: Option<Decimal>,

        /// Sort mode
        #[arg(long, value_enum, default_value = "featured")]
        sort: SortArg,

        /// Page number (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Show one product in detail
    Show {
        /// Product id
        id: i32,
    },
}

pub fn run(state: &AppState, action: &ProductsAction) -> Result<(), CliError> {
    match action {
        ProductsAction::List {
            search,
            category,
            min_price,
            max_price,
            sort,
            page,
        } => list(state, search.as_deref(), category, *min_price, *max_price, *sort, *page),
        ProductsAction::Show { id } => show(state, ProductId::new(*id)),
    }
}

fn list(
    state: &AppState,
    search: Option<&str>,
    categories: &[Category],
    min_price: Option<Decimal>,
    max_price: Option<Decimal>,
    sort: SortArg,
    page: usize,
) -> Result<(), CliError> {
    let mut params = QueryParams::with_page_size(state.config().page_size);
    if let Some(search) = search {
        params.set_search(search);
    }
    if !categories.is_empty() {
        params.set_categories(categories.to_vec());
    }
    if min_price.is_some() || max_price.is_some() {
        let (default_min, default_max) = params.price_range();
        let min = min_price.map_or(Ok(default_min), Price::new)?;
        let max = max_price.map_or(Ok(default_max), Price::new)?;
        params.set_price_range(min, max);
    }
    params.set_sort(sort.into());
    // Page last: every setter above resets to page 1
    params.set_page(page);

    let result = run_query(state.catalog(), &params);

    if result.is_empty() {
        println!("No products found matching your criteria.");
        println!("(Run `mercato products list` without filters to see everything.)");
        return Ok(());
    }

    for product in &result.products {
        let wished = if state.wishlist.contains(product.id) {
            "*"
        } else {
            " "
        };
        println!(
            "{wished} {:>3}  {:<28} {:<24} {:>10} birr",
            product.id, product.name, product.category, product.price
        );
    }
    println!();
    println!("Page {} of {}", result.page, result.total_pages);
    Ok(())
}

fn show(state: &AppState, id: ProductId) -> Result<(), CliError> {
    let product = state.catalog().get(id).ok_or(CliError::UnknownProduct(id))?;
    let image = state
        .images
        .resolve(ImageSlot::Product, Some(&id.to_string()));

    println!("{}", product.name);
    println!("  id:       {}", product.id);
    println!("  category: {}", product.category);
    println!("  price:    {} birr", product.price);
    println!("  listed:   {}", product.created_at);
    println!("  image:    {image}");
    println!("  {}", product.description);
    if !product.colors.is_empty() {
        let names: Vec<&str> = product.colors.iter().map(|c| c.name.as_str()).collect();
        println!("  colors:   {}", names.join(", "));
    }
    if let Some(details) = &product.details {
        println!("  {details}");
    }
    if state.wishlist.contains(id) {
        println!("  (in your wishlist)");
    }
    Ok(())
}
