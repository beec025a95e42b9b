//! Read-only catalog pages: home, categories, category and search results.

use anyhow::{bail, Result};
use pantry_commerce::catalog::{
    apply_filters_and_sort, or_empty, ProductFilters, ProductSort, ProductSource,
};
use pantry_commerce::routes::Route;
use pantry_commerce::Money;

use super::{CategoriesArgs, CategoryArgs, FeaturedArgs, SearchArgs};
use crate::context::Context;

/// Show the featured products.
pub async fn run_featured(_args: FeaturedArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let products = or_empty(catalog.list_featured().await, "list_featured");

    ctx.output.header("Featured Products");
    ctx.output.products(&products);
    Ok(())
}

/// List the categories.
pub async fn run_categories(_args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let categories = or_empty(catalog.list_categories().await, "list_categories");

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Shop by Category");
    for category in &categories {
        let count = format!("{} items", category.item_count);
        let path = Route::Category(category.slug.clone()).path();
        ctx.output.table_row(
            &[&category.icon, &category.title, &count, &path],
            &[3, 28, 10, 30],
        );
    }
    Ok(())
}

/// Show one category, optionally filtered and sorted.
pub async fn run_category(args: CategoryArgs, ctx: &Context) -> Result<()> {
    let sort = optional_sort(args.sort.as_deref())?;

    let currency = ctx.config.currency;
    let mut filters = ProductFilters::new().category(args.slug.as_str()).price_range(
        args.min_price.map(|p| Money::from_decimal(p, currency)),
        args.max_price.map(|p| Money::from_decimal(p, currency)),
    );
    if args.in_stock {
        filters = filters.in_stock_only();
    }

    let catalog = ctx.catalog()?;
    let title = match catalog.category_by_slug(&args.slug).await {
        Ok(Some(category)) => format!("{} {}", category.icon, category.title),
        Ok(None) => args.slug.clone(),
        Err(e) => {
            ctx.output.debug(&format!("category lookup failed: {e}"));
            args.slug.clone()
        }
    };

    let products = or_empty(catalog.list_products(&filters, sort).await, "list_products");

    ctx.output.header(&format!("{} ({} products)", title, products.len()));
    if let Some(sort) = sort {
        ctx.output.debug(&format!("sorted by {}", sort.display_name()));
    }
    ctx.output.products(&products);
    Ok(())
}

/// Show the full results for a search.
pub async fn run_search(args: SearchArgs, ctx: &Context) -> Result<()> {
    let sort = parse_sort(&args.sort)?;
    let catalog = ctx.catalog()?;

    let results = or_empty(catalog.search(&args.query).await, "search");
    let results = apply_filters_and_sort(results, &ProductFilters::new(), sort);

    ctx.output.header(&format!(
        "{} results for \"{}\"",
        results.len(),
        args.query.trim()
    ));
    ctx.output.debug(&Route::search(args.query.trim()).path());
    ctx.output.products(&results);
    Ok(())
}

/// Parse a sort option; `featured` keeps source order.
fn parse_sort(param: &str) -> Result<Option<ProductSort>> {
    let param = param.trim().to_ascii_lowercase();
    if param == "featured" {
        return Ok(None);
    }
    match ProductSort::from_param(&param) {
        Some(sort) => Ok(Some(sort)),
        None => bail!(
            "Unknown sort '{}'. Use featured, price-asc, price-desc, name-asc, name-desc or rating.",
            param
        ),
    }
}

/// Parse `--sort` when given; absent means source order.
fn optional_sort(param: Option<&str>) -> Result<Option<ProductSort>> {
    match param {
        Some(param) => parse_sort(param),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_commerce::catalog::SortField;

    #[test]
    fn test_parse_sort() {
        assert_eq!(parse_sort("featured").unwrap(), None);
        assert_eq!(
            parse_sort("Price-Desc").unwrap(),
            Some(ProductSort::desc(SortField::Price))
        );
        assert!(parse_sort("cheapest").is_err());
    }

    #[test]
    fn test_optional_sort() {
        assert_eq!(optional_sort(None).unwrap(), None);
        assert_eq!(optional_sort(Some("featured")).unwrap(), None);

        let sort = optional_sort(Some("name-asc")).unwrap();
        assert_eq!(sort, Some(ProductSort::asc(SortField::Name)));
        assert_eq!(sort.map(|s| s.display_name()), Some("Name: A-Z"));
        assert!(optional_sort(Some("cheapest")).is_err());
    }
}
