//! Catalog browsing commands.

use anyhow::{Context as _, Result};
use nader_commerce::catalog::{Category, Product};
use nader_commerce::search::{Filter, SearchQuery, SortOption};
use nader_commerce::ProductId;

use super::{ProductsArgs, ProductsCommand};
use crate::context::Context;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ProductsCommand::List { category } => list_products(category.as_deref(), ctx),
        ProductsCommand::Show { id } => show_product(&id, ctx),
        ProductsCommand::Search {
            query,
            category,
            sort,
            in_stock,
            page,
            per_page,
        } => {
            let mut search = SearchQuery::new()
                .with_query(query)
                .with_sort(sort.parse::<SortOption>().map_err(anyhow::Error::msg)?)
                .with_pagination(page, per_page);
            if let Some(category) = category {
                search = search.with_category(parse_category(&category)?);
            }
            if in_stock {
                search = search.with_filter(Filter::in_stock());
            }
            search_products(&search, ctx)
        }
        ProductsCommand::Categories => list_categories(ctx),
    }
}

fn parse_category(name: &str) -> Result<Category> {
    name.parse::<Category>()
        .with_context(|| format!("Valid categories: {}", category_names()))
}

fn category_names() -> String {
    Category::ALL
        .iter()
        .map(Category::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn list_products(category: Option<&str>, ctx: &Context) -> Result<()> {
    let products: Vec<&Product> = match category {
        Some(name) => ctx.catalog.by_category(parse_category(name)?),
        None => ctx.catalog.products().iter().collect(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("Products ({})", products.len()));
    ctx.output.products(&products);
    Ok(())
}

fn show_product(id: &str, ctx: &Context) -> Result<()> {
    let product = ctx.catalog.require(&ProductId::new(id))?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("ID", product.id.as_str());
    ctx.output.kv("Price", &product.price.display());
    ctx.output.kv("Category", product.category.as_str());
    let stock = match (product.in_stock, product.stock_quantity) {
        (true, Some(n)) => format!("in stock ({} left)", n),
        (true, None) => "in stock".to_string(),
        (false, _) => "out of stock".to_string(),
    };
    ctx.output.kv("Availability", &stock);
    if !product.description.is_empty() {
        ctx.output.info("");
        ctx.output.info(&product.description);
    }
    if !product.features.is_empty() {
        ctx.output.info("");
        for feature in &product.features {
            ctx.output.list_item(feature);
        }
    }
    if ctx.output.is_verbose() {
        ctx.output.kv("Image", &product.image);
        for image in &product.images {
            ctx.output.list_item(image);
        }
    }
    Ok(())
}

fn search_products(query: &SearchQuery, ctx: &Context) -> Result<()> {
    let results = query.run(&ctx.catalog);

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    let title = match &query.query {
        Some(q) => format!("Results for \"{}\"", q),
        None => "Results".to_string(),
    };
    ctx.output.header(&title);

    if results.is_empty() {
        ctx.output.info("No products matched");
        return Ok(());
    }

    ctx.output.products(&results.items);
    let p = &results.pagination;
    ctx.output.info(&format!(
        "Showing {}-{} of {} (page {} of {}, sorted by {})",
        p.start_item(),
        p.end_item(),
        p.total,
        p.page,
        p.total_pages,
        query.sort.display_name(),
    ));
    Ok(())
}

fn list_categories(ctx: &Context) -> Result<()> {
    let categories = ctx.catalog.categories();

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for summary in categories {
        ctx.output.kv(summary.category.as_str(), &summary.count.to_string());
    }
    Ok(())
}
