//! Cart commands.

use anyhow::Result;
use dialoguer::Confirm;
use nader_commerce::cart::Cart;
use nader_commerce::ProductId;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_cart()?;

    match args.command {
        CartCommand::Show => {}
        CartCommand::Add { id, quantity } => {
            let product = ctx.catalog.require(&ProductId::new(id))?;
            if quantity <= 0 {
                ctx.output.warn(&format!("Quantity must be positive, got {}", quantity));
            } else {
                if !product.in_stock {
                    ctx.output.warn(&format!("{} is out of stock", product.name));
                }
                store.add_to_cart(product, quantity);
                ctx.output.success(&format!("Added {} x {}", quantity, product.name));
            }
        }
        CartCommand::Remove { id } => {
            let id = ProductId::new(id);
            if store.cart().get(&id).is_none() {
                ctx.output.warn(&format!("{} is not in the cart", id));
            } else {
                store.remove_from_cart(&id);
                ctx.output.success(&format!("Removed {}", id));
            }
        }
        CartCommand::Update { id, quantity } => {
            let id = ProductId::new(id);
            if store.cart().get(&id).is_none() {
                ctx.output.warn(&format!("{} is not in the cart", id));
            } else {
                store.update_quantity(&id, quantity);
                if quantity <= 0 {
                    ctx.output.success(&format!("Removed {}", id));
                } else {
                    ctx.output.success(&format!("Set {} to {}", id, store.cart().quantity_of(&id)));
                }
            }
        }
        CartCommand::Clear { yes } => {
            if store.cart().is_empty() {
                ctx.output.info("Cart is already empty");
            } else if yes || confirm_clear(store.cart(), ctx)? {
                store.clear_cart();
                ctx.output.success("Cart cleared");
            } else {
                ctx.output.warn("Clear cancelled");
            }
        }
    }

    print_cart(store.cart(), ctx);
    Ok(())
}

fn confirm_clear(cart: &Cart, ctx: &Context) -> Result<bool> {
    // No prompt in JSON mode; require --yes instead.
    if ctx.output.is_json() {
        return Ok(false);
    }
    let confirmed = Confirm::new()
        .with_prompt(format!("Remove all {} items from the cart?", cart.item_count()))
        .default(false)
        .interact()?;
    Ok(confirmed)
}

/// Print the cart in the selected output format.
pub fn print_cart(cart: &Cart, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(cart);
        return;
    }
    ctx.output.header("Cart");
    ctx.output.cart(cart);
}
