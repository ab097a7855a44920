//! Cart page rows and the pricing summary.

use super::html_escape;
use shopfront_commerce::cart::{CartItem, CheckoutSummary};
use shopfront_commerce::catalog::PLACEHOLDER_IMAGE;

/// Render the cart lines; an empty cart renders nothing.
pub fn render_cart_rows(items: &[CartItem]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| render_cart_row(index, item))
        .collect()
}

fn render_cart_row(index: usize, item: &CartItem) -> String {
    // Stored quantities below 1 are shown as 1.
    let quantity = item.quantity.max(1);
    let line_total = item.price * quantity as i64;
    let attributes = item
        .attributes
        .as_deref()
        .map(|a| format!(r#"<br><small class="text-muted">{}</small>"#, html_escape(a)))
        .unwrap_or_default();

    format!(
        r#"<div class="card mb-3" data-cart-index="{index}">
    <div class="card-body">
        <div class="row align-items-center">
            <div class="col-md-2">
                <img src="{image}" alt="{name}" class="img-fluid rounded">
            </div>
            <div class="col-md-4">
                <h6 class="mb-1">{name}</h6>
                <small class="text-muted">{category}</small>{attributes}
            </div>
            <div class="col-md-2"><strong>{price}</strong></div>
            <div class="col-md-2">
                <div class="input-group input-group-sm">
                    <button class="btn btn-outline-secondary" onclick="updateQuantity({index}, -1)"><i class="bi bi-dash"></i></button>
                    <input type="number" class="form-control text-center" value="{quantity}" min="1" readonly>
                    <button class="btn btn-outline-secondary" onclick="updateQuantity({index}, 1)"><i class="bi bi-plus"></i></button>
                </div>
            </div>
            <div class="col-md-1"><strong>{line_total}</strong></div>
            <div class="col-md-1 text-end">
                <button class="btn btn-sm btn-outline-danger" onclick="removeFromCartPage({index})"><i class="bi bi-trash"></i></button>
            </div>
        </div>
    </div>
</div>"#,
        index = index,
        image = html_escape(item.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)),
        name = html_escape(&item.name),
        category = html_escape(item.category_label()),
        attributes = attributes,
        price = item.price.display_short(),
        quantity = quantity,
        line_total = line_total.display(),
    )
}

/// Render the summary box beside the cart or checkout form.
pub fn render_cart_summary(summary: &CheckoutSummary) -> String {
    format!(
        r#"<div class="cart-summary">
    <div class="d-flex justify-content-between mb-2"><span>Subtotal (<span id="itemCount">{count}</span> items)</span><span>{subtotal}</span></div>
    <div class="d-flex justify-content-between mb-2"><span>Shipping</span><span>{shipping}</span></div>
    <div class="d-flex justify-content-between mb-2"><span>Tax (5%)</span><span>{tax}</span></div>
    <hr>
    <div class="d-flex justify-content-between"><strong>Total</strong><strong>{total}</strong></div>
</div>"#,
        count = summary.item_count,
        subtotal = summary.subtotal.display(),
        shipping = summary.shipping_label(),
        tax = summary.tax.display(),
        total = summary.total.display(),
    )
}

/// The little counter on the cart icon; hidden when zero.
pub fn render_cart_badge(count: u32) -> String {
    if count == 0 {
        r#"<span class="cart-badge" style="display: none;">0</span>"#.to_string()
    } else {
        format!(r#"<span class="cart-badge">{}</span>"#, count)
    }
}
