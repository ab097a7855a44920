//! Order history, status badges and the back-office orders table.

use super::{html_escape, render_empty_state};
use crate::admin::{admin_status_class, AdminOrder};
use shopfront_commerce::checkout::{Order, OrderStatus};

pub fn render_status_badge(status: OrderStatus) -> String {
    format!(
        r#"<span class="badge bg-{}">{}</span>"#,
        status.badge_color(),
        status.display_name()
    )
}

/// Render the customer's order history, newest first as stored.
pub fn render_order_list(orders: &[Order]) -> String {
    if orders.is_empty() {
        return render_empty_state("No orders yet");
    }
    orders.iter().map(render_order_card).collect()
}

fn render_order_card(order: &Order) -> String {
    let cancel = if order.status.can_cancel() {
        format!(
            r#"<button class="btn btn-sm btn-outline-danger" onclick="cancelOrder('{}')">Cancel Order</button>"#,
            html_escape(order.id.as_str())
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="card mb-3" data-order-id="{id}">
    <div class="card-body">
        <div class="row align-items-center">
            <div class="col-md-3">
                <h6>Order #{id}</h6>
                <small class="text-muted">{date}</small>
            </div>
            <div class="col-md-3">
                <small class="text-muted">Items:</small>
                <div>{items} item(s)</div>
            </div>
            <div class="col-md-2">
                <small class="text-muted">Total:</small>
                <div><strong>{total}</strong></div>
            </div>
            <div class="col-md-2">{badge}</div>
            <div class="col-md-2 text-end">{cancel}</div>
        </div>
    </div>
</div>"#,
        id = html_escape(order.id.as_str()),
        date = order.date.format("%-m/%-d/%Y"),
        items = order.items.len(),
        total = order.total.display(),
        badge = render_status_badge(order.status),
        cancel = cancel,
    )
}

/// Body rows of the dashboard's recent-orders table.
pub fn render_admin_orders_table(orders: &[AdminOrder]) -> String {
    orders
        .iter()
        .map(|order| {
            format!(
                r#"<tr>
    <td><strong>{id}</strong></td>
    <td>{customer}</td>
    <td>{date}</td>
    <td><strong>{total}</strong></td>
    <td><span class="admin-badge {status_class}">{status}</span></td>
    <td><span class="admin-badge {payment_class}">{payment}</span></td>
</tr>"#,
                id = html_escape(&order.id),
                customer = html_escape(&order.customer),
                date = order.date_label(),
                total = order.total_label(),
                status_class = admin_status_class(order.status),
                status = order.status.display_name(),
                payment_class = order.payment.badge_class(),
                payment = capitalize(order.payment.as_str()),
            )
        })
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
