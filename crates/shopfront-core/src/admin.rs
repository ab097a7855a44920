//! Back-office dashboard data: headline figures, the recent-orders table,
//! chart series and CSV exports.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use shopfront_commerce::checkout::{Order, OrderStatus, PaymentMethod};
use shopfront_data::api::BackendOrder;
use shopfront_commerce::money::{Currency, Money};
use std::fmt;
use std::str::FromStr;

/// Palette shared by the dashboard charts.
pub mod colors {
    pub const PRIMARY: &str = "#6366f1";
    pub const SUCCESS: &str = "#10b981";
    pub const WARNING: &str = "#f59e0b";
    pub const DANGER: &str = "#ef4444";
    pub const INFO: &str = "#3b82f6";
    pub const PURPLE: &str = "#8b5cf6";
    pub const PINK: &str = "#ec4899";
    pub const GRAY: &str = "#64748b";
}

/// Headline figures with their change over the previous period, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_sales: u64,
    pub sales_change: f64,
    pub total_orders: u64,
    pub orders_change: f64,
    pub total_customers: u64,
    pub customers_change: f64,
    pub total_revenue: u64,
    pub revenue_change: f64,
}

impl DashboardStats {
    /// The figures shown before the back office reports real numbers.
    pub fn demo() -> Self {
        Self {
            total_sales: 891_000,
            sales_change: 12.5,
            total_orders: 1547,
            orders_change: 8.2,
            total_customers: 3245,
            customers_change: 15.3,
            total_revenue: 921_000,
            revenue_change: 18.7,
        }
    }

    /// Figures computed from local order history, or the demo figures when
    /// there is none.
    pub fn from_orders(orders: &[Order]) -> Self {
        if orders.is_empty() {
            return Self::demo();
        }
        let sold = orders.iter().filter(|o| o.status != OrderStatus::Cancelled);
        let sales = Money::sum(sold.map(|o| &o.total), Currency::BDT);
        let customers: std::collections::BTreeSet<&str> = orders
            .iter()
            .map(|o| o.form.shipping.email.as_str())
            .collect();
        let whole = sales.to_decimal().round() as u64;
        Self {
            total_sales: whole,
            sales_change: 0.0,
            total_orders: orders.len() as u64,
            orders_change: 0.0,
            total_customers: customers.len() as u64,
            customers_change: 0.0,
            total_revenue: whole,
            revenue_change: 0.0,
        }
    }

    /// `(label, value, change)` rows as the stat cards show them.
    pub fn cards(&self) -> [(&'static str, String, String); 4] {
        [
            ("Total Sales", format!("\u{09f3}{}", group_thousands(self.total_sales)), change(self.sales_change)),
            ("Total Orders", group_thousands(self.total_orders), change(self.orders_change)),
            ("Total Customers", group_thousands(self.total_customers), change(self.customers_change)),
            ("Total Revenue", format!("\u{09f3}{}", group_thousands(self.total_revenue)), change(self.revenue_change)),
        ]
    }

    pub fn to_csv(&self) -> String {
        format!(
            "Metric,Value\nTotal Sales,\u{09f3}{}\nTotal Orders,{}\nTotal Customers,{}\nTotal Revenue,\u{09f3}{}",
            self.total_sales, self.total_orders, self.total_customers, self.total_revenue
        )
    }
}

fn change(percent: f64) -> String {
    format!("+{}%", percent)
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Refunded,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::Failed => "failed",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "success",
            PaymentStatus::Pending => "warning",
            PaymentStatus::Refunded | PaymentStatus::Failed => "danger",
        }
    }
}

impl PaymentStatus {
    /// Parse a backend payment status; unknown values read as pending.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "paid" => PaymentStatus::Paid,
            "refunded" => PaymentStatus::Refunded,
            "failed" => PaymentStatus::Failed,
            _ => PaymentStatus::Pending,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge class of an order status in the back office, which marks shipped
/// orders as still needing attention.
pub fn admin_status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Delivered => "success",
        OrderStatus::Processing => "info",
        OrderStatus::Shipped | OrderStatus::Pending => "warning",
        OrderStatus::Cancelled => "danger",
    }
}

/// A row of the recent-orders table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminOrder {
    pub id: String,
    pub customer: String,
    pub date: NaiveDate,
    /// Whole taka.
    pub total: u64,
    pub status: OrderStatus,
    pub payment: PaymentStatus,
}

impl AdminOrder {
    /// "Jan 5, 2026"
    pub fn date_label(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }

    pub fn total_label(&self) -> String {
        format!("\u{09f3}{}", group_thousands(self.total))
    }
}

impl From<&BackendOrder> for AdminOrder {
    fn from(order: &BackendOrder) -> Self {
        let date = order
            .created_at
            .as_deref()
            .and_then(|at| at.get(..10))
            .and_then(|day| day.parse().ok())
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        Self {
            id: order.id.to_string(),
            customer: order
                .customer
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Guest".to_string()),
            date,
            total: whole_taka(order.amount()),
            status: order.status,
            payment: order
                .payment_status
                .as_deref()
                .map(PaymentStatus::parse)
                .unwrap_or(PaymentStatus::Pending),
        }
    }
}

/// Orders placed from this profile. Cash on delivery is unpaid until
/// delivered; other methods are paid at checkout.
impl From<&Order> for AdminOrder {
    fn from(order: &Order) -> Self {
        let shipping = &order.form.shipping;
        let payment = match (order.status, order.form.payment_method) {
            (OrderStatus::Cancelled, PaymentMethod::Cod) => PaymentStatus::Failed,
            (OrderStatus::Cancelled, _) => PaymentStatus::Refunded,
            (OrderStatus::Delivered, _) => PaymentStatus::Paid,
            (_, PaymentMethod::Cod) => PaymentStatus::Pending,
            _ => PaymentStatus::Paid,
        };
        Self {
            id: order.id.to_string(),
            customer: format!("{} {}", shipping.first_name, shipping.last_name)
                .trim()
                .to_string(),
            date: order.date.date_naive(),
            total: whole_taka(order.total),
            status: order.status,
            payment,
        }
    }
}

fn whole_taka(amount: Money) -> u64 {
    amount.to_decimal().round().max(0.0) as u64
}

/// The demo recent-orders table.
pub fn demo_recent_orders() -> Vec<AdminOrder> {
    const ROWS: [(&str, &str, (i32, u32, u32), u64, OrderStatus, PaymentStatus); 8] = [
        ("ORD-2024-1547", "Rafiq Ahmed", (2026, 1, 5), 8500, OrderStatus::Delivered, PaymentStatus::Paid),
        ("ORD-2024-1546", "Fatima Khan", (2026, 1, 5), 12300, OrderStatus::Processing, PaymentStatus::Paid),
        ("ORD-2024-1545", "Karim Hassan", (2026, 1, 4), 5600, OrderStatus::Shipped, PaymentStatus::Paid),
        ("ORD-2024-1544", "Nadia Rahman", (2026, 1, 4), 15800, OrderStatus::Pending, PaymentStatus::Pending),
        ("ORD-2024-1543", "Jabir Ali", (2026, 1, 3), 9200, OrderStatus::Delivered, PaymentStatus::Paid),
        ("ORD-2024-1542", "Sadia Islam", (2026, 1, 3), 7400, OrderStatus::Cancelled, PaymentStatus::Refunded),
        ("ORD-2024-1541", "Habib Mia", (2026, 1, 2), 18600, OrderStatus::Delivered, PaymentStatus::Paid),
        ("ORD-2024-1540", "Amina Begum", (2026, 1, 2), 6700, OrderStatus::Processing, PaymentStatus::Paid),
    ];
    ROWS.iter()
        .filter_map(|&(id, customer, (y, m, d), total, status, payment)| {
            Some(AdminOrder {
                id: id.to_string(),
                customer: customer.to_string(),
                date: NaiveDate::from_ymd_opt(y, m, d)?,
                total,
                status,
                payment,
            })
        })
        .collect()
}

/// CSV of the recent-orders table, one line per order.
pub fn orders_csv(orders: &[AdminOrder]) -> String {
    let mut csv = String::from("Order ID,Customer,Date,Total,Status,Payment\n");
    for order in orders {
        csv.push_str(&format!(
            "{},{},{},\u{09f3}{},{},{}\n",
            order.id,
            order.customer,
            order.date.format("%Y-%m-%d"),
            order.total,
            order.status.as_str(),
            order.payment
        ));
    }
    csv
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalesPeriod {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl SalesPeriod {
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            SalesPeriod::Daily => &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            SalesPeriod::Weekly => &["Week 1", "Week 2", "Week 3", "Week 4"],
            SalesPeriod::Monthly => &[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            SalesPeriod::Yearly => &["2020", "2021", "2022", "2023", "2024", "2025"],
        }
    }

    pub fn data(&self) -> &'static [u64] {
        match self {
            SalesPeriod::Daily => &[12500, 15200, 18900, 14300, 21400, 25600, 19800],
            SalesPeriod::Weekly => &[85000, 92000, 78000, 95000],
            SalesPeriod::Monthly => &[
                45000, 52000, 48000, 61000, 55000, 67000, 72000, 68000, 75000, 81000, 78000, 89000,
            ],
            SalesPeriod::Yearly => &[450000, 520000, 680000, 750000, 820000, 891000],
        }
    }
}

impl FromStr for SalesPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(SalesPeriod::Daily),
            "weekly" => Ok(SalesPeriod::Weekly),
            "monthly" => Ok(SalesPeriod::Monthly),
            "yearly" => Ok(SalesPeriod::Yearly),
            other => Err(format!("Unknown period: {}", other)),
        }
    }
}

/// Line chart of sales over `period`, as a chart configuration document.
pub fn sales_chart(period: SalesPeriod) -> Value {
    json!({
        "type": "line",
        "data": {
            "labels": period.labels(),
            "datasets": [{
                "label": "Sales",
                "data": period.data(),
                "borderColor": colors::PRIMARY,
                "borderWidth": 3,
                "fill": true,
                "tension": 0.4,
                "pointBackgroundColor": "#fff",
                "pointBorderColor": colors::PRIMARY,
                "pointRadius": 4
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "display": false } },
            "scales": { "y": { "beginAtZero": true } }
        }
    })
}

/// Revenue by category.
pub const REVENUE_BREAKDOWN: [(&str, u64); 5] = [
    ("Electronics", 320000),
    ("Fashion", 280000),
    ("Home & Living", 180000),
    ("Beauty", 95000),
    ("Sports", 46000),
];

/// Donut chart of [`REVENUE_BREAKDOWN`].
pub fn revenue_chart() -> Value {
    let (labels, data): (Vec<&str>, Vec<u64>) = REVENUE_BREAKDOWN.iter().copied().unzip();
    json!({
        "type": "doughnut",
        "data": {
            "labels": labels,
            "datasets": [{
                "data": data,
                "backgroundColor": [
                    colors::PRIMARY,
                    colors::SUCCESS,
                    colors::WARNING,
                    colors::PURPLE,
                    colors::PINK
                ],
                "borderWidth": 0
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "cutout": "70%"
        }
    })
}
