//! End-to-end behaviour of the storefront against stub backends.

use async_trait::async_trait;
use shopfront_auth::{AuthError, GuardDecision, Registration, Role};
use shopfront_cache::{LocalStore, StorageKey};
use shopfront_commerce::fallback;
use shopfront_commerce::prelude::*;
use shopfront_core::admin::PaymentStatus;
use shopfront_core::render::render_cart_rows;
use shopfront_core::{
    coupon_notice, product_added_notice, Storefront, StorefrontConfig, StorefrontError,
};
use shopfront_data::api::ContactMessage;
use shopfront_data::{FetchError, OfflineTransport, RequestBuilder, Response, Transport};
use shopfront_messaging::ReplySource;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Answers requests whose URL ends with a known suffix; everything else is
/// a 404. Records every request.
#[derive(Default)]
struct Scripted {
    routes: Vec<(Option<&'static str>, String, serde_json::Value)>,
    seen: Mutex<Vec<String>>,
}

impl Scripted {
    fn route(mut self, suffix: &str, body: serde_json::Value) -> Self {
        self.routes.push((None, suffix.to_string(), body));
        self
    }

    /// Like [`route`](Self::route), for one HTTP method only.
    fn route_method(mut self, method: &'static str, suffix: &str, body: serde_json::Value) -> Self {
        self.routes.push((Some(method), suffix.to_string(), body));
        self
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for Scripted {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let url = request.full_url();
        self.seen
            .lock()
            .unwrap()
            .push(format!("{} {}", request.method(), url));
        let method = request.method().to_string();
        let path = url.split('?').next().unwrap_or_default();
        let route = self.routes.iter().find(|(only, suffix, _)| {
            only.map_or(true, |m| m == method) && path.ends_with(suffix.as_str())
        });
        match route {
            Some((_, _, body)) => Ok(Response::json_ok(body)),
            None => Ok(Response::new(404, HashMap::new(), Vec::new())),
        }
    }
}

fn offline_shop() -> Storefront {
    Storefront::with_transport(
        LocalStore::in_memory(),
        &StorefrontConfig::default(),
        Arc::new(OfflineTransport),
    )
}

fn headphones() -> ProductCard {
    ProductCard::demo(1, "Wireless Headphones", "Electronics", 300, "Headphones")
}

fn checkout_form() -> CheckoutForm {
    CheckoutForm {
        shipping: ShippingAddress {
            first_name: "Karim".into(),
            last_name: "Hassan".into(),
            email: "karim@example.com".into(),
            phone: "01800000000".into(),
            address: "12 Lake Road".into(),
            city: "Dhaka".into(),
            division: "Dhaka".into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn test_badge_matches_stored_quantities() {
    let shop = offline_shop();
    shop.add_to_cart(&headphones(), 2).unwrap();
    shop.add_to_cart(&ProductCard::demo(2, "Mug", "Home", 250, "Mug"), 3)
        .unwrap();
    shop.change_quantity(0, 1).unwrap();

    let stored: serde_json::Value =
        serde_json::from_str(&shop.store().raw(StorageKey::Cart).unwrap()).unwrap();
    let stored_total: u64 = stored
        .as_array()
        .unwrap()
        .iter()
        .map(|line| line["quantity"].as_u64().unwrap())
        .sum();
    assert_eq!(shop.cart_badge() as u64, stored_total);
    assert_eq!(stored_total, 6);
}

#[test]
fn test_quantity_never_renders_below_one() {
    let shop = offline_shop();
    shop.store()
        .write_raw(
            StorageKey::Cart,
            r#"[{"id": 1, "name": "Mug", "price": 250, "quantity": 0}, {"id": 2, "name": "Lamp", "price": 900}]"#,
        )
        .unwrap();

    let cart = shop.cart();
    assert!(cart.items().iter().all(|item| item.quantity >= 1));
    assert_eq!(shop.change_quantity(0, -5).unwrap(), 1);

    let html = render_cart_rows(shop.cart().items());
    assert!(!html.contains(r#"value="0""#));
    assert_eq!(html.matches(r#"value="1""#).count(), 2);
}

#[tokio::test]
async fn test_order_total_below_free_shipping() {
    let mut shop = offline_shop();
    shop.add_to_cart(&headphones(), 3).unwrap();

    let placed = shop.checkout(checkout_form()).await.unwrap();
    // 900 + 100 shipping + 45 tax
    assert_eq!(placed.value.total, Money::taka(1045));
    assert!(placed.demo_mode);
    assert_eq!(placed.notice("Order placed successfully!"), "Order placed successfully! (Demo mode)");
}

#[tokio::test]
async fn test_order_total_with_free_shipping() {
    let mut shop = offline_shop();
    shop.add_to_cart(&ProductCard::demo(5, "Coffee Maker", "Home & Living", 1000, "Coffee"), 1)
        .unwrap();
    let summary = shop.cart_summary();
    assert_eq!(summary.shipping_label(), "FREE");

    let placed = shop.checkout(checkout_form()).await.unwrap();
    assert_eq!(placed.value.total, Money::taka(1050));
}

#[tokio::test]
async fn test_checkout_records_order_and_clears_cart() {
    let mut shop = offline_shop();
    assert!(matches!(
        shop.checkout(checkout_form()).await,
        Err(StorefrontError::EmptyCart)
    ));

    shop.add_to_cart(&headphones(), 1).unwrap();
    let placed = shop.checkout(checkout_form()).await.unwrap();

    assert!(shop.cart().is_empty());
    assert_eq!(shop.cart_badge(), 0);
    let orders = shop.orders();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, placed.value.id);
    assert_eq!(orders[0].status, OrderStatus::Pending);
    assert!(placed.value.id.as_number().is_some());

    let cancelled = shop.cancel_order(&placed.value.id).unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert!(shop.cancel_order(&placed.value.id).is_err());
    assert!(shop.cancel_order(&OrderId::new("missing")).is_err());
}

#[tokio::test]
async fn test_checkout_uses_backend_id() {
    let transport = Arc::new(Scripted::default().route("/orders", serde_json::json!({"id": "ORD-77"})));
    let mut shop = Storefront::with_transport(
        LocalStore::in_memory(),
        &StorefrontConfig::default(),
        transport.clone(),
    );
    shop.add_to_cart(&headphones(), 1).unwrap();

    let placed = shop.checkout(checkout_form()).await.unwrap();
    assert!(!placed.demo_mode);
    assert_eq!(placed.value.id, OrderId::new("ORD-77"));
    assert_eq!(transport.seen(), vec!["POST http://localhost:8080/api/orders".to_string()]);
}

#[tokio::test]
async fn test_failed_listings_use_fixed_fallbacks() {
    let shop = offline_shop();

    let featured = shop.featured_products().await;
    assert!(featured.is_fallback());
    assert_eq!(featured.get().len(), 8);

    let recommended = shop.recommended_products().await;
    assert!(recommended.is_fallback());
    assert_eq!(recommended.get().len(), 4);

    let home = shop.home_page().await;
    assert_eq!(home.featured.get().len(), 8);
    assert_eq!(home.recommended.get().len(), 4);
}

#[tokio::test]
async fn test_listing_live_and_fallback() {
    let transport = Arc::new(Scripted::default().route(
        "/products",
        serde_json::json!([
            {"id": 1, "name": "Yoga Mat", "category": "Sports", "price": 1500},
            {"id": 2, "name": "Dumbbells", "category": "Sports", "price": 500},
            {"id": 3, "name": "Jump Rope", "category": "Sports", "price": 300}
        ]),
    ));
    let mut shop = Storefront::with_transport(
        LocalStore::in_memory(),
        &StorefrontConfig::default(),
        transport,
    );
    let filters = ListingFilters {
        sort: SortOption::PriceLow,
        page: 1,
        ..Default::default()
    };
    let page = shop.listing(filters).await;
    assert!(page.is_live());
    let names: Vec<&str> = page.get().items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Jump Rope", "Dumbbells", "Yoga Mat"]);
    assert_eq!(shop.filters().sort, SortOption::PriceLow);

    let mut offline = offline_shop();
    let page = offline.listing(ListingFilters::default()).await;
    assert!(page.is_fallback());
    assert_eq!(page.get().len(), 12);
}

#[tokio::test]
async fn test_short_search_is_ignored() {
    let shop = offline_shop();
    assert!(shop.search(" a ").await.is_none());
    let results = shop.search("watch").await.unwrap();
    assert!(results.is_fallback());
}

#[tokio::test]
async fn test_route_guard() {
    let mut shop = offline_shop();

    let decision = shop.guard("/frontend/cart.html");
    assert!(matches!(decision, GuardDecision::RedirectToLogin { .. }));
    assert_eq!(decision.message(), Some("Please login to access this page"));
    assert!(shop.guard("/index.html").is_allowed());

    let login = shop
        .login("customer@polashtoli.com", "customer123", false)
        .await
        .unwrap();
    assert!(login.demo_mode);
    assert_eq!(login.value.role, Role::Customer);

    let decision = shop.guard("/frontend/admin/dashboard.html");
    assert_eq!(
        decision,
        GuardDecision::RedirectToDashboard {
            url: "../customer/dashboard.html".to_string()
        }
    );
    assert!(shop.guard("/frontend/cart.html").is_allowed());
    assert!(!shop.can_access("manage_products"));

    shop.logout().unwrap();
    assert!(shop.current_session().is_none());
    assert!(shop.profile().is_none());
}

#[tokio::test]
async fn test_demo_login_rejects_unknown_credentials() {
    let mut shop = offline_shop();
    let err = shop
        .login("someone@example.com", "whatever", true)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid username or password");
    assert!(shop.current_session().is_none());
}

#[tokio::test]
async fn test_backend_login_stores_token() {
    let transport = Arc::new(Scripted::default().route(
        "/auth/login",
        serde_json::json!({"id": 42, "name": "Nadia", "email": "nadia@example.com", "token": "tok-1"}),
    ));
    let mut shop = Storefront::with_transport(
        LocalStore::in_memory(),
        &StorefrontConfig::default(),
        transport,
    );
    let login = shop.login("nadia@example.com", "secret1", true).await.unwrap();
    assert!(!login.demo_mode);
    assert_eq!(login.value.token.as_deref(), Some("tok-1"));
    assert_eq!(shop.profile().unwrap().remember_me, Some(true));
    assert_eq!(
        shop.store().raw(StorageKey::AuthToken).as_deref(),
        Some("\"tok-1\"")
    );
}

#[tokio::test]
async fn test_register_in_demo_mode() {
    let mut shop = offline_shop();
    let mut form = Registration {
        name: "Sadia Islam".into(),
        email: "sadia@example.com".into(),
        phone: "01900000000".into(),
        password: "secret1".into(),
        confirm_password: "secret2".into(),
    };
    let err = shop.register(form.clone()).await.unwrap_err();
    assert_eq!(err.to_string(), "Passwords do not match!");

    form.confirm_password = "secret1".into();
    let registered = shop.register(form).await.unwrap();
    assert!(registered.demo_mode);
    assert_eq!(registered.value.role, Role::Customer);
    assert_eq!(shop.profile().unwrap().email, "sadia@example.com");

    // The new account works for the next login.
    shop.logout().unwrap();
    assert!(shop.login("sadia@example.com", "secret1", false).await.is_ok());
}

#[tokio::test]
async fn test_offline_chat_uses_canned_replies() {
    let mut shop = offline_shop();
    shop.open_assistant();

    let source = shop.send_chat("hello").await.unwrap();
    assert_eq!(source, Some(ReplySource::Offline));
    let messages = shop.chat().messages();
    assert!(messages[1].text.starts_with("Hello! Welcome to Polashtoli Store."));

    shop.add_to_cart(&headphones(), 1).unwrap();
    shop.add_to_cart(&ProductCard::demo(2, "Mug", "Home", 250, "Mug"), 1)
        .unwrap();
    shop.send_chat("what is in my cart").await.unwrap();
    let last_reply = shop
        .chat()
        .messages()
        .iter()
        .rev()
        .find(|m| m.text.contains("items"))
        .unwrap();
    assert!(last_reply.text.contains("2 items"));

    assert_eq!(shop.send_chat("   ").await.unwrap(), None);
    assert!(shop
        .store()
        .raw(StorageKey::UserId)
        .unwrap()
        .starts_with("\"guest_"));
}

#[tokio::test]
async fn test_disabled_chat_answers_without_offline_notice() {
    let mut shop = offline_shop();
    shop.update_widget_config(shopfront_messaging::ConfigUpdate {
        chatbot: Some(shopfront_messaging::ChatbotUpdate {
            enabled: Some(false),
            ..Default::default()
        }),
        ..Default::default()
    });
    shop.open_assistant();
    let source = shop.send_chat("hello").await.unwrap();
    assert_eq!(source, Some(ReplySource::Canned));
    assert_eq!(shop.chat().messages().len(), 2);
}

#[tokio::test]
async fn test_chat_needs_open_assistant() {
    let mut shop = offline_shop();
    let err = shop.send_chat("hello").await.unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Messaging(shopfront_messaging::MessagingError::NotOpen)
    ));
    assert!(shop.chat().messages().is_empty());

    shop.toggle_widget();
    assert!(shop.send_chat("hello").await.is_err());

    shop.open_assistant();
    assert_eq!(shop.send_chat("hello").await.unwrap(), Some(ReplySource::Offline));

    shop.close_chatbot();
    assert!(shop.send_chat("hello again").await.is_err());
    assert_eq!(shop.chat().messages().len(), 2);
}

#[test]
fn test_cart_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json");

    let written = {
        let shop = Storefront::with_transport(
            LocalStore::open_file(&path).unwrap(),
            &StorefrontConfig::default(),
            Arc::new(OfflineTransport),
        );
        shop.add_to_cart(&headphones(), 2).unwrap();
        shop.add_to_cart(&ProductCard::demo(9, "Desk Lamp", "Home & Living", 1299, "Lamp"), 1)
            .unwrap();
        shop.store().raw(StorageKey::Cart).unwrap()
    };

    let reopened = Storefront::with_transport(
        LocalStore::open_file(&path).unwrap(),
        &StorefrontConfig::default(),
        Arc::new(OfflineTransport),
    );
    assert_eq!(reopened.store().raw(StorageKey::Cart).unwrap(), written);
    let items = reopened.cart().into_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].quantity, 2);
    assert_eq!(reopened.cart_badge(), 3);
}

#[tokio::test]
async fn test_contact_kept_locally_when_offline() {
    let shop = offline_shop();
    let message = ContactMessage {
        name: "Habib".into(),
        email: "habib@example.com".into(),
        message: "Do you deliver to Sylhet?".into(),
        ..Default::default()
    };
    let sent = shop.submit_contact(message).await.unwrap();
    assert_eq!(sent.notice("Message sent successfully!"), "Message sent successfully! (Demo mode)");

    let kept: Vec<ContactMessage> = shop.store().read(StorageKey::ContactMessages);
    assert_eq!(kept.len(), 1);
    assert!(!kept[0].timestamp.is_empty());

    let err = shop
        .submit_contact(ContactMessage::default())
        .await
        .unwrap_err();
    assert!(err.is_user_error());
}

#[tokio::test]
async fn test_newsletter_failure_is_reported() {
    let shop = offline_shop();
    let err = shop.subscribe("amina@example.com").await.unwrap_err();
    assert_eq!(err.to_string(), "An error occurred. Please try again.");

    let rejecting = Storefront::with_transport(
        LocalStore::in_memory(),
        &StorefrontConfig::default(),
        Arc::new(Scripted::default()),
    );
    let err = rejecting.subscribe("amina@example.com").await.unwrap_err();
    assert_eq!(err.to_string(), "Subscription failed. Please try again.");
}

#[test]
fn test_coupon_only_announces_savings() {
    let mut shop = offline_shop();
    shop.add_to_cart(&headphones(), 4).unwrap();
    let saved = shop.apply_coupon("FIRST100").unwrap();
    assert_eq!(saved, Money::taka(100));
    assert_eq!(coupon_notice(saved), "Coupon applied! You saved \u{09f3}100.00");
    assert_eq!(shop.coupon_savings(), Some(Money::taka(100)));
    assert_eq!(shop.cart_summary().total, Money::taka(1260));
    assert!(shop.apply_coupon("NOPE").is_err());
}

#[tokio::test]
async fn test_coupon_leaves_order_total_unchanged() {
    let mut shop = offline_shop();
    shop.add_to_cart(&headphones(), 4).unwrap();
    shop.apply_coupon("FIRST100").unwrap();

    let placed = shop.checkout(checkout_form()).await.unwrap();
    // 1200 + free shipping + 60 tax
    assert_eq!(placed.value.total, Money::taka(1260));
    assert!(shop.applied_coupon().is_none());
}

#[tokio::test]
async fn test_offline_coupon_check() {
    let shop = offline_shop();
    shop.add_to_cart(&headphones(), 4).unwrap();

    let checked = shop.check_coupon(" FIRST100 ").await;
    assert!(checked.is_fallback());
    assert!(checked.get().valid);
    assert_eq!(checked.get().discount, Money::taka(100));
    assert_eq!(checked.get().final_amount, Money::taka(1100));

    let unknown = shop.check_coupon("NOPE").await.into_inner();
    assert!(!unknown.valid);
    assert_eq!(unknown.final_amount, Money::taka(1200));
}

#[tokio::test]
async fn test_top_rated_and_discounted_fallbacks() {
    let shop = offline_shop();
    let top = shop.top_rated_products().await;
    assert!(top.is_fallback());
    assert_eq!(top.get()[0].name, "Smart Watch");

    let discounted = shop.discounted_products().await.into_inner();
    assert!(!discounted.is_empty());
    assert!(discounted.iter().all(ProductCard::is_on_sale));
}

fn lamp_draft() -> ProductDraft {
    ProductDraft {
        name: "Desk Lamp".into(),
        category: "home".into(),
        price: Money::taka(899),
        stock: 12,
        tags: ProductDraft::parse_tags("lighting, new arrival"),
        ..Default::default()
    }
}

fn auth_error(err: StorefrontError) -> AuthError {
    match err {
        StorefrontError::Auth(e) => e,
        other => panic!("expected an auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_catalog_management_needs_permission() {
    let mut shop = offline_shop();
    let err = shop.managed_products().await.unwrap_err();
    assert!(matches!(auth_error(err), AuthError::NotLoggedIn));

    shop.login("customer@polashtoli.com", "customer123", false).await.unwrap();
    let err = shop.add_product(lamp_draft()).await.unwrap_err();
    assert!(matches!(auth_error(err), AuthError::InsufficientPermissions));
    assert!(shop.store().raw(StorageKey::Products).is_none());

    shop.logout().unwrap();
    shop.login("salesman@polashtoli.com", "sales123", false).await.unwrap();
    let products = shop.managed_products().await.unwrap();
    assert!(products.is_fallback());
    assert_eq!(products.get().len(), 6);
    // Salesmen manage products but not coupons.
    let err = shop.active_coupons().await.unwrap_err();
    assert!(matches!(auth_error(err), AuthError::InsufficientPermissions));
}

#[tokio::test]
async fn test_offline_product_management() {
    let mut shop = offline_shop();
    shop.login("admin@polashtoli.com", "admin123", false).await.unwrap();

    let today = chrono::Local::now().date_naive();
    let seeded = fallback::managed_products();
    let expected = ProductId::next_for_date(today, seeded.iter().map(|p| &p.id)).unwrap();

    let added = shop.add_product(lamp_draft()).await.unwrap();
    assert!(added.demo_mode);
    assert_eq!(added.value.id, expected);
    assert_eq!(added.value.created_at, Some(today.to_string()));
    assert_eq!(
        added.notice(&product_added_notice(added.value.id)),
        format!("Product added successfully! ID: {} (Demo mode)", expected)
    );

    let copy = shop.duplicate_product(ProductId::new(2601010001)).await.unwrap();
    assert_eq!(copy.value.name, "Samsung Galaxy S24 (Copy)");
    assert_eq!(copy.value.id.day_prefix(), expected.day_prefix());
    assert_eq!(copy.value.id.serial(), expected.serial() + 1);

    let mut draft = ProductDraft::from(&added.value);
    draft.stock = 0;
    let updated = shop.update_product(added.value.id, draft).await.unwrap();
    assert_eq!(updated.value.stock, 0);
    assert_eq!(updated.value.images, added.value.images);

    let stats = shop.inventory_stats().await.unwrap().into_inner();
    assert_eq!(stats.total, 8);
    assert_eq!(stats.out_of_stock, 2);

    shop.delete_product(copy.value.id).await.unwrap();
    let err = shop.delete_product(copy.value.id).await.unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Commerce(CommerceError::ProductNotFound(_))
    ));

    let csv = shop.export_products_csv().await.unwrap();
    assert_eq!(csv.lines().count(), 8);
    assert!(csv.contains(",\"Desk Lamp\",home,899,0,0,"));

    let invalid = ProductDraft {
        price: Money::taka(0),
        ..lamp_draft()
    };
    assert!(shop.add_product(invalid).await.unwrap_err().is_user_error());
}

#[tokio::test]
async fn test_backend_saves_new_product() {
    let transport = Arc::new(Scripted::default().route_method(
        "POST",
        "/products",
        serde_json::json!({"id": 501, "name": "Desk Lamp", "price": 899, "stockQuantity": 12}),
    ));
    let mut shop = Storefront::with_transport(
        LocalStore::in_memory(),
        &StorefrontConfig::default(),
        transport.clone(),
    );
    shop.login("admin@polashtoli.com", "admin123", false).await.unwrap();

    let added = shop.add_product(lamp_draft()).await.unwrap();
    assert!(!added.demo_mode);
    assert_eq!(added.value.id, ProductId::new(501));
    assert!(shop.store().raw(StorageKey::Products).is_none());
    assert!(transport
        .seen()
        .contains(&"POST http://localhost:8080/api/products".to_string()));
}

#[tokio::test]
async fn test_back_office_orders_and_customers_offline() {
    let mut shop = offline_shop();
    shop.add_to_cart(&headphones(), 3).unwrap();
    shop.checkout(checkout_form()).await.unwrap();
    shop.login("admin@polashtoli.com", "admin123", false).await.unwrap();

    let orders = shop.admin_orders().await.unwrap();
    assert!(orders.is_fallback());
    assert_eq!(orders.get().len(), 8);
    assert_eq!(shop.recent_admin_orders().await.unwrap().get().len(), 8);

    let customers = shop.customers().await.unwrap().into_inner();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].name, "Karim Hassan");
    assert_eq!(shop.search_customers("karim@").await.unwrap().get().len(), 1);
    assert!(shop.search_customers("fatima").await.unwrap().get().is_empty());

    let history = shop.customer_orders(&customers[0]).await.unwrap().into_inner();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].total, 1045);
    assert_eq!(history[0].payment, PaymentStatus::Pending);

    let stats = shop.order_stats().await.unwrap().into_inner();
    assert_eq!((stats.total, stats.pending, stats.today), (1, 1, 1));

    assert!(!shop.active_coupons().await.unwrap().get().is_empty());
}

#[tokio::test]
async fn test_back_office_orders_from_backend() {
    let transport = Arc::new(Scripted::default().route(
        "/orders",
        serde_json::json!([{
            "id": "ORD-26030100002",
            "customer": {"id": 5, "name": "Fatima Khan", "email": "fatima@example.com"},
            "totalAmount": 12300,
            "status": "processing",
            "paymentStatus": "paid",
            "createdAt": "2026-03-01T09:30:00"
        }]),
    ));
    let mut shop = Storefront::with_transport(
        LocalStore::in_memory(),
        &StorefrontConfig::default(),
        transport.clone(),
    );
    shop.login("salesman@polashtoli.com", "sales123", false).await.unwrap();

    let orders = shop.admin_orders().await.unwrap();
    assert!(orders.is_live());
    assert_eq!(orders.get()[0].customer, "Fatima Khan");
    assert_eq!(orders.get()[0].total_label(), "\u{09f3}12,300");
    assert!(transport
        .seen()
        .contains(&"GET http://localhost:8080/api/orders".to_string()));
}
