//! The storefront controller.
//!
//! One [`Storefront`] holds everything a page session needs: the profile
//! store, the backend client, the session, the messaging widget and the
//! listing filters. Page actions are methods on it.

use crate::config::StorefrontConfig;
use crate::error::{Result, StorefrontError};
use crate::preferences::Preferences;
use crate::profile::AccountBook;
use chrono::{Local, Utc};
use serde::Serialize;
use shopfront_auth::{
    AuthState, CredentialTable, CustomerProfile, GuardDecision, Registration, Role, RouteGuard,
    SessionStore, UserSession,
};
use shopfront_cache::{LocalStore, StorageKey};
use shopfront_commerce::cart::{
    demo_coupons, find_coupon, Cart, CartItem, CheckoutSummary, Coupon, CouponValidation,
};
use shopfront_commerce::catalog::{NewReview, Product, ProductCard, ProductDetail, Review};
use shopfront_commerce::checkout::{CheckoutForm, Order, OrderFilter, OrderRequest};
use shopfront_commerce::fallback;
use shopfront_commerce::ids::{OrderId, ProductId, UserId};
use shopfront_commerce::search::{ListingFilters, Page, PRODUCTS_PER_PAGE};
use shopfront_commerce::{CommerceError, Money};
use shopfront_data::api::{AuthResponse, ContactMessage, LoginRequest, RegisterRequest};
use shopfront_data::{ApiClient, Fetched, Submission, Transport};
use shopfront_messaging::{
    guest_id, ChatClient, ChatContext, ChatSession, ConfigUpdate, ExternalLink, MessagingError,
    ReplySource, WidgetConfig, WidgetState,
};
use std::sync::Arc;

mod back_office;

pub use back_office::*;

/// Searches shorter than this are ignored.
pub const MIN_SEARCH_LEN: usize = 2;

/// How many recommendations and related products a page shows.
pub const RECOMMENDATION_COUNT: usize = 4;

pub const ORDER_PLACED: &str = "Order placed successfully!";
pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const REGISTRATION_SUCCESS: &str = "Registration successful!";
pub const MESSAGE_SENT: &str = "Message sent successfully!";
pub const SUBSCRIBED: &str = "Successfully subscribed to newsletter!";
pub const SUBSCRIPTION_FAILED: &str = "Subscription failed. Please try again.";
pub const SUBSCRIPTION_ERROR: &str = "An error occurred. Please try again.";
pub const REVIEW_SUBMITTED: &str = "Review submitted successfully!";

/// Result of a submission that goes ahead locally when the backend is down.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome<T> {
    pub value: T,
    /// The backend did not take part.
    pub demo_mode: bool,
}

impl<T> Outcome<T> {
    fn new<U>(value: T, submission: &Submission<U>) -> Self {
        Self {
            value,
            demo_mode: submission.is_demo(),
        }
    }

    /// Notification text, marked when nothing reached the backend.
    pub fn notice(&self, success: &str) -> String {
        if self.demo_mode {
            format!("{} (Demo mode)", success)
        } else {
            success.to_string()
        }
    }
}

/// Data for the home page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomePage {
    pub featured: Fetched<Vec<ProductCard>>,
    pub recommended: Fetched<Vec<ProductCard>>,
}

pub struct Storefront {
    store: LocalStore,
    api: ApiClient,
    sessions: SessionStore,
    credentials: CredentialTable,
    guard: RouteGuard,
    preferences: Preferences,
    account: AccountBook,
    coupons: Vec<Coupon>,
    applied_coupon: Option<Coupon>,
    filters: ListingFilters,
    widget: WidgetState,
    widget_config: WidgetConfig,
    chat_client: ChatClient,
    chat: ChatSession,
}

impl Storefront {
    /// Open the configured profile and connect to the configured backend.
    pub fn new(config: &StorefrontConfig) -> Result<Self> {
        let store = match &config.storage.profile {
            Some(path) => LocalStore::open_file(path)?,
            None => LocalStore::in_memory(),
        };
        let api = ApiClient::new(config.api.base_url.clone())?;
        let chat_client = ChatClient::new(config.chatbot.clone())?;
        Ok(Self::assemble(store, api, chat_client, config))
    }

    /// Build over an existing store, sending all traffic through `transport`.
    pub fn with_transport(
        store: LocalStore,
        config: &StorefrontConfig,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let api = ApiClient::with_transport(config.api.base_url.clone(), transport.clone());
        let chat_client = ChatClient::with_transport(config.chatbot.clone(), transport);
        Self::assemble(store, api, chat_client, config)
    }

    fn assemble(
        store: LocalStore,
        api: ApiClient,
        chat_client: ChatClient,
        config: &StorefrontConfig,
    ) -> Self {
        Self {
            sessions: SessionStore::new(store.clone()),
            preferences: Preferences::new(store.clone()),
            account: AccountBook::new(store.clone()),
            store,
            api,
            credentials: CredentialTable::demo(),
            guard: RouteGuard::new(),
            coupons: demo_coupons(),
            applied_coupon: None,
            filters: ListingFilters::default(),
            widget: WidgetState::default(),
            widget_config: config.widget_config(),
            chat_client,
            chat: ChatSession::new(),
        }
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn account(&self) -> &AccountBook {
        &self.account
    }

    /// The backend client, carrying the session token when there is one.
    fn api_for_session(&self) -> ApiClient {
        match self.sessions.auth_token() {
            Some(token) => self.api.authenticated(&token),
            None => self.api.clone(),
        }
    }

    // ---- Products ----

    pub async fn featured_products(&self) -> Fetched<Vec<ProductCard>> {
        Fetched::resolve(
            self.api.products().featured().await.map(cards),
            "featured products",
            fallback::featured_products,
        )
    }

    pub async fn recommended_products(&self) -> Fetched<Vec<ProductCard>> {
        Fetched::resolve(
            self.api.products().page(RECOMMENDATION_COUNT).await.map(cards),
            "recommended products",
            fallback::recommended_products,
        )
    }

    pub async fn related_products(&self) -> Fetched<Vec<ProductCard>> {
        Fetched::resolve(
            self.api.products().page(RECOMMENDATION_COUNT).await.map(cards),
            "related products",
            fallback::related_products,
        )
    }

    /// Best-rated products first.
    pub async fn top_rated_products(&self) -> Fetched<Vec<ProductCard>> {
        Fetched::resolve(
            self.api.products().top_rated().await.map(cards),
            "top-rated products",
            || {
                let mut products = fallback::listing_products();
                products.sort_by(|a, b| b.rating.total_cmp(&a.rating));
                products
            },
        )
    }

    /// Products with a discount.
    pub async fn discounted_products(&self) -> Fetched<Vec<ProductCard>> {
        Fetched::resolve(
            self.api.products().discounted().await.map(cards),
            "discounted products",
            || {
                fallback::listing_products()
                    .into_iter()
                    .filter(ProductCard::is_on_sale)
                    .collect()
            },
        )
    }

    /// Featured and recommended products, fetched together.
    pub async fn home_page(&self) -> HomePage {
        let (featured, recommended) =
            futures::join!(self.featured_products(), self.recommended_products());
        HomePage {
            featured,
            recommended,
        }
    }

    pub async fn product_detail(&self, id: ProductId) -> Fetched<ProductDetail> {
        Fetched::resolve(
            self.api.products().by_id(id).await.map(|p| ProductDetail::from(&p)),
            "product detail",
            || fallback::product_detail(id),
        )
    }

    /// Fetch, filter, sort and paginate the product listing.
    ///
    /// A search term takes precedence over the category filter. When the
    /// backend is down the first page of the built-in listing is shown as is.
    pub async fn listing(&mut self, filters: ListingFilters) -> Fetched<Page<ProductCard>> {
        let products = self.api.products();
        let search = filters.search.trim();
        let result = if !search.is_empty() {
            products.search(search).await
        } else if let Some(category) = filters.category() {
            products.by_category(category).await
        } else {
            products.all().await
        };

        let page = Fetched::resolve(
            result.map(|p| filters.apply(cards(p))),
            "product listing",
            || Page::slice(fallback::listing_products(), 1, PRODUCTS_PER_PAGE),
        );
        self.filters = filters;
        page
    }

    /// Filters of the last listing.
    pub fn filters(&self) -> &ListingFilters {
        &self.filters
    }

    /// Search from the header box. `None` when the query is too short.
    pub async fn search(&self, query: &str) -> Option<Fetched<Vec<ProductCard>>> {
        let query = query.trim();
        if query.chars().count() < MIN_SEARCH_LEN {
            return None;
        }
        Some(Fetched::resolve(
            self.api.products().search(query).await.map(cards),
            "product search",
            || {
                let needle = query.to_lowercase();
                fallback::listing_products()
                    .into_iter()
                    .filter(|p| p.name.to_lowercase().contains(&needle))
                    .collect()
            },
        ))
    }

    pub async fn reviews(&self, product: ProductId) -> Fetched<Vec<Review>> {
        Fetched::resolve(
            self.api.products().reviews(product).await,
            "product reviews",
            fallback::reviews,
        )
    }

    /// Post a review. Unlike the other forms there is no offline mode.
    pub async fn submit_review(&self, review: &NewReview) -> Result<()> {
        review.validate()?;
        self.api_for_session().products().submit_review(review).await?;
        tracing::info!(product = %review.product_id, rating = review.rating, "review submitted");
        Ok(())
    }

    // ---- Cart ----

    pub fn cart(&self) -> Cart {
        self.store.read(StorageKey::Cart)
    }

    fn save_cart(&self, cart: &Cart) -> Result<()> {
        self.store.write(StorageKey::Cart, cart)?;
        Ok(())
    }

    /// Add units of a product; returns the updated cart.
    pub fn add_to_cart(&self, product: &ProductCard, quantity: u32) -> Result<Cart> {
        let mut cart = self.cart();
        cart.add(product, quantity)?;
        self.save_cart(&cart)?;
        tracing::debug!(product = %product.id, quantity, "added to cart");
        Ok(cart)
    }

    /// Add a product known only by id, looking it up first.
    pub async fn add_product_to_cart(&self, id: ProductId, quantity: u32) -> Result<Cart> {
        let detail = self.product_detail(id).await.into_inner();
        self.add_to_cart(&detail.card, quantity)
    }

    /// Step a line's quantity; it never drops below 1.
    pub fn change_quantity(&self, index: usize, delta: i64) -> Result<u32> {
        let mut cart = self.cart();
        let quantity = cart.change_quantity(index, delta)?;
        self.save_cart(&cart)?;
        Ok(quantity)
    }

    pub fn remove_from_cart(&self, index: usize) -> Result<CartItem> {
        let mut cart = self.cart();
        let removed = cart.remove(index)?;
        self.save_cart(&cart)?;
        Ok(removed)
    }

    pub fn clear_cart(&mut self) -> Result<()> {
        self.store.remove(StorageKey::Cart)?;
        self.applied_coupon = None;
        Ok(())
    }

    /// Units in the cart, for the header badge.
    pub fn cart_badge(&self) -> u32 {
        self.cart().item_count()
    }

    /// Pricing of the current cart. An applied coupon does not change it.
    pub fn cart_summary(&self) -> CheckoutSummary {
        self.cart().summary()
    }

    /// Apply a coupon code to the cart; returns the amount saved, which is
    /// only announced to the shopper.
    pub fn apply_coupon(&mut self, code: &str) -> Result<Money> {
        let coupon = find_coupon(&self.coupons, code)?.clone();
        let discount = coupon.apply(self.cart().subtotal(), Local::now().date_naive())?;
        tracing::debug!(code = %coupon.code, %discount, "coupon applied");
        self.applied_coupon = Some(coupon);
        Ok(discount)
    }

    /// Ask the backend whether `code` applies to the current cart, or check
    /// it against the built-in coupons.
    pub async fn check_coupon(&self, code: &str) -> Fetched<CouponValidation> {
        let code = code.trim();
        let subtotal = self.cart().subtotal();
        Fetched::resolve(
            self.api.coupons().validate(code, subtotal).await,
            "coupon validation",
            || {
                let discount = find_coupon(&self.coupons, code)
                    .and_then(|c| c.apply(subtotal, Local::now().date_naive()))
                    .ok();
                let saved = discount.unwrap_or(Money::zero(subtotal.currency));
                CouponValidation {
                    valid: discount.is_some(),
                    discount: saved,
                    final_amount: subtotal - saved,
                }
            },
        )
    }

    pub fn applied_coupon(&self) -> Option<&Coupon> {
        self.applied_coupon.as_ref()
    }

    /// What the applied coupon would save on the current cart.
    pub fn coupon_savings(&self) -> Option<Money> {
        let coupon = self.applied_coupon.as_ref()?;
        let saved = coupon.calculate_discount(self.cart().subtotal(), Local::now().date_naive());
        Some(saved).filter(Money::is_positive)
    }

    // ---- Checkout and orders ----

    /// Place an order for the cart.
    ///
    /// The order is recorded and the cart cleared whether or not the backend
    /// accepts it; a backend id is used when one comes back.
    pub async fn checkout(&mut self, form: CheckoutForm) -> Result<Outcome<Order>> {
        let cart = self.cart();
        if cart.is_empty() {
            return Err(StorefrontError::EmptyCart);
        }
        let summary = self.cart_summary();
        let request = OrderRequest::new(form, &cart, &summary)?;

        let submission =
            Submission::resolve(self.api_for_session().orders().create(&request).await, "checkout");
        let id = match &submission {
            Submission::Confirmed(created) => created.id.clone().unwrap_or_else(OrderId::generate),
            Submission::DemoMode => OrderId::generate(),
        };
        let order = Order::place(id, request);

        self.store
            .update(StorageKey::Orders, |orders: &mut Vec<Order>| orders.push(order.clone()))?;
        self.clear_cart()?;
        tracing::info!(order = %order.id, total = %order.total, demo = submission.is_demo(), "order placed");
        Ok(Outcome::new(order, &submission))
    }

    pub fn orders(&self) -> Vec<Order> {
        self.store.read(StorageKey::Orders)
    }

    pub fn order(&self, id: &OrderId) -> Option<Order> {
        self.orders().into_iter().find(|o| &o.id == id)
    }

    pub fn filter_orders(&self, filter: &OrderFilter) -> Vec<Order> {
        let orders = self.orders();
        filter.apply(&orders, Utc::now()).into_iter().cloned().collect()
    }

    /// Cancel a pending order in the local history.
    pub fn cancel_order(&self, id: &OrderId) -> Result<Order> {
        let mut orders = self.orders();
        let order = orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| CommerceError::OrderNotFound(id.to_string()))?;
        order.cancel()?;
        let cancelled = order.clone();
        self.store.write(StorageKey::Orders, &orders)?;
        tracing::info!(order = %id, "order cancelled");
        Ok(cancelled)
    }

    // ---- Forms ----

    /// Send the contact form, keeping it locally when the backend is down.
    pub async fn submit_contact(&self, mut message: ContactMessage) -> Result<Outcome<()>> {
        message.validate().map_err(StorefrontError::Validation)?;
        if message.timestamp.is_empty() {
            message.timestamp = Utc::now().to_rfc3339();
        }
        let submission = Submission::resolve(self.api.contact(&message).await, "contact");
        if submission.is_demo() {
            self.store.update(
                StorageKey::ContactMessages,
                |messages: &mut Vec<ContactMessage>| messages.push(message),
            )?;
        }
        Ok(Outcome::new((), &submission))
    }

    /// Subscribe to the newsletter; failures are reported, not absorbed.
    pub async fn subscribe(&self, email: &str) -> Result<&'static str> {
        let email = email.trim();
        if !email.contains('@') {
            return Err(StorefrontError::Validation(
                "Please enter a valid email address".to_string(),
            ));
        }
        match self.api.newsletter_subscribe(email).await {
            Ok(()) => Ok(SUBSCRIBED),
            Err(error) => {
                tracing::warn!(%error, "newsletter subscription failed");
                let message = if error.status().is_some() {
                    SUBSCRIPTION_FAILED
                } else {
                    SUBSCRIPTION_ERROR
                };
                Err(StorefrontError::Validation(message.to_string()))
            }
        }
    }

    // ---- Accounts ----

    /// Log in with the backend, or with the built-in accounts when the
    /// backend does not answer.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<Outcome<UserSession>> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let submission = Submission::resolve(self.api.auth().login(&request).await, "login");

        let session = match &submission {
            Submission::Confirmed(reply) => {
                self.start_backend_session(reply, &request.email, Some(remember_me))?
            }
            Submission::DemoMode => {
                let session = self
                    .sessions
                    .login(&self.credentials, &request.email, password)?;
                self.sessions.save_profile(&CustomerProfile {
                    id: Some(session.id),
                    name: session.name.clone(),
                    email: request.email.clone(),
                    remember_me: Some(remember_me),
                    ..Default::default()
                })?;
                session
            }
        };
        Ok(Outcome::new(session, &submission))
    }

    /// Create an account with the backend, or in the built-in table when
    /// the backend does not answer.
    pub async fn register(&mut self, form: Registration) -> Result<Outcome<UserSession>> {
        form.validate()?;
        let request = RegisterRequest {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            password: form.password.clone(),
        };
        let submission =
            Submission::resolve(self.api.auth().register(&request).await, "registration");

        let session = match &submission {
            Submission::Confirmed(reply) => {
                self.start_backend_session(reply, &request.email, None)?
            }
            Submission::DemoMode => {
                let account = self.credentials.register(&form)?;
                let session =
                    UserSession::new(account.id, &account.username, &account.name, account.role)
                        .with_generated_token();
                self.sessions.save_profile(&CustomerProfile {
                    id: Some(account.id),
                    name: request.name.clone(),
                    email: request.email.clone(),
                    phone: Some(request.phone.clone()).filter(|p| !p.is_empty()),
                    ..Default::default()
                })?;
                self.sessions.start(session)?
            }
        };
        Ok(Outcome::new(session, &submission))
    }

    fn start_backend_session(
        &self,
        reply: &AuthResponse,
        email: &str,
        remember_me: Option<bool>,
    ) -> Result<UserSession> {
        let id = reply
            .id
            .as_ref()
            .and_then(|v| v.as_u64().or_else(|| v.as_str()?.parse().ok()))
            .map(UserId::new)
            .unwrap_or_else(UserId::generate);
        let email = if reply.email.is_empty() { email } else { &reply.email };
        let name = if reply.name.is_empty() { email } else { &reply.name };
        let role = reply
            .role
            .as_deref()
            .and_then(|r| r.parse::<Role>().ok())
            .unwrap_or_default();

        self.sessions.save_profile(&CustomerProfile {
            id: Some(id),
            name: name.to_string(),
            email: email.to_string(),
            phone: reply.phone.clone(),
            token: reply.token.clone(),
            remember_me,
        })?;
        let session = UserSession::new(id, email, name, role);
        let session = match &reply.token {
            Some(token) => session.with_token(token.clone()),
            None => session.with_generated_token(),
        };
        Ok(self.sessions.start(session)?)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.sessions.logout()?;
        self.applied_coupon = None;
        Ok(())
    }

    pub fn auth_state(&self) -> AuthState {
        self.sessions.state()
    }

    pub fn current_session(&self) -> Option<UserSession> {
        self.sessions.current()
    }

    pub fn profile(&self) -> Option<CustomerProfile> {
        self.sessions.profile()
    }

    /// Decide whether the visitor may open `path`.
    pub fn guard(&self, path: &str) -> GuardDecision {
        self.guard.check(path, &self.sessions.state())
    }

    /// Check a permission by name for the logged-in user.
    pub fn can_access(&self, permission: &str) -> bool {
        self.sessions.has_permission(permission)
    }

    // ---- Messaging widget ----

    pub fn widget(&self) -> WidgetState {
        self.widget
    }

    pub fn widget_config(&self) -> &WidgetConfig {
        &self.widget_config
    }

    pub fn toggle_widget(&mut self) {
        match self.widget {
            WidgetState::Closed => self.widget.open_selection(),
            _ => self.widget.close_selection(),
        }
    }

    pub fn open_assistant(&mut self) {
        self.widget.open_assistant();
    }

    pub fn back_to_selection(&mut self) {
        self.widget.back_to_selection();
    }

    pub fn close_chatbot(&mut self) {
        self.widget.close_chatbot();
    }

    pub fn open_whatsapp(&mut self) -> ExternalLink {
        self.widget.open_whatsapp(&self.widget_config.whatsapp)
    }

    pub fn open_messenger(&mut self) -> ExternalLink {
        self.widget.open_messenger(&self.widget_config.messenger)
    }

    /// Merge widget settings; chatbot changes apply to the next message.
    pub fn update_widget_config(&mut self, update: ConfigUpdate) {
        self.widget_config.update_config(update);
        self.chat_client = self.chat_client.reconfigured(self.widget_config.chatbot.clone());
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    /// Send a chat message with the cart and guest id as context.
    ///
    /// The assistant panel must be open. `Ok(None)` when the input was blank.
    pub async fn send_chat(&mut self, text: &str) -> Result<Option<ReplySource>> {
        if !self.widget.accepts_messages() {
            return Err(MessagingError::NotOpen.into());
        }
        let context = ChatContext {
            cart: self.cart().into_items(),
            user_id: guest_id(&self.store)?,
        };
        Ok(self.chat.send(&self.chat_client, text, &context).await?)
    }
}

/// Notification shown when a coupon is accepted.
pub fn coupon_notice(saved: Money) -> String {
    format!("Coupon applied! You saved {}", saved.display())
}

fn cards(products: Vec<Product>) -> Vec<ProductCard> {
    products.iter().map(ProductCard::from).collect()
}
