//! UI strings in English and Bengali.
//!
//! Keys are the `data-translate` names the pages use. `home` is the
//! category label "Home & Living"; the navigation entry shares the key and
//! is shadowed by it.

pub(super) const EN: &[(&str, &str)] = &[
    // Navigation
    ("products", "Products"),
    ("categories", "Categories"),
    ("about", "About"),
    ("contact", "Contact"),
    ("login", "Login"),
    ("logout", "Logout"),
    ("register", "Register"),
    ("cart", "Cart"),
    ("profile", "My Profile"),
    ("orders", "My Orders"),
    // Categories
    ("electronics", "Electronics"),
    ("fashion", "Fashion"),
    ("home", "Home & Living"),
    ("beauty", "Beauty"),
    ("sports", "Sports"),
    // Common
    ("searchPlaceholder", "Search products..."),
    ("freeShipping", "Free Shipping on Orders Over ৳1000"),
    ("welcome", "Welcome"),
    ("viewAll", "View All"),
    ("addToCart", "Add to Cart"),
    ("buyNow", "Buy Now"),
    ("learnMore", "Learn More"),
    ("submit", "Submit"),
    ("cancel", "Cancel"),
    ("save", "Save"),
    ("delete", "Delete"),
    ("edit", "Edit"),
    ("close", "Close"),
    // Home page
    ("heroTitle1", "Welcome to Polashtoli Store"),
    ("heroSubtitle1", "Your trusted destination for quality products"),
    ("featuredProducts", "Featured Products"),
    ("shopByCategory", "Shop by Category"),
    ("whyChooseUs", "Why Choose Us"),
    // Listing
    ("filters", "Filters"),
    ("priceRange", "Price Range"),
    ("rating", "Rating"),
    ("brands", "Brands"),
    ("applyFilters", "Apply Filters"),
    ("clearFilters", "Clear All"),
    ("sortBy", "Sort by"),
    ("featured", "Featured"),
    ("priceLowHigh", "Price: Low to High"),
    ("priceHighLow", "Price: High to Low"),
    ("newest", "Newest"),
    ("topRated", "Top Rated"),
    ("showingProducts", "Showing {count} products"),
    // Product details
    ("productDetails", "Product Details"),
    ("description", "Description"),
    ("specifications", "Specifications"),
    ("reviews", "Reviews"),
    ("writeReview", "Write a Review"),
    ("quantity", "Quantity"),
    ("inStock", "In Stock"),
    ("outOfStock", "Out of Stock"),
    ("addToWishlist", "Add to Wishlist"),
    ("relatedProducts", "Related Products"),
    // Cart
    ("shoppingCart", "Shopping Cart"),
    ("cartEmpty", "Your cart is empty"),
    ("continueShopping", "Continue Shopping"),
    ("cartSummary", "Cart Summary"),
    ("subtotal", "Subtotal"),
    ("shipping", "Shipping"),
    ("tax", "Tax"),
    ("total", "Total"),
    ("proceedCheckout", "Proceed to Checkout"),
    ("free", "FREE"),
    // Checkout
    ("checkout", "Checkout"),
    ("contactInformation", "Contact Information"),
    ("shippingAddress", "Shipping Address"),
    ("paymentMethod", "Payment Method"),
    ("orderNotes", "Order Notes"),
    ("placeOrder", "Place Order Securely"),
    ("cashOnDelivery", "Cash on Delivery"),
    // Account
    ("loginTitle", "Login"),
    ("createAccount", "Create Account"),
    ("password", "Password"),
    ("confirmPassword", "Confirm Password"),
    ("rememberMe", "Remember me"),
    ("dashboard", "Dashboard"),
    ("myOrders", "My Orders"),
    ("wishlist", "Wishlist"),
    ("addresses", "Addresses"),
    ("settings", "Settings"),
    ("totalOrders", "Total Orders"),
    ("pendingOrders", "Pending"),
    ("totalSpent", "Total Spent"),
    ("recentOrders", "Recent Orders"),
    ("changePassword", "Change Password"),
    // Orders
    ("orderHistory", "Order History"),
    ("orderDate", "Order Date"),
    ("orderStatus", "Status"),
    ("orderTotal", "Total"),
    ("cancelOrder", "Cancel Order"),
    // Contact
    ("contactUs", "Contact Us"),
    ("sendMessage", "Send Us a Message"),
    ("subject", "Subject"),
    ("message", "Message"),
];

pub(super) const BN: &[(&str, &str)] = &[
    ("products", "পণ্য"),
    ("categories", "বিভাগ"),
    ("about", "সম্পর্কে"),
    ("contact", "যোগাযোগ"),
    ("login", "লগইন"),
    ("logout", "লগআউট"),
    ("register", "নিবন্ধন"),
    ("cart", "কার্ট"),
    ("profile", "আমার প্রোফাইল"),
    ("orders", "আমার অর্ডার"),
    ("electronics", "ইলেকট্রনিক্স"),
    ("fashion", "ফ্যাশন"),
    ("home", "হোম এবং লিভিং"),
    ("beauty", "বিউটি"),
    ("sports", "স্পোর্টস"),
    ("searchPlaceholder", "পণ্য খুঁজুন..."),
    ("freeShipping", "৳১০০০ এর বেশি অর্ডারে ফ্রি ডেলিভারি"),
    ("welcome", "স্বাগতম"),
    ("viewAll", "সব দেখুন"),
    ("addToCart", "কার্টে যোগ করুন"),
    ("buyNow", "এখনই কিনুন"),
    ("learnMore", "আরও জানুন"),
    ("submit", "জমা দিন"),
    ("cancel", "বাতিল"),
    ("save", "সংরক্ষণ"),
    ("delete", "মুছুন"),
    ("edit", "সম্পাদনা"),
    ("close", "বন্ধ করুন"),
    ("heroTitle1", "পলাশতলী স্টোরে স্বাগতম"),
    ("heroSubtitle1", "মানসম্মত পণ্যের জন্য আপনার বিশ্বস্ত গন্তব্য"),
    ("featuredProducts", "বৈশিষ্ট্যযুক্ত পণ্য"),
    ("shopByCategory", "বিভাগ অনুযায়ী কিনুন"),
    ("whyChooseUs", "কেন আমাদের বেছে নেবেন"),
    ("filters", "ফিল্টার"),
    ("priceRange", "মূল্য পরিসীমা"),
    ("rating", "রেটিং"),
    ("brands", "ব্র্যান্ড"),
    ("applyFilters", "ফিল্টার প্রয়োগ করুন"),
    ("clearFilters", "সব মুছুন"),
    ("sortBy", "সাজান"),
    ("featured", "বৈশিষ্ট্যযুক্ত"),
    ("priceLowHigh", "মূল্য: কম থেকে বেশি"),
    ("priceHighLow", "মূল্য: বেশি থেকে কম"),
    ("newest", "নতুন"),
    ("topRated", "সেরা রেটেড"),
    ("showingProducts", "{count} টি পণ্য দেখানো হচ্ছে"),
    ("productDetails", "পণ্যের বিবরণ"),
    ("description", "বর্ণনা"),
    ("specifications", "বৈশিষ্ট্য"),
    ("reviews", "রিভিউ"),
    ("writeReview", "রিভিউ লিখুন"),
    ("quantity", "পরিমাণ"),
    ("inStock", "স্টকে আছে"),
    ("outOfStock", "স্টকে নেই"),
    ("addToWishlist", "উইশলিস্টে যোগ করুন"),
    ("relatedProducts", "সম্পর্কিত পণ্য"),
    ("shoppingCart", "শপিং কার্ট"),
    ("cartEmpty", "আপনার কার্ট খালি"),
    ("continueShopping", "কেনাকাটা চালিয়ে যান"),
    ("cartSummary", "কার্ট সারাংশ"),
    ("subtotal", "উপমোট"),
    ("shipping", "ডেলিভারি"),
    ("tax", "ট্যাক্স"),
    ("total", "মোট"),
    ("proceedCheckout", "চেকআউটে যান"),
    ("free", "ফ্রি"),
    ("checkout", "চেকআউট"),
    ("contactInformation", "যোগাযোগের তথ্য"),
    ("shippingAddress", "ডেলিভারি ঠিকানা"),
    ("paymentMethod", "পেমেন্ট পদ্ধতি"),
    ("orderNotes", "অর্ডার নোট"),
    ("placeOrder", "নিরাপদে অর্ডার করুন"),
    ("cashOnDelivery", "ক্যাশ অন ডেলিভারি"),
    ("loginTitle", "লগইন"),
    ("createAccount", "অ্যাকাউন্ট তৈরি করুন"),
    ("password", "পাসওয়ার্ড"),
    ("confirmPassword", "পাসওয়ার্ড নিশ্চিত করুন"),
    ("rememberMe", "আমাকে মনে রাখুন"),
    ("dashboard", "ড্যাশবোর্ড"),
    ("myOrders", "আমার অর্ডার"),
    ("wishlist", "উইশলিস্ট"),
    ("addresses", "ঠিকানা"),
    ("settings", "সেটিংস"),
    ("totalOrders", "মোট অর্ডার"),
    ("pendingOrders", "পেন্ডিং"),
    ("totalSpent", "মোট খরচ"),
    ("recentOrders", "সাম্প্রতিক অর্ডার"),
    ("changePassword", "পাসওয়ার্ড পরিবর্তন করুন"),
    ("orderHistory", "অর্ডার ইতিহাস"),
    ("orderDate", "অর্ডারের তারিখ"),
    ("orderStatus", "স্ট্যাটাস"),
    ("orderTotal", "মোট"),
    ("cancelOrder", "অর্ডার বাতিল করুন"),
    ("contactUs", "যোগাযোগ করুন"),
    ("sendMessage", "আমাদের একটি বার্তা পাঠান"),
    ("subject", "বিষয়"),
    ("message", "বার্তা"),
];
