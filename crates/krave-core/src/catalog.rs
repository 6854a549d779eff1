//! # Catalog
//!
//! The store's static data and the search screen's filtering.
//!
//! ## Data Tables
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  home_categories()    Meat, Fruits, Vegetables                          │
//! │  brands()             Unilever, Shan                                    │
//! │  search_products()    12 products: id 1..=12, category, rating, vegan   │
//! │  category_products()  10 vegetables: id 101..=110, weight, discount     │
//! │  welcome_voucher()    WELCOME 50% (min order 499, max discount 500)     │
//! │  saved_addresses()    home / work / other                               │
//! │  payment_cards()      Visa •4242, Mastercard •8888                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All tables are rebuilt on each call; nothing here is mutable state except
//! [`RecentSearches`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::ProductRef;
use crate::MAX_RECENT_SEARCHES;

// =============================================================================
// Types
// =============================================================================

/// A product listed on the search screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogProduct {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: Money,
    pub image_ref: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub vegan: bool,
}

impl CatalogProduct {
    pub fn to_product_ref(&self) -> ProductRef {
        ProductRef::new(self.id, &self.name, self.price, &self.image_ref)
    }
}

/// A product listed inside a category view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategoryProduct {
    pub id: u32,
    pub name: String,
    pub price: Money,
    pub original_price: Option<Money>,
    pub discount_percent: Option<u8>,
    pub image_ref: String,
    /// Pack size label, e.g. "1 KG" or "250 GM".
    pub weight: String,
}

impl CategoryProduct {
    pub fn to_product_ref(&self) -> ProductRef {
        let product = ProductRef::new(self.id, &self.name, self.price, &self.image_ref);
        match (self.original_price, self.discount_percent) {
            (Some(original), Some(percent)) => product.with_discount(original, percent),
            _ => product,
        }
    }
}

/// A tile on the home screen's category grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HomeCategory {
    pub name: String,
    pub urdu_name: String,
    pub image_ref: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Brand {
    pub name: String,
    pub logo_ref: String,
}

/// A promotional voucher. Shown on the voucher screen; never applied to a bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Voucher {
    pub code: String,
    /// Display string, e.g. "50.0%".
    pub discount_label: String,
    pub min_order: Money,
    pub max_discount: Money,
    pub description: String,
    pub applicability: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum AddressKind {
    Home,
    Work,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SavedAddress {
    pub id: u32,
    pub kind: AddressKind,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PaymentCard {
    pub brand: String,
    pub last4: String,
    pub expiry: String,
}

// =============================================================================
// Static Tables
// =============================================================================

const UNSPLASH: &str = "https://images.unsplash.com/";

fn image(photo: &str, width: u32) -> String {
    format!("{UNSPLASH}{photo}?w={width}")
}

/// Search filter chips, in display order.
pub const SEARCH_CATEGORIES: [&str; 5] = ["Fruits", "Vegetables", "Dairy", "Meat", "Beverages"];

/// Suggestions under "Trending".
pub const TRENDING: [&str; 3] = ["Vegan-Friendly Milk", "Zero Sugar Soda", "Fructose-Free Syrup"];

/// Top tabs of the category view.
pub const CATEGORY_TABS: [&str; 3] = ["Flash Deal", "Fruits & Vegetables", "Weekend Off"];

/// Sub tabs of the category view; the first is selected on entry.
pub const CATEGORY_SUB_TABS: [&str; 4] = ["Vegetables", "Exotics", "Fruits", "Dry Fruits"];

/// Voucher screen tabs and sub tabs.
pub const VOUCHER_TABS: [&str; 3] = ["Krave Express", "Super Store", "Ramadan"];
pub const VOUCHER_SUB_TABS: [&str; 2] = ["Just for you", "Banks"];

pub fn home_categories() -> Vec<HomeCategory> {
    [
        ("Meat", "گوشت", "photo-1704081628926-d64845e7ca93"),
        ("Fruits", "پھل", "photo-1669999207738-fcdb7103a6f3"),
        ("Vegetables", "سبزیاں", "photo-1734989175071-fedc119fb52e"),
    ]
    .into_iter()
    .map(|(name, urdu_name, photo)| HomeCategory {
        name: name.to_string(),
        urdu_name: urdu_name.to_string(),
        image_ref: image(photo, 1080),
    })
    .collect()
}

pub fn brands() -> Vec<Brand> {
    [
        ("Unilever", "photo-1569154941061-e231b4725ef1"),
        ("Shan", "photo-1599481238640-4c1288750d7a"),
    ]
    .into_iter()
    .map(|(name, photo)| Brand {
        name: name.to_string(),
        logo_ref: image(photo, 100),
    })
    .collect()
}

/// The products the search screen filters over.
pub fn search_products() -> Vec<CatalogProduct> {
    [
        (1, "Chicken Breast", "Meat", 299, "photo-1604503468506-a8da13d82791", 5, false),
        (2, "Japanese Kobe Beef", "Meat", 1999, "photo-1588347818036-8fc373ea3c27", 5, false),
        (3, "Salted Egg", "Dairy", 150, "photo-1582722872445-44dc5f7e3c8f", 4, false),
        (4, "Vegan-Friendly Milk", "Dairy", 180, "photo-1563636619-e9143da7973b", 5, true),
        (5, "Zero Sugar Soda", "Beverages", 120, "photo-1629203851122-3726ecdf080e", 4, true),
        (6, "Fructose-Free Syrup", "Beverages", 250, "photo-1523260578934-c4b6157fceb1", 3, true),
        (7, "Red Apple", "Fruits", 199, "photo-1568702846914-96b305d2aaeb", 5, true),
        (8, "Orange", "Fruits", 149, "photo-1580052614034-c55d20bfee3b", 4, true),
        (9, "Banana", "Fruits", 89, "photo-1603833665858-e61d17a86224", 5, true),
        (10, "Tomato", "Vegetables", 99, "photo-1592924357228-91a4daadcfea", 4, true),
        (11, "Carrot", "Vegetables", 79, "photo-1598170845058-32b9d6a5da37", 5, true),
        (12, "Potato", "Vegetables", 59, "photo-1518977676601-b53f82aba655", 4, true),
    ]
    .into_iter()
    .map(|(id, name, category, price, photo, rating, vegan)| CatalogProduct {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price: Money::from_rupees(price),
        image_ref: image(photo, 200),
        rating,
        vegan,
    })
    .collect()
}

/// The vegetables shown in the category view.
pub fn category_products() -> Vec<CategoryProduct> {
    [
        (101, "Potatoes (Aalu)", 68, None, "photo-1578385474120-184465704f2f", "1 KG"),
        (102, "Tomatoes (Timatar)", 62, None, "photo-1700064165267-8fa68ef07167", "1 KG"),
        (103, "Onion (Piyaz)", 93, Some((155, 40)), "photo-1729292933757-5e9d9e8d4ead", "1 KG"),
        (104, "Carrots (Gajar)", 45, None, "photo-1737402710058-0ce100f79b34", "500 GM"),
        (105, "Bell Peppers (Shimla Mirch)", 120, None, "photo-1563565375-f3fdfdbefa83", "500 GM"),
        (106, "Cucumber (Kheera)", 35, None, "photo-1604977042946-1eecc30f269e", "500 GM"),
        (107, "Cauliflower (Phool Gobi)", 55, None, "photo-1568584711271-e0d0c8f3f722", "1 Piece"),
        (108, "Spinach (Palak)", 28, None, "photo-1576045057995-568f588f82fb", "250 GM"),
        (109, "Green Chillies", 18, None, "photo-1583663848850-46af0f85a975", "100 GM"),
        (110, "Ginger (Adrak)", 42, None, "photo-1619176184044-80d7ae46ed14", "250 GM"),
    ]
    .into_iter()
    .map(|(id, name, price, discount, photo, weight)| CategoryProduct {
        id,
        name: name.to_string(),
        price: Money::from_rupees(price),
        original_price: discount.map(|(original, _)| Money::from_rupees(original)),
        discount_percent: discount.map(|(_, percent)| percent),
        image_ref: image(photo, 400),
        weight: weight.to_string(),
    })
    .collect()
}

pub fn welcome_voucher() -> Voucher {
    Voucher {
        code: "WELCOME".to_string(),
        discount_label: "50.0%".to_string(),
        min_order: Money::from_rupees(499),
        max_discount: Money::from_rupees(500),
        description: "Enjoy Rs. 500 OFF on your first order!".to_string(),
        applicability: "Applicable only on Fruits & Vegetables!".to_string(),
    }
}

pub fn saved_addresses() -> Vec<SavedAddress> {
    [
        (AddressKind::Home, "House #123, Street 45, F-7, Islamabad"),
        (AddressKind::Work, "Office Building, Blue Area, Islamabad"),
        (AddressKind::Other, "Apartment 5B, G-11, Islamabad"),
    ]
    .into_iter()
    .zip(0..)
    .map(|((kind, address), id)| SavedAddress {
        id,
        kind,
        address: address.to_string(),
    })
    .collect()
}

pub fn payment_cards() -> Vec<PaymentCard> {
    [("Visa", "4242", "12/25"), ("Mastercard", "8888", "08/26")]
        .into_iter()
        .map(|(brand, last4, expiry)| PaymentCard {
            brand: brand.to_string(),
            last4: last4.to_string(),
            expiry: expiry.to_string(),
        })
        .collect()
}

/// Looks up any listed product (search or category) by id.
pub fn find_product(id: u32) -> CoreResult<ProductRef> {
    search_products()
        .iter()
        .find(|p| p.id == id)
        .map(CatalogProduct::to_product_ref)
        .or_else(|| {
            category_products()
                .iter()
                .find(|p| p.id == id)
                .map(CategoryProduct::to_product_ref)
        })
        .ok_or(CoreError::ProductNotFound(id))
}

// =============================================================================
// Search Filter
// =============================================================================

/// The search screen's query plus filter sheet.
///
/// ## Matching
/// A product is shown when ALL of these hold:
/// - query is a case-insensitive substring of its name or category
/// - no categories selected, or its category is selected
/// - `min_price <= price <= max_price`
/// - no ratings selected, or its rating is selected
/// - vegan-only is off, or the product is vegan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct SearchFilter {
    pub query: String,
    pub categories: Vec<String>,
    pub min_price: Money,
    pub max_price: Money,
    pub ratings: Vec<u8>,
    pub vegan_only: bool,
}

impl Default for SearchFilter {
    fn default() -> Self {
        SearchFilter {
            query: String::new(),
            categories: Vec::new(),
            min_price: Money::from_rupees(20),
            max_price: Money::from_rupees(248),
            ratings: Vec::new(),
            vegan_only: false,
        }
    }
}

impl SearchFilter {
    pub fn matches(&self, product: &CatalogProduct) -> bool {
        let query = self.query.to_lowercase();
        let matches_query = product.name.to_lowercase().contains(&query)
            || product.category.to_lowercase().contains(&query);
        let matches_category =
            self.categories.is_empty() || self.categories.contains(&product.category);
        let matches_price = self.min_price <= product.price && product.price <= self.max_price;
        let matches_rating = self.ratings.is_empty() || self.ratings.contains(&product.rating);
        let matches_vegan = !self.vegan_only || product.vegan;

        matches_query && matches_category && matches_price && matches_rating && matches_vegan
    }

    /// Filters `products`, keeping their order.
    pub fn apply<'a>(&self, products: &'a [CatalogProduct]) -> Vec<&'a CatalogProduct> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    /// Selects the category chip, or deselects it if already selected.
    pub fn toggle_category(&mut self, category: &str) {
        if let Some(pos) = self.categories.iter().position(|c| c == category) {
            self.categories.remove(pos);
        } else {
            self.categories.push(category.to_string());
        }
    }

    /// Selects the rating, or deselects it if already selected.
    pub fn toggle_rating(&mut self, rating: u8) {
        if let Some(pos) = self.ratings.iter().position(|r| *r == rating) {
            self.ratings.remove(pos);
        } else {
            self.ratings.push(rating);
        }
    }
}

/// Category view search: case-insensitive substring of the product name.
pub fn filter_category_products<'a>(
    products: &'a [CategoryProduct],
    query: &str,
) -> Vec<&'a CategoryProduct> {
    let query = query.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&query))
        .collect()
}

// =============================================================================
// Recent Searches
// =============================================================================

/// The recent-search list, newest first.
///
/// ## Rules
/// - An empty query is not recorded
/// - A query already in the list is not recorded again (and does not move)
/// - A new query is prepended and the list is cut to [`MAX_RECENT_SEARCHES`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecentSearches {
    entries: Vec<String>,
}

impl Default for RecentSearches {
    fn default() -> Self {
        RecentSearches {
            entries: ["Chicken Breast", "Japanese Kobe Beef", "Salted Egg"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl RecentSearches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a submitted query. Returns true if the list changed.
    pub fn record(&mut self, query: &str) -> bool {
        if query.is_empty() || self.entries.iter().any(|e| e == query) {
            return false;
        }
        self.entries.insert(0, query.to_string());
        self.entries.truncate(MAX_RECENT_SEARCHES);
        true
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(products: &[&CatalogProduct]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_tables() {
        assert_eq!(search_products().len(), 12);
        assert_eq!(category_products().len(), 10);
        assert_eq!(home_categories()[2].urdu_name, "سبزیاں");
        assert_eq!(saved_addresses()[1].kind, AddressKind::Work);
        assert_eq!(payment_cards()[0].last4, "4242");
        assert_eq!(welcome_voucher().min_order, Money::from_rupees(499));
    }

    #[test]
    fn test_onion_discount_is_consistent() {
        let onion = category_products().into_iter().find(|p| p.id == 103).unwrap();
        let original = onion.original_price.unwrap();
        assert_eq!(
            original.apply_percentage_discount(onion.discount_percent.unwrap()),
            onion.price
        );
        assert_eq!(onion.to_product_ref().discount_percent, Some(40));
    }

    #[test]
    fn test_find_product() {
        assert_eq!(find_product(7).unwrap().name, "Red Apple");
        assert_eq!(find_product(109).unwrap().unit_price, Money::from_rupees(18));
        assert_eq!(find_product(999), Err(CoreError::ProductNotFound(999)));
    }

    #[test]
    fn test_default_filter_price_range() {
        let products = search_products();
        let shown = SearchFilter::default().apply(&products);
        // Kobe beef (1999), Chicken (299) and Syrup (250) fall outside 20..=248.
        assert_eq!(ids(&shown), vec![3, 4, 5, 7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_query_matches_name_or_category() {
        let products = search_products();
        let filter = SearchFilter {
            query: "FRUIT".into(),
            max_price: Money::from_rupees(5000),
            ..Default::default()
        };
        // Matches on category only; "Fructose" does not contain "fruit".
        assert_eq!(ids(&filter.apply(&products)), vec![7, 8, 9]);

        let filter = SearchFilter {
            query: "egg".into(),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&products)), vec![3]);
    }

    #[test]
    fn test_category_rating_and_vegan_filters() {
        let products = search_products();
        let mut filter = SearchFilter::default();
        filter.toggle_category("Dairy");
        assert_eq!(ids(&filter.apply(&products)), vec![3, 4]);

        filter.vegan_only = true;
        assert_eq!(ids(&filter.apply(&products)), vec![4]);

        filter.vegan_only = false;
        filter.toggle_category("Dairy");
        filter.toggle_rating(5);
        assert_eq!(ids(&filter.apply(&products)), vec![4, 7, 9, 11]);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let products = search_products();
        let filter = SearchFilter {
            min_price: Money::from_rupees(59),
            max_price: Money::from_rupees(89),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&products)), vec![9, 11, 12]);
    }

    #[test]
    fn test_category_view_filter() {
        let products = category_products();
        let shown = filter_category_products(&products, "ONION");
        assert_eq!(shown.len(), 1);
        assert_eq!(filter_category_products(&products, "").len(), 10);
    }

    #[test]
    fn test_recent_searches() {
        let mut recent = RecentSearches::new();
        assert_eq!(recent.entries().len(), 3);

        assert!(!recent.record(""));
        assert!(!recent.record("Salted Egg"));
        assert_eq!(recent.entries()[0], "Chicken Breast");

        assert!(recent.record("Banana"));
        assert!(recent.record("Orange"));
        assert!(recent.record("Tomato"));
        assert_eq!(
            recent.entries(),
            ["Tomato", "Orange", "Banana", "Chicken Breast", "Japanese Kobe Beef"]
        );
    }
}
