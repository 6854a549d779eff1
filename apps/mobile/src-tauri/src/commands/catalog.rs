//! # Catalog Commands
//!
//! Read-only views over the static catalog, plus search and the
//! recent-searches list.
//!
//! ```text
//! Home ──────► get_home_catalog        categories, brands
//! Search ────► get_search_options      categories, trending, default filter
//!              search_products(filter) matching products
//!              submit_search(query)    recent searches (newest first, max 5)
//! Category ──► get_category_view       tabs + products for the selected category
//! Voucher ───► get_vouchers
//! Account ───► get_account_data        saved addresses, payment cards
//! ```

use krave_core::catalog::{
    brands, category_products, filter_category_products, home_categories, payment_cards,
    saved_addresses, search_products as catalog_search_products, welcome_voucher, Brand,
    CatalogProduct, CategoryProduct, HomeCategory, PaymentCard, SavedAddress, SearchFilter,
    Voucher, CATEGORY_SUB_TABS, CATEGORY_TABS, SEARCH_CATEGORIES, TRENDING, VOUCHER_SUB_TABS,
    VOUCHER_TABS,
};
use krave_core::i18n::{text, TextKey, Toast};
use krave_core::validation::validate_product_request;
use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{NavState, SearchState, SettingsState};

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeCatalog {
    pub categories: Vec<HomeCategory>,
    pub brands: Vec<Brand>,
}

#[tauri::command]
pub fn get_home_catalog() -> HomeCatalog {
    debug!("get_home_catalog command");
    HomeCatalog {
        categories: home_categories(),
        brands: brands(),
    }
}

/// "Request a product" on home: needs a name, then always succeeds.
#[tauri::command]
pub fn request_product(
    settings: State<'_, SettingsState>,
    product_name: String,
) -> Result<Toast, ApiError> {
    let name = validate_product_request(&product_name)?;
    info!(product = %name, "Product requested");
    Ok(Toast::success(text(TextKey::RequestSubmitted, settings.language())))
}

// =============================================================================
// Search
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    pub categories: Vec<String>,
    pub trending: Vec<String>,
    pub default_filter: SearchFilter,
}

#[tauri::command]
pub fn get_search_options() -> SearchOptions {
    SearchOptions {
        categories: to_strings(&SEARCH_CATEGORIES),
        trending: to_strings(&TRENDING),
        default_filter: SearchFilter::default(),
    }
}

/// Products matching the query and filter sheet.
#[tauri::command]
pub fn search_products(filter: SearchFilter) -> Vec<CatalogProduct> {
    debug!(query = %filter.query, "search_products command");
    let products = catalog_search_products();
    filter.apply(&products).into_iter().cloned().collect()
}

/// Records a submitted query; returns the updated recent searches.
#[tauri::command]
pub fn submit_search(search: State<'_, SearchState>, query: String) -> Vec<String> {
    debug!(query = %query, "submit_search command");
    search.with_recent_mut(|recent| {
        recent.record(&query);
        recent.entries().to_vec()
    })
}

#[tauri::command]
pub fn get_recent_searches(search: State<'_, SearchState>) -> Vec<String> {
    search.entries()
}

// =============================================================================
// Category View
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    /// Category chosen on home, empty if none was.
    pub category: String,
    pub tabs: Vec<String>,
    pub sub_tabs: Vec<String>,
    pub products: Vec<CategoryProduct>,
}

#[tauri::command]
pub fn get_category_view(nav: State<'_, NavState>, query: Option<String>) -> CategoryView {
    let category = nav.with_nav(|n| n.selected_category().to_string());
    debug!(category = %category, query = ?query, "get_category_view command");

    let products = category_products();
    let products = filter_category_products(&products, query.as_deref().unwrap_or(""))
        .into_iter()
        .cloned()
        .collect();

    CategoryView {
        category,
        tabs: to_strings(&CATEGORY_TABS),
        sub_tabs: to_strings(&CATEGORY_SUB_TABS),
        products,
    }
}

// =============================================================================
// Vouchers & Account
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherView {
    pub tabs: Vec<String>,
    pub sub_tabs: Vec<String>,
    pub vouchers: Vec<Voucher>,
}

#[tauri::command]
pub fn get_vouchers() -> VoucherView {
    VoucherView {
        tabs: to_strings(&VOUCHER_TABS),
        sub_tabs: to_strings(&VOUCHER_SUB_TABS),
        vouchers: vec![welcome_voucher()],
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountData {
    pub addresses: Vec<SavedAddress>,
    pub cards: Vec<PaymentCard>,
}

#[tauri::command]
pub fn get_account_data() -> AccountData {
    AccountData {
        addresses: saved_addresses(),
        cards: payment_cards(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_search() {
        let all = search_products(SearchFilter::default());
        assert!(!all.is_empty());
        assert!(all.iter().all(|p| p.price.rupees() >= 20 && p.price.rupees() <= 248));
    }

    #[test]
    fn test_search_by_query_is_case_insensitive() {
        let filter = SearchFilter {
            query: "FRUIT".into(),
            min_price: krave_core::Money::zero(),
            max_price: krave_core::Money::from_rupees(10_000),
            ..Default::default()
        };
        let results = search_products(filter);
        assert!(results.iter().all(|p| {
            p.name.to_lowercase().contains("fruit") || p.category.to_lowercase().contains("fruit")
        }));
    }

    #[test]
    fn test_static_views() {
        assert_eq!(get_vouchers().vouchers[0].code, "WELCOME");
        assert_eq!(get_account_data().addresses.len(), 3);
        assert_eq!(get_home_catalog().categories.len(), 3);
        assert_eq!(get_search_options().default_filter.max_price.rupees(), 248);
    }
}
