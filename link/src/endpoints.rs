//! Endpoint paths for the Tienda backend, relative to the base URL.

pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_REGISTER: &str = "/auth/register";
pub const AUTH_REFRESH: &str = "/auth/refresh";
pub const AUTH_LOGOUT: &str = "/auth/logout";

pub const PRODUCTS: &str = "/products";
pub const PRODUCTS_SEARCH: &str = "/products/search";
pub const PRODUCTS_ACTIVE: &str = "/products/active";
pub const PRODUCTS_AVAILABLE: &str = "/products/available";

pub fn product_by_id(id: &str) -> String {
    format!("/products/{}", id)
}

pub fn products_by_category(category: &str) -> String {
    format!("/products/category/{}", category)
}

pub const STOCK: &str = "/stock";
pub const STOCK_LOW: &str = "/stock/low";
pub const STOCK_INCREASE: &str = "/stock/increase";
pub const STOCK_DECREASE: &str = "/stock/decrease";
pub const STOCK_UPDATE_QUANTITY: &str = "/stock/update-quantity";

pub fn stock_by_product(product_id: &str) -> String {
    format!("/stock/product/{}", product_id)
}

pub const ORDERS: &str = "/orders";

pub fn order_by_id(id: &str) -> String {
    format!("/orders/{}", id)
}

pub const USERS: &str = "/users";

pub fn user_by_id(id: &str) -> String {
    format!("/users/{}", id)
}

pub const ATTENDANCE: &str = "/attendance";
pub const ATTENDANCE_REGISTER: &str = "/attendance/register";

pub const REPORTS_SALES: &str = "/reports/sales";
pub const REPORTS_STOCK: &str = "/reports/stock";
pub const REPORTS_ATTENDANCE: &str = "/reports/attendance";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_builders() {
        assert_eq!(product_by_id("p1"), "/products/p1");
        assert_eq!(products_by_category("drinks"), "/products/category/drinks");
        assert_eq!(stock_by_product("p1"), "/stock/product/p1");
        assert_eq!(order_by_id("o1"), "/orders/o1");
        assert_eq!(user_by_id("u1"), "/users/u1");
    }
}
