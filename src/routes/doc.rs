use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        DeleteResult,
        farmers::{FarmerForm, FarmerList},
        orders::{OrderDetails, OrderForm, OrderItemForm, OrderLine, OrderList, UpdateOrderStatusRequest},
        products::{ProductForm, ProductList, ProductPage},
        session::{LoginRequest, NavigateRequest, PageView, SessionState},
        settings::{Currency, Language, Settings},
        users::{UserForm, UserList},
    },
    models::{
        Farmer, FarmerStatus, Order, OrderItem, OrderStatus, Product, StockStatus, User, UserRole,
        UserStatus,
    },
    reports::{
        CategoryShare, DashboardSummary, Highlight, MonthlySales, RecentOrder, ReportRange,
        ReportSummary, SalesPoint, StatCard,
    },
    response::{ApiResponse, Meta},
    routes::{farmers, health, orders, params, products, reports, session, settings, users},
    session::Page,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        session::current_session,
        session::login,
        session::logout,
        session::navigate,
        session::current_view,
        farmers::list_farmers,
        farmers::get_farmer,
        farmers::create_farmer,
        farmers::update_farmer,
        farmers::delete_farmer,
        products::list_products,
        products::top_selling_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        orders::list_orders,
        orders::get_order,
        orders::create_order,
        orders::update_order,
        orders::update_order_status,
        orders::delete_order,
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::toggle_user_status,
        users::delete_user,
        reports::dashboard_summary,
        reports::report_summary,
        settings::get_settings,
        settings::save_settings,
        settings::export_data
    ),
    components(
        schemas(
            Farmer,
            FarmerStatus,
            Product,
            StockStatus,
            Order,
            OrderItem,
            OrderStatus,
            User,
            UserRole,
            UserStatus,
            Page,
            FarmerForm,
            ProductForm,
            OrderForm,
            OrderItemForm,
            UserForm,
            UpdateOrderStatusRequest,
            LoginRequest,
            NavigateRequest,
            SessionState,
            PageView,
            FarmerList,
            ProductList,
            ProductPage,
            OrderList,
            OrderLine,
            OrderDetails,
            UserList,
            DeleteResult,
            Settings,
            Currency,
            Language,
            StatCard,
            MonthlySales,
            SalesPoint,
            CategoryShare,
            RecentOrder,
            Highlight,
            ReportRange,
            DashboardSummary,
            ReportSummary,
            params::StockFilter,
            Meta,
            ApiResponse<Farmer>,
            ApiResponse<Product>,
            ApiResponse<Order>,
            ApiResponse<User>,
            ApiResponse<SessionState>,
            ApiResponse<DeleteResult>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Session", description = "Login, logout and page navigation"),
        (name = "Farmers", description = "Farmer records"),
        (name = "Products", description = "Product records"),
        (name = "Orders", description = "Order records"),
        (name = "Users", description = "Staff accounts"),
        (name = "Reports", description = "Static dashboard and report series"),
        (name = "Settings", description = "Display preferences"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_form_schema_lists_its_items() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let order_form = &doc["components"]["schemas"]["OrderForm"];
        assert!(order_form["properties"]["items"].is_object());
        assert!(doc["components"]["schemas"]["OrderItemForm"].is_object());
    }
}
