//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! served by Swagger UI at `/swagger-ui`.

use crate::api;
use crate::books::Book;
use crate::orders::models::{EnrichedOrder, Order};
use crate::users::UserProfile;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Manager API",
        description = "User directory, book catalog, and order placement endpoints."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        api::users::register,
        api::users::login,
        api::users::get_user,
        api::books::list_books,
        api::books::get_book,
        api::books::create_book,
        api::books::update_book,
        api::books::delete_book,
        api::orders::place_order,
        api::orders::list_orders,
    ),
    components(schemas(Book, Order, EnrichedOrder, UserProfile)),
    tags(
        (name = "users", description = "Registration, login, and directory lookup"),
        (name = "books", description = "Book catalog CRUD"),
        (name = "orders", description = "Order placement and enriched listing")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_order_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/order"));
        assert!(paths.contains_key("/api/orders"));
        assert!(paths.contains_key("/api/books"));
        assert!(paths.contains_key("/api/users"));
    }
}
