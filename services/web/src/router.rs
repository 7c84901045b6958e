use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::get,
};
use tower_http::trace::TraceLayer;

use cafehop_core::health::{healthz, readyz};
use cafehop_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::guard::{load_session, require_admin, require_login};
use crate::handlers::{
    account::{login, login_form, logout, register, register_form},
    cafe::{
        add_cafe, add_cafe_form, edit_price, edit_price_form, list_cafes, random_cafe, search,
        search_form, show_cafe,
    },
    cart::{add_to_cart, checkout, send_order_confirmation},
    menu::{
        add_menu_item, add_menu_item_form, manage_menu, manage_menu_form, remove_menu_item,
        show_menu,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let public = Router::new()
        // Cafes
        .route("/", get(list_cafes))
        .route("/cafe-details/{cafe_id}", get(show_cafe))
        .route("/search", get(search_form).post(search))
        .route("/random", get(random_cafe))
        // Menus
        .route("/show_menu/{cafe_id}", get(show_menu))
        // Accounts
        .route("/register", get(register_form).post(register))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout));

    let member = Router::new()
        .route("/add_cafe", get(add_cafe_form).post(add_cafe))
        .route(
            "/edit_price/{cafe_id}",
            get(edit_price_form).post(edit_price),
        )
        // Cart
        .route("/add_to_cart/{item_id}/{cafe_id}", get(add_to_cart))
        .route("/checkout", get(checkout))
        .route(
            "/send_order_confirmation",
            get(send_order_confirmation).post(send_order_confirmation),
        )
        .route_layer(from_fn(require_login));

    let admin = Router::new()
        .route(
            "/add_menu_item_to_database",
            get(add_menu_item_form).post(add_menu_item),
        )
        .route(
            "/manage_menu_at_cafe/{cafe_id}",
            get(manage_menu_form).post(manage_menu),
        )
        .route(
            "/remove_menuitem_at_cafe/{item_id}/{cafe_id}",
            get(remove_menu_item),
        )
        .route_layer(from_fn(require_admin));

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .merge(public)
        .merge(member)
        .merge(admin)
        .layer(from_fn_with_state(state.session.clone(), load_session))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .with_state(state)
}
