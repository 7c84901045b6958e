use axum::{
    Extension,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use cafehop_session::flash::push_flash;
use cafehop_session::token::Session;

use crate::error::WebServiceError;
use crate::guard::Viewer;
use crate::state::AppState;
use crate::usecase::cart::{AddToCartUseCase, CheckoutUseCase, ConfirmOrderUseCase};
use crate::views::{CheckoutView, render};

pub const ADDED_TO_CART: &str = "Item added to your cart.";
pub const ORDER_CONFIRMED: &str =
    "Your order has been confirmed. A confirmation email is on its way.";

// ── GET /add_to_cart/{item_id}/{cafe_id} ─────────────────────────────────────

pub async fn add_to_cart(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    jar: CookieJar,
    Path((item_id, cafe_id)): Path<(i32, i32)>,
) -> Result<Response, WebServiceError> {
    let usecase = AddToCartUseCase {
        menu: state.menu_repo(),
        cart: state.cart_repo(),
    };
    usecase.execute(session.customer_id, item_id).await?;
    let jar = push_flash(jar, ADDED_TO_CART);
    Ok((jar, Redirect::to(&format!("/show_menu/{cafe_id}"))).into_response())
}

// ── GET /checkout ────────────────────────────────────────────────────────────

pub async fn checkout(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    viewer: Viewer,
    jar: CookieJar,
) -> Result<Response, WebServiceError> {
    let usecase = CheckoutUseCase {
        cart: state.cart_repo(),
    };
    let summary = usecase.execute(session.customer_id).await?;
    Ok(render(jar, &viewer, CheckoutView::from(summary)))
}

// ── GET|POST /send_order_confirmation ────────────────────────────────────────

pub async fn send_order_confirmation(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    jar: CookieJar,
) -> Result<Response, WebServiceError> {
    let usecase = ConfirmOrderUseCase {
        customers: state.customer_repo(),
        cart: state.cart_repo(),
        mailer: state.mailer(),
    };
    usecase.execute(session.customer_id).await?;
    let jar = push_flash(jar, ORDER_CONFIRMED);
    Ok((jar, Redirect::to("/")).into_response())
}
