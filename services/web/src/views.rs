//! View models handed to the template layer as JSON.
//!
//! Every page carries the pending flash messages, which are consumed on
//! render, and the viewer.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use serde::Serialize;

use cafehop_session::flash::take_flashes;

use crate::domain::types::{Cafe, CartLine, CartSummary, MenuItem};
use crate::forms::FieldErrors;
use crate::guard::Viewer;

#[derive(Serialize)]
pub struct Page<T: Serialize> {
    pub flashes: Vec<String>,
    pub viewer: Option<ViewerView>,
    #[serde(flatten)]
    pub body: T,
}

#[derive(Serialize)]
pub struct ViewerView {
    pub customer_id: i32,
    pub name: String,
    pub is_admin: bool,
}

fn viewer_view(viewer: &Viewer) -> Option<ViewerView> {
    viewer.0.as_ref().map(|s| ViewerView {
        customer_id: s.customer_id,
        name: s.name.clone(),
        is_admin: s.is_admin(),
    })
}

/// Render `body` with status 200.
pub fn render<T: Serialize>(jar: CookieJar, viewer: &Viewer, body: T) -> Response {
    render_with_status(StatusCode::OK, jar, viewer, body)
}

pub fn render_with_status<T: Serialize>(
    status: StatusCode,
    jar: CookieJar,
    viewer: &Viewer,
    body: T,
) -> Response {
    let (jar, flashes) = take_flashes(jar);
    let page = Page {
        flashes,
        viewer: viewer_view(viewer),
        body,
    };
    (status, jar, Json(page)).into_response()
}

// ── Cafes ────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CafeView {
    pub id: i32,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub has_sockets: bool,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub can_take_calls: bool,
    pub seats: Option<String>,
    pub coffee_price: Option<String>,
}

impl From<Cafe> for CafeView {
    fn from(cafe: Cafe) -> Self {
        Self {
            id: cafe.id,
            name: cafe.name,
            map_url: cafe.map_url,
            img_url: cafe.img_url,
            location: cafe.location,
            has_sockets: cafe.has_sockets,
            has_toilet: cafe.has_toilet,
            has_wifi: cafe.has_wifi,
            can_take_calls: cafe.can_take_calls,
            seats: cafe.seats,
            coffee_price: cafe.coffee_price,
        }
    }
}

#[derive(Serialize)]
pub struct CafeListView {
    pub cafes: Vec<CafeView>,
}

impl CafeListView {
    pub fn new(cafes: Vec<Cafe>) -> Self {
        Self {
            cafes: cafes.into_iter().map(CafeView::from).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct CafeDetailView {
    pub cafe: CafeView,
}

// ── Forms ────────────────────────────────────────────────────────────────────

/// An input form and its field errors; empty on first render.
#[derive(Serialize)]
pub struct FormView {
    pub form: &'static str,
    pub errors: FieldErrors,
}

impl FormView {
    pub fn empty(form: &'static str) -> Self {
        Self {
            form,
            errors: FieldErrors::new(),
        }
    }

    pub fn invalid(form: &'static str, errors: FieldErrors) -> Self {
        Self { form, errors }
    }
}

#[derive(Serialize)]
pub struct SearchView {
    #[serde(flatten)]
    pub form: FormView,
    pub cafes: Vec<CafeView>,
}

#[derive(Serialize)]
pub struct EditPriceView {
    #[serde(flatten)]
    pub form: FormView,
    pub cafe_id: i32,
}

// ── Menus ────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MenuItemView {
    pub id: i32,
    pub name: String,
    pub img_url: String,
    pub price: i32,
}

impl From<MenuItem> for MenuItemView {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            img_url: item.img_url,
            price: item.price,
        }
    }
}

#[derive(Serialize)]
pub struct MenuView {
    pub cafe: CafeView,
    pub items: Vec<MenuItemView>,
}

impl MenuView {
    pub fn new(cafe: Cafe, items: Vec<MenuItem>) -> Self {
        Self {
            cafe: cafe.into(),
            items: items.into_iter().map(MenuItemView::from).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct ManageMenuView {
    #[serde(flatten)]
    pub form: FormView,
    #[serde(flatten)]
    pub menu: MenuView,
}

// ── Cart ─────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CartLineView {
    pub item_id: i32,
    pub menu_item: MenuItemView,
}

impl From<CartLine> for CartLineView {
    fn from(line: CartLine) -> Self {
        Self {
            item_id: line.item_id,
            menu_item: line.menu_item.into(),
        }
    }
}

#[derive(Serialize)]
pub struct CheckoutView {
    pub lines: Vec<CartLineView>,
    pub total: i64,
}

impl From<CartSummary> for CheckoutView {
    fn from(summary: CartSummary) -> Self {
        Self {
            lines: summary.lines.into_iter().map(CartLineView::from).collect(),
            total: summary.total,
        }
    }
}
