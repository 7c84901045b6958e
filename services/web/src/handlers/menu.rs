use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use cafehop_session::flash::push_flash;

use crate::error::WebServiceError;
use crate::forms::{AddMenuItemForm, ManageMenuForm, check};
use crate::guard::Viewer;
use crate::state::AppState;
use crate::usecase::menu::{
    AddMenuItemUseCase, GetCafeMenuUseCase, LinkMenuItemUseCase, UnlinkMenuItemUseCase,
};
use crate::views::{FormView, ManageMenuView, MenuView, render, render_with_status};

const ADD_MENU_ITEM_FORM: &str = "add_menu_item";
const MANAGE_MENU_FORM: &str = "manage_menu";

fn manage_menu_path(cafe_id: i32) -> String {
    format!("/manage_menu_at_cafe/{cafe_id}")
}

// ── GET /add_menu_item_to_database ───────────────────────────────────────────

pub async fn add_menu_item_form(viewer: Viewer, jar: CookieJar) -> Response {
    render(jar, &viewer, FormView::empty(ADD_MENU_ITEM_FORM))
}

// ── POST /add_menu_item_to_database ──────────────────────────────────────────

pub async fn add_menu_item(
    State(state): State<AppState>,
    viewer: Viewer,
    jar: CookieJar,
    Form(form): Form<AddMenuItemForm>,
) -> Result<Response, WebServiceError> {
    let input = match form.into_input() {
        Ok(input) => input,
        Err(errors) => {
            return Ok(render_with_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                jar,
                &viewer,
                FormView::invalid(ADD_MENU_ITEM_FORM, errors),
            ));
        }
    };

    let usecase = AddMenuItemUseCase {
        menu: state.menu_repo(),
    };
    let out = usecase.execute(input).await?;
    // The unique index on `menu_items.name` fails a duplicate insert before
    // this point, so `duplicate` is only set by stores without that index.
    let jar = if out.duplicate {
        push_flash(jar, format!("{} is already in the menu catalog.", out.item.name))
    } else {
        push_flash(jar, format!("{} added to the menu catalog.", out.item.name))
    };
    Ok((jar, Redirect::to("/add_menu_item_to_database")).into_response())
}

// ── GET /manage_menu_at_cafe/{cafe_id} ───────────────────────────────────────

pub async fn manage_menu_form(
    State(state): State<AppState>,
    viewer: Viewer,
    jar: CookieJar,
    Path(cafe_id): Path<i32>,
) -> Result<Response, WebServiceError> {
    let usecase = GetCafeMenuUseCase {
        cafes: state.cafe_repo(),
        menu: state.menu_repo(),
    };
    let menu = usecase.execute(cafe_id).await?;
    Ok(render(
        jar,
        &viewer,
        ManageMenuView {
            form: FormView::empty(MANAGE_MENU_FORM),
            menu: MenuView::new(menu.cafe, menu.items),
        },
    ))
}

// ── POST /manage_menu_at_cafe/{cafe_id} ──────────────────────────────────────

pub async fn manage_menu(
    State(state): State<AppState>,
    viewer: Viewer,
    jar: CookieJar,
    Path(cafe_id): Path<i32>,
    Form(form): Form<ManageMenuForm>,
) -> Result<Response, WebServiceError> {
    if let Err(errors) = check(&form) {
        let usecase = GetCafeMenuUseCase {
            cafes: state.cafe_repo(),
            menu: state.menu_repo(),
        };
        let menu = usecase.execute(cafe_id).await?;
        return Ok(render_with_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            jar,
            &viewer,
            ManageMenuView {
                form: FormView::invalid(MANAGE_MENU_FORM, errors),
                menu: MenuView::new(menu.cafe, menu.items),
            },
        ));
    }

    let usecase = LinkMenuItemUseCase {
        cafes: state.cafe_repo(),
        menu: state.menu_repo(),
    };
    let out = usecase.execute(cafe_id, &form.item_name).await?;
    let jar = if out.already_linked {
        push_flash(jar, format!("{} is already on this cafe's menu.", out.item.name))
    } else {
        jar
    };
    Ok((jar, Redirect::to(&manage_menu_path(cafe_id))).into_response())
}

// ── GET /remove_menuitem_at_cafe/{item_id}/{cafe_id} ─────────────────────────

pub async fn remove_menu_item(
    State(state): State<AppState>,
    Path((item_id, cafe_id)): Path<(i32, i32)>,
) -> Result<Response, WebServiceError> {
    let usecase = UnlinkMenuItemUseCase {
        menu: state.menu_repo(),
    };
    usecase.execute(cafe_id, item_id).await?;
    Ok(Redirect::to(&manage_menu_path(cafe_id)).into_response())
}

// ── GET /show_menu/{cafe_id} ─────────────────────────────────────────────────

pub async fn show_menu(
    State(state): State<AppState>,
    viewer: Viewer,
    jar: CookieJar,
    Path(cafe_id): Path<i32>,
) -> Result<Response, WebServiceError> {
    let usecase = GetCafeMenuUseCase {
        cafes: state.cafe_repo(),
        menu: state.menu_repo(),
    };
    let menu = usecase.execute(cafe_id).await?;
    Ok(render(jar, &viewer, MenuView::new(menu.cafe, menu.items)))
}
