use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use cafehop_session::flash::push_flash;

use crate::error::WebServiceError;
use crate::forms::{AddCafeForm, SearchForm, UpdatePriceForm, check};
use crate::guard::Viewer;
use crate::state::AppState;
use crate::usecase::cafe::{
    AddCafeUseCase, GetCafeUseCase, ListCafesUseCase, RandomCafeUseCase, SearchCafesUseCase,
    UpdateCoffeePriceUseCase,
};
use crate::views::{
    CafeDetailView, CafeListView, CafeView, EditPriceView, FormView, SearchView, render,
    render_with_status,
};

pub const NO_CAFE_AT_LOCATION: &str = "We dont have a cafe information at the searched location.";
pub const CAFE_ALREADY_EXISTS: &str = "Cafe already exist on the website.";

const SEARCH_FORM: &str = "search";
const ADD_CAFE_FORM: &str = "add_cafe";
const UPDATE_PRICE_FORM: &str = "update_price";

// ── GET / ────────────────────────────────────────────────────────────────────

pub async fn list_cafes(
    State(state): State<AppState>,
    viewer: Viewer,
    jar: CookieJar,
) -> Result<Response, WebServiceError> {
    let usecase = ListCafesUseCase {
        repo: state.cafe_repo(),
    };
    let cafes = usecase.execute().await?;
    Ok(render(jar, &viewer, CafeListView::new(cafes)))
}

// ── GET /cafe-details/{cafe_id} ──────────────────────────────────────────────

pub async fn show_cafe(
    State(state): State<AppState>,
    viewer: Viewer,
    jar: CookieJar,
    Path(cafe_id): Path<i32>,
) -> Result<Response, WebServiceError> {
    let usecase = GetCafeUseCase {
        repo: state.cafe_repo(),
    };
    let cafe = usecase.execute(cafe_id).await?;
    Ok(render(jar, &viewer, CafeDetailView { cafe: cafe.into() }))
}

// ── GET /search ──────────────────────────────────────────────────────────────

pub async fn search_form(viewer: Viewer, jar: CookieJar) -> Response {
    render(
        jar,
        &viewer,
        SearchView {
            form: FormView::empty(SEARCH_FORM),
            cafes: vec![],
        },
    )
}

// ── POST /search ─────────────────────────────────────────────────────────────

pub async fn search(
    State(state): State<AppState>,
    viewer: Viewer,
    jar: CookieJar,
    Form(form): Form<SearchForm>,
) -> Result<Response, WebServiceError> {
    if let Err(errors) = check(&form) {
        return Ok(render_with_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            jar,
            &viewer,
            SearchView {
                form: FormView::invalid(SEARCH_FORM, errors),
                cafes: vec![],
            },
        ));
    }

    let usecase = SearchCafesUseCase {
        repo: state.cafe_repo(),
    };
    let cafes = usecase.execute(&form.location).await?;
    let jar = if cafes.is_empty() {
        push_flash(jar, NO_CAFE_AT_LOCATION)
    } else {
        jar
    };

    Ok(render(
        jar,
        &viewer,
        SearchView {
            form: FormView::empty(SEARCH_FORM),
            cafes: cafes.into_iter().map(CafeView::from).collect(),
        },
    ))
}

// ── GET /random ──────────────────────────────────────────────────────────────

pub async fn random_cafe(
    State(state): State<AppState>,
    viewer: Viewer,
    jar: CookieJar,
) -> Result<Response, WebServiceError> {
    let usecase = RandomCafeUseCase {
        repo: state.cafe_repo(),
    };
    let cafe = usecase.execute().await?;
    Ok(render(jar, &viewer, CafeDetailView { cafe: cafe.into() }))
}

// ── GET /add_cafe ────────────────────────────────────────────────────────────

pub async fn add_cafe_form(viewer: Viewer, jar: CookieJar) -> Response {
    render(jar, &viewer, FormView::empty(ADD_CAFE_FORM))
}

// ── POST /add_cafe ───────────────────────────────────────────────────────────

pub async fn add_cafe(
    State(state): State<AppState>,
    viewer: Viewer,
    jar: CookieJar,
    Form(form): Form<AddCafeForm>,
) -> Result<Response, WebServiceError> {
    if let Err(errors) = check(&form) {
        return Ok(render_with_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            jar,
            &viewer,
            FormView::invalid(ADD_CAFE_FORM, errors),
        ));
    }

    let usecase = AddCafeUseCase {
        repo: state.cafe_repo(),
    };
    match usecase.execute(form.into_new_cafe()).await {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(WebServiceError::CafeAlreadyExists) => {
            let jar = push_flash(jar, CAFE_ALREADY_EXISTS);
            Ok((jar, Redirect::to("/add_cafe")).into_response())
        }
        Err(e) => Err(e),
    }
}

// ── GET /edit_price/{cafe_id} ────────────────────────────────────────────────

pub async fn edit_price_form(
    State(state): State<AppState>,
    viewer: Viewer,
    jar: CookieJar,
    Path(cafe_id): Path<i32>,
) -> Result<Response, WebServiceError> {
    let usecase = GetCafeUseCase {
        repo: state.cafe_repo(),
    };
    let cafe = usecase.execute(cafe_id).await?;
    Ok(render(
        jar,
        &viewer,
        EditPriceView {
            form: FormView::empty(UPDATE_PRICE_FORM),
            cafe_id: cafe.id,
        },
    ))
}

// ── POST /edit_price/{cafe_id} ───────────────────────────────────────────────

pub async fn edit_price(
    State(state): State<AppState>,
    viewer: Viewer,
    jar: CookieJar,
    Path(cafe_id): Path<i32>,
    Form(form): Form<UpdatePriceForm>,
) -> Result<Response, WebServiceError> {
    if let Err(errors) = check(&form) {
        return Ok(render_with_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            jar,
            &viewer,
            EditPriceView {
                form: FormView::invalid(UPDATE_PRICE_FORM, errors),
                cafe_id,
            },
        ));
    }

    let usecase = UpdateCoffeePriceUseCase {
        repo: state.cafe_repo(),
    };
    usecase.execute(cafe_id, &form.updated_price).await?;
    Ok(Redirect::to(&format!("/cafe-details/{cafe_id}")).into_response())
}
