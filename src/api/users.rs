//! User management handlers: list, create, edit and delete

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::debug;

use crate::domain::user::UserId;
use crate::infrastructure::user::{CreateUserRequest, UpdateUserRequest};

use super::error::PageError;
use super::forms::UserForm;
use super::state::AppState;
use super::views;

/// GET /
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    debug!("Listing users");

    let users = state.user_service.list().await.map_err(PageError::from)?;

    Ok(Html(views::index_page(&users)))
}

/// GET /criar
pub async fn criar_form() -> Html<String> {
    Html(views::criar_page())
}

/// POST /criar
///
/// An incomplete submission re-renders the form with no error message; the
/// record is only created when all three fields are present.
pub async fn criar(
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> Result<Response, PageError> {
    if !form.is_complete() {
        debug!("Incomplete create submission, re-rendering form");
        return Ok(Html(views::criar_page()).into_response());
    }

    debug!(nome = %form.nome, "Creating user");

    state
        .user_service
        .create(CreateUserRequest {
            name: form.nome,
            email: form.email,
            password: form.senha,
        })
        .await
        .map_err(PageError::from)?;

    Ok(Redirect::to("/").into_response())
}

/// GET /editar/{id}
pub async fn editar_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, PageError> {
    debug!(id = id, "Rendering edit form");

    let user = state
        .user_service
        .get(UserId::new(id))
        .await
        .map_err(PageError::from)?;

    Ok(Html(views::editar_page(&user)))
}

/// POST /editar/{id}
///
/// Overwrites the record with the submitted fields unconditionally. Unlike
/// the create path there is no presence check: empty fields are persisted
/// as submitted and the password is re-hashed even when blank.
pub async fn editar(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<UserForm>,
) -> Result<Redirect, PageError> {
    debug!(id = id, "Updating user");

    state
        .user_service
        .update(
            UserId::new(id),
            UpdateUserRequest {
                name: form.nome,
                email: form.email,
                password: form.senha,
            },
        )
        .await
        .map_err(PageError::from)?;

    Ok(Redirect::to("/"))
}

/// GET /excluir/{id}
pub async fn excluir(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, PageError> {
    debug!(id = id, "Deleting user");

    state
        .user_service
        .delete(UserId::new(id))
        .await
        .map_err(PageError::from)?;

    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    use crate::api::router::create_router;
    use crate::api::state::AppState;
    use crate::infrastructure::user::{Argon2Hasher, InMemoryUserRepository, UserService};

    fn test_state() -> AppState {
        let repository = Arc::new(InMemoryUserRepository::new());
        let hasher = Arc::new(Argon2Hasher::new());
        AppState::new(Arc::new(UserService::new(repository, hasher)))
    }

    fn app(state: &AppState) -> Router {
        create_router(state.clone())
    }

    async fn get(state: &AppState, uri: &str) -> axum::response::Response {
        app(state)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_form(state: &AppState, uri: &str, body: &str) -> axum::response::Response {
        app(state)
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &axum::response::Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_empty_list() {
        let state = test_state();

        let response = get(&state, "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Nenhum"));
    }

    #[tokio::test]
    async fn test_criar_form_renders() {
        let state = test_state();

        let response = get(&state, "/criar").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("action=\"/criar\""));
    }

    #[tokio::test]
    async fn test_criar_creates_and_redirects() {
        let state = test_state();

        let response = post_form(
            &state,
            "/criar",
            "nome=Ana&email=ana%40x.com&senha=secret",
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        let users = state.user_service.list().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name(), "Ana");
        assert_eq!(users[0].email(), "ana@x.com");
        assert_ne!(users[0].password_hash(), "secret");
    }

    #[tokio::test]
    async fn test_criar_incomplete_rerenders_without_creating() {
        let state = test_state();

        let response = post_form(&state, "/criar", "nome=Ana&email=&senha=secret").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("action=\"/criar\""));

        assert!(state.user_service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_criar_missing_field_rerenders_without_creating() {
        let state = test_state();

        let response = post_form(&state, "/criar", "nome=Ana&senha=secret").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.user_service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_editar_form_prefilled() {
        let state = test_state();
        post_form(&state, "/criar", "nome=Ana&email=ana%40x.com&senha=secret").await;

        let response = get(&state, "/editar/1").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("value=\"Ana\""));
        assert!(body.contains("value=\"ana@x.com\""));
        assert!(body.contains("name=\"senha\" value=\"\""));
    }

    #[tokio::test]
    async fn test_editar_form_absent_id_is_404() {
        let state = test_state();

        let response = get(&state, "/editar/999").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_editar_updates_and_redirects() {
        let state = test_state();
        post_form(&state, "/criar", "nome=Ana&email=ana%40x.com&senha=secret").await;

        let before = state.user_service.list().await.unwrap().remove(0);

        let response = post_form(
            &state,
            "/editar/1",
            "nome=Ana+Maria&email=am%40x.com&senha=another",
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        let after = state.user_service.list().await.unwrap().remove(0);
        assert_eq!(after.id(), before.id());
        assert_eq!(after.name(), "Ana Maria");
        assert_eq!(after.email(), "am@x.com");
        assert_ne!(after.password_hash(), before.password_hash());
    }

    #[tokio::test]
    async fn test_editar_accepts_empty_fields() {
        // The edit path has no presence check: an empty submission is
        // persisted as-is.
        let state = test_state();
        post_form(&state, "/criar", "nome=Ana&email=ana%40x.com&senha=secret").await;

        let response = post_form(&state, "/editar/1", "nome=&email=&senha=").await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let user = state.user_service.list().await.unwrap().remove(0);
        assert_eq!(user.name(), "");
        assert_eq!(user.email(), "");
    }

    #[tokio::test]
    async fn test_editar_post_absent_id_is_404() {
        let state = test_state();

        let response = post_form(
            &state,
            "/editar/999",
            "nome=Ana&email=ana%40x.com&senha=secret",
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_excluir_removes_and_redirects() {
        let state = test_state();
        post_form(&state, "/criar", "nome=Ana&email=ana%40x.com&senha=secret").await;

        let response = get(&state, "/excluir/1").await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        assert!(state.user_service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_excluir_absent_id_is_404() {
        let state = test_state();

        let response = get(&state, "/excluir/999").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let state = test_state();

        let health = get(&state, "/health").await;
        assert_eq!(health.status(), StatusCode::OK);

        let ready = get(&state, "/ready").await;
        assert_eq!(ready.status(), StatusCode::OK);
    }
}
