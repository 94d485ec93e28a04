//! Request handlers translating form submissions into store calls.
//!
//! Handlers are generic over the [`TodoStore`] and receive it as actix
//! application data, so the same routes serve SQLite in production and the
//! memory store in tests.

use actix_web::http::header::{self, ContentType};
use actix_web::{web, HttpResponse};
use tracing::debug;

use super::error::HttpError;
use super::form::TodoForm;
use super::view;
use crate::domain::TodoId;
use crate::error::Error;
use crate::port::TodoStore;

type HandlerResult = Result<HttpResponse, HttpError>;

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

fn redirect_home() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

async fn render_index<S: TodoStore>(store: &S) -> HandlerResult {
    let todos = store.list_all().await?;
    Ok(html(view::index_page(&todos)))
}

/// `GET /`
pub async fn index<S: TodoStore>(store: web::Data<S>) -> HandlerResult {
    render_index(store.get_ref()).await
}

/// `POST /` - create, then render the refreshed list.
pub async fn create<S: TodoStore>(store: web::Data<S>, form: web::Form<TodoForm>) -> HandlerResult {
    let draft = form.into_inner().into_draft()?;
    store.create(draft).await?;
    render_index(store.get_ref()).await
}

/// `GET /delete/{id}`
pub async fn delete<S: TodoStore>(store: web::Data<S>, path: web::Path<TodoId>) -> HandlerResult {
    let id = path.into_inner();
    store.delete(id).await?;
    Ok(redirect_home())
}

/// `GET /update/{id}` - the edit form.
pub async fn edit<S: TodoStore>(store: web::Data<S>, path: web::Path<TodoId>) -> HandlerResult {
    let id = path.into_inner();
    let todo = store
        .find_by_id(id)
        .await?
        .ok_or(Error::NotFound { id })?;
    debug!(id = %id, "rendering edit form");
    Ok(html(view::edit_page(&todo)))
}

/// `POST /update/{id}`
pub async fn update<S: TodoStore>(
    store: web::Data<S>,
    path: web::Path<TodoId>,
    form: web::Form<TodoForm>,
) -> HandlerResult {
    let id = path.into_inner();
    let draft = form.into_inner().into_draft()?;
    store.update(id, draft).await?;
    Ok(redirect_home())
}

/// `GET /health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::plaintext()).body("ok")
}
