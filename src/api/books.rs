//! Book (catalog) endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{AddBookRequest, Book, BookPage, BookQuery, EditBookRequest, MutationResult},
};

/// List books with exact-match filters and pagination
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "One page of books", body = BookPage),
        (status = 400, description = "Missing or invalid page or size", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    query: Result<Query<BookQuery>, QueryRejection>,
) -> AppResult<Json<BookPage>> {
    let Query(query) = query?;
    query.validate()?;

    Ok(Json(state.services.catalog.list_books(&query)))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(&id)?;
    Ok(Json(book))
}

/// Add a book. A duplicate title/author pair yields code "-1".
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = AddBookRequest,
    responses(
        (status = 200, description = "Mutation result", body = MutationResult),
        (status = 400, description = "Malformed body", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    request: Result<Json<AddBookRequest>, JsonRejection>,
) -> AppResult<Json<MutationResult>> {
    let Json(request) = request?;
    let post = request.post;
    Ok(Json(state.services.catalog.add_book(&post.title, &post.author)))
}

/// Edit a book's title and author
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    request_body = EditBookRequest,
    responses(
        (status = 200, description = "Mutation result", body = MutationResult),
        (status = 400, description = "Malformed body", body = crate::error::ErrorResponse)
    )
)]
pub async fn edit_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    request: Result<Json<EditBookRequest>, JsonRejection>,
) -> AppResult<Json<MutationResult>> {
    let Json(request) = request?;
    Ok(Json(
        state
            .services
            .catalog
            .edit_book(&id, &request.title, &request.author),
    ))
}

/// Delete a book. Unknown ids still report success.
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Mutation result", body = MutationResult)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> Json<MutationResult> {
    Json(state.services.catalog.delete_book(&id))
}
