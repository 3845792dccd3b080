// src/presentation/http/controllers/members.rs
use crate::application::{
    dto::MemberDto,
    queries::members::{GetMemberByIdQuery, SearchMembersByNameQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ApiPath;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/member",
    responses(
        (status = 200, description = "All members.", body = [MemberDto]),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Members"
)]
pub async fn list_members(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<MemberDto>>> {
    state
        .services
        .member_queries
        .list_members()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/member/{id}",
    params(("id" = i64, Path, description = "Member identifier")),
    responses(
        (status = 200, description = "The member.", body = MemberDto),
        (status = 400, description = "Non-numeric identifier.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No member with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Members"
)]
pub async fn get_member(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<MemberDto>> {
    state
        .services
        .member_queries
        .get_member_by_id(GetMemberByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/member/searchByName/{name}",
    params(("name" = String, Path, description = "Exact, case-sensitive member name")),
    responses(
        (status = 200, description = "Members with this name.", body = [MemberDto]),
        (status = 404, description = "No member has this name (including names longer than 20 characters).", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Members"
)]
pub async fn search_members_by_name(
    Extension(state): Extension<HttpState>,
    ApiPath(name): ApiPath<String>,
) -> HttpResult<Json<Vec<MemberDto>>> {
    state
        .services
        .member_queries
        .search_members_by_name(SearchMembersByNameQuery { name })
        .await
        .into_http()
        .map(Json)
}
