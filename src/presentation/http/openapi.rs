// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::members::list_members,
        crate::presentation::http::controllers::members::get_member,
        crate::presentation::http::controllers::members::search_members_by_name,
        crate::presentation::http::controllers::system::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::MemberDto
        )
    ),
    tags(
        (name = "Articles", description = "Article CRUD, session required"),
        (name = "Members", description = "Member lookups, public"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Blog API",
        description = "Articles and members over JSON, with form login",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
