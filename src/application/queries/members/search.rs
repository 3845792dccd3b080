// src/application/queries/members/search.rs
use super::MemberQueryService;
use crate::{
    application::{
        dto::MemberDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::member::MemberName,
};

pub struct SearchMembersByNameQuery {
    pub name: String,
}

impl MemberQueryService {
    /// Exact, case-sensitive name search. An empty result is reported as
    /// `NotFound`, not as an empty list; a name no member could carry is
    /// simply an empty result.
    pub async fn search_members_by_name(
        &self,
        query: SearchMembersByNameQuery,
    ) -> ApplicationResult<Vec<MemberDto>> {
        let no_match = || ApplicationError::not_found(format!("no member named '{}'", query.name));

        let name = MemberName::new(query.name.as_str()).map_err(|_| no_match())?;
        let members = self.read_repo.find_by_name(&name).await?;
        if members.is_empty() {
            return Err(no_match());
        }
        Ok(members.into_iter().map(Into::into).collect())
    }
}
