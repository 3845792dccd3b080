// src/infrastructure/repositories/sqlite_member.rs
use super::{invalid_row, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::member::{
    Member, MemberId, MemberName, MemberReadRepository, MemberWriteRepository, NewMember,
};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteMemberRepository {
    pool: SqlitePool,
}

impl SqliteMemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MemberRow {
    id: i64,
    name: String,
}

impl TryFrom<MemberRow> for Member {
    type Error = DomainError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        let decode = || -> DomainResult<Member> {
            Ok(Member {
                id: MemberId::new(row.id)?,
                name: MemberName::new(row.name)?,
            })
        };
        decode().map_err(|err| invalid_row("member", err))
    }
}

fn into_members(rows: Vec<MemberRow>) -> DomainResult<Vec<Member>> {
    rows.into_iter().map(Member::try_from).collect()
}

#[async_trait]
impl MemberReadRepository for SqliteMemberRepository {
    async fn find_all(&self) -> DomainResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, MemberRow>("SELECT id, name FROM member ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        into_members(rows)
    }

    async fn find_by_id(&self, id: MemberId) -> DomainResult<Option<Member>> {
        let row = sqlx::query_as::<_, MemberRow>("SELECT id, name FROM member WHERE id = ?")
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Member::try_from).transpose()
    }

    async fn find_by_name(&self, name: &MemberName) -> DomainResult<Vec<Member>> {
        // `=` on TEXT uses the BINARY collation, i.e. a case-sensitive match.
        let rows = sqlx::query_as::<_, MemberRow>(
            "SELECT id, name FROM member WHERE name = ? ORDER BY id ASC",
        )
        .bind(name.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_members(rows)
    }

    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM member")
            .fetch_one(&self.pool)
            .await
            .map(|count| count.unsigned_abs())
            .map_err(map_sqlx)
    }
}

#[async_trait]
impl MemberWriteRepository for SqliteMemberRepository {
    async fn insert(&self, member: NewMember) -> DomainResult<Member> {
        let row = sqlx::query_as::<_, MemberRow>(
            "INSERT INTO member (name) VALUES (?) RETURNING id, name",
        )
        .bind(member.name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Member::try_from(row)
    }

    async fn update(&self, member: &Member) -> DomainResult<Member> {
        let row = sqlx::query_as::<_, MemberRow>(
            "UPDATE member SET name = ? WHERE id = ? RETURNING id, name",
        )
        .bind(member.name.as_str())
        .bind(i64::from(member.id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("member not found".into()))?;

        Member::try_from(row)
    }

    async fn delete_by_id(&self, id: MemberId) -> DomainResult<()> {
        sqlx::query("DELETE FROM member WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
