// src/domain/member/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberId(i64);

impl MemberId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("member id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<MemberId> for i64 {
    fn from(value: MemberId) -> Self {
        value.0
    }
}

/// Member display name. Matches the `VARCHAR(20) DEFAULT ''` column, so the
/// empty name is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MemberName(String);

impl MemberName {
    pub const MAX_CHARS: usize = 20;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() > Self::MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "member name must be at most {} characters",
                Self::MAX_CHARS
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<MemberName> for String {
    fn from(value: MemberName) -> Self {
        value.0
    }
}
