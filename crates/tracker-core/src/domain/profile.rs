//! 사용자 프로필 정의.
//!
//! 이 모듈은 추적 대상 사용자 관련 타입을 정의합니다:
//! - `UserId` - 안정적인 사용자 식별자
//! - `Profile` - 표시 이름과 색상이 포함된 프로필

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 안정적인 사용자 식별자.
///
/// 파생 구조체의 키로 사용됩니다. 문자열 기반 동적 필드 접근 대신
/// 명시적 매핑 타입의 키가 되는 값 타입입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    /// 새 임의 식별자를 생성합니다.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// 문자열에서 식별자를 파싱합니다.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// 추적 대상 사용자 프로필.
///
/// 외부 저장소의 프로필 행에 해당합니다. 순서는 그룹 명단에 정의된
/// 순서를 따르며, 랭킹의 동점 처리에 사용됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// 사용자 식별자
    pub id: UserId,
    /// 표시 이름
    pub name: String,
    /// 차트 색상 (예: "#F59E0B")
    pub color: String,
}

impl Profile {
    /// 새 프로필을 생성합니다.
    pub fn new(id: UserId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }
}
