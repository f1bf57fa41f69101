//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다. 설정은 TOML
//! 파일에서 로드되고 `TRACKER__` 접두사의 환경 변수로 오버라이드됩니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::profile::{Profile, UserId};
use crate::error::{TrackerError, TrackerResult};

/// 애플리케이션 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 그룹 설정
    pub group: GroupConfig,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 그룹 설정.
///
/// 추적 대상 사용자 명단입니다. 명단의 순서는 파생 뷰에서
/// 동점 처리 순서로 사용됩니다.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroupConfig {
    /// 그룹 이름
    pub name: String,
    /// 추적 대상 프로필 목록
    pub profiles: Vec<ProfileConfig>,
}

/// 프로필 설정 항목.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfileConfig {
    /// 사용자 식별자 (UUID)
    pub id: String,
    /// 표시 이름
    pub name: String,
    /// 차트 색상
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "#6B7280".to_string()
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // 기본값으로 시작
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            // 파일에서 로드
            .add_source(config::File::from(path.as_ref()))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("TRACKER")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load("config/default.toml")
    }

    /// 명단을 도메인 프로필 목록으로 변환합니다.
    ///
    /// 잘못된 UUID는 `TrackerError::Config`로 거부됩니다.
    pub fn profiles(&self) -> TrackerResult<Vec<Profile>> {
        self.group
            .profiles
            .iter()
            .map(|p| {
                let id = UserId::parse(&p.id).map_err(|e| {
                    TrackerError::Config(format!("프로필 '{}'의 id가 잘못됨: {}", p.name, e))
                })?;
                Ok(Profile::new(id, p.name.clone(), p.color.clone()))
            })
            .collect()
    }
}
