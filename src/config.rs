use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::escalation::{self, EscalationError, EscalationTable};
use crate::sizing::{SizeLimit, SizeLimitError, SizeLimitTable};

/// 기본 설정 파일 이름.
pub const CONFIG_FILE: &str = "cost_config.toml";

/// 비용 보정 연도 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EscalationSettings {
    /// 상관식 기준연도
    pub base_year: i32,
    /// 비용을 환산할 목표연도
    pub target_year: i32,
    /// 테이블에 없는 연도에 대신 쓸 연도
    pub fallback_year: i32,
}

impl Default for EscalationSettings {
    fn default() -> Self {
        Self {
            base_year: escalation::BASE_YEAR,
            target_year: escalation::DEFAULT_FALLBACK_YEAR,
            fallback_year: escalation::DEFAULT_FALLBACK_YEAR,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 기본 크기 제한을 덮어쓰거나 추가하는 항목
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub size_limits: Vec<SizeLimit>,
    pub escalation: EscalationSettings,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("설정값 오류: {0}")]
    Escalation(#[from] EscalationError),
    #[error("크기 제한 설정 오류: {0}")]
    SizeLimit(#[from] SizeLimitError),
}

/// cost_config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        load_from(path)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}

/// 지정한 경로의 설정을 읽고 검증한다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    cfg.validate()?;
    Ok(cfg)
}

impl Config {
    /// 설정을 cost_config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 연도와 크기 제한 값이 테이블과 맞는지 확인한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.escalation_table()?;
        self.size_limit_table()?;
        Ok(())
    }

    pub fn escalation_table(&self) -> Result<EscalationTable, ConfigError> {
        Ok(EscalationTable::with_fallback_year(
            self.escalation.fallback_year,
        )?)
    }

    pub fn size_limit_table(&self) -> Result<SizeLimitTable, ConfigError> {
        Ok(SizeLimitTable::with_overrides(&self.size_limits)?)
    }

    /// 기준연도 비용을 설정된 목표연도 가격으로 환산한다.
    pub fn escalate_to_target(&self, base_cost: f64) -> Result<f64, ConfigError> {
        let table = self.escalation_table()?;
        Ok(table.escalate(
            base_cost,
            self.escalation.base_year,
            self.escalation.target_year,
        ))
    }
}
