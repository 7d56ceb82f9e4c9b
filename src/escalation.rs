//! 연도별 설비비 지수(CEPCI) 테이블.
//!
//! 상관식 비용은 기준연도(2017) 가격이므로 목표연도 지수 비율로 보정한다.
//! 등록되지 않은 연도는 오류 대신 기본 연도의 지수를 쓴다.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// 연도 하나의 지수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EscalationEntry {
    pub year: i32,
    pub index: f64,
    /// 확정치가 아닌 추정치 여부
    pub projected: bool,
}

const fn entry(year: i32, index: f64, projected: bool) -> EscalationEntry {
    EscalationEntry {
        year,
        index,
        projected,
    }
}

const CEPCI_BY_YEAR: &[EscalationEntry] = &[
    entry(2017, 567.5, false),
    entry(2018, 603.1, false),
    entry(2019, 607.5, false),
    entry(2020, 596.2, false),
    entry(2021, 708.0, false),
    entry(2022, 778.8, false),
    entry(2023, 789.6, false),
    entry(2024, 800.0, true),
    entry(2025, 810.0, true),
];

/// 상관식 계수가 맞춰진 기준연도.
pub const BASE_YEAR: i32 = 2017;
/// 등록되지 않은 연도에 쓰는 연도. 비용 산정의 기본 목표연도이기도 하다.
pub const DEFAULT_FALLBACK_YEAR: i32 = 2024;
/// `DEFAULT_FALLBACK_YEAR`의 지수.
pub const DEFAULT_INDEX: f64 = 800.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EscalationError {
    #[error("지수 테이블에 없는 연도: {0}")]
    UnregisteredYear(i32),
}

/// 지수 조회기. 기본 연도만 설정으로 바꿀 수 있고 테이블 자체는 고정이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscalationTable {
    fallback_year: i32,
}

impl Default for EscalationTable {
    fn default() -> Self {
        Self {
            fallback_year: DEFAULT_FALLBACK_YEAR,
        }
    }
}

impl EscalationTable {
    /// 등록되지 않은 연도에 `fallback_year`의 지수를 쓰는 조회기를 만든다.
    pub fn with_fallback_year(fallback_year: i32) -> Result<Self, EscalationError> {
        if lookup(fallback_year).is_none() {
            return Err(EscalationError::UnregisteredYear(fallback_year));
        }
        Ok(Self { fallback_year })
    }

    pub fn entries(&self) -> &'static [EscalationEntry] {
        CEPCI_BY_YEAR
    }

    pub fn fallback_year(&self) -> i32 {
        self.fallback_year
    }

    pub fn is_registered(&self, year: i32) -> bool {
        lookup(year).is_some()
    }

    /// 연도별 지수. 없는 연도는 기본 연도의 지수를 돌려준다.
    pub fn index_for_year(&self, year: i32) -> f64 {
        match lookup(year) {
            Some(index) => index,
            None => {
                debug!(year, fallback = self.fallback_year, "escalation year not registered");
                lookup(self.fallback_year).unwrap_or(DEFAULT_INDEX)
            }
        }
    }

    /// `from_year` 가격의 비용을 `to_year` 가격으로 환산한다.
    pub fn escalate(&self, cost: f64, from_year: i32, to_year: i32) -> f64 {
        cost * self.index_for_year(to_year) / self.index_for_year(from_year)
    }

    /// 기준연도(2017) 상관식 비용을 `to_year` 가격으로 환산한다.
    pub fn escalate_from_base(&self, cost: f64, to_year: i32) -> f64 {
        self.escalate(cost, BASE_YEAR, to_year)
    }
}

fn lookup(year: i32) -> Option<f64> {
    CEPCI_BY_YEAR
        .iter()
        .find(|e| e.year == year)
        .map(|e| e.index)
}

/// 기본 조회기로 연도별 지수를 얻는다.
pub fn index_for_year(year: i32) -> f64 {
    EscalationTable::default().index_for_year(year)
}
