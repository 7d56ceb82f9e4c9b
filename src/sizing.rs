//! 장비별 최소/최대 크기 제한.
//!
//! 최소 제한은 너무 작은 장비를 표시하는 데, 최대 제한은 한 대로 표현할 수 없어
//! 병렬/직렬로 나눠야 하는지를 판단하는 데 쓴다. 각 항목은 자신의 단위를 갖는다.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::conversion::UnitConverter;
use crate::quantity::QuantityKind;

/// 크기 제한이 표현되는 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeUnit {
    /// 축동력 [kW]
    #[serde(rename = "kW")]
    Kilowatt,
    /// 체적 유량 [m³/s]
    #[serde(rename = "m3/s")]
    CubicMeterPerSecond,
}

impl SizeUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            SizeUnit::Kilowatt => "kW",
            SizeUnit::CubicMeterPerSecond => "m3/s",
        }
    }

    fn quantity(self) -> QuantityKind {
        match self {
            SizeUnit::Kilowatt => QuantityKind::Power,
            SizeUnit::CubicMeterPerSecond => QuantityKind::VolumeFlow,
        }
    }

    /// 임의 단위의 크기 값을 이 단위로 옮긴다. 모르는 단위면 `None`.
    fn normalize(self, value: f64, unit: &str) -> Option<f64> {
        if unit == self.symbol() {
            return Some(value);
        }
        let converter = UnitConverter;
        let si = converter.convert_to_si(value, unit, self.quantity()).ok()?;
        match self {
            SizeUnit::Kilowatt => Some(si.value / 1000.0),
            SizeUnit::CubicMeterPerSecond => Some(si.value),
        }
    }
}

/// (장비, 세부형식) 한 쌍의 크기 제한.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeLimit {
    pub equipment: String,
    pub subtype: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub unit: SizeUnit,
}

impl SizeLimit {
    pub fn new(
        equipment: &str,
        subtype: &str,
        min: Option<f64>,
        max: Option<f64>,
        unit: SizeUnit,
    ) -> Self {
        Self {
            equipment: equipment.to_string(),
            subtype: subtype.to_string(),
            min,
            max,
            unit,
        }
    }

    fn matches(&self, equipment: &str, subtype: &str) -> bool {
        self.equipment.eq_ignore_ascii_case(equipment) && self.subtype.eq_ignore_ascii_case(subtype)
    }

    fn validate(&self) -> Result<(), SizeLimitError> {
        for bound in [self.min, self.max].into_iter().flatten() {
            if !bound.is_finite() || bound < 0.0 {
                return Err(SizeLimitError::InvalidBound {
                    equipment: self.equipment.clone(),
                    subtype: self.subtype.clone(),
                    value: bound,
                });
            }
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(SizeLimitError::MinAboveMax {
                    equipment: self.equipment.clone(),
                    subtype: self.subtype.clone(),
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}

/// 크기 제한 테이블 구성 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizeLimitError {
    #[error("{equipment}/{subtype}: 최소값 {min}이 최대값 {max}보다 큼")]
    MinAboveMax {
        equipment: String,
        subtype: String,
        min: f64,
        max: f64,
    },
    #[error("{equipment}/{subtype}: 잘못된 제한값 {value}")]
    InvalidBound {
        equipment: String,
        subtype: String,
        value: f64,
    },
}

/// 읽기 전용 크기 제한 테이블.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeLimitTable {
    entries: Vec<SizeLimit>,
}

static BUILTIN: Lazy<SizeLimitTable> = Lazy::new(|| SizeLimitTable {
    entries: BUILTIN_LIMITS
        .iter()
        .map(|(equipment, subtype, min, max, unit)| {
            SizeLimit::new(equipment, subtype, Some(*min), Some(*max), *unit)
        })
        .collect(),
});

impl SizeLimitTable {
    /// 기본 제한 테이블.
    pub fn builtin() -> &'static SizeLimitTable {
        &BUILTIN
    }

    /// 기본 테이블에 덮어쓰기 항목을 반영한 새 테이블을 만든다.
    ///
    /// 같은 (장비, 세부형식)은 교체하고 없는 항목은 추가한다.
    pub fn with_overrides(overrides: &[SizeLimit]) -> Result<Self, SizeLimitError> {
        let mut entries = BUILTIN.entries.clone();
        for limit in overrides {
            limit.validate()?;
            match entries
                .iter_mut()
                .find(|e| e.matches(&limit.equipment, &limit.subtype))
            {
                Some(existing) => *existing = limit.clone(),
                None => entries.push(limit.clone()),
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[SizeLimit] {
        &self.entries
    }

    pub fn find(&self, equipment: &str, subtype: &str) -> Option<&SizeLimit> {
        self.entries.iter().find(|e| e.matches(equipment, subtype))
    }

    /// 장비 크기가 최소 제한을 만족하는지 확인한다.
    ///
    /// 제한이 등록되지 않았거나 크기가 최소값 이상일 때만 통과(`(true, "")`)이다.
    /// `size_unit`이 항목 단위와 다르면 환산해서 비교하고, 환산할 수 없는 단위면 값을 그대로 비교한다.
    pub fn check_minimum(
        &self,
        equipment: &str,
        subtype: &str,
        size_value: f64,
        size_unit: &str,
    ) -> (bool, String) {
        let Some(limit) = self.find(equipment, subtype) else {
            return (true, String::new());
        };
        let Some(min) = limit.min else {
            return (true, String::new());
        };

        let size = match limit.unit.normalize(size_value, size_unit) {
            Some(v) => v,
            None => {
                warn!(
                    equipment,
                    subtype,
                    unit = size_unit,
                    "size unit not convertible to {}; comparing raw value",
                    limit.unit.symbol()
                );
                size_value
            }
        };

        // NaN은 최소값 이상이 아니므로 미달로 본다
        if size.is_nan() || size < min {
            (
                false,
                format!("under limit (min: {min:?} {})", limit.unit.symbol()),
            )
        } else {
            (true, String::new())
        }
    }

    /// 등록된 최대 크기. 제한이 없으면 `None`.
    pub fn get_maximum(&self, equipment: &str, subtype: &str) -> Option<f64> {
        self.find(equipment, subtype).and_then(|l| l.max)
    }
}

/// 기본 테이블로 최소 크기를 확인한다.
pub fn check_minimum(
    equipment: &str,
    subtype: &str,
    size_value: f64,
    size_unit: &str,
) -> (bool, String) {
    SizeLimitTable::builtin().check_minimum(equipment, subtype, size_value, size_unit)
}

/// 기본 테이블의 최대 크기.
pub fn get_maximum(equipment: &str, subtype: &str) -> Option<f64> {
    SizeLimitTable::builtin().get_maximum(equipment, subtype)
}

// (장비, 세부형식, 최소, 최대, 단위)
const BUILTIN_LIMITS: &[(&str, &str, f64, f64, SizeUnit)] = &[
    ("pump", "centrifugal", 1.0, 1000.0, SizeUnit::Kilowatt),
    ("pump", "reciprocating", 0.1, 1000.0, SizeUnit::Kilowatt),
    ("compressor", "centrifugal", 450.0, 10000.0, SizeUnit::Kilowatt),
    ("compressor", "axial", 450.0, 10000.0, SizeUnit::Kilowatt),
    ("compressor", "reciprocating", 450.0, 10000.0, SizeUnit::Kilowatt),
    // 소형 팽창기도 다루도록 하한을 1 kW로 둔다.
    ("turbine", "axial", 1.0, 10000.0, SizeUnit::Kilowatt),
    ("turbine", "radial", 1.0, 10000.0, SizeUnit::Kilowatt),
    ("fan", "centrifugal_radial", 1.0, 100.0, SizeUnit::CubicMeterPerSecond),
    ("fan", "centrifugal_backward", 1.0, 100.0, SizeUnit::CubicMeterPerSecond),
    ("fan", "centrifugal_forward", 1.0, 100.0, SizeUnit::CubicMeterPerSecond),
    ("fan", "axial", 1.0, 100.0, SizeUnit::CubicMeterPerSecond),
];
