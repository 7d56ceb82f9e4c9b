//! 시뮬레이터 단위 값을 SI 기준으로 정규화하는 변환기.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::quantity::{ConversionResult, QuantityKind};
use crate::units::{self, from_kelvin, to_kelvin, ConversionRule, TemperatureUnit};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// 알 수 없는 물리량 이름
    #[error("알 수 없는 물리량: {0}")]
    UnknownQuantityType(String),
    /// 해당 문맥에 없는 단위 기호
    #[error("알 수 없는 단위: {unit}")]
    UnknownUnit {
        unit: String,
        quantity: Option<QuantityKind>,
    },
    /// 스칼라 계수가 아닌 특수 변환이 필요한 단위가 일반 경로로 들어옴
    #[error("특수 변환이 필요한 단위: {unit} ({quantity})")]
    SpecialConversionRequired { unit: String, quantity: QuantityKind },
    /// SI 절대압을 게이지/진공 단위로 되돌리는 변환은 지원하지 않는다
    #[error("SI 값을 게이지/진공 단위로 역변환할 수 없음: {0}")]
    GaugeReverseUnsupported(String),
}

/// 상태가 없는 단위 변환기. 복사해서 여러 스레드에서 그대로 써도 된다.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitConverter;

impl UnitConverter {
    pub fn new() -> Self {
        Self
    }

    /// 값을 물리량의 SI 기준 단위로 변환한다.
    ///
    /// 입력 단위가 이미 SI 단위이면 계수를 곱하지 않고 그대로 돌려준다.
    pub fn convert_to_si(
        &self,
        value: f64,
        from_unit: &str,
        quantity: QuantityKind,
    ) -> Result<ConversionResult, ConversionError> {
        let si_unit = quantity.si_unit();
        if from_unit == si_unit {
            return Ok(ConversionResult::new(value, si_unit));
        }

        if quantity == QuantityKind::Temperature {
            let unit = TemperatureUnit::from_symbol(from_unit).ok_or_else(|| {
                ConversionError::UnknownUnit {
                    unit: from_unit.to_string(),
                    quantity: Some(quantity),
                }
            })?;
            return Ok(ConversionResult::new(to_kelvin(value, unit), si_unit));
        }

        let (value, from_unit) = match lookup_rule(quantity, from_unit)? {
            ConversionRule::Gauge(rule) if quantity == QuantityKind::Pressure => {
                (rule.to_absolute(value), rule.absolute_unit)
            }
            ConversionRule::Vacuum(rule) if quantity == QuantityKind::Pressure => {
                (rule.to_absolute(value), rule.absolute_unit)
            }
            _ => (value, from_unit),
        };

        let factor = scalar_factor(quantity, from_unit)?;
        Ok(ConversionResult::new(value * factor, si_unit))
    }

    /// 물리량을 이름(`PRESSURE` 등)으로 받는 변환.
    pub fn convert_to_si_by_name(
        &self,
        value: f64,
        from_unit: &str,
        quantity: &str,
    ) -> Result<ConversionResult, ConversionError> {
        let kind: QuantityKind = quantity.parse()?;
        self.convert_to_si(value, from_unit, kind)
    }

    /// SI 기준 값을 목표 단위로 변환한다.
    ///
    /// 게이지/진공 압력 단위로의 역변환은 지원하지 않으며 오류를 돌려준다.
    pub fn convert_from_si(
        &self,
        value_si: f64,
        to_unit: &str,
        quantity: QuantityKind,
    ) -> Result<f64, ConversionError> {
        if to_unit == quantity.si_unit() {
            return Ok(value_si);
        }

        if quantity == QuantityKind::Temperature {
            let unit = TemperatureUnit::from_symbol(to_unit).ok_or_else(|| {
                ConversionError::UnknownUnit {
                    unit: to_unit.to_string(),
                    quantity: Some(quantity),
                }
            })?;
            return Ok(from_kelvin(value_si, unit));
        }

        if let ConversionRule::Gauge(_) | ConversionRule::Vacuum(_) = lookup_rule(quantity, to_unit)? {
            return Err(ConversionError::GaugeReverseUnsupported(to_unit.to_string()));
        }

        let factor = scalar_factor(quantity, to_unit)?;
        Ok(value_si / factor)
    }

    pub fn convert_from_si_by_name(
        &self,
        value_si: f64,
        to_unit: &str,
        quantity: &str,
    ) -> Result<f64, ConversionError> {
        let kind: QuantityKind = quantity.parse()?;
        self.convert_from_si(value_si, to_unit, kind)
    }

    /// 동력을 kW로 변환한다. 실패하면 경고를 남기고 `None`.
    pub fn convert_power_to_kw(&self, value: f64, from_unit: Option<&str>) -> Option<f64> {
        let from_unit = from_unit?;
        if matches!(from_unit, "kW" | "kw") {
            return Some(value);
        }
        match self.convert_to_si(value, from_unit, QuantityKind::Power) {
            Ok(res) => Some(res.value / 1000.0),
            Err(err) => {
                warn!(unit = from_unit, "power conversion failed: {err}");
                None
            }
        }
    }

    /// 압력을 bar(절대)로 변환한다. 실패하면 경고를 남기고 `None`.
    pub fn convert_pressure_to_bar(&self, value: f64, from_unit: Option<&str>) -> Option<f64> {
        let from_unit = from_unit?;
        if matches!(from_unit, "bar" | "bara") {
            return Some(value);
        }
        match self.convert_to_si(value, from_unit, QuantityKind::Pressure) {
            Ok(res) => Some(res.value / 100_000.0),
            Err(err) => {
                warn!(unit = from_unit, "pressure conversion failed: {err}");
                None
            }
        }
    }

    /// 체적 유량을 m³/s로 변환한다. 실패하면 경고를 남기고 `None`.
    pub fn convert_flow_to_m3_s(&self, value: f64, from_unit: Option<&str>) -> Option<f64> {
        let from_unit = from_unit?;
        if matches!(from_unit, "m3/s" | "m^3/s" | "cum/sec") {
            return Some(value);
        }
        match self.convert_to_si(value, from_unit, QuantityKind::VolumeFlow) {
            Ok(res) => Some(res.value),
            Err(err) => {
                warn!(unit = from_unit, "flow conversion failed: {err}");
                None
            }
        }
    }

    /// kW 값을 목표 동력 단위로 바꾼다.
    pub fn convert_power_to_target_unit(
        &self,
        value_kw: f64,
        target_unit: &str,
    ) -> Result<f64, ConversionError> {
        if matches!(target_unit, "kW" | "kw") {
            return Ok(value_kw);
        }
        self.convert_from_si(value_kw * 1000.0, target_unit, QuantityKind::Power)
    }

    /// m³/s 값을 목표 체적 유량 단위로 바꾼다.
    pub fn convert_flow_to_target_unit(
        &self,
        value_m3_s: f64,
        target_unit: &str,
    ) -> Result<f64, ConversionError> {
        self.convert_from_si(value_m3_s, target_unit, QuantityKind::VolumeFlow)
    }

    /// 이름 붙은 여러 값을 한 번에 SI로 변환한다.
    ///
    /// 한 항목이 실패해도 나머지는 계속 변환하며, 실패한 항목은 원래 값과 단위를
    /// 그대로 두고 사유를 기록한다.
    pub fn convert_batch<'a, I>(&self, items: I) -> BTreeMap<String, BatchOutcome>
    where
        I: IntoIterator<Item = BatchItem<'a>>,
    {
        let mut out = BTreeMap::new();
        for item in items {
            let outcome = match self.convert_to_si(item.value, item.unit, item.quantity) {
                Ok(res) => BatchOutcome::Converted(res),
                Err(err) => {
                    warn!(parameter = item.name, "failed to convert: {err}");
                    BatchOutcome::Unconverted {
                        value: item.value,
                        unit: item.unit.to_string(),
                        reason: err,
                    }
                }
            };
            out.insert(item.name.to_string(), outcome);
        }
        debug!(count = out.len(), "batch conversion finished");
        out
    }
}

/// 물리량 문맥에서 규칙을 찾는다.
///
/// 문맥에는 없지만 다른 물리량의 특수 단위(온도, 게이지 압력)인 경우는 호출자가
/// 물리량을 잘못 넘긴 것이므로 `SpecialConversionRequired`로 구분한다.
fn lookup_rule(quantity: QuantityKind, unit: &str) -> Result<ConversionRule, ConversionError> {
    units::rule_for(quantity, unit).map_err(|err| match units::factor_for(unit) {
        Ok(rule) if rule.is_special() => ConversionError::SpecialConversionRequired {
            unit: unit.to_string(),
            quantity,
        },
        _ => err,
    })
}

/// 일반 경로에서 스칼라 계수를 꺼낸다. 특수 규칙이면 호출 경로가 잘못된 것이다.
fn scalar_factor(quantity: QuantityKind, unit: &str) -> Result<f64, ConversionError> {
    match lookup_rule(quantity, unit)? {
        ConversionRule::Scalar(factor) => Ok(factor),
        _ => Err(ConversionError::SpecialConversionRequired {
            unit: unit.to_string(),
            quantity,
        }),
    }
}

/// 일괄 변환 입력 한 건.
#[derive(Debug, Clone, Copy)]
pub struct BatchItem<'a> {
    pub name: &'a str,
    pub value: f64,
    pub unit: &'a str,
    pub quantity: QuantityKind,
}

/// 일괄 변환 결과 한 건.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BatchOutcome {
    Converted(ConversionResult),
    Unconverted {
        value: f64,
        unit: String,
        #[serde(serialize_with = "serialize_reason")]
        reason: ConversionError,
    },
}

impl BatchOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self, BatchOutcome::Converted(_))
    }

    /// 변환 여부와 관계없이 (값, 단위) 쌍.
    pub fn value_and_unit(&self) -> (f64, &str) {
        match self {
            BatchOutcome::Converted(res) => (res.value, res.unit.as_str()),
            BatchOutcome::Unconverted { value, unit, .. } => (*value, unit.as_str()),
        }
    }
}

fn serialize_reason<S: serde::Serializer>(
    reason: &ConversionError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(reason)
}

/// 기본 변환기로 SI 변환한다.
pub fn convert_to_si(
    value: f64,
    from_unit: &str,
    quantity: QuantityKind,
) -> Result<ConversionResult, ConversionError> {
    UnitConverter.convert_to_si(value, from_unit, quantity)
}

pub fn convert_from_si(
    value_si: f64,
    to_unit: &str,
    quantity: QuantityKind,
) -> Result<f64, ConversionError> {
    UnitConverter.convert_from_si(value_si, to_unit, quantity)
}

pub fn convert_power_to_kw(value: f64, unit: Option<&str>) -> Option<f64> {
    UnitConverter.convert_power_to_kw(value, unit)
}

pub fn convert_pressure_to_bar(value: f64, unit: Option<&str>) -> Option<f64> {
    UnitConverter.convert_pressure_to_bar(value, unit)
}

pub fn convert_flow_to_m3_s(value: f64, unit: Option<&str>) -> Option<f64> {
    UnitConverter.convert_flow_to_m3_s(value, unit)
}
