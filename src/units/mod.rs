//! 단위 테이블과 환산 규칙 레지스트리.
//!
//! 물리량마다 (1) 시뮬레이터 기준 테이블의 단위 칸 목록과 (2) 단위 기호별
//! SI 환산 규칙을 제공한다. 레지스트리는 처음 접근할 때 한 번만 만들어지며
//! 이후에는 읽기 전용이다.

pub mod area;
pub mod composition;
pub mod density;
pub mod energy;
pub mod flow;
pub mod mass;
pub mod pressure;
pub mod table;
pub mod temperature;
pub mod time;
pub mod velocity;
pub mod volume;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::conversion::ConversionError;
use crate::quantity::QuantityKind;

pub use pressure::{is_gauge_pressure_unit, pressure_kind, GaugeRule, PressureKind, VacuumRule};
pub use table::UnitSlot;
pub use temperature::{from_kelvin, to_kelvin, TemperatureUnit};

/// 단위 하나를 SI 기준 단위로 옮기는 규칙.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ConversionRule {
    /// SI 값 = 값 x 계수
    Scalar(f64),
    /// 아핀 온도 변환
    Temperature(TemperatureUnit),
    /// 게이지 압력: 오프셋을 더해 절대압 단위로 바꾼 뒤 그 계수를 적용
    Gauge(GaugeRule),
    /// 진공도: 대기압에서 뺀 절대압 단위 값에 그 계수를 적용
    Vacuum(VacuumRule),
}

impl ConversionRule {
    /// 스칼라 계수. 특수 규칙이면 `None`.
    pub fn factor(&self) -> Option<f64> {
        match self {
            ConversionRule::Scalar(f) => Some(*f),
            _ => None,
        }
    }

    pub fn is_special(&self) -> bool {
        !matches!(self, ConversionRule::Scalar(_))
    }
}

/// 물리량별 단위 칸과 환산 규칙을 묶은 읽기 전용 레지스트리.
#[derive(Debug)]
pub struct UnitRegistry {
    rules: HashMap<QuantityKind, HashMap<&'static str, ConversionRule>>,
    // 물리량 없이 기호만으로 찾을 때 쓰며, 열 순서상 먼저 등록된 규칙이 남는다.
    by_symbol: HashMap<&'static str, ConversionRule>,
    slots: HashMap<QuantityKind, Vec<UnitSlot>>,
}

static REGISTRY: Lazy<UnitRegistry> = Lazy::new(UnitRegistry::build);

/// 프로세스 전체에서 공유하는 레지스트리.
pub fn registry() -> &'static UnitRegistry {
    &REGISTRY
}

fn scalar_factors(quantity: QuantityKind) -> &'static [(&'static str, f64)] {
    match quantity {
        QuantityKind::Area => area::AREA_FACTORS,
        QuantityKind::Composition => composition::COMPOSITION_FACTORS,
        QuantityKind::Density | QuantityKind::MassDensity => density::DENSITY_FACTORS,
        QuantityKind::Energy | QuantityKind::Work | QuantityKind::Heat => energy::ENERGY_FACTORS,
        QuantityKind::Flow | QuantityKind::MassFlow => flow::MASS_FLOW_FACTORS,
        QuantityKind::MoleFlow => flow::MOLE_FLOW_FACTORS,
        QuantityKind::VolumeFlow => flow::VOLUME_FLOW_FACTORS,
        QuantityKind::Mass => mass::MASS_FACTORS,
        QuantityKind::Power | QuantityKind::ElecPower => energy::POWER_FACTORS,
        QuantityKind::Pressure => pressure::PRESSURE_FACTORS,
        QuantityKind::Temperature => &[],
        QuantityKind::Time => time::TIME_FACTORS,
        QuantityKind::Velocity => velocity::VELOCITY_FACTORS,
        QuantityKind::Volume => volume::VOLUME_FACTORS,
        QuantityKind::MoleDensity => density::MOLE_DENSITY_FACTORS,
        QuantityKind::MoleVolume => density::MOLE_VOLUME_FACTORS,
        QuantityKind::Ua => energy::UA_FACTORS,
    }
}

impl UnitRegistry {
    fn build() -> Self {
        let mut rules = HashMap::new();
        let mut by_symbol = HashMap::new();
        let mut slots = HashMap::new();

        for quantity in QuantityKind::ALL {
            let mut map: HashMap<&'static str, ConversionRule> = scalar_factors(quantity)
                .iter()
                .map(|(symbol, factor)| (*symbol, ConversionRule::Scalar(*factor)))
                .collect();
            match quantity {
                QuantityKind::Temperature => {
                    for unit in temperature::TEMPERATURE_UNITS {
                        map.insert(unit.symbol(), ConversionRule::Temperature(unit));
                    }
                }
                QuantityKind::Pressure => {
                    for (symbol, rule) in pressure::GAUGE_RULES {
                        map.insert(*symbol, ConversionRule::Gauge(*rule));
                    }
                    for (symbol, rule) in pressure::VACUUM_RULES {
                        map.insert(*symbol, ConversionRule::Vacuum(*rule));
                    }
                }
                _ => {}
            }

            // 전역 조회는 열 순서상 처음 나온 물리량의 규칙을 쓴다.
            for (symbol, rule) in &map {
                by_symbol.entry(*symbol).or_insert(*rule);
            }

            slots.insert(quantity, table::slots_for(quantity));
            rules.insert(quantity, map);
        }

        Self {
            rules,
            by_symbol,
            slots,
        }
    }

    /// 물리량 문맥에서 단위 기호의 환산 규칙을 찾는다.
    pub fn rule_for(
        &self,
        quantity: QuantityKind,
        symbol: &str,
    ) -> Result<ConversionRule, ConversionError> {
        self.rules
            .get(&quantity)
            .and_then(|m| m.get(symbol))
            .copied()
            .ok_or_else(|| ConversionError::UnknownUnit {
                unit: symbol.to_string(),
                quantity: Some(quantity),
            })
    }

    /// 물리량 없이 기호만으로 규칙을 찾는다.
    ///
    /// 온도(K, C, F, R)와 게이지 압력 기호는 특수 규칙을 돌려준다.
    pub fn factor_for(&self, symbol: &str) -> Result<ConversionRule, ConversionError> {
        self.by_symbol
            .get(symbol)
            .copied()
            .ok_or_else(|| ConversionError::UnknownUnit {
                unit: symbol.to_string(),
                quantity: None,
            })
    }

    /// 기준 테이블의 단위 칸(빈 칸 제외)을 순서대로 돌려준다.
    pub fn units_for(&self, quantity: QuantityKind) -> &[UnitSlot] {
        self.slots.get(&quantity).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn unit_at(&self, quantity: QuantityKind, slot: u32) -> Option<&'static str> {
        self.units_for(quantity)
            .iter()
            .find(|s| s.slot == slot)
            .map(|s| s.symbol)
    }

    /// 기호가 처음 나오는 칸 번호.
    pub fn slot_of(&self, quantity: QuantityKind, symbol: &str) -> Option<u32> {
        self.units_for(quantity)
            .iter()
            .find(|s| s.symbol == symbol)
            .map(|s| s.slot)
    }

    /// 물리량에 등록된 모든 기호(테이블 칸에 없는 별칭 포함).
    pub fn symbols_for(&self, quantity: QuantityKind) -> Vec<&'static str> {
        let mut symbols: Vec<&'static str> = self
            .rules
            .get(&quantity)
            .map(|m| m.keys().copied().collect())
            .unwrap_or_default();
        symbols.sort_unstable();
        symbols
    }
}

/// 물리량의 SI 기준 단위.
pub fn si_unit_for(quantity: QuantityKind) -> &'static str {
    quantity.si_unit()
}

/// 이름으로 주어진 물리량의 SI 기준 단위. 모르는 이름이면 `UnknownQuantityType`.
pub fn si_unit_for_name(quantity: &str) -> Result<&'static str, ConversionError> {
    let kind: QuantityKind = quantity.parse()?;
    Ok(kind.si_unit())
}

/// 기호만으로 환산 규칙을 찾는다. [`UnitRegistry::factor_for`] 참고.
pub fn factor_for(symbol: &str) -> Result<ConversionRule, ConversionError> {
    registry().factor_for(symbol)
}

pub fn rule_for(quantity: QuantityKind, symbol: &str) -> Result<ConversionRule, ConversionError> {
    registry().rule_for(quantity, symbol)
}

pub fn units_for(quantity: QuantityKind) -> &'static [UnitSlot] {
    registry().units_for(quantity)
}

pub fn unit_at(quantity: QuantityKind, slot: u32) -> Option<&'static str> {
    registry().unit_at(quantity, slot)
}

pub fn slot_of(quantity: QuantityKind, symbol: &str) -> Option<u32> {
    registry().slot_of(quantity, symbol)
}
