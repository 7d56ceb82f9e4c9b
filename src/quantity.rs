use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::conversion::ConversionError;

/// 시뮬레이터가 다루는 물리량 종류를 나타낸다.
///
/// 선언 순서는 기준 단위 테이블의 열 순서(1부터 시작)와 같다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QuantityKind {
    #[serde(rename = "AREA")]
    Area,
    #[serde(rename = "COMPOSITION")]
    Composition,
    #[serde(rename = "DENSITY")]
    Density,
    #[serde(rename = "ENERGY")]
    Energy,
    #[serde(rename = "FLOW")]
    Flow,
    #[serde(rename = "MASS-FLOW")]
    MassFlow,
    #[serde(rename = "MOLE-FLOW")]
    MoleFlow,
    #[serde(rename = "VOLUME-FLOW")]
    VolumeFlow,
    #[serde(rename = "MASS")]
    Mass,
    #[serde(rename = "POWER")]
    Power,
    #[serde(rename = "PRESSURE")]
    Pressure,
    #[serde(rename = "TEMPERATURE")]
    Temperature,
    #[serde(rename = "TIME")]
    Time,
    #[serde(rename = "VELOCITY")]
    Velocity,
    #[serde(rename = "VOLUME")]
    Volume,
    #[serde(rename = "MOLE-DENSITY")]
    MoleDensity,
    #[serde(rename = "MASS-DENSITY")]
    MassDensity,
    #[serde(rename = "MOLE-VOLUME")]
    MoleVolume,
    #[serde(rename = "ELEC-POWER")]
    ElecPower,
    #[serde(rename = "UA")]
    Ua,
    #[serde(rename = "WORK")]
    Work,
    #[serde(rename = "HEAT")]
    Heat,
}

impl QuantityKind {
    /// 기준 단위 테이블 열 순서대로 나열한 전체 물리량.
    pub const ALL: [QuantityKind; 22] = [
        QuantityKind::Area,
        QuantityKind::Composition,
        QuantityKind::Density,
        QuantityKind::Energy,
        QuantityKind::Flow,
        QuantityKind::MassFlow,
        QuantityKind::MoleFlow,
        QuantityKind::VolumeFlow,
        QuantityKind::Mass,
        QuantityKind::Power,
        QuantityKind::Pressure,
        QuantityKind::Temperature,
        QuantityKind::Time,
        QuantityKind::Velocity,
        QuantityKind::Volume,
        QuantityKind::MoleDensity,
        QuantityKind::MassDensity,
        QuantityKind::MoleVolume,
        QuantityKind::ElecPower,
        QuantityKind::Ua,
        QuantityKind::Work,
        QuantityKind::Heat,
    ];

    /// 시뮬레이터에서 쓰는 대문자 이름(`MASS-FLOW` 등).
    pub fn name(self) -> &'static str {
        match self {
            QuantityKind::Area => "AREA",
            QuantityKind::Composition => "COMPOSITION",
            QuantityKind::Density => "DENSITY",
            QuantityKind::Energy => "ENERGY",
            QuantityKind::Flow => "FLOW",
            QuantityKind::MassFlow => "MASS-FLOW",
            QuantityKind::MoleFlow => "MOLE-FLOW",
            QuantityKind::VolumeFlow => "VOLUME-FLOW",
            QuantityKind::Mass => "MASS",
            QuantityKind::Power => "POWER",
            QuantityKind::Pressure => "PRESSURE",
            QuantityKind::Temperature => "TEMPERATURE",
            QuantityKind::Time => "TIME",
            QuantityKind::Velocity => "VELOCITY",
            QuantityKind::Volume => "VOLUME",
            QuantityKind::MoleDensity => "MOLE-DENSITY",
            QuantityKind::MassDensity => "MASS-DENSITY",
            QuantityKind::MoleVolume => "MOLE-VOLUME",
            QuantityKind::ElecPower => "ELEC-POWER",
            QuantityKind::Ua => "UA",
            QuantityKind::Work => "WORK",
            QuantityKind::Heat => "HEAT",
        }
    }

    /// 물리량별 SI 기준 단위 기호. 이 단위의 환산 계수는 항상 1.0이다.
    pub fn si_unit(self) -> &'static str {
        match self {
            QuantityKind::Area => "sqm",
            QuantityKind::Composition => "mol-fr",
            QuantityKind::Density | QuantityKind::MassDensity => "kg/cum",
            QuantityKind::Energy | QuantityKind::Work | QuantityKind::Heat => "J",
            QuantityKind::Flow | QuantityKind::MassFlow => "kg/sec",
            QuantityKind::MoleFlow => "kmol/sec",
            QuantityKind::VolumeFlow => "cum/sec",
            QuantityKind::Mass => "kg",
            QuantityKind::Power | QuantityKind::ElecPower => "Watt",
            QuantityKind::Pressure => "N/sqm",
            QuantityKind::Temperature => "K",
            QuantityKind::Time => "sec",
            QuantityKind::Velocity => "m/sec",
            QuantityKind::Volume => "cum",
            QuantityKind::MoleDensity => "kmol/cum",
            QuantityKind::MoleVolume => "cum/kmol",
            QuantityKind::Ua => "J/sec-K",
        }
    }

    /// 기준 단위 테이블의 열 번호(1부터).
    pub fn table_column(self) -> u32 {
        self as u32 + 1
    }

    /// 열 번호로 물리량을 찾는다.
    pub fn from_table_column(column: u32) -> Option<Self> {
        let idx = column.checked_sub(1)? as usize;
        Self::ALL.get(idx).copied()
    }

    /// 시뮬레이터 Units-Sets 트리에서 쓰는 unit-type 인덱스.
    pub fn simulator_index(self) -> u32 {
        match self {
            QuantityKind::Area => 1,
            QuantityKind::Composition => 2,
            QuantityKind::Density => 3,
            QuantityKind::Energy => 5,
            QuantityKind::Flow => 9,
            QuantityKind::MassFlow => 10,
            QuantityKind::MoleFlow => 11,
            QuantityKind::VolumeFlow => 12,
            QuantityKind::Mass => 18,
            QuantityKind::Power => 19,
            QuantityKind::Pressure => 20,
            QuantityKind::Temperature => 22,
            QuantityKind::Time => 24,
            QuantityKind::Velocity => 25,
            QuantityKind::Volume => 27,
            QuantityKind::MoleDensity => 37,
            QuantityKind::MassDensity => 38,
            QuantityKind::MoleVolume => 43,
            QuantityKind::ElecPower => 47,
            QuantityKind::Ua => 50,
            QuantityKind::Work => 52,
            QuantityKind::Heat => 53,
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuantityKind {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|q| q.name() == s)
            .ok_or_else(|| ConversionError::UnknownQuantityType(s.to_string()))
    }
}

/// SI 기준 단위로 환산된 값.
///
/// `unit`은 항상 요청한 물리량의 SI 기준 단위 기호이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub value: f64,
    pub unit: String,
}

impl ConversionResult {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}
