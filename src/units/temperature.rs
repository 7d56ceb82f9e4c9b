use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다. 켈빈 외에는 모두 아핀(affine) 변환이 필요하다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

impl TemperatureUnit {
    /// 시뮬레이터 단위 기호(`K`, `C`, `F`, `R`)로부터 단위를 찾는다.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "K" => Some(TemperatureUnit::Kelvin),
            "C" => Some(TemperatureUnit::Celsius),
            "F" => Some(TemperatureUnit::Fahrenheit),
            "R" => Some(TemperatureUnit::Rankine),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Rankine => "R",
        }
    }
}

pub(crate) const TEMPERATURE_UNITS: [TemperatureUnit; 4] = [
    TemperatureUnit::Kelvin,
    TemperatureUnit::Celsius,
    TemperatureUnit::Fahrenheit,
    TemperatureUnit::Rankine,
];

/// 주어진 값을 켈빈으로 변환한다.
pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Celsius => value + 273.15,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + 273.15,
        TemperatureUnit::Rankine => value * 5.0 / 9.0,
    }
}

/// 켈빈 값을 원하는 단위로 변환한다.
pub fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Celsius => value_k - 273.15,
        TemperatureUnit::Fahrenheit => (value_k - 273.15) * 9.0 / 5.0 + 32.0,
        TemperatureUnit::Rankine => value_k * 9.0 / 5.0,
    }
}
