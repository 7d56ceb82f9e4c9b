use serde::{Deserialize, Serialize};

/// 게이지 압력 단위를 절대압으로 바꾸는 규칙.
///
/// `offset`은 게이지 단위 자체의 척도로 표현한 대기압이며, 더한 뒤에는
/// `absolute_unit`의 환산 계수로 Pa까지 변환한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeRule {
    pub offset: f64,
    pub absolute_unit: &'static str,
}

/// 진공도(대기압 기준 아래로 잰 값) 단위 규칙. 절대압 = `atmosphere` - 읽음값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VacuumRule {
    pub atmosphere: f64,
    pub absolute_unit: &'static str,
}

/// 게이지/절대 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureKind {
    Gauge,
    Absolute,
    Vacuum,
}

// 절대압 단위, Pa(N/sqm) 기준
pub(crate) const PRESSURE_FACTORS: &[(&str, f64)] = &[
    ("N/sqm", 1.0),
    ("PsIa", 6894.76),
    ("atm", 101325.0),
    ("lbf/sqft", 47.8803),
    ("bar", 100000.0),
    ("torr", 133.322),
    ("in-water", 249.089),
    ("kg/sqcm", 98066.5),
    ("mmHg", 133.322),
    ("kPa", 1000.0),
    ("mm-water", 9.80665),
    ("mbar", 100.0),
    ("lb/ft-sqsec", 1.48816),
    ("kg/m-sqsec", 1.0),
    ("pa", 1.0),
    ("MiPa", 1000000.0),
    ("in-Hg", 3386.39),
    ("in-water-60F", 248.84),
    ("psi", 6894.76),
    ("mm-water-60F", 9.79685),
    ("bara", 100000.0),
];

pub(crate) const GAUGE_RULES: &[(&str, GaugeRule)] = &[
    ("psig", gauge(14.696, "PsIa")),
    ("atmg", gauge(1.0, "atm")),
    ("barg", gauge(1.01325, "bar")),
    ("Pag", gauge(101325.0, "pa")),
    ("kPag", gauge(101.325, "kPa")),
    ("MPag", gauge(0.101325, "MiPa")),
    ("mbarg", gauge(1013.25, "mbar")),
    ("kg/sqcmg", gauge(1.033227, "kg/sqcm")),
    ("in-water-g", gauge(406.782, "in-water")),
    ("in-water-60F-g", gauge(407.189, "in-water-60F")),
    ("mm-water-g", gauge(10332.27, "mm-water")),
    ("mm-water-60F-g", gauge(10342.6, "mm-water-60F")),
];

pub(crate) const VACUUM_RULES: &[(&str, VacuumRule)] = &[
    ("mmHg-vac", vacuum(760.0, "mmHg")),
    ("in-Hg-vac", vacuum(29.9213, "in-Hg")),
    ("in-water-vac", vacuum(406.782, "in-water")),
    ("in-water-60F-vac", vacuum(407.189, "in-water-60F")),
];

const fn gauge(offset: f64, absolute_unit: &'static str) -> GaugeRule {
    GaugeRule {
        offset,
        absolute_unit,
    }
}

const fn vacuum(atmosphere: f64, absolute_unit: &'static str) -> VacuumRule {
    VacuumRule {
        atmosphere,
        absolute_unit,
    }
}

impl GaugeRule {
    /// 게이지 값을 같은 척도의 절대압 값으로 바꾼다.
    pub fn to_absolute(&self, value: f64) -> f64 {
        value + self.offset
    }
}

impl VacuumRule {
    pub fn to_absolute(&self, value: f64) -> f64 {
        self.atmosphere - value
    }
}

/// 단위 기호로 게이지/절대/진공 여부를 판정한다. 모르는 기호는 절대압으로 본다.
pub fn pressure_kind(symbol: &str) -> PressureKind {
    if GAUGE_RULES.iter().any(|(s, _)| *s == symbol) {
        PressureKind::Gauge
    } else if VACUUM_RULES.iter().any(|(s, _)| *s == symbol) {
        PressureKind::Vacuum
    } else {
        PressureKind::Absolute
    }
}

/// 흔히 쓰는 게이지 압력 표기인지 대소문자 구분 없이 확인한다.
///
/// 시뮬레이터 데이터에서 단위가 빠진 경우(`None`)는 게이지로 보지 않는다.
pub fn is_gauge_pressure_unit(unit: Option<&str>) -> bool {
    const GAUGE_SPELLINGS: [&str; 5] = ["barg", "psig", "kpag", "mpag", "mbarg"];
    match unit {
        Some(u) => {
            let lower = u.to_lowercase();
            GAUGE_SPELLINGS.contains(&lower.as_str())
        }
        None => false,
    }
}
