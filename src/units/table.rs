use crate::quantity::QuantityKind;

/// 기준 단위 테이블의 한 칸. `slot`은 시뮬레이터 unit-of-measure 인덱스(1부터)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSlot {
    pub slot: u32,
    pub symbol: &'static str,
}

/// 물리량 열의 원본 칸들을 빈 칸을 걸러낸 순서 있는 목록으로 만든다.
pub(crate) fn slots_for(quantity: QuantityKind) -> Vec<UnitSlot> {
    non_blank_slots(REFERENCE_TABLE[quantity.table_column() as usize - 1])
}

// 빈 칸을 버려도 남은 칸은 원래 칸 번호를 유지한다.
fn non_blank_slots(column: &[&'static str]) -> Vec<UnitSlot> {
    column
        .iter()
        .enumerate()
        .filter(|(_, symbol)| !symbol.trim().is_empty())
        .map(|(idx, symbol)| UnitSlot {
            slot: idx as u32 + 1,
            symbol: *symbol,
        })
        .collect()
}

// 시뮬레이터 단위 세트 테이블. 열 순서는 `QuantityKind::ALL`과 같고,
// 같은 기호가 한 열에 여러 번 나올 수 있다(예: AREA의 1번과 3번 칸).
static REFERENCE_TABLE: [&[&str]; 22] = [
    // AREA
    &["sqm", "sqft", "sqm", "sqcm", "sqin", "sqmile", "sqmm"],
    // COMPOSITION
    &["mol-fr", "mol-fr", "mol-fr", "mass-fr"],
    // DENSITY
    &["kg/cum", "lb/cuft", "gm/cc", "lb/gal", "gm/cum", "gm/ml", "lb/bbl"],
    // ENERGY
    &[
        "J", "Btu", "cal", "kcal", "kWhr", "ft-lbf", "GJ", "kJ", "N-m", "MJ", "Mcal", "Gcal",
        "Mbtu", "MMBtu", "hp-hr", "MMkcal",
    ],
    // FLOW
    &[
        "kg/sec",
        "lb/hr",
        "kg/hr",
        "lb/sec",
        "Mlb/hr",
        "tons/day",
        "Mcfh",
        "tonne/hr",
        "lb/day",
        "kg/day",
        "tons/hr",
        "kg/min",
        "kg/year",
        "gm/min",
        "gm/hr",
        "gm/day",
        "Mgm/hr",
        "Ggm/hr",
        "Mgm/day",
        "Ggm/day",
        "lb/min",
        "MMlb/hr",
        "Mlb/day",
        "MMlb/day",
        "lb/year",
        "Mlb/year",
        "MMIb/year",
        "tons/min",
        "Mtons/year",
        "MMtons/year",
        "L-tons/min",
        "L-tons/hr",
        "L-tons/day",
        "ML-tons/year",
        "MML-tons/year",
        "ktonne/year",
        "kg/oper-year",
        "lb/oper-year",
        "Mlb/oper-year",
        "MIMIb/oper-year",
        "Mtons/oper-year",
        "MMtons/oper-year",
        "ML-tons/oper-year",
        "MML-tons/oper-year",
        "ktonne/oper-year",
    ],
    // MASS-FLOW
    &[
        "kg/sec",
        "lb/hr",
        "kg/hr",
        "lb/sec",
        "Mlb/hr",
        "tons/day",
        "gm/sec",
        "tonne/hr",
        "lb/day",
        "kg/day",
        "tons/year",
        "tons/hr",
        "tonne/day",
        "tonne/year",
        "kg/min",
        "kg/year",
        "gm/min",
        "gm/hr",
        "gm/day",
        "Mgm/hr",
        "Ggm/hr",
        "Mgm/day",
        "Ggm/day",
        "lb/min",
        "MMlb/hr",
        "Mlb/day",
        "MMlb/day",
        "lb/year",
        "Mlb/year",
        "MMlb/year",
        "tons/min",
        "Mtons/year",
        "MMtons/year",
        "L-tons/min",
        "L-tons/hr",
        "L-tons/day",
        "ML-tons/year",
        "MML-tons/year",
        "ktonne/year",
        "tons/oper-year",
        "tonne/oper-year",
        "kg/oper-year",
        "lb/oper-year",
        "Mlb/oper-year",
        "MMlb/oper-year",
        "Mtons/oper-year",
        "MMtons/oper-year",
        "ML-tons/oper-year",
        "MML-tons/oper-year",
        "ktonne/oper-year",
    ],
    // MOLE-FLOW
    &[
        "kmol/sec",
        "lbmol/hr",
        "kmol/hr",
        "MMscfh",
        "MMscmh",
        "mol/sec",
        "lbmol/sec",
        "scmh",
        "bmol/day",
        "kmol/day",
        "MMscfd",
        "Mlscfd",
        "scfm",
        "mol/min",
        "kmol/khr",
        "kmol/Mhr",
        "mol/hr",
        "Mmol/hr",
        "Mlbmol/hr",
        "lbmol/Mhr",
        "lbmol/MMhr",
        "Mscfm",
        "scfh",
        "scfd",
        "ncmh",
        "ncmd",
        "ACFM",
        "kmol/min",
        "kmol/week",
        "kmol/month",
        "kmol/year",
        "kmol/oper-year",
        "lbmol/min",
    ],
    // VOLUME-FLOW
    &[
        "cum/sec",
        "m3/s",
        "m^3/s",
        "cuft/hr",
        "l/min",
        "gal/min",
        "gal/hr",
        "bbl/day",
        "cum/hr",
        "m3/h",
        "m^3/h",
        "cuft/min",
        "bbl/hr",
        "cuft/sec",
        "cum/day",
        "cum/year",
        "l/hr",
        "kbbl/day",
        "MMcuft/hr",
        "MMcuft/day",
        "Mcuft/day",
        "l/sec",
        "l/day",
        "cum/min",
        "kcum/sec",
        "kcum/hr",
        "kcum/day",
        "Mcum/sec",
        "Mcum/hr",
        "Mcum/day",
        "ACFM",
        "cuft/day",
        "Mcuft/min",
        "Mcuft/hr",
        "MMcuft/hr",
        "Mgal/min",
        "MMgal/min",
        "Mgal/hr",
        "MMgal/hr",
        "Mbbl/hr",
        "MMbbl/hr",
        "Mbbl/day",
        "MMbbl/day",
        "cum/oper-year",
    ],
    // MASS
    &["kg", "lb", "kg", "gm", "ton", "Mlb", "tonne", "L-ton", "MMlb"],
    // POWER
    &[
        "Watt",
        "W",
        "hp",
        "kW",
        "Btu/hr",
        "cal/sec",
        "ft-lbf/sec",
        "MIW",
        "GW",
        "MJ/hr",
        "kcal/hr",
        "Gcal/hr",
        "MMBtu/hr",
        "MBtu/hr",
        "Mhp",
    ],
    // PRESSURE
    &[
        "N/sqm",
        "PsIa",
        "atm",
        "lbf/sqft",
        "bar",
        "torr",
        "in-water",
        "kg/sqcm",
        "mmHg",
        "kPa",
        "mm-water",
        "mbar",
        "psig",
        "atmg",
        "barg",
        "kg/sqcmg",
        "lb/ft-sqsec",
        "kg/m-sqsec",
        "pa",
        "MiPa",
        "Pag",
        "kPag",
        "MPag",
        "mbarg",
        "in-Hg",
        "mmHg-vac",
        "in-Hg-vac",
        "in-water-60F",
        "in-water-vac",
        "in-water-60F-vac",
        "in-water-g",
        "in-water-60F-g",
        "mm-water-g",
        "mm-water-60F-g",
        "psi",
        "mm-water-60F",
        "bara",
    ],
    // TEMPERATURE
    &["K", "F", "K", "C", "R"],
    // TIME
    &["sec", "hr", "hr", "day", "min", "year", "month", "week", "nsec", "oper-year"],
    // VELOCITY
    &[
        "m/sec", "ft/sec", "m/sec", "mile/hr", "km/hr", "ft/min", "mm/day", "mm/hr", "mm/day30",
        "in/day",
    ],
    // VOLUME
    &[
        "cum", "cuft", "l", "cuin", "gal", "bbl", "cc", "kcum", "Mcum", "Mcuft", "MMcuft", "ml",
        "kl", "MMl", "Mgal", "MMgal", "UKgal", "MUKgal", "MMUKgal", "Mbbl", "MMbbl", "kbbl", "cuyd",
    ],
    // MOLE-DENSITY
    &["kmol/cum", "lbmol/cuft", "mol/cc", "lbmol/gal", "mol/l", "mmol/cc", "mmol/l"],
    // MASS-DENSITY
    &["kg/cum", "lb/cuft", "gm/cc", "lb/gal", "gm/cum", "gm/ml", "gm/l", "mg/l", "mg/cc", "mg/cum"],
    // MOLE-VOLUME
    &["cum/kmol", "cuft/lbmol", "cc/mol", "ml/mol", "bbl/mscf"],
    // ELEC-POWER
    &["Watt", "kW", "kW", "MW", "GW"],
    // UA
    &[
        "J/sec-K",
        "Btu/hr-R",
        "cal/sec-K",
        "kJ/sec-K",
        "kcal/sec-K",
        "kcal/hr-K",
        "Btu/hr-F",
        "kW/k",
    ],
    // WORK
    &["J", "hp-hr", "kW-hr", "ft-lbf", "kJ", "N-m", "MJ", "Mbtu", "MMBtu", "Mcal", "Gcal"],
    // HEAT
    &[
        "J", "Btu", "cal", "kcal", "Mmkcal", "MMBtu", "Pcu", "MMPcu", "kJ", "GJ", "N-m", "MJ",
        "Mcal", "Gcal", "Mbtu", "kW-hr",
    ],
];
