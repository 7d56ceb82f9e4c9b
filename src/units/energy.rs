// 에너지(ENERGY, WORK, HEAT 공용). 내부 기준은 J이다.
pub(crate) const ENERGY_FACTORS: &[(&str, f64)] = &[
    ("J", 1.0),
    ("Btu", 1055.06),
    ("cal", 4.184),
    ("kcal", 4184.0),
    ("kWhr", 3600000.0),
    ("ft-lbf", 1.35582),
    ("GJ", 1000000000.0),
    ("kJ", 1000.0),
    ("N-m", 1.0),
    ("MJ", 1000000.0),
    ("Mcal", 4184000.0),
    ("Gcal", 4184000000.0),
    ("Mbtu", 1055060000.0),
    ("MMBtu", 1055060000000.0),
    ("hp-hr", 2684520.0),
    ("MMkcal", 4184000000000.0),
    ("Mmkcal", 4184000000000000.0),
    ("Pcu", 1055.06),
    ("MMPcu", 1055060000000.0),
    ("kW-hr", 3600000.0),
];

// 동력(POWER, ELEC-POWER 공용). 내부 기준은 Watt이다.
pub(crate) const POWER_FACTORS: &[(&str, f64)] = &[
    ("Watt", 1.0),
    ("W", 1.0),
    ("hp", 745.7),
    ("kW", 1000.0),
    ("Btu/hr", 0.293071),
    ("cal/sec", 4.184),
    ("ft-lbf/sec", 1.35582),
    ("MIW", 1000000.0),
    ("MW", 1000000.0),
    ("GW", 1000000000.0),
    ("MJ/hr", 277.778),
    ("kcal/hr", 1.16222),
    ("Gcal/hr", 1162220.0),
    ("MMBtu/hr", 293071.0),
    ("MBtu/hr", 293.071),
    ("Mhp", 745700000.0),
];

// 총괄 열전달 계수 x 면적(UA). 내부 기준은 J/sec-K이다.
pub(crate) const UA_FACTORS: &[(&str, f64)] = &[
    ("J/sec-K", 1.0),
    ("Btu/hr-R", 0.527527),
    ("cal/sec-K", 4.184),
    ("kJ/sec-K", 1000.0),
    ("kcal/sec-K", 4184.0),
    ("kcal/hr-K", 1.16222),
    ("Btu/hr-F", 0.527527),
    ("kW/k", 1000.0),
];
