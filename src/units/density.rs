// 밀도(DENSITY, MASS-DENSITY 공용). 내부 기준은 kg/cum이다.
pub(crate) const DENSITY_FACTORS: &[(&str, f64)] = &[
    ("kg/cum", 1.0),
    ("lb/cuft", 16.0185),
    ("gm/cc", 1000.0),
    ("lb/gal", 119.826),
    ("gm/cum", 0.001),
    ("gm/ml", 1000.0),
    ("lb/bbl", 2.85301),
    ("gm/l", 1.0),
    ("mg/l", 0.001),
    ("mg/cc", 1.0),
    ("mg/cum", 0.000001),
];

// 몰 밀도. 내부 기준은 kmol/cum이다.
pub(crate) const MOLE_DENSITY_FACTORS: &[(&str, f64)] = &[
    ("kmol/cum", 1.0),
    ("lbmol/cuft", 16.0185),
    ("mol/cc", 1000.0),
    ("lbmol/gal", 119.826),
    ("mol/l", 1.0),
    ("mmol/cc", 1.0),
    ("mmol/l", 0.001),
];

// 몰 체적. 내부 기준은 cum/kmol이다.
pub(crate) const MOLE_VOLUME_FACTORS: &[(&str, f64)] = &[
    ("cum/kmol", 1.0),
    ("cuft/lbmol", 0.0624280),
    ("cc/mol", 0.001),
    ("ml/mol", 0.001),
    ("bbl/mscf", 0.158987),
];
