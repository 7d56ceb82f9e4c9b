// 질량 단위. 내부 기준은 kg이다.
pub(crate) const MASS_FACTORS: &[(&str, f64)] = &[
    ("kg", 1.0),
    ("lb", 0.453592),
    ("gm", 0.001),
    ("ton", 1000.0),
    ("Mlb", 453592.0),
    ("tonne", 1000.0),
    ("L-ton", 1016.05),
    ("MMlb", 453592000.0),
];
