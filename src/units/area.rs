// 면적 단위. 내부 기준은 제곱미터(sqm)이다.
pub(crate) const AREA_FACTORS: &[(&str, f64)] = &[
    ("sqm", 1.0),
    ("sqft", 0.092903),
    ("sqcm", 0.0001),
    ("sqin", 0.00064516),
    ("sqmile", 2589988.11),
    ("sqmm", 0.000001),
];
