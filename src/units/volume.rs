// 체적 단위. 내부 기준은 cum(m³)이다.
pub(crate) const VOLUME_FACTORS: &[(&str, f64)] = &[
    ("cum", 1.0),
    ("cuft", 0.0283168),
    ("l", 0.001),
    ("cuin", 1.63871e-05),
    ("gal", 0.00378541),
    ("bbl", 0.158987),
    ("cc", 0.000001),
    ("kcum", 1000.0),
    ("Mcum", 1000000.0),
    ("Mcuft", 28316.8),
    ("MMcuft", 28316800.0),
    ("ml", 0.000001),
    ("kl", 1.0),
    ("MMl", 1000000.0),
    ("Mgal", 3785.41),
    ("MMgal", 3785410.0),
    ("UKgal", 0.00454609),
    ("MUKgal", 4546.09),
    ("MMUKgal", 4546090.0),
    ("Mbbl", 158987.0),
    ("MMbbl", 158987000.0),
    ("kbbl", 158.987),
    ("cuyd", 0.764555),
];
