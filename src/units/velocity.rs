// 속도 단위. 내부 기준은 m/sec이다.
pub(crate) const VELOCITY_FACTORS: &[(&str, f64)] = &[
    ("m/sec", 1.0),
    ("ft/sec", 0.3048),
    ("mile/hr", 0.44704),
    ("km/hr", 0.277778),
    ("ft/min", 0.00508),
    ("mm/day", 1.15741e-08),
    ("mm/hr", 2.77778e-07),
    ("mm/day30", 1.15741e-08),
    ("in/day", 2.93995e-07),
];
