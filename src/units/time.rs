// 시간 단위. 내부 기준은 초(sec)이며 oper-year는 가동률 90%(연 7884시간) 기준이다.
pub(crate) const TIME_FACTORS: &[(&str, f64)] = &[
    ("sec", 1.0),
    ("hr", 3600.0),
    ("day", 86400.0),
    ("min", 60.0),
    ("year", 31536000.0),
    ("month", 2628000.0),
    ("week", 604800.0),
    ("nsec", 1e-9),
    ("oper-year", 28382400.0),
];
