// 조성은 무차원이라 환산하지 않는다.
pub(crate) const COMPOSITION_FACTORS: &[(&str, f64)] = &[("mol-fr", 1.0), ("mass-fr", 1.0)];
