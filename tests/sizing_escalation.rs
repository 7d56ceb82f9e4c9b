//! 크기 제한, 설비비 지수, 설정 파일 회귀 테스트.
use std::path::PathBuf;

use approx::assert_relative_eq;
use equipment_cost_toolbox::config::{self, Config, ConfigError};
use equipment_cost_toolbox::escalation::{self, EscalationError, EscalationTable};
use equipment_cost_toolbox::sizing::{
    self, SizeLimit, SizeLimitError, SizeLimitTable, SizeUnit,
};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "equipment_cost_toolbox_{}_{name}.toml",
        std::process::id()
    ))
}

#[test]
fn unregistered_equipment_has_no_minimum() {
    assert_eq!(
        sizing::check_minimum("unregistered_type", "x", -100.0, "kW"),
        (true, String::new())
    );
    assert_eq!(sizing::get_maximum("unregistered_type", "x"), None);
}

#[test]
fn undersized_pump_is_flagged() {
    let (ok, msg) = sizing::check_minimum("pump", "centrifugal", 0.5, "kW");
    assert!(!ok);
    assert_eq!(msg, "under limit (min: 1.0 kW)");

    assert_eq!(
        sizing::check_minimum("pump", "centrifugal", 1.0, "kW"),
        (true, String::new())
    );
    let (ok, msg) = sizing::check_minimum("compressor", "axial", 449.9, "kW");
    assert!(!ok);
    assert_eq!(msg, "under limit (min: 450.0 kW)");
}

#[test]
fn non_numeric_size_is_flagged() {
    let (ok, msg) = sizing::check_minimum("pump", "centrifugal", f64::NAN, "kW");
    assert!(!ok);
    assert_eq!(msg, "under limit (min: 1.0 kW)");
    let (ok, _) = sizing::check_minimum("fan", "axial", f64::NAN, "cum/hr");
    assert!(!ok);
    // 제한이 없으면 값과 관계없이 통과
    assert!(sizing::check_minimum("unregistered_type", "x", f64::NAN, "kW").0);
}

#[test]
fn lookups_ignore_ascii_case() {
    let (ok, _) = sizing::check_minimum("Pump", "CENTRIFUGAL", 0.5, "kW");
    assert!(!ok);
    assert_eq!(sizing::get_maximum("FAN", "Axial"), Some(100.0));
}

#[test]
fn size_is_converted_to_the_entry_unit() {
    // 1 hp = 0.7457 kW
    let (ok, _) = sizing::check_minimum("pump", "centrifugal", 1.0, "hp");
    assert!(!ok);
    let (ok, _) = sizing::check_minimum("pump", "centrifugal", 2.0, "hp");
    assert!(ok);
    let (ok, _) = sizing::check_minimum("pump", "centrifugal", 500.0, "Watt");
    assert!(!ok);

    let (ok, msg) = sizing::check_minimum("fan", "axial", 1800.0, "cum/hr");
    assert!(!ok);
    assert_eq!(msg, "under limit (min: 1.0 m3/s)");
    let (ok, _) = sizing::check_minimum("fan", "axial", 3600.0, "cum/hr");
    assert!(ok);
}

#[test]
fn unknown_size_unit_compares_raw_value() {
    let (ok, _) = sizing::check_minimum("pump", "centrifugal", 5.0, "bananas");
    assert!(ok);
    let (ok, _) = sizing::check_minimum("pump", "centrifugal", 0.5, "bananas");
    assert!(!ok);
}

#[test]
fn maximum_limits() {
    assert_eq!(sizing::get_maximum("pump", "reciprocating"), Some(1000.0));
    assert_eq!(sizing::get_maximum("compressor", "centrifugal"), Some(10000.0));
    assert_eq!(sizing::get_maximum("turbine", "radial"), Some(10000.0));
    assert_eq!(sizing::get_maximum("fan", "centrifugal_forward"), Some(100.0));
    assert_eq!(sizing::get_maximum("pump", "gear"), None);
}

#[test]
fn builtin_limits_are_consistent() {
    let table = SizeLimitTable::builtin();
    assert_eq!(table.entries().len(), 11);
    for limit in table.entries() {
        let (min, max) = (limit.min.unwrap(), limit.max.unwrap());
        assert!(min <= max, "{}/{}", limit.equipment, limit.subtype);
        let expected = if limit.equipment == "fan" {
            SizeUnit::CubicMeterPerSecond
        } else {
            SizeUnit::Kilowatt
        };
        assert_eq!(limit.unit, expected);
    }
}

#[test]
fn overrides_replace_and_extend() {
    let table = SizeLimitTable::with_overrides(&[
        SizeLimit::new("pump", "centrifugal", Some(5.0), Some(800.0), SizeUnit::Kilowatt),
        SizeLimit::new("blower", "rotary", Some(2.0), None, SizeUnit::Kilowatt),
    ])
    .unwrap();

    let (ok, msg) = table.check_minimum("pump", "centrifugal", 3.0, "kW");
    assert!(!ok);
    assert_eq!(msg, "under limit (min: 5.0 kW)");
    assert_eq!(table.get_maximum("pump", "centrifugal"), Some(800.0));

    let (ok, msg) = table.check_minimum("blower", "rotary", 1.0, "kW");
    assert!(!ok);
    assert_eq!(msg, "under limit (min: 2.0 kW)");
    assert_eq!(table.get_maximum("blower", "rotary"), None);

    // 기본 테이블은 그대로다
    assert_eq!(sizing::get_maximum("pump", "centrifugal"), Some(1000.0));
}

#[test]
fn overrides_reject_inverted_bounds() {
    let err = SizeLimitTable::with_overrides(&[SizeLimit::new(
        "pump",
        "centrifugal",
        Some(5.0),
        Some(2.0),
        SizeUnit::Kilowatt,
    )])
    .unwrap_err();
    assert!(matches!(err, SizeLimitError::MinAboveMax { .. }));

    let err = SizeLimitTable::with_overrides(&[SizeLimit::new(
        "fan",
        "axial",
        Some(f64::NAN),
        None,
        SizeUnit::CubicMeterPerSecond,
    )])
    .unwrap_err();
    assert!(matches!(err, SizeLimitError::InvalidBound { .. }));
}

#[test]
fn escalation_registered_years() {
    assert_eq!(escalation::index_for_year(2017), 567.5);
    assert_eq!(escalation::index_for_year(2021), 708.0);
    assert_eq!(escalation::index_for_year(2025), 810.0);

    let table = EscalationTable::default();
    let entries = table.entries();
    assert_eq!(entries.first().unwrap().year, 2017);
    assert_eq!(entries.last().unwrap().year, 2025);
    for pair in entries.windows(2) {
        assert_eq!(pair[1].year, pair[0].year + 1);
    }
    assert!(entries.iter().all(|e| e.index > 0.0));
    assert!(entries.iter().filter(|e| e.projected).all(|e| e.year >= 2024));
}

#[test]
fn escalation_falls_back_for_unknown_years() {
    assert_eq!(escalation::index_for_year(1999), escalation::DEFAULT_INDEX);
    assert_eq!(escalation::index_for_year(2099), 800.0);
    assert!(!EscalationTable::default().is_registered(2099));

    let table = EscalationTable::with_fallback_year(2025).unwrap();
    assert_eq!(table.index_for_year(2099), 810.0);
    assert_eq!(table.index_for_year(2019), 607.5);

    assert_eq!(
        EscalationTable::with_fallback_year(1990),
        Err(EscalationError::UnregisteredYear(1990))
    );
}

#[test]
fn escalate_between_years() {
    let table = EscalationTable::default();
    assert_relative_eq!(
        table.escalate_from_base(567.5, 2024),
        800.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        table.escalate(1000.0, 2021, 2017),
        1000.0 * 567.5 / 708.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(table.escalate(42.0, 2020, 2020), 42.0, max_relative = 1e-12);
}

#[test]
fn config_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.escalation.base_year, 2017);
    assert_eq!(cfg.escalation.target_year, 2024);
    assert_eq!(cfg.escalation.fallback_year, 2024);
    assert!(cfg.size_limits.is_empty());
    assert!(cfg.validate().is_ok());
    assert_relative_eq!(cfg.escalate_to_target(567.5).unwrap(), 800.0, max_relative = 1e-12);
}

#[test]
fn config_round_trips_through_toml() {
    let path = temp_path("roundtrip");
    let mut cfg = Config::default();
    cfg.escalation.target_year = 2023;
    cfg.size_limits.push(SizeLimit::new(
        "pump",
        "centrifugal",
        Some(2.5),
        Some(800.0),
        SizeUnit::Kilowatt,
    ));
    cfg.save_to(&path).unwrap();
    let loaded = config::load_from(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, cfg);
    assert_relative_eq!(loaded.escalate_to_target(567.5).unwrap(), 789.6, max_relative = 1e-12);
    let table = loaded.size_limit_table().unwrap();
    assert_eq!(table.get_maximum("pump", "centrifugal"), Some(800.0));
}

#[test]
fn config_parses_handwritten_file() {
    let path = temp_path("handwritten");
    std::fs::write(
        &path,
        r#"
[escalation]
target_year = 2022

[[size_limits]]
equipment = "fan"
subtype = "axial"
min = 0.5
unit = "m3/s"
"#,
    )
    .unwrap();
    let cfg = config::load_from(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(cfg.escalation.base_year, 2017);
    assert_eq!(cfg.escalation.target_year, 2022);
    let table = cfg.size_limit_table().unwrap();
    let (ok, _) = table.check_minimum("fan", "axial", 0.7, "m3/s");
    assert!(ok);
    assert_eq!(table.get_maximum("fan", "axial"), None);
}

#[test]
fn config_rejects_bad_values() {
    let path = temp_path("bad_year");
    std::fs::write(&path, "[escalation]\nfallback_year = 1990\n").unwrap();
    let err = config::load_from(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(err, ConfigError::Escalation(_)));

    let path = temp_path("bad_toml");
    std::fs::write(&path, "[escalation\n").unwrap();
    let err = config::load_from(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = config::load_from(&temp_path("missing")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
