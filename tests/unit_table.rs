use equipment_cost_toolbox::units::{
    self, is_gauge_pressure_unit, pressure_kind, ConversionRule, PressureKind, TemperatureUnit,
    UnitSlot,
};
use equipment_cost_toolbox::{ConversionError, QuantityKind};

#[test]
fn every_table_slot_has_a_rule() {
    for q in QuantityKind::ALL {
        let slots = units::units_for(q);
        assert!(!slots.is_empty(), "{q} has no units");
        for slot in slots {
            assert!(!slot.symbol.trim().is_empty(), "{q} slot {}", slot.slot);
            assert!(
                units::rule_for(q, slot.symbol).is_ok(),
                "{q} slot {} ({}) has no conversion rule",
                slot.slot,
                slot.symbol
            );
        }
    }
}

#[test]
fn slots_keep_reference_order() {
    assert_eq!(
        units::units_for(QuantityKind::Area)[0],
        UnitSlot {
            slot: 1,
            symbol: "sqm"
        }
    );
    assert_eq!(units::unit_at(QuantityKind::Pressure, 15), Some("barg"));
    assert_eq!(units::unit_at(QuantityKind::Pressure, 37), Some("bara"));
    assert_eq!(units::unit_at(QuantityKind::Pressure, 38), None);
    assert_eq!(units::slot_of(QuantityKind::Temperature, "C"), Some(4));
    // 중복 기호는 처음 나온 칸을 돌려준다
    assert_eq!(units::slot_of(QuantityKind::Area, "sqm"), Some(1));
    assert_eq!(units::slot_of(QuantityKind::Area, "acre"), None);
    assert_eq!(units::units_for(QuantityKind::ElecPower).len(), 5);
}

#[test]
fn factor_for_marks_special_units() {
    for symbol in ["K", "C", "F", "R"] {
        let rule = units::factor_for(symbol).unwrap();
        assert!(matches!(rule, ConversionRule::Temperature(_)), "{symbol}");
        assert!(rule.is_special());
        assert_eq!(rule.factor(), None);
    }
    assert_eq!(
        units::factor_for("C").unwrap(),
        ConversionRule::Temperature(TemperatureUnit::Celsius)
    );
    for symbol in ["psig", "atmg", "barg", "Pag", "kPag", "MPag", "mbarg"] {
        let rule = units::factor_for(symbol).unwrap();
        assert!(matches!(rule, ConversionRule::Gauge(_)), "{symbol}");
    }
    match units::factor_for("MPag").unwrap() {
        ConversionRule::Gauge(g) => {
            assert_eq!(g.offset, 0.101325);
            assert_eq!(g.absolute_unit, "MiPa");
        }
        other => panic!("unexpected rule {other:?}"),
    }
}

#[test]
fn factor_for_scalar_and_unknown() {
    assert_eq!(units::factor_for("bar").unwrap().factor(), Some(100000.0));
    assert_eq!(units::factor_for("Btu").unwrap().factor(), Some(1055.06));
    assert_eq!(units::factor_for("MW").unwrap().factor(), Some(1_000_000.0));
    assert!(matches!(
        units::factor_for("cubits"),
        Err(ConversionError::UnknownUnit { quantity: None, .. })
    ));
    // 문맥 없는 조회는 열 순서상 먼저인 몰 유량 값을 쓴다
    assert_eq!(units::factor_for("ACFM").unwrap().factor(), Some(0.000000471947));
    assert_eq!(
        units::rule_for(QuantityKind::VolumeFlow, "ACFM").unwrap(),
        ConversionRule::Scalar(0.000471947)
    );
}

#[test]
fn si_units_by_name() {
    assert_eq!(units::si_unit_for(QuantityKind::Pressure), "N/sqm");
    assert_eq!(units::si_unit_for_name("UA").unwrap(), "J/sec-K");
    assert_eq!(units::si_unit_for_name("MOLE-FLOW").unwrap(), "kmol/sec");
    assert_eq!(
        units::si_unit_for_name("pressure"),
        Err(ConversionError::UnknownQuantityType("pressure".into()))
    );
}

#[test]
fn quantity_names_and_indices() {
    for q in QuantityKind::ALL {
        assert_eq!(q.name().parse::<QuantityKind>().unwrap(), q);
        assert_eq!(QuantityKind::from_table_column(q.table_column()), Some(q));
    }
    assert_eq!(QuantityKind::MassFlow.to_string(), "MASS-FLOW");
    assert_eq!(QuantityKind::Area.table_column(), 1);
    assert_eq!(QuantityKind::Heat.table_column(), 22);
    assert_eq!(QuantityKind::from_table_column(0), None);
    assert_eq!(QuantityKind::from_table_column(23), None);
    assert_eq!(QuantityKind::Pressure.simulator_index(), 20);
    assert_eq!(QuantityKind::Heat.simulator_index(), 53);
}

#[test]
fn gauge_unit_helpers() {
    assert!(is_gauge_pressure_unit(Some("barg")));
    assert!(is_gauge_pressure_unit(Some("PSIG")));
    assert!(is_gauge_pressure_unit(Some("kPag")));
    assert!(!is_gauge_pressure_unit(Some("bar")));
    assert!(!is_gauge_pressure_unit(None));

    assert_eq!(pressure_kind("barg"), PressureKind::Gauge);
    assert_eq!(pressure_kind("in-water-g"), PressureKind::Gauge);
    assert_eq!(pressure_kind("mmHg-vac"), PressureKind::Vacuum);
    assert_eq!(pressure_kind("bara"), PressureKind::Absolute);
}

#[test]
fn time_and_composition_rules() {
    assert_eq!(
        units::rule_for(QuantityKind::Time, "hr").unwrap(),
        ConversionRule::Scalar(3600.0)
    );
    assert_eq!(
        units::rule_for(QuantityKind::Time, "oper-year").unwrap(),
        ConversionRule::Scalar(28382400.0)
    );
    assert_eq!(
        units::rule_for(QuantityKind::Composition, "mass-fr").unwrap(),
        ConversionRule::Scalar(1.0)
    );
    assert!(units::rule_for(QuantityKind::Mass, "hr").is_err());
    assert!(units::rule_for(QuantityKind::Density, "mol-fr").is_err());
}
