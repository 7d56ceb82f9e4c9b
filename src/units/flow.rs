// 질량 유량(FLOW, MASS-FLOW 공용). 내부 기준은 kg/sec이다.
pub(crate) const MASS_FLOW_FACTORS: &[(&str, f64)] = &[
    ("kg/sec", 1.0),
    ("lb/hr", 0.000125998),
    ("kg/hr", 0.000277778),
    ("lb/sec", 0.453592),
    ("Mlb/hr", 125.998),
    ("tons/day", 0.0115741),
    ("Mcfh", 0.00786579),
    ("tonne/hr", 0.277778),
    ("lb/day", 5.24991e-06),
    ("kg/day", 1.15741e-05),
    ("tons/hr", 0.277778),
    ("kg/min", 0.0166667),
    ("kg/year", 3.17098e-08),
    ("gm/min", 1.66667e-05),
    ("gm/hr", 2.77778e-07),
    ("gm/day", 1.15741e-08),
    ("Mgm/hr", 0.277778),
    ("Ggm/hr", 277.778),
    ("Mgm/day", 0.0115741),
    ("Ggm/day", 11.5741),
    ("lb/min", 0.00755987),
    ("MMlb/hr", 125998.0),
    ("Mlb/day", 5.24991),
    ("MMlb/day", 5249.91),
    ("lb/year", 1.43833e-08),
    ("Mlb/year", 1.43833e-05),
    ("MMlb/year", 0.0143833),
    ("MMIb/year", 0.0143833),
    ("tons/min", 16.6667),
    ("Mtons/year", 31.7098),
    ("MMtons/year", 31709.8),
    ("L-tons/min", 16.9333),
    ("L-tons/hr", 0.282222),
    ("L-tons/day", 0.0117593),
    ("ML-tons/year", 32.1507),
    ("MML-tons/year", 32150.7),
    ("ktonne/year", 0.0317098),
    ("kg/oper-year", 3.52775e-08),
    ("lb/oper-year", 1.59891e-08),
    ("Mlb/oper-year", 1.59891e-05),
    ("MMlb/oper-year", 0.0159891),
    ("MIMIb/oper-year", 0.0159891),
    ("Mtons/oper-year", 35.2775),
    ("MMtons/oper-year", 35277.5),
    ("ML-tons/oper-year", 35.7230),
    ("MML-tons/oper-year", 35723.0),
    ("ktonne/oper-year", 0.0352775),
    ("gm/sec", 0.001),
    ("tons/year", 0.0317098),
    ("tonne/day", 0.0115741),
    ("tonne/year", 0.0317098),
    ("tons/oper-year", 0.0352775),
    ("tonne/oper-year", 0.0352775),
];

// 몰 유량. 내부 기준은 kmol/sec이다.
pub(crate) const MOLE_FLOW_FACTORS: &[(&str, f64)] = &[
    ("kmol/sec", 1.0),
    ("lbmol/hr", 0.000125998),
    ("kmol/hr", 0.000277778),
    ("MMscfh", 0.000783986),
    ("MMscmh", 0.000022414),
    ("mol/sec", 0.001),
    ("lbmol/sec", 0.453592),
    ("scmh", 0.000022414),
    ("bmol/day", 1.15741e-05),
    ("kmol/day", 1.15741e-05),
    ("MMscfd", 0.00000907407),
    ("Mlscfd", 0.00000907407),
    ("scfm", 0.000000471947),
    ("mol/min", 1.66667e-05),
    ("kmol/khr", 0.000277778),
    ("kmol/Mhr", 0.277778),
    ("mol/hr", 2.77778e-07),
    ("Mmol/hr", 0.277778),
    ("Mlbmol/hr", 0.125998),
    ("lbmol/Mhr", 0.125998),
    ("lbmol/MMhr", 125.998),
    ("Mscfm", 0.000471947),
    ("scfh", 7.86579e-08),
    ("scfd", 3.27741e-09),
    ("ncmh", 0.000022414),
    ("ncmd", 9.33917e-07),
    ("ACFM", 0.000000471947),
    ("kmol/min", 0.0166667),
    ("kmol/week", 1.65344e-06),
    ("kmol/month", 3.80517e-07),
    ("kmol/year", 3.17098e-08),
    ("kmol/oper-year", 3.52775e-08),
    ("lbmol/min", 0.00755987),
];

// 체적 유량. 내부 기준은 cum/sec이다.
pub(crate) const VOLUME_FLOW_FACTORS: &[(&str, f64)] = &[
    ("cum/sec", 1.0),
    ("m3/s", 1.0),
    ("m^3/s", 1.0),
    ("cuft/hr", 7.86579e-06),
    ("l/min", 1.66667e-05),
    ("gal/min", 6.30902e-05),
    ("gal/hr", 1.05150e-06),
    ("bbl/day", 1.84013e-06),
    ("cum/hr", 0.000277778),
    ("m3/h", 0.000277778),
    ("m^3/h", 0.000277778),
    ("cuft/min", 0.000471947),
    ("bbl/hr", 4.41631e-05),
    ("cuft/sec", 0.0283168),
    ("cum/day", 1.15741e-05),
    ("cum/year", 3.17098e-08),
    ("l/hr", 2.77778e-07),
    ("kbbl/day", 0.00184013),
    ("MMcuft/hr", 7.86579),
    ("MMcuft/day", 0.327741),
    ("Mcuft/day", 0.000327741),
    ("l/sec", 0.001),
    ("l/day", 1.15741e-08),
    ("cum/min", 0.0166667),
    ("kcum/sec", 1000.0),
    ("kcum/hr", 0.277778),
    ("kcum/day", 0.0115741),
    ("Mcum/sec", 1000000.0),
    ("Mcum/hr", 277.778),
    ("Mcum/day", 11.5741),
    // 실제 입방피트/분. 몰 유량 쪽 ACFM 값과 다르다.
    ("ACFM", 0.000471947),
    ("cuft/day", 3.27741e-07),
    ("Mcuft/min", 0.471947),
    ("Mcuft/hr", 0.00786579),
    ("Mgal/min", 63.0902),
    ("MMgal/min", 63090.2),
    ("Mgal/hr", 1.05150),
    ("MMgal/hr", 1051.50),
    ("Mbbl/hr", 44.1631),
    ("MMbbl/hr", 44163.1),
    ("Mbbl/day", 1.84013),
    ("MMbbl/day", 1840.13),
    ("cum/oper-year", 3.52775e-08),
];
