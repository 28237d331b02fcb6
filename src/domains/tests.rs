use super::*;
use crate::domains::constants::{AVOGADRO, LIGHT_YEAR, PARSEC, YEAR};
use crate::notation::{NotationError, Values};

fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(f64::MIN_POSITIVE);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn scalar(result: crate::notation::Result<Values>) -> f64 {
    result.unwrap().one().unwrap()
}

#[test]
fn test_all_builtin_engines_build() {
    for (name, _) in DOMAINS {
        let engine = engine(name).unwrap_or_else(|| panic!("no engine for '{}'", name));
        assert_eq!(engine.domain(), *name);
    }
    assert!(engine("pressure").is_none());
    assert_eq!(base_unit("area"), Some("m²"));
    assert_eq!(base_unit("pressure"), None);
}

#[test]
fn test_length() {
    let cases = [
        ("1.0", 1.0),
        ("1.0 mm", 0.001),
        ("1.5cm", 0.015),
        ("1 nm", 1e-9),
        ("2 km", 2000.0),
        ("1 inch", 0.0254),
        ("5\"", 0.127),
        ("1 mil", 2.54e-5),
        ("3 ft", 0.9144),
        ("2 yards", 1.8288),
        ("1 mile", 1609.344),
        ("0.77 nautical mile", 1426.04),
        ("2 nautical miles", 3704.0),
        ("18 pt", 0.00635),
        ("1 AU", 149_597_870_700.0),
        ("1.2 ly", 1.135287656709696e16),
        ("1.2 M light years", 1.135287656709696e22),
        ("9.15 pc", 9.15 * PARSEC),
        ("9.15 kpc", 9.15e3 * PARSEC),
        ("1 Å", 1e-10),
        ("3 angstrom", 3e-10),
    ];
    for (raw, expected) in cases {
        assert_close(scalar(normalize_length(raw)), expected);
    }
}

#[test]
fn test_length_sequence() {
    let values = normalize_length(vec!["1 km", "25 cm", "1 light year"])
        .unwrap()
        .into_vec();
    assert_eq!(values.len(), 3);
    assert_close(values[0].unwrap(), 1000.0);
    assert_close(values[1].unwrap(), 0.25);
    assert_close(values[2].unwrap(), LIGHT_YEAR);
}

#[test]
fn test_length_rejects_other_units() {
    assert!(normalize_length("3 V").is_err());
    assert!(normalize_length(vec![Some("1 m"), Some("3 V")]).is_err());
}

#[test]
fn test_domain_nulls_stay_null() {
    assert_eq!(normalize_length(None::<&str>).unwrap(), Values::One(None));
    assert_eq!(normalize_volume(None::<&str>).unwrap(), Values::One(None));

    let values = normalize_area(vec![None, Some("1 cm²")]).unwrap().into_vec();
    assert_eq!(values[0], None);
    assert_close(values[1].unwrap(), 1e-4);

    let values = normalize_timespan(vec![Some("2 min"), None]).unwrap().into_vec();
    assert_eq!(values, vec![Some(120.0), None]);
    assert_eq!(
        normalize_mass_concentration(None::<&str>).unwrap().one(),
        None
    );
}

#[test]
fn test_length_formatting_skips_centi() {
    let engine = engine("length").unwrap();
    assert_eq!(engine.format(0.015, "m", 3).unwrap(), "15.0 mm");
    assert_eq!(engine.format(2500.0, "m", 3).unwrap(), "2.50 km");
}

#[test]
fn test_area() {
    let cases = [
        ("1.0", 1.0),
        ("3 m²", 3.0),
        ("1.0 cm²", 1e-4),
        ("2 sq cm", 2e-4),
        ("1 mm^2", 1e-6),
        ("1 km²", 1e6),
        ("1 um²", 1e-12),
        ("1 square inch", 0.00064516),
        ("100 sq ft", 9.290304),
        ("1 acre", 4046.8564224),
        ("2.5 hectares", 25000.0),
        ("3 ares", 300.0),
        ("1 b", 1e-28),
        ("1 µbarn", 1e-34),
        ("1 Å²", 1e-20),
    ];
    for (raw, expected) in cases {
        assert_close(scalar(normalize_area(raw)), expected);
    }
}

#[test]
fn test_area_and_volume_format_round_trip() {
    let area = engine("area").unwrap();
    for (value, expected) in [
        (1e-6, "1.00 mm²"),
        (2.5e-3, "2500 mm²"),
        (4e6, "4.00 km²"),
        (1e-12, "1.00 µm²"),
        (3.0, "3.00 m²"),
    ] {
        let text = area.format(value, "m²", 3).unwrap();
        assert_eq!(text, expected);
        assert_close(scalar(normalize_area(text.as_str())), value);
    }

    let volume = engine("volume").unwrap();
    for (value, expected) in [(2e-9, "2.00 mm³"), (1e-6, "1000 mm³"), (5e9, "5.00 km³")] {
        let text = volume.format(value, "m³", 3).unwrap();
        assert_eq!(text, expected);
        assert_close(scalar(normalize_volume(text.as_str())), value);
    }

    // liquid measures take the prefix once
    assert_eq!(volume.format(5e-4, "L", 3).unwrap(), "500 µL");
}

#[test]
fn test_area_prefixed_spelled_out_unit_is_rejected() {
    // "square millimeters" already carries its prefix
    let err = normalize_area("2.5k square millimeters").unwrap_err();
    assert!(matches!(err, NotationError::UnknownUnit { .. }), "{:?}", err);
}

#[test]
fn test_volume() {
    let cases = [
        ("1 m³", 1.0),
        ("1 km³", 1e9),
        ("1 cm³", 1e-6),
        ("5 cc", 5e-6),
        ("1 cubic mm", 1e-9),
        ("2 L", 0.002),
        ("500 mL", 5e-4),
        ("1 gallon", 0.003785411784),
        ("1 cubic foot", 0.028316846592),
        ("1 cu in", 1.6387064e-5),
        ("1 fl oz", 2.95735296875e-05),
        ("2 pints", 0.000946352946),
        ("1 barrel", 0.158987294928),
    ];
    for (raw, expected) in cases {
        assert_close(scalar(normalize_volume(raw)), expected);
    }
}

#[test]
fn test_amount_concentration() {
    let cases = [
        ("1 M", 1.0),
        ("5 mM", 5e-3),
        ("1 millimolar", 1e-3),
        ("10 µmol/l", 1e-5),
        ("10 umol/L", 1e-5),
        ("2 mmol/ml", 2.0),
        ("3 nmol/µl", 3e-3),
        ("4 pmol/nL", 4e-3),
        ("1 per liter", 1.0 / AVOGADRO),
        ("5 %", 0.05),
        ("10 ppm", 1e-5),
        ("2 ppt", 2e-12),
    ];
    for (raw, expected) in cases {
        assert_close(scalar(normalize_amount_concentration(raw)), expected);
    }
}

#[test]
fn test_mass_concentration() {
    let cases = [
        ("1 g/L", 1.0),
        ("5 mg/l", 5e-3),
        ("2 mg/ml", 2.0),
        ("4 ug/mL", 4e-3),
        ("3 ng/µl", 3e-3),
        ("1 g/nanoliter", 1e9),
        ("20 micrograms per liter", 2e-5),
        ("1 % w/v", 0.01),
    ];
    for (raw, expected) in cases {
        assert_close(scalar(normalize_mass_concentration(raw)), expected);
    }
}

#[test]
fn test_timespan() {
    let cases = [
        ("1.25 months", 1.25 * 2_629_746.0),
        ("1.h", 3600.0),
        (".0 s", 0.0),
        ("1.25 as", 1.25e-18),
        ("5 ms", 5e-3),
        ("5 us", 5e-6),
        ("10 nsecs", 1e-8),
        ("2 minutes", 120.0),
        ("1 day", 86400.0),
        ("3 weeks", 1_814_400.0),
        ("1 year", 31_556_952.0),
        ("2 My", 2e6 * YEAR),
        ("1 Gyr", 1e9 * YEAR),
        ("1 decade", 10.0 * YEAR),
        ("2 centuries", 200.0 * YEAR),
        ("1 millennium", 1000.0 * YEAR),
    ];
    for (raw, expected) in cases {
        assert_close(scalar(normalize_timespan(raw)), expected);
    }
}

#[test]
fn test_timespan_numbers_are_seconds() {
    assert_eq!(normalize_timespan(90).unwrap(), Values::One(Some(90.0)));
    assert_eq!(
        normalize_timespan(vec![1.5, 2.0]).unwrap(),
        Values::Many(vec![Some(1.5), Some(2.0)])
    );
}

#[test]
fn test_convert_to_base_units() {
    assert_close(convert_length_to_meters(2.5, "km").unwrap(), 2500.0);
    assert_close(convert_length_to_meters(1.0, "inch").unwrap(), 0.0254);
    assert_close(convert_area_to_square_meters(1.0, "cm²").unwrap(), 1e-4);
    assert_close(convert_volume_to_cubic_meters(2.0, "L").unwrap(), 0.002);
    assert_close(convert_timespan_to_seconds(1.5, "h").unwrap(), 5400.0);
    assert_close(
        convert_amount_concentration_to_mol_per_liter(5.0, "mM").unwrap(),
        5e-3,
    );
    assert_close(
        convert_mass_concentration_to_grams_per_liter(250.0, "mg/l").unwrap(),
        0.25,
    );
    assert!(convert_timespan_to_seconds(1.0, "parsec").is_err());
}
