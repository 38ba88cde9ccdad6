use num::complex::{c64, Complex64};
use touchstone::matrix;
use touchstone::prelude::*;
use touchstone::util::{comp_matrix, comp_vec_f64, ROUND_TRIP_MARGIN};

fn sample_matrix(nports: usize, npts: usize) -> ComplexMatrix {
    ComplexMatrix::from_shape_fn((nports, nports, npts), |(i, j, k)| {
        let seed = (i * 7 + j * 3 + k * 11 + 1) as f64;
        c64(0.9 * (seed * 0.7).sin(), 0.8 * (seed * 1.3).cos())
    })
}

fn sample_doc(
    nports: usize,
    npts: usize,
    format: NumericFormat,
    parameter: RFParameter,
    unit: FrequencyUnit,
    impedance: Impedance,
) -> TouchstoneDocument {
    TouchstoneBuilder::new()
        .comment(" round trip sample")
        .parameter(parameter)
        .format(format)
        .impedance(impedance)
        .frequency(
            FrequencyBuilder::new()
                .unit(unit)
                .start_stop_step_scaled(0.5, 0.5 * npts as f64, 0.5)
                .build(),
        )
        .matrix(sample_matrix(nports, npts))
        .build()
        .unwrap()
}

fn assert_round_trip(doc: &TouchstoneDocument, text: &str, test: &str) {
    let nports = doc.nports().unwrap();
    let copy = TouchstoneDocument::read(text, nports).unwrap();

    assert_eq!(copy.comments(), doc.comments(), "{} comments", test);
    assert_eq!(copy.nports(), doc.nports(), "{} nports", test);
    assert_eq!(copy.parameter(), doc.parameter(), "{} parameter", test);
    assert_eq!(copy.format(), doc.format(), "{} format", test);
    assert_eq!(copy.impedance(), doc.impedance(), "{} impedance", test);

    let (freq, copy_freq) = (doc.frequency().unwrap(), copy.frequency().unwrap());
    assert_eq!(copy_freq.unit(), freq.unit(), "{} unit", test);
    comp_vec_f64(
        freq.scaled().as_slice().unwrap(),
        copy_freq.scaled().as_slice().unwrap(),
        ROUND_TRIP_MARGIN,
        test,
    );
    comp_matrix(
        doc.matrix().unwrap(),
        copy.matrix().unwrap(),
        ROUND_TRIP_MARGIN,
        test,
    );
}

#[test]
fn round_trip_all_formats_and_sizes() {
    let units = FrequencyUnit::ALL;
    let params = RFParameter::ALL;
    for nports in 1..=4 {
        for (f, format) in NumericFormat::ALL.into_iter().enumerate() {
            let unit = units[(nports + f) % units.len()];
            let parameter = params[(nports + f) % params.len()];
            let doc = sample_doc(nports, 5, format, parameter, unit, Impedance::Scalar(50.0));
            let test = format!("{}-port {} {} {}", nports, format, parameter, unit);
            assert_round_trip(&doc, &doc.write().unwrap(), &test);
        }
    }
}

#[test]
fn round_trip_wrapped_and_fixed_precision() {
    for nports in 1..=4 {
        let doc = sample_doc(
            nports,
            3,
            NumericFormat::MA,
            RFParameter::S,
            FrequencyUnit::GHz,
            Impedance::Scalar(75.0),
        );
        let opts = WriteOptions::new().precision(9).pairs_per_line(4);
        let text = doc.write_with(&opts).unwrap();
        assert_round_trip(&doc, &text, &format!("{}-port wrapped", nports));
    }
}

#[test]
fn round_trip_per_port_impedance() {
    let doc = sample_doc(
        3,
        2,
        NumericFormat::RI,
        RFParameter::Z,
        FrequencyUnit::MHz,
        Impedance::PerPort(vec![50.0, 75.0, 100.0]),
    );
    let text = doc.write().unwrap();
    assert!(text.contains("# MHZ Z RI R 50 75 100\n"));
    assert_round_trip(&doc, &text, "per-port impedance");
}

#[test]
fn round_trip_two_port_db_scenario() {
    let doc = TouchstoneBuilder::new()
        .format(NumericFormat::DB)
        .frequency(
            FrequencyBuilder::new()
                .unit(FrequencyUnit::GHz)
                .freqs_scaled(ndarray::array![1.0, 3.0, 5.0])
                .build(),
        )
        .matrix(matrix![
            [
                [c64(0.1, -0.2), c64(0.15, -0.25), c64(0.2, -0.3)],
                [c64(0.01, 0.02), c64(0.015, 0.025), c64(0.02, 0.03)]
            ],
            [
                [c64(3.0, 1.0), c64(2.5, 1.5), c64(2.0, 2.0)],
                [c64(-0.3, 0.1), c64(-0.35, 0.15), c64(-0.4, 0.2)]
            ]
        ])
        .build()
        .unwrap();

    let text = doc.write().unwrap();
    let copy = TouchstoneDocument::read(&text, 2).unwrap();
    assert_eq!(copy.format(), Some(NumericFormat::DB));
    comp_vec_f64(
        &[1.0, 3.0, 5.0],
        copy.frequency().unwrap().scaled().as_slice().unwrap(),
        ROUND_TRIP_MARGIN,
        "two-port db freq",
    );
    comp_matrix(
        doc.matrix().unwrap(),
        copy.matrix().unwrap(),
        ROUND_TRIP_MARGIN,
        "two-port db",
    );
}

fn data_tokens(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .filter(|line| !line.starts_with('!') && !line.starts_with('#'))
        .map(|line| line.split_whitespace().map(String::from).collect())
        .collect()
}

#[test]
fn two_port_serialized_order() {
    let doc = TouchstoneBuilder::new()
        .format(NumericFormat::RI)
        .frequency(Frequency::from_scaled(&[2.0], FrequencyUnit::GHz))
        .matrix(matrix![
            [[c64(11.0, 0.5)], [c64(12.0, 0.5)]],
            [[c64(21.0, 0.5)], [c64(22.0, 0.5)]]
        ])
        .build()
        .unwrap();

    let tokens = data_tokens(&doc.write().unwrap());
    assert_eq!(
        tokens,
        vec![vec!["2", "11", "0.5", "21", "0.5", "12", "0.5", "22", "0.5"]]
    );
}

#[test]
fn one_and_three_port_serialized_order() {
    let one = TouchstoneBuilder::new()
        .format(NumericFormat::RI)
        .frequency(Frequency::from_scaled(&[1.0], FrequencyUnit::Hz))
        .matrix(matrix![[[c64(11.0, -1.0)]]])
        .build()
        .unwrap();
    assert_eq!(
        data_tokens(&one.write().unwrap()),
        vec![vec!["1", "11", "-1"]]
    );

    let three = TouchstoneBuilder::new()
        .format(NumericFormat::RI)
        .frequency(Frequency::from_scaled(&[1.0], FrequencyUnit::Hz))
        .matrix(ComplexMatrix::from_shape_fn((3, 3, 1), |(i, j, _)| {
            c64((10 * (i + 1) + j + 1) as f64, 0.0)
        }))
        .build()
        .unwrap();
    let tokens = data_tokens(&three.write().unwrap());
    let values: Vec<&str> = tokens[0].iter().skip(1).step_by(2).map(|s| s.as_str()).collect();
    assert_eq!(
        values,
        vec!["11", "12", "13", "21", "22", "23", "31", "32", "33"]
    );
}

#[test]
fn format_conversion_recovers_values() {
    let values = [c64(0.5, 0.5), c64(-0.75, 0.01), c64(1e-3, -2.0), c64(-1.0, -1.0)];
    for format in NumericFormat::ALL {
        for val in values {
            let (x, y) = format.unparse(val);
            let back: Complex64 = format.parse(x, y);
            assert!((back - val).norm() < 1e-9, "{} {}", format, val);
        }
    }
}

#[test]
fn enumeration_rejection_names_token() {
    let mut doc = TouchstoneDocument::new();
    let err = doc.set_format(Some("XYZ")).unwrap_err();
    assert!(err.to_string().contains("XYZ"));
    let err = doc.set_parameter(Some(12)).unwrap_err();
    assert!(err.to_string().contains("12"));
    let err = Frequency::new().set_unit("THz").map(|_| ()).unwrap_err();
    assert!(err.to_string().contains("THz"));

    doc.set_format(None::<&str>).unwrap();
    doc.set_parameter(None::<&str>).unwrap();
    assert_eq!(doc.format(), None);
    assert_eq!(doc.parameter(), None);
}
