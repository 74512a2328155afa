use omnirot_core::io::report::{
    write_derivatives_csv, write_expected_angle, write_objective_csv, write_sweep_report,
    DERIVATIVES_CSV, EXPECTED_ANGLE_TXT, OBJECTIVE_CSV,
};
use omnirot_core::sweep::{SweepResult, SweepSample};

fn result() -> SweepResult {
    let samples = (0..3)
        .map(|i| SweepSample {
            angle_deg: 4.9 + i as f64 * 0.1,
            energy: 0.5 * i as f64,
            analytical: -1.0 + i as f64,
            numerical: -1.01 + i as f64,
        })
        .collect();
    SweepResult {
        expected_angle_deg: 5.0,
        samples,
    }
}

#[test]
fn test_objective_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("obj.csv");
    write_objective_csv(&path, &result()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "angle_deg,objective_function");
    assert_eq!(lines[1], "4.90,0.000000");
    assert_eq!(lines[3], "5.10,1.000000");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_derivatives_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("der.csv");
    write_derivatives_csv(&path, &result()).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["angle_deg", "analytical_derivative", "numerical_derivative"]
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][1], "-1.000000");
    assert_eq!(&rows[0][2], "-1.010000");
}

#[test]
fn test_expected_angle_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expected.txt");
    write_expected_angle(&path, 18.5).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "18.500000\n");
}

#[test]
fn test_sweep_report_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("results").join("run1");
    let paths = write_sweep_report(&out, &result()).unwrap();

    assert_eq!(paths.objective, out.join(OBJECTIVE_CSV));
    assert_eq!(paths.derivatives, out.join(DERIVATIVES_CSV));
    assert_eq!(paths.expected_angle, out.join(EXPECTED_ANGLE_TXT));
    assert!(paths.objective.exists());
    assert!(paths.derivatives.exists());
    assert_eq!(
        std::fs::read_to_string(&paths.expected_angle).unwrap(),
        "5.000000\n"
    );
}
