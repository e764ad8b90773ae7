//! Integration tests for reading, outlining, and exporting survey points

use seistools_outline::{
    build_outline, convert_coordinates, convert_to_kml, read_coordinates, remove_duplicate_points,
    select_source_crs, write_kml, ConvertOptions, Coord, Error, Hemisphere, HullMethod,
    Transformer, DEFAULT_TOLERANCE, WGS84,
};

use rstest::{fixture, rstest};

#[fixture]
fn survey() -> Vec<Coord<f64>> {
    read_coordinates("./data/points.txt").unwrap()
}

fn coords(values: &[(f64, f64)]) -> Vec<Coord<f64>> {
    values.iter().map(|&(x, y)| Coord { x, y }).collect()
}

#[rstest]
fn read_points_file(survey: Vec<Coord<f64>>) {
    // comments, blanks, and the two malformed lines are skipped
    assert_eq!(survey.len(), 8);
    assert_eq!(survey[0], Coord { x: 0.0, y: 0.0 });
    assert_eq!(survey[1], Coord { x: 0.0, y: 10.0 });
    assert_eq!(survey[4], Coord { x: 5.0, y: 5.0 });
    assert_eq!(survey[7], Coord { x: 10.004, y: 9.998 });
}

#[rstest]
fn missing_points_file() {
    let result = read_coordinates("./data/does_not_exist.txt");
    assert!(matches!(result, Err(Error::IOError(_))));
}

#[rstest]
fn square_outline(survey: Vec<Coord<f64>>) {
    let outline = build_outline(&survey).unwrap();

    assert_eq!(outline.method, HullMethod::ConvexHull);
    assert_eq!(outline.len(), 5);
    assert!(outline.is_closed());

    let corners = coords(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
    for corner in &corners {
        assert!(
            outline.vertices().contains(corner),
            "missing corner {corner:?}"
        );
    }
}

#[rstest]
#[case(DEFAULT_TOLERANCE, 6)]
#[case(1e-4, 8)]
#[case(100.0, 1)]
fn dedup_counts(survey: Vec<Coord<f64>>, #[case] tolerance: f64, #[case] expected: usize) {
    let unique = remove_duplicate_points(&survey, tolerance).unwrap();
    assert_eq!(unique.len(), expected);
    assert!(unique.len() <= survey.len());

    // running it again changes nothing
    let again = remove_duplicate_points(&unique, tolerance).unwrap();
    assert_eq!(again, unique);
}

#[rstest]
#[case(&[])]
#[case(&[(1.0, 1.0)])]
#[case(&[(1.0, 1.0), (2.0, 2.0)])]
fn too_few_points(#[case] values: &[(f64, f64)]) {
    let result = build_outline(&coords(values));
    assert!(matches!(result, Err(Error::TooFewPoints { minimum: 3, .. })));
}

#[rstest]
fn too_few_unique_points() {
    let points = coords(&[(1.0, 1.0), (1.001, 1.0), (5.0, 5.0)]);
    let result = build_outline(&points);
    assert!(matches!(
        result,
        Err(Error::TooFewUniquePoints { found: 2, .. })
    ));
}

#[rstest]
fn madrid_utm_to_wgs84() {
    let transformer = Transformer::from_crs("EPSG:32630", "EPSG:4326").unwrap();
    let (lon, lat) = transformer.transform(440_298.94, 4_474_257.31).unwrap();
    assert!((lon + 3.7037).abs() < 1e-6, "longitude {lon}");
    assert!((lat - 40.4168).abs() < 1e-6, "latitude {lat}");
}

// Reference values from PROJ with the same Helmert parameters
#[rstest]
#[case("EPSG:31468", 4_468_503.0, 5_333_780.0, 11.575_327_3, 48.141_264_1)]
#[case("EPSG:28415", 15_468_000.0, 6_097_000.0, 86.499_593_0, 54.996_570_7)]
fn gauss_krueger_to_wgs84(
    #[case] crs: &str,
    #[case] x: f64,
    #[case] y: f64,
    #[case] lon: f64,
    #[case] lat: f64,
) {
    let transformer = Transformer::from_crs(crs, "EPSG:4326").unwrap();
    let (lon2, lat2) = transformer.transform(x, y).unwrap();
    assert!((lon2 - lon).abs() < 1e-5, "longitude {lon2}");
    assert!((lat2 - lat).abs() < 1e-5, "latitude {lat2}");
}

// The local geographic CRS skips the Helmert step, so the gap is the datum shift
#[rstest]
#[case("EPSG:31468", "EPSG:4314", 4_468_503.0, 5_333_780.0, -0.001_388_2, -0.000_921_8)]
#[case("EPSG:28415", "EPSG:4284", 15_468_000.0, 6_097_000.0, -0.000_417_7, 0.000_626_9)]
fn local_datum_shift(
    #[case] crs: &str,
    #[case] local: &str,
    #[case] x: f64,
    #[case] y: f64,
    #[case] dlon: f64,
    #[case] dlat: f64,
) {
    let point = coords(&[(x, y)]);
    let wgs84 = convert_coordinates(&point, crs, WGS84).unwrap();
    let native = convert_coordinates(&point, crs, local).unwrap();

    let shift = (wgs84[0][0] - native[0][0], wgs84[0][1] - native[0][1]);
    assert!((shift.0 - dlon).abs() < 1e-5, "longitude shift {}", shift.0);
    assert!((shift.1 - dlat).abs() < 1e-5, "latitude shift {}", shift.1);
}

#[rstest]
#[case("EPSG:28415", 86.5, 55.0)]
#[case("EPSG:31466", 6.2, 51.1)]
#[case("EPSG:32733", 15.3, -20.5)]
fn round_trip_through_wgs84(#[case] crs: &str, #[case] lon: f64, #[case] lat: f64) {
    let forward = Transformer::from_crs("EPSG:4326", crs).unwrap();
    let inverse = Transformer::from_crs(crs, "EPSG:4326").unwrap();

    let (x, y) = forward.transform(lon, lat).unwrap();
    let (lon2, lat2) = inverse.transform(x, y).unwrap();

    assert!((lon2 - lon).abs() < 1e-6, "longitude {lon2}");
    assert!((lat2 - lat).abs() < 1e-6, "latitude {lat2}");
}

#[rstest]
fn kml_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("outline.kml");

    let points = vec![
        [10.0, 50.0, 0.0],
        [11.0, 50.0, 0.0],
        [11.0, 51.0, 0.0],
        [10.0, 50.0, 0.0],
    ];
    write_kml(&points, &path, 42, true).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("<name>Points Outline (42 points)</name>"));
    assert!(text.contains("CRS: WGS84 (lat/lon)"));
    assert!(text.contains("Total outline points: 4"));
    assert!(text.contains("<coordinates>10,50,0 11,50,0 11,51,0 10,50,0</coordinates>"));
}

#[rstest]
fn convert_without_reprojection() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = ConvertOptions::new("./data/points.txt");
    options.output = dir.path().join("square.kml");
    options.source_crs = None;

    let summary = convert_to_kml(&options).unwrap();
    assert_eq!(summary.original, 8);
    assert_eq!(summary.unique, 6);
    assert_eq!(summary.outline, 5);
    assert_eq!(summary.written, 5);
    assert_eq!(summary.method, HullMethod::ConvexHull);

    let text = std::fs::read_to_string(&options.output).unwrap();
    assert!(text.contains("CRS: Original Projected CRS"));
    assert!(text.contains("<name>Points Outline (8 points)</name>"));
}

#[rstest]
fn convert_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let mut options = ConvertOptions::new(dir.path().join("nothing.txt"));
    options.output = dir.path().join("nothing.kml");

    let result = convert_to_kml(&options);
    assert!(matches!(result, Err(Error::InputNotFound(_))));
    assert!(!options.output.exists());
}

#[rstest]
fn convert_utm_points() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("utm.txt");
    std::fs::write(
        &input,
        "440000 4474000\n441000 4474000\n441000 4475000\n440000 4475000\n440500 4474500\n",
    )
    .unwrap();

    let mut options = ConvertOptions::new(&input);
    options.output = dir.path().join("utm.kml");
    options.source_crs = select_source_crs(false, None, Some(30), Hemisphere::North).unwrap();

    let summary = convert_to_kml(&options).unwrap();
    assert_eq!(summary.source_crs.as_deref(), Some("EPSG:32630"));
    assert_eq!(summary.written, 5);

    let text = std::fs::read_to_string(&options.output).unwrap();
    assert!(text.contains("CRS: WGS84 (lat/lon)"));
    assert!(text.contains("-3.70"));
    assert!(text.contains(",40.4"));
}

#[rstest]
fn convert_with_no_valid_projection() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("far.txt");
    // eastings far outside zone 15 invert to latitudes beyond the pole
    std::fs::write(&input, "1e12 6000000\n1.1e12 6000000\n1e12 7000000\n").unwrap();

    let mut options = ConvertOptions::new(&input);
    options.output = dir.path().join("far.kml");
    options.source_crs = Some("EPSG:28415".to_string());

    let result = convert_to_kml(&options);
    assert!(matches!(result, Err(Error::NoPointsTransformed)));
    assert!(!options.output.exists());
}

#[rstest]
#[case("n", Hemisphere::North)]
#[case("North", Hemisphere::North)]
#[case("S", Hemisphere::South)]
#[case("south", Hemisphere::South)]
fn hemisphere_names(#[case] name: &str, #[case] expected: Hemisphere) {
    assert_eq!(name.parse::<Hemisphere>().unwrap(), expected);
}

#[rstest]
fn source_crs_precedence() {
    let explicit = select_source_crs(false, Some("EPSG:28404"), Some(30), Hemisphere::North);
    assert_eq!(explicit.unwrap().as_deref(), Some("EPSG:28404"));

    assert!("west".parse::<Hemisphere>().is_err());
    assert!(matches!(
        select_source_crs(false, None, Some(0), Hemisphere::North),
        Err(Error::InvalidUtmZone(0))
    ));
}
