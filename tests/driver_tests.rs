use dijkstra_sssp::driver::{
    format_json, format_report, parse_input, run, run_text, DriverConfig, GraphInput, Report,
};
use dijkstra_sssp::{Error, FrontierStrategy};

const DIAMOND: &str = "4\n5\n0 1 1\n0 2 4\n1 2 1\n1 3 5\n2 3 1\n";

#[test]
fn test_parse_line_oriented_input() {
    let input = parse_input(DIAMOND).unwrap();
    assert_eq!(input.vertex_count, 4);
    assert_eq!(input.edges.len(), 5);
    assert_eq!(input.edges[0], (0, 1, 1));
    assert_eq!(input.edges[4], (2, 3, 1));
}

#[test]
fn test_parse_accepts_any_whitespace_and_ignores_trailing_tokens() {
    let input = parse_input("  3 2 0 1 5\t1 2 3   99 ").unwrap();
    assert_eq!(
        input,
        GraphInput {
            vertex_count: 3,
            edges: vec![(0, 1, 5), (1, 2, 3)],
        }
    );
}

#[test]
fn test_parse_reports_malformed_token() {
    match parse_input("3\n1\n0 x 2\n") {
        Err(Error::Parse { token, position }) => {
            assert_eq!(token, "x");
            assert_eq!(position, 3);
        }
        other => panic!("expected Parse error, got {:?}", other),
    }
}

#[test]
fn test_parse_reports_truncated_input() {
    assert!(matches!(
        parse_input(""),
        Err(Error::UnexpectedEnd { expected: "vertex count" })
    ));
    assert!(matches!(
        parse_input("3\n2\n0 1 5\n1 2"),
        Err(Error::UnexpectedEnd { expected: "edge cost" })
    ));
}

#[test]
fn test_run_rejects_invalid_graphs() {
    let out_of_range = parse_input("2\n1\n0 2 1\n").unwrap();
    assert!(matches!(
        run(&out_of_range, &DriverConfig::default()),
        Err(Error::InvalidReference { vertex: 2, vertex_count: 2 })
    ));

    let negative = parse_input("2\n1\n0 1 -3\n").unwrap();
    assert!(matches!(
        run(&negative, &DriverConfig::default()),
        Err(Error::NegativeWeight { from: 0, to: 1, .. })
    ));

    let bad_source = DriverConfig {
        source: 9,
        ..Default::default()
    };
    assert!(matches!(
        run(&parse_input("1 0").unwrap(), &bad_source),
        Err(Error::InvalidReference { vertex: 9, .. })
    ));
}

#[test]
fn test_text_report_uses_markers() {
    let result = run(&parse_input("3\n1\n0 1 2\n").unwrap(), &DriverConfig::default()).unwrap();
    assert_eq!(
        format_report(&result),
        "distances: [0, 2, inf]\nparents: [None, 0, None]"
    );
}

#[test]
fn test_run_text_for_both_strategies() {
    for strategy in [FrontierStrategy::Lazy, FrontierStrategy::Rebuild] {
        let config = DriverConfig {
            strategy,
            ..Default::default()
        };
        assert_eq!(
            run_text(DIAMOND, &config).unwrap(),
            "distances: [0, 1, 2, 3]\nparents: [None, 0, 1, 2]"
        );
    }
}

#[test]
fn test_json_report() {
    let result = run(&parse_input("3 1 0 1 2").unwrap(), &DriverConfig::default()).unwrap();
    let json = format_json(&result).unwrap();
    assert_eq!(
        json,
        r#"{"source":0,"distances":[0,2,null],"parents":[null,0,null]}"#
    );

    let report: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(report.distances, vec![Some(0), Some(2), None]);

    let config = DriverConfig {
        json: true,
        ..Default::default()
    };
    assert_eq!(run_text("3 1 0 1 2", &config).unwrap(), json);
}

#[test]
fn test_strategy_names_parse() {
    assert_eq!("lazy".parse::<FrontierStrategy>(), Ok(FrontierStrategy::Lazy));
    assert_eq!("Rebuild".parse::<FrontierStrategy>(), Ok(FrontierStrategy::Rebuild));
    assert!("fibonacci".parse::<FrontierStrategy>().is_err());
    assert_eq!(FrontierStrategy::Rebuild.to_string(), "rebuild");
}

#[test]
fn test_distances_beyond_i64_are_reported_exactly() {
    let input = "3\n2\n0 1 5000000000000000000\n1 2 5000000000000000000\n";
    assert_eq!(
        run_text(input, &DriverConfig::default()).unwrap(),
        "distances: [0, 5000000000000000000, 10000000000000000000]\nparents: [None, 0, 1]"
    );

    let result = run(&parse_input(input).unwrap(), &DriverConfig::default()).unwrap();
    assert_eq!(result.distance(2), Some(10_000_000_000_000_000_000));
}

#[test]
fn test_max_i64_edge_is_reachable() {
    let config = DriverConfig {
        strategy: FrontierStrategy::Rebuild,
        ..Default::default()
    };
    assert_eq!(
        run_text("2\n1\n0 1 9223372036854775807\n", &config).unwrap(),
        "distances: [0, 9223372036854775807]\nparents: [None, 0]"
    );
}

#[test]
fn test_huge_vertex_count_is_an_error() {
    let input = parse_input("1000000000000000000 0").unwrap();
    assert!(matches!(
        run(&input, &DriverConfig::default()),
        Err(Error::TooManyVertices { vertices: 1_000_000_000_000_000_000 })
    ));
    assert!(run_text("1000000000000000000 0", &DriverConfig::default()).is_err());
}
