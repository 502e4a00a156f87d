use super::*;

#[test]
fn parses_collect_with_overrides() {
    let cli = Cli::try_parse_from([
        "trendscope",
        "collect",
        "--regions",
        "US,GB",
        "--raw",
        "out/raw.csv",
        "--api-key",
        "abc",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Collect {
            source: SourceArgs {
                regions: Some(ref r),
                api_key: Some(ref k),
            },
            raw: Some(ref p),
        } if r == "US,GB" && k == "abc" && p == "out/raw.csv"
    ));
}

#[test]
fn parses_bare_collect() {
    let cli = Cli::try_parse_from(["trendscope", "collect"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Collect {
            source: SourceArgs {
                regions: None,
                api_key: None,
            },
            raw: None,
        }
    ));
}

#[test]
fn parses_transform_paths() {
    let cli = Cli::try_parse_from(["trendscope", "transform", "--raw", "a.csv", "--out", "b.csv"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Transform {
            raw: Some(ref r),
            out: Some(ref o),
        } if r == "a.csv" && o == "b.csv"
    ));
}

#[test]
fn transform_does_not_accept_regions() {
    assert!(Cli::try_parse_from(["trendscope", "transform", "--regions", "US"]).is_err());
}

#[test]
fn run_defaults_to_static_categories() {
    let cli = Cli::try_parse_from(["trendscope", "run"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Run {
            fetch_categories: false,
            ..
        }
    ));
}

#[test]
fn run_accepts_fetch_categories() {
    let cli = Cli::try_parse_from(["trendscope", "run", "--fetch-categories", "--regions", "JP"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Run {
            fetch_categories: true,
            source: SourceArgs {
                regions: Some(ref r),
                ..
            },
            ..
        } if r == "JP"
    ));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["trendscope"]).is_err());
}
