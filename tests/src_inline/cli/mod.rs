use super::*;
use clap::Parser;

#[test]
fn filter_parses_columns_and_source() {
    let cli = Cli::parse_from([
        "tabseq",
        "filter",
        "--input",
        "taks.csv",
        "--header-file",
        "headers.txt",
        "--group",
        "id",
        "--property",
        "disadv",
    ]);
    match cli.command {
        Command::Filter(args) => {
            assert_eq!(args.group, "id");
            assert_eq!(args.property, "disadv");
        }
        _ => panic!("expected filter command"),
    }
}

#[test]
fn correlate_splits_column_list() {
    let cli = Cli::parse_from([
        "tabseq",
        "--config",
        "tabseq.toml",
        "correlate",
        "--input",
        "schools.csv",
        "--columns",
        "salary,score,experience",
        "--by",
        "campus",
    ]);
    assert_eq!(cli.config, Some(PathBuf::from("tabseq.toml")));
    match cli.command {
        Command::Correlate(args) => {
            assert_eq!(args.columns, vec!["salary", "score", "experience"]);
            assert_eq!(args.by.as_deref(), Some("campus"));
            assert!(!args.single);
        }
        _ => panic!("expected correlate command"),
    }
}

#[test]
fn single_requires_by() {
    let res = Cli::try_parse_from([
        "tabseq",
        "correlate",
        "--input",
        "schools.csv",
        "--columns",
        "salary,score",
        "--single",
    ]);
    assert!(res.is_err());
}

#[test]
fn delimiter_flag_overrides_settings() {
    let cli = Cli::parse_from(["tabseq", "headers", "--input", "a.tsv", "--delimiter", ";"]);
    match cli.command {
        Command::Headers(args) => {
            let opts = args.source.read_options(&Settings::default()).expect("opts");
            assert_eq!(opts.delimiter, b';');
        }
        _ => panic!("expected headers command"),
    }
}
