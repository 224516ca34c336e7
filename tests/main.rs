use assert_matches::assert_matches;
use optreg::{derive::*, ConfigError, Flag, MatchError, Options};
use rstest::rstest;

#[test]
fn builder_compiles() {
    Options::new();
}

#[test]
fn builder_round_trip() {
    // Setup
    let mut count: u32 = 0;
    let mut ratio: f32 = 0.0;
    let mut name: String = String::default();
    let mut verbose: bool = false;
    let mut options = Options::new()
        .header("Usage: program [OPTIONS]\n")
        .terminal_width(80);
    options
        .add_value(&mut count, 1, Flag::new("count", 'c').help("Count."))
        .unwrap();
    options
        .add_value(&mut ratio, 0.5, Flag::new("ratio", None).help("Ratio."))
        .unwrap();
    options
        .add_value(&mut name, String::default(), Flag::new("name", 'n').help("Name."))
        .unwrap();
    options
        .add_switch(&mut verbose, false, Flag::new("verbose", 'v').help("Verbose."))
        .unwrap();

    // Execute
    let usage = options.usage();
    options
        .parse_tokens(&["-vc", "7", "operand", "--rat=0.25", "--name", "-abc", "--", "-v"])
        .unwrap();
    drop(options);

    // Verify
    assert_eq!(
        usage,
        "Usage: program [OPTIONS]
  -c --count      Count. <default: 1>
  --ratio         Ratio. <default: 0.5>
  -n --name       Name.
  -v --verbose    Verbose. <switch>

"
    );
    assert_eq!(count, 7);
    assert_eq!(ratio, 0.25);
    assert_eq!(name, "-abc");
    assert!(verbose);
}

#[rstest]
#[case(vec!["--unknown"], MatchError::InvalidOption("unknown".to_string()))]
#[case(vec!["-x"], MatchError::InvalidShortOption('x'))]
#[case(vec!["--count"], MatchError::MissingValue("--count".to_string()))]
#[case(vec!["--co", "1"], MatchError::AmbiguousOption {
    name: "co".to_string(),
    candidates: vec!["count".to_string(), "colour".to_string()],
})]
fn builder_parse_error(#[case] tokens: Vec<&str>, #[case] expected: MatchError) {
    // Setup
    let mut count: u32 = 0;
    let mut colour: String = String::default();
    let mut options = Options::new();
    options
        .add_value(&mut count, 1, Flag::new("count", 'c'))
        .unwrap();
    options
        .add_value(&mut colour, String::default(), Flag::new("colour", None))
        .unwrap();

    // Execute
    let error = options.parse_tokens(&tokens).unwrap_err();

    // Verify
    assert_eq!(error.cause(), &expected);
    assert_eq!(error.to_string(), format!("Parse error: {expected}"));
}

#[test]
fn builder_config_error() {
    // Setup
    let mut a: u32 = 0;
    let mut b: bool = false;
    let mut options = Options::new();
    options.add_value(&mut a, 0, Flag::new("alpha", 'a')).unwrap();

    // Execute
    let error = options
        .add_switch(&mut b, false, Flag::new("alpha", None))
        .unwrap_err();

    // Verify
    assert_matches!(error, ConfigError::DuplicateOption(name) => {
        assert_eq!(name, "alpha");
    });
}

#[derive(Debug, Default, OptregParser)]
#[optreg(header = "Usage: derived [OPTIONS]\n")]
struct Parameters {
    #[optreg(short = 'c', help = "How many.")]
    count: u32,
    #[optreg(short = 'v', help = "Say more.", group = "Output")]
    verbose: bool,
    #[optreg(long = "out", help = "Where to write.", group = "Output")]
    output_path: String,
    dry_run: bool,
}

#[test]
#[ignore]
fn derive_compiles() {
    Parameters::optreg_parse();
}

#[test]
fn derive_register() {
    // Setup
    let mut parameters = Parameters {
        count: 2,
        verbose: false,
        output_path: "out.txt".to_string(),
        dry_run: false,
    };
    let mut options = Options::new().terminal_width(80);

    // Execute
    parameters.optreg_register(&mut options).unwrap();
    let usage = options.usage();
    options
        .parse_tokens(&["--dry-run", "-v", "--out", "result.txt"])
        .unwrap();
    drop(options);

    // Verify
    assert_eq!(
        usage,
        "  -c --count      How many. <default: 2>

Output:
  -v --verbose    Say more. <switch>
  --out           Where to write. <default: out.txt>

"
    );
    assert_eq!(parameters.count, 2);
    assert!(parameters.verbose);
    assert_eq!(parameters.output_path, "result.txt");
    assert!(parameters.dry_run);
}

#[test]
fn derive_register_conflict() {
    // Setup
    let mut count: u32 = 0;
    let mut parameters = Parameters::default();
    let mut options = Options::new();
    options
        .add_value(&mut count, 0, Flag::new("", 'c'))
        .unwrap();

    // Execute
    let error = parameters.optreg_register(&mut options).unwrap_err();

    // Verify
    assert_eq!(error, ConfigError::DuplicateShortOption('c'));
}

#[derive(Default, OptregParser)]
struct Empty {}

#[test]
fn derive_empty() {
    let mut empty = Empty {};
    let mut options = Options::new();
    empty.optreg_register(&mut options).unwrap();
    assert_eq!(options.usage(), "");
    assert_eq!(options.option_string(), "");
}
