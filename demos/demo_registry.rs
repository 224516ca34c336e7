use optreg::{Flag, Options};

fn main() {
    let mut count: u32 = 0;
    let mut name: String = String::default();
    let mut verbose: bool = false;

    let mut options = Options::new().header("Usage: demo_registry [OPTIONS]\n\n");
    options
        .add_value(
            &mut count,
            1,
            Flag::new("count", 'c').help("How many times to greet."),
        )
        .expect("Invalid Options configuration");
    options
        .add_value(
            &mut name,
            "world".to_string(),
            Flag::new("name", 'n').help("Who to greet."),
        )
        .expect("Invalid Options configuration");
    options
        .add_switch(
            &mut verbose,
            false,
            Flag::new("verbose", 'v').help("Explain what is happening."),
        )
        .expect("Invalid Options configuration");

    if let Err(error) = options.parse() {
        eprintln!("{error}");
        eprint!("{}", options.usage());
        std::process::exit(1);
    }

    drop(options);

    if verbose {
        println!("Greeting {name} {count} time(s).");
    }

    for _ in 0..count {
        println!("Hello, {name}!");
    }
}
