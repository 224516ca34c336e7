use optreg::{Flag, Options};
use std::net::Ipv4Addr;

fn main() {
    let mut address: Ipv4Addr = Ipv4Addr::UNSPECIFIED;
    let mut port: u16 = 0;
    let mut threads: usize = 0;
    let mut queue: usize = 0;
    let mut help: bool = false;

    let mut options = Options::new()
        .header("Usage: groups [OPTIONS]\n\n")
        .indent_description(24);
    options
        .add_value(
            &mut address,
            Ipv4Addr::LOCALHOST,
            Flag::new("address", 'a')
                .help("The address to listen on.")
                .group("Network"),
        )
        .expect("Invalid Options configuration");
    options
        .add_value(
            &mut port,
            8080,
            Flag::new("port", 'p')
                .help("The port to listen on.")
                .group("Network"),
        )
        .expect("Invalid Options configuration");
    options
        .add_value(
            &mut threads,
            4,
            Flag::new("worker-threads", 't')
                .help("The number of worker threads serving requests, each with their own queue.")
                .group("Performance"),
        )
        .expect("Invalid Options configuration");
    options
        .add_value(
            &mut queue,
            0,
            Flag::new("queue-depth", None)
                .help("The maximum depth of each worker queue (unbounded when 0).")
                .group("Performance"),
        )
        .expect("Invalid Options configuration");
    options
        .add_switch(&mut help, false, Flag::new("help", 'h').help("Show this help message."))
        .expect("Invalid Options configuration");

    let parsed = options.parse();
    let usage = options.usage();
    drop(options);

    match parsed {
        Err(error) => {
            eprintln!("{error}");
            eprint!("{usage}");
            std::process::exit(1);
        }
        Ok(()) if help => {
            print!("{usage}");
        }
        Ok(()) => {
            println!("Listening on {address}:{port} with {threads} threads (queue depth {queue}).");
        }
    }
}
