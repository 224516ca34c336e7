use optreg::derive::*;

#[derive(Debug, Default, OptregParser)]
#[optreg(header = "Usage: demo_derived [OPTIONS]\n\n")]
struct Parameters {
    #[optreg(short = 'a', help = "The number of apples.")]
    apple: usize,
    #[optreg(short = 'b', help = "Whether to include a banana.")]
    banana: bool,
    #[optreg(help = "The root of the daikon.")]
    daikon_root: String,
    #[optreg(long = "eggplant-weight", help = "Weight of the eggplant, in grams.")]
    eggplant: f64,
}

fn main() {
    let parameters = Parameters::optreg_parse();
    println!("{parameters:?}");
}
