use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "advent-scaffold")]
#[command(about = "Create the example input and solution stub for an Advent of Code day")]
pub struct Cli {
    /// Day to scaffold, 1-25. Anything after it is ignored.
    #[arg(value_name = "DAY", allow_hyphen_values = true, trailing_var_arg = true)]
    pub args: Vec<String>,

    #[arg(long, help = "Project root (defaults to this crate's directory)")]
    pub root: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Cli {
    pub fn day(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}
