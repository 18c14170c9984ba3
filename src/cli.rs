use clap::builder::{FalseyValueParser, PossibleValuesParser};
use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    let file_name_help = concat!(
        "File of expressions to parse, one per line. Can be:\n\n",
        "1. a path to a file\n",
        "2. a single dash to read from stdin\n",
    );
    let file_name_arg =
        Arg::new("FILE_NAME").index(1).required(false).help(file_name_help);

    let code_arg = Arg::new("code")
        .short('c')
        .long("code")
        .required(false)
        .num_args(1)
        .conflicts_with("FILE_NAME")
        .help("Parse a single expression, e.g. -c \"a * b + 2\"");

    let format_help = concat!(
        "How to print parsed trees:\n\n",
        "tuple: ((\"3\", \"*\", \"2\"), \"+\", \"6\")\n",
        "infix: ((3 * 2) + 6)\n",
        "debug: Rust debug representation\n",
    );
    let format_arg = Arg::new("format")
        .short('f')
        .long("format")
        .num_args(1)
        .default_value("tuple")
        .value_parser(PossibleValuesParser::new(["tuple", "infix", "debug"]))
        .env("OPPARSE_FORMAT")
        .help(format_help);

    let history_path_arg = Arg::new("history_path")
        .long("history-path")
        .required(false)
        .num_args(1)
        .default_value("~/.config/opparse/repl-history")
        .help("Path to REPL history file");

    let no_history_arg = Arg::new("no_history")
        .long("no-history")
        .action(ArgAction::SetTrue)
        .help("Disable REPL history? [default: history enabled]");

    Command::new("opparse")
        .version("0.0.0")
        .about("Parse arithmetic expressions with a shift-reduce machine")
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .value_parser(FalseyValueParser::new())
                .env("OPPARSE_DEBUG")
                .help("Log every transition of the parsing machine?"),
        )
        .arg(&file_name_arg)
        .arg(&code_arg)
        .arg(&format_arg)
        .arg(&history_path_arg)
        .arg(&no_history_arg)
}
