use clap::{ArgAction, Parser};
use rpncalc::Calculator;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rpn")]
#[command(about = "Evaluate reverse polish math expressions, brackets allowed")]
#[command(version)]
struct Cli {
    /// Expression to evaluate, starts the interactive prompt if missing
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
    /// Fail when operands are left over instead of returning the top one
    #[arg(long)]
    strict: bool,
    /// Don't load or save line history
    #[arg(long)]
    no_history: bool,
    /// History file, defaults to ~/.rpn_history
    #[arg(long, value_name = "PATH")]
    history: Option<PathBuf>,
    /// More logging, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

mod repl {
    use rpncalc::Calculator;

    // (expression, expected result)
    pub const STARTUP: &[(&str, &str)] = &[
        ("2 3 +", "5.0"),
        ("3 2 -", "1.0"),
        ("2 3 *", "6.0"),
        ("3 4 2 * 1 5 - 2 3 / +", "-3.33333"),
        ("3.141 2 3 + 1.571 sin *", "4.9999"),
        ("(3.141 (2 3 +) (1.571 sin) *)", "4.9999"),
    ];

    pub const MORE: &[(&str, &str)] = &[
        ("3.14159 cos", "-0.9999"),
        ("20 10 10 + - 5 *", "0.0"),
        ("10 5 /", "2.0"),
        ("1.57 cos 0.7854 tan *", "0.000796"),
    ];

    pub fn run_battery(cx: &Calculator, cases: &[(&str, &str)]) {
        println!("\nRunning test cases...\n");
        for (expr, expected) in cases {
            match cx.evaluate(expr) {
                Ok(r) => println!("Input: {} | Expected result: {} | Actual result: {}", expr, expected, r),
                Err(e) => println!("Input: {} | Expected result: {} | Eval error: {}", expr, expected, e),
            }
        }
        println!();
    }

    pub fn evalexpr(cx: &Calculator, input: &str) -> bool {
        match cx.flatten(input) {
            Err(e) => println!("Parse error: {}", e),
            Ok(rpn) => match cx.eval(&rpn) {
                Err(e) => println!("Eval error: {}", e),
                Ok(r) => {
                    println!("{} = {}", rpn, r);
                    return true;
                }
            },
        }
        false
    }

    pub enum Command<'a> {
        Quit,
        Battery,
        Skip,
        Eval(&'a str),
    }

    pub fn command(line: &str) -> Command<'_> {
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            Command::Quit
        } else if line.eq_ignore_ascii_case("r") {
            Command::Battery
        } else if line.is_empty() {
            Command::Skip
        } else {
            Command::Eval(line)
        }
    }
}

fn main() -> Result<(), String> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let cx = if cli.strict {
        Calculator::strict()
    } else {
        Calculator::new()
    };
    log::debug!("leftover operands policy: {:?}", cx.residual());

    if !cli.expression.is_empty() {
        let input = cli.expression.join(" ");
        if !repl::evalexpr(&cx, &input) {
            std::process::exit(1);
        }
        return Ok(());
    }

    let histpath = match (cli.no_history, cli.history) {
        (true, _) => None,
        (false, Some(path)) => Some(path),
        (false, None) => dirs::home_dir().map(|h| h.join(".rpn_history")),
    };

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            log::info!("no history at {}", path.display());
        }
    }

    repl::run_battery(&cx, repl::STARTUP);
    println!("'r' to run more testcases, 'q' to quit");
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match repl::command(&line) {
                    repl::Command::Quit => break,
                    repl::Command::Battery => repl::run_battery(&cx, repl::MORE),
                    repl::Command::Skip => (),
                    repl::Command::Eval(input) => match cx.evaluate(input) {
                        Err(e) => println!("Eval error: {}", e),
                        Ok(r) => println!("Result: {}", r),
                    },
                }
            }
        }
    }

    if let Some(path) = &histpath {
        rl.save_history(path)
            .map_err(|e| format!("Saving history to {}: {}", path.display(), e))?;
    }
    Ok(())
}
