use npl::{printer, Error, ErrorKind, Interpreter};
use std::{
    env,
    io::{self, IsTerminal},
    process,
};

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let result = match args.as_slice() {
        [] => run_prompt(),
        ["--ast", path] => print_ast(path),
        [path] if !path.starts_with("--") => run_file(path),
        _ => {
            eprintln!("Usage: npl [--ast] [script]");
            process::exit(64);
        },
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(exit_code(&e));
    }
}

/// Logging stays off unless `RUST_LOG` is set, e.g. `RUST_LOG=npl=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true).with_level(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn exit_code(e: &Error) -> i32 {
    match e.kind() {
        ErrorKind::Lexical { .. } | ErrorKind::Syntactic { .. } => 65,
        ErrorKind::Io(_) => 74,
        _ => 70,
    }
}

fn run_file(path: &str) -> npl::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let program = npl::parse(&source)?;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut interpreter = Interpreter::new(stdin.lock(), io::stdout());
    if interactive {
        interpreter = interpreter.with_prompt("> ");
    }

    let outcome = interpreter.interpret(&program)?;
    tracing::debug!(?outcome, path, "script finished");
    Ok(())
}

fn print_ast(path: &str) -> npl::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let program = npl::parse(&source)?;
    println!("{}", printer::print(&program));
    Ok(())
}

fn run_prompt() -> npl::Result<()> {
    // Program lines and `input` lines both go through this one lock.
    let stdin = io::stdin();
    let mut interpreter = Interpreter::new(stdin.lock(), io::stdout()).with_prompt("? ");
    interpreter.run_prompt(&mut io::stderr())
}
