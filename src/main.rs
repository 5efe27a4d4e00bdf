use std::io::{self, Read, Write};
use std::process;

use clap::{Parser, Subcommand};
use log::{debug, error};

use subcmixer_lp::config::{init_logging, Settings};
use subcmixer_lp::convert::{parse_payload, to_wire};
use subcmixer_lp::error::{Result, SolveError, EXIT_OK};
use subcmixer_lp::{create_solver_by_name, server, solve_with};

#[derive(Parser)]
#[command(name = "subcmixer-solve")]
#[command(about = "Maximin subcorpus composition LP solver", long_about = None)]
struct Cli {
    /// Solver backend (microlp, highs, gurobi); overrides SOLVER
    #[arg(short, long, global = true)]
    solver: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read one {"A": .., "b": ..} payload from stdin and print the weights
    Solve,
    /// Serve POST /solve over HTTP
    Serve {
        /// Port to listen on; overrides PORT
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn run_once(solver_name: &str) -> Result<String> {
    // Resolve the backend first so a missing one is reported as such
    // even when the payload is bad
    let solver = create_solver_by_name(solver_name)?;

    let mut payload = String::new();
    io::stdin()
        .read_to_string(&mut payload)
        .map_err(|e| SolveError::InvalidPayload(format!("failed to read stdin: {}", e)))?;

    let data = parse_payload(&payload)?;
    let solution = solve_with(solver.as_ref(), &data.a, &data.b)?;
    debug!("solved {} weights with {}", solution.len(), solver.name());
    to_wire(&solution)
}

fn main() {
    let cli = Cli::parse();
    let mut settings = Settings::from_env();
    if let Some(solver) = cli.solver {
        settings.solver = solver;
    }

    match cli.command.unwrap_or(Commands::Solve) {
        Commands::Solve => {
            init_logging("warn");
            match run_once(&settings.solver) {
                Ok(out) => {
                    let mut stdout = io::stdout().lock();
                    if let Err(e) = stdout.write_all(out.as_bytes()).and_then(|_| stdout.flush()) {
                        error!("failed to write solution: {}", e);
                        process::exit(1);
                    }
                    process::exit(EXIT_OK);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(e.exit_code());
                }
            }
        }
        Commands::Serve { port } => {
            init_logging("info");
            if let Some(port) = port {
                settings.port = port;
            }
            let solver = match create_solver_by_name(&settings.solver) {
                Ok(solver) => solver,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(e.exit_code());
                }
            };

            let _sentry = settings.sentry_dsn.as_deref().map(|dsn| {
                sentry::init((
                    dsn,
                    sentry::ClientOptions {
                        release: sentry::release_name!(),
                        ..Default::default()
                    },
                ))
            });

            let result = actix_web::rt::System::new().block_on(server::run(settings, solver));
            if let Err(e) = result {
                error!("server failed: {}", e);
                process::exit(1);
            }
        }
    }
}
