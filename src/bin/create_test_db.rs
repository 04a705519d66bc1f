use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use pto_tracker::{NewEmployee, create_employee, initialize_db};

/// A utility for creating a test database for the pto_tracker web server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        Some(extension) if !extension.is_empty() => {}
        _ => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test employees...");

    for (fullname, eligible, start_pto) in [
        ("Alice Smith", "yes", 40),
        ("Bob Jones", "yes", 16),
        ("Carol White", "no", 0),
    ] {
        create_employee(
            NewEmployee {
                fullname: fullname.to_owned(),
                eligible: eligible.to_owned(),
                start_pto,
            },
            &conn,
        )?;
    }

    println!("Success!");

    Ok(())
}
