//! Seed the local member roster and print it back.

use std::path::PathBuf;
use std::process::ExitCode;

use memberbook::app::{member_list, seed_members};
use memberbook::error::AppError;
use memberbook::infra::init_db;

/// Fixed store location, relative to the working directory.
const DB_FILE: &str = "assembly.db";

fn run() -> Result<(), AppError> {
    let db_path = PathBuf::from(DB_FILE);
    log::info!("DB path: {:?}", db_path);

    let pool = init_db(&db_path)?;
    let written = seed_members(&pool)?;
    log::info!("seeded {} member rows", written);

    for m in member_list(&pool)? {
        println!("{}\t{}", m.name, m.code);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{} ({})", e, e.code());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
