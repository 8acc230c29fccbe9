mod catalog;
mod error;
mod session;
mod student;

use anyhow::Result;
use clap::Parser;

/// Interactive console for tracking students, course enrollments, and
/// tuition payments against a fixed course catalog. State is in-memory and
/// lives for one session only.
#[derive(Parser)]
#[command(name = "registrar", version, about = "Student management console")]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    session::print_banner("Welcome to the Student Management System");
    session::Session::new().run()
}
