//! n26-identify - Report which files are N26 CSV exports.

fn main() -> std::process::ExitCode {
    n26::cmd::identify_cmd::main()
}
