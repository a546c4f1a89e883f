//! n26-extract - Extract transactions from N26 CSV exports.

fn main() -> std::process::ExitCode {
    n26::cmd::extract_cmd::main()
}
