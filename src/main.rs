use std::process::ExitCode;

mod runtime;

fn main() -> ExitCode {
    match runtime::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("tagfix: {e}");
            ExitCode::from(2)
        }
    }
}
