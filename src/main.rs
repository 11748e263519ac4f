use std::process::ExitCode;

fn setup_environment() {
    std::env::remove_var("PYTHONHOME");
    std::env::remove_var("PYTHONPATH");
}

fn main() -> ExitCode {
    setup_environment();
    mp3grab_lib::run()
}
