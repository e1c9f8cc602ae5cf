use elm_analyse::args::Args;
use elm_analyse::run;
use elm_analyse::status::ExitStatus;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse_permissive(std::env::args());

    match run(args) {
        Ok(status) => status.into(),
        Err(err) => {
            use std::io::Write;

            // Use `writeln` instead of `eprintln` to avoid panicking when the stderr pipe is broken.
            let mut stderr = std::io::stderr().lock();

            // This communicates that this isn't a typical diagnostic but elm-analyse itself
            // hard-errored for some reason (e.g. the serve collaborator rejected the port)
            writeln!(stderr, "elm-analyse failed").ok();

            for cause in err.chain() {
                writeln!(stderr, "  Cause: {cause}").ok();
            }

            ExitStatus::Error.into()
        }
    }
}
