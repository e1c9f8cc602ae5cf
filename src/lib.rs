use crate::args::Args;
use crate::config::{Mode, Resolution};
use crate::status::ExitStatus;

pub mod args;
pub mod commands;
pub mod config;
pub mod logging;
pub mod manifest;
pub mod status;

pub use config::{Configuration, build_configuration, resolve};

pub fn run(args: Args) -> anyhow::Result<ExitStatus> {
    logging::init_logging(args.global_options.log_level.unwrap_or_default());

    // Help takes absolute priority, so the manifest check is skipped entirely
    // on that path. `resolve` itself never touches the filesystem.
    let has_project_manifest = !args.help && manifest::project_manifest_exists();

    match config::resolve(&args, has_project_manifest) {
        Resolution::HelpRequested => {
            print!("{}", args::USAGE);
            Ok(ExitStatus::Failure)
        }
        Resolution::PreconditionFailed => {
            manifest::report_missing_manifest();
            // Nothing to do is not a failure: wrapping scripts rely on a
            // clean exit when run outside a project root.
            Ok(ExitStatus::Success)
        }
        Resolution::Dispatch(config) => match config.mode {
            Mode::Serve => commands::serve::serve(&config),
            Mode::Analyse => commands::analyse::analyse(&config),
        },
    }
}
