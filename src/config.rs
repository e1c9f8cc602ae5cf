use crate::args::Args;

/// Port the inspection server listens on when `--port` is absent.
pub const DEFAULT_PORT: &str = "3000";

/// Executable name used when `--elm-format-path` is absent. This is the
/// external tool's contract, not something this crate controls.
pub const DEFAULT_FORMATTER_PATH: &str = "elm-format";

/// The mutually exclusive operating mode of an invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// One-shot analysis run, messages logged to the console.
    Analyse,
    /// Long-lived inspection server.
    Serve,
}

/// Fully-defaulted invocation configuration.
///
/// Constructed once per invocation and handed by value to whichever
/// collaborator is dispatched; never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    pub mode: Mode,
    /// Kept as the raw string from the command line. Numeric coercion is the
    /// consuming collaborator's business, see [`crate::commands::serve`].
    pub port: String,
    pub formatter_path: String,
}

/// Outcome of resolving an invocation.
///
/// The caller acts on exactly one variant; there is no way to express
/// "both modes" or "no mode".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// `--help`/`-h` was given; print the usage block and stop.
    HelpRequested,
    /// The working directory holds no project manifest; report and stop.
    PreconditionFailed,
    /// Hand the configuration to the collaborator selected by its mode.
    Dispatch(Configuration),
}

/// Apply the per-field defaulting policy. Total and pure: absence of a flag
/// is never an error, and fields do not influence each other.
pub fn build_configuration(args: &Args) -> Configuration {
    let port = match args.port.as_deref() {
        Some(port) if !port.is_empty() => port.to_string(),
        _ => DEFAULT_PORT.to_string(),
    };
    let formatter_path = match args.elm_format_path.as_deref() {
        Some(path) if !path.is_empty() => path.to_string(),
        _ => DEFAULT_FORMATTER_PATH.to_string(),
    };
    let mode = if args.serve { Mode::Serve } else { Mode::Analyse };

    Configuration { mode, port, formatter_path }
}

/// Map parsed flags and the manifest-existence observation to a dispatch
/// decision. Pure: the filesystem check happens at the caller, so every
/// branch is testable without touching the process environment.
///
/// Help takes priority over everything else; the precondition gates both
/// modes equally.
pub fn resolve(args: &Args, has_project_manifest: bool) -> Resolution {
    if args.help {
        return Resolution::HelpRequested;
    }
    if !has_project_manifest {
        return Resolution::PreconditionFailed;
    }
    Resolution::Dispatch(build_configuration(args))
}
