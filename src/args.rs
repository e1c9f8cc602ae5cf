use crate::logging::LogLevel;
use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};

/// The fixed usage block printed by `--help`/`-h`.
///
/// Kept as a stable, hand-written block rather than clap's generated help:
/// the two modes and the four recognized flags are a user-facing contract.
pub const USAGE: &str = "\
Usage:
  $ elm-analyse
    # Analyse the project and log messages to the console

  $ elm-analyse -s
    # Analyse the project and start a server. Allows inspection of messages through a browser (default: http://localhost:3000).

Options:
   --help, -h          Print the help output.
   --serve, -s         Enable server mode. Disabled by default.
   --port, -p          The port on which the server should listen. Defaults to 3000.
   --elm-format-path   Path to elm-format. Defaults to `elm-format`.
";

/// Raw invocation flags.
///
/// clap's own help is disabled in favor of [`USAGE`], which exits with a
/// non-zero status. Use [`Args::parse_permissive`] rather than [`Args::parse`]
/// so that unrecognized tokens never abort the run.
#[derive(Debug, Default, Parser)]
#[command(
    name = "elm-analyse",
    version,
    about = "Analyse Elm projects, reveal problems and suggest improvements",
    disable_help_flag = true
)]
pub struct Args {
    /// Print the help output.
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Enable server mode. Disabled by default.
    #[arg(short, long)]
    pub serve: bool,

    /// The port on which the server should listen. Defaults to 3000.
    #[arg(short, long)]
    pub port: Option<String>,

    /// Path to elm-format. Defaults to `elm-format`.
    #[arg(long)]
    pub elm_format_path: Option<String>,

    #[clap(flatten)]
    pub global_options: GlobalOptions,
}

/// All configuration options that can be passed "globally"
#[derive(Debug, Default, clap::Args)]
#[command(next_help_heading = "Global options")]
pub struct GlobalOptions {
    /// The log level. One of: `error`, `warn`, `info`, `debug`, or `trace`.
    /// Defaults to `warn`.
    #[arg(long)]
    pub log_level: Option<LogLevel>,
}

impl Args {
    /// Parse an invocation without ever failing.
    ///
    /// Tokens clap rejects are dropped and parsing is retried, so a flag this
    /// version does not know about never breaks an existing invocation, and a
    /// recognized option used without a value (e.g. a trailing `--port`) falls
    /// back to its default instead of aborting.
    pub fn parse_permissive<I, T>(raw: I) -> Args
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut raw: Vec<String> = raw.into_iter().map(Into::into).collect();

        loop {
            let parsed = Args::try_parse_from(raw.iter());
            match parsed {
                Ok(args) => return args,
                Err(err)
                    if matches!(
                        err.kind(),
                        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
                    ) =>
                {
                    err.exit()
                }
                Err(err) => {
                    if !drop_rejected_token(&mut raw, &err) {
                        // The error does not point at a removable token, so
                        // give up on the remaining input and use defaults.
                        return Args::try_parse_from(["elm-analyse"]).unwrap_or_default();
                    }
                }
            }
        }
    }
}

/// The short flags this crate declares. Kept in sync with [`Args`].
const SHORT_FLAGS: [char; 3] = ['h', 's', 'p'];

/// Remove the token the parse error complains about, returning whether one
/// was found. The reported argument comes as e.g. `--future-flag`, `foo`, or
/// `--port <PORT>` for a recognized option missing its value.
///
/// Rejected short flags need care: the offending member may sit inside a
/// cluster (`-sp` with no port value is reported as `--port <PORT>`), and
/// only that member may be pruned so the recognized rest of the cluster
/// survives the retry.
fn drop_rejected_token(raw: &mut Vec<String>, err: &clap::Error) -> bool {
    let Some(ContextValue::String(rejected)) = err.get(ContextKind::InvalidArg) else {
        return false;
    };
    let flag = rejected
        .split_whitespace()
        .next()
        .unwrap_or(rejected.as_str());
    let short = short_form(flag);

    // Standalone token: `--future-flag`, `--future-flag=value`, `-p`, or a
    // bare positional.
    let position = raw.iter().position(|token| {
        token == flag
            || token
                .strip_prefix(flag)
                .is_some_and(|rest| rest.starts_with('='))
            || short.is_some_and(|short| token_is_short(token, short))
    });
    if let Some(index) = position {
        if is_short_cluster(&raw[index]) {
            // A rejected cluster can still carry recognized members.
            let kept: String = raw[index]
                .chars()
                .skip(1)
                .filter(|c| SHORT_FLAGS.contains(c))
                .collect();
            replace_or_remove(raw, index, kept);
        } else {
            raw.remove(index);
        }
        return true;
    }

    // The rejected short may hide inside a cluster.
    if let Some(short) = short
        && let Some(index) = raw
            .iter()
            .position(|token| is_short_cluster(token) && token[1..].contains(short))
    {
        let kept: String = raw[index].chars().skip(1).filter(|c| *c != short).collect();
        replace_or_remove(raw, index, kept);
        return true;
    }

    false
}

fn replace_or_remove(raw: &mut Vec<String>, index: usize, kept: String) {
    if kept.is_empty() {
        raw.remove(index);
    } else {
        raw[index] = format!("-{kept}");
    }
}

/// The single-character form of a rejected flag: `-p` itself, or the
/// declared alias when clap reports the long form.
fn short_form(flag: &str) -> Option<char> {
    if let Some(long) = flag.strip_prefix("--") {
        return match long {
            "help" => Some('h'),
            "serve" => Some('s'),
            "port" => Some('p'),
            _ => None,
        };
    }
    let mut chars = flag.strip_prefix('-')?.chars();
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}

fn token_is_short(token: &str, short: char) -> bool {
    let mut chars = token.chars();
    chars.next() == Some('-') && chars.next() == Some(short) && chars.next().is_none()
}

/// `-sp`-style token: several shorts behind one dash, not a long flag.
fn is_short_cluster(token: &str) -> bool {
    token.len() > 2 && token.starts_with('-') && !token.starts_with("--")
}
