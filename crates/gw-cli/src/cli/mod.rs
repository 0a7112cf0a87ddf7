use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::{Commands, PortalArgs, ProjectArgs, ProjectsArgs};

/// Top-level CLI parser for the `gw` binary.
#[derive(Debug, Parser)]
#[command(name = "gw", version, about = "Groundwork - construction command center")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON fixture to load instead of the embedded demo data
    #[arg(long, global = true)]
    pub fixture: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            quiet: self.quiet,
            fixture: self.fixture.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, ColorMode, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["gw", "--format", "table", "--verbose", "dashboard"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["gw", "analytics", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Analytics));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["gw", "--format", "xml", "dashboard"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn color_defaults_to_auto() {
        let cli = Cli::try_parse_from(["gw", "dashboard"]).expect("cli should parse");
        assert_eq!(cli.color, ColorMode::Auto);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn projects_args_parse() {
        let cli = Cli::try_parse_from([
            "gw",
            "projects",
            "--status",
            "complete",
            "--search",
            "downtown",
            "--open",
            "arch-7",
        ])
        .expect("cli should parse");

        let Commands::Projects(args) = cli.command else {
            panic!("expected projects command");
        };
        assert_eq!(args.status.as_deref(), Some("complete"));
        assert_eq!(args.search.as_deref(), Some("downtown"));
        assert_eq!(args.open.as_deref(), Some("arch-7"));
    }

    #[test]
    fn project_requires_an_id() {
        assert!(Cli::try_parse_from(["gw", "project"]).is_err());

        let cli = Cli::try_parse_from(["gw", "project", "bloemhof", "--tab", "budget"])
            .expect("cli should parse");
        let Commands::Project(args) = cli.command else {
            panic!("expected project command");
        };
        assert_eq!(args.id, "bloemhof");
        assert_eq!(args.tab.as_deref(), Some("budget"));
    }

    #[test]
    fn portal_flags_are_optional() {
        let cli = Cli::try_parse_from(["gw", "portal"]).expect("cli should parse");
        let Commands::Portal(args) = cli.command else {
            panic!("expected portal command");
        };
        assert_eq!(args.project, None);
        assert!(!args.change_order);
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["gw", "--fixture", "/tmp/data.json", "dashboard"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.fixture.as_deref(), Some("/tmp/data.json"));
    }
}
