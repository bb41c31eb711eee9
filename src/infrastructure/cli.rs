use clap::Parser;

use crate::{domain::environment::Environment, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "ENVIRONMENT",
        help = "Study environment to start in (library or cafe)"
    )]
    pub environment: Option<Environment>,

    #[arg(long, help = "Skip the splash screen")]
    pub no_splash: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from(["studynook"])?;
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 30.0);
        assert_eq!(cli.environment, None);
        assert!(!cli.no_splash);
        Ok(())
    }

    #[test]
    fn test_environment_and_splash_flags() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from(["studynook", "--environment", "Cafe", "--no-splash"])?;
        assert_eq!(cli.environment, Some(Environment::Cafe));
        assert!(cli.no_splash);
        Ok(())
    }

    #[test]
    fn test_unknown_environment_is_rejected() {
        assert!(Cli::try_parse_from(["studynook", "-e", "beach"]).is_err());
    }
}
