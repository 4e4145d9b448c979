use anyhow::Result;
use clap::{App as Cli, AppSettings, Arg, ArgMatches, SubCommand};
use log::*;
use portfolio::app::{App, Command};
use portfolio::catalog::ExperienceKind;
use portfolio::config::Config;
use portfolio::logger;
use portfolio::state::{ContactForm, Facet, FilterSelection};
use portfolio::{AppError, AppResult};

fn json_flag<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("json")
        .long("json")
        .help("Print JSON instead of text")
}

fn cli<'a, 'b>() -> Cli<'a, 'b> {
    Cli::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .takes_value(true)
                .help("Directory containing config.yml"),
        )
        .subcommand(
            SubCommand::with_name("projects")
                .about("List projects, optionally filtered")
                .arg(
                    Arg::with_name("category")
                        .long("category")
                        .value_name("CATEGORY")
                        .default_value("All"),
                )
                .arg(
                    Arg::with_name("tech")
                        .long("tech")
                        .value_name("TECH")
                        .default_value("All"),
                )
                .arg(json_flag()),
        )
        .subcommand(SubCommand::with_name("facets").about("List filter options"))
        .subcommand(
            SubCommand::with_name("research")
                .about("List publications")
                .arg(
                    Arg::with_name("expand")
                        .long("expand")
                        .value_name("ID")
                        .multiple(true)
                        .number_of_values(1)
                        .help("Show the abstract of a publication"),
                )
                .arg(json_flag()),
        )
        .subcommand(SubCommand::with_name("skills").about("List skills").arg(json_flag()))
        .subcommand(
            SubCommand::with_name("experience")
                .about("List the experience timeline")
                .arg(
                    Arg::with_name("kind")
                        .long("kind")
                        .value_name("KIND")
                        .help("Work or Education"),
                )
                .arg(json_flag()),
        )
        .subcommand(SubCommand::with_name("about").about("Show the about section").arg(json_flag()))
        .subcommand(
            SubCommand::with_name("contact")
                .about("Send a message through the contact form")
                .arg(Arg::with_name("name").long("name").takes_value(true).required(true))
                .arg(Arg::with_name("email").long("email").takes_value(true).required(true))
                .arg(Arg::with_name("subject").long("subject").takes_value(true).required(true))
                .arg(Arg::with_name("message").long("message").takes_value(true).required(true)),
        )
}

fn facet<T: std::str::FromStr>(matches: &ArgMatches, name: &str) -> AppResult<Facet<T>>
where
    T::Err: std::fmt::Display,
{
    matches
        .value_of(name)
        .unwrap_or("All")
        .parse()
        .map_err(|e: T::Err| AppError::InvalidArgument(e.to_string()))
}

fn parse_command(matches: &ArgMatches) -> AppResult<Command> {
    let text = |m: &ArgMatches, name: &str| m.value_of(name).unwrap_or_default().to_owned();
    let command = match matches.subcommand() {
        ("projects", Some(m)) => Command::Projects {
            selection: FilterSelection {
                category: facet(m, "category")?,
                tech: facet(m, "tech")?,
            },
            json: m.is_present("json"),
        },
        ("facets", _) => Command::Facets,
        ("research", Some(m)) => Command::Research {
            expand: m
                .values_of("expand")
                .map(|ids| ids.map(str::to_owned).collect())
                .unwrap_or_default(),
            json: m.is_present("json"),
        },
        ("skills", Some(m)) => Command::Skills {
            json: m.is_present("json"),
        },
        ("experience", Some(m)) => Command::Experience {
            kind: m
                .value_of("kind")
                .map(|kind| kind.parse::<ExperienceKind>())
                .transpose()
                .map_err(|e| AppError::InvalidArgument(e.to_string()))?,
            json: m.is_present("json"),
        },
        ("about", Some(m)) => Command::About {
            json: m.is_present("json"),
        },
        ("contact", Some(m)) => Command::Contact(ContactForm {
            name: text(m, "name"),
            email: text(m, "email"),
            subject: text(m, "subject"),
            message: text(m, "message"),
        }),
        (other, _) => {
            return Err(AppError::InvalidArgument(format!(
                "Unknown command '{}'",
                other
            )))
        }
    };
    Ok(command)
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    logger::init(config.log_level)?;
    debug!("Loaded configuration from {:?}.", config.file_path());

    let command = parse_command(&matches)?;
    let output = App::new(config).run(command).await?;
    println!("{}", output.trim_end());
    Ok(())
}
