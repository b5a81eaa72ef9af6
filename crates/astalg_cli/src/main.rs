mod logging;

use std::process;

use anyhow::{Context, Result, bail, ensure};
use astalg_core::{ContextConfig, EphemerisContext, SimulationClock, SolarReference};
use astalg_time::{CalendarDateTime, historical_to_jd};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "astalg", about = "Solar ephemeris and Julian Day CLI")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Recompute every quantity instead of reusing the last value per JD
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Julian Day of a calendar date
    Jd {
        /// Date (YYYY-MM-DD[Thh:mm[:ss]][Z])
        date: String,
        /// Read dates before 1582-10-15 in the Julian calendar
        #[arg(long)]
        historical: bool,
    },
    /// Calendar date of a Julian Day
    Calendar {
        /// Julian Day
        jd: f64,
    },
    /// Every solar quantity at one instant
    Sun {
        /// UTC date (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long, conflicts_with = "jd")]
        date: Option<String>,
        /// Julian Day
        #[arg(long)]
        jd: Option<f64>,
    },
    /// Tabulate the equation of time over a date range
    Eqt {
        /// First date (YYYY-MM-DD[Thh:mm[:ss]][Z])
        #[arg(long)]
        start: String,
        /// Last date, inclusive
        #[arg(long)]
        end: String,
        /// Step in days
        #[arg(long, default_value = "1")]
        step: f64,
    },
    /// Replay the reference dates through the simulation clock
    Smoke,
}

const SMOKE_DATES: [CalendarDateTime; 3] = [
    CalendarDateTime { year: 2014, month: 3, day: 22, hour: 3, minute: 11, second: 0 },
    CalendarDateTime { year: 1997, month: 3, day: 22, hour: 3, minute: 11, second: 0 },
    CalendarDateTime { year: 2004, month: 3, day: 22, hour: 3, minute: 11, second: 0 },
];

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let context = EphemerisContext::with_config(ContextConfig {
        memoize: !cli.no_cache,
    });

    if let Err(e) = run(cli.command, context) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Commands, mut context: EphemerisContext) -> Result<()> {
    match command {
        Commands::Jd { date, historical } => {
            let t = parse_date(&date)?;
            let jd = if historical {
                historical_to_jd(t.year, t.month, t.decimal_day())
            } else {
                t.to_julian_day()
            };
            println!("{jd:.6}");
        }

        Commands::Calendar { jd } => {
            let t = CalendarDateTime::from_julian_day(jd);
            println!("{t} (day {} of year)", t.day_of_year());
        }

        Commands::Sun { date, jd } => {
            let jd = match (date, jd) {
                (Some(date), None) => parse_date(&date)?.to_julian_day(),
                (None, Some(jd)) => jd,
                _ => bail!("pass exactly one of --date or --jd"),
            };
            let nutation = context.nutation(jd);
            println!("JD:                        {jd:.6}");
            println!("Mean solar anomaly:        {:.6} deg", context.mean_solar_anomaly(jd));
            println!("Mean lunar longitude:      {:.6} deg", context.mean_lunar_longitude(jd));
            println!("Lunar ascending node:      {:.6} deg", context.lunar_ascending_node(jd));
            println!("Nutation in longitude:     {:.3} arcsec", nutation.longitude_deg * 3600.0);
            println!("Nutation in obliquity:     {:.3} arcsec", nutation.obliquity_deg * 3600.0);
            println!("Mean obliquity:            {:.6} deg", context.mean_obliquity(jd));
            println!("Geometric solar longitude: {:.6} deg", context.geometric_solar_longitude(jd));
            print_reference(&context.solar_reference(jd));
            let stats = context.stats();
            info!(
                evaluations = stats.evaluations,
                cache_hits = stats.cache_hits,
                "context stats"
            );
        }

        Commands::Eqt { start, end, step } => {
            ensure!(step > 0.0, "--step must be positive, got {step}");
            let start = parse_date(&start)?.to_julian_day();
            let end = parse_date(&end)?.to_julian_day();
            ensure!(end >= start, "--end is before --start");

            let count = ((end - start) / step).floor() as u64;
            for i in 0..=count {
                let jd = start + i as f64 * step;
                let eqt = context.equation_of_time(jd);
                println!("{}  {eqt:+8.3} min", CalendarDateTime::from_julian_day(jd));
            }
        }

        Commands::Smoke => {
            let mut clock = SimulationClock::with_context(context);
            for date_time in SMOKE_DATES {
                let state = clock.set(date_time);
                println!(
                    "{} JD {:.6} day {}",
                    state.date_time, state.jd, state.day_of_year
                );
                let reference = clock
                    .solar_reference()
                    .context("simulation clock lost its time")?;
                print_reference(&reference);
                println!();
            }
        }
    }
    Ok(())
}

fn parse_date(s: &str) -> Result<CalendarDateTime> {
    s.parse()
        .with_context(|| format!("invalid date {s:?}, expected YYYY-MM-DDThh:mm:ssZ"))
}

fn print_reference(r: &SolarReference) {
    println!("Mean solar longitude:      {:.6} deg", r.mean_solar_longitude);
    println!("Apparent solar longitude:  {:.6} deg", r.apparent_solar_longitude);
    println!("Apparent obliquity:        {:.6} deg", r.apparent_obliquity);
    println!(
        "Right ascension:           {:.6} deg ({:.6} h)",
        r.solar_right_ascension,
        r.right_ascension_hours()
    );
    println!("Declination:               {:.6} deg", r.solar_declination);
    println!(
        "Equation of time:          {:.4} min ({:.1} s)",
        r.equation_of_time,
        r.equation_of_time_seconds()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["astalg", "sun", "--jd", "2451545", "-vv", "--no-cache"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_cache);
        assert!(matches!(cli.command, Commands::Sun { date: None, jd: Some(_) }));
    }

    #[test]
    fn sun_rejects_both_inputs() {
        let parsed =
            Cli::try_parse_from(["astalg", "sun", "--jd", "2451545", "--date", "2000-01-01"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn bad_date_reports_input() {
        let err = parse_date("2014/03/22").unwrap_err();
        assert!(format!("{err:#}").contains("2014/03/22"));
    }

    #[test]
    fn eqt_rejects_zero_step() {
        let command = Commands::Eqt {
            start: "2024-01-01".into(),
            end: "2024-01-02".into(),
            step: 0.0,
        };
        assert!(run(command, EphemerisContext::new()).is_err());
    }
}
