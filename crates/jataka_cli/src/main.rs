use clap::{Parser, Subcommand};
use jataka_ephem::HouseCusps;
use jataka_time::{birth_instant, jd_from_utc};
use jataka_vedic::{
    current_period, house_of, mangal_dosha, nakshatra_index, nakshatra_name, rashi_from_longitude,
};

#[derive(Parser)]
#[command(name = "jataka", about = "Jataka chart math CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from ecliptic longitude
    Rashi {
        /// Ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra from ecliptic longitude
    Nakshatra {
        /// Ecliptic longitude in degrees
        lon: f64,
    },
    /// House membership for a longitude given 12 cusps
    House {
        /// Ecliptic longitude in degrees
        lon: f64,
        /// Cusp longitudes for houses 1 through 12
        #[arg(long, num_args = 12, value_delimiter = ',')]
        cusps: Vec<f64>,
    },
    /// Mangal dosha verdict for a Mars house placement
    Manglik {
        /// House number Mars occupies (1-12)
        house: u8,
    },
    /// Active Vimshottari period for a natal Moon longitude
    Dasha {
        /// Moon ecliptic longitude at birth in degrees
        moon_lon: f64,
        /// Years elapsed since birth
        #[arg(long, default_value = "0.0")]
        elapsed: f64,
    },
    /// Julian Date (UT) for a local birth date, time, and IANA zone
    Julian {
        /// Date of birth (YYYY-MM-DD)
        date: String,
        /// Local time of birth (HH:MM or HH:MM:SS)
        time: String,
        /// IANA timezone name, e.g. Asia/Kolkata
        #[arg(long, default_value = "UTC")]
        zone: String,
    },
}

fn require_finite(value: f64, what: &str) {
    if !value.is_finite() {
        eprintln!("{what} must be finite, got {value}");
        std::process::exit(1);
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rashi { lon } => {
            require_finite(lon, "Longitude");
            let rashi = rashi_from_longitude(lon);
            println!("{} ({})", rashi.name(), rashi.western_name());
        }

        Commands::Nakshatra { lon } => {
            require_finite(lon, "Longitude");
            let idx = nakshatra_index(lon);
            match nakshatra_name(idx) {
                Some(name) => println!("{name} (index {idx})"),
                None => {
                    eprintln!("Longitude {lon} maps to no nakshatra segment");
                    std::process::exit(1);
                }
            }
        }

        Commands::House { lon, cusps } => {
            require_finite(lon, "Longitude");
            for &c in &cusps {
                require_finite(c, "Cusp longitude");
            }
            let arr: [f64; 12] = match cusps.as_slice().try_into() {
                Ok(a) => a,
                Err(_) => {
                    eprintln!("Expected 12 cusp longitudes, got {}", cusps.len());
                    std::process::exit(1);
                }
            };
            let house = house_of(lon, &HouseCusps::new(arr));
            println!("House {house}");
        }

        Commands::Manglik { house } => {
            if !(1..=12).contains(&house) {
                eprintln!("Invalid house: {house} (1-12)");
                std::process::exit(1);
            }
            println!("{}", mangal_dosha(house).verdict);
        }

        Commands::Dasha { moon_lon, elapsed } => {
            require_finite(moon_lon, "Moon longitude");
            require_finite(elapsed, "Elapsed years");
            if elapsed < 0.0 {
                eprintln!("Elapsed years must be non-negative, got {elapsed}");
                std::process::exit(1);
            }
            let period = current_period(moon_lon, elapsed);
            println!(
                "{} ({}) - {:.4} years remaining",
                period.graha.name(),
                period.graha.english_name(),
                period.remaining_years
            );
        }

        Commands::Julian { date, time, zone } => {
            let birth = match birth_instant(&date, &time, &zone) {
                Ok(instant) => instant,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };
            println!("UTC: {}", birth.format("%Y-%m-%d %H:%M:%S"));
            println!("JD (UT): {:.6}", jd_from_utc(birth));
        }
    }
}
