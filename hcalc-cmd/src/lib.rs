//! Command implementations for the HidroCalc CLI.
//!
//! Runs the same calculator controllers as the web forms against a
//! terminal view, lists the stored projects, and exports the demo
//! hyetograph / hydrograph series as CSV or Plotly chart JSON.

use clap::{Args, Subcommand};
use hcalc_core::config::{IdfEndpoint, DEFAULT_BASE_URL};
use hcalc_core::format::NumberLocale;
use hcalc_core::ClientConfig;
use std::io::IsTerminal;
use terminal::Confirm;

pub mod calculate;
pub mod database;
pub mod export;
pub mod terminal;

/// Flags shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct Settings {
    /// Backend scheme and authority, e.g. http://localhost:8000
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Number format for results (`en` or `es-UY`)
    #[arg(long, global = true, default_value = "en")]
    pub locale: NumberLocale,

    /// IDF endpoint to post to (`calculators` or `legacy`)
    #[arg(long, global = true, default_value = "calculators")]
    pub idf_endpoint: IdfEndpoint,

    /// Accept every confirmation prompt
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,
}

impl Settings {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.base_url.trim_end_matches('/'))
            .with_locale(self.locale)
            .with_idf_endpoint(self.idf_endpoint)
    }

    /// How soft-limit prompts get answered.
    pub fn confirm(&self) -> Confirm {
        if self.yes {
            Confirm::Always
        } else if std::io::stdin().is_terminal() {
            Confirm::Ask
        } else {
            Confirm::Never
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Peak discharge by the rational method (POST /api/rational)
    Rational {
        /// Runoff coefficient C (0 - 1)
        #[arg(short = 'c', long)]
        coefficient: String,

        /// Rainfall intensity I in mm/h
        #[arg(short = 'i', long)]
        intensity: String,

        /// Catchment area A in hectares
        #[arg(short = 'a', long)]
        area: String,

        /// Concentration time in hours (reference only)
        #[arg(long)]
        tc: Option<String>,

        #[arg(short = 'd', long)]
        description: Option<String>,
    },

    /// Rational method through the quick endpoint (POST /api/calculate-rational)
    QuickRational {
        #[arg(short = 'c', long)]
        coefficient: String,

        #[arg(short = 'i', long)]
        intensity: String,

        #[arg(short = 'a', long)]
        area: String,
    },

    /// Rainfall intensity from the Uruguayan IDF curves
    Idf {
        /// P3,10 reference depth in mm (50 - 100)
        #[arg(short = 'p', long = "p3-10")]
        p3_10: String,

        /// Return period Tr in years
        #[arg(short = 't', long, default_value = "10")]
        return_period: String,

        /// Storm duration d in hours
        #[arg(short = 'd', long, default_value = "1")]
        duration: String,

        /// Catchment area Ac in km² (omit for a point intensity)
        #[arg(short = 'a', long)]
        area: Option<String>,
    },

    /// Print the runoff coefficient reference table
    Coefficients,

    /// Print the reference P3,10 depth per station
    #[command(name = "p3-10-values")]
    P310Values,

    /// List stored projects
    Projects,

    /// List the watersheds of a project
    Watersheds {
        #[arg(short = 'p', long)]
        project: i64,
    },

    /// List the design storms of a watershed
    DesignStorms {
        #[arg(short = 'w', long)]
        watershed: i64,
    },

    /// Export the demo hyetograph
    SampleHyetograph {
        /// Storm duration in hours
        #[arg(long, default_value_t = 2.0)]
        duration: f64,

        /// Total rainfall depth in mm
        #[arg(long, default_value_t = 85.0)]
        total: f64,

        /// Time step in minutes
        #[arg(long, default_value_t = 5.0)]
        interval: f64,

        /// Output path for `time_min,intensity_mmh` rows
        #[arg(long)]
        csv: Option<String>,

        /// Output path for the Plotly chart JSON
        #[arg(long)]
        chart: Option<String>,
    },

    /// Export the demo triangular hydrograph
    SampleHydrograph {
        /// Peak discharge in m³/s
        #[arg(long, default_value_t = 15.0)]
        peak: f64,

        /// Time to peak in minutes
        #[arg(long, default_value_t = 45.0)]
        time_to_peak: f64,

        /// Base time in minutes
        #[arg(long, default_value_t = 180.0)]
        base_time: f64,

        /// Time step in minutes
        #[arg(long, default_value_t = 5.0)]
        interval: f64,

        /// Output path for `time_min,discharge_m3s` rows
        #[arg(long)]
        csv: Option<String>,

        /// Output path for the Plotly chart JSON
        #[arg(long)]
        chart: Option<String>,
    },

    /// Store a hydrograph CSV under a design storm
    SaveHydrograph {
        #[arg(short = 's', long)]
        design_storm: i64,

        /// `time_min,discharge_m3s` rows with a header line
        #[arg(short = 'f', long)]
        csv: String,

        /// Method that produced the series, e.g. "Rational method"
        #[arg(short = 'm', long)]
        method: String,

        #[arg(short = 'n', long)]
        name: Option<String>,
    },
}

pub async fn run(settings: Settings, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Rational {
            coefficient,
            intensity,
            area,
            tc,
            description,
        } => {
            let form = calculate::rational_form(
                &coefficient,
                &intensity,
                &area,
                tc.as_deref(),
                description.as_deref(),
            );
            calculate::run_rational(&settings, form).await
        }
        Command::QuickRational {
            coefficient,
            intensity,
            area,
        } => {
            let form = calculate::quick_rational_form(&coefficient, &intensity, &area);
            calculate::run_quick_rational(&settings, form).await
        }
        Command::Idf {
            p3_10,
            return_period,
            duration,
            area,
        } => {
            let form = calculate::idf_form(&p3_10, &return_period, &duration, area.as_deref());
            calculate::run_idf(&settings, form).await
        }
        Command::Coefficients => database::run_coefficients(&settings).await,
        Command::P310Values => database::run_p3_10_values(&settings).await,
        Command::Projects => database::run_projects(&settings).await,
        Command::Watersheds { project } => database::run_watersheds(&settings, project).await,
        Command::DesignStorms { watershed } => {
            database::run_design_storms(&settings, watershed).await
        }
        Command::SampleHyetograph {
            duration,
            total,
            interval,
            csv,
            chart,
        } => export::run_sample_hyetograph(
            duration,
            total,
            interval,
            csv.as_deref(),
            chart.as_deref(),
        ),
        Command::SampleHydrograph {
            peak,
            time_to_peak,
            base_time,
            interval,
            csv,
            chart,
        } => export::run_sample_hydrograph(
            peak,
            time_to_peak,
            base_time,
            interval,
            csv.as_deref(),
            chart.as_deref(),
        ),
        Command::SaveHydrograph {
            design_storm,
            csv,
            method,
            name,
        } => database::run_save_hydrograph(&settings, design_storm, &csv, &method, name).await,
    }
}
