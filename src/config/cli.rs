use crate::core::calendar::ExportFormat;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "health-hub")]
#[command(about = "Cycle tracker, health forms and AI backend client")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override backend.base_url from the configuration
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Estimate the next periods and show them on a calendar
    Track {
        /// First day of the last period (YYYY-MM-DD), defaults to today
        #[arg(long)]
        start: Option<NaiveDate>,
        /// How many days it lasted
        #[arg(long)]
        period_length: Option<u32>,
        /// Days from one period start to the next
        #[arg(long)]
        cycle_length: Option<u32>,
        #[arg(long, value_enum, default_value = "text")]
        format: ExportFormat,
        /// Write the calendar into the storage directory instead of stdout
        #[arg(long)]
        export: bool,
    },
    /// Turn a consent form into a plain-language summary
    Simplify {
        /// File holding the consent text; the bundled sample is used otherwise
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Send symptoms to the disease-detection service
    Detect {
        #[arg(long)]
        symptom: String,
        #[arg(long)]
        duration: String,
        #[arg(long)]
        severity: String,
        #[arg(long, default_value = "")]
        additional: String,
    },
    /// Ask for a 7-day diet plan
    Diet {
        #[arg(long)]
        disease: String,
        #[arg(long)]
        condition: String,
        #[arg(long)]
        instructions: Option<String>,
        #[arg(long)]
        cuisine: Option<String>,
        #[arg(long)]
        region: Option<String>,
    },
    /// Talk to the healthcare assistant; reads stdin when no message is given
    Chat {
        messages: Vec<String>,
        #[arg(long)]
        session_id: Option<String>,
    },
    /// Find a government health scheme
    Recommend {
        #[arg(long)]
        age: String,
        #[arg(long)]
        income: String,
        /// Government, Unorganized or Private
        #[arg(long)]
        employment: String,
        /// Yes or No
        #[arg(long)]
        bank_account: String,
        /// BPL or Non-BPL
        #[arg(long)]
        socio_status: String,
        #[arg(long)]
        family_size: String,
    },
    /// Upload a medical report (pdf, jpg, png) for analysis
    AnalyzeReport { file: PathBuf },
    /// Health myths and facts
    Myths,
    /// Schedule an appointment and notify the patient
    Book {
        #[arg(long)]
        patient: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        doctor: String,
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        time: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List stored appointments
    Appointments,
    /// Hospital bed availability
    Hospitals {
        #[arg(default_value = "")]
        query: String,
    },
    /// Health insurance plans, searched by plan name or provider
    Insurance {
        #[arg(default_value = "")]
        query: String,
        /// Also show waiting period, critical illness cover and affiliated hospitals
        #[arg(long)]
        details: bool,
    },
    /// Blood donor directory
    Donors {
        #[arg(default_value = "")]
        query: String,
        #[arg(long)]
        blood_type: Option<String>,
    },
    /// Vitals snapshot and upcoming visits
    Dashboard,
}
