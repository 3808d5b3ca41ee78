use clap::Parser;
use health_hub::app::BookingService;
use health_hub::config::Command;
use health_hub::core::calendar::{CalendarWindow, CycleCalendar};
use health_hub::core::chat::ChatSession;
use health_hub::core::consent::{ConsentSimplifier, SAMPLE_CONSENT_TEXT};
use health_hub::core::directory::{
    search_donors, search_hospitals, search_insurance_plans, BLOOD_TYPES, UPCOMING_VISITS, VITALS,
};
use health_hub::core::forms::{
    known_symptom, severity_label, AppointmentForm, DietForm, SchemeForm, SymptomForm,
};
use health_hub::core::report::lab_rows;
use health_hub::core::schemes::SchemeCatalog;
use health_hub::core::tracker::{is_selectable_start, TrackerInputs};
use health_hub::core::{AppointmentStore, ConfigProvider, HealthBackend};
use health_hub::utils::error::ErrorSeverity;
use health_hub::utils::validation::{validate_required_field, Validate};
use health_hub::utils::logger;
use health_hub::{
    CliConfig, CycleProjector, HealthConfig, HealthError, HttpBackend, JsonAppointmentStore,
    LocalStorage, Result, WebhookNotifier,
};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli.command, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn load_config(cli: &CliConfig) -> Result<HealthConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            HealthConfig::from_file(path)?
        }
        None => HealthConfig::default(),
    };

    if let Some(url) = &cli.backend_url {
        config.backend.base_url = url.clone();
        tracing::info!("🔧 Backend URL overridden to: {}", url);
    }

    config.validate()?;
    Ok(config)
}

async fn run(command: Command, config: &HealthConfig) -> Result<()> {
    match command {
        Command::Track {
            start,
            period_length,
            cycle_length,
            format,
            export,
        } => {
            let today = chrono::Local::now().date_naive();
            let mut inputs = TrackerInputs::new(today);
            inputs.start_date = start.unwrap_or(today);
            inputs.period_length = period_length.unwrap_or_else(|| config.period_length());
            inputs.cycle_length = cycle_length.unwrap_or_else(|| config.cycle_length());
            inputs.validate()?;
            if !is_selectable_start(inputs.start_date, today) {
                tracing::warn!(
                    "Start date {} is outside the usual tracking window around {}",
                    inputs.start_date,
                    today
                );
            }

            let params = inputs.to_params();
            if !params.is_consistent() {
                tracing::warn!(
                    "Period length {} is not shorter than cycle length {}; intervals will overlap",
                    params.period_length,
                    params.cycle_length
                );
            }

            let projector = CycleProjector::new(params);
            let calendar = CycleCalendar::new(&projector, CalendarWindow::around(today));

            if export {
                let storage = LocalStorage::new(config.storage_path());
                let filename = calendar.export(&storage, format).await?;
                println!("📁 Calendar saved to: {}", storage.base_path().join(filename).display());
            } else {
                println!("Menstruation estimation for the next 3 months\n");
                println!("{}", calendar.render(format)?);
                println!("Please note that this is only an estimation of your menstrual cycle.");
            }
        }
        Command::Simplify { file } => {
            let text = match file {
                Some(path) => tokio::fs::read_to_string(path).await?,
                None => SAMPLE_CONSENT_TEXT.to_string(),
            };
            let mut simplifier = ConsentSimplifier::new(config.consent_delay());
            println!("Simplifying...");
            match simplifier.simplify(&text).await {
                Some(points) => {
                    println!("\nSimplified Summary");
                    for point in points {
                        println!("\n{}\n  {}", point.title, point.text);
                    }
                }
                None => println!("Nothing to simplify."),
            }
        }
        Command::Detect {
            symptom,
            duration,
            severity,
            additional,
        } => {
            let main_symptom = match known_symptom(&symptom) {
                Some(known) => known.to_string(),
                None => {
                    tracing::debug!("Symptom '{}' is not in the common list", symptom);
                    symptom
                }
            };
            let severity = severity_label(&severity).map(str::to_string).unwrap_or(severity);
            let report = SymptomForm {
                main_symptom,
                duration,
                severity,
                additional_symptoms: additional,
            }
            .into_report()?;
            let backend = HttpBackend::from_config(config)?;
            let diagnosis = backend.detect_disease(&report).await?;
            println!("Possible Conditions");
            println!("Our AI has identified possible conditions based on your symptoms.");
            println!("{}", serde_json::to_string_pretty(&diagnosis)?);
        }
        Command::Diet {
            disease,
            condition,
            instructions,
            cuisine,
            region,
        } => {
            let request = DietForm {
                disease_name: disease,
                condition,
                special_instructions: instructions,
                cuisine,
                region,
            }
            .into_request()?;
            let backend = HttpBackend::from_config(config)?;
            let plan = backend.diet_plan(&request).await?;
            println!("7-Day Diet Plan");
            println!("Condition: {}", plan.condition);
            println!("Disease: {}", plan.disease_name);
            if let Some(restrictions) = plan.special_instructions.filter(|s| !s.is_empty()) {
                println!("Restrictions: {}", restrictions);
            }
            println!("\n{}", plan.diet_plan);
        }
        Command::Chat {
            messages,
            session_id,
        } => {
            let backend = HttpBackend::from_config(config)?;
            let session_id = session_id
                .or_else(|| config.chat.session_id.clone())
                .unwrap_or_else(|| format!("session-{}", chrono::Utc::now().timestamp_millis()));
            let mut session = ChatSession::new(backend, session_id);
            println!("🤖 {}", session.messages()[0].content);

            if messages.is_empty() {
                let mut lines = BufReader::new(tokio::io::stdin()).lines();
                while let Some(line) = lines.next_line().await? {
                    chat_turn(&mut session, &line).await;
                }
            } else {
                for message in messages {
                    println!("🧑 {}", message);
                    chat_turn(&mut session, &message).await;
                }
            }
        }
        Command::Recommend {
            age,
            income,
            employment,
            bank_account,
            socio_status,
            family_size,
        } => {
            let request = SchemeForm {
                age,
                income,
                employment_type: employment,
                bank_account,
                socio_status,
                family_size,
            }
            .into_request()?;
            let catalog = match &config.schemes.catalog_path {
                Some(path) => SchemeCatalog::from_file(path)?,
                None => SchemeCatalog::bundled()?,
            };
            let backend = HttpBackend::from_config(config)?;
            let recommendation = backend.recommend_scheme(&request).await?;
            match catalog.lookup(&recommendation.code) {
                Some(scheme) => {
                    println!("🏥 {}", scheme.name);
                    println!("{}", scheme.short_description);
                    println!("\n{}", scheme.long_description);
                    println!("\nVisit Website: {}", scheme.website);
                }
                None => println!("No details available for scheme '{}'.", recommendation.code),
            }
        }
        Command::AnalyzeReport { file } => {
            let backend = HttpBackend::from_config(config)?;
            let analysis = backend.analyze_report(&file).await?;
            tracing::info!("Report analyzed successfully");

            if let Some(text) = &analysis.extracted_text {
                println!("🔍 Extracted Report Data");
                println!("{:<20} {:<12} Reference Range", "Test", "Result");
                for row in lab_rows(text) {
                    println!("{:<20} {:<12} {}", row.test, row.result, row.reference_range);
                }
            }
            if let Some(insights) = &analysis.medical_insights {
                if !insights.key_terms.is_empty() {
                    println!("\n📌 Key Medical Terms: {}", insights.key_terms.join(", "));
                }
                if !insights.possible_conditions.is_empty() {
                    println!("\n⚠️ Possible Health Concerns");
                    for condition in &insights.possible_conditions {
                        println!(
                            "- {}: {}",
                            condition.condition.as_deref().unwrap_or("Unknown Condition"),
                            condition.implication.as_deref().unwrap_or("No implication provided")
                        );
                        if condition.tests.is_empty() {
                            println!("  No test data available");
                        } else {
                            println!("  Tests Considered: {}", condition.tests.join(", "));
                        }
                    }
                }
                if !insights.advice.is_empty() {
                    println!("\n🩺 Medical Advice");
                    for advice in &insights.advice {
                        println!("- {}", advice);
                    }
                }
            }
        }
        Command::Myths => {
            let backend = HttpBackend::from_config(config)?;
            let feed = backend.myths().await?;
            println!("Health Myths & Facts");
            for myth in feed.myths {
                println!("\n{}\n  {}", myth.text, myth.link);
            }
        }
        Command::Book {
            patient,
            phone,
            doctor,
            date,
            time,
            notes,
        } => {
            let notifier_url = config.notifier_url();
            let webhook = validate_required_field("notifier.webhook_url", &notifier_url)?;
            let notifier = WebhookNotifier::new(webhook, config.request_timeout())?;
            let store = JsonAppointmentStore::new(LocalStorage::new(config.storage_path()));
            let service = BookingService::new(store, notifier).with_country_code(config.country_code());

            let outcome = service
                .book(AppointmentForm {
                    patient_name: patient,
                    phone,
                    doctor_name: doctor,
                    date: Some(date),
                    time,
                    notes,
                })
                .await?;
            println!("✅ Appointment successfully scheduled!");
            if !outcome.notified {
                println!("⚠️ The SMS confirmation could not be sent.");
            }
        }
        Command::Appointments => {
            let store = JsonAppointmentStore::new(LocalStorage::new(config.storage_path()));
            let appointments = store.list().await?;
            if appointments.is_empty() {
                println!("No appointments scheduled.");
            }
            for a in appointments {
                let day = a.date.get(..10).unwrap_or(&a.date);
                println!("{} {} | {} with {} | {}", day, a.time, a.patient_name, a.doctor_name, a.status);
            }
        }
        Command::Hospitals { query } => {
            let hospitals = search_hospitals(&query);
            if hospitals.is_empty() {
                println!("No hospitals found");
            }
            for h in hospitals {
                println!("{} ({}, {}) ☎ {}", h.name, h.location, h.distance, h.phone);
                println!(
                    "  ICU {}/{}  General {}/{}  Emergency {}/{}",
                    h.beds.icu.available,
                    h.beds.icu.total,
                    h.beds.general.available,
                    h.beds.general.total,
                    h.beds.emergency.available,
                    h.beds.emergency.total
                );
            }
        }
        Command::Insurance { query, details } => {
            let plans = search_insurance_plans(&query);
            if plans.is_empty() {
                println!("No insurance plans found");
            }
            for plan in plans {
                println!("{} ({})", plan.name, plan.provider);
                println!("  {} | Coverage: {} | {}+ Hospitals", plan.premium, plan.coverage, plan.hospitals);
                for condition in plan.conditions {
                    println!("  - {}", condition);
                }
                if details {
                    println!("  Waiting Period: {}", plan.waiting_period);
                    println!("  Critical Illness Coverage: {}", plan.critical_illness);
                    println!("  Affiliated Hospitals: {}", plan.affiliated_hospitals.join(", "));
                }
            }
        }
        Command::Donors { query, blood_type } => {
            if let Some(bt) = blood_type.as_deref() {
                if !BLOOD_TYPES.contains(&bt) {
                    return Err(HealthError::validation(
                        "blood_type",
                        format!("Unknown blood type '{}', expected one of {}", bt, BLOOD_TYPES.join(", ")),
                    ));
                }
            }
            let donors = search_donors(&query, blood_type.as_deref());
            if donors.is_empty() {
                println!("No donors found");
            }
            for d in donors {
                let status = if d.available { "Available" } else { "Unavailable" };
                println!(
                    "{} [{}] {} | last donation {} | {} | {} | {}",
                    d.name, d.blood_type, d.location, d.last_donation, d.phone, d.email, status
                );
            }
        }
        Command::Dashboard => {
            println!("Welcome back!\n");
            for vital in VITALS {
                println!("{:<16} {:<8} ({})", vital.label, vital.value, vital.status);
            }
            println!("\nUpcoming Appointments");
            for visit in UPCOMING_VISITS {
                println!("{} - {} - {}", visit.doctor, visit.specialty, visit.when);
            }
        }
    }
    Ok(())
}

/// Chat failures are shown and the conversation continues.
async fn chat_turn<B: HealthBackend>(session: &mut ChatSession<B>, text: &str) {
    match session.send(text).await {
        Ok(Some(reply)) => println!("🤖 {}", reply.content),
        Ok(None) => {}
        Err(e) => eprintln!("❌ {}", e.user_friendly_message()),
    }
}
