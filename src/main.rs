use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use sqlx::mysql::MySqlPoolOptions;
use tracing::info;

use maverick_forge_insights::analysis;
use maverick_forge_insights::catalog;
use maverick_forge_insights::config::AppConfig;
use maverick_forge_insights::feedback;
use maverick_forge_insights::matcher;
use maverick_forge_insights::models::FresherRecord;
use maverick_forge_insights::parse;
use maverick_forge_insights::performance;
use maverick_forge_insights::report;
use maverick_forge_insights::source;
use maverick_forge_insights::telemetry;

#[derive(Parser)]
#[command(name = "maverick-forge")]
#[command(about = "Course recommendations and training performance reports for Maverick Forge", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct SourceArgs {
    /// Fresher listing exported from the backend as JSON
    #[arg(long)]
    json: Option<PathBuf>,
    /// Fresher rows as CSV with backend column names
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Read the backend's freshers table via DATABASE_URL
    #[arg(long)]
    database: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Markdown,
    Json,
}

impl ReportFormat {
    fn extension(self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the course catalog
    Courses,
    /// Recommend a course for a skill list or a plain-text resume
    Recommend {
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,
        /// Plain-text resume scanned for known skill keywords
        #[arg(long)]
        resume: Option<PathBuf>,
    },
    /// Department averages with assessment tiers and insights
    Departments {
        #[command(flatten)]
        input: SourceArgs,
    },
    /// Certification completion per department
    Certifications {
        #[command(flatten)]
        input: SourceArgs,
    },
    /// Individual analysis for every fresher
    Analyze {
        #[command(flatten)]
        input: SourceArgs,
    },
    /// Personal feedback for one fresher
    Feedback {
        #[command(flatten)]
        input: SourceArgs,
        #[arg(long)]
        email: String,
    },
    /// Four-category coaching feedback for one fresher
    AiFeedback {
        #[command(flatten)]
        input: SourceArgs,
        #[arg(long)]
        email: String,
        /// Print the feedback as JSON
        #[arg(long = "emit-json")]
        emit_json: bool,
    },
    /// Write the full training report
    Report {
        #[command(flatten)]
        input: SourceArgs,
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = ReportFormat::Markdown)]
        format: ReportFormat,
    },
}

async fn load_records(input: &SourceArgs, config: &AppConfig) -> anyhow::Result<Vec<FresherRecord>> {
    if let Some(path) = &input.json {
        return source::load_json(path).with_context(|| format!("failed to load {}", path.display()));
    }
    if let Some(path) = &input.csv {
        return source::load_csv(path).with_context(|| format!("failed to load {}", path.display()));
    }

    if !input.database {
        anyhow::bail!("choose one of --json, --csv or --database");
    }

    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set to read freshers from the database")?;
    let pool = MySqlPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .context("failed to connect to MySQL")?;
    let records = source::fetch_freshers(&pool)
        .await
        .context("failed to read freshers")?;
    pool.close().await;
    Ok(records)
}

fn print_recommendation(skills: &[String]) {
    let catalog = catalog::default_catalog();
    let bundle = matcher::recommend_with_resources(skills, &catalog);
    let recommendation = &bundle.recommendation;

    if !recommendation.is_match() {
        println!("{}.", matcher::NO_COURSE_AVAILABLE);
        return;
    }

    println!(
        "Recommended course: {} ({})",
        recommendation.course_name, recommendation.duration
    );
    if let Some(bank) = catalog::quiz_bank_key(&catalog, &recommendation.course_name) {
        println!("Quiz bank: {bank}");
    }
    for video in &bundle.videos {
        println!(
            "- {} by {} on {} ({}, {:.1}/5, {}) {}",
            video.title, video.instructor, video.provider, video.duration, video.rating, video.price, video.url
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load();
    telemetry::init(&config).context("failed to initialise logging")?;

    match cli.command {
        Commands::Courses => {
            for course in catalog::default_catalog() {
                println!(
                    "{} ({}): {}",
                    course.name,
                    course.duration,
                    course.required_skills.join(", ")
                );
                for video in &course.video_resources {
                    println!("  - {} [{}, {}]", video.title, video.provider, video.price);
                }
            }
        }
        Commands::Recommend { mut skills, resume } => {
            if let Some(path) = resume {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                let extracted = parse::extract_skills_fallback(&text);
                info!(path = %path.display(), skills = extracted.len(), "skills extracted from resume");
                skills.extend(extracted);
            }
            print_recommendation(&skills);
        }
        Commands::Departments { input } => {
            let records = load_records(&input, &config).await?;
            let aggregates = performance::aggregate_by_department(&records);

            if aggregates.is_empty() {
                println!("No freshers found.");
                return Ok(());
            }

            for dept in &aggregates {
                println!(
                    "- {}: overall {}% ({}) across {} freshers, quiz {}%, assignment {}%, coding {}%. {}",
                    dept.department,
                    dept.overall_score,
                    dept.tier,
                    dept.total_freshers,
                    dept.avg_quiz_score,
                    dept.avg_assignment_score,
                    dept.avg_coding_score,
                    dept.insight.text
                );
            }
        }
        Commands::Certifications { input } => {
            let records = load_records(&input, &config).await?;
            let summaries = performance::certification_summary(&records);

            if summaries.is_empty() {
                println!("No freshers found.");
                return Ok(());
            }

            for summary in &summaries {
                println!(
                    "- {}: {} of {} certified ({}%), {} in progress",
                    summary.department,
                    summary.completed,
                    summary.total_freshers,
                    summary.completion_rate,
                    summary.not_completed
                );
            }
        }
        Commands::Analyze { input } => {
            let records = load_records(&input, &config).await?;
            let cohort = analysis::analyze_cohort(&records);

            println!(
                "{} freshers, average overall {}% (quiz {}%, coding {}%, assignment {}%), training completion {}%",
                cohort.total_freshers,
                cohort.average_overall_score,
                cohort.average_quiz_score,
                cohort.average_coding_score,
                cohort.average_assignment_score,
                cohort.training_completion_rate
            );
            for individual in &cohort.individuals {
                println!(
                    "- {} ({}) overall {}% ({}), strongest {}, needs attention {}",
                    individual.name,
                    individual.department,
                    individual.overall_score,
                    individual.tier,
                    individual.strongest_area.label(),
                    individual.weakest_area.label()
                );
                for recommendation in &individual.recommendations {
                    println!("    {recommendation}");
                }
            }
        }
        Commands::Feedback { input, email } => {
            let records = load_records(&input, &config).await?;
            let record = records
                .iter()
                .find(|record| record.email.eq_ignore_ascii_case(&email))
                .with_context(|| format!("no fresher with email {email}"))?;
            let feedback = performance::generate_feedback(record, &mut rand::rng());

            println!("{}", feedback.headline);
            println!("{}", feedback.motivation);
            println!("Current progress: {}%", feedback.overall_progress);
            for suggestion in &feedback.suggestions {
                println!("- {suggestion}");
            }
            println!("{}", feedback.quote);

            let course = matcher::recommend(&record.skills, &catalog::default_catalog());
            println!("Training track: {} ({})", course.course_name, course.duration);
        }
        Commands::AiFeedback {
            input,
            email,
            emit_json,
        } => {
            let records = load_records(&input, &config).await?;
            let record = records
                .iter()
                .find(|record| record.email.eq_ignore_ascii_case(&email))
                .with_context(|| format!("no fresher with email {email}"))?;
            let coaching = feedback::generate_ai_feedback(record, chrono::Local::now().naive_local());

            if emit_json {
                let rendered =
                    serde_json::to_string_pretty(&coaching).context("failed to serialize feedback")?;
                println!("{rendered}");
                return Ok(());
            }

            println!(
                "{}: {:.1}% ({})",
                coaching.name, coaching.overall_score, coaching.performance_level
            );
            println!("{}", coaching.performance_insight);
            println!("{}", coaching.motivational_message);
            for analysis in [
                &coaching.detailed_analysis.quiz,
                &coaching.detailed_analysis.coding,
                &coaching.detailed_analysis.assignment,
                &coaching.detailed_analysis.certification,
            ] {
                println!(
                    "- {} {}%: {} {}",
                    analysis.area.label(),
                    analysis.score,
                    analysis.message,
                    analysis.suggestion
                );
            }
            println!("Improvement areas: {}", coaching.improvement_areas.join(", "));
            for recommendation in &coaching.recommendations {
                println!("  * {recommendation}");
            }
        }
        Commands::Report {
            input,
            out,
            format,
        } => {
            let records = load_records(&input, &config).await?;
            let generated_at = chrono::Local::now().naive_local();
            let training_report = report::build_report(&records, generated_at);
            let rendered = match format {
                ReportFormat::Markdown => report::render_markdown(&training_report),
                ReportFormat::Json => {
                    report::render_json(&training_report).context("failed to serialize report")?
                }
            };
            let out = out.unwrap_or_else(|| {
                PathBuf::from(format!(
                    "training_report_{}.{}",
                    generated_at.format("%Y-%m-%d"),
                    format.extension()
                ))
            });
            std::fs::write(&out, rendered)
                .with_context(|| format!("failed to write {}", out.display()))?;
            info!(path = %out.display(), freshers = records.len(), "report written");
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}
