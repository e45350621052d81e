use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use studypath::{
    api,
    assistant::SimulatedAssistant,
    config::Config,
    db::{self, SeedOutcome},
    recommender::{self, CourseRecommender},
    render,
    views::{CareerGoalsView, CoursePlanningView},
};

#[derive(Parser)]
#[command(name = "studypath")]
#[command(about = "Course planning, career roadmaps and course recommendations")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Address to bind (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port for HTTP API (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Fill an empty database with sample courses, students and enrollments
    Seed,
    /// Generate a monthly learning roadmap for the given job titles
    Roadmap {
        /// Preferred job titles, e.g. "Machine Learning Engineer"
        job_titles: String,
    },
    /// Generate a course timeline for a career path
    Plan {
        /// Preferred career path, e.g. "Software Developer"
        career_path: String,

        /// University programme URL
        #[arg(long, default_value = "https://example.edu/program")]
        program_url: String,
    },
    /// Recommend catalog courses for a stored student
    Recommend {
        student_id: i64,
    },
}

const DEFAULT_LOG_FILTER: &str = "studypath=debug,tower_http=debug";

fn log_filter() -> EnvFilter {
    EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
}

/// Initialize tracing, writing logs to stderr so command output stays clean.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(log_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_database(config: &Config) -> anyhow::Result<db::Database> {
    let db = db::Database::open_location(&config.database)?;
    db.migrate()?;
    Ok(db)
}

fn load_recommender(config: &Config) -> anyhow::Result<CourseRecommender> {
    match &config.recommender_model {
        Some(path) => CourseRecommender::load_or_create(path),
        None => Ok(CourseRecommender::default()),
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let db = open_database(&config)?;
    let recommender = load_recommender(&config)?;
    let app = api::create_router(api::AppState::from_config(db, &config, recommender));

    let address = config.bind_address();
    tracing::info!("Starting StudyPath server on {}", address);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("StudyPath server listening on http://{}", address);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // .env may set RUST_LOG, so it must be loaded before the subscriber.
    let dotenv = dotenvy::dotenv();
    init_tracing();
    if let Ok(path) = &dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let mut config = Config::from_env()?;

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await?;
        }
        Some(Commands::Seed) => {
            let db = open_database(&config)?;
            match db::seed_database(&db)? {
                SeedOutcome::AlreadySeeded => println!("Database already seeded."),
                SeedOutcome::Seeded {
                    courses,
                    students,
                    enrollments,
                } => println!(
                    "Database seeded successfully: {} courses, {} students, {} enrollments.",
                    courses, students, enrollments
                ),
            }
        }
        Some(Commands::Roadmap { job_titles }) => {
            let mut view = CareerGoalsView::new();
            view.set_job_titles(job_titles);
            eprintln!("Analyzing career path...");
            view.submit(&SimulatedAssistant::from_config(&config)).await?;
            if let Some(results) = view.results() {
                print!("{}", render::render_roadmap(results));
            }
        }
        Some(Commands::Plan {
            career_path,
            program_url,
        }) => {
            let mut view = CoursePlanningView::new();
            view.set_program_url(program_url);
            view.set_career_path(career_path);
            eprintln!("Analyzing courses...");
            view.submit(&SimulatedAssistant::from_config(&config)).await?;
            if let Some(results) = view.results() {
                print!("{}", render::render_course_plan(results));
            }
        }
        Some(Commands::Recommend { student_id }) => {
            let db = open_database(&config)?;
            let recommender = load_recommender(&config)?;
            let courses = recommender::recommend_for_student(&db, &recommender, student_id)?;
            print!("{}", render::render_courses(&courses));
        }
        None => serve(config).await?,
    }

    Ok(())
}
