use anyhow::Result;
/// CareerCompass CLI - student career guidance in the terminal
///
/// Provides the interactive TUI plus a non-interactive recommend command.
use clap::{Parser, Subcommand};
use compass_cli::ui;
use compass_core::{parse_skills, recommend, Profile, Region};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "compass-cli")]
#[command(about = "CareerCompass - Personalized career & skills roadmap", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive guidance TUI
    Tui {
        /// Path to a profile JSON file to prefill the onboarding form
        #[arg(short, long)]
        profile: Option<String>,
    },
    /// Print career recommendations for a profile (non-interactive)
    Recommend {
        /// Path to a profile JSON file
        #[arg(short, long)]
        profile: Option<String>,
        /// Student name
        #[arg(long)]
        name: Option<String>,
        /// Grade / degree, e.g. "12th Grade"
        #[arg(long)]
        grade: Option<String>,
        /// Region: metro, tier2, or rural
        #[arg(long)]
        region: Option<String>,
        /// Comma-separated interest tags
        #[arg(short, long)]
        interests: Option<String>,
        /// Comma-separated skills
        #[arg(short, long)]
        skills: Option<String>,
        /// Emit JSON instead of a report
        #[arg(long)]
        json: bool,
    },
}

/// JSON payload for `recommend --json`: the effective profile plus the
/// engine output, so scripted callers see exactly what was matched.
#[derive(Serialize)]
struct RecommendReport {
    profile: Profile,
    recommendations: Vec<compass_core::CareerRecommendation>,
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let cli = Cli::parse();

    match cli.command {
        Commands::Tui { profile } => {
            let initial = profile.as_deref().map(load_profile).transpose()?;
            ui::run_tui(initial)?;
        }
        Commands::Recommend {
            profile,
            name,
            grade,
            region,
            interests,
            skills,
            json,
        } => {
            run_recommend_cli(profile, name, grade, region, interests, skills, json)?;
        }
    }

    Ok(())
}

fn load_profile(path: &str) -> Result<Profile> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Applies flag overrides on top of a base profile (loaded from a file or
/// the default). Flags win over whatever the file carried.
fn apply_profile_flags(
    mut profile: Profile,
    name: Option<String>,
    grade: Option<String>,
    region: Option<String>,
    interests: Option<String>,
    skills: Option<String>,
) -> Result<Profile> {
    if let Some(name) = name {
        profile.name = name;
    }
    if let Some(grade) = grade {
        profile.grade = grade;
    }
    if let Some(region) = region {
        profile.region = Some(region.parse::<Region>()?);
    }
    if let Some(interests) = interests {
        profile.interests = parse_skills(&interests);
    }
    if let Some(skills) = skills {
        profile.skills = parse_skills(&skills);
    }
    Ok(profile)
}

fn run_recommend_cli(
    profile_path: Option<String>,
    name: Option<String>,
    grade: Option<String>,
    region: Option<String>,
    interests: Option<String>,
    skills: Option<String>,
    json: bool,
) -> Result<()> {
    let base = match profile_path {
        Some(path) => load_profile(&path)?,
        None => Profile::default(),
    };
    let profile = apply_profile_flags(base, name, grade, region, interests, skills)?;

    let recommendations = recommend(&profile);

    if json {
        let report = RecommendReport {
            profile,
            recommendations,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let who = if profile.name.is_empty() {
        "you".to_string()
    } else {
        profile.name.clone()
    };
    println!("Career recommendations for {}:", who);

    for rec in &recommendations {
        println!("\n  {} [{}] - {}% match", rec.title, rec.id, rec.confidence);
        for bullet in &rec.bullets {
            println!("    - {}", bullet);
        }
    }

    println!(
        "\nFound {} matching career path(s).",
        recommendations.len()
    );
    Ok(())
}
