use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lectern_analytics::{
    run_bootstrap, AnalyticsRegistry, BootstrapOptions, Dispatcher, HttpScriptLoader,
    HttpSinkFactory, ScriptLoader, SinkFactory,
};
use lectern_catalog::CatalogIndex;
use lectern_cli::{Command, Config, TrackCommand};
use lectern_core::config::{default_catalog_path, load_catalog};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Setup logging (stderr to keep stdout clean for catalog listings)
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    // Parse command line arguments
    let config = Config::parse();

    // Load the catalog tables and build the index
    let catalog_path = resolve_catalog_path(&config)
        .context("No catalog file found. Pass --catalog or set LECTERN_CATALOG.")?;
    let catalog = load_catalog(&catalog_path)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let index = CatalogIndex::new(catalog.courses, catalog.certificates);

    // Bootstrap analytics; with nothing configured the facade is inert
    let settings = config.analytics_settings();
    let registry = Arc::new(AnalyticsRegistry::new());
    let dispatcher = if settings.configured_count() > 0 {
        let loader: Arc<dyn ScriptLoader> = Arc::new(HttpScriptLoader::new()?);
        let sinks: Arc<dyn SinkFactory> = Arc::new(HttpSinkFactory::new()?);
        let handles = run_bootstrap(
            &registry,
            &settings,
            &loader,
            &sinks,
            &BootstrapOptions::default(),
        );
        info!("analytics bootstrap started for {} integration(s)", handles.len());
        Dispatcher::new(Arc::clone(&registry))
    } else {
        Dispatcher::disconnected()
    };

    // Execute command
    match config.command {
        Command::Courses { category, level } => {
            list_courses(&index, &dispatcher, category.as_deref(), level);
        }
        Command::Certificates { track, featured } => {
            list_certificates(&index, &dispatcher, track, featured);
        }
        Command::Show { certificate_id } => {
            show_certificate(&index, &dispatcher, &certificate_id)?;
        }
        Command::Track { event } => {
            track(&index, &dispatcher, event)?;
            // Delivery tasks are detached; give them a moment before exit.
            tokio::time::sleep(Duration::from_millis(250)).await;
        }
        Command::Stats => {
            show_stats(&index);
        }
    }

    Ok(())
}

/// Catalog resolution order: explicit flag/env, repository-local data file,
/// user config directory.
fn resolve_catalog_path(config: &Config) -> Option<PathBuf> {
    if let Some(path) = &config.catalog {
        return Some(path.clone());
    }
    let local = PathBuf::from("data/catalog.toml");
    if local.exists() {
        return Some(local);
    }
    default_catalog_path().filter(|path| path.exists())
}

/// List catalog courses, optionally filtered
fn list_courses(
    index: &CatalogIndex,
    dispatcher: &Dispatcher,
    category: Option<&str>,
    level: Option<lectern_core::models::DifficultyLevel>,
) {
    dispatcher.track_page_view("courses", "/courses");

    let courses: Vec<_> = index
        .all_courses()
        .iter()
        .filter(|course| category.is_none_or(|c| course.category.eq_ignore_ascii_case(c)))
        .filter(|course| level.is_none_or(|l| course.level == l))
        .collect();

    if courses.is_empty() {
        println!("\nNo courses match the given filters.\n");
        return;
    }

    println!("\nCourses ({})\n", courses.len());
    for course in courses {
        println!(
            "  {} - {} [{}]",
            course.id, course.title, course.level
        );
        println!(
            "      {} | {} modules | {:.1}/5 from {} students | ${:.0}",
            course.duration, course.module_count, course.rating, course.student_count, course.price
        );
        let in_certs = index.certificates_for_course(&course.id);
        if !in_certs.is_empty() {
            let names: Vec<&str> = in_certs.iter().map(|c| c.id.as_str()).collect();
            println!("      part of: {}", names.join(", "));
        }
    }
    println!();
}

/// List certificate programs, optionally filtered
fn list_certificates(
    index: &CatalogIndex,
    dispatcher: &Dispatcher,
    track: Option<lectern_core::models::Track>,
    featured_only: bool,
) {
    dispatcher.track_page_view("certificates", "/certificates");

    let certificates: Vec<_> = index
        .all_certificates()
        .iter()
        .filter(|cert| track.is_none_or(|t| cert.track == t))
        .filter(|cert| !featured_only || cert.featured)
        .collect();

    if certificates.is_empty() {
        println!("\nNo certificates match the given filters.\n");
        return;
    }

    println!("\nCertificate Programs ({})\n", certificates.len());
    for certificate in certificates {
        let pricing = index.bundle_pricing(&certificate.id);
        let marker = if certificate.featured { " *" } else { "" };
        println!("  {} - {}{}", certificate.id, certificate.title, marker);
        println!(
            "      {} track | {} | {} | ${:.0}",
            certificate.track, certificate.format, certificate.duration, certificate.price
        );
        if pricing.savings > 0.0 {
            println!(
                "      save ${:.0} ({}%) vs {} individual courses",
                pricing.savings,
                pricing.savings_percent,
                certificate.course_ids.len()
            );
        }
    }
    println!();
}

/// Show one certificate with its curriculum and pricing breakdown
fn show_certificate(
    index: &CatalogIndex,
    dispatcher: &Dispatcher,
    certificate_id: &str,
) -> anyhow::Result<()> {
    let certificate = index
        .require_certificate(certificate_id)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    dispatcher.track_page_view(
        "certificate",
        &format!("/certificates/{}", certificate_id),
    );

    println!("\n{}\n", certificate.title);
    println!("  {}", certificate.description);
    println!(
        "\n  {} track | {} | {}",
        certificate.track, certificate.format, certificate.duration
    );
    if !certificate.outcomes.is_empty() {
        println!("\n  Outcomes:");
        for outcome in &certificate.outcomes {
            println!("    - {}", outcome);
        }
    }
    if !certificate.recognized_by.is_empty() {
        println!("\n  Recognized by: {}", certificate.recognized_by.join(", "));
    }

    let courses = index.courses_for_certificate(certificate_id);
    println!("\n  Curriculum ({} courses):", courses.len());
    for (i, course) in courses.iter().enumerate() {
        println!(
            "    {}. {} ({}, ${:.0})",
            i + 1,
            course.title,
            course.duration,
            course.price
        );
    }

    let pricing = index.bundle_pricing(certificate_id);
    println!("\n  Pricing:");
    println!("    Individual total:  ${:.0}", pricing.individual_total);
    println!("    Bundle price:      ${:.0}", certificate.price);
    println!(
        "    You save:          ${:.0} ({}%)",
        pricing.savings, pricing.savings_percent
    );
    println!();

    Ok(())
}

/// Build and dispatch one canonical tracking event
fn track(index: &CatalogIndex, dispatcher: &Dispatcher, event: TrackCommand) -> anyhow::Result<()> {
    match event {
        TrackCommand::PageView { name, url } => dispatcher.track_page_view(&name, &url),
        TrackCommand::ButtonClick { id, label } => dispatcher.track_button_click(&id, &label),
        TrackCommand::VideoPlay { id, title } => dispatcher.track_video_play(&id, &title),
        TrackCommand::FormSubmit { name, form_type } => {
            dispatcher.track_form_submit(&name, &form_type)
        }
        TrackCommand::Enrollment { course_id } => {
            let course = index
                .course(&course_id)
                .ok_or_else(|| lectern_core::AppError::CourseNotFound(course_id.clone()))
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            dispatcher.track_course_enrollment(&course.id, &course.title, course.price);
        }
        TrackCommand::Download { file_type, name } => dispatcher.track_download(&file_type, &name),
        TrackCommand::SocialShare {
            platform,
            content_type,
            content_id,
        } => dispatcher.track_social_share(&platform, &content_type, &content_id),
    }
    println!("Event dispatched.");
    Ok(())
}

/// Show catalog statistics
fn show_stats(index: &CatalogIndex) {
    let stats = index.stats();

    println!("\nCatalog Statistics\n");
    println!("  Total courses:          {}", stats.total_courses);
    println!("  Total certificates:     {}", stats.total_certificates);
    println!("  Featured certificates:  {}", stats.featured_certificates);
    println!("  Courses in a bundle:    {}", stats.bundled_courses);
    println!();
}
