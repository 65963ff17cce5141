//! `homewatch` -- terminal front end for the surveillance video gallery.
//!
//! Lists recording dates, renders a day's gallery to a standalone HTML page,
//! deletes local or Google Drive recordings, reports the Drive connection and
//! changes the e-mail notification and motion detection settings.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default                 | Description                          |
//! |------------------------|----------|-------------------------|--------------------------------------|
//! | `HOMEWATCH_URL`        | no       | `http://127.0.0.1:5000` | Backend base URL                     |
//! | `HOMEWATCH_CSRF_TOKEN` | no       | empty                   | Token sent as `X-CSRFToken`          |
//! | `HOMEWATCH_COOKIE`     | no       | --                      | `Cookie` header of a logged-in session |
//! | `REQUEST_TIMEOUT_SECS` | no       | `30`                    | HTTP request timeout                 |

mod terminal;

use std::path::PathBuf;

use anyhow::{bail, Context};
use homewatch_core::dates::parse_date;
use homewatch_core::{MotionDetectionMode, NotificationPreference, SourceKind};
use homewatch_gallery::catalog::DateCatalog;
use homewatch_gallery::preferences::{change_motion_detection_mode, change_notification_preference};
use homewatch_gallery::{
    ClientConfig, ConfirmDialog, DeletionOutcome, DeletionTarget, DeletionWorkflow, GalleryApi,
    GalleryController, HtmlGallery, HtmlNotifier, Session,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use terminal::{StdinConfirm, TerminalNotifier};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Dates,
    Render {
        date: Option<String>,
        out: Option<PathBuf>,
    },
    Delete {
        target: DeletionTarget,
        assume_yes: bool,
    },
    DriveStatus,
    Notifications(NotificationPreference),
    MotionMode(MotionDetectionMode),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homewatch=info,homewatch_gallery=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = parse_command(std::env::args().skip(1))?;
    if command == Command::Help {
        print_help();
        return Ok(());
    }

    let config = ClientConfig::from_env()?;
    tracing::debug!(base_url = %config.base_url, "Using backend");
    let api = GalleryApi::new(Session::new(&config)?);

    match command {
        Command::Help => Ok(()),
        Command::Dates => print_dates(&api).await,
        Command::Render { date, out } => render(api, &config.csrf_token, date, out).await,
        Command::Delete { target, assume_yes } => {
            delete(&api, target, &StdinConfirm { assume_yes }).await
        }
        Command::DriveStatus => {
            let connected = api.drive_status().await?;
            println!(
                "Google Drive: {}",
                if connected { "connected" } else { "not connected" }
            );
            Ok(())
        }
        Command::Notifications(preference) => {
            change_notification_preference(&api, &TerminalNotifier, preference).await?;
            Ok(())
        }
        Command::MotionMode(mode) => {
            change_motion_detection_mode(&api, &TerminalNotifier, mode).await?;
            Ok(())
        }
    }
}

fn parse_command(mut args: impl Iterator<Item = String>) -> anyhow::Result<Command> {
    let Some(cmd) = args.next() else {
        return Ok(Command::Help);
    };

    match cmd.as_str() {
        "--help" | "-h" | "help" => Ok(Command::Help),
        "dates" => Ok(Command::Dates),
        "drive-status" => Ok(Command::DriveStatus),
        "notifications" => {
            let value = args.next().context("missing value: all, hourly or none")?;
            Ok(Command::Notifications(value.parse()?))
        }
        "motion-mode" => {
            let value = args
                .next()
                .context("missing value: mgo2, lucas_kanade_orb or mckenna")?;
            Ok(Command::MotionMode(value.parse()?))
        }
        "render" => {
            let mut date = None;
            let mut out = None;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--date" => {
                        let value = args.next().context("missing value for --date")?;
                        date = Some(parse_date(&value)?);
                    }
                    "--out" => {
                        out = Some(PathBuf::from(
                            args.next().context("missing value for --out")?,
                        ));
                    }
                    _ => bail!("unknown arg: {arg}"),
                }
            }
            Ok(Command::Render { date, out })
        }
        "delete" => {
            let mut target = None;
            let mut assume_yes = false;
            while let Some(arg) = args.next() {
                let source = match arg.as_str() {
                    "--local" => SourceKind::Local,
                    "--drive" => SourceKind::GoogleDrive,
                    "--yes" | "-y" => {
                        assume_yes = true;
                        continue;
                    }
                    _ => bail!("unknown arg: {arg}"),
                };
                let identifier = args
                    .next()
                    .filter(|v| !v.trim().is_empty())
                    .with_context(|| format!("missing value for {arg}"))?;
                if target.is_some() {
                    bail!("only one of --local / --drive may be given");
                }
                target = Some(DeletionTarget { identifier, source });
            }
            let target = target.context("missing --local <name> or --drive <id>")?;
            Ok(Command::Delete { target, assume_yes })
        }
        _ => bail!("unknown command: {cmd}"),
    }
}

async fn print_dates(api: &GalleryApi) -> anyhow::Result<()> {
    let catalog = DateCatalog::load(api).await?;
    if catalog.is_empty() {
        println!("No recordings.");
        return Ok(());
    }
    let default = catalog.default_date();
    for date in catalog.dates() {
        let marker = if *date == default { "*" } else { " " };
        println!("{marker} {date}");
    }
    Ok(())
}

async fn render(
    api: GalleryApi,
    csrf_token: &str,
    date: Option<String>,
    out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut gallery = GalleryController::new(api, HtmlGallery::new(), HtmlNotifier::default());
    gallery.load_dates().await?;
    let cards = match date {
        Some(date) => gallery.select_date(&date).await?,
        None => gallery.refresh(None).await?,
    };

    let page = gallery
        .view()
        .to_page(csrf_token, gallery.notifier().toast_elements());
    match out {
        Some(path) => {
            std::fs::write(&path, page)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), cards, "Gallery written");
        }
        None => print!("{page}"),
    }
    Ok(())
}

async fn delete<D: ConfirmDialog>(
    api: &GalleryApi,
    target: DeletionTarget,
    dialog: &D,
) -> anyhow::Result<()> {
    if !dialog.confirm(&target).await {
        println!("Cancelled.");
        return Ok(());
    }

    let mut workflow = DeletionWorkflow::new();
    workflow.arm_target(target);
    match workflow.confirm(api, &TerminalNotifier).await {
        DeletionOutcome::Deleted { .. } => Ok(()),
        DeletionOutcome::Failed { message, .. } => bail!(message),
        DeletionOutcome::NotArmed => bail!("nothing to delete"),
    }
}

fn print_help() {
    println!(
        r#"homewatch

USAGE:
  homewatch dates
  homewatch render [--date YYYY-MM-DD] [--out <file.html>]
  homewatch delete (--local <file_name> | --drive <file_id>) [--yes]
  homewatch drive-status
  homewatch notifications (all | hourly | none)
  homewatch motion-mode (mgo2 | lucas_kanade_orb | mckenna)

NOTES:
  - The backend address and credentials come from the environment (see HOMEWATCH_URL).
  - Without --date, render shows the most recent day with recordings.
"#
    );
}
