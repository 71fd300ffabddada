use clap::{Arg, ArgAction, Command};
use monitor_picker::config::{app_name, version};
use monitor_picker::{
    MAX_MONITORS, Monitor, PickError, PickOptions, StyleType, can_pick_monitor,
    list_active_displays, pick_monitor,
};
use serde::Serialize;
use std::process;

#[derive(Serialize)]
struct DisplaySummary {
    id: u32,
    name: String,
    primary: bool,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

impl From<&Monitor> for DisplaySummary {
    fn from(monitor: &Monitor) -> Self {
        DisplaySummary {
            id: monitor.id,
            name: monitor.name.clone(),
            primary: monitor.is_primary,
            x: monitor.bounds.x as i32,
            y: monitor.bounds.y as i32,
            width: monitor.bounds.width as u32,
            height: monitor.bounds.height as u32,
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let matches = Command::new(app_name())
        .version(version())
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::new("default")
                .short('d')
                .long("default")
                .value_name("DISPLAY_ID")
                .help("Display id to preselect in the dialog.")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("title")
                .short('t')
                .long("title")
                .value_name("TITLE")
                .help("Dialog window title."),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .action(ArgAction::SetTrue)
                .help("List the active displays and exit."),
        )
        .arg(
            Arg::new("dark")
                .long("dark")
                .action(ArgAction::SetTrue)
                .help("Draw the dialog with the dark theme."),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Emit output as JSON."),
        )
        .get_matches();

    let json = matches.get_flag("json");

    if matches.get_flag("list") {
        list_displays(json);
        return;
    }

    // A single-monitor system has nothing to pick: report the only display
    // without showing the dialog.
    if !can_pick_monitor() {
        match list_active_displays(MAX_MONITORS) {
            Ok(monitors) => {
                log::info!("only one display attached, skipping the dialog");
                report_chosen(monitors[0].id, json);
            }
            Err(e) => fail(&e),
        }
        return;
    }

    let options = PickOptions {
        default_display: matches.get_one::<u32>("default").copied(),
        title: matches.get_one::<String>("title").cloned(),
        theme: if matches.get_flag("dark") {
            StyleType::Dark
        } else {
            StyleType::Light
        },
    };

    match pick_monitor(options) {
        Ok(id) => report_chosen(id, json),
        Err(PickError::Cancelled) => {
            eprintln!("monitor selection was cancelled");
            process::exit(1);
        }
        Err(e) => fail(&e),
    }
}

fn report_chosen(id: u32, json: bool) {
    if json {
        println!("{}", serde_json::json!({ "display": id }));
    } else {
        println!("{id}");
    }
}

fn list_displays(json: bool) {
    match list_active_displays(MAX_MONITORS) {
        Ok(monitors) => {
            let summaries: Vec<DisplaySummary> = monitors.iter().map(DisplaySummary::from).collect();
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&summaries).unwrap_or_default()
                );
            } else {
                for s in &summaries {
                    let marker = if s.primary { "*" } else { " " };
                    println!(
                        "{marker} {:<10} {:<12} {}x{} at ({}, {})",
                        s.id, s.name, s.width, s.height, s.x, s.y
                    );
                }
            }
        }
        Err(e) => fail(&e),
    }
}

fn fail(error: &PickError) -> ! {
    eprintln!("{error}");
    process::exit(2);
}
