// src/cli.rs
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::Colorize;

use crate::calendar::ParityPolicy;
use crate::config::AppOptions;
use crate::core::{FetchError, HttpSource, OfflineSource, Source};
use crate::error::Result;
use crate::file::{ensure_directory, file_url};
use crate::model::Parity;
use crate::runner::{self, Notices};

/// Print the NAU group timetable for today, or N days away.
#[derive(Parser, Debug, Default)]
#[command(name = "kai_week", version, about)]
pub struct Args {
    /// Day offset from today: 1 = tomorrow, -1 = yesterday
    #[arg(allow_negative_numbers = true)]
    pub offset: Option<String>,

    /// Subgroup to show (entries for both subgroups are always shown)
    #[arg(long)]
    pub subgroup: Option<u8>,

    /// Week number (1 or 2) that falls on even ISO weeks
    #[arg(long)]
    pub parity: Option<Parity>,

    /// How to project week parity for offsets
    #[arg(long, value_enum)]
    pub parity_policy: Option<ParityPolicy>,

    /// Include teacher and room in the output
    #[arg(long)]
    pub details: bool,

    /// Schedule page URL
    #[arg(long)]
    pub url: Option<String>,

    /// Directory for snapshots and the debug log
    #[arg(long)]
    pub store_dir: Option<PathBuf>,

    /// Config file (default: ./kai_week.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Use this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Don't touch the network; answer from the last snapshot
    #[arg(long)]
    pub offline: bool,
}

impl Args {
    /// CLI flags win over the config file.
    pub fn apply(&self, opts: &mut AppOptions) {
        if let Some(v) = self.subgroup { opts.schedule.subgroup = v; }
        if let Some(v) = self.parity { opts.schedule.parity = v; }
        if let Some(v) = self.parity_policy { opts.schedule.parity_policy = v; }
        if self.details { opts.schedule.include_details = true; }
        if let Some(v) = &self.url { opts.source.url = v.clone(); }
        if let Some(v) = &self.store_dir { opts.store.dir = v.clone(); }
        if self.offline { opts.source.offline = true; }
    }
}

/// Colored console output for recoverable events.
pub struct ConsoleNotices;

impl Notices for ConsoleNotices {
    fn fetch_failed(&mut self, err: &FetchError, _fallback: &Path) {
        eprintln!("{}", "Сайт КАІ приліг :((. Інформацію беру із локального старого розкладу...".red());
        eprintln!("{}", err.to_string().dimmed());
    }

    fn schedule_changed(&mut self, previous: &Path, source: &str) {
        println!("{}", "Розклад змінився.".red());
        // Promotion overwrites it right after this notice
        println!("Старий: {} (буде замінено новим)", file_url(previous));
        println!("Новий: {source}");
    }
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    // Reject a bad offset before touching config, disk or network
    runner::parse_offset(args.offset.as_deref())?;

    let mut opts = AppOptions::load(args.config.as_deref())?;
    args.apply(&mut opts);
    opts.validate()?;

    ensure_directory(&opts.store.dir)?;
    crate::log::init(&opts.store.dir);

    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    let source: Box<dyn Source> = if opts.source.offline {
        Box::new(OfflineSource::new(&opts.source.url))
    } else {
        Box::new(HttpSource::new(&opts.source.url, opts.source.timeout())?)
    };

    let answer = match runner::run(&opts, source.as_ref(), today, args.offset.as_deref(), &mut ConsoleNotices) {
        Ok(a) => a,
        Err(e) => {
            loge!("{e}");
            return Err(e);
        }
    };

    println!("{}", answer.header());
    println!("{}", answer.to_json()?);
    Ok(())
}
