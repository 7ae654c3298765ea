// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Corrlens CLI entrypoint.
//!
//! Reads a CSV dataset, correlates its numeric columns and prints the result as a table, a
//! glyph plot, or long-form CSV on stdout. Logs go to stderr (`RUST_LOG`, default `warn`).

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use corrlens::model::CorrTable;
use corrlens::ops::{Linkage, SeriationMethod};
use corrlens::render::{render_rplot, RplotOptions};
use corrlens::store::{load_dataset_csv, save_matrix_json, write_long_csv};
use corrlens::{
    correlate, fashion, focus, rearrange, shave, stretch, CorrelateOptions, FashionOptions,
    Focused, Method, RearrangeOptions, Selection, StretchOptions, Triangle,
};

#[derive(Debug, Parser)]
#[command(name = "corrlens")]
#[command(about = "Explore the correlation matrix of a CSV dataset")]
struct Args {
    /// CSV file with a header row.
    data: PathBuf,

    #[arg(long, default_value = "pearson")]
    method: Method,

    /// Reorder variables so strongly correlated ones sit together.
    #[arg(long)]
    rearrange: bool,

    /// Cluster on signed r instead of |r|.
    #[arg(long, requires = "rearrange")]
    signed: bool,

    #[arg(long, default_value = "complete")]
    linkage: Linkage,

    /// Mask one triangle of the matrix.
    #[arg(long)]
    shave: Option<Triangle>,

    /// Comma-separated variables to keep as columns.
    #[arg(long, value_delimiter = ',')]
    focus: Vec<String>,

    /// Treat the --focus list as variables to drop.
    #[arg(long, requires = "focus")]
    exclude: bool,

    /// Restrict rows to the focused variables too.
    #[arg(long, requires = "focus")]
    mirror: bool,

    /// Print long-form `x,y,r` CSV instead of a table.
    #[arg(long, conflicts_with = "plot")]
    stretch: bool,

    /// Drop missing coefficients from the long form.
    #[arg(long, requires = "stretch")]
    na_rm: bool,

    /// Keep one entry per variable pair in the long form.
    #[arg(long, requires = "stretch")]
    remove_dups: bool,

    /// Digits after the decimal point (0-255).
    #[arg(long, default_value_t = 2)]
    decimals: u8,

    /// Printed for missing coefficients.
    #[arg(long, default_value = "")]
    na_print: String,

    #[arg(long)]
    leading_zeros: bool,

    /// Print a glyph plot instead of a table.
    #[arg(long)]
    plot: bool,

    /// Also save the correlated (and rearranged) matrix as JSON.
    #[arg(long)]
    json_out: Option<PathBuf>,
}

impl Args {
    fn rearrange_options(&self) -> Option<RearrangeOptions> {
        self.rearrange.then(|| RearrangeOptions {
            method: SeriationMethod::Hierarchical { linkage: self.linkage },
            absolute: !self.signed,
        })
    }

    fn selection(&self) -> Option<Selection> {
        if self.focus.is_empty() {
            None
        } else if self.exclude {
            Some(Selection::exclude(self.focus.iter()))
        } else {
            Some(Selection::include(self.focus.iter()))
        }
    }

    fn fashion_options(&self) -> FashionOptions {
        FashionOptions {
            decimals: self.decimals,
            na_print: self.na_print.clone(),
            leading_zeros: self.leading_zeros,
        }
    }
}

fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let dataset = load_dataset_csv(&args.data)
        .with_context(|| format!("failed to read dataset {:?}", args.data))?;
    let mut matrix = correlate(&dataset, &CorrelateOptions { method: args.method })?;
    info!(method = %args.method, variables = matrix.len(), "correlated");

    if let Some(options) = args.rearrange_options() {
        matrix = rearrange(&matrix, &options);
    }

    if let Some(path) = &args.json_out {
        save_matrix_json(path, &matrix)
            .with_context(|| format!("failed to write matrix {path:?}"))?;
    }

    let focused = match args.selection() {
        Some(selection) => focus(&matrix, &selection, args.mirror)?,
        None => Focused::Mirror(matrix),
    };

    let focused = match (focused, args.shave) {
        (Focused::Mirror(m), Some(triangle)) => Focused::Mirror(shave(&m, triangle)),
        (Focused::Table(_), Some(_)) => {
            bail!("--shave needs a square matrix; add --mirror when using --focus")
        }
        (focused, None) => focused,
    };

    let table: &dyn CorrTable = match &focused {
        Focused::Mirror(m) => m,
        Focused::Table(t) => t,
    };

    if args.stretch {
        let options = StretchOptions { na_rm: args.na_rm, remove_dups: args.remove_dups };
        write_long_csv(&mut *out, &stretch(table, &options))?;
    } else if args.plot {
        writeln!(out, "{}", render_rplot(table, &RplotOptions::default()))?;
    } else {
        writeln!(out, "{}", fashion(table, &args.fashion_options()))?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_writer(io::stderr).with_env_filter(filter).with_target(false).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run(&args, &mut out) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
