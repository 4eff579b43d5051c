//! Whole-site build: every page in the index plus the hub.

use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    hub::render_hub,
    io::{self, INDEX_FILE, IoError},
    models::Catalog,
    page::ProblemPage,
    rendering::render,
};

/// Inputs for [`build_site`].
#[derive(Debug, Clone)]
pub struct SiteOptions {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub site_title: String,
}

/// What a build produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Pages written.
    pub written: usize,
    /// Entries skipped because their source document is missing.
    pub skipped: usize,
    /// Problem entries in the index.
    pub problems: usize,
    /// Solution entries in the index.
    pub solutions: usize,
    pub hub_path: PathBuf,
}

impl BuildReport {
    pub fn total(&self) -> usize {
        self.problems + self.solutions
    }
}

/// Renders every entry of `<data_dir>/index.json` into `<output_dir>` and
/// writes the hub page.
///
/// Entries whose source document is missing are skipped with a warning;
/// any other I/O failure aborts the build.
pub fn build_site(options: &SiteOptions) -> Result<BuildReport, IoError> {
    let entries = io::read_index(&options.data_dir.join(INDEX_FILE))?;
    let catalog = Catalog::new(&entries);
    let solved = catalog.solved_uids();
    let mut report = BuildReport::default();

    for entry in &entries {
        if entry.is_solution {
            report.solutions += 1;
        } else {
            report.problems += 1;
        }

        let source = io::source_path(&options.data_dir, entry);
        let markdown = match io::read_file(&source) {
            Ok(markdown) => markdown,
            Err(IoError::NotFound(path)) => {
                warn!("SKIP {}: no {}", entry.uid, path.display());
                report.skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        let page = ProblemPage {
            entry,
            has_solution: solved.contains(entry.uid.as_str()),
            site_title: &options.site_title,
        };
        let body = render(&markdown, page.figure_base().as_str());
        let out_path = io::page_path(&options.output_dir, entry);
        io::write_file(&out_path, &page.to_html(&body))?;
        info!("OK: {} -> {}", entry.uid, out_path.display());
        report.written += 1;
    }

    let hub =
        render_hub(&entries, &options.site_title, cache_bust()).map_err(IoError::HubData)?;
    report.hub_path = hub_path(&options.output_dir);
    io::write_file(&report.hub_path, &hub)?;
    info!("Hub: {}", report.hub_path.display());

    Ok(report)
}

pub fn hub_path(output_dir: &Path) -> PathBuf {
    output_dir.join("index.html")
}

fn cache_bust() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
