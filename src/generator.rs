// Sequential icon generation over the configured sizes
use crate::config::FailurePolicy;
use crate::error::{Error, Failure};
use crate::icons::{IconLayout, SizeList};
use crate::io;
use crate::render::rasterize;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub struct Generator {
    layout: IconLayout,
    sizes: SizeList,
    policy: FailurePolicy,
}

/// Files written by a successful run, in size-list order
#[derive(Debug, Default)]
pub struct Report {
    pub written: Vec<PathBuf>,
}

impl Generator {
    pub fn new(layout: IconLayout, sizes: SizeList, policy: FailurePolicy) -> Self {
        Self {
            layout,
            sizes,
            policy,
        }
    }

    /// Renders every size from the one source file.
    ///
    /// `on_written` is called with each output path right after it is
    /// written. A missing source fails before any size is attempted.
    pub fn run<F>(&self, mut on_written: F) -> Result<Report, Error>
    where
        F: FnMut(&Path),
    {
        let source = io::load(&self.layout.source_path())?;

        let mut report = Report::default();
        let mut failures = Vec::new();
        for size in self.sizes.iter() {
            match self.generate_one(&source, size) {
                Ok(path) => {
                    on_written(&path);
                    report.written.push(path);
                }
                Err(error) => match self.policy {
                    FailurePolicy::Abort => return Err(error),
                    FailurePolicy::Continue => {
                        tracing::warn!(size, %error, "icon failed, continuing");
                        failures.push(Failure { size, error });
                    }
                },
            }
        }

        if failures.is_empty() {
            Ok(report)
        } else {
            Err(Error::Incomplete { failures })
        }
    }

    fn generate_one(&self, source: &[u8], size: u32) -> Result<PathBuf, Error> {
        let started = Instant::now();
        let png = rasterize(source, size).map_err(|source| Error::Render { size, source })?;
        tracing::debug!(size, elapsed = ?started.elapsed(), "rendered icon");

        let path = self.layout.output_path(size);
        io::write(&path, &png)?;
        Ok(path)
    }
}
