//! Batch processing of PDF directories.
//!
//! Each document is read and classified independently, so documents are
//! spread across the rayon pool with no shared state beyond the read-only
//! extractor settings. A failure is recorded in that file's
//! [`FileReport`] and never stops the rest of the batch.

use std::fs;
use std::path::{Path, PathBuf};

use crossbeam_channel::Receiver;
use rayon::prelude::*;

use crate::detect::has_pdf_extension;
use crate::error::{Error, Result};
use crate::model::DocumentResult;
use crate::render::{write_json, JsonFormat};
use crate::OutlineExtractor;

/// Options for batch runs.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// JSON layout of the output files
    pub format: JsonFormat,

    /// Whether to process documents in parallel
    pub parallel: bool,
}

impl BatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output JSON format.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            format: JsonFormat::Pretty,
            parallel: true,
        }
    }
}

/// Outcome for one input file.
#[derive(Debug)]
pub struct FileReport {
    /// The input PDF
    pub input: PathBuf,
    /// Where the JSON was (or would have been) written
    pub output: PathBuf,
    /// The inferred outline, or why the file failed
    pub result: Result<DocumentResult>,
}

impl FileReport {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// The input file name, for display.
    pub fn file_name(&self) -> String {
        self.input
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.input.display().to_string())
    }
}

/// Outcome of a whole batch, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|f| f.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.files.len() - self.succeeded()
    }

    /// Whether every file was processed.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| !f.is_success())
    }
}

/// Extracts outlines for every PDF in a directory.
///
/// # Example
///
/// ```no_run
/// use pdf_outline::{BatchOptions, BatchProcessor, OutlineExtractor};
///
/// let processor = BatchProcessor::new(OutlineExtractor::new().lenient(), BatchOptions::default());
/// let report = processor.run("files", "output")?;
/// println!("{} processed, {} failed", report.succeeded(), report.failed());
/// # Ok::<(), pdf_outline::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    extractor: OutlineExtractor,
    options: BatchOptions,
}

impl BatchProcessor {
    pub fn new(extractor: OutlineExtractor, options: BatchOptions) -> Self {
        Self { extractor, options }
    }

    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// List the `.pdf` files directly inside `input_dir`, sorted by path.
    pub fn discover<P: AsRef<Path>>(input_dir: P) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(input_dir)? {
            let path = entry?.path();
            if path.is_file() && has_pdf_extension(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Output location for `input`: its base name with a `.json` extension.
    pub fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        output_dir.join(format!("{}.json", stem))
    }

    /// Process every PDF in `input_dir`, writing JSON into `output_dir`.
    ///
    /// Only directory-level problems (unreadable input directory, output
    /// directory that cannot be created) are returned as errors.
    pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_dir: P,
        output_dir: Q,
    ) -> Result<BatchReport> {
        let files = Self::discover(input_dir)?;
        let output_dir = output_dir.as_ref();
        fs::create_dir_all(output_dir)?;
        log::debug!("batch: {} documents", files.len());

        let files = if self.options.parallel {
            files
                .par_iter()
                .map(|input| self.process_file(input, output_dir))
                .collect()
        } else {
            files
                .iter()
                .map(|input| self.process_file(input, output_dir))
                .collect()
        };

        Ok(BatchReport { files })
    }

    /// Process `files` on a background thread, yielding each report as soon
    /// as its document is done. Completion order is not input order.
    ///
    /// The channel closes once every file has been reported. Dropping the
    /// receiver stops the batch before further documents are started.
    pub fn spawn(&self, files: Vec<PathBuf>, output_dir: PathBuf) -> Result<Receiver<FileReport>> {
        fs::create_dir_all(&output_dir)?;
        let (tx, rx) = crossbeam_channel::unbounded();
        let processor = self.clone();

        std::thread::spawn(move || {
            let sent = if processor.options.parallel {
                files.par_iter().try_for_each_with(tx, |tx, input| {
                    tx.send(processor.process_file(input, &output_dir))
                })
            } else {
                files
                    .iter()
                    .try_for_each(|input| tx.send(processor.process_file(input, &output_dir)))
            };

            if sent.is_err() {
                log::debug!("report receiver dropped; batch stopped early");
            }
        });

        Ok(rx)
    }

    /// Extract one document and write its JSON next to the others.
    pub fn process_file(&self, input: &Path, output_dir: &Path) -> FileReport {
        let output = Self::output_path(input, output_dir);
        let result = self
            .extractor
            .extract(input)
            .and_then(|result| self.write(&result, &output).map(|_| result));

        match &result {
            Ok(_) => log::debug!("processed {}", input.display()),
            Err(e) => log::warn!("failed {}: {}", input.display(), e),
        }

        FileReport {
            input: input.to_path_buf(),
            output,
            result,
        }
    }

    fn write(&self, result: &DocumentResult, output: &Path) -> Result<()> {
        let file = fs::File::create(output)?;
        let mut writer = std::io::BufWriter::new(file);
        write_json(result, self.options.format, &mut writer)?;
        std::io::Write::flush(&mut writer).map_err(Error::from)
    }
}
