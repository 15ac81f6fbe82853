//! `sitegen build` command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use sitegen_config::{CliSettings, Config};
use sitegen_content::ContentIndex;
use sitegen_pages::{
    EmitterConfig, PageEmitter, PathGenerator, RecordingSink, build_search_index,
    write_search_index,
};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to the content-index document.
    #[arg(short, long)]
    index: PathBuf,

    /// Path to configuration file (default: sitegen.toml when present).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output path for the page manifest.
    #[arg(short, long, default_value = "pages.json")]
    out: PathBuf,

    /// Include preview content (overrides config).
    #[arg(long, env = "SITEGEN_PREVIEW")]
    preview: bool,

    /// Version designated as newest (overrides config).
    #[arg(long)]
    newest_version: Option<String>,

    /// Output path for the search index (overrides config).
    #[arg(long)]
    search_index: Option<PathBuf>,

    /// Enable verbose output (show generation progress logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error when configuration, index loading, page
    /// registration or artifact writing fails. Generation is
    /// all-or-nothing: the first failure aborts the run.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // The flag only overrides the config when set.
        let cli_settings = CliSettings {
            preview: self.preview.then_some(true),
            newest_version: self.newest_version,
            search_index_path: self.search_index,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let index = ContentIndex::load(&self.index)?;

        output.info(&format!(
            "Content index: {} markdown, {} api, {} structured nodes",
            index.markdown.len(),
            index.api_files.len(),
            index.files.len()
        ));
        if config.site.preview {
            output.info("Preview mode: enabled");
        }

        let emitter = PageEmitter::new(EmitterConfig {
            default_locale: config.locales.default,
            versions: config.site.versions.clone(),
            newest_version: config.site.newest_version.clone(),
            preview: config.site.preview,
        });

        let mut sink = RecordingSink::new();
        let summary = emitter.emit_all(&index, &mut sink)?;

        let manifest = serde_json::to_string(sink.pages())?;
        fs::write(&self.out, manifest)?;

        let paths = PathGenerator::new(config.locales.default);
        let records = build_search_index(
            &paths,
            &index.markdown,
            &config.site.newest_version,
            config.site.preview,
        );
        write_search_index(&config.search.index_path, &records)?;

        output.success(&format!(
            "Registered {} pages ({} docs, {} aliases, {} doc homes, {} community, {} api) to {}",
            summary.total(),
            summary.doc_pages,
            summary.doc_aliases,
            summary.doc_homes,
            summary.community_articles + summary.community_homes,
            summary.api_references,
            self.out.display()
        ));
        output.success(&format!(
            "Search index: {} records at {}",
            records.len(),
            config.search.index_path.display()
        ));

        Ok(())
    }
}
