//! # API Facade
//!
//! [`TagCheckApi`] is the entry point for every client. It holds what stays
//! fixed during a run (decoder, walker, registry) and dispatches to the
//! command layer. It never prints and never exits.
//!
//! `TagCheckApi<D: Decoder>` is generic over the decoder:
//! - Production: `TagCheckApi<DicomDecoder>`
//! - Testing: `TagCheckApi<InMemoryDecoder>`

use crate::commands::report::{self, ReportStyle};
use crate::commands::{scan, ScanResult};
use crate::config::TagCheckConfig;
use crate::decoder::Decoder;
use crate::error::Result;
use crate::registry::TagRegistry;
use crate::walker::Walker;
use std::io::Write;
use std::path::Path;

pub struct TagCheckApi<D: Decoder> {
    decoder: D,
    walker: Walker,
    registry: TagRegistry,
}

impl<D: Decoder> TagCheckApi<D> {
    pub fn new(decoder: D, walker: Walker, registry: TagRegistry) -> Self {
        Self {
            decoder,
            walker,
            registry,
        }
    }

    /// Builds the walker and registry described by `config`.
    pub fn from_config(decoder: D, config: &TagCheckConfig) -> Result<Self> {
        let walker = Walker::new(config.file_filter(), config.visit_order());
        Ok(Self::new(decoder, walker, config.registry()?))
    }

    /// Walks `root` and returns the aggregated table.
    pub fn scan(&self, root: &Path) -> Result<ScanResult> {
        scan::run(&self.decoder, &self.walker, &self.registry, root)
    }

    /// Emits the report for a finished scan.
    pub fn write_report<W: Write>(
        &self,
        result: &ScanResult,
        out: &mut W,
        style: ReportStyle,
    ) -> Result<()> {
        report::write_report(&result.table, out, style)?;
        Ok(())
    }
}
