//! Renders correction tables into a C header for the LED driver firmware.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use brightness_curves::{Curve, Lut};
use tracing::{debug, info};

use crate::clock::Clock;

pub const HEADER_FILE: &str = "brightness_lut.h";

/// Format of the generation time in the header preamble
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Gamma used for `LED_CORLUT_GAMMA`, displays are usually corrected with 2.2
pub const HEADER_GAMMA: f64 = 2.2;

/// One array of the header
#[derive(Clone, Debug, PartialEq)]
pub struct TableSpec {
    pub symbol: &'static str,
    pub comment: String,
    pub curve: Curve,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedTable {
    pub spec: TableSpec,
    pub lut: Lut,
}

/// Arrays the firmware expects, in declaration order
pub fn firmware_tables(log_gamma: f64, gamma: f64) -> Vec<TableSpec> {
    vec![
        TableSpec {
            symbol: "LED_CORLUT_CIE1931",
            comment: "CIE 1931 brightness curve lookup table (perceptual uniform)".to_string(),
            curve: Curve::Cie1931,
        },
        TableSpec {
            symbol: "LED_CORLUT_LOG",
            comment: "Logarithmic dimming curve lookup table".to_string(),
            curve: Curve::Logarithmic { gamma: log_gamma },
        },
        TableSpec {
            symbol: "LED_CORLUT_EXP",
            comment: "Exponential dimming curve lookup table".to_string(),
            curve: Curve::Exponential,
        },
        TableSpec {
            symbol: "LED_CORLUT_GAMMA",
            comment: exponent_comment("Gamma correction lookup table", Curve::Gamma { gamma }),
            curve: Curve::Gamma { gamma },
        },
    ]
}

/// Appends the curve exponent to `title`, if the curve has one
pub fn exponent_comment(title: &str, curve: Curve) -> String {
    match curve.exponent() {
        Some(gamma) => format!("{} (GAMMA={})", title, gamma),
        None => title.to_string(),
    }
}

pub struct TableEmitter<'a> {
    clock: &'a dyn Clock,
    tables: Vec<TableSpec>,
}

impl<'a> TableEmitter<'a> {
    pub fn new(clock: &'a dyn Clock, tables: Vec<TableSpec>) -> Self {
        TableEmitter { clock, tables }
    }

    /// Asks every curve for a table of `size` duties
    pub fn generate(&self, size: usize) -> Result<Vec<GeneratedTable>> {
        self.tables
            .iter()
            .map(|spec| {
                let lut = spec
                    .curve
                    .generate(size)
                    .with_context(|| format!("failed to generate {}", spec.symbol))?;
                ensure!(
                    lut.len() == size,
                    "{} has {} entries, expected {}",
                    spec.symbol,
                    lut.len(),
                    size
                );
                debug!(symbol = spec.symbol, curve = spec.curve.name(), size, "generated table");
                Ok(GeneratedTable {
                    spec: spec.clone(),
                    lut,
                })
            })
            .collect()
    }

    pub fn render<W: fmt::Write>(
        &self,
        out: &mut W,
        size: usize,
        tables: &[GeneratedTable],
    ) -> fmt::Result {
        writeln!(out, "// Auto-generated brightness lookup tables")?;
        writeln!(out, "// Generation time: {}", self.clock.now().format(TIME_FORMAT))?;
        writeln!(out, "// LUT size: {}", size)?;
        writeln!(out)?;
        for include in ["stdlib.h", "stdbool.h", "time.h"] {
            writeln!(out, "#include <{}>", include)?;
        }
        writeln!(out)?;
        for table in tables {
            writeln!(out, "// {}", table.spec.comment)?;
            writeln!(out, "const led_duty_t {}[] = {{", table.spec.symbol)?;
            writeln!(out, "    {},", table.lut)?;
            writeln!(out, "}};")?;
            writeln!(out)?;
        }
        Ok(())
    }
}

pub fn write_header(path: &Path, header: &str) -> Result<()> {
    fs::write(path, header).with_context(|| format!("failed to write {}", path.display()))?;
    info!("Lookup tables generated in {}", path.display());
    Ok(())
}
