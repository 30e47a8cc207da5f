use std::io::Write;

use brightness_curves::{Duty, DUTY_MAX};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor};
use crossterm::QueueableCommand;

use crate::emitter::GeneratedTable;

/// Width of a full scale bar, in terminal cells
pub const BAR_WIDTH: usize = 64;

const LED_COLOR: Color = Color::Rgb {
    r: 253,
    g: 244,
    b: 220,
};

/// Evenly spaced brightness levels, always including the first and the last one
pub fn sample_levels(size: usize, samples: usize) -> Vec<usize> {
    if size == 0 {
        return vec![];
    }
    let samples = samples.clamp(2, size.max(2));
    let last = size - 1;
    let mut levels: Vec<usize> = (0..samples).map(|k| k * last / (samples - 1)).collect();
    levels.dedup();
    levels
}

pub fn bar_width(duty: Duty) -> usize {
    duty.min(DUTY_MAX) as usize * BAR_WIDTH / DUTY_MAX as usize
}

/// Draws every table as a column of PWM bars, one per sampled brightness level
pub fn render_preview<W: Write>(
    out: &mut W,
    tables: &[GeneratedTable],
    samples: usize,
) -> crossterm::Result<()> {
    for table in tables {
        out.queue(Print(format!(
            "{} ({})\n",
            table.spec.symbol,
            table.spec.curve.name()
        )))?;
        for level in sample_levels(table.lut.len(), samples) {
            let duty = table.lut[level];
            let width = bar_width(duty);
            out.queue(Print(format!("{:>6} {:>5} [", level, duty)))?
                .queue(SetBackgroundColor(LED_COLOR))?
                .queue(Print(" ".repeat(width)))?
                .queue(ResetColor)?
                .queue(Print(" ".repeat(BAR_WIDTH - width)))?
                .queue(Print("]\n"))?;
        }
        out.queue(Print("\n"))?;
    }
    out.flush()?;
    Ok(())
}
