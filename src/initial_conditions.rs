//! Whitespace-delimited initial-condition tables.
//!
//! One particle per row: `mass x y z vx vy vz`. Lines starting with `#` and
//! blank lines are ignored. No unit conversion happens here, see `units`.
use std::convert::TryFrom;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use super::constants::INITIAL_CONDITIONS_COLUMNS;
use super::error::{Error, Result};
use super::particles::{Axes, Particle};

pub fn read<R: Read>(reader: R) -> Result<Vec<Particle>> {
    let mut table = ReaderBuilder::new()
                        .delimiter(b' ')
                        .has_headers(false)
                        .flexible(true)
                        .comment(Some(b'#'))
                        .trim(Trim::All)
                        .from_reader(reader);

    let mut particles = Vec::new();
    for row in table.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        // Repeated separators yield empty fields, tabs stay inside a field
        let fields: Vec<&str> = row.iter().flat_map(|field| field.split_whitespace()).collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != INITIAL_CONDITIONS_COLUMNS {
            return Err(Error::shape("columns (mass x y z vx vy vz)", INITIAL_CONDITIONS_COLUMNS, fields.len()));
        }
        let mut values = [0.; INITIAL_CONDITIONS_COLUMNS];
        for (value, field) in values.iter_mut().zip(fields.iter()) {
            *value = field.parse::<f64>()
                        .map_err(|e| Error::InvalidParameter(format!("line {}: '{}' is not a number ({})", line, field, e)))?;
        }
        particles.push(Particle::new(values[0], Axes::try_from(&values[1..4])?, Axes::try_from(&values[4..7])?));
    }
    Ok(particles)
}

pub fn load(path: &Path) -> Result<Vec<Particle>> {
    let file = File::open(path)?;
    read(file)
}

pub fn write<W: Write>(writer: W, particles: &[Particle]) -> Result<()> {
    let mut table = WriterBuilder::new()
                        .delimiter(b' ')
                        .has_headers(false)
                        .from_writer(writer);
    for particle in particles.iter() {
        table.write_record(&[
            format!("{:e}", particle.mass),
            format!("{:e}", particle.position.x),
            format!("{:e}", particle.position.y),
            format!("{:e}", particle.position.z),
            format!("{:e}", particle.velocity.x),
            format!("{:e}", particle.velocity.y),
            format!("{:e}", particle.velocity.z),
        ])?;
    }
    table.flush()?;
    Ok(())
}
