use std::fs::File;
use std::io::{self, Write, BufWriter, BufReader};
use std::path::Path;
use super::trajectory::Trajectory;
use super::super::error::{Error, Result};
use super::super::units::Units;


////////////////////////////////////////////////////////////////////////////////
//- Dump functions
////////////////////////////////////////////////////////////////////////////////

/// Write a trajectory, the format is chosen by the file extension.
///
/// - `.csv`: one row per time step and particle, in the given units
/// - `.json`: the whole trajectory (S.I.), pretty printed
/// - anything else: the whole trajectory (S.I.) in bincode
///
/// An existing file is never overwritten.
pub fn write_trajectory(trajectory_path: &Path, trajectory: &Trajectory, units: &Units) -> Result<()> {
    if trajectory_path.exists() {
        return Err(io::Error::new(io::ErrorKind::AlreadyExists, format!("File '{}' already exists.", trajectory_path.display())).into());
    }

    // A BufWriter keeps an in-memory buffer and writes to the file in large,
    // infrequent batches instead of one system call per record.
    let mut writer = BufWriter::new(File::create(trajectory_path)?);

    match trajectory_path.extension().and_then(|e| e.to_str()) {
        Some("csv") => write_csv(&mut writer, trajectory, units)?,
        Some("json") => {
            let json_encoded = serde_json::to_string_pretty(trajectory)?;
            writer.write_all(json_encoded.as_bytes())?;
        },
        _ => bincode::serialize_into(&mut writer, trajectory)?,
    }
    writer.flush()?;
    Ok(())
}

pub fn write_csv<W: Write>(writer: W, trajectory: &Trajectory, units: &Units) -> Result<()> {
    let mut table = csv::Writer::from_writer(writer);
    let length = units.length.symbol();
    let velocity = units.velocity.symbol();
    table.write_record(&[
        format!("time [{}]", units.time.symbol()),
        "particle".to_string(),
        format!("x [{}]", length), format!("y [{}]", length), format!("z [{}]", length),
        format!("vx [{}]", velocity), format!("vy [{}]", velocity), format!("vz [{}]", velocity),
    ])?;
    for (step, time) in trajectory.times.iter().enumerate() {
        let current_time = units.time_from_si(*time);
        for particle in 0..trajectory.n_particles() {
            let position = units.position_from_si(trajectory.position(particle, step));
            let velocity = units.velocity_from_si(trajectory.velocity(particle, step));
            table.write_record(&[
                current_time.to_string(),
                particle.to_string(),
                position.x.to_string(), position.y.to_string(), position.z.to_string(),
                velocity.x.to_string(), velocity.y.to_string(), velocity.z.to_string(),
            ])?;
        }
    }
    table.flush()?;
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
//- Restore functions
////////////////////////////////////////////////////////////////////////////////

/// Read back a JSON or binary trajectory written by `write_trajectory`.
///
/// Dumps whose times, masses and histories disagree are rejected.
pub fn read_trajectory(trajectory_path: &Path) -> Result<Trajectory> {
    let reader = BufReader::new(File::open(trajectory_path)?);
    let trajectory: Trajectory = match trajectory_path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_reader(reader)?,
        Some("csv") => return Err(Error::InvalidParameter(format!("'{}' is a table for plotting, only JSON and binary trajectories can be restored", trajectory_path.display()))),
        _ => bincode::deserialize_from(reader)?,
    };
    trajectory.check_shapes()?;
    Ok(trajectory)
}
