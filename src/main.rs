#[macro_use]
extern crate orrery;
extern crate clap;
use clap::{Arg, ArgAction, Command};
use std::path::Path;
use std::process;
use std::time::Instant;
use orrery::logging::ConsoleProgress;
use orrery::{Case, Silent, TrajectoryDriver, VelocityVerlet};

fn main() {
    let matches = Command::new("Orrery")
                            .version(env!("CARGO_PKG_VERSION"))
                            .about("Direct N-body simulator for point masses under Newtonian gravity (velocity-Verlet integrator).")
                            .subcommand(Command::new("run")
                                    .about("Run a simulation")
                                    .arg(Arg::new("case_filename")
                                        .required(true)
                                        .index(1)
                                        .help("JSON case description"))
                                    .arg(Arg::new("trajectory_filename")
                                        .required(true)
                                        .index(2)
                                        .help("Trajectory output filename (.csv, .json or binary)"))
                                    .arg(Arg::new("silent")
                                        .short('s')
                                        .long("silent")
                                        .action(ArgAction::SetTrue)
                                        .help("Only print INFO/WARNING/ERROR messages"))
                                     )
                            .subcommand(Command::new("check")
                                    .about("Validate a case and print its conserved quantities")
                                    .arg(Arg::new("case_filename")
                                        .required(true)
                                        .index(1)
                                        .help("JSON case description"))
                                    )
                            .subcommand_required(true)
                            .arg_required_else_help(true)
                          .get_matches();

    let result = match matches.subcommand() {
        Some(("run", run_matches)) => {
            let case_filename = run_matches.get_one::<String>("case_filename").map(|s| s.as_str()).unwrap_or_default();
            let trajectory_filename = run_matches.get_one::<String>("trajectory_filename").map(|s| s.as_str()).unwrap_or_default();
            let silent_mode = run_matches.get_flag("silent");
            run(Path::new(case_filename), Path::new(trajectory_filename), silent_mode)
        },
        Some(("check", check_matches)) => {
            let case_filename = check_matches.get_one::<String>("case_filename").map(|s| s.as_str()).unwrap_or_default();
            check(Path::new(case_filename))
        },
        _ => unreachable!(),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}

fn load_case(case_path: &Path) -> orrery::Result<(Case, orrery::Ensemble)> {
    let case = Case::load(case_path)?;
    let ensemble = case.ensemble()?;
    ensemble.check_coincident()?;
    info!("Loaded {} particles from '{}'.", ensemble.n_particles(), case_path.display());
    Ok((case, ensemble))
}

fn run(case_path: &Path, trajectory_path: &Path, silent_mode: bool) -> orrery::Result<()> {
    let t1 = Instant::now();

    if trajectory_path.exists() {
        return Err(std::io::Error::new(std::io::ErrorKind::AlreadyExists, format!("File '{}' already exists.", trajectory_path.display())).into());
    }
    let (case, ensemble) = load_case(case_path)?;

    let time_evolution = case.time_evolution_seconds();
    let time_step = case.time_step_seconds();
    info!("Evolving for {} {} with a time step of {} {}.", case.time_evolution, case.units.time.symbol(), case.time_step, case.units.time.symbol());
    if case.softening > 0. {
        warning!("Gravity is softened with a length of {} m.", case.softening);
    }

    let gravity = case.gravity();
    let driver = TrajectoryDriver::with_integrator(VelocityVerlet::with_force_model(gravity));
    let trajectory = if silent_mode {
        driver.run_ensemble(&ensemble, time_evolution, time_step, &mut Silent)?
    } else {
        let mut progress = ConsoleProgress::new(time_step, case.units.time.in_si(), case.units.time.symbol());
        driver.run_ensemble(&ensemble, time_evolution, time_step, &mut progress)?
    };

    let energy_drift = trajectory.energy_drift(&gravity);
    if energy_drift.is_finite() {
        info!("Relative energy drift: {:0.3e}", energy_drift);
    } else {
        warning!("The total energy is not finite anymore, particles probably got too close to each other.");
    }

    orrery::output::write_trajectory(trajectory_path, &trajectory, &case.units)?;
    info!("Wrote {} time steps to '{}'.", trajectory.n_steps(), trajectory_path.display());
    info!("Execution time: {:0.3} seconds", t1.elapsed().as_secs_f64());
    Ok(())
}

fn check(case_path: &Path) -> orrery::Result<()> {
    let (case, ensemble) = load_case(case_path)?;
    let n_steps = orrery::trajectory::n_steps(case.time_evolution_seconds(), case.time_step_seconds())?;
    let (center_of_mass_position, center_of_mass_velocity) = ensemble.center_of_mass();
    info!("Time steps to record: {}", n_steps);
    info!("Total energy: {:e} J", ensemble.total_energy_with(&case.gravity()));
    info!("Total momentum: {:?} kg.m/s", ensemble.total_momentum());
    info!("Total angular momentum: {:e} kg.m^2/s", ensemble.total_angular_momentum().norm());
    info!("Center of mass: {:?} m moving at {:?} m/s", center_of_mass_position, center_of_mass_velocity);
    Ok(())
}
